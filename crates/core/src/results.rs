//! Result types for sandbox operations
//!
//! Output structures returned by the manager, kept separate from the
//! presentation layer in the CLI crate.

use std::collections::HashMap;

use colored::Color;
use petgraph::Graph;

/// Information about a registered task
#[derive(Debug, Clone)]
pub struct TaskInfo {
    pub name: String,
    pub description: String,
    pub prerequisites: Vec<String>,
}

/// Result of listing the task registry
#[derive(Debug)]
pub struct TaskListResult {
    pub tasks: Vec<TaskInfo>,
    pub task_colors: HashMap<String, Color>,
}

/// Result of building the task dependency graph
#[derive(Debug)]
pub struct TaskGraphResult {
    /// Edges point from a task to each of its prerequisites
    pub graph: Graph<String, ()>,
}
