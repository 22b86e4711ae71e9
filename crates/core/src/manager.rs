//! High-level sandbox management interface
//!
//! This module provides the [`SandboxManager`], the primary interface for
//! the CLI. It resolves the target Python version and environment descriptor
//! once at construction, then exposes task listing, planning, and execution.
//!
//! ## Example
//!
//! ```rust,no_run
//! use sandbox_core::manager::{SandboxManager, SandboxManagerConfig};
//! use std::path::PathBuf;
//!
//! # async fn example() -> sandbox_core::types::SandboxResult<()> {
//! let manager = SandboxManager::new(SandboxManagerConfig {
//!     root: PathBuf::from("."),
//!     python_version: None,
//! })?;
//!
//! manager.run_task("bootstrap", None).await?;
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::path::PathBuf;

use petgraph::Graph;

use crate::environment::{detect_python_version, EnvDescriptor};
use crate::execution::runner::{RunOptions, SandboxContext, TaskRunner};
use crate::platform::HostOs;
use crate::results::{TaskGraphResult, TaskInfo, TaskListResult};
use crate::task_execution::{resolve_execution_plan, ExecutionPlan};
use crate::tasks::{self, get_task_color};
use crate::types::SandboxResult;

/// High-level manager that owns the run context for one managed repository
pub struct SandboxManager {
    ctx: SandboxContext,
}

/// Configuration for initializing a sandbox manager
pub struct SandboxManagerConfig {
    pub root: PathBuf,
    /// Python version override; probed from the host `python3` when absent
    pub python_version: Option<String>,
}

impl SandboxManager {
    /// Initialize a manager, resolving the Python version and environment
    /// descriptor once up front
    pub fn new(config: SandboxManagerConfig) -> SandboxResult<Self> {
        let python_version = match config.python_version {
            Some(version) => version,
            None => detect_python_version()?,
        };
        let env = EnvDescriptor::new(&python_version, HostOs::current());

        Ok(Self {
            ctx: SandboxContext {
                root: config.root,
                env,
            },
        })
    }

    /// The environment descriptor this manager operates on
    pub fn env(&self) -> &EnvDescriptor {
        &self.ctx.env
    }

    /// List every registered task in registry order
    pub fn list_tasks(&self) -> TaskListResult {
        let task_infos = tasks::REGISTRY
            .iter()
            .map(|spec| TaskInfo {
                name: spec.name.to_string(),
                description: spec.description.to_string(),
                prerequisites: spec.prerequisites.iter().map(|p| p.to_string()).collect(),
            })
            .collect();

        let mut task_colors = HashMap::new();
        for spec in tasks::REGISTRY {
            task_colors.insert(spec.name.to_string(), get_task_color(spec.name));
        }

        TaskListResult {
            tasks: task_infos,
            task_colors,
        }
    }

    /// Resolve the ordered execution plan for a task without running it
    pub fn get_execution_plan(&self, task_name: &str) -> SandboxResult<ExecutionPlan> {
        resolve_execution_plan(task_name)
    }

    /// Build the task dependency graph from the registry
    pub fn task_graph(&self) -> TaskGraphResult {
        let mut graph = Graph::<String, ()>::new();
        let mut node_indices = HashMap::new();

        for spec in tasks::REGISTRY {
            let node_index = graph.add_node(spec.name.to_string());
            node_indices.insert(spec.name, node_index);
        }

        for spec in tasks::REGISTRY {
            let from_node = node_indices[spec.name];
            for dep in spec.prerequisites {
                if let Some(&to_node) = node_indices.get(dep) {
                    // task -> prerequisite (the prerequisite runs first)
                    graph.add_edge(from_node, to_node, ());
                }
            }
        }

        TaskGraphResult { graph }
    }

    /// Execute a task with its full prerequisite chain
    pub async fn run_task(&self, task_name: &str, message: Option<&str>) -> SandboxResult<()> {
        let options = RunOptions {
            message: message.map(|m| m.to_string()),
        };
        TaskRunner::new(&self.ctx).run(task_name, &options).await
    }
}
