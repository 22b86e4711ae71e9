//! Execution planning
//!
//! Resolves the ordered step list for a task invocation before anything
//! runs: prerequisites expand depth-first in declared order, and each task
//! appears exactly once per invocation.

use crate::tasks;
use crate::types::{SandboxError, SandboxResult};

/// Result of resolving the ordered steps for a task invocation
#[derive(Debug, Clone)]
pub struct ExecutionPlan {
    pub task_name: String,
    /// Every task that will run, prerequisites first, the requested task last
    pub steps: Vec<String>,
}

/// Resolve the full step order for a task
pub fn resolve_execution_plan(task_name: &str) -> SandboxResult<ExecutionPlan> {
    let mut steps = Vec::new();
    collect_steps(task_name, &mut steps)?;

    Ok(ExecutionPlan {
        task_name: task_name.to_string(),
        steps,
    })
}

fn collect_steps(task_name: &str, steps: &mut Vec<String>) -> SandboxResult<()> {
    let spec = tasks::find(task_name)
        .ok_or_else(|| SandboxError::Task(format!("Task '{}' not found", task_name)))?;

    if steps.iter().any(|step| step == spec.name) {
        return Ok(());
    }

    for dep in spec.prerequisites {
        collect_steps(dep, steps)?;
    }

    steps.push(spec.name.to_string());
    Ok(())
}
