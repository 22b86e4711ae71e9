use anyhow::Result;
use colored::*;
use sandbox_core::manager::SandboxManager;

pub fn execute(manager: &SandboxManager, task: &str) -> Result<()> {
    println!("{} {}", "Execution plan for".bold(), task.cyan());

    let plan = manager
        .get_execution_plan(task)
        .map_err(|e| anyhow::anyhow!("Failed to get execution plan: {}", e))?;

    println!("\n{}:", "Execution order".bold());
    for (i, step) in plan.steps.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }

    Ok(())
}
