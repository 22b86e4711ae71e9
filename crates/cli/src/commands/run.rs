use anyhow::Result;
use colored::*;
use sandbox_core::manager::SandboxManager;

pub async fn execute(manager: &SandboxManager, task: &str, message: Option<&str>) -> Result<()> {
    println!("{} {}", "Running task".bold(), task.cyan());

    manager
        .run_task(task, message)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to run task: {}", e))?;

    println!();
    println!(
        "{} {}",
        "✓".green().bold(),
        "All tasks completed successfully!".green().bold()
    );

    Ok(())
}
