use anyhow::Result;
use colored::*;
use sandbox_core::manager::SandboxManager;

pub fn execute(manager: &SandboxManager) -> Result<()> {
    let result = manager.list_tasks();

    println!("{}", "Tasks".bold().underline());

    if result.tasks.is_empty() {
        println!("  {}", "No tasks registered".dimmed());
        return Ok(());
    }

    for task in &result.tasks {
        let color = result
            .task_colors
            .get(&task.name)
            .copied()
            .unwrap_or(Color::White);

        println!(
            "{} {}",
            task.name.color(color).bold(),
            task.description.dimmed()
        );
        if !task.prerequisites.is_empty() {
            println!(
                "  {} {}",
                "after:".bright_black(),
                task.prerequisites.join(", ").bright_black()
            );
        }
    }

    Ok(())
}
