use anyhow::Result;
use colored::*;
use sandbox_core::manager::SandboxManager;

pub fn execute(manager: &SandboxManager) -> Result<()> {
    println!("{}", "Task Dependency Graph:".bold().underline());

    let result = manager.task_graph();
    let graph = &result.graph;

    for (node_index, node_weight) in graph.node_indices().zip(graph.node_weights()) {
        println!("{}", node_weight.blue().bold());

        let mut prerequisites = Vec::new();
        for neighbor in graph.neighbors(node_index) {
            if let Some(name) = graph.node_weight(neighbor) {
                prerequisites.push(name.clone());
            }
        }

        if !prerequisites.is_empty() {
            println!("  {} {}", "runs after:".dimmed(), prerequisites.join(", "));
        } else {
            println!("  {}", "no prerequisites".dimmed());
        }
        println!();
    }

    Ok(())
}
