use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sandbox_core::manager::{SandboxManager, SandboxManagerConfig};

mod commands;

/// Sandbox - developer environment bootstrap tool
#[derive(Parser)]
#[command(name = "sandbox")]
#[command(about = "Bootstrap and maintain the project's Python development environment")]
#[command(version)]
struct Cli {
    /// Path to the managed repository root (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    root: PathBuf,

    /// Python version to target (defaults to the host python3)
    #[arg(long)]
    python_version: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered tasks
    List,
    /// Show the execution order for a task without running it
    Plan {
        /// Task name
        task: String,
    },
    /// Run a task with its prerequisite chain
    Run {
        /// Task name
        task: String,
        /// Commit message (required by group-commit)
        #[arg(short, long)]
        message: Option<String>,
    },
    /// Show the task dependency graph
    Graph,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let manager = SandboxManager::new(SandboxManagerConfig {
        root: cli.root,
        python_version: cli.python_version,
    })
    .map_err(|e| anyhow::anyhow!("Failed to initialize sandbox: {}", e))?;

    match cli.command {
        Commands::List => commands::list::execute(&manager),
        Commands::Plan { task } => commands::plan::execute(&manager, &task),
        Commands::Run { task, message } => {
            commands::run::execute(&manager, &task, message.as_deref()).await
        }
        Commands::Graph => commands::graph::execute(&manager),
    }
}
