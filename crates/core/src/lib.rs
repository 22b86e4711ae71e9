//! Sandbox Core Library
//!
//! Core library for the sandbox bootstrap tool: task registry, execution
//! planning, virtualenv naming, and the command execution engine behind the
//! `sandbox` CLI.
//!
//! ## Architecture
//!
//! - [`manager`] - High-level interface used by the CLI
//! - [`tasks`] - The fixed task registry and per-task label colors
//! - [`task_execution`] - Execution-plan resolution
//! - [`execution`] - Command execution and the task runner
//! - [`environment`] - Virtualenv probing, naming, and version detection
//! - [`configs`] - Configuration parsing for the subproject list
//! - [`platform`] - Host OS family detection
//! - [`results`] - Result types for manager operations
//! - [`types`] - Common error types and type aliases
//!
//! ## Usage
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
//! let plan = manager.get_execution_plan("bootstrap")?;
//! manager.run_task("bootstrap", None).await?;
//! # Ok(())
//! # }
//! ```

pub mod configs;
pub mod environment;
pub mod execution;
pub mod manager;
pub mod platform;
pub mod results;
pub mod task_execution;
pub mod tasks;
pub mod types;

// Re-export the main types for easier usage
pub use manager::{SandboxManager, SandboxManagerConfig};
pub use types::{SandboxError, SandboxResult};
