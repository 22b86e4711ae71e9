//! Task execution module
//!
//! This module handles the actual execution of tasks: running external
//! commands and walking the prerequisite chain of a requested task.

pub mod command;
pub mod runner;

pub use command::CommandExecutor;
pub use runner::{RunOptions, SandboxContext, TaskRunner};
