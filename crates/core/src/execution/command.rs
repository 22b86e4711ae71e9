//! External command execution
//!
//! Runs shell commands with optional working-directory and shell-prefix
//! scoping. The child inherits the caller's stdio; nothing is captured
//! beyond the exit status.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::types::{SandboxError, SandboxResult};

/// Unified command executor that handles directory and prefix scoping
pub struct CommandExecutor {
    cwd: PathBuf,
    prefix: Option<String>,
}

impl CommandExecutor {
    pub fn new(root: &Path) -> Self {
        Self {
            cwd: root.to_path_buf(),
            prefix: None,
        }
    }

    /// Scope execution to a subdirectory of the current working directory
    pub fn in_dir(&self, dir: impl AsRef<Path>) -> Self {
        Self {
            cwd: self.cwd.join(dir),
            prefix: self.prefix.clone(),
        }
    }

    /// Prepend a shell prefix (e.g. an activation command) to every command
    pub fn with_prefix(&self, prefix: &str) -> Self {
        Self {
            cwd: self.cwd.clone(),
            prefix: Some(prefix.to_string()),
        }
    }

    /// Execute a single shell command, raising on non-zero exit
    pub fn run(&self, cmd: &str) -> SandboxResult<()> {
        let shell_cmd = match &self.prefix {
            Some(prefix) => format!("{} && {}", prefix, cmd),
            None => cmd.to_string(),
        };

        let status = Command::new("sh")
            .arg("-c")
            .arg(&shell_cmd)
            .current_dir(&self.cwd)
            .status()
            .map_err(|e| {
                SandboxError::Task(format!("Failed to execute command '{}': {}", cmd, e))
            })?;

        if !status.success() {
            return Err(SandboxError::Task(format!(
                "Command '{}' failed with exit code: {}",
                cmd,
                status.code().unwrap_or(-1)
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_succeeds_on_zero_exit() {
        let temp_dir = tempfile::tempdir().unwrap();
        let executor = CommandExecutor::new(temp_dir.path());
        executor.run("true").unwrap();
    }

    #[test]
    fn test_run_reports_exit_code() {
        let temp_dir = tempfile::tempdir().unwrap();
        let executor = CommandExecutor::new(temp_dir.path());
        let err = executor.run("exit 3").unwrap_err();
        assert!(err.to_string().contains("exit code: 3"));
    }

    #[test]
    fn test_prefix_runs_before_the_command() {
        let temp_dir = tempfile::tempdir().unwrap();
        let executor = CommandExecutor::new(temp_dir.path()).with_prefix("false");
        // a failing prefix must abort the whole command line
        assert!(executor.run("true").is_err());
    }

    #[test]
    fn test_in_dir_scopes_working_directory() {
        let temp_dir = tempfile::tempdir().unwrap();
        let sub = temp_dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("marker"), "x").unwrap();

        let executor = CommandExecutor::new(temp_dir.path()).in_dir("sub");
        executor.run("test -f marker").unwrap();
    }
}
