//! High-level task runner
//!
//! Coordinates prerequisite resolution, environment activation, and the
//! external commands behind each task body.

use std::collections::{HashSet, VecDeque};
use std::fs;
use std::path::{Path, PathBuf};

use colored::*;
use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::configs::projects::load_projects_config;
use crate::environment::{is_venv_active, EnvDescriptor};
use crate::execution::command::CommandExecutor;
use crate::tasks::{self, get_task_color, TaskAction, TaskSpec};
use crate::types::{SandboxError, SandboxResult};

/// Checkout directory and fixed remote of the companion Quark repository
const QUARK_DIR: &str = "Quark";
const QUARK_REMOTE: &str = "git@github.com:codes1gn/Quark.git";

/// Paths swept by the clean task, relative to the managed root
const ARTIFACT_GLOBS: &[&str] = &[
    "**/__pycache__",
    "**/.pytest_cache",
    "**/*.egg-info",
    "build",
    "dist",
];

/// Everything task bodies need, constructed once at the entry point
#[derive(Debug, Clone)]
pub struct SandboxContext {
    pub root: PathBuf,
    pub env: EnvDescriptor,
}

/// Options forwarded from the command line to task bodies
#[derive(Debug, Default, Clone)]
pub struct RunOptions {
    /// Commit message consumed by group-commit
    pub message: Option<String>,
}

/// High-level task runner that executes a task and its prerequisite chain
pub struct TaskRunner<'a> {
    ctx: &'a SandboxContext,
}

impl<'a> TaskRunner<'a> {
    pub fn new(ctx: &'a SandboxContext) -> Self {
        Self { ctx }
    }

    /// Run a task by name with its full prerequisite chain
    pub async fn run(&self, task_name: &str, options: &RunOptions) -> SandboxResult<()> {
        let mut completed = HashSet::new();
        self.run_with(task_name, options, &mut completed)
    }

    /// Execute a single task, prerequisites first; each task runs at most
    /// once per invocation, and the first failure aborts the chain
    fn run_with(
        &self,
        task_name: &str,
        options: &RunOptions,
        completed: &mut HashSet<&'static str>,
    ) -> SandboxResult<()> {
        let spec = tasks::find(task_name)
            .ok_or_else(|| SandboxError::Task(format!("Task '{}' not found", task_name)))?;

        if completed.contains(spec.name) {
            return Ok(());
        }

        for dep in spec.prerequisites {
            self.run_with(dep, options, completed)?;
        }

        completed.insert(spec.name);

        if spec.action == TaskAction::None {
            return Ok(());
        }

        let task_color = get_task_color(spec.name);
        println!();
        println!(
            "┌─ {}",
            format!("Running task '{}'", spec.name).color(task_color).bold()
        );
        println!("└─ {}", spec.description.bright_black());

        self.execute(spec, options)
    }

    /// Dispatch a task body with the activation wrapper applied when needed
    fn execute(&self, spec: &TaskSpec, options: &RunOptions) -> SandboxResult<()> {
        let executor = self.executor_for(spec);

        match spec.action {
            TaskAction::CreateEnv => self.create_env(&executor),
            TaskAction::ConfigurePoetry => self.configure_poetry(&executor),
            TaskAction::InstallDeps => self.install_deps(&executor),
            TaskAction::Format => self.format(&executor),
            TaskAction::Clean => self.clean(),
            TaskAction::GroupCommit => self.group_commit(&executor, options),
            TaskAction::PullQuark => self.pull_quark(&executor),
            TaskAction::BuildQuark => self.build_quark(&executor),
            TaskAction::TestQuark => self.test_quark(&executor),
            TaskAction::None => Ok(()),
        }
    }

    /// Apply the activation prefix when the task requires the virtualenv and
    /// none is active; an already-active environment is used as-is
    fn executor_for(&self, spec: &TaskSpec) -> CommandExecutor {
        let executor = CommandExecutor::new(&self.ctx.root);

        if spec.needs_env && !is_venv_active() {
            let activate = self.ctx.env.activate_command();
            println!("Activating virtualenv: {}", activate);
            executor.with_prefix(&activate)
        } else {
            executor
        }
    }

    fn create_env(&self, executor: &CommandExecutor) -> SandboxResult<()> {
        let env = &self.ctx.env;
        executor.run(&format!("python{} -m venv {}", env.python_version, env.name))?;
        println!("Virtualenv '{}' created.", env.name);
        Ok(())
    }

    fn configure_poetry(&self, executor: &CommandExecutor) -> SandboxResult<()> {
        executor.run(&format!(
            "python{} -m pip install poetry",
            self.ctx.env.python_version
        ))?;
        executor.run("poetry config virtualenvs.create false")?;
        println!("Poetry installed and configured to reuse the active environment.");
        Ok(())
    }

    fn install_deps(&self, executor: &CommandExecutor) -> SandboxResult<()> {
        executor.run("poetry install --no-root")?;
        println!("Project dependencies installed.");
        Ok(())
    }

    fn format(&self, executor: &CommandExecutor) -> SandboxResult<()> {
        executor.run("black .")?;
        println!("Source files reformatted.");
        Ok(())
    }

    /// Remove the virtualenv directory and swept build artifacts; absent
    /// paths are not an error
    fn clean(&self) -> SandboxResult<()> {
        let env_dir = self.ctx.root.join(&self.ctx.env.name);
        if env_dir.exists() {
            fs::remove_dir_all(&env_dir)?;
            println!("Removed virtualenv '{}'.", self.ctx.env.name);
        }

        let removed = sweep_artifacts(&self.ctx.root)?;
        if removed > 0 {
            println!("Removed {} build artifact path(s).", removed);
        }
        Ok(())
    }

    fn group_commit(&self, executor: &CommandExecutor, options: &RunOptions) -> SandboxResult<()> {
        let message = options.message.as_deref().ok_or_else(|| {
            SandboxError::Task("group-commit requires a commit message (-m)".to_string())
        })?;

        // Resolve the subproject list before any git command runs
        let config = load_projects_config(&self.ctx.root)?;

        commit_and_push(executor, message)?;
        for entry in &config.projects {
            let project_executor = executor.in_dir(entry.dir());
            commit_and_push(&project_executor, message)?;
            println!("Pushed '{}'.", entry.name());
        }
        Ok(())
    }

    fn pull_quark(&self, executor: &CommandExecutor) -> SandboxResult<()> {
        if self.ctx.root.join(QUARK_DIR).exists() {
            println!("Quark project already exists.");
            return Ok(());
        }

        executor.run(&format!("git clone {}", QUARK_REMOTE))?;
        println!("Quark project cloned.");
        Ok(())
    }

    fn build_quark(&self, executor: &CommandExecutor) -> SandboxResult<()> {
        executor.in_dir(QUARK_DIR).run("poetry install --no-venv")?;
        println!("Quark project built.");
        Ok(())
    }

    fn test_quark(&self, executor: &CommandExecutor) -> SandboxResult<()> {
        executor.in_dir(QUARK_DIR).run("poetry run pytest")?;
        println!("Quark tests completed.");
        Ok(())
    }
}

/// Stage, commit, and push the repository in the executor's directory scope
fn commit_and_push(executor: &CommandExecutor, message: &str) -> SandboxResult<()> {
    executor.run("git add .")?;
    executor.run(&format!(r#"git commit -m "{}""#, message))?;
    executor.run("git push")
}

/// Delete paths under `root` matching the artifact patterns, returning the
/// number of removed paths
fn sweep_artifacts(root: &Path) -> SandboxResult<usize> {
    let artifact_set = build_artifact_set()?;

    let mut removed = 0;
    let mut queue = VecDeque::new();
    queue.push_back(root.to_path_buf());

    while let Some(current_dir) = queue.pop_front() {
        let entries = match fs::read_dir(&current_dir) {
            Ok(entries) => entries,
            Err(_) => continue,
        };

        for entry in entries.flatten() {
            let path = entry.path();
            if path.file_name().is_some_and(|name| name == ".git") {
                continue;
            }

            let relative_path = path.strip_prefix(root).unwrap_or(&path);
            if artifact_set.is_match(relative_path) {
                if path.is_dir() {
                    fs::remove_dir_all(&path)?;
                } else {
                    fs::remove_file(&path)?;
                }
                removed += 1;
            } else if path.is_dir() {
                queue.push_back(path);
            }
        }
    }

    Ok(removed)
}

fn build_artifact_set() -> SandboxResult<GlobSet> {
    let mut builder = GlobSetBuilder::new();
    for pattern in ARTIFACT_GLOBS {
        let glob = Glob::new(pattern).map_err(|e| {
            SandboxError::Config(format!("Invalid artifact pattern '{}': {}", pattern, e))
        })?;
        builder.add(glob);
    }

    builder
        .build()
        .map_err(|e| SandboxError::Config(format!("Failed to build artifact matcher: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::HostOs;

    fn test_ctx(root: &Path) -> SandboxContext {
        SandboxContext {
            root: root.to_path_buf(),
            env: EnvDescriptor::new("3.11", HostOs::Posix),
        }
    }

    #[tokio::test]
    async fn test_clean_removes_env_dir_and_artifacts() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("sandbox_py311/bin")).unwrap();
        fs::create_dir_all(root.join("src/__pycache__")).unwrap();
        fs::create_dir_all(root.join("dist")).unwrap();
        fs::write(root.join("src/kept.py"), "x = 1\n").unwrap();

        let ctx = test_ctx(root);
        TaskRunner::new(&ctx)
            .run("clean", &RunOptions::default())
            .await
            .unwrap();

        assert!(!root.join("sandbox_py311").exists());
        assert!(!root.join("src/__pycache__").exists());
        assert!(!root.join("dist").exists());
        assert!(root.join("src/kept.py").exists());
    }

    #[tokio::test]
    async fn test_clean_is_a_noop_when_nothing_exists() {
        let temp_dir = tempfile::tempdir().unwrap();
        let ctx = test_ctx(temp_dir.path());

        TaskRunner::new(&ctx)
            .run("clean", &RunOptions::default())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_pull_quark_skips_existing_checkout() {
        let temp_dir = tempfile::tempdir().unwrap();
        fs::create_dir(temp_dir.path().join(QUARK_DIR)).unwrap();

        let ctx = test_ctx(temp_dir.path());
        // no clone command is issued, so this succeeds without network access
        TaskRunner::new(&ctx)
            .run("pull-quark", &RunOptions::default())
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_group_commit_requires_a_message() {
        let temp_dir = tempfile::tempdir().unwrap();
        let ctx = test_ctx(temp_dir.path());

        let err = TaskRunner::new(&ctx)
            .run("group-commit", &RunOptions::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("commit message"));
    }

    #[tokio::test]
    async fn test_group_commit_aborts_before_git_without_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let ctx = test_ctx(temp_dir.path());
        let options = RunOptions {
            message: Some("fix bug".to_string()),
        };

        let err = TaskRunner::new(&ctx)
            .run("group-commit", &options)
            .await
            .unwrap_err();
        assert!(matches!(err, SandboxError::Config(_)));
    }

    #[tokio::test]
    async fn test_unknown_task_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let ctx = test_ctx(temp_dir.path());

        let err = TaskRunner::new(&ctx)
            .run("deploy", &RunOptions::default())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_sweep_matches_nested_egg_info() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join("pkg/demo.egg-info")).unwrap();

        let removed = sweep_artifacts(root).unwrap();
        assert_eq!(removed, 1);
        assert!(!root.join("pkg/demo.egg-info").exists());
    }

    #[test]
    fn test_sweep_leaves_git_dir_alone() {
        let temp_dir = tempfile::tempdir().unwrap();
        let root = temp_dir.path();
        fs::create_dir_all(root.join(".git/build")).unwrap();

        let removed = sweep_artifacts(root).unwrap();
        assert_eq!(removed, 0);
        assert!(root.join(".git/build").exists());
    }
}
