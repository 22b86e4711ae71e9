//! Task registry and color management
//!
//! The registry is the fixed, hand-authored set of operations the sandbox
//! tool can run. Each task declares the prerequisites that must execute
//! before its body and whether its commands must run inside the activated
//! virtualenv.

use colored::Color;

/// Executable body of a registered task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskAction {
    CreateEnv,
    ConfigurePoetry,
    InstallDeps,
    Format,
    Clean,
    GroupCommit,
    PullQuark,
    BuildQuark,
    TestQuark,
    /// Alias tasks carry their behavior entirely in prerequisites
    None,
}

/// A named, invocable unit of work with declared prerequisites
#[derive(Debug, Clone, Copy)]
pub struct TaskSpec {
    pub name: &'static str,
    pub description: &'static str,
    /// Prerequisite task names, in execution order
    pub prerequisites: &'static [&'static str],
    pub action: TaskAction,
    /// Whether the body's commands must run inside the activated virtualenv
    pub needs_env: bool,
}

/// The full task registry, in display order
pub const REGISTRY: &[TaskSpec] = &[
    TaskSpec {
        name: "create-env",
        description: "Create the project virtual environment",
        prerequisites: &[],
        action: TaskAction::CreateEnv,
        needs_env: false,
    },
    TaskSpec {
        name: "configure-poetry",
        description: "Install Poetry and disable its own virtualenv management",
        prerequisites: &["create-env"],
        action: TaskAction::ConfigurePoetry,
        needs_env: true,
    },
    TaskSpec {
        name: "install-deps",
        description: "Install project dependencies with Poetry",
        prerequisites: &["create-env", "configure-poetry"],
        action: TaskAction::InstallDeps,
        needs_env: true,
    },
    TaskSpec {
        name: "bootstrap",
        description: "Create the virtualenv, configure Poetry, and install dependencies",
        prerequisites: &["create-env", "configure-poetry", "install-deps"],
        action: TaskAction::None,
        needs_env: false,
    },
    TaskSpec {
        name: "format",
        description: "Reformat source files in place",
        prerequisites: &[],
        action: TaskAction::Format,
        needs_env: false,
    },
    TaskSpec {
        name: "clean",
        description: "Delete the virtualenv and build artifacts",
        prerequisites: &[],
        action: TaskAction::Clean,
        needs_env: false,
    },
    TaskSpec {
        name: "group-commit",
        description: "Stage, commit, and push the main repo and each subproject",
        prerequisites: &[],
        action: TaskAction::GroupCommit,
        needs_env: false,
    },
    TaskSpec {
        name: "pull-quark",
        description: "Clone the Quark repository if not already present",
        prerequisites: &[],
        action: TaskAction::PullQuark,
        needs_env: true,
    },
    TaskSpec {
        name: "build-quark",
        description: "Install Quark's dependencies without creating a new virtualenv",
        prerequisites: &[],
        action: TaskAction::BuildQuark,
        needs_env: false,
    },
    TaskSpec {
        name: "test-quark",
        description: "Run the Quark test suite",
        prerequisites: &[],
        action: TaskAction::TestQuark,
        needs_env: false,
    },
    TaskSpec {
        name: "all",
        description: "Bootstrap, then pull, build, and test Quark",
        prerequisites: &["bootstrap", "pull-quark", "build-quark", "test-quark"],
        action: TaskAction::None,
        needs_env: false,
    },
];

/// Look up a task by name
pub fn find(name: &str) -> Option<&'static TaskSpec> {
    REGISTRY.iter().find(|spec| spec.name == name)
}

/// Get a consistent color for a task name
pub fn get_task_color(task_name: &str) -> Color {
    let hash = task_name
        .bytes()
        .fold(0u64, |acc, b| acc.wrapping_mul(31).wrapping_add(b as u64));

    // Label palette kept away from the red/yellow/green status colors
    let colors = [
        Color::TrueColor {
            r: 147,
            g: 112,
            b: 219,
        },
        Color::TrueColor {
            r: 64,
            g: 224,
            b: 208,
        },
        Color::TrueColor {
            r: 255,
            g: 140,
            b: 0,
        },
        Color::TrueColor {
            r: 199,
            g: 21,
            b: 133,
        },
        Color::TrueColor {
            r: 72,
            g: 209,
            b: 204,
        },
        Color::TrueColor {
            r: 138,
            g: 43,
            b: 226,
        },
    ];

    colors[(hash % colors.len() as u64) as usize]
}
