//! Configuration parsing for sandbox-managed repositories

pub mod projects;

pub use projects::{load_projects_config, parse_projects_config, ProjectEntry, ProjectsFileConfig};
