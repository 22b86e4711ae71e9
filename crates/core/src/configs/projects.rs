use std::path::{Path, PathBuf};

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::types::{SandboxError, SandboxResult};

/// File name of the subproject list consumed by group-commit
pub const PROJECTS_FILE: &str = "projects.yml";

/// A subproject entry: a bare name, or a name with an explicit directory
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum ProjectEntry {
    Name(String),
    Detailed { name: String, dir: Option<PathBuf> },
}

impl ProjectEntry {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) => name,
            Self::Detailed { name, .. } => name,
        }
    }

    /// Directory of the subproject relative to the managed root; defaults to
    /// the project name
    pub fn dir(&self) -> PathBuf {
        match self {
            Self::Name(name) => PathBuf::from(name),
            Self::Detailed { name, dir } => {
                dir.clone().unwrap_or_else(|| PathBuf::from(name))
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ProjectsFileConfig {
    pub name: Option<String>,
    pub description: Option<String>,
    pub projects: Vec<ProjectEntry>,
}

pub fn parse_projects_config(yaml_str: &str) -> SandboxResult<ProjectsFileConfig> {
    let config: ProjectsFileConfig = serde_yaml::from_str(yaml_str)?;
    Ok(config)
}

/// Read the subproject list from the managed root; no caching across runs
pub fn load_projects_config(root: &Path) -> SandboxResult<ProjectsFileConfig> {
    let path = root.join(PROJECTS_FILE);
    let content = std::fs::read_to_string(&path).map_err(|e| {
        SandboxError::Config(format!(
            "Failed to read projects config {}: {}",
            path.display(),
            e
        ))
    })?;

    parse_projects_config(&content).map_err(|e| {
        SandboxError::Config(format!(
            "Failed to parse projects config {}: {}",
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_names() {
        let config = parse_projects_config("projects:\n  - tools\n  - docs\n").unwrap();
        assert_eq!(config.projects.len(), 2);
        assert_eq!(config.projects[0].name(), "tools");
        assert_eq!(config.projects[0].dir(), PathBuf::from("tools"));
    }

    #[test]
    fn test_parse_detailed_entry_with_dir() {
        let yaml = "projects:\n  - name: docs\n    dir: documentation\n";
        let config = parse_projects_config(yaml).unwrap();
        assert_eq!(config.projects[0].name(), "docs");
        assert_eq!(config.projects[0].dir(), PathBuf::from("documentation"));
    }

    #[test]
    fn test_detailed_entry_dir_defaults_to_name() {
        let yaml = "projects:\n  - name: docs\n";
        let config = parse_projects_config(yaml).unwrap();
        assert_eq!(config.projects[0].dir(), PathBuf::from("docs"));
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let yaml = "projects: []\nextra: true\n";
        assert!(parse_projects_config(yaml).is_err());
    }

    #[test]
    fn test_malformed_yaml_is_an_error() {
        assert!(parse_projects_config("projects: [").is_err());
    }

    #[test]
    fn test_load_missing_file_is_an_error() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = load_projects_config(temp_dir.path()).unwrap_err();
        assert!(err.to_string().contains(PROJECTS_FILE));
    }

    #[test]
    fn test_load_from_disk() {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(
            temp_dir.path().join(PROJECTS_FILE),
            "projects:\n  - tools\n",
        )
        .unwrap();

        let config = load_projects_config(temp_dir.path()).unwrap();
        assert_eq!(config.projects.len(), 1);
    }
}
