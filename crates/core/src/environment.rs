//! Virtual-environment probing and naming
//!
//! The environment name and activation path are derived deterministically
//! from the Python version and the host OS family; nothing here mutates the
//! filesystem.

use std::env;
use std::path::PathBuf;
use std::process::Command;

use crate::platform::HostOs;
use crate::types::{SandboxError, SandboxResult};

/// Prefix shared by every sandbox-managed virtualenv directory
const VENV_PREFIX: &str = "sandbox_py";

/// Check if a virtual environment is active in the calling process
pub fn is_venv_active() -> bool {
    env::var_os("VIRTUAL_ENV").is_some()
}

/// Derived facts about a named virtual environment
///
/// Built once from the Python version and host family; never mutated.
#[derive(Debug, Clone)]
pub struct EnvDescriptor {
    pub python_version: String,
    pub name: String,
    pub activate_path: PathBuf,
}

impl EnvDescriptor {
    pub fn new(python_version: &str, os: HostOs) -> Self {
        let name = format!("{}{}", VENV_PREFIX, python_version.replace('.', ""));
        let activate_path = PathBuf::from(&name)
            .join(os.venv_scripts_dir())
            .join("activate");

        Self {
            python_version: python_version.to_string(),
            name,
            activate_path,
        }
    }

    /// Shell command that activates this environment
    pub fn activate_command(&self) -> String {
        format!("source {}", self.activate_path.display())
    }
}

/// Probe the host `python3` for its major.minor version
///
/// Used once at manager construction when no version override is given.
pub fn detect_python_version() -> SandboxResult<String> {
    let output = Command::new("python3")
        .arg("--version")
        .output()
        .map_err(|e| SandboxError::Env(format!("Failed to run 'python3 --version': {}", e)))?;

    if !output.status.success() {
        return Err(SandboxError::Env(format!(
            "'python3 --version' failed with exit code: {}",
            output.status.code().unwrap_or(-1)
        )));
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    // Python 2 printed the version banner on stderr
    let text = if stdout.trim().is_empty() {
        String::from_utf8_lossy(&output.stderr).into_owned()
    } else {
        stdout.into_owned()
    };

    parse_python_version(&text).ok_or_else(|| {
        SandboxError::Env(format!("Unrecognized python version output: {}", text.trim()))
    })
}

/// Extract "major.minor" from `python --version` output
pub fn parse_python_version(output: &str) -> Option<String> {
    let version = output.trim().strip_prefix("Python ")?;
    let mut parts = version.split('.');
    let major = parts.next()?;
    let minor = parts.next()?;
    if major.is_empty() || minor.is_empty() {
        return None;
    }
    Some(format!("{}.{}", major, minor))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_name_embeds_version_without_dots() {
        let env = EnvDescriptor::new("3.11", HostOs::Posix);
        assert_eq!(env.name, "sandbox_py311");
        assert_eq!(env.python_version, "3.11");
    }

    #[test]
    fn test_name_prefix_is_consistent_across_versions() {
        for version in ["2.7", "3.9", "3.12"] {
            let env = EnvDescriptor::new(version, HostOs::Posix);
            assert!(env.name.starts_with(VENV_PREFIX));
            assert!(!env.name.contains('.'));
        }
    }

    #[test]
    fn test_posix_activation_path() {
        let env = EnvDescriptor::new("3.11", HostOs::Posix);
        assert_eq!(env.activate_path, Path::new("sandbox_py311/bin/activate"));
    }

    #[test]
    fn test_windows_activation_path() {
        let env = EnvDescriptor::new("3.11", HostOs::Windows);
        assert_eq!(
            env.activate_path,
            Path::new("sandbox_py311").join("Scripts").join("activate")
        );
    }

    #[test]
    fn test_activate_command() {
        let env = EnvDescriptor::new("3.9", HostOs::Posix);
        assert_eq!(env.activate_command(), "source sandbox_py39/bin/activate");
    }

    #[test]
    fn test_parse_python_version_full() {
        assert_eq!(
            parse_python_version("Python 3.11.4\n"),
            Some("3.11".to_string())
        );
    }

    #[test]
    fn test_parse_python_version_two_components() {
        assert_eq!(parse_python_version("Python 3.9"), Some("3.9".to_string()));
    }

    #[test]
    fn test_parse_python_version_rejects_other_output() {
        assert_eq!(parse_python_version("pypy 7.3.12"), None);
        assert_eq!(parse_python_version(""), None);
        assert_eq!(parse_python_version("Python "), None);
    }
}
