//! Platform detection for virtualenv layout resolution

use std::env;

/// Host operating-system family, as far as virtualenv layout is concerned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostOs {
    Posix,
    Windows,
}

impl HostOs {
    /// Detect the current host family
    pub fn current() -> Self {
        Self::from_os(env::consts::OS)
    }

    /// Create host family info from an OS string
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Self::Windows,
            _ => Self::Posix,
        }
    }

    /// Directory inside a virtualenv that holds the activation script
    pub fn venv_scripts_dir(self) -> &'static str {
        match self {
            Self::Windows => "Scripts",
            Self::Posix => "bin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_family() {
        let os = HostOs::from_os("windows");
        assert_eq!(os, HostOs::Windows);
        assert_eq!(os.venv_scripts_dir(), "Scripts");
    }

    #[test]
    fn test_linux_is_posix() {
        let os = HostOs::from_os("linux");
        assert_eq!(os, HostOs::Posix);
        assert_eq!(os.venv_scripts_dir(), "bin");
    }

    #[test]
    fn test_macos_is_posix() {
        assert_eq!(HostOs::from_os("macos"), HostOs::Posix);
    }

    #[test]
    fn test_unknown_os_falls_back_to_posix() {
        assert_eq!(HostOs::from_os("freebsd"), HostOs::Posix);
    }

    #[test]
    fn test_current_matches_compile_target() {
        let expected = if cfg!(target_os = "windows") {
            HostOs::Windows
        } else {
            HostOs::Posix
        };
        assert_eq!(HostOs::current(), expected);
    }
}
