use thiserror::Error;

/// The main error type for sandbox operations
#[derive(Debug, Error)]
pub enum SandboxError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Task error: {0}")]
    Task(String),

    #[error("Environment error: {0}")]
    Env(String),
}

/// Result type alias for sandbox operations
pub type SandboxResult<T> = Result<T, SandboxError>;
