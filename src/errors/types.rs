use thiserror::Error;

#[derive(Debug, Error)]
pub enum CheckError {
    #[error("Command failed: {0}")]
    Command(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("Artifact not found: {0}")]
    ArtifactNotFound(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid pattern: {0}")]
    Pattern(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}
