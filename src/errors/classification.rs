use super::types::CheckError;

impl CheckError {
    /// Stable error type name, used as a structured logging field.
    pub fn classify(&self) -> &'static str {
        match self {
            CheckError::Command(_) => "CommandError",
            CheckError::Timeout(_) => "CommandError",
            CheckError::ArtifactNotFound(_) => "ArtifactNotFoundError",
            CheckError::Parse(_) | CheckError::Json(_) => "ParseError",
            CheckError::Config(_) | CheckError::Yaml(_) => "ConfigError",
            CheckError::Pattern(_) => "PatternError",
            CheckError::Io(_) => "IoError",
            CheckError::Internal(_) => "InternalError",
        }
    }
}
