use serde::{Deserialize, Serialize};

/// Severity of a finding, ordered from least to most severe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Severity {
    /// Warning and Critical findings mark the run as having issues.
    pub fn is_issue(&self) -> bool {
        !matches!(self, Severity::Info)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Critical => "critical",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Pipeline stage that produced a finding, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StageName {
    Build,
    BundleSize,
    PatternScan,
    Audit,
}

impl StageName {
    /// Position in the fixed stage order.
    pub fn rank(&self) -> u8 {
        match self {
            StageName::Build => 0,
            StageName::BundleSize => 1,
            StageName::PatternScan => 2,
            StageName::Audit => 3,
        }
    }
}

impl std::fmt::Display for StageName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Build => write!(f, "build"),
            Self::BundleSize => write!(f, "bundle-size"),
            Self::PatternScan => write!(f, "pattern-scan"),
            Self::Audit => write!(f, "audit"),
        }
    }
}

/// A single observation reported by one stage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Finding {
    pub stage: StageName,
    pub severity: Severity,
    pub message: String,
    /// Measured value behind the finding (size in KB, match count, score).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
}

impl Finding {
    pub fn new(stage: StageName, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            stage,
            severity,
            message: message.into(),
            value: None,
        }
    }

    pub fn info(stage: StageName, message: impl Into<String>) -> Self {
        Self::new(stage, Severity::Info, message)
    }

    pub fn warning(stage: StageName, message: impl Into<String>) -> Self {
        Self::new(stage, Severity::Warning, message)
    }

    pub fn critical(stage: StageName, message: impl Into<String>) -> Self {
        Self::new(stage, Severity::Critical, message)
    }

    pub fn with_value(mut self, value: f64) -> Self {
        self.value = Some(value);
        self
    }
}
