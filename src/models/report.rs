use serde::{Deserialize, Serialize};
use super::audit::AuditScoreSet;
use super::finding::{Finding, Severity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub findings: Vec<Finding>,
    pub audit_scores: Option<AuditScoreSet>,
    pub has_issues: bool,
}

impl Report {
    pub fn issue_count(&self) -> usize {
        self.findings.iter().filter(|f| f.severity.is_issue()).count()
    }

    pub fn count_by_severity(&self, severity: Severity) -> usize {
        self.findings.iter().filter(|f| f.severity == severity).count()
    }
}
