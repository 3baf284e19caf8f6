use crate::models::{AuditScoreSet, Finding, Report};

/// Merge per-stage findings into the final report, in fixed stage order.
pub fn synthesize(finding_sets: Vec<Vec<Finding>>, audit_scores: Option<AuditScoreSet>) -> Report {
    let mut findings: Vec<Finding> = finding_sets.into_iter().flatten().collect();
    // Stable: findings within a stage keep the order the stage produced them in.
    findings.sort_by_key(|f| f.stage.rank());

    let has_issues = findings.iter().any(|f| f.severity.is_issue());

    Report {
        findings,
        audit_scores,
        has_issues,
    }
}
