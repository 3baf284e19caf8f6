use std::collections::HashMap;
use std::path::Path;
use serde::Deserialize;
use crate::command::CommandRunner;
use crate::config::AuditConfig;
use crate::errors::CheckError;
use crate::models::{AuditCategory, AuditScore, AuditScoreSet, Finding, Rating, StageName};
use tracing::{info, warn};

/// Subset of the Lighthouse JSON report this tool reads.
#[derive(Debug, Deserialize)]
struct AuditResultFile {
    categories: HashMap<String, CategoryResult>,
}

#[derive(Debug, Deserialize)]
struct CategoryResult {
    /// 0-1; Lighthouse writes null when a category errored.
    score: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditOutcome {
    pub findings: Vec<Finding>,
    pub scores: Option<AuditScoreSet>,
}

impl AuditOutcome {
    fn failed(finding: Finding) -> Self {
        Self {
            findings: vec![finding],
            scores: None,
        }
    }
}

pub fn threshold_for(category: AuditCategory, config: &AuditConfig) -> f64 {
    match category {
        AuditCategory::Performance => config.performance_good,
        AuditCategory::Accessibility => config.accessibility_good,
        AuditCategory::BestPractices => config.best_practices_good,
        AuditCategory::Seo => config.seo_good,
    }
}

pub fn classify_score(category: AuditCategory, score: f64, config: &AuditConfig) -> Rating {
    if score >= threshold_for(category, config) {
        Rating::Good
    } else {
        Rating::NeedsAttention
    }
}

/// Run the audit command, then read its JSON result file.
pub async fn run_audit(
    runner: &dyn CommandRunner,
    config: &AuditConfig,
    result_path: &Path,
) -> AuditOutcome {
    info!(command = %config.command, "Running performance audit");

    if let Err(e) = runner.run(&config.command, config.timeout()).await {
        warn!(error_type = e.classify(), error = %e, "Audit command failed");
        return AuditOutcome::failed(Finding::warning(
            StageName::Audit,
            format!("Audit skipped, command failed: {}", e),
        ));
    }

    let content = match tokio::fs::read_to_string(result_path).await {
        Ok(c) => c,
        Err(e) => {
            warn!(path = %result_path.display(), error = %e, "Audit result unreadable");
            return AuditOutcome::failed(Finding::warning(
                StageName::Audit,
                format!("Could not parse audit results: {}: {}", result_path.display(), e),
            ));
        }
    };

    match parse_audit_result(&content, config) {
        Ok(outcome) => outcome,
        Err(e) => {
            warn!(error_type = e.classify(), error = %e, "Audit result invalid");
            AuditOutcome::failed(Finding::warning(
                StageName::Audit,
                format!("Could not parse audit results: {}", e),
            ))
        }
    }
}

/// Parse a result document. An unreadable document is an error; a missing or
/// malformed category only produces a Warning for that category.
pub fn parse_audit_result(content: &str, config: &AuditConfig) -> Result<AuditOutcome, CheckError> {
    let file: AuditResultFile = serde_json::from_str(content)
        .map_err(|e| CheckError::Parse(format!("invalid audit JSON: {}", e)))?;

    let mut findings = Vec::new();
    let mut scores = Vec::new();

    for category in AuditCategory::ALL {
        let raw = file.categories.get(category.key()).and_then(|c| c.score);
        let fraction = match raw {
            Some(s) if (0.0..=1.0).contains(&s) => s,
            Some(s) => {
                findings.push(Finding::warning(
                    StageName::Audit,
                    format!("Could not read {} score: {} is outside 0-1", category.display_name(), s),
                ));
                continue;
            }
            None => {
                findings.push(Finding::warning(
                    StageName::Audit,
                    format!("Could not read {} score from audit results", category.display_name()),
                ));
                continue;
            }
        };

        let score = (fraction * 100.0).round();
        let rating = classify_score(category, score, config);
        if rating == Rating::NeedsAttention {
            findings.push(
                Finding::warning(
                    StageName::Audit,
                    format!(
                        "{} score {}/100 needs attention (target {})",
                        category.display_name(),
                        score,
                        threshold_for(category, config)
                    ),
                )
                .with_value(score),
            );
        }
        scores.push(AuditScore { category, score, rating });
    }

    info!(categories = scores.len(), "Parsed audit results");

    Ok(AuditOutcome {
        findings,
        scores: if scores.is_empty() { None } else { Some(AuditScoreSet { scores }) },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Severity;

    fn doc(perf: f64, a11y: f64, bp: f64, seo: f64) -> String {
        serde_json::json!({
            "categories": {
                "performance": { "score": perf },
                "accessibility": { "score": a11y },
                "best-practices": { "score": bp },
                "seo": { "score": seo }
            }
        })
        .to_string()
    }

    #[test]
    fn test_all_categories_good() {
        let config = AuditConfig::default();
        let outcome = parse_audit_result(&doc(0.92, 0.95, 0.91, 0.99), &config).unwrap();
        assert!(outcome.findings.is_empty());
        let scores = outcome.scores.unwrap();
        assert_eq!(scores.len(), 4);
        assert!(scores.scores.iter().all(|s| s.rating == Rating::Good));
        assert_eq!(scores.get(AuditCategory::Performance).unwrap().score, 92.0);
    }

    #[test]
    fn test_best_practices_below_ninety_needs_attention() {
        let config = AuditConfig::default();
        let outcome = parse_audit_result(&doc(0.92, 0.95, 0.88, 0.99), &config).unwrap();
        let scores = outcome.scores.unwrap();
        assert_eq!(scores.get(AuditCategory::Performance).unwrap().rating, Rating::Good);
        assert_eq!(scores.get(AuditCategory::Accessibility).unwrap().rating, Rating::Good);
        assert_eq!(scores.get(AuditCategory::Seo).unwrap().rating, Rating::Good);
        assert_eq!(scores.get(AuditCategory::BestPractices).unwrap().rating, Rating::NeedsAttention);
        assert_eq!(outcome.findings.len(), 1);
        assert_eq!(outcome.findings[0].value, Some(88.0));
    }

    #[test]
    fn test_performance_is_judged_leniently() {
        let config = AuditConfig::default();
        assert_eq!(classify_score(AuditCategory::Performance, 80.0, &config), Rating::Good);
        assert_eq!(classify_score(AuditCategory::Performance, 79.0, &config), Rating::NeedsAttention);
        assert_eq!(classify_score(AuditCategory::Seo, 85.0, &config), Rating::NeedsAttention);
        assert_eq!(classify_score(AuditCategory::Accessibility, 90.0, &config), Rating::Good);
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let result = parse_audit_result("not json", &AuditConfig::default());
        assert!(matches!(result, Err(CheckError::Parse(_))));
    }

    #[test]
    fn test_missing_categories_map_is_parse_error() {
        let result = parse_audit_result(r#"{"lighthouseVersion":"12.0.0"}"#, &AuditConfig::default());
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_category_reported_individually() {
        let content = r#"{"categories":{"performance":{"score":0.5},"seo":{"score":null}}}"#;
        let outcome = parse_audit_result(content, &AuditConfig::default()).unwrap();
        let scores = outcome.scores.unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores.get(AuditCategory::Performance).unwrap().rating, Rating::NeedsAttention);
        // performance below target + three unreadable categories
        assert_eq!(outcome.findings.len(), 4);
        assert!(outcome.findings.iter().all(|f| f.severity == Severity::Warning));
        assert!(outcome.findings.iter().any(|f| f.message.contains("SEO")));
    }

    #[test]
    fn test_out_of_range_score() {
        let outcome = parse_audit_result(&doc(1.5, 0.95, 0.95, 0.95), &AuditConfig::default()).unwrap();
        assert_eq!(outcome.scores.unwrap().len(), 3);
        assert!(outcome.findings[0].message.contains("outside 0-1"));
    }
}
