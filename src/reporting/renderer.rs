use console::style;

use crate::models::{AuditScoreSet, Finding, Rating, Report, Severity};
use crate::pipeline::phase::PHASES;
use crate::errors::CheckError;

/// Static advice printed after every report, independent of the findings.
pub const RECOMMENDATIONS: &[&str] = &[
    "Lazy-load routes and heavy components with React.lazy() and dynamic import()",
    "Serve images in modern formats (WebP/AVIF) with explicit width and height",
    "Enable gzip or brotli compression on the hosting platform",
    "Strip console statements from production builds",
    "Re-run the audit against a production preview, not the dev server",
];

/// Render the report as styled terminal text. Pure: the same report always
/// renders to the same string.
pub fn render_report(report: &Report) -> String {
    let mut out = String::new();

    for phase in PHASES {
        out.push_str(&format!(
            "\n{} {} {}\n",
            style("---").cyan().bold(),
            style(phase.display_name).cyan().bold(),
            style("---").cyan().bold(),
        ));

        let stage_findings: Vec<&Finding> =
            report.findings.iter().filter(|f| f.stage == phase.name).collect();
        if stage_findings.is_empty() {
            out.push_str(&format!("  {}\n", style("No findings").dim()));
        }
        for finding in stage_findings {
            out.push_str(&render_finding(finding));
            out.push('\n');
        }
    }

    if let Some(scores) = report.audit_scores.as_ref().filter(|s| !s.is_empty()) {
        out.push_str(&render_audit_scores(scores));
    }

    out.push_str(&format!("\n{}\n", style("Recommendations:").white().bold()));
    for rec in RECOMMENDATIONS {
        out.push_str(&format!("  {} {}\n", style("•").cyan(), rec));
    }

    out.push_str(&render_status_line(report));
    out
}

pub fn render_finding(finding: &Finding) -> String {
    format!(
        "  {} {}",
        render_severity_glyph(&finding.severity),
        match finding.severity {
            Severity::Critical => style(&finding.message).red().bold().to_string(),
            Severity::Warning => style(&finding.message).yellow().to_string(),
            Severity::Info => finding.message.clone(),
        }
    )
}

pub fn render_severity_glyph(severity: &Severity) -> String {
    match severity {
        Severity::Critical => style("[✗]").red().bold().to_string(),
        Severity::Warning => style("[⚠]").yellow().bold().to_string(),
        Severity::Info => style("[✓]").green().to_string(),
    }
}

fn render_audit_scores(scores: &AuditScoreSet) -> String {
    let mut out = format!("\n{}\n", style("Audit scores:").white().bold());
    for s in &scores.scores {
        let score = format!("{:>3}", s.score);
        let (score, label) = match s.rating {
            Rating::Good => (style(score).green().bold(), style("good").green()),
            Rating::NeedsAttention => (style(score).yellow().bold(), style("needs attention").yellow()),
        };
        out.push_str(&format!(
            "  {:<16} {} {}\n",
            s.category.display_name(),
            score,
            label,
        ));
    }
    out
}

fn render_status_line(report: &Report) -> String {
    if report.has_issues {
        format!(
            "\n{} {}\n",
            style("⚠ Build check finished with").yellow().bold(),
            style(format!("{} issue(s)", report.issue_count())).yellow().bold(),
        )
    } else {
        format!("\n{}\n", style("✓ All build checks passed").green().bold())
    }
}

pub fn render_json(report: &Report) -> Result<String, CheckError> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Header line with build metadata, printed by the CLI above the report.
pub fn render_header(generated_at: &str) -> String {
    let version = env!("CARGO_PKG_VERSION");
    let git_hash = option_env!("GIT_HASH").unwrap_or("dev");
    let build_ts = option_env!("BUILD_TIMESTAMP").unwrap_or("unknown");
    format!(
        "{} {} {}",
        style("Build quality check").white().bold(),
        style(format!("v{} ({}, built {})", version, git_hash, build_ts)).dim(),
        style(generated_at).dim(),
    )
}
