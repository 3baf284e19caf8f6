use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;
use regex::Regex;
use tokio::sync::mpsc;
use crate::command::CommandRunner;
use crate::config::{resolve_path, CheckConfig};
use crate::errors::CheckError;
use crate::models::{Finding, Report, StageName};
use crate::reporting::synthesize;
use crate::stages::{audit, build, bundle, scanner};
use super::events::PipelineEvent;
use super::phase::display_name;
use tracing::{info, warn};

/// Runs Build, BundleCheck, PatternScan and Audit in order and merges their
/// findings. Every phase always runs; failures only degrade that phase.
pub struct Pipeline {
    config: CheckConfig,
    project_dir: PathBuf,
    runner: Arc<dyn CommandRunner>,
    event_tx: Option<mpsc::UnboundedSender<PipelineEvent>>,
}

impl Pipeline {
    pub fn new(config: CheckConfig, project_dir: &Path, runner: Arc<dyn CommandRunner>) -> Self {
        Self {
            config,
            project_dir: project_dir.to_path_buf(),
            runner,
            event_tx: None,
        }
    }

    /// Attach an event channel for streaming progress to a display.
    pub fn with_event_channel(mut self, tx: mpsc::UnboundedSender<PipelineEvent>) -> Self {
        self.event_tx = Some(tx);
        self
    }

    fn emit(&self, event: PipelineEvent) {
        if let Some(ref tx) = self.event_tx {
            let _ = tx.send(event);
        }
    }

    fn emit_phase_started(&self, phase: StageName) {
        self.emit(PipelineEvent::PhaseStarted {
            phase,
            display_name: display_name(phase).to_string(),
        });
    }

    fn emit_phase_completed(&self, phase: StageName, findings: &[Finding], duration_ms: u64) {
        self.emit(PipelineEvent::PhaseCompleted {
            phase,
            display_name: display_name(phase).to_string(),
            findings: findings.len(),
            duration_ms,
        });
    }

    pub async fn run(&self) -> Report {
        let start = Instant::now();
        info!(project = %self.project_dir.display(), "Starting build check");
        self.emit(PipelineEvent::PipelineStarted {
            project_dir: self.project_dir.display().to_string(),
        });

        // Build must finish before the bundle can be measured.
        self.emit_phase_started(StageName::Build);
        let phase_start = Instant::now();
        let build_findings = build::run_build(self.runner.as_ref(), &self.config.build).await;
        self.emit_phase_completed(StageName::Build, &build_findings, elapsed_ms(phase_start));

        // Bundle inspection and the source scan share no data and run side by side.
        self.emit_phase_started(StageName::BundleSize);
        self.emit_phase_started(StageName::PatternScan);
        let (bundle_findings, scan_findings) =
            tokio::join!(self.bundle_phase(), self.scan_phase());

        self.emit_phase_started(StageName::Audit);
        let phase_start = Instant::now();
        let result_path = resolve_path(&self.project_dir, &self.config.audit.result_path);
        let audit_outcome =
            audit::run_audit(self.runner.as_ref(), &self.config.audit, &result_path).await;
        self.emit_phase_completed(StageName::Audit, &audit_outcome.findings, elapsed_ms(phase_start));

        let report = synthesize(
            vec![build_findings, bundle_findings, scan_findings, audit_outcome.findings],
            audit_outcome.scores,
        );

        let duration_ms = elapsed_ms(start);
        info!(
            findings = report.findings.len(),
            issues = report.issue_count(),
            duration_ms,
            "Build check complete"
        );
        self.emit(PipelineEvent::PipelineCompleted {
            issues: report.issue_count(),
            duration_ms,
        });

        report
    }

    async fn bundle_phase(&self) -> Vec<Finding> {
        let glob = resolve_path(&self.project_dir, &self.config.bundle.artifact_glob)
            .to_string_lossy()
            .into_owned();
        let thresholds = self.config.bundle.clone();

        let phase_start = Instant::now();
        let findings = run_blocking(StageName::BundleSize, move || {
            bundle::inspect(&glob, &thresholds)
        })
        .await;
        self.emit_phase_completed(StageName::BundleSize, &findings, elapsed_ms(phase_start));
        findings
    }

    async fn scan_phase(&self) -> Vec<Finding> {
        let scan = self.config.scan.clone();
        let root = resolve_path(&self.project_dir, &scan.source_dir);

        let phase_start = Instant::now();
        let findings = match Regex::new(&scan.pattern) {
            Ok(pattern) => {
                run_blocking(StageName::PatternScan, move || {
                    scanner::scan(&root, &scan.file_patterns, &pattern, &scan.exclude_dirs)
                })
                .await
            }
            Err(e) => {
                let err = CheckError::Pattern(format!("'{}': {}", scan.pattern, e));
                warn!(error = %err, "Invalid scan pattern");
                vec![Finding::warning(
                    StageName::PatternScan,
                    format!("Could not check for debug statements: {}", err),
                )]
            }
        };
        self.emit_phase_completed(StageName::PatternScan, &findings, elapsed_ms(phase_start));
        findings
    }
}

/// Run a filesystem-bound stage on the blocking pool. A panic inside the
/// stage becomes a Warning for that stage.
async fn run_blocking<F>(stage: StageName, f: F) -> Vec<Finding>
where
    F: FnOnce() -> Vec<Finding> + Send + 'static,
{
    match tokio::task::spawn_blocking(f).await {
        Ok(findings) => findings,
        Err(e) => {
            let err = CheckError::Internal(format!("{} stage aborted: {}", stage, e));
            warn!(error = %err, "Stage task failed");
            vec![Finding::warning(stage, err.to_string())]
        }
    }
}

fn elapsed_ms(since: Instant) -> u64 {
    since.elapsed().as_millis() as u64
}
