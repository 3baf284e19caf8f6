use std::time::Duration;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use console::style;
use crate::pipeline::events::PipelineEvent;
use crate::pipeline::phase::{description, PHASES};
use crate::utils::formatting::format_duration;

/// Spinner on stderr that follows pipeline events while external commands run.
pub struct CheckProgress {
    bar: ProgressBar,
}

impl CheckProgress {
    pub fn new() -> Self {
        let bar = ProgressBar::with_draw_target(
            Some(PHASES.len() as u64),
            ProgressDrawTarget::stderr(),
        );
        if let Ok(template) = ProgressStyle::default_spinner()
            .template("  {spinner:.cyan} [{pos}/{len}] {msg} {elapsed:.dim}")
        {
            bar.set_style(template);
        }
        bar.set_message("Starting build check...");
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar }
    }

    pub fn handle_event(&mut self, event: &PipelineEvent) {
        match event {
            PipelineEvent::PipelineStarted { project_dir } => {
                self.bar.set_message(format!("Checking {}", project_dir));
            }
            PipelineEvent::PhaseStarted { phase, display_name } => {
                self.bar.set_message(format!("{}: {}", display_name, description(*phase)));
            }
            PipelineEvent::PhaseCompleted { display_name, findings, duration_ms, .. } => {
                self.bar.inc(1);
                self.bar.println(format!(
                    "  {} {} ({} finding(s), {})",
                    style("✓").green(),
                    display_name,
                    findings,
                    format_duration(*duration_ms),
                ));
            }
            PipelineEvent::PipelineCompleted { issues, duration_ms } => {
                self.bar.finish_and_clear();
                eprintln!(
                    "  {} Checks complete: {} issue(s) in {}",
                    style("✓").green().bold(),
                    issues,
                    format_duration(*duration_ms),
                );
            }
        }
    }
}

impl Default for CheckProgress {
    fn default() -> Self {
        Self::new()
    }
}
