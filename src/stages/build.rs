use crate::command::CommandRunner;
use crate::config::BuildConfig;
use crate::models::{Finding, StageName};
use crate::utils::truncation::first_line;
use tracing::{info, warn};

/// Run the production build. A failure never aborts the pipeline; it is
/// reported as a Warning and later stages run against whatever is on disk.
pub async fn run_build(runner: &dyn CommandRunner, config: &BuildConfig) -> Vec<Finding> {
    info!(command = %config.command, "Running production build");

    match runner.run(&config.command, config.timeout()).await {
        Ok(_) => vec![Finding::info(StageName::Build, "Production build completed")],
        Err(e) => {
            warn!(error_type = e.classify(), error = %e, "Build failed");
            vec![Finding::warning(
                StageName::Build,
                format!("Build failed, stage skipped: {}", first_line(&e.to_string())),
            )]
        }
    }
}
