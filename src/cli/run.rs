use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc;
use crate::cli::commands::RunArgs;
use crate::command::ShellRunner;
use crate::config::load_or_default;
use crate::errors::CheckError;
use crate::pipeline::{Pipeline, PipelineEvent};
use crate::reporting::progress::CheckProgress;
use crate::reporting::renderer::render_header;
use crate::reporting::{render_json, render_report};

/// Run the whole pipeline and print the report. Detected issues never cause
/// an error; only configuration problems do.
pub async fn handle_run(
    args: RunArgs,
    config_path: Option<String>,
    show_progress: bool,
) -> Result<(), CheckError> {
    let project_dir = PathBuf::from(&args.project_dir);
    if !project_dir.is_dir() {
        return Err(CheckError::Config(format!(
            "Project directory not found: {}",
            project_dir.display()
        )));
    }

    let config = load_or_default(config_path.as_deref().map(Path::new), &project_dir).await?;
    let runner = Arc::new(ShellRunner::new(&project_dir));
    let mut pipeline = Pipeline::new(config, &project_dir, runner);

    let progress_task = if show_progress && !args.json {
        let (tx, mut rx) = mpsc::unbounded_channel::<PipelineEvent>();
        pipeline = pipeline.with_event_channel(tx);
        Some(tokio::spawn(async move {
            let mut progress = CheckProgress::new();
            while let Some(event) = rx.recv().await {
                progress.handle_event(&event);
            }
        }))
    } else {
        None
    };

    let report = pipeline.run().await;
    // Closes the event channel so the progress task drains and exits.
    drop(pipeline);
    if let Some(task) = progress_task {
        task.await
            .map_err(|e| CheckError::Internal(format!("Progress display failed: {}", e)))?;
    }

    if args.json {
        println!("{}", render_json(&report)?);
    } else {
        println!("{}", render_header(&chrono::Local::now().format("%Y-%m-%d %H:%M").to_string()));
        print!("{}", render_report(&report));
    }

    Ok(())
}
