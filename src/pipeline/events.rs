use crate::models::StageName;

/// Messages sent from the pipeline to a progress display.
#[derive(Debug, Clone)]
pub enum PipelineEvent {
    PipelineStarted {
        project_dir: String,
    },
    PhaseStarted {
        phase: StageName,
        display_name: String,
    },
    PhaseCompleted {
        phase: StageName,
        display_name: String,
        findings: usize,
        duration_ms: u64,
    },
    PipelineCompleted {
        issues: usize,
        duration_ms: u64,
    },
}
