pub mod events;
pub mod orchestrator;
pub mod phase;

pub use events::PipelineEvent;
pub use orchestrator::Pipeline;
