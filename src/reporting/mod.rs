pub mod synthesizer;
pub mod renderer;
pub mod progress;

pub use synthesizer::synthesize;
pub use renderer::{render_json, render_report};
