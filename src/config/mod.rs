pub mod parser;
pub mod schema;
pub mod types;

pub use types::*;
pub use parser::{load_or_default, parse_config, validate_config};
