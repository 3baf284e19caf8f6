pub mod finding;
pub mod audit;
pub mod report;

pub use finding::*;
pub use audit::*;
pub use report::*;
