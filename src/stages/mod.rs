pub mod build;
pub mod bundle;
pub mod scanner;
pub mod audit;
