pub mod cli;
pub mod command;
pub mod config;
pub mod errors;
pub mod models;
pub mod pipeline;
pub mod reporting;
pub mod stages;
pub mod utils;
