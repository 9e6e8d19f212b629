//! Configuration module

pub mod cli;
pub mod collector_config;

pub use cli::{CliArgs, CliOutputFormat};
pub use collector_config::CollectorConfig;
