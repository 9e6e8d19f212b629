//! Command-line argument parsing
//!
//! Arguments are grouped by category. Defaults match the original
//! collector configuration: localhost:3000 with every metric category
//! enabled.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Collects metrics from an Aerospike node over the text info protocol
#[derive(Parser, Debug, Clone)]
#[command(name = "aerospike-collector")]
#[command(version, about, long_about = None)]
#[command(disable_help_flag = true)]
pub struct CliArgs {
    /// Print help information
    #[arg(long = "help", action = clap::ArgAction::Help)]
    help: (),

    // ===== Connection Options =====
    /// Aerospike hostname
    #[arg(short = 'h', long = "host", default_value = "localhost")]
    pub host: String,

    /// Aerospike info port
    #[arg(short = 'p', long = "port", default_value_t = 3000)]
    pub port: u16,

    /// Per-query timeout in milliseconds
    #[arg(long = "timeout-ms", default_value_t = 5000)]
    pub timeout_ms: u64,

    // ===== Category Toggles =====
    /// Skip node-wide service statistics
    #[arg(long = "skip-service-stats")]
    pub skip_service_stats: bool,

    /// Skip per-set statistics
    #[arg(long = "skip-set-stats")]
    pub skip_set_stats: bool,

    /// Skip latency histograms
    #[arg(long = "skip-latency-stats")]
    pub skip_latency_stats: bool,

    /// Skip per-namespace statistics
    #[arg(long = "skip-namespace-stats")]
    pub skip_namespace_stats: bool,

    // ===== Output Options =====
    /// Output format
    #[arg(long = "format", value_enum, default_value = "console")]
    pub format: CliOutputFormat,

    /// Write the pass to a file instead of stdout
    #[arg(short = 'o', long = "output")]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long = "verbose")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short = 'q', long = "quiet")]
    pub quiet: bool,
}

impl CliArgs {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// CLI-facing output format names
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CliOutputFormat {
    Console,
    Json,
    Csv,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = CliArgs::parse_from(["aerospike-collector"]);
        assert_eq!(args.host, "localhost");
        assert_eq!(args.port, 3000);
        assert_eq!(args.timeout_ms, 5000);
        assert!(!args.skip_service_stats);
        assert!(!args.skip_set_stats);
        assert!(!args.skip_latency_stats);
        assert!(!args.skip_namespace_stats);
        assert_eq!(args.format, CliOutputFormat::Console);
    }

    #[test]
    fn test_short_host_flag() {
        let args = CliArgs::parse_from(["aerospike-collector", "-h", "db1.example.com"]);
        assert_eq!(args.host, "db1.example.com");
    }

    #[test]
    fn test_skip_flags() {
        let args = CliArgs::parse_from([
            "aerospike-collector",
            "--skip-latency-stats",
            "--skip-set-stats",
        ]);
        assert!(args.skip_latency_stats);
        assert!(args.skip_set_stats);
        assert!(!args.skip_service_stats);
    }
}
