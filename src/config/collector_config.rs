//! Runtime collector configuration

use std::time::Duration;

use super::cli::CliArgs;
use crate::collector::Category;

/// Configuration for one collection pass.
///
/// Category toggles are independent and all default to enabled.
#[derive(Debug, Clone)]
pub struct CollectorConfig {
    pub host: String,
    pub port: u16,
    pub timeout: Duration,
    pub service_stats: bool,
    pub set_stats: bool,
    pub latency_stats: bool,
    pub namespace_stats: bool,
}

impl Default for CollectorConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 3000,
            timeout: Duration::from_secs(5),
            service_stats: true,
            set_stats: true,
            latency_stats: true,
            namespace_stats: true,
        }
    }
}

impl CollectorConfig {
    pub fn from_cli(args: &CliArgs) -> Self {
        Self {
            host: args.host.clone(),
            port: args.port,
            timeout: Duration::from_millis(args.timeout_ms),
            service_stats: !args.skip_service_stats,
            set_stats: !args.skip_set_stats,
            latency_stats: !args.skip_latency_stats,
            namespace_stats: !args.skip_namespace_stats,
        }
    }

    /// Whether a category is enabled for this pass
    pub fn enabled(&self, category: Category) -> bool {
        match category {
            Category::Service => self.service_stats,
            Category::Sets => self.set_stats,
            Category::Latency => self.latency_stats,
            Category::Namespaces => self.namespace_stats,
        }
    }
}
