//! Collection orchestrator
//!
//! Runs the enabled metric categories in a fixed order, decodes each raw
//! response with the matching parser, and publishes every (key, value)
//! pair to the sink. One category failing never blocks the others; a
//! partial metric set is always preferable to none.

use tracing::{debug, info, warn};

use crate::client::InfoTransport;
use crate::config::CollectorConfig;
use crate::metrics::{MetricSet, MetricSink};
use crate::parser::{parse_key_value, parse_latency, parse_namespaces, parse_sets};
use crate::utils::{CollectorError, Result};

/// Info queries issued by the orchestrator, one per category
pub const STATISTICS_QUERY: &str = "statistics";
pub const SETS_QUERY: &str = "sets";
pub const LATENCY_QUERY: &str = "latency:";
pub const NAMESPACES_QUERY: &str = "namespaces";

/// Per-namespace detail query
pub fn namespace_detail_query(namespace: &str) -> String {
    format!("namespace/{namespace}")
}

/// An independently toggleable metric category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Service,
    Sets,
    Latency,
    Namespaces,
}

impl Category {
    /// Collection order is fixed: service, sets, latency, namespaces
    pub const ALL: [Category; 4] = [
        Category::Service,
        Category::Sets,
        Category::Latency,
        Category::Namespaces,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Service => "service",
            Category::Sets => "sets",
            Category::Latency => "latency",
            Category::Namespaces => "namespaces",
        }
    }

    /// The fixed query string for this category
    pub fn query(&self) -> &'static str {
        match self {
            Category::Service => STATISTICS_QUERY,
            Category::Sets => SETS_QUERY,
            Category::Latency => LATENCY_QUERY,
            Category::Namespaces => NAMESPACES_QUERY,
        }
    }
}

/// Outcome of one collection pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionSummary {
    /// Categories that decoded and published
    pub categories_collected: u32,
    /// Categories skipped due to transport or decode failures
    pub categories_failed: u32,
    /// Total (key, value) pairs pushed to the sink
    pub metrics_published: u64,
}

/// Orchestrates one collection pass over an injected transport.
///
/// The transport is an `Option`: `None` models the protocol client being
/// unavailable, in which case a pass reports that once and issues zero
/// queries. No state is carried between passes.
pub struct InfoCollector<T: InfoTransport> {
    config: CollectorConfig,
    transport: Option<T>,
}

impl<T: InfoTransport> InfoCollector<T> {
    pub fn new(config: CollectorConfig, transport: Option<T>) -> Self {
        Self { config, transport }
    }

    /// Run one pass: query, decode, and publish each enabled category.
    pub fn collect(&mut self, sink: &mut dyn MetricSink) -> Result<CollectionSummary> {
        let transport = self
            .transport
            .as_mut()
            .ok_or(CollectorError::TransportUnavailable)?;

        let mut summary = CollectionSummary::default();
        for category in Category::ALL {
            if !self.config.enabled(category) {
                debug!(category = category.as_str(), "category disabled, skipping");
                continue;
            }
            match collect_category(transport, category) {
                Ok(metrics) => {
                    for (key, value) in metrics.iter() {
                        sink.publish(key, value);
                        summary.metrics_published += 1;
                    }
                    summary.categories_collected += 1;
                }
                Err(e) => {
                    warn!(
                        category = category.as_str(),
                        query = category.query(),
                        error = %e,
                        "category failed, continuing with remaining categories"
                    );
                    summary.categories_failed += 1;
                }
            }
        }
        info!(
            collected = summary.categories_collected,
            failed = summary.categories_failed,
            metrics = summary.metrics_published,
            "collection pass complete"
        );
        Ok(summary)
    }
}

/// Query and decode one category.
fn collect_category<T: InfoTransport>(
    transport: &mut T,
    category: Category,
) -> Result<MetricSet> {
    let raw = transport.query(category.query())?;
    let metrics = match category {
        Category::Service => parse_key_value(&raw, "service.")?,
        Category::Sets => parse_sets(&raw),
        Category::Latency => parse_latency(&raw)?,
        Category::Namespaces => {
            parse_namespaces(&raw, |ns| transport.query(&namespace_detail_query(ns)))?
        }
    };
    Ok(metrics)
}
