//! aerospike-collector library
//!
//! Polls an Aerospike node over the text info protocol, decodes the
//! semi-structured responses (statistics, sets, latency histograms,
//! namespaces), and republishes the numeric fields as flat dotted metrics.

pub mod client;
pub mod collector;
pub mod config;
pub mod metrics;
pub mod parser;
pub mod utils;

pub use client::{InfoConnection, InfoTransport};
pub use collector::{Category, CollectionSummary, InfoCollector};
pub use config::CollectorConfig;
pub use metrics::{MetricSet, MetricSink};
pub use utils::{CollectorError, ParseError, Result, TransportError};
