//! Metric collection types and output
//!
//! This module provides:
//! - `MetricSet`: the flat dotted-key -> numeric-value mapping produced by
//!   one decoder invocation
//! - `MetricSink`: the publish boundary each (key, value) pair is pushed to
//! - `MetricsReporter`: console/JSON/CSV rendering of a recorded pass

pub mod reporter;
pub mod sink;

pub use reporter::{MetricsReporter, OutputFormat};
pub use sink::{ConsoleSink, MetricSink, RecordingSink};

use std::collections::BTreeMap;

use crate::parser::is_numeric;

/// Flat mapping of dotted metric keys to numeric value strings.
///
/// Values are kept as the literal text from the wire; admission is gated by
/// the numeric filter, so every stored value parses as a finite float.
/// Duplicate keys are last-write-wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MetricSet {
    entries: BTreeMap<String, String>,
}

impl MetricSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a metric if its value passes the numeric filter.
    ///
    /// Returns true when the entry was stored. Non-numeric values are
    /// dropped silently; that is the filtering contract, not an error.
    pub fn insert_numeric(&mut self, key: impl Into<String>, value: &str) -> bool {
        if !is_numeric(value) {
            return false;
        }
        self.entries.insert(key.into(), value.to_string());
        true
    }

    /// Merge another set into this one (last-write-wins on key collisions)
    pub fn merge(&mut self, other: MetricSet) {
        self.entries.extend(other.entries);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl FromIterator<(String, String)> for MetricSet {
    /// Collect pre-validated pairs; non-numeric values are still dropped.
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        let mut set = MetricSet::new();
        for (k, v) in iter {
            set.insert_numeric(k, &v);
        }
        set
    }
}
