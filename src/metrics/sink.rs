//! Metric publish boundary
//!
//! The orchestrator pushes each (key, value) pair to a sink as soon as it
//! is decoded. Publishing is fire-and-forget from the core's perspective.

/// Destination for decoded metrics.
pub trait MetricSink {
    fn publish(&mut self, key: &str, value: &str);
}

/// Streams each metric to stdout as a `key value` line.
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl MetricSink for ConsoleSink {
    fn publish(&mut self, key: &str, value: &str) {
        println!("{key} {value}");
    }
}

/// Buffers published pairs in order, for reporting and for tests.
#[derive(Debug, Default)]
pub struct RecordingSink {
    entries: Vec<(String, String)>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl MetricSink for RecordingSink {
    fn publish(&mut self, key: &str, value: &str) {
        self.entries.push((key.to_string(), value.to_string()));
    }
}
