//! Strict `key=value` record decoder
//!
//! Decodes responses where records are `;`-separated `key=value` pairs,
//! as returned by the `statistics` and `namespace/<ns>` info queries.
//! This decoder is strict: a non-empty record without `=` fails the whole
//! response. The set and latency decoders are deliberately more lenient;
//! the asymmetry matches the established metric output and is covered by
//! tests.

use crate::metrics::MetricSet;
use crate::utils::ParseError;

/// Decode `;`-separated `key=value` records, prefixing each emitted key.
///
/// Empty segments (trailing separators) are skipped. Values that fail the
/// numeric filter are dropped. An empty response or a record with no `=`
/// is a decode error for the entire response.
pub fn parse_key_value(raw: &str, prefix: &str) -> Result<MetricSet, ParseError> {
    if raw.is_empty() {
        return Err(ParseError::EmptyResponse);
    }

    let mut metrics = MetricSet::new();
    for record in raw.split(';') {
        if record.is_empty() {
            continue;
        }
        let (key, value) = record
            .split_once('=')
            .ok_or_else(|| ParseError::MissingSeparator {
                record: record.to_string(),
            })?;
        metrics.insert_numeric(format!("{prefix}{key}"), value);
    }
    Ok(metrics)
}
