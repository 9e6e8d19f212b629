//! Latency histogram decoder
//!
//! The `latency:` info response flattens two-row histograms into one
//! `;`-separated stream: a header record `type:bucket1,bucket2,...`
//! followed by a data record `timestamp,val1,val2,...` whose values align
//! positionally with the header buckets. Index 0 of both rows (the
//! type/timestamp pairing) is not itself a metric.

use crate::metrics::MetricSet;
use crate::utils::ParseError;

/// Decoder state: either waiting for a header or holding one.
enum State {
    Header,
    Data { latency_type: String, buckets: Vec<String> },
}

/// Decode the `latency:` response into `latency.<type>.<bucket>` metrics.
///
/// Histograms alternate strictly header/data. A record without `:`
/// arriving where a header is expected is a decode error. A header at end
/// of input with no data row is discarded silently. Bucket labels are
/// sanitized on the composed key: `>` becomes `over_` and `ops/sec`
/// becomes `ops_per_sec`, so keys stay legal for dotted naming schemes.
pub fn parse_latency(raw: &str) -> Result<MetricSet, ParseError> {
    let mut metrics = MetricSet::new();
    let mut state = State::Header;

    for record in raw.split(';') {
        if record.is_empty() {
            continue;
        }
        state = match state {
            State::Header => {
                let (latency_type, rest) =
                    record
                        .split_once(':')
                        .ok_or_else(|| ParseError::MalformedLatencyHeader {
                            record: record.to_string(),
                        })?;
                State::Data {
                    latency_type: latency_type.to_string(),
                    buckets: rest.split(',').map(str::to_string).collect(),
                }
            }
            State::Data { latency_type, buckets } => {
                // data index 0 is the timestamp, never a metric
                let values: Vec<&str> = record.split(',').collect();
                for (bucket, value) in buckets.iter().zip(values.iter().skip(1)) {
                    let key = format!("{latency_type}.{bucket}")
                        .replace('>', "over_")
                        .replace("ops/sec", "ops_per_sec");
                    metrics.insert_numeric(format!("latency.{key}"), value);
                }
                State::Header
            }
        };
    }

    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_histogram() {
        let raw = "read:>1ms,>8ms,ops/sec;ts,10,2,100";
        let metrics = parse_latency(raw).unwrap();
        assert_eq!(metrics.len(), 3);
        assert_eq!(metrics.get("latency.read.over_1ms"), Some("10"));
        assert_eq!(metrics.get("latency.read.over_8ms"), Some("2"));
        assert_eq!(metrics.get("latency.read.ops_per_sec"), Some("100"));
    }

    #[test]
    fn test_multiple_histograms() {
        let raw = "read:>1ms,>8ms;15:44:57,1,2;write:>1ms,>8ms;15:44:57,3,4";
        let metrics = parse_latency(raw).unwrap();
        assert_eq!(metrics.get("latency.read.over_1ms"), Some("1"));
        assert_eq!(metrics.get("latency.read.over_8ms"), Some("2"));
        assert_eq!(metrics.get("latency.write.over_1ms"), Some("3"));
        assert_eq!(metrics.get("latency.write.over_8ms"), Some("4"));
    }

    #[test]
    fn test_non_numeric_values_dropped() {
        let metrics = parse_latency("read:>1ms,>8ms;ts,ok,5").unwrap();
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics.get("latency.read.over_8ms"), Some("5"));
    }

    #[test]
    fn test_short_data_row_skips_missing_positions() {
        let metrics = parse_latency("read:>1ms,>8ms,ops/sec;ts,7").unwrap();
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics.get("latency.read.over_1ms"), Some("7"));
    }

    #[test]
    fn test_orphan_header_discarded() {
        let metrics = parse_latency("read:>1ms,>8ms").unwrap();
        assert!(metrics.is_empty());
    }

    #[test]
    fn test_data_record_in_header_state_is_error() {
        let err = parse_latency("ts,10,2").unwrap_err();
        assert!(matches!(err, ParseError::MalformedLatencyHeader { .. }));
    }

    #[test]
    fn test_empty_records_do_not_change_state() {
        let raw = "read:>1ms;;ts,9";
        let metrics = parse_latency(raw).unwrap();
        assert_eq!(metrics.get("latency.read.over_1ms"), Some("9"));
    }

    #[test]
    fn test_empty_input_yields_empty_set() {
        assert!(parse_latency("").unwrap().is_empty());
    }
}
