//! Namespace statistics decoder
//!
//! The `namespaces` info query returns a `;`-separated list of namespace
//! names; each namespace then needs its own `namespace/<ns>` detail query.
//! The fetch seam is a closure so the decoder stays testable without a
//! live node.

use tracing::warn;

use super::key_value::parse_key_value;
use crate::metrics::MetricSet;
use crate::utils::{ParseError, TransportError};

/// Decode the namespace list and merge every namespace's detail metrics.
///
/// An empty list yields an empty set. A transport failure for one
/// namespace skips only that namespace; a malformed detail response is a
/// decode error for the whole category, matching the strict key=value
/// contract. Keys come out as `namespaces.<namespace>.<key>`.
pub fn parse_namespaces<F>(raw_list: &str, mut fetch_detail: F) -> Result<MetricSet, ParseError>
where
    F: FnMut(&str) -> Result<String, TransportError>,
{
    let mut metrics = MetricSet::new();
    for namespace in raw_list.split(';').filter(|ns| !ns.is_empty()) {
        let detail = match fetch_detail(namespace) {
            Ok(detail) => detail,
            Err(e) => {
                warn!(namespace, error = %e, "namespace detail query failed, skipping namespace");
                continue;
            }
        };
        metrics.merge(parse_key_value(&detail, &format!("namespaces.{namespace}."))?);
    }
    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merges_all_namespaces() {
        let metrics = parse_namespaces("ns1;ns2", |ns| match ns {
            "ns1" => Ok("objects=10;evicted=0".to_string()),
            "ns2" => Ok("objects=20".to_string()),
            other => panic!("unexpected namespace {other}"),
        })
        .unwrap();
        assert_eq!(metrics.len(), 3);
        assert_eq!(metrics.get("namespaces.ns1.objects"), Some("10"));
        assert_eq!(metrics.get("namespaces.ns1.evicted"), Some("0"));
        assert_eq!(metrics.get("namespaces.ns2.objects"), Some("20"));
    }

    #[test]
    fn test_failed_namespace_skipped() {
        let metrics = parse_namespaces("ns1;ns2;", |ns| match ns {
            "ns1" => Err(TransportError::Closed),
            _ => Ok("x=1".to_string()),
        })
        .unwrap();
        assert_eq!(metrics.len(), 1);
        assert_eq!(metrics.get("namespaces.ns2.x"), Some("1"));
    }

    #[test]
    fn test_empty_list_issues_no_fetches() {
        let mut fetches = 0;
        let metrics = parse_namespaces("", |_| {
            fetches += 1;
            Ok(String::new())
        })
        .unwrap();
        assert!(metrics.is_empty());
        assert_eq!(fetches, 0);
    }

    #[test]
    fn test_fetch_order_preserved() {
        let mut seen = Vec::new();
        parse_namespaces("b;a;c", |ns| {
            seen.push(ns.to_string());
            Ok("k=1".to_string())
        })
        .unwrap();
        assert_eq!(seen, ["b", "a", "c"]);
    }

    #[test]
    fn test_malformed_detail_propagates() {
        let result = parse_namespaces("ns1", |_| Ok("no-separator".to_string()));
        assert!(matches!(result, Err(ParseError::MissingSeparator { .. })));
    }
}
