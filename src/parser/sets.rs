//! Per-set statistics decoder
//!
//! Decodes the `sets` info response: `;`-separated records of the form
//! `namespace:setname:key1=val1:key2=val2:...`. Unlike the strict
//! key-value decoder, this one is lenient per field: a malformed
//! `key=value` field is skipped and the rest of the record still decodes.

use tracing::warn;

use crate::metrics::MetricSet;

/// Decode the `sets` response into `sets.<namespace>.<set>.<key>` metrics.
///
/// Empty records (trailing or doubled separators) are skipped. The first
/// two colon fields of each record are taken raw as namespace and set
/// name; every later field must be `key=value`, and fields that are not
/// are dropped individually.
pub fn parse_sets(raw: &str) -> MetricSet {
    let mut metrics = MetricSet::new();
    for record in raw.split(';') {
        if record.is_empty() {
            continue;
        }
        let mut fields = record.split(':');
        let (Some(namespace), Some(set)) = (fields.next(), fields.next()) else {
            warn!(record, "sets record has fewer than two colon fields, skipping");
            continue;
        };
        for field in fields {
            match field.split_once('=') {
                Some((key, value)) => {
                    metrics.insert_numeric(format!("sets.{namespace}.{set}.{key}"), value);
                }
                None => {
                    warn!(record, field, "sets field has no '=' separator, skipping field");
                }
            }
        }
    }
    metrics
}
