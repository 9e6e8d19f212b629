//! Decoders for the info protocol's response formats
//!
//! Each decoder is a pure function from one raw response to a `MetricSet`:
//! - `key_value`: strict `key=value;` records (statistics, namespace detail)
//! - `sets`: lenient `namespace:set:k=v:...` records
//! - `latency`: alternating header/data histogram records
//! - `namespace`: namespace list plus per-namespace follow-up fetches

pub mod key_value;
pub mod latency;
pub mod namespace;
pub mod numeric;
pub mod sets;

pub use key_value::parse_key_value;
pub use latency::parse_latency;
pub use namespace::parse_namespaces;
pub use numeric::is_numeric;
pub use sets::parse_sets;
