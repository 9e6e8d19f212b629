//! Info-protocol client
//!
//! `InfoTransport` is the seam between the collection core and whatever
//! actually speaks to the node. The core never retries and never assumes
//! more than "text in, text out": an `Err` is the no-response sentinel and
//! the affected category or namespace is skipped for the cycle.

pub mod info_connection;

pub use info_connection::InfoConnection;

use crate::utils::TransportError;

/// One request/response exchange with the polled node.
pub trait InfoTransport {
    /// Issue a single info query and return the raw response text.
    ///
    /// Implementations own their timeouts; on timeout they must return an
    /// error rather than hang.
    fn query(&mut self, request: &str) -> Result<String, TransportError>;
}
