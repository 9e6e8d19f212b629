//! Error types for aerospike-collector

use std::io;
use thiserror::Error;

/// Top-level collection error
#[derive(Error, Debug)]
pub enum CollectorError {
    #[error("info transport is unavailable, no queries were issued")]
    TransportUnavailable,

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),
}

/// Info-protocol transport errors
///
/// Any of these is the "no response obtained" sentinel: callers skip the
/// affected category or namespace and keep going.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Failed to connect to {host}:{port}: {source}")]
    ConnectFailed {
        host: String,
        port: u16,
        source: io::Error,
    },

    #[error("Request timed out after {0}ms")]
    Timeout(u64),

    #[error("Connection closed before a response arrived")]
    Closed,

    #[error("Response is not valid UTF-8")]
    InvalidPayload,

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Decode errors for the info response formats
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("empty response where key=value records were expected")]
    EmptyResponse,

    #[error("record {record:?} has no '=' separator")]
    MissingSeparator { record: String },

    #[error("latency record {record:?} is not a 'type:buckets' header")]
    MalformedLatencyHeader { record: String },
}

pub type Result<T> = std::result::Result<T, CollectorError>;
