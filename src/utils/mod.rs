//! Utility modules

pub mod error;

pub use error::{CollectorError, ParseError, Result, TransportError};
