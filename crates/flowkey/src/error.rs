//! Error types for the flow key library.

use std::net::IpAddr;

use thiserror::Error;

/// Result type alias for the flow key library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or converting flow keys.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Text is not an IPv4 or IPv6 literal
    #[error("Invalid address format: {0:?}")]
    InvalidAddressFormat(String),
    /// Text is not a `<v4>:<port>` or `[<v6>]:<port>` socket literal
    #[error("Invalid endpoint format: {0:?}")]
    InvalidEndpointFormat(String),
    /// A v4-only conversion was requested for a non-v4 address
    #[error("Unsupported address family: {0} is not an IPv4 address")]
    UnsupportedAddressFamily(IpAddr),
}
