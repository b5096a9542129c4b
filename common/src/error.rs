use std::net::Ipv4Addr;

use thiserror::Error;

/// Why a piece of target text was rejected.
///
/// Only produced when a caller asks for the reason (`str::parse::<TargetSpec>`);
/// the validation helpers in [`crate::network`] answer with `bool`/`Option`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TargetError {
    #[error("target cannot be empty")]
    Empty,

    #[error("invalid IPv4 address '{0}'")]
    InvalidAddress(String),

    #[error("invalid prefix length '{0}' (expected 0-32)")]
    InvalidPrefix(String),

    #[error("invalid CIDR block '{0}'")]
    InvalidCidr(String),

    #[error("invalid range end '{0}'")]
    InvalidRange(String),

    #[error("range start {start} is after range end {end}")]
    ReversedRange { start: Ipv4Addr, end: Ipv4Addr },

    #[error("no valid IPv4 addresses in '{0}'")]
    NoValidAddresses(String),
}
