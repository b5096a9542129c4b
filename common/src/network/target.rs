//! # Scan Target Model
//!
//! Defines the possible inputs for a network scan.
//!
//! This module handles parsing and representing targets, which can be:
//! * A single IPv4 address (host).
//! * An explicit list of addresses (e.g., `10.0.0.1, 10.0.0.7`).
//! * An IPv4 range, short or full (e.g., `192.168.1.1-100`).
//! * A CIDR block (e.g., `192.168.1.0/24`).
//!
//! [`TargetSpec::parse`] and [`estimate_target_count`] are total and cheap
//! enough to run on every edit of an input field. `str::parse` gives the same
//! answer plus the reason a rejected text is invalid.

use std::net::Ipv4Addr;
use std::str::FromStr;

use crate::debug;
use crate::error::TargetError;
use crate::network::ipv4;
use crate::network::range::{self, AddressRange, CidrBlock, RangeForm};

/// Represents a distinct target to be scanned.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TargetSpec {
    /// Scan a single specific host.
    SingleIp { addr: Ipv4Addr },
    /// Scan every listed host, in order, duplicates included.
    ExplicitList { addrs: Vec<Ipv4Addr> },
    /// `A.B.C.D-N`: the end shares the first three octets of the start.
    ShortRange { range: AddressRange },
    /// `A.B.C.D-W.X.Y.Z`
    FullRange { range: AddressRange },
    /// `A.B.C.D/N`
    Cidr { block: CidrBlock },
}

impl TargetSpec {
    /// Classifies operator text, returning `None` for anything unparseable.
    pub fn parse(text: &str) -> Option<Self> {
        text.parse().ok()
    }

    /// Number of addresses this target covers.
    ///
    /// `None` only for an empty list, which [`TargetSpec::parse`] never builds.
    pub fn count(&self) -> Option<u64> {
        match self {
            TargetSpec::SingleIp { .. } => Some(1),
            TargetSpec::ExplicitList { addrs } if addrs.is_empty() => None,
            TargetSpec::ExplicitList { addrs } => Some(addrs.len() as u64),
            TargetSpec::ShortRange { range } | TargetSpec::FullRange { range } => {
                Some(range.count())
            }
            TargetSpec::Cidr { block } => Some(block.range().count()),
        }
    }

    /// The continuous range behind this target, if it has one.
    pub fn range(&self) -> Option<AddressRange> {
        match self {
            TargetSpec::SingleIp { addr } => Some(AddressRange::single(*addr)),
            TargetSpec::ExplicitList { .. } => None,
            TargetSpec::ShortRange { range } | TargetSpec::FullRange { range } => Some(*range),
            TargetSpec::Cidr { block } => Some(block.range()),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            TargetSpec::SingleIp { .. } => "single address",
            TargetSpec::ExplicitList { .. } => "address list",
            TargetSpec::ShortRange { .. } => "short range",
            TargetSpec::FullRange { .. } => "full range",
            TargetSpec::Cidr { .. } => "CIDR block",
        }
    }

    /// Lazily yields every address of the target in scan order.
    pub fn addresses(&self) -> Box<dyn Iterator<Item = Ipv4Addr> + '_> {
        match self {
            TargetSpec::ExplicitList { addrs } => Box::new(addrs.iter().copied()),
            _ => match self.range() {
                Some(range) => Box::new(range.iter()),
                None => Box::new(std::iter::empty()),
            },
        }
    }

    /// Renders the target as the address/range strings a scan request carries.
    ///
    /// Ranges are always written in full `start-end` form so the receiver
    /// never has to expand a short range.
    pub fn scan_targets(&self) -> Vec<String> {
        match self {
            TargetSpec::SingleIp { addr } => vec![addr.to_string()],
            TargetSpec::ExplicitList { addrs } => addrs.iter().map(Ipv4Addr::to_string).collect(),
            TargetSpec::ShortRange { range } | TargetSpec::FullRange { range } => {
                vec![range.to_string()]
            }
            TargetSpec::Cidr { block } => vec![block.to_string()],
        }
    }
}

impl From<RangeForm> for TargetSpec {
    fn from(form: RangeForm) -> Self {
        match form {
            RangeForm::Full(range) => TargetSpec::FullRange { range },
            RangeForm::Short(range) => TargetSpec::ShortRange { range },
            RangeForm::Cidr(block) => TargetSpec::Cidr { block },
        }
    }
}

impl FromStr for TargetSpec {
    type Err = TargetError;

    /// Parses a string into a `TargetSpec`.
    ///
    /// Tried in order:
    /// * **Host**: a single IPv4 address.
    /// * **Range**: full range, short range, then CIDR.
    /// * **List**: comma/whitespace separated addresses; invalid tokens are dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();

        if text.is_empty() {
            return Err(TargetError::Empty);
        }

        if let Some(addr) = ipv4::parse_ipv4(text) {
            return Ok(TargetSpec::SingleIp { addr });
        }

        if let Some(form) = range::parse_range_form(text) {
            return Ok(form.into());
        }

        // A spaced range that failed to resolve is a bad range, not a list.
        if let Some((start_str, end_str)) = text.split_once('-') {
            if !text.contains(',') && ipv4::is_valid_ipv4_text(start_str.trim()) {
                return Err(reject(text, explain_range(start_str, end_str)));
            }
        }

        if text.contains(is_list_separator) {
            let addrs = parse_explicit_list(text);
            if addrs.is_empty() {
                return Err(TargetError::NoValidAddresses(text.to_string()));
            }
            return Ok(TargetSpec::ExplicitList { addrs });
        }

        Err(reject(text, explain_rejection(text)))
    }
}

/// Splits on any run of commas and whitespace, keeping only valid addresses.
///
/// Order and duplicates are preserved.
pub fn parse_explicit_list(text: &str) -> Vec<Ipv4Addr> {
    text.split(is_list_separator)
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .filter_map(ipv4::parse_ipv4)
        .collect()
}

/// How many addresses `text` would scan, or `None` if it is not a target.
pub fn estimate_target_count(text: &str) -> Option<u64> {
    TargetSpec::parse(text).and_then(|spec| spec.count())
}

fn is_list_separator(c: char) -> bool {
    c == ',' || c.is_whitespace()
}

/// Picks the most specific reason for a single-token rejection.
fn explain_rejection(text: &str) -> TargetError {
    if let Some((ip_str, prefix_str)) = text.split_once('/') {
        if prefix_str.contains('/') {
            return TargetError::InvalidCidr(text.to_string());
        }
        if !ipv4::is_valid_ipv4_text(ip_str) {
            return TargetError::InvalidAddress(ip_str.to_string());
        }
        return TargetError::InvalidPrefix(prefix_str.to_string());
    }

    if let Some((start_str, end_str)) = text.split_once('-') {
        return explain_range(start_str, end_str);
    }

    TargetError::InvalidAddress(text.to_string())
}

fn explain_range(start_str: &str, end_str: &str) -> TargetError {
    let start_str = start_str.trim();
    let end_str = end_str.trim();

    let Some(start) = ipv4::parse_ipv4(start_str) else {
        return TargetError::InvalidAddress(start_str.to_string());
    };

    let end = ipv4::parse_ipv4(end_str).or_else(|| {
        let [a, b, c, _] = start.octets();
        ipv4::parse_octet(end_str).map(|d| Ipv4Addr::new(a, b, c, d))
    });

    match end {
        Some(end) => TargetError::ReversedRange { start, end },
        None => TargetError::InvalidRange(end_str.to_string()),
    }
}

fn reject(text: &str, err: TargetError) -> TargetError {
    debug!("rejected target '{text}': {err}");
    err
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
