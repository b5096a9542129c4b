//! # IPv4 Range Model
//!
//! Continuous, inclusive ranges of IPv4 addresses and the CIDR blocks that
//! describe them.
//!
//! This module backs the range-shaped variants of
//! [`crate::network::target::TargetSpec`]: `192.168.1.1-50`,
//! `192.168.1.1-192.168.1.50` and `192.168.1.0/24`.

use std::net::Ipv4Addr;

use pnet::ipnetwork::Ipv4Network;

use crate::network::ipv4::{self, parse_octet};

pub const MAX_PREFIX: u8 = 32;

/// A continuous range of IPv4 addresses, inclusive on both ends.
///
/// `start <= end` always holds; ranges can only be built through
/// [`AddressRange::new`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AddressRange {
    start: Ipv4Addr,
    end: Ipv4Addr,
}

impl AddressRange {
    /// Returns `None` when `start` comes after `end`.
    pub fn new(start: Ipv4Addr, end: Ipv4Addr) -> Option<Self> {
        if u32::from(start) > u32::from(end) {
            return None;
        }
        Some(Self { start, end })
    }

    pub fn single(addr: Ipv4Addr) -> Self {
        Self {
            start: addr,
            end: addr,
        }
    }

    pub fn start(&self) -> Ipv4Addr {
        self.start
    }

    pub fn end(&self) -> Ipv4Addr {
        self.end
    }

    /// Number of addresses in the range. `0.0.0.0-255.255.255.255` counts 2^32.
    pub fn count(&self) -> u64 {
        u64::from(u32::from(self.end)) - u64::from(u32::from(self.start)) + 1
    }

    pub fn contains(&self, addr: Ipv4Addr) -> bool {
        let value = u32::from(addr);
        u32::from(self.start) <= value && value <= u32::from(self.end)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = Ipv4Addr> + Clone + use<> {
        let start: u32 = u32::from(self.start);
        let end: u32 = u32::from(self.end);
        (start..=end).map(Ipv4Addr::from)
    }
}

impl std::fmt::Display for AddressRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

/// A base address with a prefix length, e.g. `192.168.1.77/24`.
///
/// The base keeps whatever host bits the operator typed; [`CidrBlock::range`]
/// normalizes to the network and broadcast addresses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CidrBlock {
    network: Ipv4Network,
}

impl CidrBlock {
    /// Returns `None` when `prefix` exceeds 32.
    pub fn new(base: Ipv4Addr, prefix: u8) -> Option<Self> {
        let network = Ipv4Network::new(base, prefix).ok()?;
        Some(Self { network })
    }

    pub fn base(&self) -> Ipv4Addr {
        self.network.ip()
    }

    pub fn prefix(&self) -> u8 {
        self.network.prefix()
    }

    pub fn netmask(&self) -> Ipv4Addr {
        self.network.mask()
    }

    pub fn network(&self) -> Ipv4Addr {
        self.network.network()
    }

    pub fn broadcast(&self) -> Ipv4Addr {
        self.network.broadcast()
    }

    pub fn range(&self) -> AddressRange {
        AddressRange {
            start: self.network(),
            end: self.broadcast(),
        }
    }
}

impl std::fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.network(), self.prefix())
    }
}

/// The surface form a range was written in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RangeForm {
    /// `192.168.1.1-192.168.1.50`
    Full(AddressRange),
    /// `192.168.1.1-50`
    Short(AddressRange),
    /// `192.168.1.0/24`
    Cidr(CidrBlock),
}

impl RangeForm {
    pub fn range(&self) -> AddressRange {
        match self {
            RangeForm::Full(range) | RangeForm::Short(range) => *range,
            RangeForm::Cidr(block) => block.range(),
        }
    }
}

/// Parses `A.B.C.D/N` into a [`CidrBlock`].
pub fn parse_cidr(text: &str) -> Option<CidrBlock> {
    let mut parts = text.split('/');
    let ip_str = parts.next()?;
    let prefix_str = parts.next()?;
    if parts.next().is_some() {
        return None;
    }

    let base = ipv4::parse_ipv4(ip_str)?;
    let prefix = parse_prefix(prefix_str)?;

    CidrBlock::new(base, prefix)
}

/// Parses a decimal prefix length in `0..=32`.
pub(crate) fn parse_prefix(text: &str) -> Option<u8> {
    if text.is_empty() || text.len() > 2 || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<u8>().ok().filter(|prefix| *prefix <= MAX_PREFIX)
}

pub fn is_valid_cidr_text(text: &str) -> bool {
    parse_cidr(text).is_some()
}

/// Resolves CIDR text to the range between its network and broadcast addresses.
pub fn resolve_cidr(text: &str) -> Option<AddressRange> {
    parse_cidr(text).map(|block| block.range())
}

/// Classifies range text, trying full range, short range and CIDR in that order.
///
/// A bare single address is not a range and yields `None`.
///
/// Range text may carry surrounding whitespace; the CIDR case is handed to
/// [`parse_cidr`] untouched so it agrees with [`is_valid_cidr_text`].
pub fn parse_range_form(text: &str) -> Option<RangeForm> {
    if let Some((start_str, end_str)) = text.trim().split_once('-') {
        let start_str = start_str.trim();
        let end_str = end_str.trim();

        if let Some(range) = parse_full_range(start_str, end_str) {
            return Some(RangeForm::Full(range));
        }
        if let Some(range) = parse_short_range(start_str, end_str) {
            return Some(RangeForm::Short(range));
        }
    }

    parse_cidr(text).map(RangeForm::Cidr)
}

/// Resolves `A.B.C.D-W.X.Y.Z`, `A.B.C.D-N` or `A.B.C.D/N` into an [`AddressRange`].
pub fn resolve_range_text(text: &str) -> Option<AddressRange> {
    parse_range_form(text).map(|form| form.range())
}

/// Live-validation check for a range field: valid CIDR or a valid range.
pub fn is_valid_range_or_cidr(text: &str) -> bool {
    is_valid_cidr_text(text) || resolve_range_text(text).is_some()
}

fn parse_full_range(start_str: &str, end_str: &str) -> Option<AddressRange> {
    let start = ipv4::parse_ipv4(start_str)?;
    let end = ipv4::parse_ipv4(end_str)?;
    AddressRange::new(start, end)
}

/// The end of a short range inherits the first three octets of the start.
fn parse_short_range(start_str: &str, end_str: &str) -> Option<AddressRange> {
    let start = ipv4::parse_ipv4(start_str)?;
    let last_octet = parse_octet(end_str)?;

    let [a, b, c, _] = start.octets();
    let end = Ipv4Addr::new(a, b, c, last_octet);

    AddressRange::new(start, end)
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
