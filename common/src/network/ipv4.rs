//! # IPv4 Text Handling
//!
//! Validation and integer conversion for dotted-quad IPv4 text.
//!
//! Everything in here is total: malformed text yields `false` or `None`,
//! never a panic. Octets with leading zeros (e.g. `192.168.001.1`) are
//! accepted and canonicalized on output.

use std::net::Ipv4Addr;

const OCTET_COUNT: usize = 4;
const MAX_OCTET_DIGITS: usize = 3;

/// Returns `true` if `text` is exactly four dot-separated decimal octets.
pub fn is_valid_ipv4_text(text: &str) -> bool {
    parse_ipv4(text).is_some()
}

/// Parses dotted-quad text into an [`Ipv4Addr`].
///
/// Unlike `str::parse::<Ipv4Addr>`, octets may carry leading zeros.
pub fn parse_ipv4(text: &str) -> Option<Ipv4Addr> {
    let mut octets = [0u8; OCTET_COUNT];
    let mut groups = text.split('.');

    for octet in octets.iter_mut() {
        *octet = parse_octet(groups.next()?)?;
    }

    if groups.next().is_some() {
        return None;
    }

    Some(Ipv4Addr::from(octets))
}

/// Parses a single decimal octet (`0`..=`255`, one to three digits).
pub(crate) fn parse_octet(group: &str) -> Option<u8> {
    if group.is_empty() || group.len() > MAX_OCTET_DIGITS {
        return None;
    }
    if !group.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    group.parse::<u8>().ok()
}

/// Converts IPv4 text into its unsigned 32-bit value.
pub fn address_to_integer(text: &str) -> Option<u32> {
    parse_ipv4(text).map(u32::from)
}

/// Renders a 32-bit value as canonical dotted-quad text.
pub fn integer_to_address(value: u32) -> String {
    Ipv4Addr::from(value).to_string()
}

/// Returns the canonical (no leading zeros) form of valid IPv4 text.
pub fn canonicalize(text: &str) -> Option<String> {
    parse_ipv4(text).map(|addr| addr.to_string())
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
