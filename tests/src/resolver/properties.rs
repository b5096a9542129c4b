use std::net::Ipv4Addr;

use fleetscope_common::network::ipv4::{address_to_integer, integer_to_address};
use fleetscope_common::network::range::{is_valid_cidr_text, resolve_cidr, resolve_range_text};
use fleetscope_common::network::target::{TargetSpec, estimate_target_count, parse_explicit_list};
use quickcheck::{TestResult, quickcheck};

fn bounds(text: &str) -> Option<(String, String, u64)> {
    resolve_range_text(text)
        .or_else(|| resolve_cidr(text))
        .map(|r| (r.start().to_string(), r.end().to_string(), r.count()))
}

fn expected(start: &str, end: &str, count: u64) -> Option<(String, String, u64)> {
    Some((start.to_string(), end.to_string(), count))
}

#[test]
fn cidr_24() {
    assert_eq!(bounds("192.168.1.0/24"), expected("192.168.1.0", "192.168.1.255", 256));
}

#[test]
fn cidr_16_count() {
    assert_eq!(resolve_cidr("192.168.0.0/16").map(|r| r.count()), Some(65536));
}

#[test]
fn cidr_32_is_one_host() {
    assert_eq!(bounds("10.0.0.5/32"), expected("10.0.0.5", "10.0.0.5", 1));
}

#[test]
fn short_range() {
    assert_eq!(bounds("192.168.1.1-50"), expected("192.168.1.1", "192.168.1.50", 50));
}

#[test]
fn explicit_list_drops_invalid_token() {
    let list: Vec<String> = parse_explicit_list("192.168.1.1, 192.168.1.2\n10.0.0.999")
        .iter()
        .map(Ipv4Addr::to_string)
        .collect();
    assert_eq!(list, vec!["192.168.1.1", "192.168.1.2"]);
}

#[test]
fn cidr_text_rejections() {
    assert!(!is_valid_cidr_text("192.168.1.0/33"));
    assert!(!is_valid_cidr_text("192.168.1.0/24/1"));
}

#[test]
fn unparseable_count_is_none() {
    for text in ["", "hello", "1.2.3", "1.2.3.4/", "1.2.3.4-", "::1", "1.2.3.4-5-6"] {
        assert_eq!(estimate_target_count(text), None, "{text}");
    }
}

#[test]
fn leading_zero_octets_are_a_documented_tolerance() {
    assert_eq!(address_to_integer("192.168.001.001").map(integer_to_address).as_deref(), Some("192.168.1.1"));
    assert_eq!(estimate_target_count("010.000.000.000/30"), Some(4));
}

quickcheck! {
    fn canonical_round_trip(addr: Ipv4Addr) -> bool {
        let text = addr.to_string();
        address_to_integer(&text).map(integer_to_address) == Some(text)
    }

    fn ordered_pairs_resolve_as_full_ranges(a: u32, b: u32) -> TestResult {
        if a > b {
            return TestResult::discard();
        }
        let (start, end) = (integer_to_address(a), integer_to_address(b));
        let count = u64::from(b) - u64::from(a) + 1;
        TestResult::from_bool(
            bounds(&format!("{start}-{end}")) == Some((start, end, count)),
        )
    }

    fn every_operation_is_repeatable(text: String) -> bool {
        TargetSpec::parse(&text) == TargetSpec::parse(&text)
            && resolve_range_text(&text) == resolve_range_text(&text)
            && parse_explicit_list(&text) == parse_explicit_list(&text)
            && estimate_target_count(&text) == estimate_target_count(&text)
    }
}
