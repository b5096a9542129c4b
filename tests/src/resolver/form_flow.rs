//! Drives the resolver the way the scan form does: once per edit of the
//! input field, then once more when the scan request is built.

use fleetscope_common::config::Config;
use fleetscope_common::network::ipv4;
use fleetscope_common::network::range;
use fleetscope_common::network::target::{self, TargetSpec};

/// Every prefix of `text`, as seen while the operator is typing it.
fn keystrokes(text: &str) -> impl Iterator<Item = &str> {
    text.char_indices()
        .map(move |(idx, c)| &text[..idx + c.len_utf8()])
}

#[test]
fn typing_a_cidr_block_never_panics_and_ends_valid() {
    let input = "192.168.1.0/24";

    for partial in keystrokes(input) {
        let _ = ipv4::is_valid_ipv4_text(partial);
        let _ = range::is_valid_range_or_cidr(partial);
        let _ = target::estimate_target_count(partial);
        let _ = TargetSpec::parse(partial);
    }

    assert!(range::is_valid_cidr_text(input));
    assert_eq!(target::estimate_target_count(input), Some(256));
}

#[test]
fn count_preview_flips_while_typing_a_short_range() {
    let previews: Vec<Option<u64>> = keystrokes("10.0.0.1-25")
        .map(target::estimate_target_count)
        .collect();

    // "10.0.0.1" is a single host, "10.0.0.1-" is nothing yet,
    // "10.0.0.1-2" and "10.0.0.1-25" are ranges.
    assert_eq!(previews[7], Some(1));
    assert_eq!(previews[8], None);
    assert_eq!(previews[9], Some(2));
    assert_eq!(previews[10], Some(25));
}

#[test]
fn pasted_multiline_list_builds_a_scan_request() -> anyhow::Result<()> {
    let pasted = "192.168.1.10\n192.168.1.11,\n\n192.168.1.300\n 192.168.1.10 ";

    let spec: TargetSpec = pasted.parse()?;
    assert_eq!(spec.count(), Some(3));
    assert_eq!(
        spec.scan_targets(),
        vec!["192.168.1.10", "192.168.1.11", "192.168.1.10"]
    );

    Ok(())
}

#[test]
fn range_field_request_uses_full_form() -> anyhow::Result<()> {
    let spec: TargetSpec = "192.168.001.200-210".parse()?;
    assert_eq!(spec.scan_targets(), vec!["192.168.1.200-192.168.1.210"]);
    assert_eq!(spec.count(), Some(11));
    Ok(())
}

#[test]
fn large_scan_warning_follows_threshold() {
    let cfg = Config {
        large_scan_threshold: 256,
        ..Config::default()
    };

    let small = target::estimate_target_count("10.0.0.0/24").unwrap_or(0);
    let large = target::estimate_target_count("10.0.0.0/23").unwrap_or(0);

    assert!(!cfg.is_large_scan(small));
    assert!(cfg.is_large_scan(large));
}

#[test]
fn rejection_message_is_readable() {
    let err = "192.168.1.0/40".parse::<TargetSpec>().unwrap_err();
    assert_eq!(err.to_string(), "invalid prefix length '40' (expected 0-32)");

    let err = "10.0.0.20-10.0.0.10".parse::<TargetSpec>().unwrap_err();
    assert_eq!(
        err.to_string(),
        "range start 10.0.0.20 is after range end 10.0.0.10"
    );
}
