use colored::*;
use fleetscope_common::config::Config;
use fleetscope_common::network::target::TargetSpec;
use fleetscope_common::network::{ipv4, range};
use fleetscope_common::{success, warn};

use crate::terminal::{format, print};

const KEYS: [&str; 4] = ["IPv4", "CIDR", "Range or CIDR", "Target"];

/// Reports every validator's verdict. Never fails on bad input.
pub fn check(input: &str, cfg: &Config) -> anyhow::Result<()> {
    if cfg.quiet < 2 {
        print::set_key_width(&KEYS);
        print::aligned_line(KEYS[0], format::verdict(ipv4::is_valid_ipv4_text(input)));
        print::aligned_line(KEYS[1], format::verdict(range::is_valid_cidr_text(input)));
        print::aligned_line(
            KEYS[2],
            format::verdict(range::is_valid_range_or_cidr(input)),
        );
    }

    match input.parse::<TargetSpec>() {
        Ok(spec) => {
            if cfg.quiet < 2 {
                print::aligned_line(KEYS[3], spec.kind().bold());
            }
            success!("'{input}' is a valid {}", spec.kind());
        }
        Err(err) => {
            if cfg.quiet < 2 {
                print::aligned_line(KEYS[3], format::verdict(false));
            }
            warn!("{err}");
        }
    }

    Ok(())
}
