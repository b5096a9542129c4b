use anyhow::Context;
use fleetscope_common::config::Config;
use fleetscope_common::network::target::TargetSpec;
use fleetscope_common::{success, warn};

use crate::mprint;
use crate::terminal::{format, print};

pub fn count(input: &str, cfg: &Config) -> anyhow::Result<()> {
    let spec: TargetSpec = input.parse()?;
    let total: u64 = spec
        .count()
        .with_context(|| format!("'{input}' does not cover any address"))?;

    if cfg.quiet < 2 {
        print::tree_head(input);
        print::as_tree_one_level(format::target_to_detail(&spec));
    }

    if let Some(warning) = large_scan_warning(total, cfg) {
        warn!("{warning}");
    }

    let unit: &str = if total == 1 { "IP" } else { "IPs" };
    let output: String = format!("{} {unit} will be scanned", format::count(total));

    match cfg.quiet {
        0 => {
            print::fat_separator();
            print::centerln(&output);
        }
        _ => {
            mprint!();
            success!("{output}")
        }
    }

    Ok(())
}

pub fn large_scan_warning(total: u64, cfg: &Config) -> Option<String> {
    cfg.is_large_scan(total).then(|| {
        format!(
            "Large scan: {total} addresses exceed the threshold of {}",
            cfg.large_scan_threshold
        )
    })
}
