use std::net::Ipv4Addr;

use fleetscope_common::config::Config;
use fleetscope_common::network::target::TargetSpec;
use fleetscope_common::{info, success};

use crate::terminal::print;

/// How much of a target `expand` lists.
#[derive(Debug, PartialEq, Eq)]
pub struct Window {
    /// Addresses to print, saturated to what the platform can index.
    pub take: usize,
    pub omitted: u64,
}

/// `limit == 0` lists everything.
pub fn window(total: u64, limit: u64) -> Window {
    let shown: u64 = if limit == 0 { total } else { total.min(limit) };
    Window {
        take: usize::try_from(shown).unwrap_or(usize::MAX),
        omitted: total - shown,
    }
}

pub fn expand(input: &str, limit: u64, cfg: &Config) -> anyhow::Result<()> {
    let spec: TargetSpec = input.parse()?;
    let total: u64 = spec.count().unwrap_or(0);
    let window: Window = window(total, limit);

    for addr in spec.addresses().take(window.take) {
        print_address(addr);
    }

    if window.omitted > 0 {
        info!("{} more addresses omitted, raise --limit to list them", window.omitted);
    } else if cfg.quiet == 0 {
        success!("{total} addresses expanded");
    }

    Ok(())
}

fn print_address(addr: Ipv4Addr) {
    print::print(&addr.to_string());
}
