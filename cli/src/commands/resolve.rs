use fleetscope_common::config::Config;
use fleetscope_common::network::target::TargetSpec;
use fleetscope_common::success;

use crate::terminal::print;

/// Prints one scan-request entry per line.
pub fn resolve(input: &str, cfg: &Config) -> anyhow::Result<()> {
    let spec: TargetSpec = input.parse()?;
    let targets: Vec<String> = spec.scan_targets();

    for target in &targets {
        print::print(target);
    }

    if cfg.quiet == 0 {
        let len: usize = targets.len();
        let unit: &str = if len == 1 { "entry" } else { "entries" };
        success!("{len} scan {unit} resolved from a {}", spec.kind());
    }

    Ok(())
}
