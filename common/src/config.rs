/// Addresses above which a count preview is flagged as a large scan.
pub const DEFAULT_LARGE_SCAN_THRESHOLD: u64 = 1024;

pub struct Config {
    /// Hides headers and banners. `2` also hides detail trees.
    pub quiet: u8,
    pub no_banner: bool,
    /// Previews above this many addresses get a large-scan warning.
    ///
    /// The warning never blocks resolving or submitting the target.
    pub large_scan_threshold: u64,
}

impl Config {
    pub fn is_large_scan(&self, count: u64) -> bool {
        count > self.large_scan_threshold
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            quiet: 0,
            no_banner: false,
            large_scan_threshold: DEFAULT_LARGE_SCAN_THRESHOLD,
        }
    }
}
