//! Logging macros shared by every crate in the workspace.
//!
//! These wrap `tracing` so library code never picks its own output format.
//! `success!` is an `info` event tagged with the `success` target, which the
//! CLI formatter renders with its own symbol.

pub const SUCCESS_TARGET: &str = "fleetscope::success";
pub const PRINT_TARGET: &str = "fleetscope::print";

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        $crate::__tracing::info!($($arg)*)
    };
}

#[macro_export]
macro_rules! success {
    ($($arg:tt)*) => {
        $crate::__tracing::info!(target: $crate::log::SUCCESS_TARGET, $($arg)*)
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        $crate::__tracing::warn!($($arg)*)
    };
}

#[macro_export]
macro_rules! debug {
    ($($arg:tt)*) => {
        $crate::__tracing::debug!($($arg)*)
    };
}
