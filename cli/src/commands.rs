pub mod check;
pub mod count;
pub mod expand;
pub mod resolve;

use clap::{ArgAction, Parser, Subcommand};
use fleetscope_common::config::DEFAULT_LARGE_SCAN_THRESHOLD;

pub const DEFAULT_EXPAND_LIMIT: u64 = 256;

#[derive(Parser)]
#[command(name = "fleetscope")]
#[command(about = "Validate, size and expand device scan targets.")]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output (-q hides headers, -qq also hides details)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// Warn when a target covers more addresses than this
    #[arg(long, global = true, default_value_t = DEFAULT_LARGE_SCAN_THRESHOLD)]
    pub threshold: u64,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show how each validator judges the input
    #[command(alias = "c")]
    Check {
        #[arg(required = true)]
        input: Vec<String>,
    },
    /// Preview how many addresses a target covers
    #[command(alias = "n")]
    Count {
        #[arg(required = true)]
        input: Vec<String>,
    },
    /// Print the target list a scan request would carry
    #[command(alias = "r")]
    Resolve {
        #[arg(required = true)]
        input: Vec<String>,
    },
    /// List every address of a target
    #[command(alias = "e")]
    Expand {
        #[arg(required = true)]
        input: Vec<String>,

        /// Stop after this many addresses (0 lists everything)
        #[arg(short, long, default_value_t = DEFAULT_EXPAND_LIMIT)]
        limit: u64,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Several words on the command line form one input, like a multi-line field.
pub fn join_input(words: &[String]) -> String {
    words.join(" ")
}
