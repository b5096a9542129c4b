mod commands;
mod terminal;

use commands::{CommandLine, Commands, check, count, expand, join_input, resolve};
use fleetscope_common::config::Config;
use terminal::{logging, print};

fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init_logging();

    let cfg = Config {
        quiet: commands.quiet,
        no_banner: commands.no_banner,
        large_scan_threshold: commands.threshold,
    };

    print::banner(cfg.no_banner, cfg.quiet);

    let result = match commands.command {
        Commands::Check { input } => {
            print::header("live validation", cfg.quiet);
            check::check(&join_input(&input), &cfg)
        }
        Commands::Count { input } => {
            print::header("scan size preview", cfg.quiet);
            count::count(&join_input(&input), &cfg)
        }
        Commands::Resolve { input } => {
            print::header("scan request targets", cfg.quiet);
            resolve::resolve(&join_input(&input), &cfg)
        }
        Commands::Expand { input, limit } => {
            print::header("target addresses", cfg.quiet);
            expand::expand(&join_input(&input), limit, &cfg)
        }
    };

    print::end_of_program(cfg.quiet);
    result
}
