// CLI module
// Command-line interface and argument parsing

mod args;

pub use args::{CliArgs, Command, SettleArgs, StatsArgs, StrategyType};

use clap::Parser;

/// Parse command-line arguments using clap
///
/// If parsing fails (unknown subcommand, missing arguments, `--record`
/// without `--date`, or `--help`), clap prints the error or help text and
/// exits the process.
pub fn parse_args() -> CliArgs {
    CliArgs::parse()
}
