use crate::io::csv_format::parse_date;
use crate::strategy::{BatchConfig, StatisticsInput};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Settle home poker rounds and track player statistics
#[derive(Parser, Debug)]
#[command(name = "poker-ledger")]
#[command(about = "Settle home poker rounds and track player statistics", long_about = None)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute the transfers that settle a round
    Settle(SettleArgs),
    /// Print per-player statistics from a history file
    Stats(StatsArgs),
    /// Print leaderboard views from a history file
    Rankings(StatsArgs),
}

#[derive(Args, Debug)]
pub struct SettleArgs {
    /// Round CSV file (`player,buy_in,cash_out`)
    #[arg(value_name = "ROUND", help = "Path to the round CSV file")]
    pub round_file: PathBuf,

    /// Date the round was played
    #[arg(
        long = "date",
        value_name = "YYYY-MM-DD",
        value_parser = parse_date_arg,
        help = "Date of the round, required with --record"
    )]
    pub date: Option<NaiveDate>,

    /// History file to append the settled round to
    #[arg(
        long = "record",
        value_name = "HISTORY",
        requires = "date",
        help = "Append each player's net result to this history CSV"
    )]
    pub record: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// History CSV file (`player,date,net`)
    #[arg(value_name = "HISTORY", help = "Path to the history CSV file")]
    pub history_file: PathBuf,

    /// Balances CSV file (`player,balance`)
    #[arg(
        long = "balances",
        value_name = "FILE",
        help = "Current balances; players missing here use their total winnings"
    )]
    pub balances_file: Option<PathBuf>,

    /// Processing strategy used to load the history and compute statistics
    #[arg(
        long = "strategy",
        value_name = "STRATEGY",
        default_value = "async",
        help = "Processing strategy: 'sync' for sequential or 'async' for batched parallel"
    )]
    pub strategy: StrategyType,

    /// Number of history rows per batch (async mode only)
    #[arg(
        long = "batch-size",
        value_name = "SIZE",
        help = "Number of history rows per batch (default: 1000)"
    )]
    pub batch_size: Option<usize>,

    /// Number of runtime worker threads (async mode only)
    #[arg(
        long = "max-concurrent",
        value_name = "COUNT",
        help = "Number of worker threads (default: CPU cores)"
    )]
    pub max_concurrent_batches: Option<usize>,
}

/// Available processing strategies for the statistics pipeline
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum StrategyType {
    Sync,
    Async,
}

fn parse_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_date(value).map_err(|e| e.to_string())
}

impl StatsArgs {
    /// Create a BatchConfig from CLI arguments
    ///
    /// Missing values use the defaults; zero values are replaced by the
    /// defaults with a warning.
    pub fn to_batch_config(&self) -> BatchConfig {
        if self.batch_size.is_some() || self.max_concurrent_batches.is_some() {
            let default = BatchConfig::default();
            BatchConfig::new(
                self.batch_size.unwrap_or(default.batch_size),
                self.max_concurrent_batches
                    .unwrap_or(default.max_concurrent_batches),
            )
        } else {
            BatchConfig::default()
        }
    }

    /// The files this run reads from
    pub fn to_input(&self) -> StatisticsInput {
        let input = StatisticsInput::new(&self.history_file);
        match &self.balances_file {
            Some(path) => input.with_balances(path),
            None => input,
        }
    }
}
