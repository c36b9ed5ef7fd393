//! Poker Ledger CLI
//!
//! Command-line interface for settling poker rounds and reporting player
//! statistics from CSV files.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- settle round.csv > transfers.csv
//! cargo run -- settle round.csv --date 2024-03-09 --record history.csv
//! cargo run -- stats history.csv --balances balances.csv > stats.csv
//! cargo run -- stats --strategy async --batch-size 2000 --max-concurrent 8 history.csv
//! cargo run -- rankings --strategy sync history.csv > rankings.csv
//! ```
//!
//! Results are written to stdout as CSV. Diagnostics go to stderr through
//! `env_logger` (`RUST_LOG=debug` for progress output).
//!
//! # Processing Strategies
//!
//! - **sync**: Sequential CSV parsing and statistics computation
//! - **async**: Batched CSV parsing with one statistics task per player (default)
//!
//! # Exit Codes
//!
//! - 0: Success
//! - 1: Error (file not found, malformed round, imbalanced round, etc.)

use poker_ledger::cli::{self, Command, SettleArgs, StatsArgs, StrategyType};
use poker_ledger::core::settlement::compute_settlement;
use poker_ledger::io::{
    append_history, read_round, write_rankings_csv, write_statistics_csv, write_transfers_csv,
};
use poker_ledger::strategy;
use poker_ledger::types::{LedgerError, PlayerStatistics, SettlementError};
use poker_ledger::Rankings;
use std::process;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = cli::parse_args();

    let result = match args.command {
        Command::Settle(settle_args) => settle(&settle_args),
        Command::Stats(stats_args) => compute_statistics(&stats_args)
            .and_then(|stats| write_statistics_csv(&stats, &mut std::io::stdout())),
        Command::Rankings(stats_args) => compute_statistics(&stats_args).and_then(|stats| {
            write_rankings_csv(&Rankings::compute(&stats), &mut std::io::stdout())
        }),
    };

    if let Err(e) = result {
        if let LedgerError::Settlement(err @ SettlementError::InternalInvariantViolation { .. }) =
            &e
        {
            log::error!("Settlement engine defect: {:?}", err);
        }
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

/// Settle one round, print its transfers and optionally record it
fn settle(args: &SettleArgs) -> Result<(), LedgerError> {
    let round = read_round(&args.round_file)?;
    log::debug!(
        "Settling {} players from {}",
        round.entries().len(),
        args.round_file.display()
    );
    let transfers = compute_settlement(&round)?;

    for transfer in &transfers {
        log::info!("{}", transfer);
    }
    write_transfers_csv(&transfers, &mut std::io::stdout())?;

    // clap guarantees --date whenever --record is present
    if let (Some(path), Some(date)) = (&args.record, args.date) {
        let written = append_history(path, &round.history_entries(date)?)?;
        log::info!("Recorded {} results to {}", written, path.display());
    }

    Ok(())
}

/// Run the selected statistics strategy over the history file
fn compute_statistics(args: &StatsArgs) -> Result<Vec<PlayerStatistics>, LedgerError> {
    let config = if matches!(args.strategy, StrategyType::Async) {
        Some(args.to_batch_config())
    } else {
        None
    };
    let strategy = strategy::create_strategy(args.strategy, config);

    strategy.compute(&args.to_input())
}
