//! Poker Ledger Library
//! # Overview
//!
//! This library settles home poker rounds and tracks per-player results over
//! time. It implements a settlement engine plus a statistics pipeline with
//! both a sync and an async strategy.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (GameRound, TransferInstruction, PlayerStatistics, etc.)
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Business logic components:
//!   - [`core::settlement`] - Conservation check and greedy debt-transfer matching
//!   - [`core::statistics`] - Per-player totals, averages and streaks
//!   - [`core::rankings`] - Leaderboard views over a set of statistics
//! - [`io`] - CSV reading and writing for rounds, history and balances
//! - [`strategy`] - Pluggable statistics pipelines (sync, async batch)
//!
//! # Settlement
//!
//! Each player's net balance is `cash_out - buy_in`. A round settles only if
//! the net balances sum to zero; otherwise it is rejected as an excess (chips
//! bought in but never cashed out) or a deficit (more cashed out than bought
//! in). Debtors then pay creditors largest-first, which yields at most
//! `players - 1` transfers.
//!
//! # Statistics
//!
//! Each player's history is ordered by date. Draws count as games played but
//! neither win nor loss, and they do not break streaks.

// Module declarations
pub mod cli;
pub mod core;
pub mod io;
pub mod strategy;
pub mod types;

pub use core::{compute_settlement, compute_statistics, HistoryStore, Rankings};
pub use io::{write_rankings_csv, write_statistics_csv, write_transfers_csv};
pub use types::{
    GameRound, HistoricalEntry, LedgerError, NetAmount, PlayerEntry, PlayerStatistics,
    SettlementError, TransferInstruction,
};
