//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `round`: Game round input and net balances
//! - `transfer`: Settlement output
//! - `history`: Per-player historical results
//! - `statistics`: Per-player statistics aggregate
//! - `error`: Error types for the ledger

pub mod error;
pub mod history;
pub mod round;
pub mod statistics;
pub mod transfer;

pub use error::{ImbalanceKind, LedgerError, RoundField, SettlementError};
pub use history::{HistoricalEntry, HistoryRecord};
pub use round::{Chips, GameRound, NetAmount, NetBalance, PlayerEntry};
pub use statistics::PlayerStatistics;
pub use transfer::TransferInstruction;
