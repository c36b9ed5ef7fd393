//! Core business logic module
//!
//! This module contains the ledger's computations:
//! - `settlement` - Net-balance validation and greedy debt-transfer matching
//! - `statistics` - Per-player aggregates and streaks
//! - `rankings` - Cross-player views over computed statistics
//! - `roster` - Which players are reported, with which balance
//! - `history_store` - Per-player history grouping
//! - `async` - Concurrent history loading and statistics computation

pub mod r#async;
pub mod history_store;
pub mod rankings;
pub mod roster;
pub mod settlement;
pub mod statistics;

pub use history_store::HistoryStore;
pub use r#async::{AsyncHistoryStore, BatchProcessor};
pub use rankings::Rankings;
pub use settlement::compute_settlement;
pub use statistics::compute_statistics;
