//! Synchronous processing strategy
//!
//! Sequential, single-threaded statistics pipeline: stream the history file
//! through `SyncReader` into a `HistoryStore`, then compute each roster
//! player's statistics one after another.
//!
//! Memory usage is O(history rows); the statistics themselves are computed
//! from each player's slice without copying the store.

use crate::core::roster;
use crate::core::statistics::compute_statistics;
use crate::core::HistoryStore;
use crate::io::sync_reader::{read_balances, SyncReader};
use crate::strategy::{ProcessingStrategy, StatisticsInput};
use crate::types::{LedgerError, PlayerStatistics};

/// Synchronous processing strategy
#[derive(Debug, Clone, Copy)]
pub struct SyncProcessingStrategy;

impl ProcessingStrategy for SyncProcessingStrategy {
    fn compute(&self, input: &StatisticsInput) -> Result<Vec<PlayerStatistics>, LedgerError> {
        let balances = match input.balances_path() {
            Some(path) => read_balances(path)?,
            None => roster::Balances::new(),
        };

        let mut store = HistoryStore::new();
        let mut skipped = 0usize;
        for result in SyncReader::new(&input.history)? {
            match result {
                Ok(record) => store.record_row(record),
                Err(e) => {
                    skipped += 1;
                    log::warn!("Skipping history row: {}", e);
                }
            }
        }
        log::debug!(
            "Loaded history for {} players ({} rows skipped)",
            store.len(),
            skipped
        );

        let stats = roster::roster(store.players(), &balances)
            .into_iter()
            .map(|player| {
                let history = store.history(&player);
                let balance = roster::current_balance(&balances, &player, history);
                compute_statistics(&player, balance, history)
            })
            .collect();

        Ok(stats)
    }
}
