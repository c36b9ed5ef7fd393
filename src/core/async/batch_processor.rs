//! Batch processing with player-based partitioning for async statistics
//!
//! This module provides the `BatchProcessor` struct, which loads history
//! batches into an `AsyncHistoryStore` and then computes every player's
//! statistics concurrently.
//!
//! # Design
//!
//! Loading partitions each batch by player and appends each player's slice
//! from its own task. Batches are awaited one after another, so a player
//! whose rows span several batches still sees them in file order.
//!
//! Computing spawns one tokio task per roster player. Each task reads only
//! that player's history, so no ordering is needed between players; results
//! are sorted by name once all tasks have joined.
//!
//! # Architecture
//!
//! ```text
//! BatchProcessor
//!     └── Arc<AsyncHistoryStore>  (shared per-player histories)
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use super::AsyncHistoryStore;
use crate::core::roster::{self, Balances};
use crate::core::statistics::compute_statistics;
use crate::types::{HistoricalEntry, HistoryRecord, LedgerError, PlayerStatistics};

/// Batch processor with player-based partitioning
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    /// Thread-safe history store, shared across async tasks
    store: Arc<AsyncHistoryStore>,
}

impl BatchProcessor {
    pub fn new(store: Arc<AsyncHistoryStore>) -> Self {
        Self { store }
    }

    /// Partition a batch of history records by player
    ///
    /// # Guarantees
    ///
    /// - Each record appears in exactly one sub-batch
    /// - Entries for each player keep their original order
    pub fn partition_by_player(
        &self,
        batch: Vec<HistoryRecord>,
    ) -> HashMap<String, Vec<HistoricalEntry>> {
        let mut player_batches: HashMap<String, Vec<HistoricalEntry>> = HashMap::new();

        for record in batch {
            player_batches
                .entry(record.player)
                .or_default()
                .push(record.entry);
        }

        player_batches
    }

    /// Load one batch of history records into the store
    ///
    /// Each player's slice is appended from its own task. Returns the number
    /// of records stored.
    pub async fn load_batch(&self, batch: Vec<HistoryRecord>) -> Result<usize, LedgerError> {
        let player_batches = self.partition_by_player(batch);

        let mut tasks = Vec::with_capacity(player_batches.len());
        for (player, entries) in player_batches {
            let store = Arc::clone(&self.store);
            tasks.push(tokio::spawn(async move {
                let count = entries.len();
                store.append(&player, entries);
                count
            }));
        }

        let mut stored = 0;
        for task in tasks {
            stored += task.await.map_err(LedgerError::runtime)?;
        }
        Ok(stored)
    }

    /// Compute statistics for every player in the store or in `balances`
    ///
    /// One task per player; the result is sorted by player name.
    pub async fn compute_all(
        &self,
        balances: Arc<Balances>,
    ) -> Result<Vec<PlayerStatistics>, LedgerError> {
        let history_players = self.store.players();
        let players = roster::roster(history_players.iter().map(String::as_str), &balances);

        let mut tasks = Vec::with_capacity(players.len());
        for player in players {
            let store = Arc::clone(&self.store);
            let balances = Arc::clone(&balances);
            tasks.push(tokio::spawn(async move {
                let history = store.history(&player);
                let balance = roster::current_balance(&balances, &player, &history);
                compute_statistics(&player, balance, &history)
            }));
        }

        let mut results = Vec::with_capacity(tasks.len());
        for task in tasks {
            results.push(task.await.map_err(LedgerError::runtime)?);
        }

        results.sort_by(|a, b| a.player_name.cmp(&b.player_name));
        Ok(results)
    }
}
