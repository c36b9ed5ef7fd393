//! Thread-safe history storage for async batch processing
//!
//! This module provides the `AsyncHistoryStore` struct, which groups historical
//! results by player using concurrent data structures so that several tasks
//! can append to different players' histories at the same time.
//!
//! # Design
//!
//! The `AsyncHistoryStore` uses `DashMap` (a concurrent HashMap) with
//! fine-grained locking per player. Appends to the same player are serialized
//! by the map; callers keep a player's entries in order by appending each
//! player's slice of a batch from a single task, and by finishing one batch
//! before starting the next.

use crate::types::HistoricalEntry;
use dashmap::DashMap;

/// Thread-safe per-player histories
#[derive(Debug)]
pub struct AsyncHistoryStore {
    /// Concurrent map of player names to their results, in recorded order
    histories: DashMap<String, Vec<HistoricalEntry>>,
}

impl AsyncHistoryStore {
    /// Create a new empty AsyncHistoryStore
    pub fn new() -> Self {
        Self {
            histories: DashMap::new(),
        }
    }

    /// Append entries to a player's history
    ///
    /// The entries are appended as one unit while holding the player's lock,
    /// so they stay contiguous and in order.
    pub fn append(&self, player: &str, entries: Vec<HistoricalEntry>) {
        self.histories
            .entry(player.to_string())
            .or_default()
            .extend(entries);
    }

    /// Snapshot of a player's history, empty if the player has never played
    pub fn history(&self, player: &str) -> Vec<HistoricalEntry> {
        self.histories
            .get(player)
            .map(|entry| entry.value().clone())
            .unwrap_or_default()
    }

    /// All players with at least one recorded result, sorted by name
    pub fn players(&self) -> Vec<String> {
        let mut players: Vec<String> = self
            .histories
            .iter()
            .map(|entry| entry.key().clone())
            .collect();
        players.sort_unstable();
        players
    }
}

impl Default for AsyncHistoryStore {
    fn default() -> Self {
        Self::new()
    }
}
