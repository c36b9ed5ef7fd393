//! History storage module
//!
//! This module provides the `HistoryStore` struct, which groups historical
//! results by player as they are read from a history file.
//!
//! The HistoryStore is responsible for:
//! - Grouping entries by player while keeping each player's supplied order
//! - Listing players in a deterministic (name) order for output

use crate::types::{HistoricalEntry, HistoryRecord};
use std::collections::HashMap;

/// In-memory per-player histories
///
/// Entries are kept in the order they were recorded. Date ordering is the
/// statistics engine's concern, not the store's.
#[derive(Debug, Default)]
pub struct HistoryStore {
    /// Map of player names to their results, in recorded order
    histories: HashMap<String, Vec<HistoricalEntry>>,
}

impl HistoryStore {
    /// Create a new HistoryStore with no players
    pub fn new() -> Self {
        HistoryStore {
            histories: HashMap::new(),
        }
    }

    /// Append a history record read from file
    pub fn record_row(&mut self, record: HistoryRecord) {
        self.histories
            .entry(record.player)
            .or_default()
            .push(record.entry);
    }

    /// A player's history, empty if the player has never played
    pub fn history(&self, player: &str) -> &[HistoricalEntry] {
        self.histories
            .get(player)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// All players with at least one recorded result, sorted by name
    pub fn players(&self) -> Vec<&str> {
        let mut players: Vec<&str> = self.histories.keys().map(String::as_str).collect();
        players.sort_unstable();
        players
    }

    /// Number of players with a history
    pub fn len(&self) -> usize {
        self.histories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.histories.is_empty()
    }
}
