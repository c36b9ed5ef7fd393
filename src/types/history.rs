//! Historical record types
//!
//! A player's history is an ordered-by-date sequence of net results, one per
//! settled game. The history is owned by whoever persists it; the statistics
//! engine only reads it.

use super::round::NetAmount;
use chrono::NaiveDate;

/// One player's result in one past settled game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoricalEntry {
    /// Calendar date the game was settled
    pub date: NaiveDate,

    /// Net result of the game for the player (`cash_out - buy_in`)
    pub net_result: NetAmount,
}

impl HistoricalEntry {
    pub fn new(date: NaiveDate, net_result: NetAmount) -> Self {
        HistoricalEntry { date, net_result }
    }

    pub fn is_win(&self) -> bool {
        self.net_result > 0
    }

    pub fn is_loss(&self) -> bool {
        self.net_result < 0
    }
}

/// A history row as read from a history file: the entry plus the player it
/// belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRecord {
    pub player: String,
    pub entry: HistoricalEntry,
}
