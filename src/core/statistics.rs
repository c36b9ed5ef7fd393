//! Statistics engine
//!
//! Derives a `PlayerStatistics` aggregate from one player's history of
//! settled games. The engine performs no I/O and has no failure path: every
//! history, including an empty one, maps to a well-defined result.
//!
//! The engine owns the ordering of the history. It sorts a private copy
//! ascending by date before the streak pass, so callers need not pre-sort.
//! The sort is stable, which keeps games played on the same date in the
//! order they were supplied.

use crate::types::{HistoricalEntry, NetAmount, PlayerStatistics};
use rust_decimal::Decimal;

/// Win/loss streak state for a single left-to-right pass
///
/// Draws are skipped entirely: they neither extend nor break a run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StreakTracker {
    /// Signed length of the run in progress (positive wins, negative losses)
    pub current: i32,
    pub longest_win: u32,
    pub longest_loss: u32,
    win_run: u32,
    loss_run: u32,
}

impl StreakTracker {
    /// Feed the next result in date order
    pub fn record(&mut self, net_result: NetAmount) {
        if net_result > 0 {
            self.win_run += 1;
            self.loss_run = 0;
            self.current = if self.current >= 0 { self.current + 1 } else { 1 };
            self.longest_win = self.longest_win.max(self.win_run);
        } else if net_result < 0 {
            self.loss_run += 1;
            self.win_run = 0;
            self.current = if self.current <= 0 { self.current - 1 } else { -1 };
            self.longest_loss = self.longest_loss.max(self.loss_run);
        }
    }
}

/// Compute the statistics of one player
///
/// # Arguments
///
/// * `player_name` - The player the history belongs to
/// * `current_balance` - Cumulative balance as held by the record store
/// * `history` - The player's past results, in any order
///
/// # Returns
///
/// A freshly computed `PlayerStatistics`. Draws count toward `total_games`
/// but not toward `games_won`, `games_lost` or any streak.
pub fn compute_statistics(
    player_name: &str,
    current_balance: NetAmount,
    history: &[HistoricalEntry],
) -> PlayerStatistics {
    if history.is_empty() {
        return PlayerStatistics::empty(player_name, current_balance);
    }

    let mut sorted = history.to_vec();
    sorted.sort_by_key(|entry| entry.date);

    let mut stats = PlayerStatistics::empty(player_name, current_balance);
    let mut streaks = StreakTracker::default();
    stats.best_game = NetAmount::MIN;
    stats.worst_game = NetAmount::MAX;

    for entry in &sorted {
        let result = entry.net_result;
        stats.total_games += 1;
        if entry.is_win() {
            stats.games_won += 1;
        } else if entry.is_loss() {
            stats.games_lost += 1;
        }
        stats.total_winnings += result;
        stats.best_game = stats.best_game.max(result);
        stats.worst_game = stats.worst_game.min(result);
        streaks.record(result);
    }

    stats.average_win_loss = average(stats.total_winnings, stats.total_games);
    stats.current_streak = streaks.current;
    stats.longest_win_streak = streaks.longest_win;
    stats.longest_loss_streak = streaks.longest_loss;
    stats
}

/// `total / games`, or zero for no games
fn average(total: NetAmount, games: u32) -> Decimal {
    if games == 0 {
        return Decimal::ZERO;
    }
    Decimal::from(total) / Decimal::from(games)
}
