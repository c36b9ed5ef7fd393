//! Cross-player rankings
//!
//! Pure reductions over a collection of already computed
//! `PlayerStatistics`. On ties every reduction keeps the player that comes
//! first in the collection.

use crate::types::{NetAmount, PlayerStatistics};

/// Number of players listed as top performers
pub const TOP_PERFORMERS: usize = 3;

/// Players sorted by current balance, highest first, truncated to `count`
pub fn top_performers(stats: &[PlayerStatistics], count: usize) -> Vec<&PlayerStatistics> {
    let mut ranked: Vec<&PlayerStatistics> = stats.iter().collect();
    // Stable: equal balances keep collection order
    ranked.sort_by(|a, b| b.current_balance.cmp(&a.current_balance));
    ranked.truncate(count);
    ranked
}

/// Player with the most games played, `None` for an empty collection
pub fn most_active(stats: &[PlayerStatistics]) -> Option<&PlayerStatistics> {
    first_by(stats, |candidate, best| candidate.total_games > best.total_games)
}

/// Player holding the largest single-game win, with that amount
pub fn best_single_game(stats: &[PlayerStatistics]) -> Option<(&str, NetAmount)> {
    first_by(stats, |candidate, best| candidate.best_game > best.best_game)
        .map(|player| (player.player_name.as_str(), player.best_game))
}

/// Player holding the largest single-game loss, with that amount
pub fn worst_single_game(stats: &[PlayerStatistics]) -> Option<(&str, NetAmount)> {
    first_by(stats, |candidate, best| candidate.worst_game < best.worst_game)
        .map(|player| (player.player_name.as_str(), player.worst_game))
}

/// Fold keeping the earliest player unless a later one strictly beats it
fn first_by<F>(stats: &[PlayerStatistics], beats: F) -> Option<&PlayerStatistics>
where
    F: Fn(&PlayerStatistics, &PlayerStatistics) -> bool,
{
    stats.iter().fold(None, |best, candidate| match best {
        Some(current) if !beats(candidate, current) => Some(current),
        _ => Some(candidate),
    })
}

/// A ranked player and the value they were ranked by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedPlayer {
    pub player: String,
    pub value: NetAmount,
}

impl RankedPlayer {
    fn new(player: &str, value: NetAmount) -> Self {
        RankedPlayer {
            player: player.to_string(),
            value,
        }
    }
}

/// All cross-player views of a roster, as owned values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rankings {
    /// Up to three players by current balance, highest first
    pub top_performers: Vec<RankedPlayer>,
    /// Player with the most games, valued by game count
    pub most_active: Option<RankedPlayer>,
    /// Best single game across the roster
    pub best_game: Option<RankedPlayer>,
    /// Worst single game across the roster
    pub worst_game: Option<RankedPlayer>,
}

impl Rankings {
    pub fn compute(stats: &[PlayerStatistics]) -> Self {
        Rankings {
            top_performers: top_performers(stats, TOP_PERFORMERS)
                .into_iter()
                .map(|p| RankedPlayer::new(&p.player_name, p.current_balance))
                .collect(),
            most_active: most_active(stats)
                .map(|p| RankedPlayer::new(&p.player_name, NetAmount::from(p.total_games))),
            best_game: best_single_game(stats).map(|(name, value)| RankedPlayer::new(name, value)),
            worst_game: worst_single_game(stats)
                .map(|(name, value)| RankedPlayer::new(name, value)),
        }
    }
}
