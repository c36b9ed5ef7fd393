//! Player statistics types
//!
//! `PlayerStatistics` is recomputed from scratch on every request; nothing
//! here is cached or updated incrementally.

use super::round::NetAmount;
use rust_decimal::Decimal;

/// Longitudinal performance summary of one player
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStatistics {
    /// The player these statistics describe
    pub player_name: String,

    /// Number of games in the history, draws included
    pub total_games: u32,

    /// Games with a positive net result
    pub games_won: u32,

    /// Games with a negative net result
    pub games_lost: u32,

    /// Sum of all net results
    pub total_winnings: NetAmount,

    /// Cumulative balance supplied by the caller
    ///
    /// Usually equal to `total_winnings`, but owned by the record store and
    /// may include adjustments the history does not show.
    pub current_balance: NetAmount,

    /// `total_winnings / total_games` at full precision
    ///
    /// Zero when the history is empty. Rounding is left to the output layer.
    pub average_win_loss: Decimal,

    /// Largest single net result (0 for an empty history)
    pub best_game: NetAmount,

    /// Smallest single net result (0 for an empty history)
    pub worst_game: NetAmount,

    /// Signed length of the run at the end of the history
    ///
    /// Positive for consecutive wins, negative for consecutive losses.
    /// Draws neither extend nor break a run.
    pub current_streak: i32,

    /// Longest run of wins, ignoring draws
    pub longest_win_streak: u32,

    /// Longest run of losses, ignoring draws
    pub longest_loss_streak: u32,
}

impl PlayerStatistics {
    /// Zeroed statistics for a player with no recorded games
    pub fn empty(player_name: impl Into<String>, current_balance: NetAmount) -> Self {
        PlayerStatistics {
            player_name: player_name.into(),
            total_games: 0,
            games_won: 0,
            games_lost: 0,
            total_winnings: 0,
            current_balance,
            average_win_loss: Decimal::ZERO,
            best_game: 0,
            worst_game: 0,
            current_streak: 0,
            longest_win_streak: 0,
            longest_loss_streak: 0,
        }
    }

    /// Games that ended exactly even
    pub fn games_drawn(&self) -> u32 {
        self.total_games - self.games_won - self.games_lost
    }
}
