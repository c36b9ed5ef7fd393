//! Roster assembly
//!
//! Decides which players get statistics and which cumulative balance each
//! one is reported with. Shared by the sync and async statistics pipelines
//! so both produce the same roster.

use crate::types::{HistoricalEntry, NetAmount};
use std::collections::{BTreeSet, HashMap};

/// Cumulative balances by player, as held by the record store
pub type Balances = HashMap<String, NetAmount>;

/// Every player with a history or a stored balance, sorted by name
pub fn roster<'a, I>(history_players: I, balances: &'a Balances) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    history_players
        .into_iter()
        .chain(balances.keys().map(String::as_str))
        .collect::<BTreeSet<&str>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// The player's stored balance, or the sum of their history when the store
/// has none
pub fn current_balance(
    balances: &Balances,
    player: &str,
    history: &[HistoricalEntry],
) -> NetAmount {
    balances
        .get(player)
        .copied()
        .unwrap_or_else(|| history.iter().map(|entry| entry.net_result).sum())
}
