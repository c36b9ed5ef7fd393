//! Game round types for the poker ledger
//!
//! This module defines the per-game input handed to the settlement engine:
//! a `GameRound` made of ordered `PlayerEntry` rows, and the `NetBalance`
//! derived from each row.

use super::error::{RoundField, SettlementError};
use super::history::HistoricalEntry;
use chrono::NaiveDate;
use std::collections::HashSet;

/// Buy-in or cash-out amount
///
/// Supports amounts from 0 to 4,294,967,295. Non-negative by type, so
/// format and sign validation happens before a round reaches the engine.
pub type Chips = u32;

/// Signed money amount
///
/// Used for net balances, historical results, cumulative balances and
/// transfer amounts. Always wide enough to hold `cash_out - buy_in` for
/// any pair of `Chips` values.
pub type NetAmount = i64;

/// A single row of a game round
///
/// Amount fields are optional because the row comes straight from user
/// input: a blank field is kept as `None` and reported by the settlement
/// engine as a missing field rather than silently treated as zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerEntry {
    /// Player name, unique within a round
    pub name: String,

    /// Chips bought in over the whole session
    pub buy_in: Option<Chips>,

    /// Chips held when the player cashed out
    pub cash_out: Option<Chips>,
}

impl PlayerEntry {
    /// Create a complete entry with both amounts present
    pub fn new(name: impl Into<String>, buy_in: Chips, cash_out: Chips) -> Self {
        PlayerEntry {
            name: name.into(),
            buy_in: Some(buy_in),
            cash_out: Some(cash_out),
        }
    }
}

/// Net result of one player in one round
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetBalance {
    /// Player name
    pub name: String,

    /// `cash_out - buy_in`; positive means the player is owed money
    pub amount: NetAmount,
}

/// The validated input to a single game
///
/// Entry order is significant: it is the tie-break order used when two
/// players owe or are owed the same amount during settlement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GameRound {
    entries: Vec<PlayerEntry>,
}

impl GameRound {
    /// Create a round from its rows, in input order
    pub fn new(entries: Vec<PlayerEntry>) -> Self {
        GameRound { entries }
    }

    /// Rows of the round, in input order
    pub fn entries(&self) -> &[PlayerEntry] {
        &self.entries
    }

    /// Compute the net balance of every row, in input order
    ///
    /// Rows are checked in order and the first problem is reported: a blank
    /// name, a missing buy-in or a missing cash-out yields
    /// `SettlementError::MissingField` (rows are numbered from 1), and a
    /// name seen earlier in the round yields `SettlementError::DuplicatePlayer`.
    ///
    /// Names are trimmed. The conservation check is not performed here.
    pub fn net_balances(&self) -> Result<Vec<NetBalance>, SettlementError> {
        let mut seen = HashSet::with_capacity(self.entries.len());
        let mut balances = Vec::with_capacity(self.entries.len());

        for (index, entry) in self.entries.iter().enumerate() {
            let row = index + 1;
            let name = entry.name.trim();
            if name.is_empty() {
                return Err(SettlementError::missing_field(row, RoundField::Name));
            }
            let buy_in = entry
                .buy_in
                .ok_or_else(|| SettlementError::missing_field(row, RoundField::BuyIn))?;
            let cash_out = entry
                .cash_out
                .ok_or_else(|| SettlementError::missing_field(row, RoundField::CashOut))?;

            if !seen.insert(name) {
                return Err(SettlementError::duplicate_player(name));
            }

            balances.push(NetBalance {
                name: name.to_string(),
                amount: NetAmount::from(cash_out) - NetAmount::from(buy_in),
            });
        }

        Ok(balances)
    }

    /// Map every row to the history entry it produces when the round is
    /// settled on `date`
    ///
    /// Fails with the same errors as [`GameRound::net_balances`].
    pub fn history_entries(
        &self,
        date: NaiveDate,
    ) -> Result<Vec<(String, HistoricalEntry)>, SettlementError> {
        Ok(self
            .net_balances()?
            .into_iter()
            .map(|balance| (balance.name, HistoricalEntry::new(date, balance.amount)))
            .collect())
    }
}

impl FromIterator<PlayerEntry> for GameRound {
    fn from_iter<I: IntoIterator<Item = PlayerEntry>>(iter: I) -> Self {
        GameRound::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn entry(name: &str, buy_in: Option<Chips>, cash_out: Option<Chips>) -> PlayerEntry {
        PlayerEntry {
            name: name.to_string(),
            buy_in,
            cash_out,
        }
    }

    #[test]
    fn test_net_balances_in_input_order() {
        let round: GameRound = vec![
            PlayerEntry::new("A", 100, 150),
            PlayerEntry::new("B", 100, 50),
            PlayerEntry::new("C", 100, 100),
        ]
        .into_iter()
        .collect();

        let balances = round.net_balances().unwrap();
        let amounts: Vec<(&str, NetAmount)> = balances
            .iter()
            .map(|b| (b.name.as_str(), b.amount))
            .collect();
        assert_eq!(amounts, vec![("A", 50), ("B", -50), ("C", 0)]);
    }

    #[test]
    fn test_net_balances_trims_names() {
        let round = GameRound::new(vec![PlayerEntry::new("  Ann ", 20, 10)]);
        let balances = round.net_balances().unwrap();
        assert_eq!(balances[0].name, "Ann");
        assert_eq!(balances[0].amount, -10);
    }

    #[test]
    fn test_net_balances_extreme_amounts() {
        let round = GameRound::new(vec![
            PlayerEntry::new("A", 0, Chips::MAX),
            PlayerEntry::new("B", Chips::MAX, 0),
        ]);
        let balances = round.net_balances().unwrap();
        assert_eq!(balances[0].amount, NetAmount::from(Chips::MAX));
        assert_eq!(balances[1].amount, -NetAmount::from(Chips::MAX));
    }

    #[rstest]
    #[case::blank_name(entry("  ", Some(1), Some(1)), RoundField::Name)]
    #[case::missing_buy_in(entry("A", None, Some(1)), RoundField::BuyIn)]
    #[case::missing_cash_out(entry("A", Some(1), None), RoundField::CashOut)]
    #[case::name_checked_first(entry("", None, None), RoundField::Name)]
    fn test_net_balances_missing_field(#[case] bad: PlayerEntry, #[case] field: RoundField) {
        let round = GameRound::new(vec![PlayerEntry::new("Z", 10, 10), bad]);
        assert_eq!(
            round.net_balances(),
            Err(SettlementError::MissingField { row: 2, field })
        );
    }

    #[test]
    fn test_net_balances_duplicate_player() {
        let round = GameRound::new(vec![
            PlayerEntry::new("A", 10, 10),
            PlayerEntry::new("A ", 10, 10),
        ]);
        assert_eq!(
            round.net_balances(),
            Err(SettlementError::DuplicatePlayer {
                name: "A".to_string()
            })
        );
    }

    #[test]
    fn test_history_entries_use_round_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        let round = GameRound::new(vec![
            PlayerEntry::new("A", 100, 130),
            PlayerEntry::new("B", 100, 70),
        ]);

        let entries = round.history_entries(date).unwrap();
        assert_eq!(
            entries,
            vec![
                ("A".to_string(), HistoricalEntry::new(date, 30)),
                ("B".to_string(), HistoricalEntry::new(date, -30)),
            ]
        );
    }

    #[test]
    fn test_empty_round() {
        let round = GameRound::default();
        assert!(round.entries().is_empty());
        assert_eq!(round.net_balances(), Ok(vec![]));
    }
}
