//! CSV format handling for rounds, histories, balances and results
//!
//! This module centralizes all CSV format concerns, providing:
//! - Record structures for deserialization of the three input files
//! - Conversion from CSV records to domain types
//! - Output serialization for transfers, statistics, rankings and history rows
//!
//! All functions are pure (no file I/O) for easy testing.

use crate::core::rankings::{RankedPlayer, Rankings};
use crate::types::{
    Chips, HistoricalEntry, HistoryRecord, LedgerError, NetAmount, PlayerEntry, PlayerStatistics,
    TransferInstruction,
};
use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Deserialize;
use std::io::Write;

/// Date format used in history files and on the command line
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Decimal places printed for averages
pub const AVERAGE_DECIMAL_PLACES: u32 = 2;

/// Header of a history file
pub const HISTORY_HEADER: [&str; 3] = ["player", "date", "net"];

/// Round file row: `player,buy_in,cash_out`
///
/// Amounts are kept as strings so a blank cell can be told apart from a
/// malformed one.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RoundCsvRecord {
    pub player: String,
    pub buy_in: Option<String>,
    pub cash_out: Option<String>,
}

/// History file row: `player,date,net`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct HistoryCsvRecord {
    pub player: String,
    pub date: String,
    pub net: String,
}

/// Balances file row: `player,balance`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BalanceCsvRecord {
    pub player: String,
    pub balance: NetAmount,
}

/// Parse a `YYYY-MM-DD` date
pub fn parse_date(value: &str) -> Result<NaiveDate, LedgerError> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT)
        .map_err(|_| LedgerError::invalid_date(value))
}

/// Parse an optional chip amount; blank means absent
fn parse_chips(
    value: Option<String>,
    column: &str,
    player: &str,
) -> Result<Option<Chips>, String> {
    match value {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<Chips>()
            .map(Some)
            .map_err(|_| format!("Invalid {} '{}' for player '{}'", column, raw, player)),
        _ => Ok(None),
    }
}

/// Convert a RoundCsvRecord to a PlayerEntry
///
/// Blank amounts become `None` and are left for the settlement engine to
/// report. Amounts that are present but not non-negative integers are
/// rejected here.
pub fn convert_round_record(record: RoundCsvRecord) -> Result<PlayerEntry, String> {
    let buy_in = parse_chips(record.buy_in, "buy_in", &record.player)?;
    let cash_out = parse_chips(record.cash_out, "cash_out", &record.player)?;

    Ok(PlayerEntry {
        name: record.player,
        buy_in,
        cash_out,
    })
}

/// Convert a HistoryCsvRecord to a HistoryRecord
pub fn convert_history_record(record: HistoryCsvRecord) -> Result<HistoryRecord, String> {
    let player = record.player.trim();
    if player.is_empty() {
        return Err("History row is missing its player".to_string());
    }

    let date = parse_date(&record.date).map_err(|e| format!("{} for player '{}'", e, player))?;
    let net_result = record
        .net
        .trim()
        .parse::<NetAmount>()
        .map_err(|_| format!("Invalid net result '{}' for player '{}'", record.net, player))?;

    Ok(HistoryRecord {
        player: player.to_string(),
        entry: HistoricalEntry::new(date, net_result),
    })
}

/// Write transfers in generation order: `from,to,amount`
pub fn write_transfers_csv(
    transfers: &[TransferInstruction],
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record(["from", "to", "amount"])?;
    for transfer in transfers {
        writer.write_record([
            transfer.from.as_str(),
            transfer.to.as_str(),
            transfer.amount.to_string().as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Round an average for display, half away from zero
pub fn display_average(average: Decimal) -> Decimal {
    average.round_dp_with_strategy(AVERAGE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Write one statistics row per player, in the order given
///
/// The average is rounded with [`display_average`] and always printed with
/// two decimals.
pub fn write_statistics_csv(
    stats: &[PlayerStatistics],
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    writer.write_record([
        "player",
        "games",
        "won",
        "lost",
        "total_winnings",
        "balance",
        "average",
        "best",
        "worst",
        "current_streak",
        "longest_win_streak",
        "longest_loss_streak",
    ])?;

    for player in stats {
        writer.write_record(&[
            player.player_name.clone(),
            player.total_games.to_string(),
            player.games_won.to_string(),
            player.games_lost.to_string(),
            player.total_winnings.to_string(),
            player.current_balance.to_string(),
            format!("{:.2}", display_average(player.average_win_loss)),
            player.best_game.to_string(),
            player.worst_game.to_string(),
            player.current_streak.to_string(),
            player.longest_win_streak.to_string(),
            player.longest_loss_streak.to_string(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Write rankings as `category,player,value` rows
///
/// Undefined views (empty roster) are omitted.
pub fn write_rankings_csv(rankings: &Rankings, output: &mut dyn Write) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);
    writer.write_record(["category", "player", "value"])?;

    let rows = rankings
        .top_performers
        .iter()
        .map(|ranked| ("top_performer", ranked))
        .chain(rankings.most_active.iter().map(|r| ("most_active", r)))
        .chain(rankings.best_game.iter().map(|r| ("best_game", r)))
        .chain(rankings.worst_game.iter().map(|r| ("worst_game", r)));

    for (category, RankedPlayer { player, value }) in rows {
        writer.write_record([category, player.as_str(), value.to_string().as_str()])?;
    }

    writer.flush()?;
    Ok(())
}

/// Write history rows, optionally preceded by the header
pub fn write_history_csv(
    rows: &[(String, HistoricalEntry)],
    include_header: bool,
    output: &mut dyn Write,
) -> Result<(), LedgerError> {
    let mut writer = csv::Writer::from_writer(output);

    if include_header {
        writer.write_record(HISTORY_HEADER)?;
    }
    for (player, entry) in rows {
        writer.write_record([
            player.as_str(),
            entry.date.format(DATE_FORMAT).to_string().as_str(),
            entry.net_result.to_string().as_str(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}
