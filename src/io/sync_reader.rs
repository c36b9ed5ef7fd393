//! Synchronous CSV readers
//!
//! Provides a streaming iterator over history records, plus whole-file
//! readers for rounds and balances. Delegates CSV format concerns to the
//! csv_format module.
//!
//! # Error Handling
//!
//! - Fatal errors (file not found, I/O errors) are returned from `new()` and
//!   from the whole-file readers
//! - History rows are independent, so the iterator yields a bad row as an
//!   `Err` and keeps going
//! - Round and balance rows are not: one bad row fails the whole file, since a
//!   round missing a row would settle to the wrong amounts

use crate::core::roster::Balances;
use crate::io::csv_format::{
    convert_history_record, convert_round_record, BalanceCsvRecord, HistoryCsvRecord,
    RoundCsvRecord,
};
use crate::types::{GameRound, HistoryRecord, LedgerError};
use csv::{ReaderBuilder, Trim};
use std::fs::File;
use std::io::ErrorKind;
use std::path::Path;

/// Open a file, reporting a missing file as `FileNotFound`
pub(crate) fn open_file(path: &Path) -> Result<File, LedgerError> {
    File::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => LedgerError::file_not_found(path),
        _ => LedgerError::from(e),
    })
}

fn csv_reader(file: File) -> csv::Reader<File> {
    ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .buffer_capacity(8 * 1024)
        .from_reader(file)
}

/// Synchronous history reader
///
/// Provides an iterator interface over history records with constant
/// memory usage.
///
/// # Examples
///
/// ```no_run
/// use poker_ledger::io::sync_reader::SyncReader;
/// use std::path::Path;
///
/// let reader = SyncReader::new(Path::new("history.csv")).unwrap();
/// let records: Vec<_> = reader.filter_map(Result::ok).collect();
/// println!("Successfully parsed {} records", records.len());
/// ```
#[derive(Debug)]
pub struct SyncReader {
    reader: csv::Reader<File>,
    line_num: usize,
}

impl SyncReader {
    /// Open a history file for streaming iteration
    pub fn new(path: &Path) -> Result<Self, LedgerError> {
        let file = open_file(path)?;

        Ok(Self {
            reader: csv_reader(file),
            line_num: 0,
        })
    }
}

impl Iterator for SyncReader {
    type Item = Result<HistoryRecord, String>;

    /// Get the next history record, with the line number in any error
    fn next(&mut self) -> Option<Self::Item> {
        let mut deserializer = self.reader.deserialize::<HistoryCsvRecord>();

        let result = deserializer.next()?;
        self.line_num += 1;
        // +1 for the header row
        let line = self.line_num + 1;
        Some(match result {
            Ok(csv_record) => {
                convert_history_record(csv_record).map_err(|e| format!("Line {}: {}", line, e))
            }
            Err(e) => Err(format!("Line {}: CSV parse error: {}", line, e)),
        })
    }
}

/// Read a whole round file (`player,buy_in,cash_out`)
///
/// # Errors
///
/// Returns an error if the file cannot be opened, or if any row is malformed
/// or carries an amount that is not a non-negative integer. Blank amounts are
/// not errors here; the settlement engine reports them.
pub fn read_round(path: &Path) -> Result<GameRound, LedgerError> {
    let mut reader = csv_reader(open_file(path)?);
    let mut entries = Vec::new();

    for (index, result) in reader.deserialize::<RoundCsvRecord>().enumerate() {
        let record = result?;
        let entry = convert_round_record(record)
            .map_err(|e| LedgerError::parse_error(Some(index as u64 + 2), e))?;
        entries.push(entry);
    }

    Ok(GameRound::new(entries))
}

/// Read a whole balances file (`player,balance`)
///
/// A player listed twice keeps the last balance.
pub fn read_balances(path: &Path) -> Result<Balances, LedgerError> {
    let mut reader = csv_reader(open_file(path)?);
    let mut balances = Balances::new();

    for result in reader.deserialize::<BalanceCsvRecord>() {
        let record = result?;
        let player = record.player.trim();
        if player.is_empty() {
            return Err(LedgerError::parse_error(None, "Balance row is missing its player"));
        }
        balances.insert(player.to_string(), record.balance);
    }

    Ok(balances)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{HistoricalEntry, PlayerEntry};
    use chrono::NaiveDate;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content.as_bytes())
            .expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, day).unwrap()
    }

    #[test]
    fn test_history_reader_yields_records() {
        let file = create_temp_csv("player,date,net\nAnn,2024-01-01,30\nBob,2024-01-01,-30\n");
        let records: Vec<_> = SyncReader::new(file.path())
            .unwrap()
            .collect::<Result<_, _>>()
            .unwrap();

        assert_eq!(
            records,
            vec![
                HistoryRecord {
                    player: "Ann".to_string(),
                    entry: HistoricalEntry::new(date(1), 30)
                },
                HistoryRecord {
                    player: "Bob".to_string(),
                    entry: HistoricalEntry::new(date(1), -30)
                },
            ]
        );
    }

    #[test]
    fn test_history_reader_continues_after_bad_row() {
        let file = create_temp_csv(
            "player,date,net\n\
             Ann,2024-01-01,30\n\
             Bob,not-a-date,-30\n\
             Cat,2024-01-02,5\n",
        );
        let results: Vec<_> = SyncReader::new(file.path()).unwrap().collect();

        assert_eq!(results.len(), 3);
        assert!(results[0].is_ok());
        let error = results[1].as_ref().unwrap_err();
        assert!(error.starts_with("Line 3:"), "got {}", error);
        assert!(error.contains("Invalid date"));
        assert!(results[2].is_ok());
    }

    #[test]
    fn test_history_reader_whitespace_handling() {
        let file = create_temp_csv("player,date,net\n  Ann  ,  2024-01-03 , -7 \n");
        let record = SyncReader::new(file.path()).unwrap().next().unwrap().unwrap();
        assert_eq!(record.player, "Ann");
        assert_eq!(record.entry, HistoricalEntry::new(date(3), -7));
    }

    #[test]
    fn test_history_reader_missing_file() {
        let result = SyncReader::new(Path::new("nonexistent.csv"));
        assert!(matches!(result, Err(LedgerError::FileNotFound { .. })));
    }

    #[test]
    fn test_read_round() {
        let file = create_temp_csv("player,buy_in,cash_out\nA,100,150\nB,100,\nC,100,100\n");
        let round = read_round(file.path()).unwrap();

        assert_eq!(
            round.entries(),
            &[
                PlayerEntry::new("A", 100, 150),
                PlayerEntry {
                    name: "B".to_string(),
                    buy_in: Some(100),
                    cash_out: None
                },
                PlayerEntry::new("C", 100, 100),
            ]
        );
    }

    #[test]
    fn test_read_round_rejects_negative_amount() {
        let file = create_temp_csv("player,buy_in,cash_out\nA,100,150\nB,-100,50\n");
        let error = read_round(file.path()).unwrap_err();
        assert!(matches!(error, LedgerError::ParseError { line: Some(3), .. }), "{:?}", error);
    }

    #[test]
    fn test_read_balances() {
        let file = create_temp_csv("player,balance\nAnn,120\nBob,-45\nAnn,130\n");
        let balances = read_balances(file.path()).unwrap();
        assert_eq!(balances.len(), 2);
        assert_eq!(balances["Ann"], 130);
        assert_eq!(balances["Bob"], -45);
    }

    #[test]
    fn test_read_balances_bad_amount() {
        let file = create_temp_csv("player,balance\nAnn,lots\n");
        assert!(matches!(
            read_balances(file.path()),
            Err(LedgerError::ParseError { .. })
        ));
    }
}
