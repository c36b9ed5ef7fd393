//! Appends settled rounds to a history file
//!
//! The history file is created with its header on first use; later rounds
//! are appended below the existing rows. A file whose last row lacks a line
//! terminator gets one before the new rows.

use crate::io::csv_format::write_history_csv;
use crate::types::{HistoricalEntry, LedgerError};
use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

/// Append history rows to `path`, creating the file if needed
///
/// # Returns
///
/// The number of rows written.
pub fn append_history(
    path: &Path,
    rows: &[(String, HistoricalEntry)],
) -> Result<usize, LedgerError> {
    let mut file = OpenOptions::new()
        .read(true)
        .create(true)
        .append(true)
        .open(path)?;
    let is_new = file.metadata()?.len() == 0;

    if !is_new && !ends_with_newline(&mut file)? {
        file.write_all(b"\n")?;
    }

    write_history_csv(rows, is_new, &mut file)?;
    Ok(rows.len())
}

/// Whether the last byte of a non-empty file is a line feed
fn ends_with_newline(file: &mut File) -> Result<bool, LedgerError> {
    let mut last = [0u8; 1];
    file.seek(SeekFrom::End(-1))?;
    file.read_exact(&mut last)?;
    Ok(last[0] == b'\n')
}
