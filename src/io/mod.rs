//! I/O module
//!
//! Handles CSV parsing and output.
//!
//! # Components
//!
//! - `csv_format` - CSV format handling (record conversion, output serialization)
//! - `sync_reader` - Synchronous history iterator plus round and balance readers
//! - `async_reader` - Asynchronous history reader with batch reading interface
//! - `history_writer` - Appends settled rounds to a history file

pub mod async_reader;
pub mod csv_format;
pub mod history_writer;
pub mod sync_reader;

pub use async_reader::AsyncReader;
pub use csv_format::{
    parse_date, write_history_csv, write_rankings_csv, write_statistics_csv, write_transfers_csv,
};
pub use history_writer::append_history;
pub use sync_reader::{read_balances, read_round, SyncReader};
