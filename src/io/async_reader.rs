//! Asynchronous history reader with batch interface
//!
//! Provides a streaming interface over history records from a CSV file,
//! read in batches for the async statistics pipeline.
//!
//! # Architecture
//!
//! ```text
//! CSV Reader → AsyncReader → Batches of HistoryRecords
//!                  ↓
//!           csv_format module
//!           (HistoryCsvRecord, convert_history_record)
//! ```

use crate::io::csv_format::{convert_history_record, HistoryCsvRecord};
use crate::types::HistoryRecord;
use csv_async::AsyncReaderBuilder;
use futures::io::AsyncRead;
use futures::stream::StreamExt;

/// Asynchronous history reader
pub struct AsyncReader<R: AsyncRead + Unpin> {
    csv_reader: csv_async::AsyncDeserializer<R>,
}

impl<R: AsyncRead + Unpin + Send + 'static> AsyncReader<R> {
    pub fn new(reader: R) -> Self {
        let csv_reader = AsyncReaderBuilder::new()
            .flexible(true)
            .trim(csv_async::Trim::All)
            .create_deserializer(reader);

        Self { csv_reader }
    }

    /// Read up to `batch_size` history records
    ///
    /// Invalid records are logged and skipped. Returns an empty vector at
    /// end of file.
    pub async fn read_batch(&mut self, batch_size: usize) -> Vec<HistoryRecord> {
        let mut batch = Vec::with_capacity(batch_size);
        let mut records = self.csv_reader.deserialize::<HistoryCsvRecord>();

        while batch.len() < batch_size {
            match records.next().await {
                Some(Ok(csv_record)) => match convert_history_record(csv_record) {
                    Ok(record) => batch.push(record),
                    Err(e) => log::warn!("Skipping history row: {}", e),
                },
                Some(Err(e)) => log::warn!("Skipping history row: CSV parse error: {}", e),
                None => break,
            }
        }

        batch
    }
}
