//! Asynchronous batch processing strategy
//!
//! Multi-threaded statistics pipeline. The history file is read in batches,
//! each batch is partitioned by player into a shared store, and once the
//! whole file is loaded every player's statistics are computed in their own
//! tokio task.
//!
//! # Architecture
//!
//! ```text
//! AsyncProcessingStrategy
//!     ├── BatchConfig (batch_size, max_concurrent_batches)
//!     ├── AsyncReader (batch CSV reading)
//!     └── BatchProcessor (player partitioning + one task per player)
//!         └── AsyncHistoryStore (thread-safe per-player histories)
//! ```
//!
//! Batches are loaded one after another so each player's rows keep their file
//! order. Output is sorted by player name, matching the sync strategy.

use crate::core::r#async::{AsyncHistoryStore, BatchProcessor};
use crate::core::roster::Balances;
use crate::io::async_reader::AsyncReader;
use crate::io::sync_reader::read_balances;
use crate::strategy::{ProcessingStrategy, StatisticsInput};
use crate::types::{LedgerError, PlayerStatistics};
use std::io::ErrorKind;
use std::sync::Arc;

/// Configuration for batch processing
///
/// Controls how history rows are batched and the number of worker threads.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Number of history rows per batch
    pub batch_size: usize,
    /// Number of runtime worker threads
    pub max_concurrent_batches: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            batch_size: 1000,
            max_concurrent_batches: num_cpus::get(),
        }
    }
}

impl BatchConfig {
    /// Create a new BatchConfig; zero values fall back to the defaults
    pub fn new(batch_size: usize, max_concurrent_batches: usize) -> Self {
        let default = Self::default();

        let batch_size = if batch_size == 0 {
            log::warn!(
                "Invalid batch_size ({}), using default ({})",
                batch_size,
                default.batch_size
            );
            default.batch_size
        } else {
            batch_size
        };

        let max_concurrent_batches = if max_concurrent_batches == 0 {
            log::warn!(
                "Invalid max_concurrent_batches ({}), using default ({})",
                max_concurrent_batches,
                default.max_concurrent_batches
            );
            default.max_concurrent_batches
        } else {
            max_concurrent_batches
        };

        Self {
            batch_size,
            max_concurrent_batches,
        }
    }
}

/// Asynchronous batch processing strategy
#[derive(Debug, Clone)]
pub struct AsyncProcessingStrategy {
    config: BatchConfig,
}

impl AsyncProcessingStrategy {
    pub fn new(config: BatchConfig) -> Self {
        Self { config }
    }
}

impl ProcessingStrategy for AsyncProcessingStrategy {
    fn compute(&self, input: &StatisticsInput) -> Result<Vec<PlayerStatistics>, LedgerError> {
        let balances = match input.balances_path() {
            Some(path) => read_balances(path)?,
            None => Balances::new(),
        };

        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(self.config.max_concurrent_batches)
            .build()
            .map_err(LedgerError::runtime)?;

        runtime.block_on(async {
            let store = Arc::new(AsyncHistoryStore::new());
            let processor = BatchProcessor::new(Arc::clone(&store));

            let file = tokio::fs::File::open(&input.history)
                .await
                .map_err(|e| match e.kind() {
                    ErrorKind::NotFound => LedgerError::file_not_found(&input.history),
                    _ => LedgerError::from(e),
                })?;

            // Wrap tokio file in a compatibility layer for csv-async
            let compat_file = tokio_util::compat::TokioAsyncReadCompatExt::compat(file);
            let mut reader = AsyncReader::new(compat_file);

            let mut loaded = 0;
            loop {
                let batch = reader.read_batch(self.config.batch_size).await;
                if batch.is_empty() {
                    break;
                }
                loaded += processor.load_batch(batch).await?;
            }
            log::debug!("Loaded {} history rows", loaded);

            processor.compute_all(Arc::new(balances)).await
        })
    }
}
