//! Processing strategy module for roster statistics
//!
//! This module defines the Strategy pattern for the statistics pipeline:
//! loading a history file (and optional balances), then computing every
//! player's statistics. Different implementations (sequential, async batch)
//! can be selected at runtime and produce identical results.

use crate::cli::StrategyType;
use crate::types::{LedgerError, PlayerStatistics};
use std::path::{Path, PathBuf};

pub mod r#async;
pub mod sync;

pub use self::r#async::{AsyncProcessingStrategy, BatchConfig};
pub use sync::SyncProcessingStrategy;

/// Files a statistics run reads from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatisticsInput {
    /// History file (`player,date,net`)
    pub history: PathBuf,

    /// Optional balances file (`player,balance`)
    pub balances: Option<PathBuf>,
}

impl StatisticsInput {
    pub fn new(history: impl Into<PathBuf>) -> Self {
        Self {
            history: history.into(),
            balances: None,
        }
    }

    pub fn with_balances(mut self, balances: impl Into<PathBuf>) -> Self {
        self.balances = Some(balances.into());
        self
    }

    pub fn balances_path(&self) -> Option<&Path> {
        self.balances.as_deref()
    }
}

/// Processing strategy trait for roster statistics
///
/// Implementations read the input files, compute one `PlayerStatistics` per
/// roster player and return them sorted by player name.
pub trait ProcessingStrategy: Send + Sync {
    /// Compute statistics for every player in the input
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - An input file cannot be opened
    /// - The balances file is malformed
    /// - The async runtime fails
    ///
    /// Malformed history rows are logged and skipped; they do not fail the run.
    fn compute(&self, input: &StatisticsInput) -> Result<Vec<PlayerStatistics>, LedgerError>;
}

/// Create a processing strategy based on the specified strategy type
///
/// # Arguments
///
/// * `strategy_type` - The type of processing strategy to create (Sync or Async)
/// * `config` - Optional configuration for async batch processing (ignored for sync)
pub fn create_strategy(
    strategy_type: StrategyType,
    config: Option<BatchConfig>,
) -> Box<dyn ProcessingStrategy> {
    match strategy_type {
        StrategyType::Sync => Box::new(SyncProcessingStrategy),
        StrategyType::Async => {
            let config = config.unwrap_or_default();
            Box::new(AsyncProcessingStrategy::new(config))
        }
    }
}
