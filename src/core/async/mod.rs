//! Asynchronous implementations of core components
//!
//! This module provides thread-safe, concurrent components for computing
//! statistics over a whole roster at once.
//!
//! # Architecture
//!
//! - **AsyncHistoryStore**: Thread-safe per-player histories using DashMap
//! - **BatchProcessor**: Loads history batches and fans statistics out to
//!   one tokio task per player
//!
//! # Thread Safety
//!
//! Each player's statistics read only that player's history, so players are
//! processed in parallel with no shared mutable state beyond the store's
//! per-player locks.

pub mod batch_processor;
pub mod history_store;

pub use batch_processor::BatchProcessor;
pub use history_store::AsyncHistoryStore;
