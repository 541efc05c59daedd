//! Metrics collection for block materialization

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct MaterializerMetrics {
    /// Blocks committed
    pub blocks_materialized: AtomicU64,

    /// Transactions handed to execution
    pub transactions_included: AtomicU64,

    /// Transactions masked out
    pub transactions_skipped: AtomicU64,

    /// Batches rejected because an event was not stored yet
    pub missing_event_failures: AtomicU64,
}

impl MaterializerMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_block(&self, included: usize, skipped: usize) {
        self.blocks_materialized.fetch_add(1, Ordering::Relaxed);
        self.transactions_included
            .fetch_add(included as u64, Ordering::Relaxed);
        self.transactions_skipped
            .fetch_add(skipped as u64, Ordering::Relaxed);
    }

    pub fn record_missing_event(&self) {
        self.missing_event_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn blocks(&self) -> u64 {
        self.blocks_materialized.load(Ordering::Relaxed)
    }

    pub fn included(&self) -> u64 {
        self.transactions_included.load(Ordering::Relaxed)
    }

    pub fn skipped(&self) -> u64 {
        self.transactions_skipped.load(Ordering::Relaxed)
    }

    pub fn missing_events(&self) -> u64 {
        self.missing_event_failures.load(Ordering::Relaxed)
    }
}
