use crate::domain::skip::SkipReason;
use shared_types::{Block, Hash};

/// Events that finality has ordered into one block.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FinalizedBatch {
    /// Event hashes in finalized order.
    pub events: Vec<Hash>,
    /// Block time (unix seconds).
    pub time: u64,
}

impl FinalizedBatch {
    pub fn new(events: Vec<Hash>, time: u64) -> Self {
        Self { events, time }
    }
}

/// Outcome of one materialization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MaterializedBlock {
    pub block: Block,
    pub hash: Hash,
    /// Reason for every skipped position, in position order.
    pub skip_reasons: Vec<(u32, SkipReason)>,
}

impl MaterializedBlock {
    pub fn skipped_count(&self) -> usize {
        self.skip_reasons.len()
    }
}
