//! # Domain Errors
//!
//! Error types for the Ledger Store subsystem.

use shared_types::{short_hex, Hash};
use thiserror::Error;

/// Errors raised by ledger reads and writes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// A different block is already stored at this index.
    #[error("block conflict at index {index}: stored {}, proposed {}", short_hex(.existing), short_hex(.proposed))]
    BlockConflict {
        index: u64,
        existing: Hash,
        proposed: Hash,
    },

    /// The block does not extend the latest index by exactly one.
    #[error("index gap: expected block {expected}, got {got}")]
    IndexGap { expected: u64, got: u64 },

    /// The block's parent is not the stored block at `index - 1`.
    #[error("parent mismatch at index {index}: expected {}, got {}", short_hex(.expected), short_hex(.actual))]
    ParentMismatch {
        index: u64,
        expected: Hash,
        actual: Hash,
    },

    /// Block 0 has already been written.
    #[error("genesis already applied: {}", short_hex(.genesis_hash))]
    GenesisAlreadyApplied { genesis_hash: Hash },

    /// A block references an event the ledger does not hold.
    #[error("block {index} references missing event {}", short_hex(.event))]
    MissingEvent { index: u64, event: Hash },

    /// A block lists more transactions than a skip mask can address.
    #[error("block {index} has more transactions than u32 positions")]
    TooManyTransactions { index: u64 },

    /// A block write was attempted before genesis.
    #[error("ledger has no genesis block")]
    GenesisMissing,

    /// Underlying key-value store failure.
    #[error("database error: {message}")]
    Database { message: String },

    /// Value could not be encoded or decoded.
    #[error("serialization error: {message}")]
    Serialization { message: String },
}

/// Crate-level result alias.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Key-value store error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct KVStoreError {
    pub message: String,
}

impl KVStoreError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl From<KVStoreError> for LedgerError {
    fn from(e: KVStoreError) -> Self {
        LedgerError::Database { message: e.message }
    }
}

/// Serialization error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct SerializationError {
    pub message: String,
}

impl From<SerializationError> for LedgerError {
    fn from(e: SerializationError) -> Self {
        LedgerError::Serialization { message: e.message }
    }
}
