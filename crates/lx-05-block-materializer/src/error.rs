//! Error types for block materialization

use lx_02_ledger_store::LedgerError;
use shared_types::{short_hex, Hash};
use thiserror::Error;

/// Result type alias for materialization
pub type Result<T> = std::result::Result<T, MaterializeError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MaterializeError {
    /// A finalized event has not been stored yet. Nothing was written; the
    /// batch can be retried once the event arrives.
    #[error("Finalized event {} is not in the ledger", short_hex(.hash))]
    MissingEvent { hash: Hash },

    /// The batch carries more transactions than a skip position can address.
    #[error("Batch carries {transactions} transactions")]
    BatchTooLarge { transactions: usize },

    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
