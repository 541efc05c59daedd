use lx_02_ledger_store::LedgerError;
use lx_03_state_engine::StateError;
use shared_types::{short_hex, Hash};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, ReaderError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReaderError {
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    State(#[from] StateError),

    /// A stored block references an event the ledger does not hold.
    #[error("Block {block} references missing event {}", short_hex(.event))]
    MissingEvent { block: u64, event: Hash },
}
