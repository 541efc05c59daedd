//! Error types for the genesis builder

use lx_02_ledger_store::LedgerError;
use lx_03_state_engine::StateError;
use shared_types::{short_hex, Address, Hash, ParseError};
use thiserror::Error;

/// Result type alias for genesis operations
pub type Result<T> = std::result::Result<T, GenesisError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenesisError {
    /// The ledger already holds a genesis block.
    #[error("Genesis already applied: {}", short_hex(.genesis_hash))]
    AlreadyApplied { genesis_hash: Hash },

    /// The state engine rejected the allocation.
    #[error(transparent)]
    StateCommit(#[from] StateError),

    /// Ledger write failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),

    /// Genesis description could not be interpreted.
    #[error("Invalid genesis spec: {0}")]
    InvalidSpec(String),

    /// A validator has no allocation entry and the config requires one.
    #[error("Validator {} has no genesis allocation", short_hex(.address))]
    MissingValidatorAllocation { address: Address },

    /// Secret key bytes are not a valid secp256k1 scalar.
    #[error("Invalid secret key")]
    InvalidKey,
}

impl From<ParseError> for GenesisError {
    fn from(e: ParseError) -> Self {
        GenesisError::InvalidSpec(e.to_string())
    }
}
