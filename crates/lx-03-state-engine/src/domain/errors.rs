use shared_types::{short_hex, Address, Hash};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StateError {
    #[error("State not found for root {}", short_hex(.root))]
    StateNotFound { root: Hash },

    #[error("State commit rejected for {}: {reason}", short_hex(.address))]
    StateCommit { address: Address, reason: String },
}
