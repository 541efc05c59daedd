use crate::domain::StateError;
use shared_types::{Address, Allocation, Hash, StorageKey, StorageValue, U256};

/// Primary API for state commitment and historical reads.
pub trait StateEngine: Send + Sync {
    type View: StateView;

    /// Commit an allocation and return its root.
    ///
    /// Committing the same allocation twice yields the same root.
    fn commit(&self, alloc: &Allocation) -> Result<Hash, StateError>;

    /// Read-only view of the state committed under `root`.
    fn state_at(&self, root: &Hash) -> Result<Self::View, StateError>;

    fn has_state(&self, root: &Hash) -> bool;
}

/// Read-only account state at one root.
///
/// Unknown accounts read as zero balance, zero nonce, empty code and zero
/// storage; `code_hash` is zero for them.
pub trait StateView: Send + Sync {
    fn root(&self) -> Hash;

    fn exists(&self, address: &Address) -> bool;

    fn balance(&self, address: &Address) -> U256;

    fn nonce(&self, address: &Address) -> u64;

    fn code(&self, address: &Address) -> Vec<u8>;

    fn code_hash(&self, address: &Address) -> Hash;

    fn storage(&self, address: &Address, key: &StorageKey) -> StorageValue;
}
