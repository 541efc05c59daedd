//! Configuration for the state engine

use serde::Deserialize;

/// Largest deployable contract (EIP-170).
pub const MAX_CODE_SIZE: usize = 24_576;

/// Commit limits.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct StateConfig {
    /// Maximum contract code size in bytes.
    pub max_code_size: usize,

    /// Maximum non-zero storage slots per account.
    pub max_storage_slots_per_account: usize,
}

impl Default for StateConfig {
    fn default() -> Self {
        Self {
            max_code_size: MAX_CODE_SIZE,
            max_storage_slots_per_account: 10_000,
        }
    }
}

impl StateConfig {
    pub fn with_max_code_size(mut self, bytes: usize) -> Self {
        self.max_code_size = bytes;
        self
    }

    pub fn with_max_storage_slots(mut self, slots: usize) -> Self {
        self.max_storage_slots_per_account = slots;
        self
    }
}
