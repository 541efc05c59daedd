//! Configuration for block materialization

use serde::Deserialize;

/// Default per-transaction gas ceiling.
pub const DEFAULT_MAX_TX_GAS: u64 = 30_000_000;

/// Default call data / init code ceiling (128 KiB).
pub const DEFAULT_MAX_TX_DATA_BYTES: usize = 128 * 1024;

/// Shape limits applied when building the skip mask.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MaterializerConfig {
    /// Largest gas limit a transaction may declare.
    pub max_tx_gas: u64,

    /// Largest payload a transaction may carry.
    pub max_tx_data_bytes: usize,
}

impl Default for MaterializerConfig {
    fn default() -> Self {
        Self {
            max_tx_gas: DEFAULT_MAX_TX_GAS,
            max_tx_data_bytes: DEFAULT_MAX_TX_DATA_BYTES,
        }
    }
}

impl MaterializerConfig {
    pub fn with_max_tx_gas(mut self, gas: u64) -> Self {
        self.max_tx_gas = gas;
        self
    }

    pub fn with_max_tx_data_bytes(mut self, bytes: usize) -> Self {
        self.max_tx_data_bytes = bytes;
        self
    }
}
