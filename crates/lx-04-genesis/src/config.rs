//! Configuration for genesis application

use serde::Deserialize;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GenesisConfig {
    /// Reject validators that have no allocation entry.
    ///
    /// When `false` such validators are accepted and logged.
    pub require_validator_allocations: bool,
}

impl GenesisConfig {
    pub fn strict() -> Self {
        Self {
            require_validator_allocations: true,
        }
    }

    pub fn with_require_validator_allocations(mut self, required: bool) -> Self {
        self.require_validator_allocations = required;
        self
    }
}
