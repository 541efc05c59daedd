//! JSON genesis description.
//!
//! ```json
//! {
//!   "time": 1565000000,
//!   "alloc": {
//!     "0x<40 hex>": { "balance": "1000", "code": "0x6001", "storage": { "0x<64 hex>": "0x01" } }
//!   },
//!   "validators": [ { "address": "0x<40 hex>", "stake": 1 } ]
//! }
//! ```

use crate::error::{GenesisError, Result};
use serde::Deserialize;
use shared_types::{parse::parse_quantity, U256};
use std::collections::BTreeMap;

/// A balance given as a JSON number, a decimal string or a `0x` hex string.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum Quantity {
    Number(u64),
    Text(String),
}

impl Default for Quantity {
    fn default() -> Self {
        Quantity::Number(0)
    }
}

impl Quantity {
    pub fn to_u256(&self) -> Result<U256> {
        match self {
            Quantity::Number(n) => Ok(U256::from(*n)),
            Quantity::Text(s) => Ok(parse_quantity(s)?),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AccountSpec {
    #[serde(default)]
    pub balance: Quantity,
    #[serde(default)]
    pub code: Option<String>,
    /// 32-byte keys to values of up to 32 bytes.
    #[serde(default)]
    pub storage: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorSpec {
    pub address: String,
    pub stake: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GenesisSpec {
    /// Genesis time (unix seconds).
    pub time: u64,
    #[serde(default)]
    pub alloc: BTreeMap<String, AccountSpec>,
    #[serde(default)]
    pub validators: Vec<ValidatorSpec>,
}

impl GenesisSpec {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| GenesisError::InvalidSpec(e.to_string()))
    }
}
