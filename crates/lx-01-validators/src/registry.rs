//! Validator registry entity

use serde::{Deserialize, Serialize};
use shared_types::{keccak256, rlp, Address, Hash, Stake};
use std::collections::BTreeMap;

/// A single registry entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Validator {
    pub address: Address,
    pub stake: Stake,
}

impl Validator {
    /// Whether the validator takes part in quorum.
    pub fn is_active(&self) -> bool {
        self.stake > 0
    }
}

/// Mapping address → stake, iterated in address order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidatorRegistry {
    stakes: BTreeMap<Address, Stake>,
}

impl ValidatorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert a validator's stake. A zero stake deactivates without removing.
    pub fn set(&mut self, address: Address, stake: Stake) {
        self.stakes.insert(address, stake);
    }

    /// Get a validator's stake.
    pub fn get(&self, address: &Address) -> Option<Stake> {
        self.stakes.get(address).copied()
    }

    /// Check if the address is registered (active or not).
    pub fn contains(&self, address: &Address) -> bool {
        self.stakes.contains_key(address)
    }

    /// Sum of all stakes.
    pub fn total_stake(&self) -> u128 {
        self.stakes.values().map(|s| u128::from(*s)).sum()
    }

    /// Validators with non-zero stake.
    pub fn active(&self) -> Vec<Validator> {
        self.iter().filter(Validator::is_active).collect()
    }

    /// All validators in address order.
    pub fn iter(&self) -> impl Iterator<Item = Validator> + '_ {
        self.stakes
            .iter()
            .map(|(address, stake)| Validator {
                address: *address,
                stake: *stake,
            })
    }

    /// Registered addresses in address order.
    pub fn addresses(&self) -> Vec<Address> {
        self.stakes.keys().copied().collect()
    }

    /// Number of registered validators, including inactive ones.
    pub fn len(&self) -> usize {
        self.stakes.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.stakes.is_empty()
    }

    /// Deterministic commitment: `keccak256(rlp([[address, stake], ...]))`.
    pub fn hash(&self) -> Hash {
        let entries: Vec<Vec<u8>> = self
            .stakes
            .iter()
            .map(|(address, stake)| {
                rlp::encode_list(&[rlp::encode_bytes(address), rlp::encode_u64(*stake)])
            })
            .collect();
        keccak256(&rlp::encode_list(&entries))
    }
}

impl FromIterator<(Address, Stake)> for ValidatorRegistry {
    fn from_iter<I: IntoIterator<Item = (Address, Stake)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (address, stake) in iter {
            registry.set(address, stake);
        }
        registry
    }
}
