//! Construction of the genesis allocation and validator registry.

use crate::domain::keys::{address_of, fake_key};
use crate::domain::spec::GenesisSpec;
use crate::error::{GenesisError, Result};
use lx_01_validators::ValidatorRegistry;
use shared_types::parse::{parse_address, parse_bytes, parse_hash, parse_word};
use shared_types::{short_hex, Account, Allocation, Stake, U256};
use std::ops::Range;

/// Where the genesis accounts come from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenesisSource {
    /// `count` deterministic identities starting at key number `from`.
    Fake {
        from: u64,
        count: u64,
        balance: U256,
        stake: Stake,
    },
    /// Explicit allocation and validator list.
    Spec(GenesisSpec),
}

impl GenesisSource {
    pub fn build(&self) -> Result<(Allocation, ValidatorRegistry)> {
        match self {
            GenesisSource::Fake {
                from,
                count,
                balance,
                stake,
            } => fake_accounts(*from, *count, *balance, *stake),
            GenesisSource::Spec(spec) => build_from_spec(spec),
        }
    }
}

/// Funded accounts and validators for a fake network.
///
/// Every account carries its secret key; every address is registered with
/// `stake`. A range running past the last key number is rejected.
pub fn fake_accounts(
    from: u64,
    count: u64,
    balance: U256,
    stake: Stake,
) -> Result<(Allocation, ValidatorRegistry)> {
    let end = from.checked_add(count).ok_or_else(|| {
        GenesisError::InvalidSpec(format!("fake key range {from} + {count} overflows u64"))
    })?;
    Ok(fake_range(from..end, balance, stake))
}

pub(crate) fn fake_range(
    keys: Range<u64>,
    balance: U256,
    stake: Stake,
) -> (Allocation, ValidatorRegistry) {
    let mut alloc = Allocation::new();
    let mut validators = ValidatorRegistry::new();

    for n in keys {
        let key = fake_key(n);
        let address = address_of(&key);
        alloc.insert(
            address,
            Account {
                balance,
                secret_key: Some(key.to_bytes().into()),
                ..Default::default()
            },
        );
        validators.set(address, stake);
    }

    (alloc, validators)
}

/// Allocation and registry from an explicit description. No secret keys.
pub fn build_from_spec(spec: &GenesisSpec) -> Result<(Allocation, ValidatorRegistry)> {
    let mut alloc = Allocation::new();
    for (raw_address, account_spec) in &spec.alloc {
        let address = parse_address(raw_address)?;

        let mut account = Account::with_balance(account_spec.balance.to_u256()?);
        if let Some(code) = &account_spec.code {
            account.code = parse_bytes("code", code)?;
        }
        for (key, value) in &account_spec.storage {
            account.storage.insert(
                parse_hash("storage key", key)?,
                parse_word("storage value", value)?,
            );
        }

        if alloc.insert(address, account).is_some() {
            return Err(GenesisError::InvalidSpec(format!(
                "account {} allocated twice",
                short_hex(&address)
            )));
        }
    }

    let mut validators = ValidatorRegistry::new();
    for validator in &spec.validators {
        let address = parse_address(&validator.address)?;
        if validators.contains(&address) {
            return Err(GenesisError::InvalidSpec(format!(
                "validator {} listed twice",
                short_hex(&address)
            )));
        }
        validators.set(address, validator.stake);
    }

    Ok((alloc, validators))
}
