//! # Genesis Application
//!
//! Commits the genesis allocation to the state engine and writes block 0,
//! the genesis hash, the latest index and the validator registry in one
//! ledger batch.

use crate::config::GenesisConfig;
use crate::domain::genesis::Genesis;
use crate::error::{GenesisError, Result};
use lx_02_ledger_store::{KeyValueStore, LedgerError, LedgerStore};
use lx_03_state_engine::StateEngine;
use shared_types::{short_hex, Hash};
use tracing::{info, warn};

pub struct GenesisBuilder {
    config: GenesisConfig,
}

impl GenesisBuilder {
    pub fn new(config: GenesisConfig) -> Self {
        Self { config }
    }

    /// Apply `genesis` to an empty ledger.
    ///
    /// Returns `(genesis_hash, state_hash)`.
    pub fn apply<KV, S>(
        &self,
        genesis: &Genesis,
        ledger: &LedgerStore<KV>,
        state: &S,
    ) -> Result<(Hash, Hash)>
    where
        KV: KeyValueStore,
        S: StateEngine,
    {
        if let Some(genesis_hash) = ledger.genesis_hash()? {
            return Err(GenesisError::AlreadyApplied { genesis_hash });
        }
        if ledger.latest_index()?.is_some() {
            let genesis_hash = ledger.block_hash_at(0)?.unwrap_or_default();
            return Err(GenesisError::AlreadyApplied { genesis_hash });
        }

        self.check_validator_allocations(genesis)?;

        let state_hash = state.commit(&genesis.alloc)?;
        let block = genesis.block(state_hash);

        let genesis_hash = match ledger.commit_genesis(&block, &genesis.validators) {
            Ok(hash) => hash,
            Err(LedgerError::GenesisAlreadyApplied { genesis_hash }) => {
                return Err(GenesisError::AlreadyApplied { genesis_hash })
            }
            Err(e) => return Err(e.into()),
        };

        info!(
            "[lx-04] genesis applied: hash {}, state {}, {} accounts, {} validators (total stake {})",
            short_hex(&genesis_hash),
            short_hex(&state_hash),
            genesis.alloc.len(),
            genesis.validators.len(),
            genesis.validators.total_stake()
        );
        Ok((genesis_hash, state_hash))
    }

    fn check_validator_allocations(&self, genesis: &Genesis) -> Result<()> {
        for address in genesis.validators.addresses() {
            if genesis.alloc.contains(&address) {
                continue;
            }
            if self.config.require_validator_allocations {
                return Err(GenesisError::MissingValidatorAllocation { address });
            }
            warn!(
                "[lx-04] validator {} has no genesis allocation",
                short_hex(&address)
            );
        }
        Ok(())
    }
}

impl Default for GenesisBuilder {
    fn default() -> Self {
        Self::new(GenesisConfig::default())
    }
}

/// Apply `genesis` with the default configuration.
pub fn apply_genesis<KV, S>(
    genesis: &Genesis,
    ledger: &LedgerStore<KV>,
    state: &S,
) -> Result<(Hash, Hash)>
where
    KV: KeyValueStore,
    S: StateEngine,
{
    GenesisBuilder::default().apply(genesis, ledger, state)
}
