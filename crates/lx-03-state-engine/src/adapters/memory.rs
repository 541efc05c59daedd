use crate::config::StateConfig;
use crate::domain::{state_root, AccountRecord, StateError};
use crate::ports::{StateEngine, StateView};
use parking_lot::RwLock;
use shared_types::{
    short_hex, Address, Allocation, Hash, StorageKey, StorageValue, U256, ZERO_HASH,
};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tracing::debug;

struct Snapshot {
    root: Hash,
    accounts: BTreeMap<Address, AccountRecord>,
}

/// In-memory state engine keeping every committed snapshot by root.
pub struct InMemoryStateEngine {
    config: StateConfig,
    snapshots: RwLock<HashMap<Hash, Arc<Snapshot>>>,
}

impl InMemoryStateEngine {
    pub fn new(config: StateConfig) -> Self {
        Self {
            config,
            snapshots: RwLock::new(HashMap::new()),
        }
    }

    pub fn config(&self) -> &StateConfig {
        &self.config
    }

    fn check_limits(&self, address: &Address, record: &AccountRecord) -> Result<(), StateError> {
        if record.code.len() > self.config.max_code_size {
            return Err(StateError::StateCommit {
                address: *address,
                reason: format!(
                    "code size {} exceeds limit {}",
                    record.code.len(),
                    self.config.max_code_size
                ),
            });
        }
        if record.storage.len() > self.config.max_storage_slots_per_account {
            return Err(StateError::StateCommit {
                address: *address,
                reason: format!(
                    "{} storage slots exceed limit {}",
                    record.storage.len(),
                    self.config.max_storage_slots_per_account
                ),
            });
        }
        Ok(())
    }
}

impl Default for InMemoryStateEngine {
    fn default() -> Self {
        Self::new(StateConfig::default())
    }
}

impl StateEngine for InMemoryStateEngine {
    type View = MemoryStateView;

    fn commit(&self, alloc: &Allocation) -> Result<Hash, StateError> {
        let mut accounts = BTreeMap::new();
        for (address, account) in alloc.iter() {
            let record = AccountRecord::from_account(account);
            self.check_limits(address, &record)?;
            accounts.insert(*address, record);
        }
        let root = state_root(&accounts);

        self.snapshots
            .write()
            .entry(root)
            .or_insert_with(|| Arc::new(Snapshot { root, accounts }));
        debug!(
            "[lx-03] committed {} accounts at root {}",
            alloc.len(),
            short_hex(&root)
        );
        Ok(root)
    }

    fn state_at(&self, root: &Hash) -> Result<MemoryStateView, StateError> {
        self.snapshots
            .read()
            .get(root)
            .cloned()
            .map(MemoryStateView)
            .ok_or(StateError::StateNotFound { root: *root })
    }

    fn has_state(&self, root: &Hash) -> bool {
        self.snapshots.read().contains_key(root)
    }
}

/// Cheap-to-clone handle on one immutable snapshot.
#[derive(Clone)]
pub struct MemoryStateView(Arc<Snapshot>);

impl MemoryStateView {
    fn account(&self, address: &Address) -> Option<&AccountRecord> {
        self.0.accounts.get(address)
    }
}

impl StateView for MemoryStateView {
    fn root(&self) -> Hash {
        self.0.root
    }

    fn exists(&self, address: &Address) -> bool {
        self.0.accounts.contains_key(address)
    }

    fn balance(&self, address: &Address) -> U256 {
        self.account(address)
            .map(|a| a.state.balance)
            .unwrap_or_default()
    }

    fn nonce(&self, address: &Address) -> u64 {
        self.account(address).map(|a| a.state.nonce).unwrap_or(0)
    }

    fn code(&self, address: &Address) -> Vec<u8> {
        self.account(address)
            .map(|a| a.code.clone())
            .unwrap_or_default()
    }

    fn code_hash(&self, address: &Address) -> Hash {
        self.account(address)
            .map(|a| a.state.code_hash)
            .unwrap_or(ZERO_HASH)
    }

    fn storage(&self, address: &Address, key: &StorageKey) -> StorageValue {
        self.account(address)
            .and_then(|a| a.storage.get(key).copied())
            .unwrap_or([0u8; 32])
    }
}
