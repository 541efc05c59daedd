//! # Ledger Store Service
//!
//! Reads are lock-free at this layer (the KV adapter synchronizes itself);
//! block writes go through `write_lock` so the index checks and the batch
//! that follows them cannot interleave with another block commit.

use crate::adapters::codec::{decode, encode};
use crate::adapters::InMemoryKVStore;
use crate::domain::errors::{LedgerError, Result};
use crate::domain::keys::{
    block_key, event_key, genesis_key, index_key, latest_key, tx_key, validators_key,
};
use crate::ports::outbound::{BatchOperation, KeyValueStore};
use lx_01_validators::ValidatorRegistry;
use parking_lot::Mutex;
use shared_types::{short_hex, Block, Event, Hash, Transaction};
use std::collections::HashSet;
use tracing::{debug, error, info};

/// Content-addressed store of events and blocks.
pub struct LedgerStore<KV: KeyValueStore> {
    kv: KV,
    write_lock: Mutex<()>,
}

impl LedgerStore<InMemoryKVStore> {
    /// Ledger over a fresh in-memory store.
    pub fn in_memory() -> Self {
        Self::new(InMemoryKVStore::new())
    }
}

impl<KV: KeyValueStore> LedgerStore<KV> {
    pub fn new(kv: KV) -> Self {
        Self {
            kv,
            write_lock: Mutex::new(()),
        }
    }

    // =========================================================================
    // EVENTS
    // =========================================================================

    /// Store an event under its content hash.
    ///
    /// Idempotent. Parents are not required to be present.
    pub fn set_event(&self, event: &Event) -> Result<Hash> {
        let hash = event.hash();
        let key = event_key(&hash);
        if self.kv.exists(&key)? {
            debug!("[lx-02] event {} already stored", short_hex(&hash));
            return Ok(hash);
        }
        self.kv.put(&key, &encode(event)?)?;
        debug!(
            "[lx-02] stored event {} (creator {}, seq {})",
            short_hex(&hash),
            short_hex(&event.creator),
            event.seq
        );
        Ok(hash)
    }

    pub fn get_event(&self, hash: &Hash) -> Result<Option<Event>> {
        self.get_decoded(&event_key(hash))
    }

    pub fn has_event(&self, hash: &Hash) -> Result<bool> {
        Ok(self.kv.exists(&event_key(hash))?)
    }

    // =========================================================================
    // BLOCKS
    // =========================================================================

    /// Append a block, indexing the transactions it executes.
    ///
    /// The executed set is rebuilt from the block's stored events minus its
    /// skip mask, so every event must already be stored.
    pub fn set_block(&self, block: &Block) -> Result<Hash> {
        self.append_block(block, |ledger| {
            Ok(ledger
                .executed_transactions(block)?
                .iter()
                .map(Transaction::hash)
                .collect())
        })
    }

    /// Append a block and record `included` as the transactions it executes.
    ///
    /// The caller vouches for `included`; events are not looked up.
    /// Re-committing the stored block at an index is a no-op.
    pub fn commit_block(&self, block: &Block, included: &[Hash]) -> Result<Hash> {
        self.append_block(block, |_| Ok(included.to_vec()))
    }

    /// `included` runs under the write lock, after the index checks pass.
    fn append_block<F>(&self, block: &Block, included: F) -> Result<Hash>
    where
        F: FnOnce(&Self) -> Result<Vec<Hash>>,
    {
        let _guard = self.write_lock.lock();
        let hash = block.hash();

        let latest = self.latest_index()?.ok_or(LedgerError::GenesisMissing)?;

        if block.index <= latest {
            return match self.block_hash_at(block.index)? {
                Some(existing) if existing == hash => {
                    debug!("[lx-02] block {} already stored", block.index);
                    Ok(hash)
                }
                Some(existing) => {
                    error!(
                        "[lx-02] conflicting block at index {}: stored {}, proposed {}",
                        block.index,
                        short_hex(&existing),
                        short_hex(&hash)
                    );
                    Err(LedgerError::BlockConflict {
                        index: block.index,
                        existing,
                        proposed: hash,
                    })
                }
                None => Err(LedgerError::Database {
                    message: format!("index {} below latest has no block", block.index),
                }),
            };
        }

        let expected = latest + 1;
        if block.index != expected {
            return Err(LedgerError::IndexGap {
                expected,
                got: block.index,
            });
        }

        let parent = self
            .block_hash_at(latest)?
            .ok_or_else(|| LedgerError::Database {
                message: format!("latest index {latest} has no block"),
            })?;
        if block.parent_hash != parent {
            return Err(LedgerError::ParentMismatch {
                index: block.index,
                expected: parent,
                actual: block.parent_hash,
            });
        }

        let included = included(self)?;
        let index_bytes = block.index.to_be_bytes();
        let mut ops = Vec::with_capacity(included.len() + 3);
        ops.push(BatchOperation::put(block_key(&hash), encode(block)?));
        ops.push(BatchOperation::put(index_key(block.index), hash.to_vec()));
        ops.push(BatchOperation::put(latest_key(), index_bytes.to_vec()));
        for tx in &included {
            ops.push(BatchOperation::put(tx_key(tx), index_bytes.to_vec()));
        }
        self.kv.atomic_batch_write(ops)?;

        debug!(
            "[lx-02] committed block {} {} ({} executed txs)",
            block.index,
            short_hex(&hash),
            included.len()
        );
        Ok(hash)
    }

    /// Write block 0 together with the genesis validator set.
    pub fn commit_genesis(&self, block: &Block, validators: &ValidatorRegistry) -> Result<Hash> {
        let _guard = self.write_lock.lock();

        if let Some(genesis_hash) = self.genesis_hash()? {
            return Err(LedgerError::GenesisAlreadyApplied { genesis_hash });
        }
        if let Some(latest) = self.latest_index()? {
            let genesis_hash = self.block_hash_at(0)?.unwrap_or_default();
            error!("[lx-02] ledger already holds blocks up to {latest}");
            return Err(LedgerError::GenesisAlreadyApplied { genesis_hash });
        }
        if !block.is_genesis() {
            return Err(LedgerError::IndexGap {
                expected: 0,
                got: block.index,
            });
        }

        let hash = block.hash();
        let ops = vec![
            BatchOperation::put(block_key(&hash), encode(block)?),
            BatchOperation::put(index_key(0), hash.to_vec()),
            BatchOperation::put(latest_key(), 0u64.to_be_bytes().to_vec()),
            BatchOperation::put(genesis_key(), hash.to_vec()),
            BatchOperation::put(validators_key(), encode(validators)?),
        ];
        self.kv.atomic_batch_write(ops)?;

        info!(
            "[lx-02] genesis block {} written with {} validators",
            short_hex(&hash),
            validators.len()
        );
        Ok(hash)
    }

    pub fn get_block(&self, hash: &Hash) -> Result<Option<Block>> {
        self.get_decoded(&block_key(hash))
    }

    pub fn get_block_by_index(&self, index: u64) -> Result<Option<Block>> {
        match self.block_hash_at(index)? {
            Some(hash) => self.get_block(&hash),
            None => Ok(None),
        }
    }

    pub fn block_hash_at(&self, index: u64) -> Result<Option<Hash>> {
        self.get_hash(&index_key(index))
    }

    /// Transactions `block` executes: its events' transactions in order,
    /// minus the positions in `skipped_txs`.
    pub fn executed_transactions(&self, block: &Block) -> Result<Vec<Transaction>> {
        // Block 0 lists a commitment, not a stored event.
        if block.is_genesis() {
            return Ok(Vec::new());
        }
        let skipped: HashSet<u32> = block.skipped_txs.iter().copied().collect();
        let mut executed = Vec::new();
        let mut ordinal = 0usize;

        for event_hash in &block.events {
            let event = self
                .get_event(event_hash)?
                .ok_or(LedgerError::MissingEvent {
                    index: block.index,
                    event: *event_hash,
                })?;
            for tx in event.transactions {
                if !skipped.contains(&mask_position(block.index, ordinal)?) {
                    executed.push(tx);
                }
                ordinal += 1;
            }
        }
        Ok(executed)
    }

    // =========================================================================
    // METADATA
    // =========================================================================

    /// Index of the newest block, `None` before genesis.
    pub fn latest_index(&self) -> Result<Option<u64>> {
        match self.kv.get(&latest_key())? {
            Some(bytes) => {
                let raw: [u8; 8] = bytes.as_slice().try_into().map_err(|_| {
                    LedgerError::Database {
                        message: format!("latest index has {} bytes", bytes.len()),
                    }
                })?;
                Ok(Some(u64::from_be_bytes(raw)))
            }
            None => Ok(None),
        }
    }

    pub fn genesis_hash(&self) -> Result<Option<Hash>> {
        self.get_hash(&genesis_key())
    }

    /// Genesis validator set.
    pub fn validators(&self) -> Result<Option<ValidatorRegistry>> {
        self.get_decoded(&validators_key())
    }

    /// Index of the block that executed `tx_hash`, if any.
    pub fn tx_block_index(&self, tx_hash: &Hash) -> Result<Option<u64>> {
        match self.kv.get(&tx_key(tx_hash))? {
            Some(bytes) => {
                let raw: [u8; 8] = bytes.as_slice().try_into().map_err(|_| {
                    LedgerError::Database {
                        message: format!("tx index entry has {} bytes", bytes.len()),
                    }
                })?;
                Ok(Some(u64::from_be_bytes(raw)))
            }
            None => Ok(None),
        }
    }

    fn get_hash(&self, key: &[u8]) -> Result<Option<Hash>> {
        match self.kv.get(key)? {
            Some(bytes) => {
                let hash: Hash = bytes.as_slice().try_into().map_err(|_| {
                    LedgerError::Database {
                        message: format!("stored hash has {} bytes", bytes.len()),
                    }
                })?;
                Ok(Some(hash))
            }
            None => Ok(None),
        }
    }

    fn get_decoded<T: serde::de::DeserializeOwned>(&self, key: &[u8]) -> Result<Option<T>> {
        match self.kv.get(key)? {
            Some(bytes) => Ok(Some(decode(&bytes)?)),
            None => Ok(None),
        }
    }
}

/// Skip-mask position of the `ordinal`-th transaction of block `index`.
fn mask_position(index: u64, ordinal: usize) -> Result<u32> {
    u32::try_from(ordinal).map_err(|_| LedgerError::TooManyTransactions { index })
}
