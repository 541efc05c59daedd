use crate::error::Result;
use lx_02_ledger_store::{KeyValueStore, LedgerError, LedgerStore};
use parking_lot::RwLock;
use shared_types::{Block, Hash};
use std::sync::Arc;

/// The newest block of the chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChainHead {
    pub index: u64,
    pub hash: Hash,
    /// State root the next block applies on top of.
    pub root: Hash,
    pub time: u64,
}

impl ChainHead {
    pub fn from_block(block: &Block) -> Self {
        Self {
            index: block.index,
            hash: block.hash(),
            root: block.root,
            time: block.time,
        }
    }
}

/// Head shared between the materializer (sole writer) and readers.
pub type SharedChainHead = Arc<RwLock<ChainHead>>;

/// Head as persisted by the ledger.
pub fn load_head<KV: KeyValueStore>(ledger: &LedgerStore<KV>) -> Result<ChainHead> {
    let latest = ledger.latest_index()?.ok_or(LedgerError::GenesisMissing)?;
    let block = ledger
        .get_block_by_index(latest)?
        .ok_or_else(|| LedgerError::Database {
            message: format!("latest block {latest} is missing"),
        })?;
    Ok(ChainHead::from_block(&block))
}
