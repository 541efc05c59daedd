use crate::error::{ReaderError, Result};
use lx_01_validators::ValidatorRegistry;
use lx_02_ledger_store::{KeyValueStore, LedgerError, LedgerStore};
use lx_03_state_engine::StateEngine;
use lx_05_block_materializer::{ChainHead, SharedChainHead};
use parking_lot::RwLock;
use shared_types::{short_hex, Block, EvmBlock, Hash, Transaction, ZERO_HASH};
use std::sync::Arc;
use tracing::error;

/// EVM-facing view over the ledger, the state engine and the chain head.
pub struct EvmStateReader<KV: KeyValueStore, S: StateEngine> {
    ledger: Arc<LedgerStore<KV>>,
    state: Arc<S>,
    head: SharedChainHead,
}

impl<KV: KeyValueStore, S: StateEngine> Clone for EvmStateReader<KV, S> {
    fn clone(&self) -> Self {
        Self {
            ledger: Arc::clone(&self.ledger),
            state: Arc::clone(&self.state),
            head: Arc::clone(&self.head),
        }
    }
}

impl<KV: KeyValueStore, S: StateEngine> EvmStateReader<KV, S> {
    /// Reader following the head published by a materializer.
    pub fn new(ledger: Arc<LedgerStore<KV>>, state: Arc<S>, head: SharedChainHead) -> Self {
        Self {
            ledger,
            state,
            head,
        }
    }

    /// Reader with its own head, pinned to the ledger's latest block at
    /// construction time.
    pub fn detached(ledger: Arc<LedgerStore<KV>>, state: Arc<S>) -> Result<Self> {
        let latest = ledger.latest_index()?.ok_or(LedgerError::GenesisMissing)?;
        let block = ledger
            .get_block_by_index(latest)?
            .ok_or_else(|| LedgerError::Database {
                message: format!("latest block {latest} is missing"),
            })?;
        let head = Arc::new(RwLock::new(ChainHead::from_block(&block)));
        Ok(Self::new(ledger, state, head))
    }

    /// Block by number, in genesis shape for block 0 or the genesis hash.
    ///
    /// A non-zero `hash` must match the stored block.
    pub fn get_block(&self, hash: &Hash, number: u64) -> Result<Option<EvmBlock>> {
        let genesis_hash = self.ledger.genesis_hash()?;
        let is_genesis_hash = *hash != ZERO_HASH && Some(*hash) == genesis_hash;

        if number == 0 || is_genesis_hash {
            if *hash != ZERO_HASH && !is_genesis_hash {
                return Ok(None);
            }
            return self.genesis_block();
        }
        self.get_dag_block(hash, number)
    }

    /// Block `index` with skipped transactions removed.
    pub fn get_dag_block(&self, hash: &Hash, index: u64) -> Result<Option<EvmBlock>> {
        let block = match self.ledger.get_block_by_index(index)? {
            Some(block) => block,
            None => return Ok(None),
        };
        let block_hash = block.hash();
        if *hash != ZERO_HASH && *hash != block_hash {
            return Ok(None);
        }
        self.to_evm_block(&block, block_hash).map(Some)
    }

    pub fn get_block_by_hash(&self, hash: &Hash) -> Result<Option<EvmBlock>> {
        match self.ledger.get_block(hash)? {
            Some(block) => self.to_evm_block(&block, *hash).map(Some),
            None => Ok(None),
        }
    }

    /// Block at the shared head.
    pub fn current_block(&self) -> Result<Option<EvmBlock>> {
        let head = self.current_head();
        self.get_block(&head.hash, head.index)
    }

    pub fn current_index(&self) -> u64 {
        self.head.read().index
    }

    pub fn current_head(&self) -> ChainHead {
        *self.head.read()
    }

    pub fn genesis_hash(&self) -> Result<Option<Hash>> {
        Ok(self.ledger.genesis_hash()?)
    }

    /// Genesis validator set.
    pub fn validators(&self) -> Result<Option<ValidatorRegistry>> {
        Ok(self.ledger.validators()?)
    }

    /// Historical state view.
    pub fn state_at(&self, root: &Hash) -> Result<S::View> {
        Ok(self.state.state_at(root)?)
    }

    fn genesis_block(&self) -> Result<Option<EvmBlock>> {
        match self.ledger.get_block_by_index(0)? {
            Some(block) => {
                let hash = block.hash();
                self.to_evm_block(&block, hash).map(Some)
            }
            None => Ok(None),
        }
    }

    fn to_evm_block(&self, block: &Block, hash: Hash) -> Result<EvmBlock> {
        Ok(EvmBlock {
            number: block.index,
            hash,
            parent_hash: block.parent_hash,
            root: block.root,
            time: block.time,
            transactions: self.executed_transactions(block)?,
        })
    }

    fn executed_transactions(&self, block: &Block) -> Result<Vec<Transaction>> {
        match self.ledger.executed_transactions(block) {
            Ok(executed) => Ok(executed),
            Err(LedgerError::MissingEvent { index, event }) => {
                error!(
                    "[lx-06] block {} references missing event {}",
                    index,
                    short_hex(&event)
                );
                Err(ReaderError::MissingEvent {
                    block: index,
                    event,
                })
            }
            Err(e) => Err(e.into()),
        }
    }
}
