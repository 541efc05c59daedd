//! Shared fixtures for cross-crate tests.

use lx_02_ledger_store::{InMemoryKVStore, LedgerStore};
use lx_03_state_engine::InMemoryStateEngine;
use lx_04_genesis::{apply_genesis, Genesis};
use lx_05_block_materializer::{BlockMaterializer, MaterializerConfig};
use lx_06_chain_reader::EvmStateReader;
use shared_types::{Address, Event, Hash, Transaction, U256};
use std::sync::Arc;

pub type Ledger = LedgerStore<InMemoryKVStore>;
pub type Reader = EvmStateReader<InMemoryKVStore, InMemoryStateEngine>;

/// A chain with genesis applied, a materializer and a reader on its head.
pub struct TestChain {
    pub ledger: Arc<Ledger>,
    pub state: Arc<InMemoryStateEngine>,
    pub materializer: Arc<BlockMaterializer<InMemoryKVStore>>,
    pub reader: Reader,
    pub genesis: Genesis,
    pub genesis_hash: Hash,
    pub state_hash: Hash,
}

impl TestChain {
    pub fn new(genesis: Genesis, config: MaterializerConfig) -> anyhow::Result<Self> {
        crate::init_tracing();

        let ledger = Arc::new(LedgerStore::in_memory());
        let state = Arc::new(InMemoryStateEngine::default());
        let (genesis_hash, state_hash) = apply_genesis(&genesis, ledger.as_ref(), state.as_ref())?;

        let materializer = Arc::new(BlockMaterializer::new(ledger.clone(), config)?);
        let reader = EvmStateReader::new(ledger.clone(), state.clone(), materializer.head());

        Ok(Self {
            ledger,
            state,
            materializer,
            reader,
            genesis,
            genesis_hash,
            state_hash,
        })
    }

    /// Fake network of `validators` identities, default limits.
    pub fn fake(validators: u64) -> anyhow::Result<Self> {
        Self::new(Genesis::fake(validators), MaterializerConfig::default())
    }

    /// First genesis validator.
    pub fn creator(&self) -> Address {
        self.genesis.validators.addresses()[0]
    }

    /// Store an event from the first validator.
    pub fn store_event(&self, seq: u64, txs: Vec<Transaction>) -> anyhow::Result<Hash> {
        Ok(self.ledger.set_event(&event(self.creator(), seq, txs))?)
    }
}

/// A well-formed signed transfer.
pub fn transfer(nonce: u64) -> Transaction {
    Transaction::new(
        nonce,
        Some([0x42; 20]),
        U256::from(100u64),
        21_000,
        U256::one(),
        vec![],
    )
    .with_signature(27, [0x01; 32], [0x02; 32])
}

pub fn event(creator: Address, seq: u64, txs: Vec<Transaction>) -> Event {
    let mut event = Event::new(creator, seq);
    event.lamport = seq;
    event.transactions = txs;
    event
}
