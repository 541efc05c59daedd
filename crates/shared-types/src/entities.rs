//! # Core Domain Entities
//!
//! ## Clusters
//!
//! - **Chain**: `Transaction`, `Event`, `Block`, `EvmBlock`
//! - **Genesis**: `Account`, `Allocation`
//!
//! Every hash below is Keccak-256 over an RLP list of the value's fields, so
//! two nodes that hold the same content always agree on its identity.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

use crate::rlp;

// Re-export U256 from primitive-types for use across all subsystems
pub use primitive_types::U256;

// =============================================================================
// CLUSTER A: PRIMITIVES
// =============================================================================

/// A 32-byte Keccak-256 hash.
pub type Hash = [u8; 32];

/// A 20-byte Ethereum-style address.
pub type Address = [u8; 20];

/// 32-byte contract storage slot key.
pub type StorageKey = [u8; 32];

/// 32-byte contract storage slot value.
pub type StorageValue = [u8; 32];

/// Validator voting weight.
pub type Stake = u64;

/// Marker for "no hash" (genesis parent, wildcard lookups).
pub const ZERO_HASH: Hash = [0u8; 32];

/// Keccak256 of an RLP-encoded empty string.
///
/// Canonical empty trie root; also used as the transactions root of a block
/// without transactions.
/// Value: 0x56e81f171bcc55a6ff8345e692c0f86e5b48e01b996cadc001622fb5e363b421
pub const EMPTY_ROOT: Hash = [
    0x56, 0xe8, 0x1f, 0x17, 0x1b, 0xcc, 0x55, 0xa6, 0xff, 0x83, 0x45, 0xe6, 0x92, 0xc0, 0xf8, 0x6e,
    0x5b, 0x48, 0xe0, 0x1b, 0x99, 0x6c, 0xad, 0xc0, 0x01, 0x62, 0x2f, 0xb5, 0xe3, 0x63, 0xb4, 0x21,
];

/// Keccak256 of empty bytes, the code hash of accounts without code.
/// Value: 0xc5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470
pub const EMPTY_CODE_HASH: Hash = [
    0xc5, 0xd2, 0x46, 0x01, 0x86, 0xf7, 0x23, 0x3c, 0x92, 0x7e, 0x7d, 0xb2, 0xdc, 0xc7, 0x03, 0xc0,
    0xe5, 0x00, 0xb6, 0x53, 0xca, 0x82, 0x27, 0x3b, 0x7b, 0xfa, 0xd8, 0x04, 0x5d, 0x85, 0xa4, 0x70,
];

/// Short hex rendering (`0x` + first 4 bytes) for logs and error messages.
pub fn short_hex(bytes: &[u8]) -> String {
    let end = bytes.len().min(4);
    format!("0x{}..", hex::encode(&bytes[..end]))
}

// =============================================================================
// CLUSTER B: THE CHAIN
// =============================================================================

/// A signed EVM transaction (legacy envelope).
///
/// The ledger never executes or recovers signatures; it only needs a stable
/// identity and enough shape to reject obviously malformed payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Sender's nonce.
    pub nonce: u64,
    /// Gas price in wei.
    pub gas_price: U256,
    /// Gas limit for execution.
    pub gas_limit: u64,
    /// Recipient (`None` for contract creation).
    pub to: Option<Address>,
    /// Transferred value in wei.
    pub value: U256,
    /// Call data or init code.
    pub data: Vec<u8>,
    /// Signature recovery id.
    pub v: u64,
    /// Signature `r`.
    pub r: Hash,
    /// Signature `s`.
    pub s: Hash,
}

impl Transaction {
    /// Create an unsigned transaction.
    pub fn new(
        nonce: u64,
        to: Option<Address>,
        value: U256,
        gas_limit: u64,
        gas_price: U256,
        data: Vec<u8>,
    ) -> Self {
        Self {
            nonce,
            gas_price,
            gas_limit,
            to,
            value,
            data,
            v: 0,
            r: ZERO_HASH,
            s: ZERO_HASH,
        }
    }

    /// Attach a signature.
    pub fn with_signature(mut self, v: u64, r: Hash, s: Hash) -> Self {
        self.v = v;
        self.r = r;
        self.s = s;
        self
    }

    /// Whether this transaction deploys a contract.
    pub fn is_contract_creation(&self) -> bool {
        self.to.is_none()
    }

    /// Transaction hash: `keccak256(rlp([nonce, gasPrice, gas, to, value, data, v, r, s]))`.
    ///
    /// Matches the Ethereum legacy transaction hash.
    pub fn hash(&self) -> Hash {
        let to = match &self.to {
            Some(to) => rlp::encode_bytes(to),
            None => rlp::encode_bytes(&[]),
        };
        let items = vec![
            rlp::encode_u64(self.nonce),
            rlp::encode_u256(&self.gas_price),
            rlp::encode_u64(self.gas_limit),
            to,
            rlp::encode_u256(&self.value),
            rlp::encode_bytes(&self.data),
            rlp::encode_u64(self.v),
            rlp::encode_u256(&U256::from_big_endian(&self.r)),
            rlp::encode_u256(&U256::from_big_endian(&self.s)),
        ];
        rlp::keccak256(&rlp::encode_list(&items))
    }
}

/// A DAG vertex authored by one validator.
///
/// Immutable once created: the hash is derived from content, and the Ledger
/// Store keys events by that hash.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Epoch the event belongs to.
    pub epoch: u32,
    /// Per-creator sequence number, starting at 1.
    pub seq: u64,
    /// Lamport timestamp within the DAG.
    pub lamport: u64,
    /// Validator that created the event.
    pub creator: Address,
    /// Hashes of parent events.
    pub parents: BTreeSet<Hash>,
    /// Creator-claimed creation time (unix nanoseconds).
    pub claimed_time: u64,
    /// Transactions carried by the event, in order.
    pub transactions: Vec<Transaction>,
}

impl Event {
    /// Create an event with no parents and no transactions.
    pub fn new(creator: Address, seq: u64) -> Self {
        Self {
            creator,
            seq,
            ..Default::default()
        }
    }

    /// Content hash of the event.
    pub fn hash(&self) -> Hash {
        let tx_hashes: Vec<Hash> = self.transactions.iter().map(Transaction::hash).collect();
        let items = vec![
            rlp::encode_u64(u64::from(self.epoch)),
            rlp::encode_u64(self.seq),
            rlp::encode_u64(self.lamport),
            rlp::encode_bytes(&self.creator),
            rlp::encode_hash_list(&self.parents),
            rlp::encode_u64(self.claimed_time),
            rlp::encode_hash_list(&tx_hashes),
        ];
        rlp::keccak256(&rlp::encode_list(&items))
    }

    /// Whether this event has no parents (first event of its creator).
    pub fn is_root(&self) -> bool {
        self.parents.is_empty()
    }
}

/// A materialized, totally ordered unit of the linear chain.
///
/// `events` keeps the finalized order: `skipped_txs` holds positions into the
/// concatenation of the events' transaction lists in exactly that order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Block number. Genesis is 0; gapless afterwards.
    pub index: u64,
    /// Block time (unix seconds).
    pub time: u64,
    /// Consolidated events in finalized order.
    pub events: Vec<Hash>,
    /// Hash of the previous block (`ZERO_HASH` for genesis).
    pub parent_hash: Hash,
    /// Commitment over the hashes of every transaction, skipped or not.
    pub transactions_root: Hash,
    /// Positions of transactions excluded from execution.
    pub skipped_txs: Vec<u32>,
    /// State root this block refers to.
    pub root: Hash,
}

impl Block {
    /// Create a block with no transactions and no skip mask.
    pub fn new(index: u64, time: u64, events: Vec<Hash>, parent_hash: Hash) -> Self {
        Self {
            index,
            time,
            events,
            parent_hash,
            transactions_root: EMPTY_ROOT,
            skipped_txs: Vec::new(),
            root: ZERO_HASH,
        }
    }

    /// Block hash over every field.
    pub fn hash(&self) -> Hash {
        let skipped: Vec<Vec<u8>> = self
            .skipped_txs
            .iter()
            .map(|pos| rlp::encode_u64(u64::from(*pos)))
            .collect();
        let items = vec![
            rlp::encode_u64(self.index),
            rlp::encode_u64(self.time),
            rlp::encode_hash_list(&self.events),
            rlp::encode_bytes(&self.parent_hash),
            rlp::encode_bytes(&self.transactions_root),
            rlp::encode_list(&skipped),
            rlp::encode_bytes(&self.root),
        ];
        rlp::keccak256(&rlp::encode_list(&items))
    }

    /// Whether this is block 0.
    pub fn is_genesis(&self) -> bool {
        self.index == 0
    }

    /// Whether the transaction at `position` is excluded from execution.
    pub fn is_skipped(&self, position: u32) -> bool {
        self.skipped_txs.contains(&position)
    }
}

/// Commitment over an ordered list of transaction hashes.
pub fn transactions_root(tx_hashes: &[Hash]) -> Hash {
    if tx_hashes.is_empty() {
        return EMPTY_ROOT;
    }
    rlp::keccak256(&rlp::encode_hash_list(tx_hashes))
}

/// Block shape consumed by the EVM execution engine.
///
/// `transactions` is the executed subset only, in execution order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvmBlock {
    /// Block number.
    pub number: u64,
    /// Block hash.
    pub hash: Hash,
    /// Parent block hash.
    pub parent_hash: Hash,
    /// State root.
    pub root: Hash,
    /// Block time (unix seconds).
    pub time: u64,
    /// Executed transactions, renumbered contiguously.
    pub transactions: Vec<Transaction>,
}

impl EvmBlock {
    /// Hashes of the executed transactions, in order.
    pub fn transaction_hashes(&self) -> Vec<Hash> {
        self.transactions.iter().map(Transaction::hash).collect()
    }
}

// =============================================================================
// CLUSTER C: GENESIS
// =============================================================================

/// Initial state of one genesis account.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Balance in wei.
    pub balance: U256,
    /// Contract code (empty for externally owned accounts).
    pub code: Vec<u8>,
    /// Contract storage.
    pub storage: BTreeMap<StorageKey, StorageValue>,
    /// Signing key, fake networks only. Never persisted, never hashed.
    #[serde(skip)]
    pub secret_key: Option<[u8; 32]>,
}

impl Account {
    /// Create an externally owned account with the given balance.
    pub fn with_balance(balance: U256) -> Self {
        Self {
            balance,
            ..Default::default()
        }
    }
}

/// Genesis allocation: address → initial account, ordered by address.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation(BTreeMap<Address, Account>);

impl Allocation {
    /// Create an empty allocation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an account.
    pub fn insert(&mut self, address: Address, account: Account) -> Option<Account> {
        self.0.insert(address, account)
    }

    /// Get an account.
    pub fn get(&self, address: &Address) -> Option<&Account> {
        self.0.get(address)
    }

    /// Get an account mutably.
    pub fn get_mut(&mut self, address: &Address) -> Option<&mut Account> {
        self.0.get_mut(address)
    }

    /// Whether an address is allocated.
    pub fn contains(&self, address: &Address) -> bool {
        self.0.contains_key(address)
    }

    /// Allocated addresses in ascending order.
    pub fn addresses(&self) -> Vec<Address> {
        self.0.keys().copied().collect()
    }

    /// Iterate accounts in address order.
    pub fn iter(&self) -> impl Iterator<Item = (&Address, &Account)> {
        self.0.iter()
    }

    /// Number of accounts.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the allocation is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Address, Account)> for Allocation {
    fn from_iter<I: IntoIterator<Item = (Address, Account)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
