//! # Domain Entities for the State Engine
//!
//! An account is RLP-encoded as `[nonce, balance, storage_root, code_hash]`,
//! matching Ethereum's account encoding.

use shared_types::{
    keccak256, rlp, Account, Address, Hash, StorageKey, StorageValue, EMPTY_CODE_HASH, EMPTY_ROOT,
    U256,
};
use std::collections::BTreeMap;

/// Canonical empty trie root: keccak256(RLP("")).
pub const EMPTY_TRIE_ROOT: Hash = EMPTY_ROOT;

/// Account header committed into the state root.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AccountState {
    pub balance: U256,
    pub nonce: u64,
    /// Keccak256 of the contract code. `EMPTY_CODE_HASH` for plain accounts.
    pub code_hash: Hash,
    /// Commitment over the account's non-zero storage slots.
    pub storage_root: Hash,
}

impl Default for AccountState {
    fn default() -> Self {
        Self {
            balance: U256::zero(),
            nonce: 0,
            code_hash: EMPTY_CODE_HASH,
            storage_root: EMPTY_TRIE_ROOT,
        }
    }
}

impl AccountState {
    pub fn rlp_encode(&self) -> Vec<u8> {
        rlp::encode_list(&[
            rlp::encode_u64(self.nonce),
            rlp::encode_u256(&self.balance),
            rlp::encode_bytes(&self.storage_root),
            rlp::encode_bytes(&self.code_hash),
        ])
    }
}

/// A committed account: header plus the data its hashes commit to.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AccountRecord {
    pub state: AccountState,
    pub code: Vec<u8>,
    pub storage: BTreeMap<StorageKey, StorageValue>,
}

impl AccountRecord {
    /// Build the record for a genesis account. Zero slots are dropped.
    pub fn from_account(account: &Account) -> Self {
        let storage: BTreeMap<StorageKey, StorageValue> = account
            .storage
            .iter()
            .filter(|(_, value)| **value != [0u8; 32])
            .map(|(k, v)| (*k, *v))
            .collect();
        let code_hash = if account.code.is_empty() {
            EMPTY_CODE_HASH
        } else {
            keccak256(&account.code)
        };
        Self {
            state: AccountState {
                balance: account.balance,
                nonce: 0,
                code_hash,
                storage_root: storage_root(&storage),
            },
            code: account.code.clone(),
            storage,
        }
    }
}

/// Commitment over storage slots in key order.
pub fn storage_root(storage: &BTreeMap<StorageKey, StorageValue>) -> Hash {
    if storage.is_empty() {
        return EMPTY_TRIE_ROOT;
    }
    let mut buf = Vec::with_capacity(storage.len() * 66);
    for (key, value) in storage {
        buf.extend_from_slice(key);
        buf.extend_from_slice(&rlp::encode_u256(&U256::from_big_endian(value)));
    }
    keccak256(&buf)
}

/// Commitment over accounts in address order.
pub fn state_root(accounts: &BTreeMap<Address, AccountRecord>) -> Hash {
    if accounts.is_empty() {
        return EMPTY_TRIE_ROOT;
    }
    let mut buf = Vec::with_capacity(accounts.len() * 128);
    for (address, record) in accounts {
        buf.extend_from_slice(address);
        buf.extend_from_slice(&record.state.rlp_encode());
    }
    keccak256(&buf)
}
