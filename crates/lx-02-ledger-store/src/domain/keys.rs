//! Key layout of the ledger.

use shared_types::Hash;

/// Key prefixes for the persisted layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPrefix {
    /// Event data: `e:{hash}` -> Event
    Event,
    /// Block data: `b:{hash}` -> Block
    Block,
    /// Index to hash: `h:{index}` -> Hash
    BlockByIndex,
    /// Executed transactions: `t:{tx_hash}` -> block index
    Transaction,
    /// Chain metadata: `m:{name}`
    Metadata,
}

impl KeyPrefix {
    /// Get the byte prefix for this key type.
    pub fn as_bytes(&self) -> &'static [u8] {
        match self {
            KeyPrefix::Event => b"e:",
            KeyPrefix::Block => b"b:",
            KeyPrefix::BlockByIndex => b"h:",
            KeyPrefix::Transaction => b"t:",
            KeyPrefix::Metadata => b"m:",
        }
    }

    /// Build a full key with the given suffix.
    pub fn key(&self, suffix: &[u8]) -> Vec<u8> {
        let mut key = self.as_bytes().to_vec();
        key.extend_from_slice(suffix);
        key
    }
}

pub fn event_key(hash: &Hash) -> Vec<u8> {
    KeyPrefix::Event.key(hash)
}

pub fn block_key(hash: &Hash) -> Vec<u8> {
    KeyPrefix::Block.key(hash)
}

/// Big-endian so that keys sort by index.
pub fn index_key(index: u64) -> Vec<u8> {
    KeyPrefix::BlockByIndex.key(&index.to_be_bytes())
}

pub fn tx_key(tx_hash: &Hash) -> Vec<u8> {
    KeyPrefix::Transaction.key(tx_hash)
}

pub fn latest_key() -> Vec<u8> {
    KeyPrefix::Metadata.key(b"latest")
}

pub fn genesis_key() -> Vec<u8> {
    KeyPrefix::Metadata.key(b"genesis")
}

pub fn validators_key() -> Vec<u8> {
    KeyPrefix::Metadata.key(b"validators")
}
