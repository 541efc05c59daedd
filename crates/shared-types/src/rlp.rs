//! # Canonical Encoding
//!
//! Minimal RLP encoder used for every content hash in the ledger.
//! Only encoding is needed: hashes are recomputed, never decoded.

use crate::entities::{Hash, U256};
use sha3::{Digest, Keccak256};

// =============================================================================
// RLP ENCODING HELPERS
// =============================================================================

/// RLP-encode a byte slice.
pub fn encode_bytes(data: &[u8]) -> Vec<u8> {
    if data.len() == 1 && data[0] < 0x80 {
        vec![data[0]]
    } else if data.len() < 56 {
        let mut result = Vec::with_capacity(data.len() + 1);
        result.push(0x80 + data.len() as u8);
        result.extend_from_slice(data);
        result
    } else {
        let len_bytes = encode_length(data.len());
        let mut result = Vec::with_capacity(data.len() + len_bytes.len() + 1);
        result.push(0xb7 + len_bytes.len() as u8);
        result.extend_from_slice(&len_bytes);
        result.extend_from_slice(data);
        result
    }
}

/// RLP-encode an unsigned integer as minimal big-endian bytes.
pub fn encode_u64(value: u64) -> Vec<u8> {
    let bytes = value.to_be_bytes();
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    encode_bytes(&bytes[start..])
}

/// RLP-encode a 256-bit unsigned integer as minimal big-endian bytes.
pub fn encode_u256(value: &U256) -> Vec<u8> {
    let mut bytes = [0u8; 32];
    value.to_big_endian(&mut bytes);
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());
    encode_bytes(&bytes[start..])
}

/// Wrap already-encoded items in an RLP list.
pub fn encode_list(items: &[Vec<u8>]) -> Vec<u8> {
    let total_len: usize = items.iter().map(|e| e.len()).sum();

    let mut result = Vec::with_capacity(total_len + 9);
    if total_len < 56 {
        result.push(0xc0 + total_len as u8);
    } else {
        let len_bytes = encode_length(total_len);
        result.push(0xf7 + len_bytes.len() as u8);
        result.extend_from_slice(&len_bytes);
    }
    for encoded in items {
        result.extend_from_slice(encoded);
    }
    result
}

/// RLP-encode a list of 32-byte hashes.
pub fn encode_hash_list<'a>(hashes: impl IntoIterator<Item = &'a Hash>) -> Vec<u8> {
    let items: Vec<Vec<u8>> = hashes.into_iter().map(|h| encode_bytes(h)).collect();
    encode_list(&items)
}

/// Encode a length as minimal big-endian bytes.
fn encode_length(len: usize) -> Vec<u8> {
    let bytes = len.to_be_bytes();
    let start = bytes
        .iter()
        .position(|&b| b != 0)
        .unwrap_or(bytes.len() - 1);
    bytes[start..].to_vec()
}

/// Compute Keccak256 hash.
pub fn keccak256(data: &[u8]) -> Hash {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    hasher.finalize().into()
}
