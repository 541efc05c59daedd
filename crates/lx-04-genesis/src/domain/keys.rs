//! Deterministic fake identities.
//!
//! `fake_key(n)` is a pure function of `n`, so every node of a fake network
//! derives the same validator set and funded accounts without exchanging
//! keys.

use crate::error::{GenesisError, Result};
use k256::ecdsa::SigningKey;
use shared_types::{keccak256, Address};

const FAKE_KEY_DOMAIN: &[u8] = b"lachesis/fake-key";

/// Secret key number `n` of the fake network.
///
/// Keccak of the domain tag and `n`, rehashed until it is a valid
/// secp256k1 scalar.
pub fn fake_key(n: u64) -> SigningKey {
    let mut preimage = FAKE_KEY_DOMAIN.to_vec();
    preimage.extend_from_slice(&n.to_be_bytes());
    let mut seed = keccak256(&preimage);
    loop {
        if let Ok(key) = SigningKey::from_bytes((&seed).into()) {
            return key;
        }
        seed = keccak256(&seed);
    }
}

/// Ethereum address of a signing key: last 20 bytes of Keccak over the
/// uncompressed public key without its `0x04` prefix.
pub fn address_of(key: &SigningKey) -> Address {
    let encoded = key.verifying_key().to_encoded_point(false);
    let hash = keccak256(&encoded.as_bytes()[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    address
}

/// Address of raw secret key bytes.
pub fn key_address(secret: &[u8; 32]) -> Result<Address> {
    let key = SigningKey::from_bytes(secret.into()).map_err(|_| GenesisError::InvalidKey)?;
    Ok(address_of(&key))
}
