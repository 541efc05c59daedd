//! # Hex Parsing
//!
//! Decoding of the textual forms used by genesis files: `0x`-prefixed hex
//! for addresses, hashes and byte blobs, decimal or hex for quantities.

use crate::entities::{Address, Hash, U256};
use crate::errors::ParseError;

/// Strip an optional `0x`/`0X` prefix.
fn strip_prefix(input: &str) -> &str {
    input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))
        .unwrap_or(input)
}

/// Decode arbitrary-length hex (`0x` optional). Odd lengths are left-padded.
pub fn parse_bytes(field: &'static str, input: &str) -> Result<Vec<u8>, ParseError> {
    let digits = strip_prefix(input.trim());
    let padded;
    let digits = if digits.len() % 2 == 1 {
        padded = format!("0{}", digits);
        padded.as_str()
    } else {
        digits
    };
    hex::decode(digits).map_err(|e| ParseError::InvalidHex {
        field,
        reason: e.to_string(),
    })
}

/// Decode exactly 20 bytes.
pub fn parse_address(input: &str) -> Result<Address, ParseError> {
    let bytes = parse_bytes("address", input)?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| ParseError::InvalidLength {
            field: "address",
            expected: 20,
            actual: bytes.len(),
        })
}

/// Decode exactly 32 bytes.
pub fn parse_hash(field: &'static str, input: &str) -> Result<Hash, ParseError> {
    let bytes = parse_bytes(field, input)?;
    bytes
        .as_slice()
        .try_into()
        .map_err(|_| ParseError::InvalidLength {
            field,
            expected: 32,
            actual: bytes.len(),
        })
}

/// Decode up to 32 bytes, left-padding to a full word.
pub fn parse_word(field: &'static str, input: &str) -> Result<Hash, ParseError> {
    let bytes = parse_bytes(field, input)?;
    if bytes.len() > 32 {
        return Err(ParseError::InvalidLength {
            field,
            expected: 32,
            actual: bytes.len(),
        });
    }
    let mut word = [0u8; 32];
    word[32 - bytes.len()..].copy_from_slice(&bytes);
    Ok(word)
}

/// Decode a quantity given in decimal or `0x`-prefixed hex.
pub fn parse_quantity(input: &str) -> Result<U256, ParseError> {
    let trimmed = input.trim();
    let result = if trimmed.starts_with("0x") || trimmed.starts_with("0X") {
        U256::from_str_radix(strip_prefix(trimmed), 16).map_err(|e| format!("{:?}", e))
    } else {
        U256::from_dec_str(trimmed).map_err(|e| format!("{:?}", e))
    };
    result.map_err(|reason| ParseError::InvalidQuantity(format!("{} ({})", trimmed, reason)))
}
