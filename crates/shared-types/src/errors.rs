//! # Error Types
//!
//! Errors raised while decoding externally supplied values.

use thiserror::Error;

/// Errors raised while parsing hex-encoded addresses, hashes and quantities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Input was not valid hex.
    #[error("Invalid hex in {field}: {reason}")]
    InvalidHex { field: &'static str, reason: String },

    /// Decoded value has the wrong length.
    #[error("Invalid length for {field}: expected {expected} bytes, got {actual}")]
    InvalidLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Quantity is neither decimal nor `0x`-prefixed hex, or overflows 256 bits.
    #[error("Invalid quantity: {0}")]
    InvalidQuantity(String),
}
