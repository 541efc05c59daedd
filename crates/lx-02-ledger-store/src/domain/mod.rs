//! # Domain Layer
//!
//! - `errors` - Ledger and adapter error types
//! - `keys` - Key prefixes of the persisted layout

pub mod errors;
pub mod keys;
