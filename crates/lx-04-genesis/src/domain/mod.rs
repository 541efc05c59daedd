//! # Domain Layer
//!
//! - `keys` - Deterministic fake identities
//! - `spec` - JSON genesis description
//! - `source` - Allocation/registry construction
//! - `genesis` - The genesis value and its block-0 commitment

pub mod genesis;
pub mod keys;
pub mod source;
pub mod spec;
