//! # Shared Types Crate
//!
//! This crate contains the domain entities shared by every ledger subsystem.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: Cross-subsystem types and their hashes are
//!   defined here and nowhere else.
//! - **Content Addressing**: Every hash is a pure function of the value's
//!   content (Keccak-256 over a canonical RLP encoding).
//! - **No Pointers Between Events**: DAG parents are hash references that are
//!   resolved through the Ledger Store, never in-memory links.
//!
//! ## Clusters
//!
//! - **Chain**: `Transaction`, `Event`, `Block`, `EvmBlock`
//! - **Genesis**: `Account`, `Allocation`
//! - **Encoding**: `rlp`, `keccak256`, hex `parse` helpers

pub mod entities;
pub mod errors;
pub mod parse;
pub mod rlp;

pub use entities::*;
pub use errors::*;
pub use rlp::keccak256;
