//! # Validator Registry (lx-01)
//!
//! Stake-weighted set of validator addresses.
//!
//! ## Lifecycle
//!
//! The registry is built once by the genesis builder, persisted next to the
//! genesis block, and then shared read-only with the chain reader. It is
//! rebuilt wholesale on validator changes; there are no partial updates
//! after genesis.
//!
//! ## Zero Stake
//!
//! `set(address, 0)` keeps the validator registered but inactive. Inactive
//! validators still count in `len()` and in the registry hash, so they are
//! part of the genesis commitment; quorum math (external) only sees
//! `active()`.

pub mod registry;

pub use registry::{Validator, ValidatorRegistry};
