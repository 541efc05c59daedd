//! # lx-03-state-engine
//!
//! Commits an account allocation into a state snapshot and serves read-only
//! views of any committed snapshot by its root.
//!
//! ## Role in System
//!
//! - **Genesis**: the genesis builder commits the initial allocation here and
//!   records the returned root in block 0.
//! - **Chain reader**: `state_at(root)` backs the EVM's historical reads.
//!
//! ## State Root
//!
//! ```text
//! root = keccak256( address_0 ++ rlp([nonce, balance, storage_root, code_hash])
//!                ++ address_1 ++ ... )          accounts in address order
//! ```
//!
//! An empty allocation commits to `EMPTY_TRIE_ROOT`. Zero-valued storage
//! slots are dropped before hashing, so they never change a root.

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;

pub use adapters::{InMemoryStateEngine, MemoryStateView};
pub use config::StateConfig;
pub use domain::*;
pub use ports::{StateEngine, StateView};
