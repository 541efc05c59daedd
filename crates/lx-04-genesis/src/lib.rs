//! # Genesis Builder (lx-04)
//!
//! Produces the initial account allocation and validator registry, either
//! from deterministic fake identities (test networks) or from an explicit
//! JSON description, and writes block 0.
//!
//! ## Genesis Flow
//!
//! ```text
//! GenesisSource ──build()──→ (Allocation, ValidatorRegistry)
//!                                   │
//!                    Genesis { time, alloc, validators }
//!                                   │
//!   apply ──→ StateEngine::commit(alloc) ──→ state root
//!         ──→ block 0 { events: [commitment], root: state root }
//!         ──→ LedgerStore::commit_genesis (one atomic batch)
//! ```
//!
//! The commitment event hash covers the state root, the registry hash and
//! the genesis time, so two genesis inputs that differ in any of them never
//! share a genesis hash.

pub mod config;
pub mod domain;
pub mod error;
pub mod service;

pub use config::GenesisConfig;
pub use domain::genesis::{genesis_commitment, Genesis, FAKE_BALANCE, FAKE_GENESIS_TIME};
pub use domain::keys::{address_of, fake_key, key_address};
pub use domain::source::{build_from_spec, fake_accounts, GenesisSource};
pub use domain::spec::{AccountSpec, GenesisSpec, Quantity, ValidatorSpec};
pub use error::{GenesisError, Result};
pub use service::{apply_genesis, GenesisBuilder};
