//! # Ledger Store (lx-02)
//!
//! Content-addressed persistence for DAG events and materialized blocks.
//!
//! ## Persisted Layout
//!
//! | Key | Value |
//! |-----|-------|
//! | `e:{event_hash}` | Event |
//! | `b:{block_hash}` | Block |
//! | `h:{index}` | block hash at index |
//! | `t:{tx_hash}` | index of the block that executed it |
//! | `m:latest` | latest block index |
//! | `m:genesis` | genesis hash |
//! | `m:validators` | genesis validator registry |
//!
//! ## Domain Invariants
//!
//! | ID | Invariant | Description |
//! |----|-----------|-------------|
//! | 1 | Idempotent Events | Re-writing a stored event is a no-op |
//! | 2 | Immutable Blocks | A different block at an existing index is rejected |
//! | 3 | Gapless Indices | A block must extend the latest index by exactly one |
//! | 4 | Parent Linkage | `parent_hash` must be the hash stored at `index - 1` |
//! | 5 | Single Genesis | Genesis is written once, on an empty store |
//! | 6 | Atomic Writes | Each block commit is a single batch |
//!
//! Ordering is never inferred from storage: only the materializer assigns
//! indices. Lookups never wait; a miss is `Ok(None)`.
//!
//! ## Crate Structure (Hexagonal Architecture)
//!
//! - `domain/` - Errors and key layout
//! - `ports/` - `KeyValueStore` driven port
//! - `adapters/` - In-memory KV store, bincode codec
//! - `service.rs` - `LedgerStore` application service

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod service;

pub use adapters::InMemoryKVStore;
pub use domain::errors::{KVStoreError, LedgerError, Result, SerializationError};
pub use domain::keys::KeyPrefix;
pub use ports::outbound::{BatchOperation, KeyValueStore};
pub use service::LedgerStore;
