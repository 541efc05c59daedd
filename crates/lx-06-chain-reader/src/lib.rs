//! # Chain State Reader (lx-06)
//!
//! Read-only adapter the EVM execution engine uses to see the materialized
//! chain as an ordinary linear blockchain.
//!
//! - Block 0 is served in genesis shape: genesis time, state root and hash,
//!   no transactions.
//! - Any other block is rebuilt from its events; positions listed in
//!   `skipped_txs` are dropped and the rest renumbered contiguously.
//! - `state_at(root)` opens a historical state view.
//!
//! Misses are `Ok(None)`. A stored block whose events are gone is store
//! corruption and surfaces as `ReaderError::MissingEvent`.

pub mod error;
pub mod reader;

pub use error::{ReaderError, Result};
pub use reader::EvmStateReader;
