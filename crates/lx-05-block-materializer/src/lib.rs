//! # Block Materializer (lx-05)
//!
//! Turns each finalized batch of events into the next block of the linear
//! chain.
//!
//! ## Materialization Flow
//!
//! ```text
//! FinalizedBatch { events, time }
//!        │
//!        ├─ fetch events in finalized order (absent → MissingEvent, no write)
//!        ├─ concatenate transactions (event order, then in-event order)
//!        ├─ skip mask: Duplicate → AlreadyIncluded → Malformed
//!        ├─ Block { index: head + 1, parent: head, root: head root }
//!        ├─ LedgerStore::commit_block (atomic)
//!        └─ swap ChainHead under a brief write lock
//! ```
//!
//! Skipped transactions stay in the block's transaction list; readers drop
//! them by position through `skipped_txs`.
//!
//! ## Concurrency
//!
//! At most one materialization is in flight. Readers of the shared head are
//! only excluded for the duration of the swap.

pub mod config;
pub mod domain;
pub mod error;
pub mod metrics;
pub mod service;

pub use config::MaterializerConfig;
pub use domain::batch::{FinalizedBatch, MaterializedBlock};
pub use domain::head::{load_head, ChainHead, SharedChainHead};
pub use domain::skip::{check_shape, compute_skips, ShapeViolation, SkipReason};
pub use error::{MaterializeError, Result};
pub use metrics::MaterializerMetrics;
pub use service::BlockMaterializer;
