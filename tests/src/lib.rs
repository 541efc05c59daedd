//! # Lachesis Ledger Test Suite
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── fixtures.rs       # TestChain: genesis + materializer + reader
//! └── integration/
//!     ├── genesis_flow.rs
//!     ├── materialization_flow.rs
//!     ├── reader_flow.rs
//!     ├── concurrency.rs
//!     └── properties.rs # proptest
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p lx-tests
//! RUST_LOG=debug cargo test -p lx-tests integration::materialization_flow
//! ```

pub mod fixtures;
pub mod integration;

use std::sync::Once;

static TRACING: Once = Once::new();

/// Install a `tracing` subscriber honouring `RUST_LOG`, once per process.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .try_init();
    });
}
