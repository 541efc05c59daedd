//! # Cross-crate Flows
//!
//! Genesis → events → materialization → EVM reads, exercised through the
//! public APIs only.

pub mod genesis_flow;
pub mod materialization_flow;
pub mod properties;
