//! # Ports Layer
//!
//! - `outbound` - Driven ports the host implements (key-value storage)

pub mod outbound;
