//! # Adapters Layer
//!
//! - `memory` - In-memory `KeyValueStore`
//! - `codec` - bincode value encoding

pub mod codec;
pub mod memory;

pub use memory::InMemoryKVStore;
