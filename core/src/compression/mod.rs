//! compression/mod.rs
//! Block codec and the persistent per-session codec contexts.
//!
//! - `block` is the stateless one-shot API.
//! - `codecs::lz4` wraps the LZ4 block primitive with retained history so
//!   successive messages on one session can reference each other.

pub mod types;
pub mod block;
pub mod codecs;

pub use types::*;
pub use block::*;
