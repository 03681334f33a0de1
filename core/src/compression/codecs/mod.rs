//! compression/codecs/mod.rs
//! Persistent codec contexts.

pub mod lz4;

pub use lz4::*;
