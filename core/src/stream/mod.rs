//! stream/mod.rs
//! Stateful streaming compression that reuses earlier messages as an
//! implicit dictionary.
//!
//! A `StreamCompressor` and a `StreamDecompressor` built from the same
//! `WindowConfig` stay in sync purely through the frames passed between
//! them. Frames must be delivered in order, exactly once; there is no
//! recovery from a lost or reordered frame, so the transport has to
//! guarantee it.

pub mod compressor;
pub mod decompressor;

pub use compressor::StreamCompressor;
pub use decompressor::StreamDecompressor;
