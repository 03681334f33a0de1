//! lz4-stream-core
//!
//! Pure Rust LZ4 block compression plus windowed streaming sessions that use
//! earlier messages as an implicit dictionary.
//! No FFI, no framing, no I/O.

#![forbid(unsafe_code)]

// Shared and top level
pub mod config;
pub mod constants;
pub mod types;

pub mod compression;
pub mod telemetry;
pub mod window;

// Streaming sessions
pub mod stream;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::compression::{compress, compress_bound, decompress, decompress_into};
    pub use crate::config::WindowConfig;
    pub use crate::constants::MAX_INPUT_SIZE;
    pub use crate::stream::{StreamCompressor, StreamDecompressor};
    pub use crate::telemetry::StreamStats;
    pub use crate::types::{CompressionError, Result};
}
