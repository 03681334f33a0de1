//! types.rs
//! Unified error for block and streaming compression.
//!
//! - One closed enum; callers match on variants, never on identity.
//! - `Malformed` deliberately covers both "destination too small" and
//!   "corrupted source": the block decoder contract reports one failure.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompressionError {
    /// Input exceeds `MAX_INPUT_SIZE`.
    #[error("src is too large: {len} > {max}")]
    SourceTooLarge { len: usize, max: usize },

    /// Streaming message would exceed the configured `max_message_size`.
    #[error("message too large: {pending} pending + {incoming} incoming > {max}")]
    MessageTooLarge { pending: usize, incoming: usize, max: usize },

    /// Destination has no room at all (one-shot decompress).
    #[error("dst is not large enough: {available} bytes available")]
    CapacityError { available: usize },

    /// Decompression failed: dst is not large enough, or src data is malformed.
    #[error("dst is not large enough, or src data is malformed")]
    Malformed,

    /// Empty input passed to a `process` call.
    #[error("no data")]
    NoData,

    /// Session state is corrupted. The session must be discarded.
    #[error("internal error: {0}")]
    InternalInconsistency(&'static str),
}

impl CompressionError {
    /// True when the session that produced this error can no longer be used.
    pub fn is_fatal(&self) -> bool {
        matches!(self, CompressionError::InternalInconsistency(_))
    }
}

pub type Result<T> = std::result::Result<T, CompressionError>;
