//! config.rs
//! Window configuration shared by a compressor/decompressor pair.
//!
//! Both sides of a stream MUST be built from identical values. Nothing on the
//! wire carries them, so a mismatch is not detected and corrupts the stream.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DICTIONARY_SIZE, DEFAULT_MAX_MESSAGE_SIZE, MAX_DICTIONARY_SIZE, MAX_MESSAGE_SIZE,
    MIN_DICTIONARY_SIZE, MIN_MESSAGE_SIZE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Bytes of prior plaintext usable as back-reference history.
    pub dictionary_size: usize,
    /// Largest single message a session accepts.
    pub max_message_size: usize,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            dictionary_size: DEFAULT_DICTIONARY_SIZE,
            max_message_size: DEFAULT_MAX_MESSAGE_SIZE,
        }
    }
}

impl WindowConfig {
    /// Build a config; values are clamped (see `clamped`).
    pub fn new(dictionary_size: usize, max_message_size: usize) -> Self {
        Self { dictionary_size, max_message_size }.clamped()
    }

    /// Raise values below the minimums and cap both sizes.
    /// Sessions always apply this, so a deserialized config may hold raw values.
    pub fn clamped(self) -> Self {
        Self {
            dictionary_size: self.dictionary_size.clamp(MIN_DICTIONARY_SIZE, MAX_DICTIONARY_SIZE),
            max_message_size: self.max_message_size.clamp(MIN_MESSAGE_SIZE, MAX_MESSAGE_SIZE),
        }
    }

    /// Ring buffer capacity: a full dictionary plus one maximal message.
    pub fn ring_capacity(&self) -> usize {
        self.dictionary_size.saturating_add(self.max_message_size)
    }
}
