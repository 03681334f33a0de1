//! window/mod.rs
//! Sliding window over a fixed-capacity ring buffer of recent plaintext.
//!
//! The bytes before the cursor are the back-reference dictionary for the
//! next message. The compressor uses `ResetWindow` and the decompressor uses
//! `WrapWindow`; for the same sequence of message lengths both produce the
//! same cursor sequence and hold the same bytes before the cursor.

pub mod reset;
pub mod wrap;

pub use reset::ResetWindow;
pub use wrap::WrapWindow;

use crate::types::Result;

/// Outcome of committing one message to a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    /// Cursor moved forward; history keeps growing.
    Continued,
    /// Window reached `dictionary_size` and restarted at offset 0.
    RolledOver,
}

pub trait WindowCursor {
    /// Size at which the window rolls over.
    fn dictionary_size(&self) -> usize;

    /// Fixed ring buffer capacity (`dictionary_size + max_message_size`).
    fn capacity(&self) -> usize;

    /// Offset where the next message begins.
    fn cursor(&self) -> usize;

    /// Window bytes before the cursor.
    fn history(&self) -> &[u8];

    /// Commit a message of `len` bytes that starts at the cursor.
    ///
    /// On rollover `on_rollover` sees the whole outgoing window before it is
    /// discarded.
    fn advance<F>(&mut self, len: usize, on_rollover: F) -> Result<Advance>
    where
        F: FnOnce(&[u8]);
}
