//! window/reset.rs
//! Compressor-side window: append, then clear once `dictionary_size` is reached.
use crate::config::WindowConfig;
use crate::types::{CompressionError, Result};
use crate::window::{Advance, WindowCursor};

#[derive(Debug)]
pub struct ResetWindow {
    buf: Vec<u8>,
    /// Start of the pending message inside `buf`.
    start: usize,
    dictionary_size: usize,
    capacity: usize,
}

impl ResetWindow {
    pub fn new(config: &WindowConfig) -> Self {
        let capacity = config.ring_capacity();
        Self {
            buf: Vec::with_capacity(capacity),
            start: 0,
            dictionary_size: config.dictionary_size,
            capacity,
        }
    }

    /// Bytes written since the last commit.
    pub fn pending_len(&self) -> usize {
        self.buf.len() - self.start
    }

    /// Append to the pending message.
    pub fn append(&mut self, bytes: &[u8]) -> Result<()> {
        if self.buf.len() + bytes.len() > self.capacity {
            return Err(CompressionError::InternalInconsistency("ring buffer overflow"));
        }
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// History followed by the pending message; the message starts at `cursor()`.
    pub fn contents(&self) -> &[u8] {
        &self.buf
    }
}

impl WindowCursor for ResetWindow {
    fn dictionary_size(&self) -> usize {
        self.dictionary_size
    }

    fn capacity(&self) -> usize {
        self.capacity
    }

    fn cursor(&self) -> usize {
        self.start
    }

    fn history(&self) -> &[u8] {
        &self.buf[..self.start]
    }

    fn advance<F>(&mut self, len: usize, on_rollover: F) -> Result<Advance>
    where
        F: FnOnce(&[u8]),
    {
        if len != self.pending_len() {
            return Err(CompressionError::InternalInconsistency(
                "committed length differs from pending message",
            ));
        }
        if self.buf.len() >= self.dictionary_size {
            on_rollover(&self.buf);
            self.buf.clear();
            self.start = 0;
            return Ok(Advance::RolledOver);
        }
        self.start = self.buf.len();
        Ok(Advance::Continued)
    }
}
