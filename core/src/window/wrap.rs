//! window/wrap.rs
//! Decompressor-side window: decode in place at the cursor, wrap to 0 at
//! `dictionary_size`.
use crate::config::WindowConfig;
use crate::types::{CompressionError, Result};
use crate::window::{Advance, WindowCursor};

#[derive(Debug)]
pub struct WrapWindow {
    buf: Vec<u8>,
    offset: usize,
    dictionary_size: usize,
    max_message_size: usize,
}

impl WrapWindow {
    pub fn new(config: &WindowConfig) -> Self {
        Self {
            buf: vec![0u8; config.ring_capacity()],
            offset: 0,
            dictionary_size: config.dictionary_size,
            max_message_size: config.max_message_size,
        }
    }

    /// Cursor lies in `[0, dictionary_size)`.
    pub fn is_consistent(&self) -> bool {
        self.offset < self.dictionary_size
    }

    /// Room available for one message starting at the cursor.
    pub fn message_capacity(&self) -> usize {
        self.max_message_size
    }

    /// Whole ring buffer, for in-place decoding at `cursor()`.
    pub fn as_mut_slice(&mut self) -> &mut [u8] {
        &mut self.buf
    }

    /// `len` bytes starting at the cursor.
    pub fn message(&self, len: usize) -> Result<&[u8]> {
        self.buf
            .get(self.offset..self.offset + len)
            .ok_or(CompressionError::InternalInconsistency("message beyond ring buffer"))
    }
}

impl WindowCursor for WrapWindow {
    fn dictionary_size(&self) -> usize {
        self.dictionary_size
    }

    fn capacity(&self) -> usize {
        self.buf.len()
    }

    fn cursor(&self) -> usize {
        self.offset
    }

    fn history(&self) -> &[u8] {
        &self.buf[..self.offset]
    }

    fn advance<F>(&mut self, len: usize, on_rollover: F) -> Result<Advance>
    where
        F: FnOnce(&[u8]),
    {
        let end = self.offset + len;
        if end > self.buf.len() {
            return Err(CompressionError::InternalInconsistency("cursor beyond ring buffer"));
        }
        if end >= self.dictionary_size {
            on_rollover(&self.buf[..end]);
            self.offset = 0;
            return Ok(Advance::RolledOver);
        }
        self.offset = end;
        Ok(Advance::Continued)
    }
}
