//! codecs/lz4.rs
//! LZ4 block encode/decode with a persistent dictionary context.
//!
//! Frames are raw LZ4 blocks: no size prefix, no checksum. Matches may reach
//! back into the caller's window prefix and into history retained from the
//! previous window, up to `LZ4_MAX_DISTANCE` bytes in total.
use lz4_flex::block::{
    compress_into, compress_into_with_dict, decompress_into, decompress_into_with_dict,
    get_maximum_output_size,
};

use crate::compression::types::{ContinueDecoder, ContinueEncoder};
use crate::config::WindowConfig;
use crate::constants::LZ4_MAX_DISTANCE;
use crate::types::{CompressionError, Result};

/// Append one LZ4 block for `input` to `out`, growing it as needed.
pub(crate) fn encode_block_into(input: &[u8], dict: &[u8], out: &mut Vec<u8>) -> Result<usize> {
    let start = out.len();
    out.resize(start + get_maximum_output_size(input.len()), 0);

    let result = if dict.is_empty() {
        compress_into(input, &mut out[start..])
    } else {
        compress_into_with_dict(input, &mut out[start..], dict)
    };

    match result {
        Ok(written) => {
            out.truncate(start + written);
            Ok(written)
        }
        Err(e) => {
            out.truncate(start);
            // Output is sized to the encoder's own worst case.
            tracing::warn!(error = %e, input_len = input.len(), "lz4 encoder rejected input");
            Err(CompressionError::InternalInconsistency(
                "lz4 encoder rejected a worst-case sized output",
            ))
        }
    }
}

/// Decode one LZ4 block into `out`; never writes past `out.len()`.
pub(crate) fn decode_block_into(input: &[u8], dict: &[u8], out: &mut [u8]) -> Result<usize> {
    let result = if dict.is_empty() {
        decompress_into(input, out)
    } else {
        decompress_into_with_dict(input, out, dict)
    };

    result.map_err(|e| {
        tracing::debug!(
            error = %e,
            frame_len = input.len(),
            capacity = out.len(),
            "lz4 decode failed"
        );
        CompressionError::Malformed
    })
}

/// Tail of every retired window, kept so the first messages after a
/// reset/wrap can still reference it. Encoder and decoder run the exact same
/// updates, so both sides see identical dictionaries.
///
/// Tail plus in-window prefix never exceeds `limit`, the configured
/// `dictionary_size` capped at `LZ4_MAX_DISTANCE`.
#[derive(Debug)]
struct RetainedHistory {
    limit: usize,
    tail: Vec<u8>,
    scratch: Vec<u8>,
}

impl RetainedHistory {
    fn new(dictionary_size: usize) -> Self {
        let limit = dictionary_size.min(LZ4_MAX_DISTANCE);
        Self {
            limit,
            tail: Vec::with_capacity(limit),
            scratch: Vec::with_capacity(limit),
        }
    }

    fn retire(&mut self, window: &[u8]) {
        if window.len() >= self.limit {
            self.tail.clear();
            self.tail.extend_from_slice(&window[window.len() - self.limit..]);
            return;
        }
        let keep = self.limit - window.len();
        if self.tail.len() > keep {
            self.tail.drain(..self.tail.len() - keep);
        }
        self.tail.extend_from_slice(window);
    }

    /// Dictionary for a message whose in-window prefix is `prefix`.
    fn dictionary<'a>(&'a mut self, prefix: &'a [u8]) -> &'a [u8] {
        if self.tail.is_empty() || prefix.len() >= self.limit {
            return &prefix[prefix.len().saturating_sub(self.limit)..];
        }
        let keep = self.limit - prefix.len();
        let from = self.tail.len().saturating_sub(keep);
        self.scratch.clear();
        self.scratch.extend_from_slice(&self.tail[from..]);
        self.scratch.extend_from_slice(prefix);
        &self.scratch
    }
}

/// Persistent LZ4 encode context for one compression session.
#[derive(Debug)]
pub struct Lz4ContinueEncoder {
    history: RetainedHistory,
}

impl Lz4ContinueEncoder {
    /// Context whose history spans at most `config.dictionary_size` bytes.
    pub fn new(config: &WindowConfig) -> Self {
        Self { history: RetainedHistory::new(config.dictionary_size) }
    }
}

impl ContinueEncoder for Lz4ContinueEncoder {
    fn compress_continue(
        &mut self,
        window: &[u8],
        start: usize,
        out: &mut Vec<u8>,
    ) -> Result<usize> {
        if start > window.len() {
            return Err(CompressionError::InternalInconsistency("message start beyond window"));
        }
        let (prefix, message) = window.split_at(start);
        let dict = self.history.dictionary(prefix);
        encode_block_into(message, dict, out)
    }

    fn retire(&mut self, window: &[u8]) {
        self.history.retire(window);
    }
}

/// Persistent LZ4 decode context for one decompression session.
#[derive(Debug)]
pub struct Lz4ContinueDecoder {
    history: RetainedHistory,
}

impl Lz4ContinueDecoder {
    /// Context whose history spans at most `config.dictionary_size` bytes.
    pub fn new(config: &WindowConfig) -> Self {
        Self { history: RetainedHistory::new(config.dictionary_size) }
    }
}

impl ContinueDecoder for Lz4ContinueDecoder {
    fn decompress_continue(
        &mut self,
        frame: &[u8],
        window: &mut [u8],
        start: usize,
        capacity: usize,
    ) -> Result<usize> {
        let end = start
            .checked_add(capacity)
            .filter(|end| *end <= window.len())
            .ok_or(CompressionError::InternalInconsistency("decode region beyond window"))?;
        let (prefix, rest) = window.split_at_mut(start);
        let dict = self.history.dictionary(prefix);
        decode_block_into(frame, dict, &mut rest[..end - start])
    }

    fn retire(&mut self, window: &[u8]) {
        self.history.retire(window);
    }
}
