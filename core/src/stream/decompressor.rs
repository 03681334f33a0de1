//! stream/decompressor.rs
//! Streaming decompressor: mirrors a `StreamCompressor` built from the same
//! `WindowConfig`, one frame at a time.
use crate::compression::codecs::Lz4ContinueDecoder;
use crate::compression::types::ContinueDecoder;
use crate::config::WindowConfig;
use crate::telemetry::{StreamCounters, StreamStats};
use crate::types::{CompressionError, Result};
use crate::window::{Advance, WindowCursor, WrapWindow};

pub struct StreamDecompressor<D: ContinueDecoder = Lz4ContinueDecoder> {
    config: WindowConfig,
    decoder: D,
    window: WrapWindow,
    counters: StreamCounters,
}

impl StreamDecompressor {
    /// New session with the LZ4 decoder.
    /// `config` must equal the one the peer compressor was built from.
    pub fn new(config: WindowConfig) -> Self {
        let config = config.clamped();
        Self::with_decoder(config, Lz4ContinueDecoder::new(&config))
    }
}

impl<D: ContinueDecoder> StreamDecompressor<D> {
    pub fn with_decoder(config: WindowConfig, decoder: D) -> Self {
        let config = config.clamped();
        tracing::debug!(
            dictionary_size = config.dictionary_size,
            max_message_size = config.max_message_size,
            "stream decompressor created"
        );
        Self {
            window: WrapWindow::new(&config),
            config,
            decoder,
            counters: StreamCounters::default(),
        }
    }

    pub fn config(&self) -> &WindowConfig {
        &self.config
    }

    pub fn dictionary_size(&self) -> usize {
        self.config.dictionary_size
    }

    pub fn max_message_size(&self) -> usize {
        self.config.max_message_size
    }

    /// Ring buffer offset where the next message will be decoded.
    pub fn cursor(&self) -> usize {
        self.window.cursor()
    }

    /// Decompress one frame and append the plaintext to `dst`.
    /// Returns the plaintext length.
    ///
    /// # Errors
    /// - `NoData` if `frame` is empty.
    /// - `Malformed` if the frame does not decode against the current window:
    ///   corrupt, out of order, or larger than `max_message_size`.
    /// - `InternalInconsistency` if the cursor left `[0, dictionary_size)`.
    ///
    /// On error the session is unchanged and `dst` is not touched.
    pub fn process(&mut self, dst: &mut Vec<u8>, frame: &[u8]) -> Result<usize> {
        if frame.is_empty() {
            return Err(CompressionError::NoData);
        }
        if !self.window.is_consistent() {
            tracing::warn!(cursor = self.window.cursor(), "decompressor cursor out of range");
            return Err(CompressionError::InternalInconsistency("cursor outside dictionary"));
        }

        let cursor = self.window.cursor();
        let capacity = self.window.message_capacity();
        let produced = self
            .decoder
            .decompress_continue(frame, self.window.as_mut_slice(), cursor, capacity)?;
        // Every frame carries at least one byte of plaintext.
        if produced == 0 {
            return Err(CompressionError::Malformed);
        }

        dst.extend_from_slice(self.window.message(produced)?);

        let decoder = &mut self.decoder;
        let advance = self.window.advance(produced, |retired| decoder.retire(retired))?;
        if advance == Advance::RolledOver {
            tracing::debug!(
                calls = self.counters.calls_processed + 1,
                "decompressor window wrapped"
            );
        }

        self.counters.record(frame.len(), produced);
        tracing::trace!(
            frame_len = frame.len(),
            produced,
            cursor = self.window.cursor(),
            "frame decompressed"
        );
        Ok(produced)
    }

    /// `(calls processed, frame bytes in, plaintext bytes out)`.
    pub fn stats(&self) -> StreamStats {
        self.counters.snapshot()
    }

    /// End the session and return its final stats.
    pub fn release(self) -> StreamStats {
        self.stats()
    }
}

impl<D: ContinueDecoder> Drop for StreamDecompressor<D> {
    fn drop(&mut self) {
        tracing::debug!(
            calls = self.counters.calls_processed,
            src_bytes = self.counters.total_src_bytes,
            out_bytes = self.counters.total_out_bytes,
            "stream decompressor released"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stream::StreamCompressor;

    #[test]
    fn empty_frame_is_no_data() {
        let mut cd = StreamDecompressor::new(WindowConfig::default());
        let mut dst = Vec::new();
        assert_eq!(cd.process(&mut dst, &[]), Err(CompressionError::NoData));
        assert_eq!(cd.stats().calls_processed, 0);
    }

    #[test]
    fn cursor_tracks_plaintext_length() {
        let cfg = WindowConfig::new(4096, 256);
        let mut cc = StreamCompressor::new(cfg);
        let mut cd = StreamDecompressor::new(cfg);

        let mut frame = Vec::new();
        cc.compress_message(&[9u8; 200], &mut frame).unwrap();

        let mut out = Vec::new();
        assert_eq!(cd.process(&mut out, &frame).unwrap(), 200);
        assert_eq!(out, vec![9u8; 200]);
        assert_eq!(cd.cursor(), 200);
    }

    #[test]
    fn zero_length_block_is_malformed() {
        // A lone zero token decodes to an empty message.
        let mut cd = StreamDecompressor::new(WindowConfig::default());
        let mut dst = Vec::new();
        assert_eq!(cd.process(&mut dst, &[0x00]), Err(CompressionError::Malformed));
        assert_eq!(cd.cursor(), 0);
    }
}
