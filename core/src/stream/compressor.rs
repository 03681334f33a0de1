//! stream/compressor.rs
//! Streaming compressor: `write*` one message, then `process` it into a frame.
use crate::compression::codecs::Lz4ContinueEncoder;
use crate::compression::types::ContinueEncoder;
use crate::config::WindowConfig;
use crate::telemetry::{StreamCounters, StreamStats};
use crate::types::{CompressionError, Result};
use crate::window::{Advance, ResetWindow, WindowCursor};

pub struct StreamCompressor<E: ContinueEncoder = Lz4ContinueEncoder> {
    config: WindowConfig,
    encoder: E,
    window: ResetWindow,
    counters: StreamCounters,
}

impl StreamCompressor {
    /// New session with the LZ4 encoder. `config` is clamped.
    pub fn new(config: WindowConfig) -> Self {
        let config = config.clamped();
        Self::with_encoder(config, Lz4ContinueEncoder::new(&config))
    }
}

impl<E: ContinueEncoder> StreamCompressor<E> {
    pub fn with_encoder(config: WindowConfig, encoder: E) -> Self {
        let config = config.clamped();
        tracing::debug!(
            dictionary_size = config.dictionary_size,
            max_message_size = config.max_message_size,
            "stream compressor created"
        );
        Self {
            window: ResetWindow::new(&config),
            config,
            encoder,
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

    /// Length of the message written so far and not yet processed.
    pub fn pending_len(&self) -> usize {
        self.window.pending_len()
    }

    /// Append `src` to the pending message. Empty input is a no-op.
    ///
    /// # Errors
    /// - `MessageTooLarge` if the message would exceed `max_message_size`;
    ///   the pending message is left untouched.
    /// - `InternalInconsistency` if the ring buffer would overflow.
    pub fn write(&mut self, src: &[u8]) -> Result<()> {
        if src.is_empty() {
            return Ok(());
        }
        let pending = self.window.pending_len();
        if pending + src.len() > self.config.max_message_size {
            return Err(CompressionError::MessageTooLarge {
                pending,
                incoming: src.len(),
                max: self.config.max_message_size,
            });
        }
        self.window.append(src).map_err(|e| {
            tracing::warn!(error = %e, pending, incoming = src.len(), "compressor window overflow");
            e
        })
    }

    /// Compress the pending message and append the frame to `dst`.
    /// Returns the frame length. `dst` grows as needed.
    ///
    /// # Errors
    /// - `NoData` if nothing has been written since the last call.
    pub fn process(&mut self, dst: &mut Vec<u8>) -> Result<usize> {
        let msg_len = self.window.pending_len();
        if msg_len == 0 {
            return Err(CompressionError::NoData);
        }

        let frame_len = self
            .encoder
            .compress_continue(self.window.contents(), self.window.cursor(), dst)?;

        let encoder = &mut self.encoder;
        let advance = self.window.advance(msg_len, |retired| encoder.retire(retired))?;
        if advance == Advance::RolledOver {
            tracing::debug!(calls = self.counters.calls_processed + 1, "compressor window reset");
        }

        self.counters.record(msg_len, frame_len);
        tracing::trace!(msg_len, frame_len, cursor = self.window.cursor(), "frame compressed");
        Ok(frame_len)
    }

    /// `write` followed by `process`.
    pub fn compress_message(&mut self, msg: &[u8], dst: &mut Vec<u8>) -> Result<usize> {
        self.write(msg)?;
        self.process(dst)
    }

    /// `(calls processed, plaintext bytes in, frame bytes out)`.
    pub fn stats(&self) -> StreamStats {
        self.counters.snapshot()
    }

    /// End the session and return its final stats.
    pub fn release(self) -> StreamStats {
        self.stats()
    }
}

impl<E: ContinueEncoder> Drop for StreamCompressor<E> {
    fn drop(&mut self) {
        tracing::debug!(
            calls = self.counters.calls_processed,
            src_bytes = self.counters.total_src_bytes,
            out_bytes = self.counters.total_out_bytes,
            "stream compressor released"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn process_without_data_is_no_data() {
        let mut cc = StreamCompressor::new(WindowConfig::new(0, 0));
        let mut dst = Vec::new();
        assert_eq!(cc.process(&mut dst), Err(CompressionError::NoData));
        assert!(dst.is_empty());
    }

    #[test]
    fn empty_write_is_noop() {
        let mut cc = StreamCompressor::new(WindowConfig::new(0, 0));
        cc.write(&[]).unwrap();
        assert_eq!(cc.pending_len(), 0);
    }

    #[test]
    fn write_accumulates_until_process() {
        let mut cc = StreamCompressor::new(WindowConfig::new(32 * 1024, 4096));
        cc.write(b"abcdefghijklmnoptrstuvwxyz").unwrap();
        cc.write(b"1234").unwrap();
        assert_eq!(cc.pending_len(), 30);

        let mut dst = Vec::new();
        let n = cc.process(&mut dst).unwrap();
        assert_eq!(n, dst.len());
        assert_eq!(cc.pending_len(), 0);
        assert_eq!(cc.stats().as_tuple(), (1, 30, n as u64));
    }

    #[test]
    fn release_returns_final_stats() {
        let mut cc = StreamCompressor::new(WindowConfig::default());
        let mut dst = Vec::new();
        cc.compress_message(b"hello", &mut dst).unwrap();
        let stats = cc.release();
        assert_eq!(stats.calls_processed, 1);
        assert_eq!(stats.total_src_bytes, 5);
    }
}
