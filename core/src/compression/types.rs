//! compression/types.rs
//! Traits for the persistent codec contexts used by streaming sessions.
use crate::types::Result;

/// Encoder side of a persistent codec context.
pub trait ContinueEncoder: Send {
    /// Compress `window[start..]`, with `window[..start]` and any retained
    /// history available as back-reference dictionary.
    /// Appends one block to `out` and returns its length.
    fn compress_continue(
        &mut self,
        window: &[u8],
        start: usize,
        out: &mut Vec<u8>,
    ) -> Result<usize>;

    /// The window is about to be cleared; `window` is everything it held.
    fn retire(&mut self, window: &[u8]);
}

/// Decoder side of a persistent codec context.
pub trait ContinueDecoder: Send {
    /// Decode `frame` into `window[start..start + capacity]`, with
    /// `window[..start]` and any retained history as dictionary.
    /// Returns the decoded length.
    fn decompress_continue(
        &mut self,
        frame: &[u8],
        window: &mut [u8],
        start: usize,
        capacity: usize,
    ) -> Result<usize>;

    /// The cursor is about to wrap; `window` is everything before it.
    fn retire(&mut self, window: &[u8]);
}
