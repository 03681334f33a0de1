//! compression/block.rs
//! One-shot LZ4 block compression.
//!
//! Buffer contract (one per direction, no overloads):
//! - `compress` appends to `dst` and grows it as needed. It cannot fail on
//!   capacity; `dst` is sized once to the encoder's worst case, then truncated.
//! - `decompress` writes into the spare capacity of `dst` and never grows it.
//!   A raw block carries no size, so the caller's capacity is the bound.

use crate::compression::codecs::lz4::{decode_block_into, encode_block_into};
use crate::constants::MAX_INPUT_SIZE;
use crate::types::{CompressionError, Result};

/// Worst-case compressed size for `input_size` bytes of incompressible input.
/// Returns 0 when the size is 0 or above `MAX_INPUT_SIZE`.
pub fn compress_bound(input_size: usize) -> usize {
    if input_size == 0 || input_size > MAX_INPUT_SIZE {
        return 0;
    }
    input_size + input_size / 255 + 16
}

/// Largest plaintext an LZ4 block of `block_len` bytes can expand to.
/// Each input byte yields at most 255 output bytes (one match-length byte).
fn max_decompressed_size(block_len: usize) -> usize {
    block_len.saturating_mul(255)
}

/// Compress `src` as one block appended to `dst`. Returns bytes written.
pub fn compress(dst: &mut Vec<u8>, src: &[u8]) -> Result<usize> {
    if src.is_empty() {
        return Ok(0);
    }
    if src.len() > MAX_INPUT_SIZE {
        return Err(CompressionError::SourceTooLarge { len: src.len(), max: MAX_INPUT_SIZE });
    }
    encode_block_into(src, &[], dst)
}

/// Decompress one block into the spare capacity of `dst`. Returns bytes written.
///
/// On failure `dst` keeps its original length.
pub fn decompress(dst: &mut Vec<u8>, src: &[u8]) -> Result<usize> {
    if src.is_empty() {
        return Ok(0);
    }
    let start = dst.len();
    let available = dst.capacity() - start;
    if available == 0 {
        return Err(CompressionError::CapacityError { available });
    }

    // Stays within the existing allocation; only the reachable output is zeroed.
    let region = available.min(max_decompressed_size(src.len()));
    dst.resize(start + region, 0);
    match decompress_into(&mut dst[start..], src) {
        Ok(written) => {
            dst.truncate(start + written);
            Ok(written)
        }
        Err(e) => {
            dst.truncate(start);
            Err(e)
        }
    }
}

/// Decompress one block into a fixed slice. Never writes past `dst.len()`.
pub fn decompress_into(dst: &mut [u8], src: &[u8]) -> Result<usize> {
    if src.is_empty() {
        return Ok(0);
    }
    if dst.is_empty() {
        return Err(CompressionError::CapacityError { available: 0 });
    }
    decode_block_into(src, &[], dst)
}
