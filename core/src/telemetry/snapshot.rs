//! telemetry/snapshot.rs
//! Immutable stats snapshot for a compressor or decompressor session.
use serde::{Deserialize, Serialize};

/// `(calls processed, cumulative source bytes, cumulative output bytes)`.
///
/// For a compressor the source is plaintext and the output is frames; for a
/// decompressor it is the other way round.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamStats {
    pub calls_processed: u64,
    pub total_src_bytes: u64,
    pub total_out_bytes: u64,
}

impl StreamStats {
    /// Output bytes per source byte. Below 1.0 on a compressor that is
    /// saving space; above 1.0 on the matching decompressor.
    /// Returns 0.0 before any source bytes were counted.
    pub fn output_ratio(&self) -> f64 {
        if self.total_src_bytes == 0 {
            return 0.0;
        }
        self.total_out_bytes as f64 / self.total_src_bytes as f64
    }

    /// Same tuple shape the metrics surface documents.
    pub fn as_tuple(&self) -> (u64, u64, u64) {
        (self.calls_processed, self.total_src_bytes, self.total_out_bytes)
    }
}
