//! telemetry/counters.rs
//! Mutable counters used by streaming sessions.
//!
//! Summary: counts successful `process` calls and the bytes that went in and
//! came out. Read through `StreamStats`.
use std::ops::AddAssign;

use crate::telemetry::snapshot::StreamStats;

/// Deterministic counters collected while a session processes messages.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct StreamCounters {
    pub calls_processed: u64,
    pub total_src_bytes: u64,
    pub total_out_bytes: u64,
}

impl StreamCounters {
    /// Record one successful call.
    ///
    /// - `src_len`: bytes consumed (plaintext for compression, frame for decompression)
    /// - `out_len`: bytes produced
    pub fn record(&mut self, src_len: usize, out_len: usize) {
        self.calls_processed += 1;
        self.total_src_bytes += src_len as u64;
        self.total_out_bytes += out_len as u64;
    }

    pub fn snapshot(&self) -> StreamStats {
        StreamStats {
            calls_processed: self.calls_processed,
            total_src_bytes: self.total_src_bytes,
            total_out_bytes: self.total_out_bytes,
        }
    }

    // Lets callers aggregate several sessions without sharing them.
    pub fn merge(&mut self, other: &StreamCounters) {
        self.calls_processed += other.calls_processed;
        self.total_src_bytes += other.total_src_bytes;
        self.total_out_bytes += other.total_out_bytes;
    }
}

impl AddAssign for StreamCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.merge(&rhs);
    }
}
