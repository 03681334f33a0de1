#[cfg(test)]
mod tests {
    use lz4_stream_core::{
        config::WindowConfig,
        stream::{StreamCompressor, StreamDecompressor},
        telemetry::{StreamCounters, StreamStats},
        types::CompressionError,
    };

    #[test]
    fn fresh_sessions_report_zero() {
        let cc = StreamCompressor::new(WindowConfig::default());
        let cd = StreamDecompressor::new(WindowConfig::default());
        assert_eq!(cc.stats(), StreamStats::default());
        assert_eq!(cd.stats().as_tuple(), (0, 0, 0));
        assert_eq!(cc.stats().output_ratio(), 0.0);
    }

    #[test]
    fn failed_calls_are_not_counted() {
        let cfg = WindowConfig::new(4096, 256);
        let mut cc = StreamCompressor::new(cfg);
        let mut cd = StreamDecompressor::new(cfg);
        let mut buf = Vec::new();

        let _ = cc.process(&mut buf);
        let _ = cc.write(&[0u8; 300]);
        assert_eq!(cc.stats().calls_processed, 0);

        assert_eq!(cd.process(&mut buf, &[0x00]), Err(CompressionError::Malformed));
        assert_eq!(cd.stats(), StreamStats::default());
    }

    #[test]
    fn compressor_and_decompressor_stats_mirror() {
        let cfg = WindowConfig::default();
        let mut cc = StreamCompressor::new(cfg);
        let mut cd = StreamDecompressor::new(cfg);

        for i in 0..100u32 {
            let msg = format!("status=ok id={i} payload=aaaaaaaaaaaaaaaaaaaaaaaa").into_bytes();
            let mut frame = Vec::new();
            cc.compress_message(&msg, &mut frame).unwrap();
            let mut out = Vec::new();
            cd.process(&mut out, &frame).unwrap();
        }

        let sent = cc.stats();
        let received = cd.stats();
        assert_eq!(sent.calls_processed, 100);
        assert_eq!(sent.total_src_bytes, received.total_out_bytes);
        assert_eq!(sent.total_out_bytes, received.total_src_bytes);
        assert!(sent.output_ratio() < 1.0);
        assert!(received.output_ratio() > 1.0);
    }

    #[test]
    fn stats_serialize_to_json() {
        let stats = StreamStats { calls_processed: 3, total_src_bytes: 120, total_out_bytes: 48 };
        let json = serde_json::to_string(&stats).unwrap();
        assert_eq!(json, r#"{"calls_processed":3,"total_src_bytes":120,"total_out_bytes":48}"#);

        let back: StreamStats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stats);
        assert!((back.output_ratio() - 0.4).abs() < f64::EPSILON);
    }

    #[test]
    fn counters_merge_across_sessions() {
        let mut total = StreamCounters::default();
        let mut a = StreamCounters::default();
        a.record(10, 4);
        let mut b = StreamCounters::default();
        b.record(30, 12);
        b.record(5, 5);

        total.merge(&a);
        total += b;
        assert_eq!(total.snapshot().as_tuple(), (3, 45, 21));
    }
}
