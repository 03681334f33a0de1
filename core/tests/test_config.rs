#[cfg(test)]
mod tests {
    use lz4_stream_core::{
        config::WindowConfig,
        constants::{
            DEFAULT_DICTIONARY_SIZE, DEFAULT_MAX_MESSAGE_SIZE, MAX_DICTIONARY_SIZE,
            MAX_MESSAGE_SIZE, MIN_DICTIONARY_SIZE, MIN_MESSAGE_SIZE,
        },
        stream::{StreamCompressor, StreamDecompressor},
    };

    #[test]
    fn default_config() {
        let cfg = WindowConfig::default();
        assert_eq!(cfg.dictionary_size, DEFAULT_DICTIONARY_SIZE);
        assert_eq!(cfg.max_message_size, DEFAULT_MAX_MESSAGE_SIZE);
        assert_eq!(cfg.ring_capacity(), DEFAULT_DICTIONARY_SIZE + DEFAULT_MAX_MESSAGE_SIZE);
    }

    #[test]
    fn deserialized_config_is_clamped_by_sessions() {
        let raw: WindowConfig =
            serde_json::from_str(r#"{"dictionary_size":10,"max_message_size":1}"#).unwrap();
        assert_eq!(raw.dictionary_size, 10);

        let cc = StreamCompressor::new(raw);
        let cd = StreamDecompressor::new(raw);
        assert_eq!(cc.dictionary_size(), MIN_DICTIONARY_SIZE);
        assert_eq!(cc.max_message_size(), MIN_MESSAGE_SIZE);
        assert_eq!(cc.config(), cd.config());
    }

    #[test]
    fn oversized_message_limit_is_capped() {
        let cfg = WindowConfig { dictionary_size: 8192, max_message_size: usize::MAX }.clamped();
        assert_eq!(cfg.max_message_size, MAX_MESSAGE_SIZE);
        assert_eq!(cfg.dictionary_size, 8192);
    }

    #[test]
    fn deserialized_huge_dictionary_is_capped() {
        let json = format!(r#"{{"dictionary_size":{},"max_message_size":512}}"#, usize::MAX);
        let raw: WindowConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(raw.ring_capacity(), usize::MAX);

        let cfg = raw.clamped();
        assert_eq!(cfg.dictionary_size, MAX_DICTIONARY_SIZE);
        assert_eq!(cfg.ring_capacity(), MAX_DICTIONARY_SIZE + 512);
    }

    #[test]
    fn config_json_roundtrip() {
        let cfg = WindowConfig::new(16 * 1024, 1024);
        let json = serde_json::to_string(&cfg).unwrap();
        let back: WindowConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cfg);
    }
}
