/// Max supported input size for a single block (0x7E000000 bytes).
pub const MAX_INPUT_SIZE: usize = 0x7E00_0000; // 2 113 929 216 bytes

/// Lower clamp for `WindowConfig::dictionary_size`.
pub const MIN_DICTIONARY_SIZE: usize = 4096;
/// Upper clamp for `WindowConfig::dictionary_size`.
pub const MAX_DICTIONARY_SIZE: usize = MAX_INPUT_SIZE;
/// Lower clamp for `WindowConfig::max_message_size`.
pub const MIN_MESSAGE_SIZE: usize = 256;
/// Upper clamp for `WindowConfig::max_message_size`.
pub const MAX_MESSAGE_SIZE: usize = MAX_INPUT_SIZE;

/// Defaults when a config is built with `WindowConfig::default()`.
pub const DEFAULT_DICTIONARY_SIZE: usize = 64 * 1024; // 64 KiB
pub const DEFAULT_MAX_MESSAGE_SIZE: usize = 4 * 1024; // 4 KiB

/// Furthest back-reference an LZ4 block can express (u16 offset).
pub const LZ4_MAX_DISTANCE: usize = 64 * 1024 - 1;
