//! Constants for the entropy-pooling generator

/// Estimated entropy (bits) required at each paranoia level
pub const PARANOIA_LEVELS: [u32; 11] = [0, 48, 64, 96, 128, 192, 256, 384, 512, 768, 1024];

/// Paranoia level used when the caller does not pick one
pub const DEFAULT_PARANOIA: usize = 6;

/// Words produced before the generator re-keys itself mid-request
pub const MAX_WORDS_PER_BURST: usize = 65_536;

/// Minimum time between automatic reseeds
pub const MILLISECONDS_PER_RESEED: u64 = 100;

/// Entropy pool 0 must exceed before an automatic reseed
pub const BITS_PER_RESEED: u32 = 80;

/// Source label used when the caller gives none
pub const DEFAULT_SOURCE: &str = "user";

/// Sample type tag for a single word
pub const SAMPLE_TYPE_WORD: u32 = 1;

/// Sample type tag for a word array
pub const SAMPLE_TYPE_WORDS: u32 = 2;

/// Sample type tag for text
pub const SAMPLE_TYPE_TEXT: u32 = 3;

/// Key length of the output cipher in words (AES-256)
pub const GENERATOR_KEY_WORDS: usize = 8;

/// Estimated entropy credited to one OS random sample
pub const OS_COLLECTOR_BITS: u32 = 256;

/// Estimated entropy credited to one timing sample
pub const TIMING_COLLECTOR_BITS: u32 = 2;
