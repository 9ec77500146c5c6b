//! Constants for SHA-256 and HMAC

/// Output size of SHA-256 in bytes
pub const SHA256_OUTPUT_SIZE: usize = 32;

/// Output size of SHA-256 in 32-bit words
pub const SHA256_OUTPUT_WORDS: usize = 8;

/// Internal block size of SHA-256 in bytes
pub const SHA256_BLOCK_SIZE: usize = 64;

/// Internal block size of SHA-256 in 32-bit words
pub const SHA256_BLOCK_WORDS: usize = 16;

/// Number of compression rounds
pub const SHA256_ROUNDS: usize = 64;

/// HMAC inner pad byte
pub const HMAC_IPAD: u8 = 0x36;

/// HMAC outer pad byte
pub const HMAC_OPAD: u8 = 0x5c;
