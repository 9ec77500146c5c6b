//! Constants for the block cipher and its authenticated modes

/// AES-128 key size in bytes
pub const AES128_KEY_SIZE: usize = 16;

/// AES-192 key size in bytes
pub const AES192_KEY_SIZE: usize = 24;

/// AES-256 key size in bytes
pub const AES256_KEY_SIZE: usize = 32;

/// AES block size in bytes
pub const AES_BLOCK_SIZE: usize = 16;

/// AES block size in 32-bit words
pub const AES_BLOCK_WORDS: usize = 4;

/// Largest round count (AES-256); sizes the fixed schedule storage
pub const AES_MAX_ROUNDS: usize = 14;

/// Round constants for the key expansion, already placed in the high byte
pub const AES_RCON: [u32; 10] = [
    0x0100_0000, 0x0200_0000, 0x0400_0000, 0x0800_0000, 0x1000_0000,
    0x2000_0000, 0x4000_0000, 0x8000_0000, 0x1b00_0000, 0x3600_0000,
];

/// Reduction constant for doubling in GF(2^128)
pub const GF128_REDUCTION: u8 = 0x87;

/// Smallest CCM nonce in bytes (q = 8)
pub const CCM_MIN_NONCE_SIZE: usize = 7;

/// Largest CCM nonce in bytes (q = 2)
pub const CCM_MAX_NONCE_SIZE: usize = 13;

/// Smallest CCM/CMAC tag in bytes
pub const CCM_MIN_TAG_SIZE: usize = 4;

/// Largest tag for every mode in bytes
pub const MAX_TAG_SIZE: usize = 16;

/// Default tag length in bytes
pub const DEFAULT_TAG_SIZE: usize = 16;

/// Largest OCB nonce in bytes
pub const OCB_MAX_NONCE_SIZE: usize = 16;

/// Number of precomputed OCB doubling entries beyond L[0]
pub const OCB_MU: usize = 15;

/// Largest OCB message in blocks supported by the doubling table
pub const OCB_MAX_BLOCKS: usize = 1 << OCB_MU;

/// Nonce length used when sealing password blobs in OCB mode
pub const OCB_BLOB_NONCE_SIZE: usize = 16;

/// Nonce length used when sealing password blobs in CCM mode
pub const CCM_BLOB_NONCE_SIZE: usize = 13;

/// Width of the tag slot in a password blob header
pub const BLOB_TAG_SLOT_SIZE: usize = 16;
