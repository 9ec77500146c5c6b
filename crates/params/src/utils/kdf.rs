//! Constants for password-based key derivation

/// Salt length used by the password blob format
pub const KDF_SALT_SIZE: usize = 8;

/// Length of a key produced by the legacy stretch
pub const LEGACY_KEY_SIZE: usize = 16;

/// HMAC rounds performed by the legacy stretch
pub const LEGACY_ROUNDS: usize = 1000;

/// Block index appended to the salt in the first legacy round
pub const LEGACY_BLOCK_INDEX: [u8; 4] = [0, 0, 0, 1];

/// Default PBKDF2 iteration count when PBKDF2 is selected
pub const PBKDF2_DEFAULT_ITERATIONS: u32 = 100_000;
