//! Hash functions
//!
//! SHA-256 is the only hash; [`HashFunction`] lets HMAC and PBKDF2 stay
//! generic over it.

pub mod sha2;

pub use sha2::Sha256;

/// A streaming hash function with a fixed-size output
pub trait HashFunction: Clone {
    /// Digest type, e.g. `[u8; 32]`
    type Output: AsRef<[u8]> + Copy;

    /// Digest length in bytes
    const OUTPUT_SIZE: usize;
    /// Internal block length in bytes, used by HMAC key padding
    const BLOCK_SIZE: usize;
    /// Algorithm name
    const NAME: &'static str;

    /// Fresh hash state
    fn new() -> Self;

    /// Absorb bytes
    fn update(&mut self, data: &[u8]) -> &mut Self;

    /// Produce the digest and reset the state for reuse
    fn finalize_output(&mut self) -> Self::Output;

    /// One-shot hash of `data`
    fn digest(data: &[u8]) -> Self::Output {
        let mut h = Self::new();
        h.update(data);
        h.finalize_output()
    }
}
