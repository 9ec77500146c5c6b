//! Capability traits implemented by the crypad primitives

use alloc::vec::Vec;
use zeroize::Zeroizing;

use crate::error::Result;
use crate::types::Sealed;

/// Authenticated encryption with associated data
pub trait AuthenticatedCipher {
    /// Human-readable algorithm name, e.g. `"AES-OCB"`
    fn algorithm(&self) -> &'static str;

    /// Tag length in bytes produced by [`seal`](Self::seal)
    fn tag_len(&self) -> usize;

    /// Encrypt `plaintext` and authenticate it together with `associated_data`
    fn seal(&self, nonce: &[u8], plaintext: &[u8], associated_data: &[u8]) -> Result<Sealed>;

    /// Verify and decrypt
    ///
    /// Implementations must verify the whole tag before returning any plaintext
    /// and must report [`crate::Error::AuthenticationFailed`] on mismatch.
    fn open(
        &self,
        nonce: &[u8],
        ciphertext: &[u8],
        associated_data: &[u8],
        tag: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>>;
}

/// Message authentication without encryption
pub trait MessageAuthenticator {
    /// Compute a tag over `data`
    fn sign(&self, data: &[u8]) -> Result<Vec<u8>>;

    /// Check `tag` against `data` with a full-length constant-time comparison
    fn verify(&self, data: &[u8], tag: &[u8]) -> Result<bool>;
}

/// Password-based key derivation
pub trait KeyDerivationFunction {
    /// Derive a key from `password` and `salt`
    fn derive_key(&self, password: &[u8], salt: &[u8]) -> Result<Zeroizing<Vec<u8>>>;
}
