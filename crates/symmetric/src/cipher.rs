//! Symmetric cipher traits for crypad-symmetric
//!
//! The high-level ciphers in this crate are built from a key and then used
//! through [`Aead`], which works on nonce-carrying [`CiphertextPackage`]s.

use alloc::vec::Vec;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crate::aead::CiphertextPackage;
use crate::error::Result;

/// Common trait for the symmetric ciphers
pub trait SymmetricCipher {
    /// The key type used by this cipher
    type Key: ?Sized;

    /// Creates a new cipher instance with the given key
    fn new(key: &Self::Key) -> Result<Self>
    where
        Self: Sized;

    /// Returns the name of this cipher
    fn name(&self) -> &'static str;
}

/// Authenticated encryption with associated data
pub trait Aead: SymmetricCipher {
    /// Encrypts `plaintext` under `nonce`, binding `aad`
    fn encrypt(&self, nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<CiphertextPackage>;

    /// Verifies and decrypts a package
    ///
    /// Returns an authentication error, never partial plaintext, on mismatch.
    fn decrypt(&self, package: &CiphertextPackage, aad: &[u8]) -> Result<Zeroizing<Vec<u8>>>;

    /// Draws a fresh nonce of the right length from `rng`
    fn generate_nonce<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Vec<u8>;

    /// Encrypts under a freshly drawn nonce
    fn encrypt_with_random_nonce<R: RngCore + CryptoRng>(
        &self,
        rng: &mut R,
        plaintext: &[u8],
        aad: &[u8],
    ) -> Result<CiphertextPackage> {
        let nonce = self.generate_nonce(rng);
        self.encrypt(&nonce, plaintext, aad)
    }
}
