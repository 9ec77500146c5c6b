//! AES key types

use core::fmt;

use crypad_algorithms::block::KeySize;
use crypad_algorithms::kdf::KdfScheme;
use crypad_common::SecretVec;
use crypad_params::utils::kdf::KDF_SALT_SIZE;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroize;

use crate::error::{Error, Result};

/// An AES-128, AES-192 or AES-256 key
#[derive(Clone, Zeroize)]
pub struct AesKey {
    key: SecretVec,
    #[zeroize(skip)]
    size: KeySize,
}

impl AesKey {
    /// Generates a random key of the given size
    pub fn generate<R: RngCore + CryptoRng>(rng: &mut R, size: KeySize) -> Self {
        let mut bytes = alloc::vec![0u8; size.key_len()];
        rng.fill_bytes(&mut bytes);
        Self {
            key: SecretVec::new(bytes),
            size,
        }
    }

    /// Wraps existing key bytes; the length must be 16, 24 or 32
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let size = KeySize::from_key_len(bytes.len()).ok_or(Error::InvalidParameter {
            context: "AES key",
            reason: "key must be 16, 24 or 32 bytes",
        })?;
        Ok(Self {
            key: SecretVec::from_slice(bytes),
            size,
        })
    }

    /// Key size
    pub fn size(&self) -> KeySize {
        self.size
    }

    /// Raw key bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.key.as_slice()
    }
}

impl fmt::Debug for AesKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AesKey({}, [REDACTED])", self.size().name())
    }
}

/// Draws an 8-byte password salt from `rng`
pub fn generate_salt<R: RngCore + CryptoRng>(rng: &mut R) -> [u8; KDF_SALT_SIZE] {
    let mut salt = [0u8; KDF_SALT_SIZE];
    rng.fill_bytes(&mut salt);
    salt
}

/// Stretches `password` into an AES-128 key under `scheme`
pub fn derive_key(password: &str, salt: &[u8], scheme: KdfScheme) -> Result<AesKey> {
    let key = scheme.derive(password.as_bytes(), salt)?;
    AesKey::from_slice(key.as_slice())
}
