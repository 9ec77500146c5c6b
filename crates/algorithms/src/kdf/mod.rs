//! Password-based key derivation
//!
//! [`legacy`] is the stretch existing password blobs were sealed with and
//! stays the default. [`pbkdf2`] is standard RFC 8018 PBKDF2-HMAC-SHA256
//! for new data. [`KdfScheme`] picks between them.

pub mod legacy;
pub mod pbkdf2;

pub use legacy::{derive_key, LegacyKdf};
pub use pbkdf2::{Pbkdf2, Pbkdf2Params};

use alloc::vec::Vec;
use zeroize::Zeroizing;

use crate::error::{validate, Result};
use crypad_api::KeyDerivationFunction;
use crypad_common::SecretBuffer;
use crypad_params::utils::kdf::{KDF_SALT_SIZE, LEGACY_KEY_SIZE};

/// Which stretch turns a password into a blob key
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KdfScheme {
    /// The legacy 1000-round construction
    #[default]
    Legacy,
    /// PBKDF2-HMAC-SHA256
    Pbkdf2 {
        /// Iteration count
        iterations: u32,
    },
}

impl KdfScheme {
    /// Derive a 128-bit key from `password` and an 8-byte `salt`
    pub fn derive(&self, password: &[u8], salt: &[u8]) -> Result<SecretBuffer<LEGACY_KEY_SIZE>> {
        match *self {
            KdfScheme::Legacy => legacy::derive_key(password, salt),
            KdfScheme::Pbkdf2 { iterations } => {
                validate::length("PBKDF2 salt", salt.len(), KDF_SALT_SIZE)?;
                let key = Pbkdf2::<crate::hash::Sha256>::derive(
                    password,
                    salt,
                    iterations,
                    LEGACY_KEY_SIZE,
                )?;
                let mut out = SecretBuffer::zeroed();
                out.as_mut_slice().copy_from_slice(&key);
                Ok(out)
            }
        }
    }
}

impl KeyDerivationFunction for KdfScheme {
    fn derive_key(&self, password: &[u8], salt: &[u8]) -> crypad_api::Result<Zeroizing<Vec<u8>>> {
        let key = self.derive(password, salt)?;
        Ok(Zeroizing::new(key.as_slice().to_vec()))
    }
}
