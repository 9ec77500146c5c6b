//! AES authenticated encryption with a mode fixed at construction
//!
//! [`AesAead`] owns one expanded AES key and one of the two modes. Callers
//! pick the mode through [`AeadConfig`]; everything after that goes through
//! the same surface: packages for encryption, and CMAC or PMAC for
//! MAC-only use.
//!
//! # Examples
//!
//! ```
//! use crypad_symmetric::{Aead, AeadConfig, AeadMode, AesAead, AesKey};
//!
//! let key = AesKey::from_slice(&[7u8; 16])?;
//! let cipher = AesAead::new(&key, AeadConfig::new(AeadMode::Ccm))?;
//!
//! let package = cipher.encrypt(&[1u8; 13], b"Secret message", b"header")?;
//! let wire = package.to_wire()?;
//!
//! let parsed = crypad_symmetric::CiphertextPackage::from_wire(&wire, &package.tag)?;
//! let plaintext = cipher.decrypt(&parsed, b"header")?;
//! assert_eq!(&plaintext[..], b"Secret message");
//! # Ok::<(), crypad_symmetric::Error>(())
//! ```

pub mod config;
pub mod package;

pub use config::{AeadConfig, AeadMode};
pub use package::CiphertextPackage;

use alloc::vec::Vec;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crypad_algorithms::aead::{Ccm, Ocb};
use crypad_algorithms::block::Aes;
use crypad_algorithms::mac::Pmac;
use crypad_api::{ErrorKind, MessageAuthenticator};

use crate::aes::AesKey;
use crate::cipher::{Aead, SymmetricCipher};
use crate::error::Result;

/// AES in CCM or OCB mode
#[derive(Clone, Debug)]
pub enum AesAead {
    /// Counter mode with CBC-MAC
    Ccm(Ccm<Aes>),
    /// Offset codebook mode
    Ocb(Ocb<Aes>),
}

impl AesAead {
    /// Expand `key` and build the configured mode
    pub fn new(key: &AesKey, config: AeadConfig) -> Result<Self> {
        let aes = Aes::new(key.as_bytes())?;
        Ok(match config.mode {
            AeadMode::Ccm => AesAead::Ccm(Ccm::with_tag_len(aes, config.tag_len)?),
            AeadMode::Ocb => AesAead::Ocb(Ocb::with_tag_len(aes, config.tag_len)?),
        })
    }

    /// Mode in use
    pub fn mode(&self) -> AeadMode {
        match self {
            AesAead::Ccm(_) => AeadMode::Ccm,
            AesAead::Ocb(_) => AeadMode::Ocb,
        }
    }

    /// Tag length in bytes
    pub fn tag_len(&self) -> usize {
        use crypad_api::AuthenticatedCipher;
        match self {
            AesAead::Ccm(ccm) => ccm.tag_len(),
            AesAead::Ocb(ocb) => ocb.tag_len(),
        }
    }

    /// MAC `data` without encrypting it
    ///
    /// CMAC truncated to the tag length in CCM mode, full 16-byte PMAC in
    /// OCB mode.
    pub fn sign(&self, data: &[u8]) -> Result<Vec<u8>> {
        match self {
            AesAead::Ccm(ccm) => ccm.cmac()?.sign(data),
            AesAead::Ocb(ocb) => Pmac::new(ocb.cipher()).sign(data),
        }
    }

    /// Check a tag from [`sign`](Self::sign) in constant time
    ///
    /// A tag of the wrong length is simply `false`.
    pub fn verify(&self, data: &[u8], tag: &[u8]) -> Result<bool> {
        match self {
            AesAead::Ccm(ccm) => ccm.cmac()?.verify(data, tag),
            AesAead::Ocb(ocb) => Pmac::new(ocb.cipher()).verify(data, tag),
        }
    }

    fn log_failure<T>(&self, result: Result<T>) -> Result<T> {
        if let Err(err) = &result {
            if err.kind() == ErrorKind::AuthenticationFailure {
                log::debug!("{} authentication failed", self.name());
            }
        }
        result
    }
}

impl SymmetricCipher for AesAead {
    type Key = AesKey;

    /// OCB with 16-byte tags
    fn new(key: &Self::Key) -> Result<Self> {
        AesAead::new(key, AeadConfig::default())
    }

    fn name(&self) -> &'static str {
        self.mode().name()
    }
}

impl Aead for AesAead {
    fn encrypt(&self, nonce: &[u8], plaintext: &[u8], aad: &[u8]) -> Result<CiphertextPackage> {
        let (payload, tag) = match self {
            AesAead::Ccm(ccm) => ccm.encrypt(nonce, plaintext, aad)?,
            AesAead::Ocb(ocb) => ocb.encrypt(nonce, plaintext, aad)?,
        };
        Ok(CiphertextPackage::new(nonce.to_vec(), payload, tag))
    }

    fn decrypt(&self, package: &CiphertextPackage, aad: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        let CiphertextPackage {
            nonce,
            payload,
            tag,
        } = package;
        let result = match self {
            AesAead::Ccm(ccm) => ccm.decrypt(nonce, payload, aad, tag),
            AesAead::Ocb(ocb) => ocb.decrypt(nonce, payload, aad, tag),
        };
        self.log_failure(result.map_err(Into::into))
    }

    fn generate_nonce<R: RngCore + CryptoRng>(&self, rng: &mut R) -> Vec<u8> {
        let mut nonce = alloc::vec![0u8; self.mode().nonce_len()];
        rng.fill_bytes(&mut nonce);
        nonce
    }
}
