//! Password-protected blobs
//!
//! ```text
//! [8-byte salt][16-byte tag slot][1-byte nonce length][nonce][payload]
//! ```
//!
//! The key is stretched from the password and salt. In OCB mode the tag
//! slot holds the tag and the payload is the bare ciphertext; this is the
//! layout existing stored blobs use. In CCM mode the slot holds the raw
//! CBC-MAC and the payload ends with the encrypted tag, which is what
//! opening checks together with the slot. Tags shorter than the slot are
//! zero-padded, and a blob whose padding is not zero does not open.

use alloc::vec::Vec;
use rand::{CryptoRng, RngCore};
use zeroize::Zeroizing;

use crypad_algorithms::kdf::KdfScheme;
use crypad_internal::constant_time::ct_eq;
use crypad_params::utils::kdf::KDF_SALT_SIZE;
use crypad_params::utils::symmetric::BLOB_TAG_SLOT_SIZE;

use crate::aead::{AeadConfig, AesAead, CiphertextPackage};
use crate::aes::{derive_key, generate_salt};
use crate::cipher::Aead;
use crate::error::{validate_format, validate_parameter, Error, Result, ResultExt};

/// Smallest well-formed blob: salt, tag slot and the nonce-length byte
pub const MIN_BLOB_SIZE: usize = KDF_SALT_SIZE + BLOB_TAG_SLOT_SIZE + 1;

const ZERO_SLOT: [u8; BLOB_TAG_SLOT_SIZE] = [0; BLOB_TAG_SLOT_SIZE];

/// Seals and opens password blobs
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PasswordBox {
    config: AeadConfig,
    kdf: KdfScheme,
}

impl PasswordBox {
    /// A codec with the given mode and stretch
    pub fn new(config: AeadConfig, kdf: KdfScheme) -> Self {
        Self { config, kdf }
    }

    /// AEAD configuration
    pub fn config(&self) -> AeadConfig {
        self.config
    }

    /// Key derivation scheme
    pub fn kdf(&self) -> KdfScheme {
        self.kdf
    }

    /// Seal `plaintext` under `password`, drawing salt and nonce from `rng`
    pub fn seal<R: RngCore + CryptoRng>(
        &self,
        password: &str,
        plaintext: &[u8],
        adata: &[u8],
        rng: &mut R,
    ) -> Result<Vec<u8>> {
        let salt = generate_salt(rng);
        let aead = self.cipher(password, &salt)?;
        let package = aead.encrypt_with_random_nonce(rng, plaintext, adata)?;
        validate_parameter(
            package.tag.len() <= BLOB_TAG_SLOT_SIZE,
            "password blob tag",
            "tag does not fit the tag slot",
        )?;

        let wire = package.to_wire()?;
        let mut blob = Vec::with_capacity(KDF_SALT_SIZE + BLOB_TAG_SLOT_SIZE + wire.len());
        blob.extend_from_slice(&salt);
        blob.extend_from_slice(&package.tag);
        blob.resize(KDF_SALT_SIZE + BLOB_TAG_SLOT_SIZE, 0);
        blob.extend_from_slice(&wire);
        Ok(blob)
    }

    /// Open a blob sealed under `password`
    ///
    /// Structurally short blobs are rejected as malformed before the key is
    /// derived. A wrong password is an authentication failure.
    pub fn open(&self, password: &str, blob: &[u8], adata: &[u8]) -> Result<Zeroizing<Vec<u8>>> {
        validate_format("password blob", blob.len(), MIN_BLOB_SIZE)?;
        let (salt, rest) = blob.split_at(KDF_SALT_SIZE);
        let (slot, wire) = rest.split_at(BLOB_TAG_SLOT_SIZE);

        let tag_len = self.config.tag_len.min(BLOB_TAG_SLOT_SIZE);
        let (tag, padding) = slot.split_at(tag_len);
        let package = CiphertextPackage::from_wire(wire, tag)?;

        let aead = self.cipher(password, salt)?;
        let opened = aead.decrypt(&package, adata).with_context("password blob")?;
        if !ct_eq(padding, &ZERO_SLOT[..padding.len()]) {
            return Err(Error::AuthenticationFailed {
                context: "password blob",
            });
        }
        Ok(opened)
    }

    fn cipher(&self, password: &str, salt: &[u8]) -> Result<AesAead> {
        let key = derive_key(password, salt, self.kdf)?;
        AesAead::new(&key, self.config)
    }
}
