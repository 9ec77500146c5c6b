//! Nonce-prefixed ciphertext packages
//!
//! Wire form: `[1-byte nonce length][nonce][payload]`. The tag travels
//! separately. For CCM the payload already ends with the encrypted tag and
//! the detached tag is the raw CBC-MAC.

use alloc::vec::Vec;
use core::fmt;

use crate::error::{validate_format, validate_parameter, Result};

/// Nonce, payload and detached tag from one encryption
#[derive(Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CiphertextPackage {
    /// Nonce the payload was sealed under
    pub nonce: Vec<u8>,
    /// Encrypted payload
    pub payload: Vec<u8>,
    /// Detached tag
    pub tag: Vec<u8>,
}

impl CiphertextPackage {
    /// Assemble a package
    pub fn new(nonce: Vec<u8>, payload: Vec<u8>, tag: Vec<u8>) -> Self {
        Self {
            nonce,
            payload,
            tag,
        }
    }

    /// Encode as `[nonce length][nonce][payload]`
    pub fn to_wire(&self) -> Result<Vec<u8>> {
        validate_parameter(
            self.nonce.len() <= u8::MAX as usize,
            "ciphertext package nonce",
            "nonce length must fit in one byte",
        )?;
        let mut out = Vec::with_capacity(1 + self.nonce.len() + self.payload.len());
        out.push(self.nonce.len() as u8);
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.payload);
        Ok(out)
    }

    /// Parse the wire form and attach `tag`
    pub fn from_wire(wire: &[u8], tag: &[u8]) -> Result<Self> {
        validate_format("ciphertext package", wire.len(), 1)?;
        let nonce_len = wire[0] as usize;
        validate_format("ciphertext package", wire.len(), 1 + nonce_len)?;
        let (nonce, payload) = wire[1..].split_at(nonce_len);
        Ok(Self::new(nonce.to_vec(), payload.to_vec(), tag.to_vec()))
    }
}

impl fmt::Debug for CiphertextPackage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CiphertextPackage")
            .field("nonce_len", &self.nonce.len())
            .field("payload_len", &self.payload.len())
            .field("tag_len", &self.tag.len())
            .finish()
    }
}
