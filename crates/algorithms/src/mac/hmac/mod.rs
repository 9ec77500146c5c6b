//! HMAC (RFC 2104 / FIPS 198-1)
//!
//! The keyed inner and outer hash states are computed once in [`Hmac::new`];
//! cloning a keyed instance is the cheap way to MAC many messages under one
//! key, which the password-stretching loops rely on.

use crate::hash::{HashFunction, Sha256};
use crypad_params::utils::hash::{HMAC_IPAD, HMAC_OPAD, SHA256_BLOCK_SIZE};
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

const MAX_BLOCK: usize = SHA256_BLOCK_SIZE;

/// HMAC over SHA-256
pub type HmacSha256 = Hmac<Sha256>;

/// Keyed HMAC state
#[derive(Clone)]
pub struct Hmac<H: HashFunction> {
    inner: H,
    outer: H,
}

impl<H: HashFunction> Hmac<H> {
    /// Create a new HMAC instance from `key`
    pub fn new(key: &[u8]) -> Self {
        let bs = H::BLOCK_SIZE;
        debug_assert!(bs <= MAX_BLOCK);

        // Hash the key unconditionally so the running time depends only on
        // the public key length, then select per byte with a mask.
        let hashed = H::digest(key);
        let long = (key.len() > bs) as u8;
        let mask = long.wrapping_neg();

        let mut k_prime = [0u8; MAX_BLOCK];
        for (i, k) in k_prime.iter_mut().enumerate().take(bs) {
            let raw = key.get(i).copied().unwrap_or(0);
            let hk = hashed.as_ref().get(i).copied().unwrap_or(0);
            *k = (hk & mask) | (raw & !mask);
        }

        let mut pad = [0u8; MAX_BLOCK];
        for (p, k) in pad.iter_mut().zip(&k_prime).take(bs) {
            *p = k ^ HMAC_IPAD;
        }
        let mut inner = H::new();
        inner.update(&pad[..bs]);

        for (p, k) in pad.iter_mut().zip(&k_prime).take(bs) {
            *p = k ^ HMAC_OPAD;
        }
        let mut outer = H::new();
        outer.update(&pad[..bs]);

        pad.zeroize();
        k_prime.zeroize();

        Self { inner, outer }
    }

    /// Feed additional `data` into the MAC
    pub fn update(&mut self, data: &[u8]) -> &mut Self {
        self.inner.update(data);
        self
    }

    /// Finalise and return the tag
    pub fn finalize(mut self) -> H::Output {
        let inner_hash = self.inner.finalize_output();
        self.outer.update(inner_hash.as_ref());
        self.outer.finalize_output()
    }

    /// One-shot MAC helper
    pub fn mac(key: &[u8], data: &[u8]) -> H::Output {
        let mut h = Self::new(key);
        h.update(data);
        h.finalize()
    }

    /// Constant-time verification of `tag` against `key` / `data`
    ///
    /// The comparison always runs over the full digest length; a tag of the
    /// wrong length is folded into the result rather than returned early.
    pub fn verify(key: &[u8], data: &[u8], tag: &[u8]) -> bool {
        let expected = Self::mac(key, data);
        let expected = expected.as_ref();

        let mut diff = 0u8;
        for (i, a) in expected.iter().enumerate() {
            diff |= a ^ tag.get(i).copied().unwrap_or(0);
        }
        diff |= ((tag.len() ^ H::OUTPUT_SIZE) != 0) as u8;

        diff.ct_eq(&0u8).into()
    }
}

impl<H: HashFunction> core::fmt::Debug for Hmac<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Hmac<{}>([REDACTED])", H::NAME)
    }
}
