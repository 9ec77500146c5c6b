//! CMAC (NIST SP 800-38B, RFC 4493)
//!
//! The tag may be truncated to any multiple of four bytes from 4 to 16; CCM
//! uses the same truncation for its own tags.

use alloc::vec::Vec;

use crate::block::{gf128, BlockCipher};
use crate::error::{validate, Result};
use crypad_api::MessageAuthenticator;
use crypad_common::SecretBuffer;
use crypad_internal::constant_time::{ct_eq, xor_in_place};
use crypad_params::utils::symmetric::{AES_BLOCK_SIZE, CCM_MIN_TAG_SIZE};

/// CMAC over a block cipher
#[derive(Clone)]
pub struct Cmac<B: BlockCipher> {
    cipher: B,
    k1: SecretBuffer<AES_BLOCK_SIZE>,
    k2: SecretBuffer<AES_BLOCK_SIZE>,
    tag_len: usize,
}

impl<B: BlockCipher> Cmac<B> {
    /// Derive the two subkeys from `cipher`; `tag_len` is validated here
    pub fn new(cipher: B, tag_len: usize) -> Result<Self> {
        validate::tag_length("CMAC tag length", tag_len, CCM_MIN_TAG_SIZE)?;
        let l = cipher.encrypt_array(&[0u8; AES_BLOCK_SIZE]);
        let k1 = gf128::double(&l);
        let k2 = gf128::double(&k1);
        Ok(Self {
            cipher,
            k1: SecretBuffer::new(k1),
            k2: SecretBuffer::new(k2),
            tag_len,
        })
    }

    /// Configured tag length in bytes
    pub fn tag_len(&self) -> usize {
        self.tag_len
    }

    /// Full 16-byte CMAC of `data`
    pub fn compute(&self, data: &[u8]) -> [u8; AES_BLOCK_SIZE] {
        let complete = !data.is_empty() && data.len() % AES_BLOCK_SIZE == 0;
        let n = if data.is_empty() {
            1
        } else {
            (data.len() + AES_BLOCK_SIZE - 1) / AES_BLOCK_SIZE
        };

        let mut x = [0u8; AES_BLOCK_SIZE];
        for chunk in data.chunks(AES_BLOCK_SIZE).take(n - 1) {
            xor_in_place(&mut x, chunk);
            x = self.cipher.encrypt_array(&x);
        }

        let tail = &data[(n - 1) * AES_BLOCK_SIZE..];
        let mut last = [0u8; AES_BLOCK_SIZE];
        last[..tail.len()].copy_from_slice(tail);
        if complete {
            xor_in_place(&mut last, self.k1.as_slice());
        } else {
            last[tail.len()] = 0x80;
            xor_in_place(&mut last, self.k2.as_slice());
        }
        xor_in_place(&mut x, &last);
        self.cipher.encrypt_array(&x)
    }

    /// CMAC truncated to the configured tag length
    pub fn tag(&self, data: &[u8]) -> Vec<u8> {
        self.compute(data)[..self.tag_len].to_vec()
    }
}

impl<B: BlockCipher> MessageAuthenticator for Cmac<B> {
    fn sign(&self, data: &[u8]) -> crypad_api::Result<Vec<u8>> {
        Ok(self.tag(data))
    }

    fn verify(&self, data: &[u8], tag: &[u8]) -> crypad_api::Result<bool> {
        Ok(ct_eq(self.tag(data), tag))
    }
}

impl<B: BlockCipher> core::fmt::Debug for Cmac<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Cmac")
            .field("cipher", &self.cipher.name())
            .field("tag_len", &self.tag_len)
            .finish_non_exhaustive()
    }
}
