//! PMAC, the parallelisable MAC that authenticates OCB associated data
//!
//! Offsets advance by doubling in GF(2^128). The starting offset is
//! `3 * 3 * E_K(0)`; a complete final block is folded in unpadded with one
//! more factor of three, a partial one is padded with `0x80 00..` and gets
//! two.

use alloc::vec::Vec;

use crate::block::{gf128, BlockCipher};
use crypad_api::MessageAuthenticator;
use crypad_internal::constant_time::{ct_eq, xor_block, xor_in_place};
use crypad_params::utils::symmetric::AES_BLOCK_SIZE;

/// PMAC of `header` under `cipher`
pub fn compute<B: BlockCipher>(cipher: &B, header: &[u8]) -> [u8; AES_BLOCK_SIZE] {
    let mut offset = cipher.encrypt_array(&[0u8; AES_BLOCK_SIZE]);
    offset = gf128::triple(&offset);
    offset = gf128::triple(&offset);

    let mut checksum = [0u8; AES_BLOCK_SIZE];

    // every block except the last, which may be partial
    let leading = header.len().saturating_sub(1) / AES_BLOCK_SIZE;
    for chunk in header.chunks_exact(AES_BLOCK_SIZE).take(leading) {
        offset = gf128::double(&offset);
        let mut block = offset;
        xor_in_place(&mut block, chunk);
        let enc = cipher.encrypt_array(&block);
        checksum = xor_block(&checksum, &enc);
    }

    offset = gf128::double(&offset);
    let tail = &header[leading * AES_BLOCK_SIZE..];
    if tail.len() == AES_BLOCK_SIZE || header.is_empty() {
        xor_in_place(&mut checksum, tail);
        offset = gf128::triple(&offset);
    } else {
        let mut padded = [0u8; AES_BLOCK_SIZE];
        padded[..tail.len()].copy_from_slice(tail);
        padded[tail.len()] = 0x80;
        checksum = xor_block(&checksum, &padded);
        offset = gf128::triple(&offset);
        offset = gf128::triple(&offset);
    }

    cipher.encrypt_array(&xor_block(&offset, &checksum))
}

/// PMAC keyed by a block cipher, producing 16-byte tags
#[derive(Clone)]
pub struct Pmac<B: BlockCipher> {
    cipher: B,
}

impl<B: BlockCipher> Pmac<B> {
    /// Wrap `cipher`
    pub fn new(cipher: B) -> Self {
        Self { cipher }
    }

    /// 16-byte tag over `data`
    pub fn compute(&self, data: &[u8]) -> [u8; AES_BLOCK_SIZE] {
        compute(&self.cipher, data)
    }
}

impl<B: BlockCipher> MessageAuthenticator for Pmac<B> {
    fn sign(&self, data: &[u8]) -> crypad_api::Result<Vec<u8>> {
        Ok(self.compute(data).to_vec())
    }

    fn verify(&self, data: &[u8], tag: &[u8]) -> crypad_api::Result<bool> {
        Ok(ct_eq(self.compute(data), tag))
    }
}

impl<B: BlockCipher> core::fmt::Debug for Pmac<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pmac")
            .field("cipher", &self.cipher.name())
            .finish()
    }
}
