//! OCB authenticated encryption (Rogaway et al., first version)
//!
//! One block-cipher call per block, with offsets that advance by XORing
//! `L[ntz(i)]`, the precomputed doublings of `L = E_K(0^128)`. Associated
//! data is authenticated with [`pmac`](crate::mac::pmac) and folded into
//! the tag when non-empty.
//!
//! ## Compatibility
//!
//! `L_neg` (`L * x^-1`) is computed exactly as existing ciphertexts were
//! produced: the carry from the low bit of `L[0]` into the top bit of
//! `L[1]` is dropped. Every other bit follows the usual halving.
//!
//! ## Constant-Time Guarantees
//!
//! * The tag is compared over its full length with a constant-time mask.
//! * On mismatch the decrypted buffer is wiped before it is dropped.

use alloc::vec::Vec;
use zeroize::Zeroizing;

use crate::block::{gf128, BlockCipher};
use crate::error::{validate, Error, Result};
use crate::mac::pmac;
use crypad_api::{AuthenticatedCipher, Sealed};
use crypad_common::SecretBuffer;
use crypad_internal::constant_time::{ct_eq_choice, xor_block, xor_in_place};
use crypad_params::utils::symmetric::{
    AES_BLOCK_SIZE, DEFAULT_TAG_SIZE, OCB_MAX_BLOCKS, OCB_MAX_NONCE_SIZE, OCB_MU,
};

const ALGORITHM: &str = "AES-OCB";

/// OCB mode over a 128-bit block cipher
#[derive(Clone)]
pub struct Ocb<B: BlockCipher> {
    cipher: B,
    l: [SecretBuffer<AES_BLOCK_SIZE>; OCB_MU + 1],
    l_neg: SecretBuffer<AES_BLOCK_SIZE>,
    tag_len: usize,
}

/// Trailing zero count of a non-zero block index
#[inline]
fn ntz(i: usize) -> usize {
    i.trailing_zeros() as usize
}

impl<B: BlockCipher> Ocb<B> {
    /// OCB with full 16-byte tags
    pub fn new(cipher: B) -> Self {
        let l0 = cipher.encrypt_array(&[0u8; AES_BLOCK_SIZE]);

        let mut l = [l0; OCB_MU + 1];
        for i in 1..=OCB_MU {
            l[i] = gf128::double(&l[i - 1]);
        }

        Self {
            l_neg: SecretBuffer::new(Self::halve(&l0)),
            l: l.map(SecretBuffer::new),
            cipher,
            tag_len: DEFAULT_TAG_SIZE,
        }
    }

    /// OCB with tags truncated to `tag_len` bytes (4, 8, 12 or 16)
    pub fn with_tag_len(cipher: B, tag_len: usize) -> Result<Self> {
        validate::tag_length("OCB tag length", tag_len, 4)?;
        let mut ocb = Self::new(cipher);
        ocb.tag_len = tag_len;
        Ok(ocb)
    }

    /// `L * x^-1` with the historical dropped carry between bytes 0 and 1
    fn halve(l0: &[u8; AES_BLOCK_SIZE]) -> [u8; AES_BLOCK_SIZE] {
        let mut out = [0u8; AES_BLOCK_SIZE];
        out[0] = l0[0] >> 1;
        out[1] = l0[1] >> 1;
        for i in 2..AES_BLOCK_SIZE {
            out[i] = (l0[i - 1] << 7) | (l0[i] >> 1);
        }
        if l0[AES_BLOCK_SIZE - 1] & 1 == 1 {
            out[0] ^= 0x80;
            out[AES_BLOCK_SIZE - 1] ^= 0x43;
        }
        out
    }

    /// The underlying cipher
    pub fn cipher(&self) -> &B {
        &self.cipher
    }

    fn l(&self, i: usize) -> [u8; AES_BLOCK_SIZE] {
        let mut out = [0u8; AES_BLOCK_SIZE];
        out.copy_from_slice(self.l[i].as_slice());
        out
    }

    fn initial_offset(&self, nonce: &[u8]) -> Result<[u8; AES_BLOCK_SIZE]> {
        validate::max_length("OCB nonce", nonce.len(), OCB_MAX_NONCE_SIZE)?;
        let mut block = self.l(0);
        xor_in_place(&mut block, nonce);
        Ok(self.cipher.encrypt_array(&block))
    }

    fn block_count(len: usize) -> Result<usize> {
        let m = core::cmp::max(1, (len + AES_BLOCK_SIZE - 1) / AES_BLOCK_SIZE);
        validate::max_length("OCB message blocks", m, OCB_MAX_BLOCKS)?;
        Ok(m)
    }

    /// Keystream block for the final (possibly partial) block
    fn final_pad(&self, offset: &[u8; AES_BLOCK_SIZE], tail_len: usize) -> [u8; AES_BLOCK_SIZE] {
        let mut x = *offset;
        xor_in_place(&mut x, self.l_neg.as_slice());
        x[AES_BLOCK_SIZE - 1] ^= (tail_len * 8) as u8;
        self.cipher.encrypt_array(&x)
    }

    fn tag(
        &self,
        checksum: &[u8; AES_BLOCK_SIZE],
        offset: &[u8; AES_BLOCK_SIZE],
        header: &[u8],
    ) -> [u8; AES_BLOCK_SIZE] {
        let mut tag = self.cipher.encrypt_array(&xor_block(checksum, offset));
        if !header.is_empty() {
            tag = xor_block(&tag, &pmac::compute(&self.cipher, header));
        }
        tag
    }

    /* --------------------------------------------------------------------- */
    /*                               ENCRYPT                                 */
    /* --------------------------------------------------------------------- */

    /// Encrypt `plaintext`, authenticating `header` alongside it
    ///
    /// Returns the ciphertext (same length as the plaintext) and the tag.
    pub fn encrypt(
        &self,
        nonce: &[u8],
        plaintext: &[u8],
        header: &[u8],
    ) -> Result<(Vec<u8>, Vec<u8>)> {
        let m = Self::block_count(plaintext.len())?;
        let mut offset = self.initial_offset(nonce)?;
        let mut checksum = [0u8; AES_BLOCK_SIZE];
        let mut ciphertext = Vec::with_capacity(plaintext.len());

        for (i, chunk) in plaintext.chunks_exact(AES_BLOCK_SIZE).take(m - 1).enumerate() {
            xor_in_place(&mut checksum, chunk);
            offset = xor_block(&offset, &self.l(ntz(i + 1)));
            let mut block = offset;
            xor_in_place(&mut block, chunk);
            let enc = self.cipher.encrypt_array(&block);
            ciphertext.extend_from_slice(&xor_block(&enc, &offset));
        }

        offset = xor_block(&offset, &self.l(ntz(m)));
        let tail = &plaintext[(m - 1) * AES_BLOCK_SIZE..];
        let pad = self.final_pad(&offset, tail.len());

        let start = ciphertext.len();
        ciphertext.extend(tail.iter().zip(&pad).map(|(p, y)| p ^ y));

        checksum = xor_block(&checksum, &pad);
        xor_in_place(&mut checksum, &ciphertext[start..]);

        let tag = self.tag(&checksum, &offset, header);
        Ok((ciphertext, tag[..self.tag_len].to_vec()))
    }

    /* --------------------------------------------------------------------- */
    /*                               DECRYPT                                 */
    /* --------------------------------------------------------------------- */

    /// Decrypt and verify; no plaintext is returned unless the tag matches
    pub fn decrypt(
        &self,
        nonce: &[u8],
        ciphertext: &[u8],
        header: &[u8],
        tag: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>> {
        let m = Self::block_count(ciphertext.len())?;
        let mut offset = self.initial_offset(nonce)?;
        let mut checksum = [0u8; AES_BLOCK_SIZE];
        let mut plaintext = Zeroizing::new(Vec::with_capacity(ciphertext.len()));

        for (i, chunk) in ciphertext.chunks_exact(AES_BLOCK_SIZE).take(m - 1).enumerate() {
            offset = xor_block(&offset, &self.l(ntz(i + 1)));
            let mut block = offset;
            xor_in_place(&mut block, chunk);
            let dec = xor_block(&self.cipher.decrypt_array(&block), &offset);
            checksum = xor_block(&checksum, &dec);
            plaintext.extend_from_slice(&dec);
        }

        offset = xor_block(&offset, &self.l(ntz(m)));
        let tail = &ciphertext[(m - 1) * AES_BLOCK_SIZE..];
        let pad = self.final_pad(&offset, tail.len());

        plaintext.extend(tail.iter().zip(&pad).map(|(c, y)| c ^ y));
        checksum = xor_block(&checksum, &pad);
        xor_in_place(&mut checksum, tail);

        let expected = self.tag(&checksum, &offset, header);
        let tag_ok = ct_eq_choice(&expected[..self.tag_len], tag);

        // mask = 0xFF when tag_ok == 1, else 0x00
        let mask = 0u8.wrapping_sub(tag_ok.unwrap_u8());
        for byte in plaintext.iter_mut() {
            *byte &= mask;
        }

        if bool::from(tag_ok) {
            Ok(plaintext)
        } else {
            Err(Error::Authentication {
                algorithm: ALGORITHM,
            })
        }
    }
}

impl<B: BlockCipher> AuthenticatedCipher for Ocb<B> {
    fn algorithm(&self) -> &'static str {
        ALGORITHM
    }

    fn tag_len(&self) -> usize {
        self.tag_len
    }

    fn seal(&self, nonce: &[u8], plaintext: &[u8], associated_data: &[u8]) -> crypad_api::Result<Sealed> {
        let (ciphertext, tag) = self.encrypt(nonce, plaintext, associated_data)?;
        Ok(Sealed { ciphertext, tag })
    }

    fn open(
        &self,
        nonce: &[u8],
        ciphertext: &[u8],
        associated_data: &[u8],
        tag: &[u8],
    ) -> crypad_api::Result<Zeroizing<Vec<u8>>> {
        Ok(self.decrypt(nonce, ciphertext, associated_data, tag)?)
    }
}

impl<B: BlockCipher> core::fmt::Debug for Ocb<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ocb")
            .field("cipher", &self.cipher.name())
            .field("tag_len", &self.tag_len)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
