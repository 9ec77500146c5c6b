//! CCM authenticated encryption (NIST SP 800-38C)
//!
//! CBC-MAC over the formatted input, then counter-mode encryption of the
//! payload and of the tag. Nonces are 7 to 13 bytes; the length field takes
//! the remaining `q = 15 - n` bytes of the first block. Tags are 4, 8, 12 or
//! 16 bytes.
//!
//! Encryption returns `ciphertext || encrypted tag` together with the raw
//! CBC-MAC value, which the password blob stores in its tag slot. Decryption
//! takes both back and accepts only when each of them verifies.
//!
//! Formatting is the standard one: the Adata flag in `B0` is set only for
//! non-empty associated data, and empty associated data contributes no
//! length-prefix block. Blobs written with the flag forced on for empty
//! associated data do not open here.

use alloc::vec::Vec;
use zeroize::Zeroizing;

use crate::block::BlockCipher;
use crate::error::{validate, Error, Result};
use crate::mac::Cmac;
use crypad_api::{AuthenticatedCipher, Sealed};
use crypad_internal::constant_time::{ct_eq_choice, xor_in_place};
use crypad_params::utils::symmetric::{
    AES_BLOCK_SIZE, CCM_MAX_NONCE_SIZE, CCM_MIN_NONCE_SIZE, CCM_MIN_TAG_SIZE, DEFAULT_TAG_SIZE,
};

const ALGORITHM: &str = "AES-CCM";

/// CCM mode over a 128-bit block cipher
#[derive(Clone)]
pub struct Ccm<B: BlockCipher> {
    cipher: B,
    tag_len: usize,
}

impl<B: BlockCipher> Ccm<B> {
    /// CCM with 16-byte tags
    pub fn new(cipher: B) -> Self {
        Self {
            cipher,
            tag_len: DEFAULT_TAG_SIZE,
        }
    }

    /// CCM with `tag_len`-byte tags
    pub fn with_tag_len(cipher: B, tag_len: usize) -> Result<Self> {
        validate::tag_length("CCM tag length", tag_len, CCM_MIN_TAG_SIZE)?;
        Ok(Self { cipher, tag_len })
    }

    /// The underlying cipher
    pub fn cipher(&self) -> &B {
        &self.cipher
    }

    /// CMAC under the same key and tag length, for MAC-only use
    pub fn cmac(&self) -> Result<Cmac<&B>> {
        Cmac::new(&self.cipher, self.tag_len)
    }

    /// Length-field size `q` for `nonce`
    fn length_field(nonce: &[u8]) -> Result<usize> {
        if nonce.len() < CCM_MIN_NONCE_SIZE || nonce.len() > CCM_MAX_NONCE_SIZE {
            return Err(Error::param("CCM nonce", "nonce must be 7 to 13 bytes"));
        }
        Ok(AES_BLOCK_SIZE - 1 - nonce.len())
    }

    fn check_payload_len(q: usize, len: usize) -> Result<()> {
        if q < 8 && (len as u64) >> (8 * q) != 0 {
            return Err(Error::param(
                "CCM payload",
                "payload length does not fit the nonce's length field",
            ));
        }
        Ok(())
    }

    /// `flags || nonce || counter`
    fn counter_block(nonce: &[u8], q: usize, index: u64) -> [u8; AES_BLOCK_SIZE] {
        let mut block = [0u8; AES_BLOCK_SIZE];
        block[0] = (q - 1) as u8;
        block[1..1 + nonce.len()].copy_from_slice(nonce);
        let ctr = index.to_be_bytes();
        block[AES_BLOCK_SIZE - q..].copy_from_slice(&ctr[8 - q..]);
        block
    }

    /// CBC-MAC of the formatted `B0 || encoded adata || payload`
    fn cbc_mac(
        &self,
        nonce: &[u8],
        q: usize,
        adata: &[u8],
        payload: &[u8],
    ) -> [u8; AES_BLOCK_SIZE] {
        let mut b0 = [0u8; AES_BLOCK_SIZE];
        let adata_flag = (!adata.is_empty() as u8) << 6;
        let tag_field = (((self.tag_len - 2) / 2) as u8) << 3;
        b0[0] = adata_flag | tag_field | (q - 1) as u8;
        b0[1..1 + nonce.len()].copy_from_slice(nonce);
        let len = (payload.len() as u64).to_be_bytes();
        b0[AES_BLOCK_SIZE - q..].copy_from_slice(&len[8 - q..]);

        let mut y = self.cipher.encrypt_array(&b0);

        if !adata.is_empty() {
            let a = adata.len() as u64;
            let mut encoded = Vec::with_capacity(adata.len() + 10);
            if a < 0xff00 {
                encoded.extend_from_slice(&(a as u16).to_be_bytes());
            } else if a <= u32::MAX as u64 {
                encoded.extend_from_slice(&[0xff, 0xfe]);
                encoded.extend_from_slice(&(a as u32).to_be_bytes());
            } else {
                encoded.extend_from_slice(&[0xff, 0xff]);
                encoded.extend_from_slice(&a.to_be_bytes());
            }
            encoded.extend_from_slice(adata);
            y = self.absorb(y, &encoded);
        }

        self.absorb(y, payload)
    }

    /// Chain zero-padded blocks of `data` into the CBC-MAC state
    fn absorb(&self, mut y: [u8; AES_BLOCK_SIZE], data: &[u8]) -> [u8; AES_BLOCK_SIZE] {
        for chunk in data.chunks(AES_BLOCK_SIZE) {
            xor_in_place(&mut y, chunk);
            y = self.cipher.encrypt_array(&y);
        }
        y
    }

    /// XOR the counter keystream starting at block 1 into `data`
    fn apply_keystream(&self, nonce: &[u8], q: usize, data: &mut [u8]) {
        for (i, chunk) in data.chunks_mut(AES_BLOCK_SIZE).enumerate() {
            let s = self
                .cipher
                .encrypt_array(&Self::counter_block(nonce, q, i as u64 + 1));
            xor_in_place(chunk, &s);
        }
    }

    /* --------------------------------------------------------------------- */
    /*                               ENCRYPT                                 */
    /* --------------------------------------------------------------------- */

    /// Encrypt and authenticate
    ///
    /// Returns `ciphertext || encrypted tag` and the raw (unencrypted) MAC,
    /// both truncated to the tag length.
    pub fn encrypt(
        &self,
        nonce: &[u8],
        plaintext: &[u8],
        adata: &[u8],
    ) -> Result<(Vec<u8>, Vec<u8>)> {
        let q = Self::length_field(nonce)?;
        Self::check_payload_len(q, plaintext.len())?;

        let mac = self.cbc_mac(nonce, q, adata, plaintext);
        let s0 = self.cipher.encrypt_array(&Self::counter_block(nonce, q, 0));

        let mut out = Vec::with_capacity(plaintext.len() + self.tag_len);
        out.extend_from_slice(plaintext);
        self.apply_keystream(nonce, q, &mut out);
        out.extend(mac.iter().zip(&s0).take(self.tag_len).map(|(t, s)| t ^ s));

        Ok((out, mac[..self.tag_len].to_vec()))
    }

    /* --------------------------------------------------------------------- */
    /*                               DECRYPT                                 */
    /* --------------------------------------------------------------------- */

    /// Decrypt `ciphertext || encrypted tag` and verify both tags
    ///
    /// `raw_mac` is the unencrypted CBC-MAC returned by
    /// [`encrypt`](Self::encrypt). The embedded tag and the raw MAC are
    /// compared in constant time; plaintext is released only when both match.
    pub fn decrypt(
        &self,
        nonce: &[u8],
        ciphertext: &[u8],
        adata: &[u8],
        raw_mac: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>> {
        validate::truncated("CCM ciphertext", ciphertext.len(), self.tag_len)?;
        let q = Self::length_field(nonce)?;

        let (body, enc_tag) = ciphertext.split_at(ciphertext.len() - self.tag_len);
        Self::check_payload_len(q, body.len())?;

        let mut plaintext = Zeroizing::new(body.to_vec());
        self.apply_keystream(nonce, q, &mut plaintext);

        let mac = self.cbc_mac(nonce, q, adata, &plaintext);
        let s0 = self.cipher.encrypt_array(&Self::counter_block(nonce, q, 0));
        let mut expected = [0u8; AES_BLOCK_SIZE];
        for i in 0..self.tag_len {
            expected[i] = mac[i] ^ s0[i];
        }
        let tag_ok = ct_eq_choice(&expected[..self.tag_len], enc_tag)
            & ct_eq_choice(&mac[..self.tag_len], raw_mac);

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

impl<B: BlockCipher> AuthenticatedCipher for Ccm<B> {
    fn algorithm(&self) -> &'static str {
        ALGORITHM
    }

    fn tag_len(&self) -> usize {
        self.tag_len
    }

    /// `ciphertext` carries the encrypted tag; `tag` is the raw CBC-MAC
    fn seal(
        &self,
        nonce: &[u8],
        plaintext: &[u8],
        associated_data: &[u8],
    ) -> crypad_api::Result<Sealed> {
        let (ciphertext, tag) = self.encrypt(nonce, plaintext, associated_data)?;
        Ok(Sealed { ciphertext, tag })
    }

    /// `tag` is the raw CBC-MAC from [`seal`](Self::seal)
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

impl<B: BlockCipher> core::fmt::Debug for Ccm<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Ccm")
            .field("cipher", &self.cipher.name())
            .field("tag_len", &self.tag_len)
            .finish()
    }
}

#[cfg(test)]
mod tests;
