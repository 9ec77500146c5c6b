//! Legacy password stretching
//!
//! The construction that existing password blobs were sealed with. It is
//! HMAC-SHA256 based but is not PBKDF2: only one output block is produced,
//! and rounds after the first feed a single byte of the running accumulator
//! back into the MAC instead of the previous round's output.
//!
//! ```text
//! U = HMAC(P, salt || 00 00 00 01)
//! for i in 1..1000:
//!     U ^= HMAC(P, [U[i - 1] or 0, 0, 0, 0])
//! key = U[16..32]
//! ```
//!
//! Passwords longer than the HMAC block are pre-hashed with every byte
//! widened to its own big-endian word. When the final partial block holds
//! 13 or more such words the padded block is compressed twice and the
//! length block is never reached. Stored blobs depend on that digest, so it
//! is reproduced here rather than going through [`Sha256`](crate::hash::Sha256).

use alloc::vec::Vec;
use zeroize::{Zeroize, Zeroizing};

use crate::error::{validate, Result};
use crate::hash::sha2::{compress, H256};
use crate::mac::HmacSha256;
use crypad_api::KeyDerivationFunction;
use crypad_common::SecretBuffer;
use crypad_params::utils::hash::{SHA256_BLOCK_SIZE, SHA256_BLOCK_WORDS, SHA256_OUTPUT_SIZE};
use crypad_params::utils::kdf::{KDF_SALT_SIZE, LEGACY_BLOCK_INDEX, LEGACY_KEY_SIZE, LEGACY_ROUNDS};

/// Derive a 128-bit key from `password` and an 8-byte `salt`
pub fn derive_key(password: &[u8], salt: &[u8]) -> Result<SecretBuffer<LEGACY_KEY_SIZE>> {
    validate::length("legacy KDF salt", salt.len(), KDF_SALT_SIZE)?;

    let hmac = keyed_hmac(password);

    let mut first = [0u8; KDF_SALT_SIZE + 4];
    first[..KDF_SALT_SIZE].copy_from_slice(salt);
    first[KDF_SALT_SIZE..].copy_from_slice(&LEGACY_BLOCK_INDEX);

    let mut mac = hmac.clone();
    mac.update(&first);
    let mut u = mac.finalize();

    for i in 1..LEGACY_ROUNDS {
        let fed = u.get(i - 1).copied().unwrap_or(0);
        let mut mac = hmac.clone();
        mac.update(&[fed, 0, 0, 0]);
        let mut t = mac.finalize();
        for (a, b) in u.iter_mut().zip(t.iter()) {
            *a ^= b;
        }
        t.zeroize();
    }

    let mut key = [0u8; LEGACY_KEY_SIZE];
    key.copy_from_slice(&u[SHA256_OUTPUT_SIZE - LEGACY_KEY_SIZE..]);
    u.zeroize();
    let out = SecretBuffer::new(key);
    key.zeroize();
    Ok(out)
}

fn keyed_hmac(password: &[u8]) -> HmacSha256 {
    if password.len() > SHA256_BLOCK_SIZE {
        let digest = Zeroizing::new(prehash_long_password(password));
        HmacSha256::new(&digest[..])
    } else {
        HmacSha256::new(password)
    }
}

/// SHA-256 over `password` with each byte as one word, as stored blobs expect
pub(crate) fn prehash_long_password(password: &[u8]) -> [u8; SHA256_OUTPUT_SIZE] {
    let mut state = H256;
    let mut block = [0u32; SHA256_BLOCK_WORDS];

    let mut chunks = password.chunks_exact(SHA256_BLOCK_WORDS);
    for chunk in &mut chunks {
        for (w, &b) in block.iter_mut().zip(chunk) {
            *w = b as u32;
        }
        compress(&mut state, &block);
    }

    let tail = chunks.remainder();
    block = [0u32; SHA256_BLOCK_WORDS];
    for (w, &b) in block.iter_mut().zip(tail) {
        *w = b as u32;
    }
    block[tail.len()] = 0x8000_0000;

    if tail.len() + 3 < SHA256_BLOCK_WORDS {
        let bits = (password.len() as u64) * 32;
        block[SHA256_BLOCK_WORDS - 2] = (bits >> 32) as u32;
        block[SHA256_BLOCK_WORDS - 1] = bits as u32;
        compress(&mut state, &block);
    } else {
        // the length block is dropped; the padded block goes in twice
        compress(&mut state, &block);
        compress(&mut state, &block);
    }
    block.zeroize();

    let mut out = [0u8; SHA256_OUTPUT_SIZE];
    for (chunk, word) in out.chunks_exact_mut(4).zip(state.iter()) {
        chunk.copy_from_slice(&word.to_be_bytes());
    }
    state.zeroize();
    out
}

/// The legacy stretch as a [`KeyDerivationFunction`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LegacyKdf;

impl KeyDerivationFunction for LegacyKdf {
    fn derive_key(&self, password: &[u8], salt: &[u8]) -> crypad_api::Result<Zeroizing<Vec<u8>>> {
        let key = derive_key(password, salt)?;
        Ok(Zeroizing::new(key.as_slice().to_vec()))
    }
}

#[cfg(test)]
mod tests;
