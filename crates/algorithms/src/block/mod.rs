//! Block cipher implementations
//!
//! The only cipher here is AES, but the authenticated modes and MACs are
//! written against [`BlockCipher`] so they borrow or own the cipher without
//! caring which key size it was built with.

pub mod aes;
pub mod gf128;

pub use aes::{Aes, KeySize};

use crate::error::{validate, Result};
use crypad_internal::endian::{block_to_words, words_to_block};
use crypad_params::utils::symmetric::AES_BLOCK_SIZE;

/// A 128-bit block cipher operating on big-endian words
///
/// Implementors provide the word-level transforms; byte-level helpers are
/// derived from them.
pub trait BlockCipher {
    /// Algorithm name including key size, e.g. `"AES-256"`
    fn name(&self) -> &'static str;

    /// Encrypt one block given as four big-endian words
    fn encrypt_words(&self, block: &[u32; 4]) -> [u32; 4];

    /// Decrypt one block given as four big-endian words
    fn decrypt_words(&self, block: &[u32; 4]) -> [u32; 4];

    /// Encrypt a 16-byte block by value
    #[inline]
    fn encrypt_array(&self, block: &[u8; AES_BLOCK_SIZE]) -> [u8; AES_BLOCK_SIZE] {
        words_to_block(&self.encrypt_words(&block_to_words(block)))
    }

    /// Decrypt a 16-byte block by value
    #[inline]
    fn decrypt_array(&self, block: &[u8; AES_BLOCK_SIZE]) -> [u8; AES_BLOCK_SIZE] {
        words_to_block(&self.decrypt_words(&block_to_words(block)))
    }

    /// Encrypt a block in place; the slice must be exactly one block long
    fn encrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;
        let mut buf = [0u8; AES_BLOCK_SIZE];
        buf.copy_from_slice(block);
        block.copy_from_slice(&self.encrypt_array(&buf));
        Ok(())
    }

    /// Decrypt a block in place; the slice must be exactly one block long
    fn decrypt_block(&self, block: &mut [u8]) -> Result<()> {
        validate::length("AES block", block.len(), AES_BLOCK_SIZE)?;
        let mut buf = [0u8; AES_BLOCK_SIZE];
        buf.copy_from_slice(block);
        block.copy_from_slice(&self.decrypt_array(&buf));
        Ok(())
    }
}

impl<B: BlockCipher + ?Sized> BlockCipher for &B {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn encrypt_words(&self, block: &[u32; 4]) -> [u32; 4] {
        (**self).encrypt_words(block)
    }

    fn decrypt_words(&self, block: &[u32; 4]) -> [u32; 4] {
        (**self).decrypt_words(block)
    }
}
