//! Doubling in GF(2^128)
//!
//! Blocks are read as big-endian 128-bit integers and reduced by
//! x^128 + x^7 + x^2 + x + 1, the convention CMAC, OCB and PMAC share.

use crypad_params::utils::symmetric::{AES_BLOCK_SIZE, GF128_REDUCTION};

/// Multiply a block by x
///
/// The reduction is applied through a mask so the timing does not depend on
/// the top bit of the input.
#[inline]
pub fn double(block: &[u8; AES_BLOCK_SIZE]) -> [u8; AES_BLOCK_SIZE] {
    let carry = block[0] >> 7;
    let mut out = [0u8; AES_BLOCK_SIZE];
    for i in 0..AES_BLOCK_SIZE - 1 {
        out[i] = (block[i] << 1) | (block[i + 1] >> 7);
    }
    out[AES_BLOCK_SIZE - 1] = block[AES_BLOCK_SIZE - 1] << 1;
    out[AES_BLOCK_SIZE - 1] ^= 0u8.wrapping_sub(carry) & GF128_REDUCTION;
    out
}

/// `block ^ double(block)`, i.e. multiplication by x + 1
#[inline]
pub fn triple(block: &[u8; AES_BLOCK_SIZE]) -> [u8; AES_BLOCK_SIZE] {
    crypad_internal::constant_time::xor_block(block, &double(block))
}
