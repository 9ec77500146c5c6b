//! SHA-256 (FIPS 180-4)
//!
//! The round constants and initial state are derived at compile time from
//! the cube and square roots of the first primes instead of being listed
//! literally. Input may be fed as bytes or as 32-bit words in either byte
//! order; words are simply their four bytes in the chosen order, so mixing
//! the two styles is allowed.

use byteorder::{BigEndian, ByteOrder};
use zeroize::Zeroize;

use super::HashFunction;
use crypad_params::utils::hash::{
    SHA256_BLOCK_SIZE, SHA256_BLOCK_WORDS, SHA256_OUTPUT_SIZE, SHA256_OUTPUT_WORDS, SHA256_ROUNDS,
};

/// The first 64 primes
const fn primes() -> [u64; SHA256_ROUNDS] {
    let mut out = [0u64; SHA256_ROUNDS];
    let mut found = 0;
    let mut p = 2u64;
    while found < SHA256_ROUNDS {
        let mut j = 2u64;
        let mut is_prime = true;
        while j * j <= p {
            if p % j == 0 {
                is_prime = false;
                break;
            }
            j += 1;
        }
        if is_prime {
            out[found] = p;
            found += 1;
        }
        p += 1;
    }
    out
}

/// Largest `r` with `r^k <= n`, for `k` of 2 or 3
const fn integer_root(n: u128, k: u32, upper: u128) -> u128 {
    let mut lo = 0u128;
    let mut hi = upper;
    while lo < hi {
        let mid = (lo + hi + 1) / 2;
        let pow = if k == 2 { mid * mid } else { mid * mid * mid };
        if pow <= n {
            lo = mid;
        } else {
            hi = mid - 1;
        }
    }
    lo
}

/// First 32 fractional bits of the cube roots of the first 64 primes
const fn round_constants() -> [u32; SHA256_ROUNDS] {
    let p = primes();
    let mut k = [0u32; SHA256_ROUNDS];
    let mut i = 0;
    while i < SHA256_ROUNDS {
        // floor(cbrt(p) * 2^32) = icbrt(p * 2^96)
        k[i] = integer_root((p[i] as u128) << 96, 3, 1 << 40) as u32;
        i += 1;
    }
    k
}

/// First 32 fractional bits of the square roots of the first 8 primes
const fn initial_state() -> [u32; SHA256_OUTPUT_WORDS] {
    let p = primes();
    let mut h = [0u32; SHA256_OUTPUT_WORDS];
    let mut i = 0;
    while i < SHA256_OUTPUT_WORDS {
        h[i] = integer_root((p[i] as u128) << 64, 2, 1 << 40) as u32;
        i += 1;
    }
    h
}

const K256: [u32; SHA256_ROUNDS] = round_constants();
pub(crate) const H256: [u32; SHA256_OUTPUT_WORDS] = initial_state();

/// One compression of a 16-word block into `state`
pub(crate) fn compress(state: &mut [u32; SHA256_OUTPUT_WORDS], block: &[u32; SHA256_BLOCK_WORDS]) {
    let mut w = [0u32; SHA256_ROUNDS];
    w[..SHA256_BLOCK_WORDS].copy_from_slice(block);

    for i in 16..SHA256_ROUNDS {
        let s0 = w[i - 15].rotate_right(7) ^ w[i - 15].rotate_right(18) ^ (w[i - 15] >> 3);
        let s1 = w[i - 2].rotate_right(17) ^ w[i - 2].rotate_right(19) ^ (w[i - 2] >> 10);
        w[i] = w[i - 16]
            .wrapping_add(s0)
            .wrapping_add(w[i - 7])
            .wrapping_add(s1);
    }

    let [mut a, mut b, mut c, mut d, mut e, mut f, mut g, mut h] = *state;

    for i in 0..SHA256_ROUNDS {
        let s1 = e.rotate_right(6) ^ e.rotate_right(11) ^ e.rotate_right(25);
        let ch = (e & f) ^ ((!e) & g);
        let temp1 = h
            .wrapping_add(s1)
            .wrapping_add(ch)
            .wrapping_add(K256[i])
            .wrapping_add(w[i]);
        let s0 = a.rotate_right(2) ^ a.rotate_right(13) ^ a.rotate_right(22);
        let maj = (a & b) ^ (a & c) ^ (b & c);
        let temp2 = s0.wrapping_add(maj);

        h = g;
        g = f;
        f = e;
        e = d.wrapping_add(temp1);
        d = c;
        c = b;
        b = a;
        a = temp1.wrapping_add(temp2);
    }

    for (s, v) in state.iter_mut().zip([a, b, c, d, e, f, g, h]) {
        *s = s.wrapping_add(v);
    }

    w.zeroize();
}

/// SHA-256 streaming state
#[derive(Clone, Zeroize)]
pub struct Sha256 {
    state: [u32; SHA256_OUTPUT_WORDS],
    buffer: [u8; SHA256_BLOCK_SIZE],
    buffer_idx: usize,
    total_bytes: u64,
}

impl Drop for Sha256 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Default for Sha256 {
    fn default() -> Self {
        Self::new()
    }
}

impl Sha256 {
    /// Fresh state
    pub fn new() -> Self {
        Sha256 {
            state: H256,
            buffer: [0u8; SHA256_BLOCK_SIZE],
            buffer_idx: 0,
            total_bytes: 0,
        }
    }

    fn compress_buffer(&mut self) {
        let mut block = [0u32; SHA256_BLOCK_WORDS];
        BigEndian::read_u32_into(&self.buffer, &mut block);
        compress(&mut self.state, &block);
        block.zeroize();
    }

    /// Absorb raw bytes
    pub fn update(&mut self, mut input: &[u8]) -> &mut Self {
        while !input.is_empty() {
            let fill = core::cmp::min(input.len(), SHA256_BLOCK_SIZE - self.buffer_idx);
            self.buffer[self.buffer_idx..self.buffer_idx + fill].copy_from_slice(&input[..fill]);
            self.buffer_idx += fill;
            self.total_bytes += fill as u64;
            input = &input[fill..];
            if self.buffer_idx == SHA256_BLOCK_SIZE {
                self.compress_buffer();
                self.buffer_idx = 0;
            }
        }
        self
    }

    /// Absorb a single byte
    pub fn update_byte(&mut self, byte: u8) -> &mut Self {
        self.update(&[byte])
    }

    /// Absorb a word, most significant byte first
    pub fn update_word_be(&mut self, word: u32) -> &mut Self {
        self.update(&word.to_be_bytes())
    }

    /// Absorb a word, least significant byte first
    pub fn update_word_le(&mut self, word: u32) -> &mut Self {
        self.update(&word.to_le_bytes())
    }

    /// Absorb a sequence of big-endian words
    pub fn update_words_be(&mut self, words: &[u32]) -> &mut Self {
        for &w in words {
            self.update_word_be(w);
        }
        self
    }

    /// Absorb a sequence of little-endian words
    pub fn update_words_le(&mut self, words: &[u32]) -> &mut Self {
        for &w in words {
            self.update_word_le(w);
        }
        self
    }

    /// Pad, produce the digest as eight words and reset for reuse
    pub fn finalize(&mut self) -> [u32; SHA256_OUTPUT_WORDS] {
        let bit_len = self.total_bytes.wrapping_mul(8);

        self.buffer[self.buffer_idx] = 0x80;
        for b in &mut self.buffer[self.buffer_idx + 1..] {
            *b = 0;
        }
        if self.buffer_idx >= SHA256_BLOCK_SIZE - 8 {
            self.compress_buffer();
            self.buffer = [0u8; SHA256_BLOCK_SIZE];
        }
        BigEndian::write_u64(&mut self.buffer[SHA256_BLOCK_SIZE - 8..], bit_len);
        self.compress_buffer();

        let out = self.state;
        self.reset();
        out
    }

    /// Pad, produce the digest as bytes and reset for reuse
    pub fn finalize_bytes(&mut self) -> [u8; SHA256_OUTPUT_SIZE] {
        let mut words = self.finalize();
        let mut out = [0u8; SHA256_OUTPUT_SIZE];
        BigEndian::write_u32_into(&words, &mut out);
        words.zeroize();
        out
    }

    /// Return to the initial state, discarding buffered input
    pub fn reset(&mut self) {
        self.zeroize();
        self.state = H256;
    }

    /// One-shot digest of big-endian words
    pub fn hash_words_big_endian(words: &[u32]) -> [u32; SHA256_OUTPUT_WORDS] {
        let mut h = Self::new();
        h.update_words_be(words);
        h.finalize()
    }

    /// One-shot digest of words whose bytes are stored least significant first
    pub fn hash_words_little_endian(words: &[u32]) -> [u32; SHA256_OUTPUT_WORDS] {
        let mut h = Self::new();
        h.update_words_le(words);
        h.finalize()
    }
}

impl HashFunction for Sha256 {
    type Output = [u8; SHA256_OUTPUT_SIZE];

    const OUTPUT_SIZE: usize = SHA256_OUTPUT_SIZE;
    const BLOCK_SIZE: usize = SHA256_BLOCK_SIZE;
    const NAME: &'static str = "SHA-256";

    fn new() -> Self {
        Sha256::new()
    }

    fn update(&mut self, data: &[u8]) -> &mut Self {
        Sha256::update(self, data)
    }

    fn finalize_output(&mut self) -> Self::Output {
        self.finalize_bytes()
    }
}

impl core::fmt::Debug for Sha256 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sha256")
            .field("total_bytes", &self.total_bytes)
            .finish_non_exhaustive()
    }
}
