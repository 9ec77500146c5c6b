//! AES block cipher (FIPS 197)
//!
//! A table-driven implementation: each round is sixteen lookups into four
//! 1 KiB tables generated at compile time. Keys of 16, 24 and 32 bytes are
//! accepted and give 10, 12 and 14 rounds.
//!
//! Both the encryption and the decryption key schedule are held by the same
//! [`Aes`] value. The decryption schedule is derived on first use, so a cipher
//! that only ever encrypts (counter-mode style use) never pays for it.
//!
//! ## Side channels
//!
//! Table lookups are indexed by secret state and are therefore not
//! constant-time with respect to cache timing. Tag comparisons elsewhere in
//! the crate are constant-time; the block transform itself is not.

use core::cell::OnceCell;
use core::fmt;

use super::BlockCipher;
use crate::error::{Error, Result};
use crypad_common::SecretWords;
use crypad_internal::endian::u32_from_be_bytes;
use crypad_params::utils::symmetric::{
    AES128_KEY_SIZE, AES192_KEY_SIZE, AES256_KEY_SIZE, AES_MAX_ROUNDS, AES_RCON,
};
use zeroize::Zeroize;

mod tables;
use tables::TABLES;

/// Words in the largest (AES-256) key schedule
const SCHEDULE_WORDS: usize = 4 * (AES_MAX_ROUNDS + 1);

/// Supported key lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeySize {
    /// 128-bit key, 10 rounds
    Aes128,
    /// 192-bit key, 12 rounds
    Aes192,
    /// 256-bit key, 14 rounds
    Aes256,
}

impl KeySize {
    /// Classify a raw key length in bytes
    pub fn from_key_len(len: usize) -> Option<Self> {
        match len {
            AES128_KEY_SIZE => Some(Self::Aes128),
            AES192_KEY_SIZE => Some(Self::Aes192),
            AES256_KEY_SIZE => Some(Self::Aes256),
            _ => None,
        }
    }

    /// Key length in bytes
    pub const fn key_len(self) -> usize {
        match self {
            Self::Aes128 => AES128_KEY_SIZE,
            Self::Aes192 => AES192_KEY_SIZE,
            Self::Aes256 => AES256_KEY_SIZE,
        }
    }

    /// Number of rounds
    pub const fn rounds(self) -> usize {
        self.key_len() / 4 + 6
    }

    /// Display name, e.g. `"AES-128"`
    pub fn name(self) -> &'static str {
        match self {
            Self::Aes128 => "AES-128",
            Self::Aes192 => "AES-192",
            Self::Aes256 => "AES-256",
        }
    }
}

/// AES with an expanded key
#[derive(Clone)]
pub struct Aes {
    key_size: KeySize,
    encrypt_schedule: SecretWords<SCHEDULE_WORDS>,
    decrypt_schedule: OnceCell<SecretWords<SCHEDULE_WORDS>>,
}

impl Aes {
    /// Expand `key`, which must be 16, 24 or 32 bytes long
    pub fn new(key: &[u8]) -> Result<Self> {
        let key_size = KeySize::from_key_len(key.len()).ok_or(Error::Length {
            context: "AES key",
            expected: AES256_KEY_SIZE,
            actual: key.len(),
        })?;

        Ok(Self {
            key_size,
            encrypt_schedule: Self::expand_key(key, key_size),
            decrypt_schedule: OnceCell::new(),
        })
    }

    /// Build a cipher directly from key words, as the generator keeps its key
    pub fn from_words(words: &[u32]) -> Result<Self> {
        let mut key = [0u8; AES256_KEY_SIZE];
        if words.len() * 4 > key.len() {
            return Err(Error::Length {
                context: "AES key",
                expected: AES256_KEY_SIZE,
                actual: words.len() * 4,
            });
        }
        for (chunk, w) in key.chunks_exact_mut(4).zip(words) {
            chunk.copy_from_slice(&w.to_be_bytes());
        }
        let result = Self::new(&key[..words.len() * 4]);
        key.zeroize();
        result
    }

    /// Which key size this cipher was built with
    pub fn key_size(&self) -> KeySize {
        self.key_size
    }

    fn rounds(&self) -> usize {
        self.key_size.rounds()
    }

    fn expand_key(key: &[u8], key_size: KeySize) -> SecretWords<SCHEDULE_WORDS> {
        let nk = key.len() / 4;
        let total = 4 * (key_size.rounds() + 1);
        let mut w = SecretWords::<SCHEDULE_WORDS>::zeroed();

        for (i, chunk) in key.chunks_exact(4).enumerate() {
            w[i] = u32_from_be_bytes(chunk);
        }

        for i in nk..total {
            let mut temp = w[i - 1];
            if i % nk == 0 {
                temp = TABLES.sub_word(temp.rotate_left(8)) ^ AES_RCON[i / nk - 1];
            } else if nk == 8 && i % nk == 4 {
                temp = TABLES.sub_word(temp);
            }
            w[i] = w[i - nk] ^ temp;
        }

        w
    }

    /// Equivalent-inverse-cipher schedule: round keys in reverse order with
    /// InvMixColumns applied to every round except the first and last
    fn expand_decrypt_key(&self) -> SecretWords<SCHEDULE_WORDS> {
        let nr = self.rounds();
        let enc = &self.encrypt_schedule;
        let mut dk = SecretWords::<SCHEDULE_WORDS>::zeroed();

        for round in 0..=nr {
            let src = 4 * (nr - round);
            for j in 0..4 {
                let w = enc[src + j];
                dk[4 * round + j] = if round == 0 || round == nr {
                    w
                } else {
                    TABLES.inv_mix_word(w)
                };
            }
        }
        dk
    }

    fn decrypt_schedule(&self) -> &SecretWords<SCHEDULE_WORDS> {
        self.decrypt_schedule
            .get_or_init(|| self.expand_decrypt_key())
    }
}

impl BlockCipher for Aes {
    fn name(&self) -> &'static str {
        self.key_size.name()
    }

    fn encrypt_words(&self, block: &[u32; 4]) -> [u32; 4] {
        let rk = &self.encrypt_schedule;
        let te = &TABLES.encrypt;
        let sbox = &TABLES.sbox;

        let mut s0 = block[0] ^ rk[0];
        let mut s1 = block[1] ^ rk[1];
        let mut s2 = block[2] ^ rk[2];
        let mut s3 = block[3] ^ rk[3];
        let mut k = 4;

        for _ in 1..self.rounds() {
            let t0 = te[0][(s0 >> 24) as usize]
                ^ te[1][((s1 >> 16) & 0xff) as usize]
                ^ te[2][((s2 >> 8) & 0xff) as usize]
                ^ te[3][(s3 & 0xff) as usize]
                ^ rk[k];
            let t1 = te[0][(s1 >> 24) as usize]
                ^ te[1][((s2 >> 16) & 0xff) as usize]
                ^ te[2][((s3 >> 8) & 0xff) as usize]
                ^ te[3][(s0 & 0xff) as usize]
                ^ rk[k + 1];
            let t2 = te[0][(s2 >> 24) as usize]
                ^ te[1][((s3 >> 16) & 0xff) as usize]
                ^ te[2][((s0 >> 8) & 0xff) as usize]
                ^ te[3][(s1 & 0xff) as usize]
                ^ rk[k + 2];
            let t3 = te[0][(s3 >> 24) as usize]
                ^ te[1][((s0 >> 16) & 0xff) as usize]
                ^ te[2][((s1 >> 8) & 0xff) as usize]
                ^ te[3][(s2 & 0xff) as usize]
                ^ rk[k + 3];
            s0 = t0;
            s1 = t1;
            s2 = t2;
            s3 = t3;
            k += 4;
        }

        let last = |a: u32, b: u32, c: u32, d: u32, key: u32| {
            ((sbox[(a >> 24) as usize] as u32) << 24
                | (sbox[((b >> 16) & 0xff) as usize] as u32) << 16
                | (sbox[((c >> 8) & 0xff) as usize] as u32) << 8
                | sbox[(d & 0xff) as usize] as u32)
                ^ key
        };

        [
            last(s0, s1, s2, s3, rk[k]),
            last(s1, s2, s3, s0, rk[k + 1]),
            last(s2, s3, s0, s1, rk[k + 2]),
            last(s3, s0, s1, s2, rk[k + 3]),
        ]
    }

    fn decrypt_words(&self, block: &[u32; 4]) -> [u32; 4] {
        let rk = self.decrypt_schedule();
        let td = &TABLES.decrypt;
        let inv = &TABLES.inv_sbox;

        let mut s0 = block[0] ^ rk[0];
        let mut s1 = block[1] ^ rk[1];
        let mut s2 = block[2] ^ rk[2];
        let mut s3 = block[3] ^ rk[3];
        let mut k = 4;

        for _ in 1..self.rounds() {
            let t0 = td[0][(s0 >> 24) as usize]
                ^ td[1][((s3 >> 16) & 0xff) as usize]
                ^ td[2][((s2 >> 8) & 0xff) as usize]
                ^ td[3][(s1 & 0xff) as usize]
                ^ rk[k];
            let t1 = td[0][(s1 >> 24) as usize]
                ^ td[1][((s0 >> 16) & 0xff) as usize]
                ^ td[2][((s3 >> 8) & 0xff) as usize]
                ^ td[3][(s2 & 0xff) as usize]
                ^ rk[k + 1];
            let t2 = td[0][(s2 >> 24) as usize]
                ^ td[1][((s1 >> 16) & 0xff) as usize]
                ^ td[2][((s0 >> 8) & 0xff) as usize]
                ^ td[3][(s3 & 0xff) as usize]
                ^ rk[k + 2];
            let t3 = td[0][(s3 >> 24) as usize]
                ^ td[1][((s2 >> 16) & 0xff) as usize]
                ^ td[2][((s1 >> 8) & 0xff) as usize]
                ^ td[3][(s0 & 0xff) as usize]
                ^ rk[k + 3];
            s0 = t0;
            s1 = t1;
            s2 = t2;
            s3 = t3;
            k += 4;
        }

        let last = |a: u32, b: u32, c: u32, d: u32, key: u32| {
            ((inv[(a >> 24) as usize] as u32) << 24
                | (inv[((b >> 16) & 0xff) as usize] as u32) << 16
                | (inv[((c >> 8) & 0xff) as usize] as u32) << 8
                | inv[(d & 0xff) as usize] as u32)
                ^ key
        };

        [
            last(s0, s3, s2, s1, rk[k]),
            last(s1, s0, s3, s2, rk[k + 1]),
            last(s2, s1, s0, s3, rk[k + 2]),
            last(s3, s2, s1, s0, rk[k + 3]),
        ]
    }
}

impl fmt::Debug for Aes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Aes")
            .field("key_size", &self.key_size)
            .field("schedule", &"[REDACTED]")
            .finish()
    }
}
