//! Password-Based Key Derivation Function 2 (PBKDF2)
//!
//! RFC 8018 PBKDF2 with HMAC as the PRF. SHA-256 is the default and the
//! only hash the password blob codec uses.

use core::marker::PhantomData;

use alloc::vec::Vec;
use zeroize::Zeroizing;

use crate::error::{validate, Error, Result};
use crate::hash::{HashFunction, Sha256};
use crate::mac::Hmac;
use crypad_api::KeyDerivationFunction;
use crypad_params::utils::kdf::PBKDF2_DEFAULT_ITERATIONS;

/// Parameters for PBKDF2
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pbkdf2Params {
    /// Number of iterations
    pub iterations: u32,

    /// Length of derived key in bytes
    pub key_length: usize,
}

impl Default for Pbkdf2Params {
    fn default() -> Self {
        Self {
            iterations: PBKDF2_DEFAULT_ITERATIONS,
            key_length: 32,
        }
    }
}

/// PBKDF2 over HMAC with hash `H`
pub struct Pbkdf2<H: HashFunction = Sha256> {
    params: Pbkdf2Params,
    _hash: PhantomData<H>,
}

impl<H: HashFunction> Clone for Pbkdf2<H> {
    fn clone(&self) -> Self {
        Self::new(self.params)
    }
}

impl<H: HashFunction> core::fmt::Debug for Pbkdf2<H> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Pbkdf2")
            .field("hash", &H::NAME)
            .field("params", &self.params)
            .finish()
    }
}

impl<H: HashFunction> Pbkdf2<H> {
    /// PBKDF2 with fixed parameters, for use through [`KeyDerivationFunction`]
    pub fn new(params: Pbkdf2Params) -> Self {
        Self {
            params,
            _hash: PhantomData,
        }
    }

    /// Parameters in use
    pub fn params(&self) -> &Pbkdf2Params {
        &self.params
    }

    /// Derive `key_length` bytes from `password` and `salt`
    pub fn derive(
        password: &[u8],
        salt: &[u8],
        iterations: u32,
        key_length: usize,
    ) -> Result<Zeroizing<Vec<u8>>> {
        validate::parameter(
            iterations > 0,
            "iterations",
            "PBKDF2 iteration count must be > 0",
        )?;
        validate::parameter(
            key_length > 0,
            "key_length",
            "PBKDF2 output length must be > 0",
        )?;

        let hash_len = H::OUTPUT_SIZE;
        let block_count = key_length.div_ceil(hash_len);
        // RFC 8018 5.2: dkLen <= (2^32 - 1) * hLen
        if block_count as u64 > u32::MAX as u64 {
            return Err(Error::Length {
                context: "PBKDF2 output length",
                expected: (u32::MAX as usize).saturating_mul(hash_len),
                actual: key_length,
            });
        }

        let prf = Hmac::<H>::new(password);
        let mut result = Zeroizing::new(Vec::with_capacity(key_length));

        for block_index in 1..=block_count as u32 {
            let block = Self::f(&prf, salt, iterations, block_index);
            let take = (key_length - result.len()).min(hash_len);
            result.extend_from_slice(&block[..take]);
        }

        Ok(result)
    }

    /// F(P, S, c, i) = U_1 ^ U_2 ^ ... ^ U_c
    fn f(prf: &Hmac<H>, salt: &[u8], iterations: u32, block_index: u32) -> Zeroizing<Vec<u8>> {
        let mut mac = prf.clone();
        mac.update(salt).update(&block_index.to_be_bytes());
        let mut prev = mac.finalize();
        let mut output = Zeroizing::new(prev.as_ref().to_vec());

        for _ in 1..iterations {
            let mut mac = prf.clone();
            mac.update(prev.as_ref());
            prev = mac.finalize();
            for (o, p) in output.iter_mut().zip(prev.as_ref()) {
                *o ^= p;
            }
        }

        output
    }
}

impl<H: HashFunction> KeyDerivationFunction for Pbkdf2<H> {
    fn derive_key(&self, password: &[u8], salt: &[u8]) -> crypad_api::Result<Zeroizing<Vec<u8>>> {
        Ok(Self::derive(
            password,
            salt,
            self.params.iterations,
            self.params.key_length,
        )?)
    }
}
