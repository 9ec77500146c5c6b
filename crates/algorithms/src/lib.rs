//! Cryptographic primitives for crypad
//!
//! Table-driven AES with the CCM and OCB authenticated modes, the CMAC and
//! PMAC message authentication codes, SHA-256 with word-oriented input,
//! HMAC, and the two password stretches used by the password blob.
//!
//! Everything here is usable without `std`; the authenticated modes and key
//! derivation need `alloc` for their outputs.
//!
//! # Security Features
//!
//! - Key schedules and derived keys live in zeroizing containers
//! - Tags are compared in constant time over their full length
//! - Plaintext from a failed authentication is wiped, never returned

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]
#![deny(missing_docs)]

extern crate alloc;

// Error module and re-exports
pub mod error;
pub use error::{validate, Error, Result, ResultExt};

// Block cipher and GF(2^128) arithmetic
pub mod block;
pub use block::{Aes, BlockCipher, KeySize};

// Hash functions
pub mod hash;
pub use hash::{HashFunction, Sha256};

// MAC implementations
pub mod mac;
pub use mac::{Cmac, Hmac, HmacSha256, Pmac};

// Authenticated encryption modes
pub mod aead;
pub use aead::{Ccm, Ocb};

// Password-based key derivation
pub mod kdf;
pub use kdf::{KdfScheme, LegacyKdf, Pbkdf2, Pbkdf2Params};
