//! Authenticated encryption for crypad
//!
//! This crate puts a mode-agnostic surface over the AES primitives in
//! `crypad-algorithms`: [`AesAead`] with its mode fixed at construction,
//! nonce-prefixed [`CiphertextPackage`]s, MAC-only signing, and the
//! [`PasswordBox`] blob codec used for password-protected data.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod aead;
pub mod aes;
pub mod cipher;
pub mod error;
pub mod password;

// Re-export main types for convenience
pub use aead::{AeadConfig, AeadMode, AesAead, CiphertextPackage};
pub use aes::{derive_key, generate_salt, AesKey};
pub use cipher::{Aead, SymmetricCipher};
pub use password::PasswordBox;

pub use crypad_algorithms::kdf::KdfScheme;

// Re-export the API error system
pub use crypad_api::error::{Error, ErrorKind, Result, ResultExt};
