//! AES key material
//!
//! Keys are either drawn from a caller-supplied RNG or stretched from a
//! password and an 8-byte salt.

pub mod keys;

pub use keys::{derive_key, generate_salt, AesKey};
