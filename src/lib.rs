//! # crypad
//!
//! The cryptographic core of a password-protected notepad: table-driven AES
//! with CCM and OCB authenticated encryption, SHA-256, HMAC password
//! stretching and a Fortuna-style entropy-pooling generator.
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! crypad = "0.4"
//! ```
//!
//! ## Features
//!
//! - `std` (default): standard library support
//! - `algorithms`: block cipher, hash, MACs, AEAD modes and KDFs
//! - `symmetric`: keyed AEAD facade and the password blob
//! - `random`: the entropy-pooling generator
//! - `serde`: `Serialize`/`Deserialize` on configuration types
//! - `full` (default): all components
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports functionality from several sub-crates:
//!
//! - [`crypad-algorithms`]: AES, SHA-256, CMAC/PMAC/HMAC, CCM, OCB, key derivation
//! - [`crypad-symmetric`]: `AesAead`, ciphertext packages and `PasswordBox`
//! - [`crypad-random`]: the `Fortuna` generator, collectors and `FortunaRng`

#![cfg_attr(not(feature = "std"), no_std)]

// Core re-exports (always available)
pub use crypad_api as api;
pub use crypad_common as common;
pub use crypad_internal as internal;
pub use crypad_params as params;

// Feature-gated re-exports
#[cfg(feature = "algorithms")]
pub use crypad_algorithms as algorithms;

#[cfg(feature = "symmetric")]
pub use crypad_symmetric as symmetric;

#[cfg(feature = "random")]
pub use crypad_random as random;

/// Common imports for crypad users
pub mod prelude {
    // Re-export error types
    pub use crate::api::{Error, ErrorKind, Result};

    // Re-export core traits
    pub use crate::api::{AuthenticatedCipher, KeyDerivationFunction, MessageAuthenticator};

    // Re-export security types
    pub use crate::common::{SecretBuffer, SecretWords};

    #[cfg(feature = "std")]
    pub use crate::common::SecretVec;

    #[cfg(feature = "algorithms")]
    pub use crate::algorithms::{Aes, BlockCipher, KdfScheme, Sha256};

    #[cfg(feature = "symmetric")]
    pub use crate::symmetric::{Aead, AeadConfig, AeadMode, AesAead, AesKey, PasswordBox};

    #[cfg(feature = "random")]
    pub use crate::random::{Fortuna, FortunaRng, GeneratorConfig, Readiness};
}

#[cfg(feature = "random")]
pub use rand;
