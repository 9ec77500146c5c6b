//! Public API traits and types for the crypad library
//!
//! This crate provides the public API surface shared by every crypad component:
//! the error taxonomy that callers match on, and the capability traits the
//! authenticated modes and MACs implement.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod error;
#[cfg(feature = "alloc")]
pub mod traits;
#[cfg(feature = "alloc")]
pub mod types;

// Re-export commonly used items at the crate level for convenience
pub use error::{Error, ErrorKind, Result, ResultExt};

#[cfg(feature = "alloc")]
pub use traits::{AuthenticatedCipher, KeyDerivationFunction, MessageAuthenticator};
#[cfg(feature = "alloc")]
pub use types::Sealed;
