//! Common implementations and shared functionality for the crypad library
//!
//! Holds the zeroizing containers that key schedules, derived keys and
//! intermediate MAC state live in.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod security;

// Re-export core security types
pub use security::{SecretBuffer, SecretWords};

#[cfg(feature = "alloc")]
pub use security::SecretVec;
