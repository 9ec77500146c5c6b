//! Zeroizing containers for secret material

pub mod secret;

pub use secret::{SecretBuffer, SecretWords};

#[cfg(feature = "alloc")]
pub use secret::SecretVec;
