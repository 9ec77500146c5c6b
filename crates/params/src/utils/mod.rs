//! Constants grouped by the component that consumes them

pub mod hash;
pub mod kdf;
pub mod random;
pub mod symmetric;
