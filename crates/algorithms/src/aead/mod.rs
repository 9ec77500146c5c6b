//! Authenticated encryption modes over a 128-bit block cipher

pub mod ccm;
pub mod ocb;

pub use ccm::Ccm;
pub use ocb::Ocb;
