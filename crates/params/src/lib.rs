//! Constant values for the crypad library
//!
//! Everything in here is a plain `const`; the crate has no dependencies and is
//! always `no_std`.

#![no_std]

pub mod utils;
