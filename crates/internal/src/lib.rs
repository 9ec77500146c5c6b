//! Internal utilities for the crypad library
//!
//! Not part of the public API; the other crates reach in here for constant-time
//! comparison and the word/byte conversions every block-oriented primitive needs.

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

pub mod constant_time;
pub mod endian;
