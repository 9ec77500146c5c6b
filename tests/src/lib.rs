//! Shared helpers for the crypad integration tests and benchmarks
pub mod fixtures;
pub mod statistics;
