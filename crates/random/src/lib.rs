//! Entropy-pooling random generator for crypad
//!
//! [`Fortuna`] accumulates entropy samples into a growing set of SHA-256
//! pools and produces output with AES-256 in counter mode, re-keying after
//! every request. Readiness is gated on a paranoia level: a request fails
//! with [`Error::GeneratorNotReady`] until enough estimated entropy has been
//! credited.
//!
//! ```
//! use crypad_random::{Fortuna, FortunaRng, GeneratorConfig, OsEntropyCollector};
//! use rand::RngCore;
//!
//! let mut generator = Fortuna::new(GeneratorConfig::default())?;
//! generator.register_collector(Box::new(OsEntropyCollector::new()));
//! generator.start_collectors();
//! generator.poll_collectors();
//! generator.poll_collectors();
//!
//! let mut salt = [0u8; 8];
//! FortunaRng::new(&mut generator).try_fill_bytes(&mut salt)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod clock;
pub mod collector;
pub mod config;
pub mod error;
pub mod events;
pub mod generator;
pub mod global;
mod pool;
pub mod readiness;
pub mod rng;
pub mod sample;

pub use clock::{Clock, ManualClock, SystemClock};
pub use collector::{EntropyCollector, OsEntropyCollector, TimingCollector};
pub use config::GeneratorConfig;
pub use error::{CollectorError, Error, ErrorKind, Result};
pub use events::{EventKind, ListenerId, RandomEvent};
pub use generator::Fortuna;
pub use readiness::Readiness;
pub use rng::FortunaRng;
pub use sample::EntropySample;
