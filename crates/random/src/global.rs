//! Process-wide generator with explicit lifecycle
//!
//! [`init`] installs a generator, [`with_generator`] borrows it under a
//! mutex, [`teardown`] drops it. Event callbacks run while the lock is held
//! and must not call back into this module.

use std::sync::{Mutex, MutexGuard, PoisonError};

use log::info;

use crypad_params::utils::random::{DEFAULT_PARANOIA, PARANOIA_LEVELS};

use crate::config::GeneratorConfig;
use crate::error::{Error, Result, ResultExt};
use crate::generator::Fortuna;

static GENERATOR: Mutex<Option<Fortuna>> = Mutex::new(None);

fn slot() -> MutexGuard<'static, Option<Fortuna>> {
    GENERATOR.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Install the global generator
///
/// Fails if one is already installed; call [`teardown`] first to replace it.
pub fn init(config: GeneratorConfig) -> Result<()> {
    let mut slot = slot();
    if slot.is_some() {
        return Err(Error::Other {
            context: "global generator already initialized",
        });
    }
    *slot = Some(Fortuna::new(config).with_context("global generator config")?);
    info!("global generator initialized");
    Ok(())
}

/// Whether [`init`] has run without a matching [`teardown`]
pub fn is_initialized() -> bool {
    slot().is_some()
}

/// Run `f` on the global generator
///
/// Before [`init`] this returns `GeneratorNotReady` with nothing available.
pub fn with_generator<T>(f: impl FnOnce(&mut Fortuna) -> T) -> Result<T> {
    let mut slot = slot();
    match slot.as_mut() {
        Some(generator) => Ok(f(generator)),
        None => Err(Error::GeneratorNotReady {
            required_bits: PARANOIA_LEVELS[DEFAULT_PARANOIA],
            available_bits: 0,
        }),
    }
}

/// Drop the global generator; `false` if none was installed
pub fn teardown() -> bool {
    let removed = slot().take().is_some();
    if removed {
        info!("global generator torn down");
    }
    removed
}
