//! Generator configuration

use crypad_params::utils::random::{
    BITS_PER_RESEED, DEFAULT_PARANOIA, MAX_WORDS_PER_BURST, MILLISECONDS_PER_RESEED,
    PARANOIA_LEVELS,
};

use crate::error::{Error, Result};

/// Tunables for [`Fortuna`](crate::Fortuna)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeneratorConfig {
    /// Paranoia level used when a call passes `None`
    pub default_paranoia: usize,
    /// Words produced between forced re-keys within one request
    pub max_words_per_burst: usize,
    /// Minimum time between scheduled reseeds
    pub reseed_interval_ms: u64,
    /// Entropy pool 0 must exceed before a scheduled reseed
    pub bits_per_reseed: u32,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            default_paranoia: DEFAULT_PARANOIA,
            max_words_per_burst: MAX_WORDS_PER_BURST,
            reseed_interval_ms: MILLISECONDS_PER_RESEED,
            bits_per_reseed: BITS_PER_RESEED,
        }
    }
}

impl GeneratorConfig {
    /// Check the paranoia level and burst size
    pub fn validate(&self) -> Result<()> {
        paranoia_bits(self.default_paranoia)?;
        if self.max_words_per_burst < 4 {
            return Err(Error::InvalidParameter {
                context: "max_words_per_burst",
                reason: "burst must cover at least one block",
            });
        }
        Ok(())
    }
}

/// Entropy required by paranoia `level`, in bits
pub fn paranoia_bits(level: usize) -> Result<u32> {
    PARANOIA_LEVELS
        .get(level)
        .copied()
        .ok_or(Error::InvalidParameter {
            context: "paranoia",
            reason: "paranoia level must be 0 to 10",
        })
}
