use rand::rngs::OsRng;
use rand::RngCore;

use crypad_params::utils::random::OS_COLLECTOR_BITS;

use super::{Collected, EntropyCollector};
use crate::error::CollectorError;
use crate::sample::EntropySample;

const OS_SAMPLE_WORDS: usize = 8;

/// Reads 256 bits from the operating system RNG per poll
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropyCollector;

impl OsEntropyCollector {
    /// New collector
    pub fn new() -> Self {
        Self
    }
}

impl EntropyCollector for OsEntropyCollector {
    fn name(&self) -> &str {
        "os"
    }

    fn collect(&mut self) -> Result<Option<Collected>, CollectorError> {
        let mut bytes = [0u8; OS_SAMPLE_WORDS * 4];
        OsRng
            .try_fill_bytes(&mut bytes)
            .map_err(|e| CollectorError::Unavailable {
                source_name: self.name().to_owned(),
                reason: e.to_string(),
            })?;
        let words = bytes
            .chunks_exact(4)
            .map(|c| u32::from_be_bytes([c[0], c[1], c[2], c[3]]))
            .collect();
        bytes.fill(0);
        Ok(Some((EntropySample::Words(words), Some(OS_COLLECTOR_BITS))))
    }
}
