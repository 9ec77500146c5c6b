use std::sync::Arc;
use std::time::Instant;

use crypad_params::utils::random::TIMING_COLLECTOR_BITS;

use super::{Collected, EntropyCollector};
use crate::clock::{Clock, SystemClock};
use crate::error::CollectorError;
use crate::sample::EntropySample;

/// Samples clock jitter: wall time plus a monotonic nanosecond reading
///
/// Credited with two bits per sample, as for any event timing.
pub struct TimingCollector {
    clock: Arc<dyn Clock>,
    origin: Instant,
}

impl TimingCollector {
    /// Collector reading the system clock
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    /// Collector reading `clock` for the wall-time half of each sample
    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            origin: Instant::now(),
        }
    }
}

impl Default for TimingCollector {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TimingCollector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimingCollector").finish_non_exhaustive()
    }
}

impl EntropyCollector for TimingCollector {
    fn name(&self) -> &str {
        "timing"
    }

    fn collect(&mut self) -> Result<Option<Collected>, CollectorError> {
        let wall = self.clock.now_ms() as u32;
        let jitter = self.origin.elapsed().as_nanos() as u32;
        Ok(Some((
            EntropySample::Words(vec![wall, jitter]),
            Some(TIMING_COLLECTOR_BITS),
        )))
    }
}
