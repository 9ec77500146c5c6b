//! Pluggable entropy collectors
//!
//! A collector turns some environment signal into samples. The generator
//! polls every registered collector once per `poll_collectors` call while
//! collection is started; failures are logged and skipped.

mod os;
mod timing;

pub use os::OsEntropyCollector;
pub use timing::TimingCollector;

use crate::error::CollectorError;
use crate::sample::EntropySample;

/// A sample paired with an optional entropy estimate
pub type Collected = (EntropySample, Option<u32>);

/// Source of entropy samples
pub trait EntropyCollector: Send {
    /// Source label, used for pool routing
    fn name(&self) -> &str;

    /// Take one sample, or `None` if there is nothing new
    fn collect(&mut self) -> Result<Option<Collected>, CollectorError>;
}
