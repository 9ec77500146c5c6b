//! Error handling for the generator
//!
//! Generator operations report through the API error type. Entropy
//! collectors have their own error, since they talk to the environment.

pub use crypad_api::error::{Error, ErrorKind, Result, ResultExt};

/// Failure of an entropy collector
#[derive(Debug, thiserror::Error)]
pub enum CollectorError {
    /// The underlying source cannot be read at all
    #[error("entropy source {source_name} unavailable: {reason}")]
    Unavailable {
        /// Collector name
        source_name: String,
        /// What went wrong
        reason: String,
    },

    /// The collector was polled while stopped
    #[error("entropy source {0} is not running")]
    NotRunning(String),
}

impl From<CollectorError> for Error {
    fn from(_: CollectorError) -> Self {
        Error::RandomGenerationError {
            context: "entropy collector",
        }
    }
}
