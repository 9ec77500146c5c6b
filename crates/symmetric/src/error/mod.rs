//! Error handling for the symmetric layer
//!
//! Uses the API error system directly; primitive errors convert through
//! `From`. The helpers here cover blob and package parsing, where short
//! input is malformed rather than an invalid parameter.

pub use crypad_api::error::{Error, ErrorKind, Result, ResultExt};

/// Reject input shorter than `minimum` bytes as malformed
pub fn validate_format(context: &'static str, actual: usize, minimum: usize) -> Result<()> {
    if actual < minimum {
        return Err(Error::MalformedInput {
            context,
            minimum,
            actual,
        });
    }
    Ok(())
}

/// Reject a parameter that fails `condition`
pub fn validate_parameter(condition: bool, context: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::InvalidParameter { context, reason });
    }
    Ok(())
}
