//! Validation utilities for cryptographic primitives

use super::{Error, Result};

/// Validate a parameter condition
#[inline(always)]
pub fn parameter(condition: bool, name: &'static str, reason: &'static str) -> Result<()> {
    if !condition {
        return Err(Error::param(name, reason));
    }
    Ok(())
}

/// Validate a length
#[inline(always)]
pub fn length(context: &'static str, actual: usize, expected: usize) -> Result<()> {
    if actual != expected {
        return Err(Error::Length {
            context,
            expected,
            actual,
        });
    }
    Ok(())
}

/// Validate a maximum length
#[inline(always)]
pub fn max_length(context: &'static str, actual: usize, max: usize) -> Result<()> {
    if actual > max {
        return Err(Error::Length {
            context,
            expected: max,
            actual,
        });
    }
    Ok(())
}

/// Validate that parsed input is at least `min` bytes long
///
/// Unlike [`length`], a failure here means the input itself is malformed
/// rather than a caller-supplied parameter being out of range.
#[inline(always)]
pub fn truncated(context: &'static str, actual: usize, min: usize) -> Result<()> {
    if actual < min {
        return Err(Error::Truncated {
            context,
            minimum: min,
            actual,
        });
    }
    Ok(())
}

/// Validate a tag length: a multiple of four between `min` and 16 bytes
#[inline(always)]
pub fn tag_length(context: &'static str, tag_len: usize, min: usize) -> Result<()> {
    if tag_len < min || tag_len > crypad_params::utils::symmetric::MAX_TAG_SIZE || tag_len % 4 != 0
    {
        return Err(Error::param(context, "tag length must be a multiple of 4 in range"));
    }
    Ok(())
}

/// Validate authentication
#[inline(always)]
pub fn authentication(is_valid: bool, algorithm: &'static str) -> Result<()> {
    if !is_valid {
        return Err(Error::Authentication { algorithm });
    }
    Ok(())
}
