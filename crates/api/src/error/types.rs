//! Error type definitions for cryptographic operations

use core::fmt;

/// The four failure classes callers are expected to distinguish
///
/// Everything the library can report falls into one of these; presenting the
/// failure (for example "wrong password") is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorKind {
    /// A tag did not verify. No plaintext was released.
    AuthenticationFailure,
    /// Input too short for its declared layout, rejected before any cipher call.
    MalformedInput,
    /// The generator has not accumulated enough entropy for the requested paranoia.
    GeneratorNotReady,
    /// A key, nonce, tag length or other argument is outside what the operation accepts.
    InvalidParameters,
    /// Anything else, e.g. an entropy source failing.
    Other,
}

/// Primary error type for cryptographic operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Authentication tag mismatch
    AuthenticationFailed {
        /// Algorithm or operation that rejected the input
        context: &'static str,
    },

    /// Structurally invalid input, such as a truncated ciphertext
    MalformedInput {
        /// What was being parsed
        context: &'static str,
        /// Smallest acceptable length in bytes
        minimum: usize,
        /// Length actually supplied
        actual: usize,
    },

    /// The generator is not seeded for the requested paranoia level
    GeneratorNotReady {
        /// Entropy required by the paranoia level, in bits
        required_bits: u32,
        /// Entropy currently credited, in bits
        available_bits: u32,
    },

    /// Invalid parameter error
    InvalidParameter {
        /// Parameter name
        context: &'static str,
        /// Why it was rejected
        reason: &'static str,
    },

    /// Invalid length error with context
    InvalidLength {
        /// What was being sized
        context: &'static str,
        /// Expected length (or bound) in bytes
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },

    /// An entropy source or other randomness provider failed
    RandomGenerationError {
        /// Source that failed
        context: &'static str,
    },

    /// Other error
    Other {
        /// Where it happened
        context: &'static str,
    },
}

/// Result type for cryptographic operations
pub type Result<T> = core::result::Result<T, Error>;

impl Error {
    /// Classify this error into the caller-facing taxonomy
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::AuthenticationFailed { .. } => ErrorKind::AuthenticationFailure,
            Self::MalformedInput { .. } => ErrorKind::MalformedInput,
            Self::GeneratorNotReady { .. } => ErrorKind::GeneratorNotReady,
            Self::InvalidParameter { .. } | Self::InvalidLength { .. } => {
                ErrorKind::InvalidParameters
            }
            Self::RandomGenerationError { .. } | Self::Other { .. } => ErrorKind::Other,
        }
    }

    /// Replace the context label of an existing error
    pub fn with_context(self, context: &'static str) -> Self {
        match self {
            Self::AuthenticationFailed { .. } => Self::AuthenticationFailed { context },
            Self::MalformedInput { minimum, actual, .. } => Self::MalformedInput {
                context,
                minimum,
                actual,
            },
            Self::GeneratorNotReady { .. } => self,
            Self::InvalidParameter { reason, .. } => Self::InvalidParameter { context, reason },
            Self::InvalidLength {
                expected, actual, ..
            } => Self::InvalidLength {
                context,
                expected,
                actual,
            },
            Self::RandomGenerationError { .. } => Self::RandomGenerationError { context },
            Self::Other { .. } => Self::Other { context },
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AuthenticationFailed { context } => {
                write!(f, "Authentication failed: {}", context)
            }
            Self::MalformedInput {
                context,
                minimum,
                actual,
            } => write!(
                f,
                "{}: malformed input (need at least {} bytes, got {})",
                context, minimum, actual
            ),
            Self::GeneratorNotReady {
                required_bits,
                available_bits,
            } => write!(
                f,
                "Generator not ready: {} of {} bits of entropy",
                available_bits, required_bits
            ),
            Self::InvalidParameter { context, reason } => {
                write!(f, "Invalid parameter '{}': {}", context, reason)
            }
            Self::InvalidLength {
                context,
                expected,
                actual,
            } => write!(
                f,
                "{}: invalid length (expected {}, got {})",
                context, expected, actual
            ),
            Self::RandomGenerationError { context } => {
                write!(f, "Random generation error: {}", context)
            }
            Self::Other { context } => write!(f, "Error: {}", context),
        }
    }
}
