//! Mode selection and runtime configuration for [`AesAead`](super::AesAead)

use crypad_params::utils::symmetric::{CCM_BLOB_NONCE_SIZE, DEFAULT_TAG_SIZE, OCB_BLOB_NONCE_SIZE};

/// Authenticated mode, fixed when the cipher is built
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AeadMode {
    /// Counter mode with CBC-MAC
    Ccm,
    /// Offset codebook mode
    #[default]
    Ocb,
}

impl AeadMode {
    /// Nonce length drawn for fresh encryptions
    pub const fn nonce_len(self) -> usize {
        match self {
            AeadMode::Ccm => CCM_BLOB_NONCE_SIZE,
            AeadMode::Ocb => OCB_BLOB_NONCE_SIZE,
        }
    }

    /// Algorithm name
    pub const fn name(self) -> &'static str {
        match self {
            AeadMode::Ccm => "AES-CCM",
            AeadMode::Ocb => "AES-OCB",
        }
    }
}

/// AEAD configuration
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AeadConfig {
    /// Mode
    pub mode: AeadMode,
    /// Tag length in bytes: 4, 8, 12 or 16
    pub tag_len: usize,
}

impl Default for AeadConfig {
    fn default() -> Self {
        Self {
            mode: AeadMode::default(),
            tag_len: DEFAULT_TAG_SIZE,
        }
    }
}

impl AeadConfig {
    /// Configuration for `mode` with full-length tags
    pub fn new(mode: AeadMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Replace the tag length
    pub fn with_tag_len(mut self, tag_len: usize) -> Self {
        self.tag_len = tag_len;
        self
    }
}
