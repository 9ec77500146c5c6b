//! Plain data types shared across the public API

use alloc::vec::Vec;

/// Output of an authenticated encryption
///
/// `tag` is the detached authentication tag. Modes that embed an encrypted tag
/// in `ciphertext` (CCM) report their raw MAC here as well.
#[derive(Clone, PartialEq, Eq)]
pub struct Sealed {
    /// Encrypted payload
    pub ciphertext: Vec<u8>,
    /// Authentication tag
    pub tag: Vec<u8>,
}

impl core::fmt::Debug for Sealed {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Sealed")
            .field("ciphertext_len", &self.ciphertext.len())
            .field("tag_len", &self.tag.len())
            .finish()
    }
}
