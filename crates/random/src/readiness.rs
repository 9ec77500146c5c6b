//! Generator readiness flags

use bitflags::bitflags;

bitflags! {
    /// Whether the generator may produce output at a paranoia level
    ///
    /// The empty set means not ready. `REQUIRES_RESEED` alone means the
    /// pools hold enough entropy but no reseed has happened yet; the next
    /// request performs a full reseed.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Readiness: u32 {
        /// A reseed has reached the required strength
        const READY = 0b01;
        /// A reseed is due before the next output
        const REQUIRES_RESEED = 0b10;
    }
}

impl Readiness {
    /// Neither ready nor reseedable
    pub const NOT_READY: Readiness = Readiness::empty();

    /// Output may be produced, possibly after a reseed
    pub fn can_generate(self) -> bool {
        !self.is_empty()
    }
}
