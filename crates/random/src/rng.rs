//! `rand` adapter over a borrowed generator

use rand::{CryptoRng, RngCore};

use crate::generator::Fortuna;

/// [`RngCore`] view of a [`Fortuna`] generator
///
/// `try_fill_bytes` reports an unseeded generator as a `rand::Error`
/// wrapping [`crate::Error::GeneratorNotReady`]. The infallible methods
/// (`next_u32`, `next_u64`, `fill_bytes`) panic in that case, so check
/// [`Fortuna::is_ready`] first or stick to `try_fill_bytes`.
#[derive(Debug)]
pub struct FortunaRng<'a> {
    generator: &'a mut Fortuna,
    paranoia: Option<usize>,
}

impl<'a> FortunaRng<'a> {
    /// Draw at the generator's default paranoia level
    pub fn new(generator: &'a mut Fortuna) -> Self {
        Self {
            generator,
            paranoia: None,
        }
    }

    /// Draw at an explicit paranoia level
    pub fn with_paranoia(generator: &'a mut Fortuna, paranoia: usize) -> Self {
        Self {
            generator,
            paranoia: Some(paranoia),
        }
    }
}

impl RngCore for FortunaRng<'_> {
    fn next_u32(&mut self) -> u32 {
        let mut bytes = [0u8; 4];
        self.fill_bytes(&mut bytes);
        u32::from_be_bytes(bytes)
    }

    fn next_u64(&mut self) -> u64 {
        let mut bytes = [0u8; 8];
        self.fill_bytes(&mut bytes);
        u64::from_be_bytes(bytes)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        if let Err(e) = self.try_fill_bytes(dest) {
            panic!("random generator unavailable: {}", e);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        let mut words = self
            .generator
            .random_words(dest.len().div_ceil(4), self.paranoia)
            .map_err(rand::Error::new)?;
        for (chunk, word) in dest.chunks_mut(4).zip(&words) {
            chunk.copy_from_slice(&word.to_be_bytes()[..chunk.len()]);
        }
        words.fill(0);
        Ok(())
    }
}

impl CryptoRng for FortunaRng<'_> {}
