//! Entropy pools
//!
//! Each pool is a running SHA-256 over the samples routed to it, plus a
//! credit of estimated bits. Draining a pool finalizes its digest, which
//! also resets the hash for the next round.

use crypad_algorithms::Sha256;

#[derive(Debug, Default)]
struct Pool {
    hash: Sha256,
    entropy: u32,
}

/// The growing set of pools
#[derive(Debug)]
pub(crate) struct EntropyPools {
    pools: Vec<Pool>,
}

impl EntropyPools {
    /// Start with a single empty pool
    pub(crate) fn new() -> Self {
        Self {
            pools: vec![Pool::default()],
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.pools.len()
    }

    /// Append an empty pool
    pub(crate) fn grow(&mut self) {
        self.pools.push(Pool::default());
    }

    /// Estimated bits currently credited to pool `index`
    pub(crate) fn entropy(&self, index: usize) -> u32 {
        self.pools.get(index).map_or(0, |p| p.entropy)
    }

    /// Mix header words and sample words into pool `index`
    pub(crate) fn mix_words(&mut self, index: usize, words: &[u32]) {
        if let Some(pool) = self.pools.get_mut(index) {
            pool.hash.update_words_be(words);
        }
    }

    /// Mix raw bytes into pool `index`
    pub(crate) fn mix_bytes(&mut self, index: usize, bytes: &[u8]) {
        if let Some(pool) = self.pools.get_mut(index) {
            pool.hash.update(bytes);
        }
    }

    pub(crate) fn credit(&mut self, index: usize, bits: u32) {
        if let Some(pool) = self.pools.get_mut(index) {
            pool.entropy = pool.entropy.saturating_add(bits);
        }
    }

    /// Finalize pool `index` into `seed`, returning the bits it held
    pub(crate) fn drain_into(&mut self, index: usize, seed: &mut Vec<u32>) -> u32 {
        match self.pools.get_mut(index) {
            Some(pool) => {
                seed.extend_from_slice(&pool.hash.finalize());
                core::mem::take(&mut pool.entropy)
            }
            None => 0,
        }
    }
}
