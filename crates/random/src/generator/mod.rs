//! Fortuna-style generator
//!
//! Output comes from AES-256 in counter mode. Entropy is routed round-robin
//! into a growing set of SHA-256 pools; reseeds drain pool 0 every time and
//! pool `k` roughly every `2^k` reseeds, so a late pool can recover the
//! generator even if an attacker saw the earlier ones. After every request
//! the key is replaced by fresh output, so a captured key says nothing about
//! what came before.

use std::collections::HashMap;
use std::sync::Arc;

use log::{debug, info, trace, warn};

use crypad_algorithms::{Aes, BlockCipher, Sha256};
use crypad_common::security::SecretWords;
use crypad_params::utils::random::{DEFAULT_SOURCE, GENERATOR_KEY_WORDS, PARANOIA_LEVELS};

use crate::clock::{Clock, SystemClock};
use crate::collector::EntropyCollector;
use crate::config::{paranoia_bits, GeneratorConfig};
use crate::error::{Error, Result};
use crate::events::{EventKind, ListenerId, Listeners, RandomEvent};
use crate::pool::EntropyPools;
use crate::readiness::Readiness;
use crate::sample::EntropySample;

/// Entropy-pooling generator
///
/// Every mutating call takes `&mut self`; share one across threads behind a
/// mutex (see [`crate::global`]).
pub struct Fortuna {
    config: GeneratorConfig,
    clock: Arc<dyn Clock>,

    pools: EntropyPools,
    reseed_count: u64,
    /// Strength of the best reseed so far
    strength: u32,
    /// Bits credited to the pools and not yet drained
    pool_strength: u32,
    next_reseed: u64,

    key: SecretWords<GENERATOR_KEY_WORDS>,
    counter: SecretWords<4>,
    cipher: Option<Aes>,

    source_ids: HashMap<String, u32>,
    robins: HashMap<String, usize>,
    event_id: u32,

    listeners: Listeners,
    collectors: Vec<Box<dyn EntropyCollector>>,
    collecting: bool,
}

impl Fortuna {
    /// Generator with `config`, timed by the system clock
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Generator with `config` and an explicit time source
    pub fn with_clock(config: GeneratorConfig, clock: Arc<dyn Clock>) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            clock,
            pools: EntropyPools::new(),
            reseed_count: 0,
            strength: 0,
            pool_strength: 0,
            next_reseed: 0,
            key: SecretWords::zeroed(),
            counter: SecretWords::zeroed(),
            cipher: None,
            source_ids: HashMap::new(),
            robins: HashMap::new(),
            event_id: 0,
            listeners: Listeners::default(),
            collectors: Vec::new(),
            collecting: false,
        })
    }

    /// Current configuration
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Change the paranoia level used when calls pass `None`
    pub fn set_default_paranoia(&mut self, level: usize) -> Result<()> {
        paranoia_bits(level)?;
        self.config.default_paranoia = level;
        Ok(())
    }

    /// Strength of the best reseed so far, in bits
    pub fn strength(&self) -> u32 {
        self.strength
    }

    /// Bits credited to the pools since they were last drained
    pub fn pool_strength(&self) -> u32 {
        self.pool_strength
    }

    /// Number of pools currently allocated
    pub fn pool_count(&self) -> usize {
        self.pools.len()
    }

    /// Number of reseeds performed
    pub fn reseed_count(&self) -> u64 {
        self.reseed_count
    }

    fn required_bits(&self, paranoia: Option<usize>) -> Result<u32> {
        paranoia_bits(paranoia.unwrap_or(self.config.default_paranoia))
    }

    fn clamped_required_bits(&self, paranoia: Option<usize>) -> u32 {
        let level = paranoia.unwrap_or(self.config.default_paranoia);
        PARANOIA_LEVELS[level.min(PARANOIA_LEVELS.len() - 1)]
    }

    /// Readiness at `paranoia`, or the default level
    ///
    /// Levels above the table are treated as the highest level.
    pub fn is_ready(&self, paranoia: Option<usize>) -> Readiness {
        self.readiness_for(self.clamped_required_bits(paranoia))
    }

    fn readiness_for(&self, required: u32) -> Readiness {
        if self.strength >= required {
            if self.pools.entropy(0) > self.config.bits_per_reseed
                && self.clock.now_ms() > self.next_reseed
            {
                Readiness::READY | Readiness::REQUIRES_RESEED
            } else {
                Readiness::READY
            }
        } else if self.pool_strength > required {
            Readiness::REQUIRES_RESEED
        } else {
            Readiness::NOT_READY
        }
    }

    /// Fraction of the threshold at `paranoia` reached so far, in `[0, 1]`
    pub fn get_progress(&self, paranoia: Option<usize>) -> f64 {
        let required = self.clamped_required_bits(paranoia);
        if self.strength >= required || self.pool_strength > required {
            1.0
        } else {
            f64::from(self.pool_strength) / f64::from(required)
        }
    }

    /// Mix a sample into the pools
    ///
    /// `estimated_bits` defaults to the crude estimate of the sample. Each
    /// `source` rotates through the pools independently of the others.
    pub fn add_entropy(
        &mut self,
        sample: impl Into<EntropySample>,
        estimated_bits: Option<u32>,
        source: Option<&str>,
    ) {
        let sample = sample.into();
        let source = source.unwrap_or(DEFAULT_SOURCE);
        let estimate = estimated_bits.unwrap_or_else(|| sample.estimate_bits());

        let next_id = self.source_ids.len() as u32;
        let id = *self.source_ids.entry(source.to_owned()).or_insert(next_id);
        let pool_count = self.pools.len();
        let robin = self.robins.entry(source.to_owned()).or_insert(0);
        let index = *robin;
        *robin = (index + 1) % pool_count;

        let old = self.is_ready(None);

        let header = [
            id,
            self.event_id,
            sample.type_tag(),
            estimate,
            self.clock.now_ms() as u32,
            sample.header_len(),
        ];
        self.event_id = self.event_id.wrapping_add(1);
        self.pools.mix_words(index, &header);
        match &sample {
            EntropySample::Word(word) => self.pools.mix_words(index, &[*word]),
            EntropySample::Words(words) => self.pools.mix_words(index, words),
            EntropySample::Text(text) => self.pools.mix_bytes(index, text.as_bytes()),
        }

        self.pools.credit(index, estimate);
        self.pool_strength = self.pool_strength.saturating_add(estimate);
        trace!("{} bits from {} into pool {}", estimate, source, index);

        if old.is_empty() {
            if self.is_ready(None).can_generate() {
                let strength = self.strength.max(self.pool_strength);
                info!("generator seeded with {} bits", strength);
                self.listeners.fire(RandomEvent::Seeded { strength });
            }
            let progress = self.get_progress(None);
            self.listeners.fire(RandomEvent::Progress { progress });
        }
    }

    /// `n` random words at `paranoia`, or the default level
    pub fn random_words(&mut self, n: usize, paranoia: Option<usize>) -> Result<Vec<u32>> {
        let required = self.required_bits(paranoia)?;
        let readiness = self.readiness_for(required);
        if !readiness.can_generate() {
            return Err(Error::GeneratorNotReady {
                required_bits: required,
                available_bits: self.strength.max(self.pool_strength),
            });
        }
        if readiness.contains(Readiness::REQUIRES_RESEED) {
            self.reseed_from_pools(!readiness.contains(Readiness::READY))?;
        }
        if self.cipher.is_none() {
            self.reseed_from_pools(true)?;
        }

        let burst = self.config.max_words_per_burst;
        let mut out = Vec::with_capacity(n.div_ceil(4) * 4);
        let mut since_gate = 0;
        while out.len() < n {
            if since_gate >= burst {
                self.gate()?;
                since_gate = 0;
            }
            out.extend_from_slice(&self.generate_block()?);
            since_gate += 4;
        }
        self.gate()?;
        out.truncate(n);
        Ok(out)
    }

    /// One random word
    pub fn random_word(&mut self, paranoia: Option<usize>) -> Result<u32> {
        let words = self.random_words(1, paranoia)?;
        words.first().copied().ok_or(Error::Other {
            context: "random_word",
        })
    }

    fn cipher(&self) -> Result<&Aes> {
        self.cipher.as_ref().ok_or(Error::GeneratorNotReady {
            required_bits: 0,
            available_bits: 0,
        })
    }

    /// Increment the low three counter words with carry; the top word is fixed
    fn step_counter(&mut self) {
        for word in self.counter.iter_mut().take(3) {
            *word = word.wrapping_add(1);
            if *word != 0 {
                break;
            }
        }
    }

    /// Bump the counter and encrypt it
    fn generate_block(&mut self) -> Result<[u32; 4]> {
        self.step_counter();
        let block = *self.counter;
        Ok(self.cipher()?.encrypt_words(&block))
    }

    /// Replace the key with fresh output
    fn gate(&mut self) -> Result<()> {
        let mut key = SecretWords::<GENERATOR_KEY_WORDS>::zeroed();
        key[..4].copy_from_slice(&self.generate_block()?);
        key[4..].copy_from_slice(&self.generate_block()?);
        self.cipher = Some(Aes::from_words(&key[..])?);
        self.key = key;
        trace!("generator gated");
        Ok(())
    }

    /// Hash `seed` into the key and step the counter
    fn reseed(&mut self, seed: &[u32]) -> Result<()> {
        let mut material = Vec::with_capacity(GENERATOR_KEY_WORDS + seed.len());
        material.extend_from_slice(&self.key[..]);
        material.extend_from_slice(seed);
        self.key = SecretWords::new(Sha256::hash_words_big_endian(&material));
        material.fill(0);
        self.cipher = Some(Aes::from_words(&self.key[..])?);
        self.step_counter();
        Ok(())
    }

    /// Drain pools into a reseed
    ///
    /// Pool `i` takes part when the low `i` bits of the reseed counter are
    /// all set; `full` drains every pool regardless.
    fn reseed_from_pools(&mut self, full: bool) -> Result<()> {
        self.next_reseed = self.clock.now_ms() + self.config.reseed_interval_ms;

        let mut seed = Vec::new();
        let mut strength = 0u32;
        let mut drained = 0;
        for i in 0..self.pools.len() {
            strength = strength.saturating_add(self.pools.drain_into(i, &mut seed));
            drained += 1;
            let bit = 1u64.checked_shl(i as u32).unwrap_or(0);
            if !full && self.reseed_count & bit != 0 {
                break;
            }
        }

        let threshold = 1u64.checked_shl(self.pools.len() as u32).unwrap_or(u64::MAX);
        if self.reseed_count >= threshold {
            self.pools.grow();
        }

        self.pool_strength = self.pool_strength.saturating_sub(strength);
        self.strength = self.strength.max(strength);
        self.reseed_count += 1;
        let result = self.reseed(&seed);
        seed.fill(0);
        debug!(
            "reseed {} drained {} pools, {} bits",
            self.reseed_count, drained, strength
        );
        result
    }

    /// Listen for `kind` events
    pub fn subscribe<F>(&mut self, kind: EventKind, callback: F) -> ListenerId
    where
        F: FnMut(&RandomEvent) + Send + 'static,
    {
        self.listeners.subscribe(kind, Box::new(callback))
    }

    /// Remove a listener; `false` if it was already gone
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Add a collector; it is only polled while collection is started
    pub fn register_collector(&mut self, collector: Box<dyn EntropyCollector>) {
        self.collectors.push(collector);
    }

    /// Begin polling collectors
    pub fn start_collectors(&mut self) {
        if !self.collecting {
            debug!("starting {} entropy collectors", self.collectors.len());
            self.collecting = true;
        }
    }

    /// Stop polling collectors
    pub fn stop_collectors(&mut self) {
        if self.collecting {
            debug!("stopping entropy collectors");
            self.collecting = false;
        }
    }

    /// Whether collection is started
    pub fn collectors_started(&self) -> bool {
        self.collecting
    }

    /// Pull one sample from each collector; returns how many were mixed
    pub fn poll_collectors(&mut self) -> usize {
        if !self.collecting {
            return 0;
        }
        let mut collectors = std::mem::take(&mut self.collectors);
        let mut mixed = 0;
        for collector in collectors.iter_mut() {
            let name = collector.name().to_owned();
            match collector.collect() {
                Ok(Some((sample, bits))) => {
                    self.add_entropy(sample, bits, Some(&name));
                    mixed += 1;
                }
                Ok(None) => trace!("collector {} had nothing", name),
                Err(e) => warn!("entropy collector {} failed: {}", name, e),
            }
        }
        trace!("polled {} collectors, {} samples mixed", collectors.len(), mixed);
        collectors.append(&mut self.collectors);
        self.collectors = collectors;
        mixed
    }
}

impl std::fmt::Debug for Fortuna {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Fortuna")
            .field("config", &self.config)
            .field("pools", &self.pools.len())
            .field("reseed_count", &self.reseed_count)
            .field("strength", &self.strength)
            .field("pool_strength", &self.pool_strength)
            .field("listeners", &self.listeners)
            .field("collectors", &self.collectors.len())
            .finish_non_exhaustive()
    }
}
