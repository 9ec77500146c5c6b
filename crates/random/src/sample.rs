//! Entropy samples and the crude entropy estimator

use crypad_params::utils::random::{SAMPLE_TYPE_TEXT, SAMPLE_TYPE_WORD, SAMPLE_TYPE_WORDS};

/// One piece of entropy handed to the generator
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntropySample {
    /// A single 32-bit value
    Word(u32),
    /// Several 32-bit values
    Words(Vec<u32>),
    /// Free text, mixed as UTF-8
    Text(String),
}

impl EntropySample {
    /// Type tag mixed into the pool header
    pub(crate) fn type_tag(&self) -> u32 {
        match self {
            EntropySample::Word(_) => SAMPLE_TYPE_WORD,
            EntropySample::Words(_) => SAMPLE_TYPE_WORDS,
            EntropySample::Text(_) => SAMPLE_TYPE_TEXT,
        }
    }

    /// Length field of the pool header: words, or characters for text
    pub(crate) fn header_len(&self) -> u32 {
        match self {
            EntropySample::Word(_) => 1,
            EntropySample::Words(words) => words.len() as u32,
            EntropySample::Text(text) => text.chars().count() as u32,
        }
    }

    /// Crude estimate used when the caller gives none
    ///
    /// Words count their bit length; text counts one bit per character.
    pub fn estimate_bits(&self) -> u32 {
        match self {
            EntropySample::Word(word) => bit_length(*word),
            EntropySample::Words(words) => words
                .iter()
                .fold(0u32, |acc, w| acc.saturating_add(bit_length(*w))),
            EntropySample::Text(text) => text.chars().count() as u32,
        }
    }
}

impl From<u32> for EntropySample {
    fn from(word: u32) -> Self {
        EntropySample::Word(word)
    }
}

impl From<Vec<u32>> for EntropySample {
    fn from(words: Vec<u32>) -> Self {
        EntropySample::Words(words)
    }
}

impl From<&str> for EntropySample {
    fn from(text: &str) -> Self {
        EntropySample::Text(text.to_owned())
    }
}

fn bit_length(word: u32) -> u32 {
    32 - word.leading_zeros()
}
