//! Property-based tests for streaming SHA-256

use crypad_algorithms::{HashFunction, Sha256};
use proptest::prelude::*;

proptest! {
    #[test]
    fn chunked_matches_one_shot(
        data in prop::collection::vec(any::<u8>(), 0..600),
        cuts in prop::collection::vec(any::<prop::sample::Index>(), 0..6),
    ) {
        let mut points: Vec<usize> = cuts.iter().map(|c| c.index(data.len() + 1)).collect();
        points.sort_unstable();

        let mut hasher = Sha256::new();
        let mut start = 0;
        for p in points {
            hasher.update(&data[start..p]);
            start = p;
        }
        hasher.update(&data[start..]);

        prop_assert_eq!(hasher.finalize_bytes(), Sha256::digest(&data));
    }

    #[test]
    fn big_endian_words_match_bytes(words in prop::collection::vec(any::<u32>(), 0..64)) {
        let bytes: Vec<u8> = words.iter().flat_map(|w| w.to_be_bytes()).collect();
        let digest = Sha256::hash_words_big_endian(&words);
        let expected: Vec<u8> = digest.iter().flat_map(|w| w.to_be_bytes()).collect();
        prop_assert_eq!(expected, Sha256::digest(&bytes).to_vec());
    }

    #[test]
    fn finalize_resets(data in prop::collection::vec(any::<u8>(), 0..200)) {
        let mut hasher = Sha256::new();
        hasher.update(b"stale state");
        hasher.finalize();
        hasher.update(&data);
        prop_assert_eq!(hasher.finalize_bytes(), Sha256::digest(&data));
    }
}
