//! Statistical smoke tests of generator output

use crypad_random::FortunaRng;
use crypad_tests::fixtures::seeded_generator;
use crypad_tests::statistics::{bit_balance, byte_frequency};
use rand::RngCore;

const SIGNIFICANCE: f64 = 0.001;

#[test]
fn generator_bytes_are_uniform() {
    let (mut generator, _) = seeded_generator(42);
    let mut bytes = vec![0u8; 256 * 1024];
    FortunaRng::new(&mut generator).fill_bytes(&mut bytes);

    let analysis = byte_frequency(&bytes);
    assert!(
        analysis.is_uniform(SIGNIFICANCE),
        "chi-square {:.1} on {} df, p = {:.5}",
        analysis.chi_square,
        analysis.degrees_of_freedom,
        analysis.p_value
    );

    let balance = bit_balance(&bytes);
    assert!((balance - 0.5).abs() < 0.005, "bit balance {}", balance);
}

#[test]
fn small_requests_are_uniform_too() {
    // Many short requests exercise the re-key after every request
    let (mut generator, _) = seeded_generator(7);
    let mut bytes = Vec::with_capacity(128 * 1024);
    for _ in 0..(128 * 1024 / 8) {
        let words = generator.random_words(2, None).unwrap();
        for w in words {
            bytes.extend_from_slice(&w.to_be_bytes());
        }
    }

    let analysis = byte_frequency(&bytes);
    assert!(analysis.is_uniform(SIGNIFICANCE), "{:?}", analysis);
}

#[test]
fn distinct_seeds_diverge() {
    let (mut a, _) = seeded_generator(1);
    let (mut b, _) = seeded_generator(2);
    let (mut c, _) = seeded_generator(1);
    let wa = a.random_words(16, None).unwrap();
    assert_ne!(wa, b.random_words(16, None).unwrap());
    assert_eq!(wa, c.random_words(16, None).unwrap());
}
