// src/statistics.rs
use statrs::distribution::{ChiSquared, ContinuousCDF};

/// Result of a byte-frequency chi-square test
#[derive(Debug)]
pub struct FrequencyAnalysis {
    pub samples: usize,
    pub chi_square: f64,
    pub degrees_of_freedom: f64,
    pub p_value: f64,
}

impl FrequencyAnalysis {
    /// Whether uniformity survives at significance `alpha`
    pub fn is_uniform(&self, alpha: f64) -> bool {
        self.p_value > alpha
    }
}

/// Count each byte value and compare against a flat distribution
pub fn byte_frequency(bytes: &[u8]) -> FrequencyAnalysis {
    let mut counts = [0u64; 256];
    for &b in bytes {
        counts[b as usize] += 1;
    }

    let expected = bytes.len() as f64 / 256.0;
    let chi_square: f64 = counts
        .iter()
        .map(|&observed| {
            let d = observed as f64 - expected;
            d * d / expected
        })
        .sum();

    let degrees_of_freedom = 255.0;
    FrequencyAnalysis {
        samples: bytes.len(),
        chi_square,
        degrees_of_freedom,
        p_value: upper_tail(chi_square, degrees_of_freedom),
    }
}

/// Fraction of set bits, ideally close to one half
pub fn bit_balance(bytes: &[u8]) -> f64 {
    let ones: u32 = bytes.iter().map(|b| b.count_ones()).sum();
    f64::from(ones) / (bytes.len() as f64 * 8.0)
}

fn upper_tail(statistic: f64, df: f64) -> f64 {
    match ChiSquared::new(df) {
        Ok(dist) => (1.0 - dist.cdf(statistic)).clamp(0.0, 1.0),
        // Only reachable for a non-positive df
        Err(_) => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flat_input_is_uniform() {
        let bytes: Vec<u8> = (0..256 * 40).map(|i| (i % 256) as u8).collect();
        let analysis = byte_frequency(&bytes);
        assert_eq!(analysis.chi_square, 0.0);
        assert!(analysis.is_uniform(0.01));
    }

    #[test]
    fn constant_input_is_not_uniform() {
        let analysis = byte_frequency(&[0x41; 4096]);
        assert!(!analysis.is_uniform(0.01));
        assert_eq!(bit_balance(&[0xff; 8]), 1.0);
    }
}
