//! Bivariate normal sample synthesis for the scatter panel

use crate::output::ScatterSamples;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

/// Default number of scatter sample pairs
pub const DEFAULT_SAMPLES: usize = 1000;

/// Generates `n` standard-normal coordinate pairs
///
/// All x coordinates are drawn before the y coordinates, so extending `n`
/// changes both series rather than shifting one into the other.
pub fn generate(seed: u64, n: usize) -> Result<ScatterSamples, String> {
    let normal =
        Normal::new(0.0, 1.0).map_err(|e| format!("Invalid sample distribution: {}", e))?;
    let mut rng = StdRng::seed_from_u64(seed);

    let xs: Vec<f64> = (0..n).map(|_| normal.sample(&mut rng)).collect();
    let ys: Vec<f64> = (0..n).map(|_| normal.sample(&mut rng)).collect();

    Ok(ScatterSamples { xs, ys })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_sample_counts() {
        let samples = generate(19680801, DEFAULT_SAMPLES).unwrap();

        assert_eq!(samples.xs.len(), DEFAULT_SAMPLES);
        assert_eq!(samples.ys.len(), DEFAULT_SAMPLES);
    }

    #[test]
    fn test_generate_is_deterministic() {
        let first = generate(7, 100).unwrap();
        let second = generate(7, 100).unwrap();

        assert_eq!(first.xs, second.xs);
        assert_eq!(first.ys, second.ys);
    }

    #[test]
    fn test_generate_axes_differ() {
        let samples = generate(7, 100).unwrap();
        assert_ne!(samples.xs, samples.ys);
    }

    #[test]
    fn test_generate_plausible_moments() {
        let samples = generate(19680801, DEFAULT_SAMPLES).unwrap();

        let mean: f64 = samples.xs.iter().sum::<f64>() / samples.xs.len() as f64;
        let variance: f64 = samples
            .xs
            .iter()
            .map(|x| (x - mean) * (x - mean))
            .sum::<f64>()
            / samples.xs.len() as f64;

        // Loose sanity bounds for 1000 standard-normal draws
        assert!(mean.abs() < 0.2, "mean {} too far from 0", mean);
        assert!(
            variance > 0.64 && variance < 1.44,
            "variance {} implausible for unit normal",
            variance
        );
    }
}
