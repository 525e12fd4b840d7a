//! Statistical convergence tests for the dart-throwing kernel.
//!
//! These tests verify that the estimate converges to π at the rate promised
//! by the standard error, for several thread counts and both generators.
//!
//! # Test Categories
//!
//! 1. **Accuracy**: |π̂ − π| < 0.01 for N = 10^7 in at least 19 of 20 trials
//! 2. **Thread-count robustness**: the same holds for T = 1 and T = 8
//! 3. **Error scaling**: the observed error stays within a few standard errors

use std::f64::consts::PI;

use approx::assert_abs_diff_eq;
use pi_kernel::mc::{expected_std_error, HitSampler, Partition, SamplerConfig};
use pi_kernel::rng::GeneratorKind;

const TOLERANCE: f64 = 0.01;
const TRIALS: u64 = 20;
const REQUIRED_PASSES: usize = 19;

fn estimate(threads: usize, tosses: u64, seed: u64, generator: GeneratorKind) -> f64 {
    let config = SamplerConfig::builder()
        .threads(threads)
        .tosses(tosses)
        .seed(seed)
        .generator(generator)
        .build()
        .unwrap();
    HitSampler::new(config).run().unwrap().estimate().value()
}

fn passes_within_tolerance(threads: usize, generator: GeneratorKind) -> usize {
    (1..=TRIALS)
        .map(|seed| estimate(threads, 10_000_000, seed, generator))
        .filter(|pi_hat| (pi_hat - PI).abs() < TOLERANCE)
        .count()
}

// ============================================================================
// Accuracy and Thread-Count Robustness
// ============================================================================

#[test]
fn test_convergence_single_thread() {
    let passes = passes_within_tolerance(1, GeneratorKind::Lcg31);
    assert!(
        passes >= REQUIRED_PASSES,
        "only {} of {} trials within {}",
        passes,
        TRIALS,
        TOLERANCE
    );
}

#[test]
fn test_convergence_eight_threads() {
    let passes = passes_within_tolerance(8, GeneratorKind::Lcg31);
    assert!(
        passes >= REQUIRED_PASSES,
        "only {} of {} trials within {}",
        passes,
        TRIALS,
        TOLERANCE
    );
}

#[test]
fn test_convergence_lehmer_generator() {
    let passes = passes_within_tolerance(8, GeneratorKind::Lehmer);
    assert!(passes >= REQUIRED_PASSES);
}

#[test]
fn test_million_tosses_four_threads() {
    let pi_hat = estimate(4, 1_000_000, 1, GeneratorKind::Lcg31);
    assert_abs_diff_eq!(pi_hat, PI, epsilon = TOLERANCE);
}

// ============================================================================
// Error Scaling
// ============================================================================

/// The error at each sample size should stay within five standard errors.
#[test]
fn test_error_within_standard_error_band() {
    for tosses in [10_000u64, 100_000, 1_000_000, 10_000_000] {
        let pi_hat = estimate(4, tosses, 7, GeneratorKind::Lcg31);
        let band = 5.0 * expected_std_error(tosses);
        assert!(
            (pi_hat - PI).abs() < band,
            "N={} estimate {} outside ±{}",
            tosses,
            pi_hat,
            band
        );
    }
}

/// Chunked partitioning is as accurate as contiguous partitioning.
#[test]
fn test_chunked_partition_convergence() {
    let config = SamplerConfig::builder()
        .threads(8)
        .tosses(10_000_000)
        .partition(Partition::chunked())
        .build()
        .unwrap();
    let pi_hat = HitSampler::new(config).run().unwrap().estimate().value();
    assert_abs_diff_eq!(pi_hat, PI, epsilon = TOLERANCE);
}
