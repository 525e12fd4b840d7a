//! Statistical contract of the dart-throwing estimator.
//!
//! Each trial is a Bernoulli draw with success probability `p = π/4`. With
//! `N` trials the estimate `π̂ = 4·hits/N` is unbiased with standard error
//!
//! ```text
//! σ(π̂) = 4·√(p(1-p)/N) ≈ 1.642 / √N
//! ```
//!
//! so halving the error costs four times the tosses. [`required_tosses`]
//! inverts this relation for sample-size planning.

use std::f64::consts::PI;

use super::error::KernelError;

/// Probability that a uniform point in the unit square lands in the quarter disk.
pub const QUARTER_DISK_PROBABILITY: f64 = PI / 4.0;

/// Two-sided 95% normal quantile.
pub const Z_95: f64 = 1.959_963_984_540_054;

/// Two-sided 99% normal quantile.
pub const Z_99: f64 = 2.575_829_303_548_901;

/// Expected standard error of `π̂` for `tosses` trials.
///
/// Returns `f64::INFINITY` for zero tosses.
///
/// # Examples
///
/// ```rust
/// use pi_kernel::mc::expected_std_error;
///
/// let sigma = expected_std_error(1_000_000);
/// assert!((sigma - 0.001642).abs() < 1e-5);
/// ```
#[inline]
pub fn expected_std_error(tosses: u64) -> f64 {
    if tosses == 0 {
        return f64::INFINITY;
    }
    let p = QUARTER_DISK_PROBABILITY;
    4.0 * (p * (1.0 - p) / tosses as f64).sqrt()
}

/// Smallest toss count whose `z`-sigma half-width is at most `tolerance`.
///
/// # Errors
///
/// Returns [`KernelError::InvalidTolerance`] unless both arguments are
/// positive and finite.
///
/// # Examples
///
/// ```rust
/// use pi_kernel::mc::{required_tosses, Z_95};
///
/// // ±0.01 at 95% confidence needs roughly a hundred thousand tosses
/// let n = required_tosses(0.01, Z_95).unwrap();
/// assert!(n > 100_000 && n < 110_000);
/// ```
pub fn required_tosses(tolerance: f64, z: f64) -> Result<u64, KernelError> {
    let valid = |v: f64| v.is_finite() && v > 0.0;
    if !valid(tolerance) || !valid(z) {
        return Err(KernelError::InvalidTolerance { tolerance, z });
    }
    let p = QUARTER_DISK_PROBABILITY;
    let sigma_one = 4.0 * (p * (1.0 - p)).sqrt();
    let n = (z * sigma_one / tolerance).powi(2).ceil();
    Ok(if n >= u64::MAX as f64 { u64::MAX } else { n as u64 })
}

/// Result of a dart-throwing run: hit and toss counts plus derived statistics.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PiEstimate {
    hits: u64,
    tosses: u64,
}

impl PiEstimate {
    /// Wraps raw counts.
    ///
    /// `hits` must not exceed `tosses`.
    #[inline]
    pub fn from_counts(hits: u64, tosses: u64) -> Self {
        debug_assert!(hits <= tosses, "hits {} exceed tosses {}", hits, tosses);
        Self { hits, tosses }
    }

    /// Number of trials inside the quarter disk.
    #[inline]
    pub fn hits(&self) -> u64 {
        self.hits
    }

    /// Number of trials.
    #[inline]
    pub fn tosses(&self) -> u64 {
        self.tosses
    }

    /// Fraction of hits, `hits / N` (0.0 when `N = 0`).
    #[inline]
    pub fn hit_ratio(&self) -> f64 {
        if self.tosses == 0 {
            0.0
        } else {
            self.hits as f64 / self.tosses as f64
        }
    }

    /// The estimate `4·hits/N`, evaluated in double precision.
    ///
    /// Zero tosses yield 0.0 rather than NaN.
    #[inline]
    pub fn value(&self) -> f64 {
        if self.tosses == 0 {
            0.0
        } else {
            4.0 * self.hits as f64 / self.tosses as f64
        }
    }

    /// Sample standard error `4·√(p̂(1-p̂)/N)`.
    ///
    /// Returns `f64::INFINITY` when `N = 0`.
    pub fn std_error(&self) -> f64 {
        if self.tosses == 0 {
            return f64::INFINITY;
        }
        let p = self.hit_ratio();
        4.0 * (p * (1.0 - p) / self.tosses as f64).sqrt()
    }

    /// Normal-approximation confidence interval `value ± z·std_error`.
    pub fn confidence_interval(&self, z: f64) -> (f64, f64) {
        let half_width = z * self.std_error();
        (self.value() - half_width, self.value() + half_width)
    }

    /// Absolute distance from the true value of π.
    #[inline]
    pub fn abs_error(&self) -> f64 {
        (self.value() - PI).abs()
    }
}
