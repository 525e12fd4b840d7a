//! 31-bit linear congruential generator.
//!
//! The recurrence is `s' = (1103515245 * s + 12345) mod 2^31`, which has full
//! period 2^31. Because 2^31 divides 2^32, the step is computed with wrapping
//! 32-bit arithmetic followed by a mask.

use rand::{RngCore, SeedableRng};

use super::source::UniformSource;

/// Multiplier `a` of the recurrence.
pub const LCG_MULTIPLIER: u32 = 1_103_515_245;

/// Increment `c` of the recurrence.
pub const LCG_INCREMENT: u32 = 12_345;

/// Modulus `m = 2^31` of the recurrence.
pub const LCG_MODULUS: u64 = 1 << 31;

/// Mask reducing a wrapped 32-bit product modulo 2^31.
pub const LCG_MASK: u32 = 0x7FFF_FFFF;

/// Advances `state` in place and returns the new word.
///
/// The returned word is always below [`LCG_MODULUS`]. Any `u32` is accepted
/// as input state; bit 31 is discarded by the reduction.
///
/// # Examples
///
/// ```rust
/// use pi_kernel::rng::lcg::next_int;
///
/// let mut state = 0u32;
/// assert_eq!(next_int(&mut state), 12_345);
/// assert_eq!(state, 12_345);
/// ```
#[inline]
pub fn next_int(state: &mut u32) -> u32 {
    *state = state
        .wrapping_mul(LCG_MULTIPLIER)
        .wrapping_add(LCG_INCREMENT)
        & LCG_MASK;
    *state
}

/// Advances `state` and returns a value in `[0, 1)`.
///
/// The value is `next_int(state) / 2^31`; the largest possible result is
/// `(2^31 - 1) / 2^31`, strictly below 1.0.
#[inline]
pub fn next_unit(state: &mut u32) -> f64 {
    next_int(state) as f64 / LCG_MODULUS as f64
}

/// An owned 31-bit LCG stream.
///
/// # Examples
///
/// ```rust
/// use pi_kernel::rng::{Lcg31, UniformSource};
///
/// let mut a = Lcg31::new(7);
/// let mut b = Lcg31::new(7);
/// assert_eq!(a.next_unit(), b.next_unit());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lcg31 {
    state: u32,
}

impl Lcg31 {
    /// Creates a stream whose first draw is `next_int(seed)`.
    #[inline]
    pub fn new(seed: u32) -> Self {
        Self {
            state: seed & LCG_MASK,
        }
    }

    /// Returns the current state word.
    #[inline]
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl UniformSource for Lcg31 {
    const MODULUS: u64 = LCG_MODULUS;

    #[inline]
    fn next_int(&mut self) -> u32 {
        next_int(&mut self.state)
    }

    #[inline]
    fn next_unit(&mut self) -> f64 {
        next_unit(&mut self.state)
    }
}

impl RngCore for Lcg31 {
    /// Builds 32 bits from the upper 16 bits of two consecutive words; the
    /// low bits of a power-of-two LCG have short periods.
    #[inline]
    fn next_u32(&mut self) -> u32 {
        let hi = next_int(&mut self.state) >> 15;
        let lo = next_int(&mut self.state) >> 15;
        (hi << 16) | lo
    }

    #[inline]
    fn next_u64(&mut self) -> u64 {
        let hi = u64::from(self.next_u32());
        let lo = u64::from(self.next_u32());
        (hi << 32) | lo
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut chunks = dest.chunks_exact_mut(4);
        for chunk in chunks.by_ref() {
            chunk.copy_from_slice(&self.next_u32().to_le_bytes());
        }
        let rest = chunks.into_remainder();
        if !rest.is_empty() {
            let bytes = self.next_u32().to_le_bytes();
            rest.copy_from_slice(&bytes[..rest.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Lcg31 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_int_known_sequence() {
        let mut state = 1u32;
        assert_eq!(next_int(&mut state), 1_103_527_590);
        assert_eq!(next_int(&mut state), 377_401_575);
        assert_eq!(next_int(&mut state), 662_824_084);
    }

    #[test]
    fn test_next_int_ignores_high_bit() {
        let mut low = 5u32;
        let mut high = 5u32 | 0x8000_0000;
        assert_eq!(next_int(&mut low), next_int(&mut high));
    }

    #[test]
    fn test_next_unit_extremes() {
        // Predecessor of the largest word 2^31 - 1
        let mut state = 230_538_014u32;
        let u = next_unit(&mut state);
        assert_eq!(state, LCG_MASK);
        assert!(u < 1.0);

        // Predecessor of zero
        let mut state = 2_088_216_195u32;
        assert_eq!(next_unit(&mut state), 0.0);
    }

    #[test]
    fn test_stream_matches_free_functions() {
        let mut raw = 99u32;
        let mut stream = Lcg31::new(99);
        for _ in 0..100 {
            assert_eq!(next_int(&mut raw), stream.next_int());
        }
        assert_eq!(raw, stream.state());
    }

    #[test]
    fn test_fill_bytes_handles_remainder() {
        let mut rng = Lcg31::new(3);
        let mut buffer = [0u8; 7];
        rng.fill_bytes(&mut buffer);
        assert!(buffer.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_from_seed_little_endian() {
        let rng = Lcg31::from_seed(42u32.to_le_bytes());
        assert_eq!(rng.state(), 42);
    }
}
