//! Multiplicative congruential (Lehmer) generator.
//!
//! `s' = 279470273 * s mod 4294967291`, the generator shipped with the classic
//! parallel-programming `my_rand` routine. The modulus is prime and the
//! multiplier a primitive root, so every non-zero state lies on a single cycle
//! of length `m - 1`. Zero is a fixed point and must never be used as a state.

use rand::{RngCore, SeedableRng};

use super::source::UniformSource;

/// Multiplier `a` of the recurrence.
pub const LEHMER_MULTIPLIER: u64 = 279_470_273;

/// Prime modulus `m = 2^32 - 5`.
pub const LEHMER_MODULUS: u64 = 4_294_967_291;

/// Advances `state` in place and returns the new word.
///
/// The product fits in a `u64` for every `u32` state. A zero state stays at
/// zero; use [`Lehmer::new`] to obtain a valid stream from an arbitrary seed.
#[inline]
pub fn next_int(state: &mut u32) -> u32 {
    *state = ((u64::from(*state) * LEHMER_MULTIPLIER) % LEHMER_MODULUS) as u32;
    *state
}

/// Advances `state` and returns a value in `[0, 1)`.
///
/// For a non-zero state the value lies in the open interval `(0, 1)`.
#[inline]
pub fn next_unit(state: &mut u32) -> f64 {
    next_int(state) as f64 / LEHMER_MODULUS as f64
}

/// An owned Lehmer stream with a guaranteed non-zero state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lehmer {
    state: u32,
}

impl Lehmer {
    /// Creates a stream from an arbitrary seed.
    ///
    /// The seed is reduced modulo [`LEHMER_MODULUS`]; a residue of zero is
    /// replaced by 1.
    #[inline]
    pub fn new(seed: u32) -> Self {
        let reduced = (u64::from(seed) % LEHMER_MODULUS) as u32;
        Self {
            state: if reduced == 0 { 1 } else { reduced },
        }
    }

    /// Returns the current state word.
    #[inline]
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl UniformSource for Lehmer {
    const MODULUS: u64 = LEHMER_MODULUS;

    #[inline]
    fn next_int(&mut self) -> u32 {
        next_int(&mut self.state)
    }

    #[inline]
    fn next_unit(&mut self) -> f64 {
        next_unit(&mut self.state)
    }
}

impl RngCore for Lehmer {
    #[inline]
    fn next_u32(&mut self) -> u32 {
        next_int(&mut self.state)
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

impl SeedableRng for Lehmer {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}
