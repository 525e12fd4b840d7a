//! Uniform source abstraction shared by all generators.

use std::fmt;
use std::str::FromStr;

/// A deterministic stream of uniform variates driven by a single state word.
///
/// Implementors advance their state on every call. The default
/// [`next_unit`](UniformSource::next_unit) divides the integer word by the
/// generator modulus, so any generator whose words lie in `[0, MODULUS)`
/// yields values in the half-open interval `[0, 1)`.
pub trait UniformSource {
    /// Modulus of the underlying recurrence (exclusive upper bound of `next_int`).
    const MODULUS: u64;

    /// Advances the state in place and returns the new integer word.
    fn next_int(&mut self) -> u32;

    /// Returns the next value in `[0, 1)`.
    #[inline]
    fn next_unit(&mut self) -> f64 {
        self.next_int() as f64 / Self::MODULUS as f64
    }
}

/// Selects which generator the sampler instantiates for each stream.
///
/// Dispatch on this enum happens once per worker, outside the trial loop.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum GeneratorKind {
    /// 31-bit LCG (`a = 1103515245`, `c = 12345`, `m = 2^31`).
    #[default]
    Lcg31,
    /// Multiplicative generator (`a = 279470273`, `m = 4294967291`).
    Lehmer,
}

impl GeneratorKind {
    /// Returns the canonical lowercase name.
    pub fn as_str(&self) -> &'static str {
        match self {
            GeneratorKind::Lcg31 => "lcg31",
            GeneratorKind::Lehmer => "lehmer",
        }
    }
}

impl fmt::Display for GeneratorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown generator name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("Unknown generator '{0}'. Supported: lcg31, lehmer")]
pub struct UnknownGenerator(pub String);

impl FromStr for GeneratorKind {
    type Err = UnknownGenerator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lcg31" | "lcg" => Ok(GeneratorKind::Lcg31),
            "lehmer" | "my_rand" => Ok(GeneratorKind::Lehmer),
            other => Err(UnknownGenerator(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_kind_default() {
        assert_eq!(GeneratorKind::default(), GeneratorKind::Lcg31);
    }

    #[test]
    fn test_generator_kind_parse() {
        assert_eq!("lcg31".parse::<GeneratorKind>(), Ok(GeneratorKind::Lcg31));
        assert_eq!("LCG".parse::<GeneratorKind>(), Ok(GeneratorKind::Lcg31));
        assert_eq!(" lehmer ".parse::<GeneratorKind>(), Ok(GeneratorKind::Lehmer));
        assert!("xorshift".parse::<GeneratorKind>().is_err());
    }

    #[test]
    fn test_generator_kind_display_round_trip() {
        for kind in [GeneratorKind::Lcg31, GeneratorKind::Lehmer] {
            assert_eq!(kind.to_string().parse::<GeneratorKind>(), Ok(kind));
        }
    }
}
