//! Sampler configuration.
//!
//! This module provides the immutable run parameters of the kernel and a
//! builder that validates them.

use std::fmt;

use super::error::ConfigError;
use crate::rng::seed::{DEFAULT_BASE_SEED, MAX_STREAMS};
use crate::rng::GeneratorKind;

/// Largest accepted toss count (`i64::MAX`).
pub const MAX_TOSSES: u64 = i64::MAX as u64;

/// Default chunk size for [`Partition::Chunked`].
pub const DEFAULT_CHUNK_SIZE: u64 = 1 << 16;

/// Largest number of chunks; each chunk consumes two seeder streams.
pub const MAX_CHUNKS: u64 = MAX_STREAMS / 2;

/// Largest thread count under contiguous partitioning; each worker consumes
/// two seeder streams.
pub const MAX_THREADS: usize = MAX_CHUNKS as usize;

/// How the toss range is divided among workers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Partition {
    /// One contiguous range per worker; sizes differ by at most one.
    ///
    /// Worker `w` draws from stream pair `w`, so the exact hit count depends
    /// on the thread count.
    #[default]
    Contiguous,

    /// Fixed-size chunks scheduled dynamically by work stealing.
    ///
    /// Chunk `k` draws from stream pair `k`, so the exact hit count does not
    /// depend on the thread count.
    Chunked {
        /// Tosses per chunk (the final chunk may be shorter).
        chunk_size: u64,
    },
}

impl Partition {
    /// Chunked partition with [`DEFAULT_CHUNK_SIZE`].
    #[inline]
    pub fn chunked() -> Self {
        Partition::Chunked {
            chunk_size: DEFAULT_CHUNK_SIZE,
        }
    }
}

impl fmt::Display for Partition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Partition::Contiguous => f.write_str("contiguous"),
            Partition::Chunked { chunk_size } => write!(f, "chunked({})", chunk_size),
        }
    }
}

/// Sampler configuration.
///
/// Immutable for the duration of one run. Use [`SamplerConfigBuilder`] to
/// construct instances.
///
/// # Examples
///
/// ```rust
/// use pi_kernel::mc::{Partition, SamplerConfig};
///
/// let config = SamplerConfig::builder()
///     .threads(4)
///     .tosses(1_000_000)
///     .seed(42)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.threads(), 4);
/// assert_eq!(config.tosses(), 1_000_000);
/// assert_eq!(config.partition(), Partition::Contiguous);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Number of logical workers (T).
    threads: usize,
    /// Number of trials (N).
    tosses: u64,
    /// Base seed handed to the stream seeder.
    seed: u64,
    /// Generator used for every stream.
    generator: GeneratorKind,
    /// Work division policy.
    partition: Partition,
    /// Whether the pool size is capped at the hardware parallelism.
    cap_to_hardware: bool,
}

impl SamplerConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SamplerConfigBuilder {
        SamplerConfigBuilder::default()
    }

    /// Returns the thread count T.
    #[inline]
    pub fn threads(&self) -> usize {
        self.threads
    }

    /// Returns the toss count N.
    #[inline]
    pub fn tosses(&self) -> u64 {
        self.tosses
    }

    /// Returns the base seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the generator kind.
    #[inline]
    pub fn generator(&self) -> GeneratorKind {
        self.generator
    }

    /// Returns the partition policy.
    #[inline]
    pub fn partition(&self) -> Partition {
        self.partition
    }

    /// Returns whether the pool is capped at the hardware parallelism.
    #[inline]
    pub fn cap_to_hardware(&self) -> bool {
        self.cap_to_hardware
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if:
    /// - `threads` is 0
    /// - `tosses` exceeds `i64::MAX`
    /// - a contiguous partition asks for more than [`MAX_THREADS`] workers
    /// - a chunked partition has chunk size 0 or yields more than
    ///   [`MAX_CHUNKS`] chunks
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.threads == 0 {
            return Err(ConfigError::InvalidThreadCount(self.threads));
        }
        if self.tosses > MAX_TOSSES {
            return Err(ConfigError::TossCountTooLarge(self.tosses));
        }
        if let Partition::Chunked { chunk_size } = self.partition {
            if chunk_size == 0 {
                return Err(ConfigError::InvalidChunkSize(chunk_size));
            }
            if self.tosses.div_ceil(chunk_size) > MAX_CHUNKS {
                return Err(ConfigError::TooManyChunks {
                    tosses: self.tosses,
                    chunk_size,
                    limit: MAX_CHUNKS,
                });
            }
        } else if self.threads > MAX_THREADS {
            return Err(ConfigError::TooManyThreads {
                threads: self.threads,
                limit: MAX_THREADS,
            });
        }
        Ok(())
    }
}

/// Builder for [`SamplerConfig`].
///
/// `threads` and `tosses` are required; everything else has a default.
#[derive(Clone, Debug, Default)]
pub struct SamplerConfigBuilder {
    threads: Option<usize>,
    tosses: Option<u64>,
    seed: Option<u64>,
    generator: GeneratorKind,
    partition: Partition,
    cap_to_hardware: bool,
}

impl SamplerConfigBuilder {
    /// Sets the thread count T (at least 1).
    #[inline]
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = Some(threads);
        self
    }

    /// Sets the toss count N (at most `i64::MAX`).
    #[inline]
    pub fn tosses(mut self, tosses: u64) -> Self {
        self.tosses = Some(tosses);
        self
    }

    /// Sets the base seed (default 1).
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the generator (default [`GeneratorKind::Lcg31`]).
    #[inline]
    pub fn generator(mut self, generator: GeneratorKind) -> Self {
        self.generator = generator;
        self
    }

    /// Sets the partition policy (default [`Partition::Contiguous`]).
    #[inline]
    pub fn partition(mut self, partition: Partition) -> Self {
        self.partition = partition;
        self
    }

    /// Caps the pool size at the number of logical CPUs.
    ///
    /// The work division still uses the requested thread count, so results
    /// do not depend on the machine.
    #[inline]
    pub fn cap_to_hardware(mut self, cap: bool) -> Self {
        self.cap_to_hardware = cap;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a required parameter is missing or any value
    /// is invalid; see [`SamplerConfig::validate`].
    pub fn build(self) -> Result<SamplerConfig, ConfigError> {
        let threads = self
            .threads
            .ok_or(ConfigError::MissingParameter { name: "threads" })?;
        let tosses = self
            .tosses
            .ok_or(ConfigError::MissingParameter { name: "tosses" })?;

        let config = SamplerConfig {
            threads,
            tosses,
            seed: self.seed.unwrap_or(DEFAULT_BASE_SEED),
            generator: self.generator,
            partition: self.partition,
            cap_to_hardware: self.cap_to_hardware,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_builder_defaults() {
        let config = SamplerConfig::builder()
            .threads(2)
            .tosses(100)
            .build()
            .unwrap();

        assert_eq!(config.threads(), 2);
        assert_eq!(config.tosses(), 100);
        assert_eq!(config.seed(), DEFAULT_BASE_SEED);
        assert_eq!(config.generator(), GeneratorKind::Lcg31);
        assert_eq!(config.partition(), Partition::Contiguous);
        assert!(!config.cap_to_hardware());
    }

    #[test]
    fn test_config_zero_tosses_is_valid() {
        let config = SamplerConfig::builder().threads(1).tosses(0).build();
        assert!(config.is_ok());
    }

    #[test]
    fn test_config_invalid_zero_threads() {
        let result = SamplerConfig::builder().threads(0).tosses(10).build();
        assert!(matches!(result, Err(ConfigError::InvalidThreadCount(0))));
    }

    #[test]
    fn test_config_too_many_threads() {
        let ok = SamplerConfig::builder().threads(MAX_THREADS).tosses(10).build();
        assert!(ok.is_ok());

        let result = SamplerConfig::builder()
            .threads(MAX_THREADS + 1)
            .tosses(10)
            .build();
        assert_eq!(
            result,
            Err(ConfigError::TooManyThreads {
                threads: MAX_THREADS + 1,
                limit: MAX_THREADS,
            })
        );
        let message = result.unwrap_err().to_string();
        assert!(message.contains("1073741825"));
        assert!(!message.contains("at least 1"));
    }

    #[test]
    fn test_config_toss_count_limit() {
        let ok = SamplerConfig::builder().threads(1).tosses(MAX_TOSSES).build();
        assert!(ok.is_ok());

        let result = SamplerConfig::builder()
            .threads(1)
            .tosses(MAX_TOSSES + 1)
            .build();
        assert!(matches!(result, Err(ConfigError::TossCountTooLarge(_))));
    }

    #[test]
    fn test_config_invalid_chunk_size() {
        let result = SamplerConfig::builder()
            .threads(1)
            .tosses(10)
            .partition(Partition::Chunked { chunk_size: 0 })
            .build();
        assert!(matches!(result, Err(ConfigError::InvalidChunkSize(0))));
    }

    #[test]
    fn test_config_too_many_chunks() {
        let result = SamplerConfig::builder()
            .threads(1)
            .tosses(MAX_TOSSES)
            .partition(Partition::Chunked { chunk_size: 1 })
            .build();
        assert!(matches!(result, Err(ConfigError::TooManyChunks { .. })));
    }

    #[test]
    fn test_config_missing_parameters() {
        let result = SamplerConfig::builder().tosses(10).build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingParameter { name: "threads" })
        ));

        let result = SamplerConfig::builder().threads(1).build();
        assert!(matches!(
            result,
            Err(ConfigError::MissingParameter { name: "tosses" })
        ));
    }

    #[test]
    fn test_partition_display() {
        assert_eq!(Partition::Contiguous.to_string(), "contiguous");
        assert_eq!(Partition::chunked().to_string(), "chunked(65536)");
    }
}
