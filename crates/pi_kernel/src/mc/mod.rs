//! Monte Carlo dart-throwing kernel.
//!
//! This module partitions N independent trials across T workers, gives each
//! worker its own PRNG streams and reduces the per-worker hit counts.
//!
//! # Architecture
//!
//! ```text
//! HitSampler
//! ├── SamplerConfig   (T, N, seed, generator, partition)
//! ├── StreamSeeder    (stream index -> initial state)
//! ├── partition       (contiguous ranges or fixed chunks)
//! └── Orchestration
//!     ├── count_range()   sequential per-worker loop
//!     ├── rayon pool      exactly T threads
//!     └── reduce          u64 addition of partial counts
//! ```
//!
//! # Examples
//!
//! ## Canonical policy
//!
//! ```rust
//! use pi_kernel::mc::count_hits;
//!
//! let tosses = 200_000;
//! let hits = count_hits(tosses, 4).unwrap();
//! let pi = 4.0 * hits as f64 / tosses as f64;
//! assert!((pi - std::f64::consts::PI).abs() < 0.05);
//! ```
//!
//! ## Configured run with statistics
//!
//! ```rust
//! use pi_kernel::mc::{HitSampler, Partition, SamplerConfig, Z_95};
//! use pi_kernel::rng::GeneratorKind;
//!
//! let config = SamplerConfig::builder()
//!     .threads(4)
//!     .tosses(500_000)
//!     .seed(2024)
//!     .generator(GeneratorKind::Lehmer)
//!     .partition(Partition::chunked())
//!     .build()
//!     .unwrap();
//!
//! let outcome = HitSampler::new(config).run().unwrap();
//! let estimate = outcome.estimate();
//! let (lo, hi) = estimate.confidence_interval(Z_95);
//! println!("pi ~ {:.6} in [{:.6}, {:.6}]", estimate.value(), lo, hi);
//! ```

pub mod config;
pub mod error;
pub mod estimate;
pub mod partition;
pub mod sampler;

// Re-exports for convenient access
pub use config::{
    Partition, SamplerConfig, SamplerConfigBuilder, DEFAULT_CHUNK_SIZE, MAX_THREADS, MAX_TOSSES,
};
pub use error::{ConfigError, KernelError};
pub use estimate::{
    expected_std_error, required_tosses, PiEstimate, QUARTER_DISK_PROBABILITY, Z_95, Z_99,
};
pub use partition::{chunk_count, chunk_range, even_range, split_even};
pub use sampler::{count_hits, count_range, HitSampler, SampleOutcome};
