//! # Pi Kernel (Layer K: Sampling Kernel)
//!
//! Estimates π by Monte Carlo dart throwing: uniform points in the unit
//! square are tested against the quarter unit disk, and four times the hit
//! fraction converges to π.
//!
//! ## Contents
//!
//! - [`rng`]: Deterministic state-word generators and the stream seeding function
//! - [`mc`]: Partitioning, the parallel hit counter and the statistical contract
//!
//! ## Usage Example
//!
//! ```rust
//! use pi_kernel::mc::{HitSampler, SamplerConfig};
//!
//! let config = SamplerConfig::builder()
//!     .threads(4)
//!     .tosses(1_000_000)
//!     .build()
//!     .unwrap();
//!
//! let outcome = HitSampler::new(config).run().unwrap();
//! let estimate = outcome.estimate();
//! assert!(estimate.abs_error() < 0.01);
//! ```
//!
//! ## Determinism
//!
//! For a fixed thread count, toss count, base seed, generator and partition
//! the hit count is bit-identical across runs and machines. Changing the
//! thread count changes the stream assignment under contiguous partitioning
//! but not under chunked partitioning.

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod mc;
pub mod rng;

// Re-export commonly used items for convenience
pub use mc::{count_hits, HitSampler, KernelError, PiEstimate, SampleOutcome, SamplerConfig};
pub use rng::{GeneratorKind, UniformSource};
