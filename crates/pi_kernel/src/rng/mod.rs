//! # Random Number Generation Infrastructure
//!
//! This module provides the pseudo-random sources used by the dart-throwing
//! kernel. Every generator is driven by an explicit mutable state word so
//! that each worker can own an independent, reproducible stream.
//!
//! ## Design Rationale
//!
//! - **Reproducibility**: All streams are seeded; the same seed always yields
//!   the same sequence
//! - **Independence**: No process-global state; callers hold the state word
//! - **Static dispatch**: The sampler is generic over [`UniformSource`]; no
//!   `Box<dyn Trait>` in the trial loop
//! - **Cheapness**: One multiply, one add and one mask per draw (LCG)
//!
//! ## Module Structure
//!
//! - [`lcg`]: 31-bit linear congruential generator (the canonical stream)
//! - [`lehmer`]: 32-bit multiplicative congruential generator
//! - [`seed`]: Seeding function mapping a stream index to an initial state
//!
//! ## Usage Example
//!
//! ```rust
//! use pi_kernel::rng::{lcg, Lcg31, StreamSeeder, UniformSource};
//!
//! // Raw state-word interface
//! let mut state = 42u32;
//! let word = lcg::next_int(&mut state);
//! assert_eq!(word, state);
//! let u = lcg::next_unit(&mut state);
//! assert!((0.0..1.0).contains(&u));
//!
//! // Stream wrapper seeded from a stream index
//! let seeder = StreamSeeder::new(1);
//! let mut xs = Lcg31::new(seeder.stream_seed(0));
//! let x = xs.next_unit();
//! assert!(x >= 0.0 && x < 1.0);
//! ```
//!
//! Neither generator is suitable for cryptographic use.

pub mod lcg;
pub mod lehmer;
pub mod seed;
mod source;

// Public re-exports
pub use lcg::Lcg31;
pub use lehmer::Lehmer;
pub use seed::StreamSeeder;
pub use source::{GeneratorKind, UniformSource};
