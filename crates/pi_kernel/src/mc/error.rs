//! Error types for the sampling kernel.
//!
//! Configuration errors are reported when a [`SamplerConfig`](super::SamplerConfig)
//! is built. Once a run has started, the only failure is the inability to set
//! up the worker pool.

use thiserror::Error;

/// Configuration error for the sampler.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Thread count must be at least 1.
    #[error("Invalid thread count {0}: must be at least 1")]
    InvalidThreadCount(usize),

    /// Thread count exceeds the number of worker stream pairs the seeder supports.
    #[error("Invalid thread count {threads}: must not exceed {limit}")]
    TooManyThreads {
        /// Requested thread count.
        threads: usize,
        /// Maximum thread count.
        limit: usize,
    },

    /// Toss count does not fit in a signed 64-bit integer.
    #[error("Invalid toss count {0}: must not exceed {max}", max = i64::MAX)]
    TossCountTooLarge(u64),

    /// Chunk size must be at least 1.
    #[error("Invalid chunk size {0}: must be at least 1")]
    InvalidChunkSize(u64),

    /// Chunked partitioning would need more stream pairs than the seeder supports.
    #[error("Chunk size {chunk_size} splits {tosses} tosses into too many chunks (limit {limit})")]
    TooManyChunks {
        /// Requested toss count.
        tosses: u64,
        /// Requested chunk size.
        chunk_size: u64,
        /// Maximum number of chunks.
        limit: u64,
    },

    /// Required builder parameter was not set.
    #[error("Missing parameter '{name}': must be specified")]
    MissingParameter {
        /// Parameter name.
        name: &'static str,
    },
}

/// Error raised by the sampling kernel.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum KernelError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The worker pool could not be created (thread spawn or allocation failure).
    #[error("Failed to start {threads} worker threads: {reason}")]
    ThreadPool {
        /// Number of threads requested from the pool.
        threads: usize,
        /// Underlying failure reported by the pool builder.
        reason: String,
    },

    /// Accuracy target for sample-size planning was not a positive finite number.
    #[error("Invalid accuracy target: tolerance={tolerance}, z={z}")]
    InvalidTolerance {
        /// Requested absolute tolerance on the estimate.
        tolerance: f64,
        /// Requested normal quantile.
        z: f64,
    },
}
