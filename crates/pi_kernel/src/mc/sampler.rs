//! Parallel dart-throwing kernel.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                   Toss range 0..N                        │
//! │  ┌──────────┐  ┌──────────┐  ┌──────────┐  ┌──────────┐  │
//! │  │ Worker 0 │  │ Worker 1 │  │ Worker 2 │  │ Worker T │  │
//! │  │ (sx, sy) │  │ (sx, sy) │  │ (sx, sy) │  │ (sx, sy) │  │
//! │  │ partial  │  │ partial  │  │ partial  │  │ partial  │  │
//! │  └────┬─────┘  └────┬─────┘  └────┬─────┘  └────┬─────┘  │
//! │       └─────────────┴──────┬──────┴─────────────┘        │
//! │                            ▼                             │
//! │                   reduce (u64 addition)                  │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! Every worker owns its two PRNG streams and its partial counter; nothing
//! mutable is shared inside the pool. The join at the end of
//! [`rayon::ThreadPool::install`] is the only synchronisation point.

use rayon::prelude::*;
use tracing::{debug, trace};

use super::config::{Partition, SamplerConfig};
use super::error::KernelError;
use super::estimate::PiEstimate;
use super::partition::{chunk_count, chunk_range, even_range};
use crate::rng::{GeneratorKind, Lcg31, Lehmer, StreamSeeder, UniformSource};

/// Counts hits among `tosses` trials drawn from the given streams.
///
/// This is the sequential per-worker loop: draw `x` from `xs`, draw `y` from
/// `ys`, count the point if `x² + y² <= 1`. Points on the arc are hits.
///
/// # Examples
///
/// ```rust
/// use pi_kernel::mc::count_range;
/// use pi_kernel::rng::Lcg31;
///
/// let hits = count_range(1000, &mut Lcg31::new(1), &mut Lcg31::new(2));
/// assert!(hits <= 1000);
/// ```
#[inline]
pub fn count_range<S: UniformSource>(tosses: u64, xs: &mut S, ys: &mut S) -> u64 {
    let mut hits = 0u64;
    for _ in 0..tosses {
        let x = xs.next_unit();
        let y = ys.next_unit();
        if x * x + y * y <= 1.0 {
            hits += 1;
        }
    }
    hits
}

/// Runs `tosses` trials on stream pair `pair`.
#[inline]
fn count_pair(generator: GeneratorKind, seeder: &StreamSeeder, pair: u64, tosses: u64) -> u64 {
    let (x_seed, y_seed) = seeder.stream_pair(pair);
    match generator {
        GeneratorKind::Lcg31 => {
            count_range(tosses, &mut Lcg31::new(x_seed), &mut Lcg31::new(y_seed))
        }
        GeneratorKind::Lehmer => {
            count_range(tosses, &mut Lehmer::new(x_seed), &mut Lehmer::new(y_seed))
        }
    }
}

/// Outcome of one kernel run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SampleOutcome {
    /// Total hits across all workers.
    pub hits: u64,
    /// Total trials.
    pub tosses: u64,
    /// Number of independent stream pairs used (workers or chunks).
    pub stream_pairs: u64,
    /// Number of OS threads in the pool.
    pub pool_threads: usize,
}

impl SampleOutcome {
    /// Converts the counts into a [`PiEstimate`].
    #[inline]
    pub fn estimate(&self) -> PiEstimate {
        PiEstimate::from_counts(self.hits, self.tosses)
    }
}

/// Parallel hit counter.
///
/// Builds a dedicated rayon pool for each run so that the requested thread
/// count is honoured regardless of the global pool.
///
/// # Examples
///
/// ```rust
/// use pi_kernel::mc::{HitSampler, SamplerConfig};
///
/// let config = SamplerConfig::builder()
///     .threads(2)
///     .tosses(100_000)
///     .build()
///     .unwrap();
///
/// let sampler = HitSampler::new(config);
/// let outcome = sampler.run().unwrap();
/// assert!(outcome.hits <= outcome.tosses);
/// assert!(outcome.estimate().abs_error() < 0.05);
/// ```
#[derive(Clone, Debug)]
pub struct HitSampler {
    config: SamplerConfig,
    seeder: StreamSeeder,
}

impl HitSampler {
    /// Creates a sampler for a validated configuration.
    pub fn new(config: SamplerConfig) -> Self {
        let seeder = StreamSeeder::new(config.seed());
        Self { config, seeder }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Number of OS threads the pool will start.
    ///
    /// Equal to the configured thread count unless capping is enabled, in
    /// which case it is limited to the number of logical CPUs.
    pub fn pool_threads(&self) -> usize {
        let requested = self.config.threads();
        if self.config.cap_to_hardware() {
            requested.min(num_cpus::get().max(1))
        } else {
            requested
        }
    }

    /// Executes all trials and reduces the partial counts.
    ///
    /// # Errors
    ///
    /// Returns [`KernelError::ThreadPool`] if the worker threads cannot be
    /// started. No error can occur once the workers are running.
    pub fn run(&self) -> Result<SampleOutcome, KernelError> {
        let tosses = self.config.tosses();
        let pool_threads = self.pool_threads();

        if tosses == 0 {
            debug!("no tosses requested, skipping worker pool");
            return Ok(SampleOutcome {
                hits: 0,
                tosses,
                stream_pairs: 0,
                pool_threads: 0,
            });
        }

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(pool_threads)
            .thread_name(|index| format!("pi-worker-{}", index))
            .build()
            .map_err(|err| KernelError::ThreadPool {
                threads: pool_threads,
                reason: err.to_string(),
            })?;

        debug!(
            threads = self.config.threads(),
            pool_threads,
            tosses,
            generator = %self.config.generator(),
            partition = %self.config.partition(),
            seed = self.seeder.base(),
            "worker pool started"
        );

        let (hits, stream_pairs) = pool.install(|| match self.config.partition() {
            Partition::Contiguous => self.run_contiguous(),
            Partition::Chunked { chunk_size } => self.run_chunked(chunk_size),
        });

        debug!(hits, tosses, stream_pairs, "reduction complete");
        debug_assert!(hits <= tosses);

        Ok(SampleOutcome {
            hits,
            tosses,
            stream_pairs,
            pool_threads,
        })
    }

    /// One contiguous range and one stream pair per worker.
    ///
    /// Workers at index `>= N` own an empty range and add nothing, so only the
    /// first `min(T, N)` are scheduled.
    fn run_contiguous(&self) -> (u64, u64) {
        let generator = self.config.generator();
        let seeder = &self.seeder;
        let total = self.config.tosses();
        let parts = self.config.threads() as u64;
        let active = parts.min(total);

        let hits = (0..active)
            .into_par_iter()
            .fold(
                || 0u64,
                |partial, worker| {
                    let range = even_range(total, parts, worker);
                    let tosses = range.end - range.start;
                    let hits = count_pair(generator, seeder, worker, tosses);
                    trace!(worker, tosses, hits, "worker finished");
                    partial + hits
                },
            )
            .reduce(|| 0u64, |a, b| a + b);

        (hits, active)
    }

    /// Fixed-size chunks, each with its own stream pair, stolen dynamically.
    fn run_chunked(&self, chunk_size: u64) -> (u64, u64) {
        let generator = self.config.generator();
        let seeder = &self.seeder;
        let total = self.config.tosses();
        let chunks = chunk_count(total, chunk_size);

        let hits = (0..chunks)
            .into_par_iter()
            .fold(
                || 0u64,
                |partial, chunk| {
                    let range = chunk_range(total, chunk_size, chunk);
                    partial + count_pair(generator, seeder, chunk, range.end - range.start)
                },
            )
            .reduce(|| 0u64, |a, b| a + b);

        (hits, chunks)
    }
}

/// Counts hits for `tosses` trials on `threads` workers with the default
/// seeding policy, generator and contiguous partitioning.
///
/// # Errors
///
/// Returns [`KernelError::Config`] for `threads == 0` or `tosses > i64::MAX`,
/// and [`KernelError::ThreadPool`] if the workers cannot be started.
///
/// # Examples
///
/// ```rust
/// use pi_kernel::mc::count_hits;
///
/// assert_eq!(count_hits(0, 4).unwrap(), 0);
/// let hits = count_hits(10_000, 2).unwrap();
/// assert_eq!(hits, count_hits(10_000, 2).unwrap());
/// ```
pub fn count_hits(tosses: u64, threads: usize) -> Result<u64, KernelError> {
    let config = SamplerConfig::builder()
        .threads(threads)
        .tosses(tosses)
        .build()?;
    Ok(HitSampler::new(config).run()?.hits)
}
