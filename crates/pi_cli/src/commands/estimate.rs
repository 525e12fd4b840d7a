//! Estimate command implementation
//!
//! Runs the parallel hit counter and prints the elapsed wall time and the
//! estimate. Only these two lines go to stdout; diagnostics go through
//! `tracing` to stderr.

use std::io::Write;
use std::time::Instant;

use pi_kernel::mc::{HitSampler, KernelError, PiEstimate, SamplerConfig, Z_95};
use tracing::{debug, info};

use crate::config::RunSettings;
use crate::output::format_scientific;
use crate::Result;

/// Run the estimate command
pub fn run(thread_count: usize, toss_count: u64, settings: &RunSettings) -> Result<()> {
    let config = SamplerConfig::builder()
        .threads(thread_count)
        .tosses(toss_count)
        .seed(settings.seed)
        .generator(settings.generator)
        .partition(settings.partition())
        .cap_to_hardware(settings.cap_threads)
        .build()
        .map_err(KernelError::from)?;

    info!("Starting estimation...");
    info!("  Workers: {}", thread_count);
    info!("  Tosses: {}", toss_count);
    debug!(
        seed = settings.seed,
        generator = %settings.generator,
        partition = %config.partition(),
        "Sampler configuration"
    );

    let sampler = HitSampler::new(config);

    let start = Instant::now();
    let outcome = sampler.run()?;
    let elapsed = start.elapsed().as_secs_f64();

    let estimate = outcome.estimate();
    info!(
        hits = outcome.hits,
        tosses = outcome.tosses,
        stream_pairs = outcome.stream_pairs,
        pool_threads = outcome.pool_threads,
        "Sampling complete"
    );
    log_statistics(&estimate);

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(render_report(elapsed, estimate.value(), settings.precision).as_bytes())?;
    stdout.flush()?;

    Ok(())
}

fn log_statistics(estimate: &PiEstimate) {
    if estimate.tosses() == 0 {
        return;
    }
    let (low, high) = estimate.confidence_interval(Z_95);
    info!(
        std_error = estimate.std_error(),
        ci95_low = low,
        ci95_high = high,
        abs_error = estimate.abs_error(),
        "Estimate statistics"
    );
}

/// The two result lines, newline-terminated.
pub fn render_report(elapsed_secs: f64, pi_estimate: f64, precision: usize) -> String {
    format!(
        "Elapsed time = {} seconds\nEstimated pi: {}\n",
        format_scientific(elapsed_secs, precision),
        format_scientific(pi_estimate, precision)
    )
}
