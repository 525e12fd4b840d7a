//! pi_monte_carlo - parallel Monte Carlo estimate of pi
//!
//! Throws `toss_count` random darts at the unit square across `thread_count`
//! workers, then prints the wall time of the parallel phase and the estimate
//! `4 * hits / tosses`.
//!
//! # Usage
//!
//! ```text
//! pi_monte_carlo [OPTIONS] <THREAD_COUNT> <TOSS_COUNT>
//! ```
//!
//! Settings are layered: defaults, then `--config <FILE>` (TOML), then
//! `PI_MC_*` environment variables, then flags.

use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pi_kernel::mc::MAX_THREADS;
use pi_kernel::rng::GeneratorKind;

mod commands;
mod config;
mod error;
mod output;

pub use error::{CliError, Result};

use config::{CliArgs, LogLevel};

/// Parallel Monte Carlo estimator of pi
#[derive(Parser)]
#[command(name = "pi_monte_carlo")]
#[command(author, version, about, long_about = None)]
#[command(allow_negative_numbers = true)]
struct Cli {
    /// Number of worker threads (1 to 2^30)
    #[arg(value_parser = clap::value_parser!(u32).range(1..=MAX_THREADS as i64))]
    thread_count: u32,

    /// Total number of tosses (0 to 2^63 - 1)
    #[arg(value_parser = clap::value_parser!(i64).range(0..))]
    toss_count: i64,

    /// Configuration file path (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Base seed for the per-worker random streams
    #[arg(long, env = "PI_MC_SEED")]
    seed: Option<u64>,

    /// Uniform generator (lcg31, lehmer)
    #[arg(long, env = "PI_MC_GENERATOR")]
    generator: Option<GeneratorKind>,

    /// Split the work into chunks of this many tosses
    #[arg(long, value_name = "TOSSES")]
    chunk_size: Option<u64>,

    /// Cap the worker pool at the number of logical CPUs
    #[arg(long)]
    cap_threads: bool,

    /// Mantissa decimals in the printed results (1-17)
    #[arg(long)]
    precision: Option<usize>,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(long, env = "PI_MC_LOG_LEVEL")]
    log_level: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn overrides(&self) -> CliArgs {
        CliArgs {
            config_file: self.config.clone(),
            seed: self.seed,
            generator: self.generator,
            chunk_size: self.chunk_size,
            cap_threads: self.cap_threads,
            precision: self.precision,
            log_level: self.log_level.clone(),
            verbose: self.verbose,
        }
    }
}

/// Initialise tracing on stderr; stdout is reserved for the results.
fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<()> {
    let settings = config::build_settings(&cli.overrides())?;

    init_tracing(settings.log_level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    commands::estimate::run(
        cli.thread_count as usize,
        cli.toss_count as u64,
        &settings,
    )
}
