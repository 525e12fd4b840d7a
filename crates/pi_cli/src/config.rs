//! Run configuration management
//!
//! Settings are layered from defaults, an optional TOML file, environment
//! variables and command-line flags. Environment variables reach this module
//! through clap's `env` attributes, so they arrive as [`CliArgs`] overrides.

use pi_kernel::mc::{Partition, DEFAULT_CHUNK_SIZE};
use pi_kernel::rng::{seed::DEFAULT_BASE_SEED, GeneratorKind};
use serde::Deserialize;
use std::path::PathBuf;
use std::str::FromStr;

use crate::error::{CliError, Result};
use crate::output::DEFAULT_PRECISION;

/// Largest accepted mantissa precision (17 digits round-trip any f64).
pub const MAX_PRECISION: usize = 17;

/// Log levels accepted by the driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(CliError::Config(format!(
                "unknown log level '{}'. Must be one of: trace, debug, info, warn, error",
                s
            ))),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }

    /// The more verbose of `self` and `other`.
    pub fn at_least(self, other: LogLevel) -> LogLevel {
        if other.rank() > self.rank() {
            other
        } else {
            self
        }
    }

    fn rank(self) -> u8 {
        match self {
            LogLevel::Error => 0,
            LogLevel::Warn => 1,
            LogLevel::Info => 2,
            LogLevel::Debug => 3,
            LogLevel::Trace => 4,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_filter_str())
    }
}

/// Work-splitting strategy named in configuration files
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PartitionKind {
    #[default]
    Contiguous,
    Chunked,
}

/// Settings for one estimation run
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RunSettings {
    /// Base seed for the per-stream seeding function
    pub seed: u64,
    /// Uniform generator (`lcg31` or `lehmer`)
    #[serde(deserialize_with = "deserialize_generator")]
    pub generator: GeneratorKind,
    /// Work-splitting strategy
    pub partition: PartitionKind,
    /// Tosses per chunk when partitioning is chunked
    pub chunk_size: u64,
    /// Cap the worker pool at the number of logical CPUs
    pub cap_threads: bool,
    /// Mantissa decimals in the printed results
    pub precision: usize,
    /// Log level when `RUST_LOG` is unset
    #[serde(deserialize_with = "deserialize_log_level")]
    pub log_level: LogLevel,
}

fn deserialize_generator<'de, D>(deserializer: D) -> std::result::Result<GeneratorKind, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    GeneratorKind::from_str(&s).map_err(serde::de::Error::custom)
}

fn deserialize_log_level<'de, D>(deserializer: D) -> std::result::Result<LogLevel, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    LogLevel::from_str(&s).map_err(serde::de::Error::custom)
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            seed: DEFAULT_BASE_SEED,
            generator: GeneratorKind::default(),
            partition: PartitionKind::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            cap_threads: false,
            precision: DEFAULT_PRECISION,
            log_level: LogLevel::default(),
        }
    }
}

impl RunSettings {
    /// Load settings from a TOML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse settings from TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let settings: RunSettings = toml::from_str(content)
            .map_err(|e| CliError::Config(format!("failed to parse TOML: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if !(1..=MAX_PRECISION).contains(&self.precision) {
            return Err(CliError::Config(format!(
                "precision {} outside 1..={}",
                self.precision, MAX_PRECISION
            )));
        }
        if self.chunk_size == 0 {
            return Err(CliError::Config(
                "chunk_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Kernel partition described by these settings
    pub fn partition(&self) -> Partition {
        match self.partition {
            PartitionKind::Contiguous => Partition::Contiguous,
            PartitionKind::Chunked => Partition::Chunked {
                chunk_size: self.chunk_size,
            },
        }
    }

    /// Merge with CLI arguments (CLI takes precedence)
    pub fn merge_with_cli(&mut self, cli: &CliArgs) -> Result<()> {
        if let Some(seed) = cli.seed {
            self.seed = seed;
        }
        if let Some(generator) = cli.generator {
            self.generator = generator;
        }
        if let Some(chunk_size) = cli.chunk_size {
            self.partition = PartitionKind::Chunked;
            self.chunk_size = chunk_size;
        }
        if cli.cap_threads {
            self.cap_threads = true;
        }
        if let Some(precision) = cli.precision {
            self.precision = precision;
        }
        if let Some(log_level) = &cli.log_level {
            self.log_level = LogLevel::from_str(log_level)?;
        }
        if cli.verbose {
            self.log_level = self.log_level.at_least(LogLevel::Info);
        }
        Ok(())
    }
}

/// Overrides collected from flags and environment variables
#[derive(Debug, Clone, Default)]
pub struct CliArgs {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Base seed override
    pub seed: Option<u64>,
    /// Generator override
    pub generator: Option<GeneratorKind>,
    /// Chunk size; selects chunked partitioning
    pub chunk_size: Option<u64>,
    /// Cap the pool at the logical CPU count
    pub cap_threads: bool,
    /// Precision override
    pub precision: Option<usize>,
    /// Log level override
    pub log_level: Option<String>,
    /// Raise the log level to at least `info`
    pub verbose: bool,
}

/// Build settings from all sources
///
/// Priority (highest to lowest):
/// 1. CLI arguments
/// 2. Environment variables
/// 3. Config file
/// 4. Default values
pub fn build_settings(cli: &CliArgs) -> Result<RunSettings> {
    let mut settings = if let Some(config_path) = &cli.config_file {
        RunSettings::from_file(config_path)?
    } else {
        RunSettings::default()
    };

    settings.merge_with_cli(cli)?;
    settings.validate()?;

    Ok(settings)
}
