//! CLI error types.

use pi_kernel::KernelError;
use thiserror::Error;

/// Errors surfaced by the driver. Each one ends the run with a non-zero status.
#[derive(Debug, Error)]
pub enum CliError {
    /// The kernel could not run (invalid parameters or worker setup failure).
    #[error(transparent)]
    Kernel(#[from] KernelError),

    /// Configuration content is malformed or out of range.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Configuration file could not be read.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for the CLI.
pub type Result<T> = std::result::Result<T, CliError>;
