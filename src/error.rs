//! Binary-facing error types.
//!
//! Uses `thiserror` for ergonomic error definitions. Probe outcomes are
//! never errors: timeouts and refusals are classified results.

use crate::types::TargetError;
use thiserror::Error;

/// Error type for CLI command execution.
#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Target(#[from] TargetError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode output: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;
