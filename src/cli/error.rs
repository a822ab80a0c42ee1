//! CLI-level errors

use thiserror::Error;

/// Top-level error type: what gets displayed to the user. The algorithm
/// layer is total, so everything that can fail is an argument problem.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
        }
    }
}
