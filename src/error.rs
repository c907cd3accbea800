//! Error handling for the Whittle application.
//! Defines custom error types and results used throughout the application.

use std::io;
use thiserror::Error;

/// Custom error types for Whittle operations.
///
/// This enum represents all possible errors that can occur within the
/// Whittle application. It implements the standard Error trait through
/// thiserror's derive macro.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// Represents validation failures of raw template option values.
    /// The message already carries the full user-facing description.
    #[error("{0}")]
    ValidationError(String),

    /// Represents errors in the resolved option values reaching the
    /// reconciler (values the validator should have rejected)
    #[error("Configuration error: {0}.")]
    ConfigError(String),

    /// Represents an inconsistency in the rendered template tree
    /// discovered mid-reconciliation
    #[error("Inconsistent project layout: {0}.")]
    LayoutError(String),
}

/// Convenience type alias for Results with whittle's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
