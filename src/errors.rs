//! Defines application-specific error types.
//!
//! This module provides the `Error` enum, which separates failures reading the
//! input from failures writing the declaration, offering more context than a
//! bare `std::io::Error`.

use thiserror::Error;

/// Application-specific errors used throughout `lineembed`.
#[derive(Error, Debug)]
pub enum Error {
    // --- I/O Errors ---
    /// Error opening or reading the input file.
    #[error("I/O error accessing path '{path}': {source}")]
    Io {
        /// The path that caused the I/O error.
        path: String,
        /// The underlying `std::io::Error`.
        #[source]
        source: std::io::Error,
    },

    /// Error writing the generated declaration to the output stream.
    #[error("Failed to write output: {0}")]
    Write(#[source] std::io::Error),

    // --- Configuration Errors ---
    /// Invalid configuration settings, reported by `ConfigBuilder::build`.
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result alias used by the library API.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Helper function to create an `Error::Io` with path context.
///
/// # Arguments
/// * `source` - The original `std::io::Error`.
/// * `path` - The path associated with the error.
pub fn io_error_with_path<P: AsRef<std::path::Path>>(source: std::io::Error, path: P) -> Error {
    Error::Io {
        path: path.as_ref().display().to_string(),
        source,
    }
}
