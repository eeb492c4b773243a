//! Defines the `Config` struct used by the embedding pipeline.
//!
//! A `Config` is produced by [`ConfigBuilder`], either from parsed CLI arguments
//! or programmatically when `lineembed` is used as a library.

use std::path::PathBuf;

pub use builder::ConfigBuilder;
mod builder;

/// Settings for a single embedding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// The text file whose lines are embedded.
    pub input_path: PathBuf,
    /// Appended to the file stem to form the declared identifier.
    pub identifier_suffix: String,
    /// Written verbatim before the identifier (e.g. `char *` for a C declaration).
    /// Empty for the command-line tool.
    pub declaration_prefix: String,
}

impl Config {
    /// Creates a default `Config` for testing purposes.
    #[doc(hidden)]
    pub fn new_for_test() -> Self {
        Self {
            input_path: PathBuf::from("input.fs"),
            identifier_suffix: crate::constants::IDENTIFIER_SUFFIX.to_string(),
            declaration_prefix: String::new(),
        }
    }
}
