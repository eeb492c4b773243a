// src/config/builder.rs

use super::Config;
use crate::cli::Cli;
use crate::constants;
use crate::errors::{Error, Result};
use std::path::PathBuf;

/// A builder for creating a [`Config`] programmatically.
///
/// Unset options fall back to the defaults used by the command-line tool.
///
/// # Examples
/// ```
/// use lineembed::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .input_path("interpreter.fs")
///     .declaration_prefix("char *")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.identifier_suffix, "_code");
/// assert_eq!(config.declaration_prefix, "char *");
/// ```
#[derive(Debug, Default, Clone)]
pub struct ConfigBuilder {
    input_path: Option<PathBuf>,
    identifier_suffix: Option<String>,
    declaration_prefix: Option<String>,
}

impl ConfigBuilder {
    /// Creates a new, empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder pre-filled from parsed command-line arguments.
    pub fn from_cli(cli: Cli) -> Self {
        Self::new().input_path(cli.input_path)
    }

    /// Sets the file to embed.
    pub fn input_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.input_path = Some(path.into());
        self
    }

    /// Overrides the `_code` suffix appended to the file stem.
    pub fn identifier_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.identifier_suffix = Some(suffix.into());
        self
    }

    /// Sets text written before the identifier on the header line.
    pub fn declaration_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.declaration_prefix = Some(prefix.into());
        self
    }

    /// Validates the options and produces a [`Config`].
    ///
    /// # Errors
    /// Returns `Error::Config` if no input path was given or the path is empty.
    /// The path is not checked for existence here; that surfaces when the file is opened.
    pub fn build(self) -> Result<Config> {
        let input_path = match self.input_path {
            Some(p) if !p.as_os_str().is_empty() => p,
            Some(_) => return Err(Error::Config("input path is empty".to_string())),
            None => return Err(Error::Config("an input path is required".to_string())),
        };

        Ok(Config {
            input_path,
            identifier_suffix: self
                .identifier_suffix
                .unwrap_or_else(|| constants::IDENTIFIER_SUFFIX.to_string()),
            declaration_prefix: self.declaration_prefix.unwrap_or_default(),
        })
    }
}
