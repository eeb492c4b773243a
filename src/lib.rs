//! `lineembed` is a library and command-line tool that turns a text file into a
//! string-literal declaration for embedding in a compiled program.
//!
//! Every input line is stripped of surrounding whitespace and written as its own
//! quoted segment; a compiler that joins adjacent string literals sees one string.
//! The declared name is the file name up to its first `.`, followed by `_code`.
//!
//! # Example: Library Usage
//!
//! ```
//! use lineembed::{run, ConfigBuilder};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let temp_dir = tempdir().unwrap();
//! let input = temp_dir.path().join("hello.fs");
//! fs::write(&input, "push 1\npush 2\n").unwrap();
//!
//! let config = ConfigBuilder::new().input_path(&input).build().unwrap();
//!
//! let mut output: Vec<u8> = Vec::new();
//! let segments = run(&config, &mut output).unwrap();
//!
//! assert_eq!(segments, 2);
//! assert_eq!(
//!     String::from_utf8(output).unwrap(),
//!     "hello_code = \n\" push 1 \"\n\" push 2 \"\n;\n"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod constants;
pub mod errors;
pub mod identifier;
pub mod output;
pub mod prelude;
pub mod processing;

pub use config::{Config, ConfigBuilder};

use crate::errors::{io_error_with_path, Result};
use crate::processing::StrippedLines;
use log::debug;
use std::io::{BufRead, Write};

/// Writes the full declaration for the lines of `reader`.
///
/// Emits the header naming `identifier`, then one segment per line as soon as
/// it is read, then the terminator. Read errors are reported against
/// `config.input_path`; segments written before a failure stay written.
///
/// # Returns
/// The number of segments written.
pub fn embed<R: BufRead>(
    reader: R,
    identifier: &str,
    config: &Config,
    writer: &mut dyn Write,
) -> Result<usize> {
    output::write_header(writer, &config.declaration_prefix, identifier)?;

    let mut segments = 0;
    for line in StrippedLines::new(reader) {
        let line = line.map_err(|e| io_error_with_path(e, &config.input_path))?;
        output::write_segment(writer, &line)?;
        segments += 1;
    }

    output::write_terminator(writer)?;
    Ok(segments)
}

/// Embeds the file named by `config.input_path` into `writer`.
///
/// The file is opened before anything is written, so an unreadable input
/// leaves the writer untouched.
///
/// # Errors
/// Returns `Error::Io` if the file cannot be opened or read, and
/// `Error::Write` if the writer fails.
#[tracing::instrument(level = "debug", skip_all, fields(input = %config.input_path.display()))]
pub fn run(config: &Config, writer: &mut dyn Write) -> Result<usize> {
    let identifier =
        identifier::derive_identifier(&config.input_path, &config.identifier_suffix);
    debug!(
        "Embedding '{}' as '{}'",
        config.input_path.display(),
        identifier
    );

    let reader = processing::open_input(&config.input_path)?;
    let segments = embed(reader, &identifier, config, writer)?;
    writer.flush().map_err(errors::Error::Write)?;

    debug!("Wrote {} segments", segments);
    Ok(segments)
}
