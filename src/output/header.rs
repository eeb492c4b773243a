// src/output/header.rs

use crate::constants;
use crate::errors::{Error, Result};
use std::io::Write;

/// Writes the line that opens the declaration, e.g. `hello_code = `.
///
/// The line carries no terminator; the declaration is closed by
/// [`write_terminator`](super::write_terminator).
pub fn write_header(writer: &mut dyn Write, prefix: &str, identifier: &str) -> Result<()> {
    writeln!(
        writer,
        "{}{}{}",
        prefix,
        identifier,
        constants::ASSIGNMENT
    )
    .map_err(Error::Write)
}
