// src/output/mod.rs

//! Writers for the three kinds of output line: the header, one quoted segment
//! per input line, and the terminator.

use crate::constants;
use crate::errors::{Error, Result};
use std::io::Write;

mod header;
mod segment;

pub use header::write_header;
pub use segment::write_segment;

/// Writes the line that closes the declaration.
pub fn write_terminator(writer: &mut dyn Write) -> Result<()> {
    writeln!(writer, "{}", constants::TERMINATOR).map_err(Error::Write)
}
