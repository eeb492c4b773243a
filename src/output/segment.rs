// src/output/segment.rs

use crate::constants::QUOTE;
use crate::errors::{Error, Result};
use std::io::Write;

/// Writes one quoted segment: quote, space, content, space, quote.
///
/// The content is not escaped. A quote inside `line` ends up in the output as-is.
pub fn write_segment(writer: &mut dyn Write, line: &str) -> Result<()> {
    writeln!(writer, "{q} {} {q}", line, q = QUOTE).map_err(Error::Write)
}
