//! Handles reading the input for the embedding pipeline.
//!
//! The input is consumed lazily, one line at a time, so each segment can be
//! written as soon as its line has been read.

use std::collections::VecDeque;
use std::io::{self, BufRead};

mod content_reader;

pub use content_reader::open_input;

/// Whitespace removed from both ends of every line.
///
/// Unicode whitespace plus the ASCII separators U+001C..=U+001F, which
/// text-mode readers also treat as blank.
pub fn is_strippable(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Iterator over the lines of a reader with surrounding whitespace removed.
///
/// Lines end at `\n`, `\r\n`, or a lone `\r`; the terminator is dropped and
/// the line is trimmed on both sides (see [`is_strippable`]). Blank lines are
/// kept as empty strings. Read failures, including invalid UTF-8, are yielded
/// as they occur.
///
/// # Examples
/// ```
/// use lineembed::processing::StrippedLines;
///
/// let input = "  push 1  \r\n\n\tpush 2\rpush 3";
/// let lines: Vec<String> = StrippedLines::new(input.as_bytes())
///     .collect::<Result<_, _>>()
///     .unwrap();
///
/// assert_eq!(lines, vec!["push 1", "", "push 2", "push 3"]);
/// ```
pub struct StrippedLines<R> {
    reader: R,
    chunk: Vec<u8>,
    pending: VecDeque<String>,
}

impl<R: BufRead> StrippedLines<R> {
    /// Wraps a buffered reader.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            chunk: Vec::new(),
            pending: VecDeque::new(),
        }
    }

    /// Reads up to the next `\n` and queues every line it contains.
    /// Returns `Ok(false)` at end of input.
    fn fill(&mut self) -> io::Result<bool> {
        self.chunk.clear();
        if self.reader.read_until(b'\n', &mut self.chunk)? == 0 {
            return Ok(false);
        }

        let mut end = self.chunk.len();
        if self.chunk[end - 1] == b'\n' {
            end -= 1;
        }
        // Trailing `\r` is either half of `\r\n` or a lone `\r` at end of input.
        if end > 0 && self.chunk[end - 1] == b'\r' {
            end -= 1;
        }

        let text = std::str::from_utf8(&self.chunk[..end])
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.pending.extend(
            text.split('\r')
                .map(|line| line.trim_matches(is_strippable).to_string()),
        );
        Ok(true)
    }
}

impl<R: BufRead> Iterator for StrippedLines<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(line) = self.pending.pop_front() {
            return Some(Ok(line));
        }
        match self.fill() {
            Ok(true) => self.pending.pop_front().map(Ok),
            Ok(false) => None,
            Err(e) => Some(Err(e)),
        }
    }
}
