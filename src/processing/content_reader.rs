// src/processing/content_reader.rs

use crate::errors::{io_error_with_path, Result};
use std::{
    fs::File,
    io::BufReader,
    path::Path,
};

/// Opens the input file for a single forward pass.
/// Wraps I/O errors with the path.
pub fn open_input(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| io_error_with_path(e, path))?;
    Ok(BufReader::new(file))
}
