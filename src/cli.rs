// src/cli.rs

use clap::Parser;
use std::path::PathBuf;

/// Turns a text file into a string-literal declaration for embedding in a compiled program.
///
/// Each line of the input is stripped of surrounding whitespace and written as its own
/// quoted segment. The declared name is the file name up to its first '.', followed by
/// "_code". The declaration is written to stdout.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the text file to embed.
    pub input_path: PathBuf,
}
