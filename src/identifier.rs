// src/identifier.rs

//! Derives the declared variable name from the input path.

use crate::constants::STEM_DELIMITER;
use std::path::Path;

/// Builds the identifier for the declaration header.
///
/// The file name is cut at its first `.`, and `suffix` is appended. A name with
/// no `.` is used whole. Directories in the path are ignored. If the path has no
/// final component (e.g. `..`), the whole path text is used as the base.
/// The result is not checked for being a legal identifier.
///
/// # Examples
/// ```
/// use lineembed::identifier::derive_identifier;
/// use std::path::Path;
///
/// assert_eq!(derive_identifier(Path::new("forth/hello.fs"), "_code"), "hello_code");
/// assert_eq!(derive_identifier(Path::new("lib.tar.gz"), "_code"), "lib_code");
/// assert_eq!(derive_identifier(Path::new("Makefile"), "_code"), "Makefile_code");
/// ```
pub fn derive_identifier(path: &Path, suffix: &str) -> String {
    let name = match path.file_name() {
        Some(name) => name.to_string_lossy(),
        None => path.to_string_lossy(),
    };
    let base = match name.split_once(STEM_DELIMITER) {
        Some((stem, _)) => stem,
        None => &name[..],
    };
    format!("{}{}", base, suffix)
}
