// src/constants.rs

/// Token appended to the file stem to form the declared identifier.
pub const IDENTIFIER_SUFFIX: &str = "_code";

/// The file name is cut at the first occurrence of this character.
pub const STEM_DELIMITER: char = '.';

/// Quote character wrapping every segment.
pub const QUOTE: char = '"';

/// Text between the identifier and the first segment.
pub const ASSIGNMENT: &str = " = ";

/// Closes the declaration on its own line.
pub const TERMINATOR: &str = ";";
