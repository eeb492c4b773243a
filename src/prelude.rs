//! The `lineembed` prelude for convenient library usage.
//!
//! # Example
//!
//! ```
//! use lineembed::prelude::*;
//! use std::path::Path;
//!
//! let config = Config::new_for_test();
//! let identifier = derive_identifier(Path::new("words.fs"), &config.identifier_suffix);
//!
//! let mut out: Vec<u8> = Vec::new();
//! embed("dup\n".as_bytes(), &identifier, &config, &mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap(), "words_code = \n\" dup \"\n;\n");
//! ```

pub use crate::config::{Config, ConfigBuilder};
pub use crate::errors::{Error, Result};
pub use crate::identifier::derive_identifier;
pub use crate::output::{write_header, write_segment, write_terminator};
pub use crate::processing::{open_input, StrippedLines};
pub use crate::{embed, run};
