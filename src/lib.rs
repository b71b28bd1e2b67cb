//! # goldcheck - Golden File Comparison for Tests
//!
//! Answers one question: does the output a test just produced match the
//! checked-in reference file?
//!
//! Two notions of equivalence are provided: byte-exact
//! ([`compare_binary_files`]) and line-oriented, tolerant of LF/CRLF/CR
//! differences ([`compare_text_files`]). Both return a plain `bool` and
//! collapse every I/O failure into `false`.

// Module declarations
pub mod compare;
pub mod digest;
pub mod error;
pub mod fixtures;
pub mod line;

mod macros;

// Re-export commonly used items
pub use compare::{
    compare_binary_files, compare_binary_reader, compare_text_files, compare_text_reader,
};
pub use digest::{digest_file, digest_matches};
pub use error::GoldcheckError;
pub use line::read_logical_line;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
