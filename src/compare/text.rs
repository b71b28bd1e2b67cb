//! Line-oriented comparison, tolerant of line-terminator style

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use tracing::debug;

use crate::line::read_logical_line;

/// Compare two text files line by line.
///
/// The files are equal iff they yield the same ordered sequence of
/// logical lines and run out of lines together; see [`read_logical_line`]
/// for what counts as a line boundary. `"a\nb\n"` equals `"a\r\nb\r\n"`,
/// and since terminators are stripped before lines are compared, a file
/// ending in `"b"` equals one ending in `"b\n"` — only a missing or
/// extra line breaks equality. Two empty files are equal.
///
/// Failure semantics match [`compare_binary_files`]: open and read
/// errors collapse to `false`.
///
/// [`compare_binary_files`]: crate::compare_binary_files
///
/// # Example
/// ```no_run
/// use goldcheck::compare_text_files;
///
/// assert!(compare_text_files(
///     "tests/fixtures/expected.txt",
///     "target/out/actual.txt",
/// ));
/// ```
pub fn compare_text_files(left: impl AsRef<Path>, right: impl AsRef<Path>) -> bool {
    let left = left.as_ref();
    let right = right.as_ref();

    let (lhs, rhs) = match (File::open(left), File::open(right)) {
        (Ok(lhs), Ok(rhs)) => (lhs, rhs),
        _ => {
            debug!(?left, ?right, "open failed, treating as mismatch");
            return false;
        }
    };

    match lines_equal(BufReader::new(lhs), BufReader::new(rhs)) {
        Ok(equal) => equal,
        Err(error) => {
            debug!(?left, ?right, %error, "read failed, treating as mismatch");
            false
        }
    }
}

/// Compare a text file against an already-open reader, line by line.
///
/// Only `left` is opened (and dropped) here. `right` stays owned by the
/// caller and is never closed, but its read position is advanced by the
/// comparison. Failure semantics match [`compare_text_files`].
pub fn compare_text_reader(left: impl AsRef<Path>, right: &mut impl Read) -> bool {
    let left = left.as_ref();

    let lhs = match File::open(left) {
        Ok(lhs) => lhs,
        Err(error) => {
            debug!(?left, %error, "open failed, treating as mismatch");
            return false;
        }
    };

    match lines_equal(BufReader::new(lhs), BufReader::new(right)) {
        Ok(equal) => equal,
        Err(error) => {
            debug!(?left, %error, "read failed, treating as mismatch");
            false
        }
    }
}

/// Lockstep line equality: first diverging line pair or uneven line
/// count ends the comparison.
fn lines_equal<L: BufRead, R: BufRead>(mut lhs: L, mut rhs: R) -> io::Result<bool> {
    let mut line_number = 0u64;

    loop {
        line_number += 1;
        match (read_logical_line(&mut lhs)?, read_logical_line(&mut rhs)?) {
            (None, None) => return Ok(true),
            (Some(left), Some(right)) if left == right => {}
            (left, right) => {
                debug!(line_number, ?left, ?right, "lines diverged");
                return Ok(false);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn temp_file_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    #[test]
    fn test_crlf_equals_lf() {
        let a = temp_file_with("a\nb\n");
        let b = temp_file_with("a\r\nb\r\n");
        assert!(compare_text_files(a.path(), b.path()));
    }

    #[test]
    fn test_cr_equals_lf() {
        let a = temp_file_with("a\rb\r");
        let b = temp_file_with("a\nb\n");
        assert!(compare_text_files(a.path(), b.path()));
    }

    #[test]
    fn test_unterminated_final_line_equals_terminated() {
        let a = temp_file_with("a\nb");
        let b = temp_file_with("a\nb\n");
        assert!(compare_text_files(a.path(), b.path()));
        assert!(compare_text_files(b.path(), a.path()));
    }

    #[test]
    fn test_content_mismatch() {
        let a = temp_file_with("a\nb\n");
        let b = temp_file_with("a\nc\n");
        assert!(!compare_text_files(a.path(), b.path()));
    }

    #[test]
    fn test_line_count_mismatch() {
        let a = temp_file_with("x\n");
        let b = temp_file_with("x\ny\n");
        assert!(!compare_text_files(a.path(), b.path()));
        assert!(!compare_text_files(b.path(), a.path()));
    }

    #[test]
    fn test_empty_files_equal() {
        let a = temp_file_with("");
        let b = temp_file_with("");
        assert!(compare_text_files(a.path(), b.path()));
    }

    #[test]
    fn test_empty_vs_single_blank_line() {
        // "" has zero lines, "\n" has one (empty) line
        let a = temp_file_with("");
        let b = temp_file_with("\n");
        assert!(!compare_text_files(a.path(), b.path()));
    }

    #[test]
    fn test_terminator_only_differences_inside_file() {
        let a = temp_file_with("one\r\ntwo\nthree\r");
        let b = temp_file_with("one\ntwo\nthree\n");
        assert!(compare_text_files(a.path(), b.path()));
    }

    #[test]
    fn test_nonexistent_paths_are_false_not_error() {
        assert!(!compare_text_files("/nonexistent/a", "/nonexistent/a"));
        let a = temp_file_with("x\n");
        assert!(!compare_text_files(a.path(), "/nonexistent/b"));
    }

    #[test]
    fn test_reader_overload_match() {
        let a = temp_file_with("a\nb\n");
        let mut reader = Cursor::new("a\r\nb\r\n");
        assert!(compare_text_reader(a.path(), &mut reader));
    }

    #[test]
    fn test_reader_overload_mismatch() {
        let a = temp_file_with("a\nb\n");
        let mut reader = Cursor::new("a\nz\n");
        assert!(!compare_text_reader(a.path(), &mut reader));
    }

    #[test]
    fn test_lines_equal_on_raw_readers() {
        let lhs = Cursor::new("x\ny");
        let rhs = Cursor::new("x\r\ny");
        assert!(lines_equal(lhs, rhs).unwrap());
    }
}
