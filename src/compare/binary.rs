//! Byte-exact comparison against a golden file

use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

/// Chunk size for lockstep streaming (64KB, matching the digest module)
const CHUNK_SIZE: usize = 64 * 1024;

/// Compare two files byte for byte.
///
/// Returns `true` iff both files can be opened and have identical length
/// and identical byte sequence. Any open or read failure yields `false`
/// rather than an error: this is a test predicate, and "cannot verify
/// equality" collapses to "not equal". Both handles are opened here and
/// dropped on every return path.
///
/// Comparison short-circuits on the first mismatching chunk, so a large
/// file pair that diverges early is cheap.
///
/// # Example
/// ```no_run
/// use goldcheck::compare_binary_files;
///
/// assert!(compare_binary_files(
///     "tests/fixtures/expected.bin",
///     "target/out/actual.bin",
/// ));
/// ```
pub fn compare_binary_files(left: impl AsRef<Path>, right: impl AsRef<Path>) -> bool {
    let left = left.as_ref();
    let right = right.as_ref();

    let (mut lhs, mut rhs) = match (File::open(left), File::open(right)) {
        (Ok(lhs), Ok(rhs)) => (lhs, rhs),
        _ => {
            debug!(?left, ?right, "open failed, treating as mismatch");
            return false;
        }
    };

    match bytes_equal(&mut lhs, &mut rhs) {
        Ok(equal) => equal,
        Err(error) => {
            debug!(?left, ?right, %error, "read failed, treating as mismatch");
            false
        }
    }
}

/// Compare a file against an already-open reader, byte for byte.
///
/// Only `left` is opened (and dropped) here. `right` stays owned by the
/// caller and is never closed, but its read position is advanced by the
/// comparison. Failure semantics match [`compare_binary_files`].
pub fn compare_binary_reader(left: impl AsRef<Path>, right: &mut impl Read) -> bool {
    let left = left.as_ref();

    let mut lhs = match File::open(left) {
        Ok(lhs) => lhs,
        Err(error) => {
            debug!(?left, %error, "open failed, treating as mismatch");
            return false;
        }
    };

    match bytes_equal(&mut lhs, right) {
        Ok(equal) => equal,
        Err(error) => {
            debug!(?left, %error, "read failed, treating as mismatch");
            false
        }
    }
}

/// Lockstep chunked equality over two readers.
///
/// `fill_chunk` only comes up short at end of input, so unequal fill
/// counts mean the streams ended at different lengths.
fn bytes_equal<L: Read, R: Read>(lhs: &mut L, rhs: &mut R) -> io::Result<bool> {
    let mut lbuf = vec![0u8; CHUNK_SIZE];
    let mut rbuf = vec![0u8; CHUNK_SIZE];
    let mut offset = 0u64;

    loop {
        let ln = fill_chunk(lhs, &mut lbuf)?;
        let rn = fill_chunk(rhs, &mut rbuf)?;

        if ln != rn {
            debug!(offset, left = ln, right = rn, "length diverged");
            return Ok(false);
        }
        if ln == 0 {
            return Ok(true);
        }
        if lbuf[..ln] != rbuf[..rn] {
            debug!(offset, "content diverged within chunk");
            return Ok(false);
        }
        offset += ln as u64;
    }
}

/// Read until `buf` is full or the reader is exhausted.
fn fill_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
