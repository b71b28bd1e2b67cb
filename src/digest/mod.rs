//! Content digests for pinning binary fixtures

use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::debug;

use crate::error::GoldcheckError;

/// Compute the BLAKE3 digest of a file, as a lowercase hex string.
///
/// Useful when a golden output is too large (or too opaque) to commit
/// alongside the tests: pin its digest instead and compare against the
/// freshly generated file. The file is streamed in 64KB chunks for
/// memory efficiency.
///
/// # Example
/// ```no_run
/// use goldcheck::digest_file;
///
/// let digest = digest_file("target/out/actual.bin")?;
/// assert_eq!(digest.len(), 64);
/// # Ok::<(), goldcheck::GoldcheckError>(())
/// ```
pub fn digest_file(path: impl AsRef<Path>) -> Result<String, GoldcheckError> {
    let mut file = File::open(path)?;
    let mut hasher = blake3::Hasher::new();

    // Stream in 64KB chunks
    let mut buffer = vec![0u8; 64 * 1024];

    loop {
        let bytes_read = file.read(&mut buffer)?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(hasher.finalize().to_hex().to_string())
}

/// True iff the file's digest matches `expected_hex`.
///
/// The predicate form of [`digest_file`]: hex case and surrounding
/// whitespace in `expected_hex` are ignored (digests checked into a
/// fixture file usually carry a trailing newline), and I/O failure
/// collapses to `false` like the comparison predicates.
pub fn digest_matches(path: impl AsRef<Path>, expected_hex: &str) -> bool {
    let path = path.as_ref();
    match digest_file(path) {
        Ok(actual) => actual.eq_ignore_ascii_case(expected_hex.trim()),
        Err(error) => {
            debug!(?path, %error, "digest failed, treating as mismatch");
            false
        }
    }
}
