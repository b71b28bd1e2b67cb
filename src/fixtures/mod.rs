//! Locating golden files on disk

use std::env;
use std::path::PathBuf;

use crate::error::GoldcheckError;

/// Environment variable overriding the fixture root directory.
pub const FIXTURE_DIR_ENV: &str = "GOLDCHECK_FIXTURE_DIR";

/// Resolve the directory golden files live under.
///
/// [`FIXTURE_DIR_ENV`] wins when set. Otherwise `tests/fixtures` under
/// the consuming crate's manifest directory — Cargo exports
/// `CARGO_MANIFEST_DIR` to the test process, so the default works out of
/// the box for `cargo test`. Fails only when neither variable is
/// available (tests invoked outside Cargo without the override).
pub fn fixture_root() -> Result<PathBuf, GoldcheckError> {
    if let Some(dir) = env::var_os(FIXTURE_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    match env::var_os("CARGO_MANIFEST_DIR") {
        Some(manifest_dir) => Ok(PathBuf::from(manifest_dir).join("tests").join("fixtures")),
        None => Err(GoldcheckError::FixtureRoot),
    }
}

/// Resolve a named fixture, failing loudly if it does not exist.
///
/// A mistyped fixture name fed straight into a comparison predicate
/// would surface as an open failure and collapse into a silent `false`;
/// resolving through this function instead turns it into an error naming
/// the path that was tried.
///
/// # Example
/// ```no_run
/// use goldcheck::{compare_text_files, fixtures::fixture};
///
/// let expected = fixture("roundtrip/expected.txt")?;
/// assert!(compare_text_files(expected, "target/out/actual.txt"));
/// # Ok::<(), goldcheck::GoldcheckError>(())
/// ```
pub fn fixture(name: &str) -> Result<PathBuf, GoldcheckError> {
    let path = fixture_root()?.join(name);
    if !path.exists() {
        return Err(GoldcheckError::MissingFixture { path });
    }
    Ok(path)
}
