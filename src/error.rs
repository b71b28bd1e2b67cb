//! Error types for goldcheck

use std::path::PathBuf;
use thiserror::Error;

/// Errors from the fallible parts of the crate.
///
/// The comparison predicates never return this type: by design they
/// collapse all I/O failure into `false`. Only the digest and fixture
/// helpers, which have something concrete to report, use it.
#[derive(Debug, Error)]
pub enum GoldcheckError {
    /// Standard IO error (automatically converted via #[from])
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No fixture root could be resolved from the environment
    #[error("fixture root unknown: set GOLDCHECK_FIXTURE_DIR or run tests under cargo")]
    FixtureRoot,

    /// A named fixture does not exist at the resolved path
    #[error("fixture not found: {}", .path.display())]
    MissingFixture { path: PathBuf },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Error as IoError, ErrorKind};

    #[test]
    fn test_io_error_automatic_conversion() {
        let io_error = IoError::new(ErrorKind::NotFound, "file not found");
        let error: GoldcheckError = io_error.into();

        assert!(matches!(error, GoldcheckError::Io(_)));
        assert!(error.to_string().contains("IO error"));
    }

    #[test]
    fn test_io_error_from_function() {
        fn returns_io_error() -> Result<(), GoldcheckError> {
            let _file = std::fs::File::open("/nonexistent/path/file.txt")?;
            Ok(())
        }

        let result = returns_io_error();
        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), GoldcheckError::Io(_)));
    }

    #[test]
    fn test_missing_fixture_names_path() {
        let error = GoldcheckError::MissingFixture {
            path: PathBuf::from("/fixtures/expected_output.sexp"),
        };
        assert!(error.to_string().contains("fixture not found"));
        assert!(error.to_string().contains("/fixtures/expected_output.sexp"));
    }

    #[test]
    fn test_fixture_root_message() {
        let error = GoldcheckError::FixtureRoot;
        assert!(error.to_string().contains("GOLDCHECK_FIXTURE_DIR"));
    }
}
