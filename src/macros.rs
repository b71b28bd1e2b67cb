//! Assertion macros wrapping the comparison predicates

/// Assert that two files are byte-identical.
///
/// Delegates to [`compare_binary_files`][crate::compare_binary_files]
/// and panics with both paths on mismatch. An optional trailing message
/// replaces the default, like `assert!`.
///
/// # Example
/// ```no_run
/// use goldcheck::assert_binary_match;
///
/// assert_binary_match!("tests/fixtures/expected.bin", "target/out/actual.bin");
/// assert_binary_match!(
///     "tests/fixtures/expected.bin",
///     "target/out/actual.bin",
///     "encoder output drifted from the golden copy"
/// );
/// ```
#[macro_export]
macro_rules! assert_binary_match {
    ( $left:expr, $right:expr $(,)? ) => {
        assert!(
            $crate::compare_binary_files(&$left, &$right),
            "binary mismatch: {:?} vs {:?}",
            &$left,
            &$right,
        );
    };
    ( $left:expr, $right:expr, $($arg:tt)+ ) => {
        assert!($crate::compare_binary_files(&$left, &$right), $($arg)+);
    };
}

/// Assert that two files hold the same logical lines.
///
/// Delegates to [`compare_text_files`][crate::compare_text_files], so
/// LF, CRLF, and CR line endings compare equal. Panics with both paths
/// on mismatch; an optional trailing message replaces the default.
///
/// # Example
/// ```no_run
/// use goldcheck::assert_text_match;
///
/// assert_text_match!("tests/fixtures/expected.txt", "target/out/actual.txt");
/// ```
#[macro_export]
macro_rules! assert_text_match {
    ( $left:expr, $right:expr $(,)? ) => {
        assert!(
            $crate::compare_text_files(&$left, &$right),
            "text mismatch: {:?} vs {:?}",
            &$left,
            &$right,
        );
    };
    ( $left:expr, $right:expr, $($arg:tt)+ ) => {
        assert!($crate::compare_text_files(&$left, &$right), $($arg)+);
    };
}
