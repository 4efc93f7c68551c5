//! Parsing of the l10n `subdirs` listing.

use std::path::{Component, Path};

/// Language directory that exists only for testing the l10n tooling.
pub const TEST_LANGUAGE: &str = "x-test";

/// Extract language codes from a `subdirs` listing, one code per line.
///
/// Surrounding whitespace (including `\r`) is trimmed and blank lines are
/// dropped. Codes in `excluded` are removed; the remaining codes keep the
/// order of the listing.
pub fn parse_listing<S: AsRef<str>>(listing: &str, excluded: &[S]) -> Vec<String> {
    listing
        .lines()
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .filter(|code| !excluded.iter().any(|ex| ex.as_ref() == *code))
        .map(str::to_string)
        .collect()
}

/// Whether `code` can be used as a directory name directly under a tree root.
///
/// Absolute paths, `.`/`..` and anything containing a path separator would
/// resolve outside `<tree>/<code>` once joined, so they are not language codes.
pub fn is_language_dir_name(code: &str) -> bool {
    let mut components = Path::new(code).components();
    matches!(components.next(), Some(Component::Normal(_)))
        && components.next().is_none()
        && !code.contains(std::path::is_separator)
}
