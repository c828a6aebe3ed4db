//! Shared helpers for the dataset I/O integration tests.

use camino::Utf8PathBuf;

/// Directory containing the CSV fixtures.
pub fn fixtures_dir() -> Utf8PathBuf {
    Utf8PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Path of the named fixture file.
pub fn fixture(name: &str) -> Utf8PathBuf {
    fixtures_dir().join(name)
}
