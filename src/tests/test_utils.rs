//! Test utilities and fixtures for ptrie.
//!
//! This module provides reusable fixtures and proptest strategies shared by
//! the crate-internal test suites.

use proptest::prelude::*;
use proptest::strategy::{BoxedStrategy, Strategy};
use std::path::PathBuf;
use tempfile::TempDir;

/// Maximum word length for generated test data.
const MAX_WORD_LENGTH: usize = 12;

/// Generate words made only of accepted characters (space through DEL).
pub fn word_strategy() -> BoxedStrategy<String> {
    proptest::collection::vec(32u8..128, 0..MAX_WORD_LENGTH)
        .prop_map(|bytes| bytes.into_iter().map(char::from).collect::<String>())
        .boxed()
}

/// Generate short words over a three letter alphabet.
///
/// The tiny alphabet makes shared prefixes and repeated words common, which
/// is where ranking and tie-breaking matter.
pub fn narrow_word_strategy() -> BoxedStrategy<String> {
    "[abc]{0,4}".prop_map(|s| s).boxed()
}

/// Generate a character the trie must reject.
pub fn invalid_char_strategy() -> BoxedStrategy<char> {
    prop_oneof![
        (0u32..32).prop_map(|c| char::from_u32(c).unwrap_or('\0')),
        (128u32..0x800).prop_map(|c| char::from_u32(c).unwrap_or('\u{80}')),
    ]
    .boxed()
}

/// Test fixture for tests that need files or environment variables.
///
/// Environment variables set through the fixture are removed on drop.
pub struct TestFixture {
    /// Temporary directory for test files
    pub temp_dir: TempDir,
    /// Environment variables to clean up after the test
    env_vars: Vec<String>,
}

impl TestFixture {
    /// Create a new test fixture.
    pub fn new() -> std::io::Result<Self> {
        Ok(Self {
            temp_dir: tempfile::tempdir()?,
            env_vars: Vec::new(),
        })
    }

    /// Set an environment variable for this test.
    pub fn set_env<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        let key = key.into();
        std::env::set_var(&key, value.into());
        self.env_vars.push(key);
    }

    /// Write `contents` to `name` inside the fixture directory.
    pub fn create_file<C: AsRef<[u8]>>(&self, name: &str, contents: C) -> std::io::Result<PathBuf> {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents)?;
        Ok(path)
    }
}

impl Drop for TestFixture {
    fn drop(&mut self) {
        for key in &self.env_vars {
            std::env::remove_var(key);
        }
    }
}
