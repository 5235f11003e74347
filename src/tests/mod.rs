//! Test modules for ptrie.
//!
//! This module contains the crate-internal test suites:
//! - Unit-level tests for configuration and error handling
//! - Property-based tests for the frequency trie using proptest
//! - Shared fixtures and strategies
//!
//! Tests that only need the public API live in the top-level `tests/` directory.

pub mod test_utils;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::TestFixture;
