//! Data structures for ptrie.
//!
//! This module contains the in-memory index structures exposed by the
//! library. All implementations keep to the project rules:
//! - No unsafe code
//! - Errors reported through `Result`, never by panicking
//! - No artificial limits on key length

pub mod frequency_trie;

// Re-export common data structures
pub use frequency_trie::{
    Completion, FrequencyTrie, FrequencyTrieConfig, FrequencyTrieError, FrequencyTrieResult,
};
