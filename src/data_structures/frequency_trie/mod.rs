// Copyright (c) 2025 Ptrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Frequency Trie Implementation
//!
//! This module provides a prefix trie that counts how often each string was
//! inserted and answers "which inserted string starting with this prefix was
//! seen most often".
//!
//! # Example
//!
//! ```
//! use ptrie_lib::data_structures::frequency_trie::FrequencyTrie;
//!
//! let mut trie = FrequencyTrie::new();
//! trie.insert("cat").unwrap();
//! for _ in 0..3 {
//!     trie.insert("car").unwrap();
//! }
//!
//! assert_eq!(trie.autocomplete("ca").unwrap(), "car");
//! assert_eq!(trie.autocomplete("xyz").unwrap(), "xyz");
//! ```
//!
//! # Accepted characters
//!
//! Keys and prefixes may only contain characters with codes from 32 (space)
//! up to and excluding 128. Anything else fails the call with
//! [`FrequencyTrieError::InvalidCharacter`].
//!
//! # Failed insertions are not rolled back
//!
//! [`FrequencyTrie::insert`] validates and allocates one character at a time.
//! When it fails part way through a key, the nodes created for the earlier
//! characters stay in the trie. They do not form a word (nothing is counted)
//! but they are visible through [`FrequencyTrie::node_count`], and a later
//! [`FrequencyTrie::autocomplete`] on that partial path finds the path and
//! falls back to returning the prefix unchanged.

mod error;
mod iter;
mod node;

pub use error::FrequencyTrieError;
pub use iter::Words;

use iter::Walk;
use node::{slot_for, NodeId, NodeStore};
use tracing::{debug, trace};

/// Result type for frequency trie operations
pub type FrequencyTrieResult<T> = Result<T, FrequencyTrieError>;

/// Configuration options for the frequency trie
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTrieConfig {
    /// Maximum number of nodes, root included (`None` for no limit).
    ///
    /// Exceeding the budget is reported as an allocation failure.
    pub max_nodes: Option<usize>,
}

impl FrequencyTrieConfig {
    /// Creates a configuration without a node budget.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the node budget.
    pub fn with_max_nodes(mut self, max_nodes: usize) -> Self {
        self.max_nodes = Some(max_nodes);
        self
    }
}

/// The best completion found under a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Completion {
    /// The full word, prefix included
    pub word: String,

    /// How many times the word was inserted
    pub count: u64,
}

/// A prefix trie with per-word insertion counts.
///
/// Key features:
/// * Frequency counting on repeated insertion
/// * Best completion lookup with deterministic tie-breaking
/// * Lazy enumeration of all words in ascending character order
/// * Nodes held in a single arena, released in one pass
#[derive(Debug)]
pub struct FrequencyTrie {
    /// Arena holding the root and every descendant
    store: NodeStore,

    /// Configuration options
    config: FrequencyTrieConfig,
}

impl FrequencyTrie {
    /// Creates a new empty `FrequencyTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(FrequencyTrieConfig::default())
    }

    /// Creates a new empty `FrequencyTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: FrequencyTrieConfig) -> Self {
        Self {
            store: NodeStore::new(config.max_nodes),
            config,
        }
    }

    /// Returns the configuration the trie was built with.
    pub fn config(&self) -> &FrequencyTrieConfig {
        &self.config
    }

    /// Records one insertion of `key`.
    ///
    /// Inserting the same key again increments its count. The empty string is
    /// stored on the root.
    ///
    /// # Arguments
    ///
    /// * `key` - The string to insert.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - If the key was counted.
    /// * `Err(FrequencyTrieError)` - If a character is invalid or a node could
    ///   not be allocated. Nodes created for earlier characters are kept.
    pub fn insert<K>(&mut self, key: K) -> FrequencyTrieResult<()>
    where
        K: AsRef<str>,
    {
        let key = key.as_ref();
        let mut node = NodeId::ROOT;

        for (position, character) in key.char_indices() {
            let step = slot_for(character, position)
                .and_then(|byte| self.store.child_or_insert(node, byte));
            node = match step {
                Ok(next) => next,
                Err(e) => {
                    debug!(error = %e, position, nodes = self.store.len(), "insert aborted");
                    return Err(e);
                }
            };
        }

        self.store.get_mut(node).mark_terminal();
        Ok(())
    }

    /// Returns the most frequently inserted word starting with `prefix`.
    ///
    /// Among equally frequent words the first one met in a depth-first walk
    /// over ascending characters wins, so `"car"` beats `"cat"`.
    ///
    /// When no stored word starts with `prefix`, the prefix itself is
    /// returned. Callers that need to tell that case apart from "the prefix is
    /// the best word" should use [`best_completion`](Self::best_completion)
    /// or [`contains`](Self::contains).
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to complete.
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - The completed word, or `prefix` unchanged.
    /// * `Err(FrequencyTrieError::InvalidCharacter)` - If `prefix` contains an
    ///   invalid character.
    pub fn autocomplete<P>(&self, prefix: P) -> FrequencyTrieResult<String>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        Ok(self
            .best_completion(prefix)?
            .map_or_else(|| prefix.to_owned(), |completion| completion.word))
    }

    /// Like [`autocomplete`](Self::autocomplete), but reports a missing
    /// completion as `None` and includes the winning count.
    pub fn best_completion<P>(&self, prefix: P) -> FrequencyTrieResult<Option<Completion>>
    where
        P: AsRef<str>,
    {
        let prefix = prefix.as_ref();
        let start = match self.find_node(prefix)? {
            Some(start) => start,
            None => {
                trace!(prefix, "prefix not present");
                return Ok(None);
            }
        };

        let mut best: Option<Completion> = None;
        let mut walk = Walk::new(&self.store, start, prefix);
        while let Some((node, path)) = walk.next_node() {
            // Strictly greater, so an earlier word keeps a tie
            let better = best.as_ref().map_or(true, |b| node.count > b.count);
            if node.is_terminal && better {
                best = Some(Completion {
                    word: path.to_owned(),
                    count: node.count,
                });
            }
        }

        trace!(prefix, found = best.is_some(), "completion lookup");
        Ok(best)
    }

    /// Checks if `key` was inserted at least once.
    pub fn contains<K>(&self, key: K) -> FrequencyTrieResult<bool>
    where
        K: AsRef<str>,
    {
        Ok(self.frequency(key)? > 0)
    }

    /// Returns how many times `key` was inserted (0 if never).
    pub fn frequency<K>(&self, key: K) -> FrequencyTrieResult<u64>
    where
        K: AsRef<str>,
    {
        Ok(self
            .find_node(key.as_ref())?
            .map_or(0, |id| self.store.get(id).count))
    }

    /// Returns a lazy iterator over every word and its count.
    ///
    /// Words come in depth-first order over ascending characters, so a word
    /// precedes its extensions.
    pub fn words(&self) -> Words<'_> {
        Words::new(&self.store)
    }

    /// Calls `visit` with every word and its count, in [`words`](Self::words) order.
    pub fn for_each_word<F>(&self, mut visit: F)
    where
        F: FnMut(&str, u64),
    {
        for (word, count) in self.words() {
            visit(&word, count);
        }
    }

    /// Returns the number of distinct words.
    ///
    /// This walks the whole trie, so it's an O(n) operation.
    pub fn len(&self) -> usize {
        self.words().count()
    }

    /// Checks if no word has been inserted.
    ///
    /// Paths left behind by failed insertions hold no word and do not count.
    pub fn is_empty(&self) -> bool {
        self.words().next().is_none()
    }

    /// Returns the number of allocated nodes, root included.
    pub fn node_count(&self) -> usize {
        self.store.len()
    }

    /// Releases every node of the trie.
    ///
    /// Consuming `self` makes any further use of the handle a compile error.
    pub fn destroy(self) {
        let released = self.store.release();
        trace!(released, "trie destroyed");
    }

    /// Follows `prefix` from the root.
    ///
    /// Every character is validated before walking, so an invalid character
    /// is reported even when the path ends earlier.
    fn find_node(&self, prefix: &str) -> FrequencyTrieResult<Option<NodeId>> {
        let bytes = prefix
            .char_indices()
            .map(|(position, character)| slot_for(character, position))
            .collect::<FrequencyTrieResult<Vec<u8>>>()?;

        let mut node = NodeId::ROOT;
        for byte in bytes {
            match self.store.get(node).child(byte) {
                Some(next) => node = next,
                None => return Ok(None),
            }
        }
        Ok(Some(node))
    }
}

impl Default for FrequencyTrie {
    fn default() -> Self {
        Self::new()
    }
}
