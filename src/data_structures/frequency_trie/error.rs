//! Error types for the frequency trie.
//!
//! This module defines the error types that can occur during trie operations.

/// Errors that can occur in frequency trie operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrequencyTrieError {
    /// The key or prefix contains a character outside the accepted range.
    #[error("Invalid character {character:?} at position {position}")]
    InvalidCharacter {
        /// The rejected character.
        character: char,
        /// Byte offset of the character in the input.
        position: usize,
    },

    /// Memory for a new node could not be obtained.
    #[error("Failed to allocate trie node: {reason}")]
    AllocationError {
        /// Why the allocation failed.
        reason: String,
    },
}
