//! ptrie Library
//!
//! This library contains a frequency-ranked prefix trie for completing short
//! tokens (commands, words) from a prefix, along with the configuration and
//! error handling used by the `ptrie` diagnostic binary.
//!
//! # Architecture
//!
//! - `data_structures` holds the trie itself and has no I/O
//! - `config` loads and validates settings from files and the environment
//! - `error` wraps component errors and reports them through `tracing`

// Re-export public modules
pub mod config;
pub mod data_structures;
pub mod error;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

// Feature-gated modules
#[cfg(feature = "benchmarking")]
pub mod bench;

/// Version information for ptrie.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
