//! Trie configuration module.
//!
//! Settings applied when the CLI builds a [`FrequencyTrie`](crate::data_structures::FrequencyTrie).

use super::{ConfigResult, Validate};
use crate::data_structures::frequency_trie::FrequencyTrieConfig;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};

/// Trie configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct TrieSettings {
    /// Maximum number of nodes, root included (unset for no limit)
    pub max_nodes: Option<usize>,
}

impl Validate for TrieSettings {
    fn validate(&self) -> ConfigResult<()> {
        if self.max_nodes == Some(0) {
            return Err(ConfigError::ValueOutOfRange {
                key: "trie.max_nodes".to_string(),
                message: "must be at least 1 to hold the root node".to_string(),
            });
        }
        Ok(())
    }
}

impl From<&TrieSettings> for FrequencyTrieConfig {
    fn from(settings: &TrieSettings) -> Self {
        Self {
            max_nodes: settings.max_nodes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unbounded() {
        let settings = TrieSettings::default();
        assert!(settings.validate().is_ok());
        assert_eq!(FrequencyTrieConfig::from(&settings).max_nodes, None);
    }

    #[test]
    fn test_zero_budget_is_rejected() {
        let settings = TrieSettings { max_nodes: Some(0) };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::ValueOutOfRange { .. })
        ));

        let settings = TrieSettings { max_nodes: Some(1) };
        assert!(settings.validate().is_ok());
    }
}
