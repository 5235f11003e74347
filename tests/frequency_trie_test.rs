// Copyright (c) 2025 Ptrie Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Integration tests for the frequency trie public API.

use ptrie_lib::config::trie::TrieSettings;
use ptrie_lib::data_structures::{
    Completion, FrequencyTrie, FrequencyTrieConfig, FrequencyTrieError,
};

#[test]
fn test_command_completion_session() {
    let mut trie = FrequencyTrie::new();
    let history = [
        "git status",
        "git commit",
        "git status",
        "git push",
        "grep -r",
        "git status",
        "git commit",
    ];
    for command in history {
        trie.insert(command).unwrap();
    }

    assert_eq!(trie.autocomplete("g").unwrap(), "git status");
    assert_eq!(trie.autocomplete("git c").unwrap(), "git commit");
    assert_eq!(trie.autocomplete("gr").unwrap(), "grep -r");
    assert_eq!(trie.autocomplete("ls").unwrap(), "ls");
    assert_eq!(trie.frequency("git status").unwrap(), 3);
    assert_eq!(trie.len(), 4);

    let dump: Vec<String> = trie
        .words()
        .map(|(word, count)| format!("{word} - {count}"))
        .collect();
    assert_eq!(
        dump,
        vec![
            "git commit - 2",
            "git push - 1",
            "git status - 3",
            "grep -r - 1"
        ]
    );

    trie.destroy();
}

#[test]
fn test_fallback_is_distinguishable_with_best_completion() {
    let mut trie = FrequencyTrie::new();
    trie.insert("make").unwrap();

    // Both calls return the prefix itself
    assert_eq!(trie.autocomplete("make").unwrap(), "make");
    assert_eq!(trie.autocomplete("cargo").unwrap(), "cargo");

    assert_eq!(
        trie.best_completion("make").unwrap(),
        Some(Completion {
            word: "make".to_string(),
            count: 1
        })
    );
    assert_eq!(trie.best_completion("cargo").unwrap(), None);
    assert!(trie.contains("make").unwrap());
    assert!(!trie.contains("cargo").unwrap());
}

#[test]
fn test_settings_budget_applies() {
    let settings = TrieSettings { max_nodes: Some(4) };
    let mut trie = FrequencyTrie::with_config(FrequencyTrieConfig::from(&settings));
    assert_eq!(trie.config().max_nodes, Some(4));

    trie.insert("abc").unwrap();
    let err = trie.insert("abd").unwrap_err();
    assert!(matches!(err, FrequencyTrieError::AllocationError { .. }));

    // Re-inserting along existing nodes still works
    trie.insert("abc").unwrap();
    trie.insert("ab").unwrap();
    assert_eq!(trie.frequency("abc").unwrap(), 2);
    assert_eq!(trie.autocomplete("a").unwrap(), "abc");
}

#[test]
fn test_trie_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<FrequencyTrie>();
}
