//! Integration tests for the Makani Substring Index.
//!
//! Exercises the public API end to end: loading a wordlist file, then
//! running substring-containment queries against it.

use std::fs;
use std::sync::Arc;
use std::thread;

use makani_index_lib::data_structures::{LehuaTrie, LehuaTrieConfig};
use makani_index_lib::wordlist;

fn sorted(mut matches: Vec<String>) -> Vec<String> {
    matches.sort();
    matches.dedup();
    matches
}

#[test]
fn test_wordlist_file_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("words.txt");
    fs::write(&path, "top\ntoppa\ntappo\nstappo\nstrappo\n").unwrap();

    let mut trie = LehuaTrie::new();
    let stats = wordlist::index_file(&path, &mut trie, 2).unwrap();

    assert_eq!(stats.lines, 5);
    assert_eq!(trie.len(), 5);

    assert_eq!(sorted(trie.search("op")), vec!["top", "toppa"]);
    assert_eq!(
        sorted(trie.search("pp")),
        vec!["stappo", "strappo", "tappo", "toppa"]
    );
    assert_eq!(
        sorted(trie.search("p")),
        vec!["stappo", "strappo", "tappo", "top", "toppa"]
    );
    assert!(trie.search("bastimen").is_empty());
    assert!(trie.search("").is_empty());
}

#[test]
fn test_dedupe_config_applies_through_public_api() {
    let mut trie = LehuaTrie::with_config(LehuaTrieConfig {
        dedupe_results: true,
    });
    trie.index("banana");

    // "an" occurs twice in "banana"; with deduplication the token shows once.
    assert_eq!(trie.search("an"), vec!["banana".to_string()]);
}

#[test]
fn test_concurrent_readonly_queries() {
    let mut trie = LehuaTrie::new();
    for i in 0..500 {
        trie.index(format!("token_{i}"));
    }

    // Once building is done, shared read-only lookups need no locking.
    let trie = Arc::new(trie);
    let mut handles = Vec::new();

    for _ in 0..4 {
        let trie = Arc::clone(&trie);
        handles.push(thread::spawn(move || {
            for i in 0..500 {
                let key = format!("ken_{i}");
                let results = trie.search(&key);
                assert!(results.contains(&format!("token_{i}")));
            }
        }));
    }

    for handle in handles {
        handle.join().unwrap();
    }
}
