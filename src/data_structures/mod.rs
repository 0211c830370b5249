//! Data structures for the Makani Substring Index.
//!
//! This module contains the specialized data structures behind the index.
//! All implementations adhere to the strict project requirements:
//! - No unsafe code
//! - Total operations on the query path (no error taxonomy in the core)
//! - Arena-backed node storage with index links instead of owning pointers
//! - Iterative tree walks on the hot path

pub mod lehua_trie;

// Re-export common data structures
pub use lehua_trie::{LehuaTrie, LehuaTrieConfig};
