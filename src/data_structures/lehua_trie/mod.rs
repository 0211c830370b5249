//! Lehua Substring Trie Implementation
//!
//! This module provides a character-keyed trie for answering
//! substring-containment queries over a large collection of short tokens:
//! given a search key, find every indexed token that contains the key as a
//! contiguous substring, not just as a prefix.
//!
//! Mid-token matching is made possible by a secondary per-character index of
//! every node in the forest. A query for a key starting with `c` seeds one
//! matching walk per occurrence of `c` anywhere in any indexed token, then
//! walks children character by character. Matched tokens are reconstructed by
//! climbing parent links back to the root.

mod node;

use fnv::{FnvHashMap, FnvHashSet};

use node::{NodeId, TrieNode};

/// Configuration options for the Lehua Substring Trie
#[derive(Debug, Clone)]
pub struct LehuaTrieConfig {
    /// Whether search results are deduplicated. The raw result is a multiset
    /// with one entry per structurally distinct match path, so a token
    /// containing the key more than once may appear more than once. Enabling
    /// this keeps only the first occurrence of each token.
    pub dedupe_results: bool,
}

impl Default for LehuaTrieConfig {
    fn default() -> Self {
        Self {
            dedupe_results: false,
        }
    }
}

/// Lehua Substring Trie is an in-memory index over short text tokens that
/// answers substring-containment queries.
///
/// Key features:
/// * Matches a key at any character position inside a token, not only at
///   token-beginnings
/// * Shared-prefix storage; re-indexing a token never duplicates nodes
/// * Arena-backed nodes with index-based parent links, so token
///   reconstruction needs no owning back-pointers
/// * Iterative walks throughout, so token length and prefix depth are not
///   limited by the call stack
///
/// Indexing takes `&mut self` and searching takes `&self`, so the borrow
/// checker enforces the build-then-query lifecycle: once construction is done
/// the trie can serve concurrent lookups behind an `Arc` without any locking.
#[derive(Debug)]
pub struct LehuaTrie {
    /// Arena owning every node across all roots
    nodes: Vec<TrieNode>,

    /// One root per distinct first character across all indexed tokens
    roots: FnvHashMap<char, NodeId>,

    /// Every node (at any depth, across all roots) holding a given character,
    /// in creation order. This is the flat lookup accelerator that lets a
    /// search start matching partway through a token.
    by_character: FnvHashMap<char, Vec<NodeId>>,

    /// Number of distinct token-end nodes
    token_count: usize,

    /// Configuration options
    config: LehuaTrieConfig,
}

impl LehuaTrie {
    /// Creates a new empty `LehuaTrie` with default configuration.
    pub fn new() -> Self {
        Self::with_config(LehuaTrieConfig::default())
    }

    /// Creates a new empty `LehuaTrie` with the specified configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Configuration for the trie.
    pub fn with_config(config: LehuaTrieConfig) -> Self {
        Self {
            nodes: Vec::new(),
            roots: FnvHashMap::default(),
            by_character: FnvHashMap::default(),
            token_count: 0,
            config,
        }
    }

    /// Indexes a token.
    ///
    /// Walks the token character by character, reusing existing nodes where a
    /// prefix is already present and creating fresh nodes otherwise. Every
    /// created node is registered in the per-character seed index exactly
    /// once, at creation time. The node at the last character is marked as a
    /// token end.
    ///
    /// Indexing is total: the empty token is a no-op, re-indexing an
    /// identical token changes nothing structurally, and every character
    /// (letters, digits, punctuation) is treated uniformly and
    /// case-sensitively.
    pub fn index<T: AsRef<str>>(&mut self, token: T) {
        let token = token.as_ref();
        let mut current: Option<NodeId> = None;

        let mut chars = token.chars().peekable();
        while let Some(c) = chars.next() {
            // Resolve against the root level when no current node exists,
            // against the current node's children otherwise.
            let existing = match current {
                None => self.roots.get(&c).copied(),
                Some(id) => self.node(id).children.get(&c).copied(),
            };

            let resolved = match existing {
                Some(id) => id,
                None => self.attach_node(c, current),
            };

            if chars.peek().is_none() {
                self.mark_token_end(resolved);
            }

            current = Some(resolved);
        }
    }

    /// Searches for every indexed token containing `key` as a contiguous
    /// substring.
    ///
    /// The first key character selects the seed nodes: every occurrence of
    /// that character anywhere in the forest. Each seed is walked forward
    /// against the remaining key characters; a seed that cannot supply the
    /// next character yields nothing. Once the full key is consumed, the node
    /// reached is a match if it is a token end, and so is every token-end
    /// descendant beneath it (the key then ends before the token does).
    ///
    /// Returns an empty collection for an empty key or when nothing matches;
    /// the operation never fails. Unless [`LehuaTrieConfig::dedupe_results`]
    /// is set, the result is a multiset with one entry per structurally
    /// distinct match path.
    pub fn search<K: AsRef<str>>(&self, key: K) -> Vec<String> {
        let key = key.as_ref();
        let mut matches = Vec::new();

        let mut chars = key.chars();
        let first = match chars.next() {
            Some(c) => c,
            None => return matches,
        };
        let rest: Vec<char> = chars.collect();

        // No occurrence of the first character anywhere means no token
        // contains the key at all.
        let seeds = match self.by_character.get(&first) {
            Some(seeds) => seeds,
            None => return matches,
        };

        for &seed in seeds {
            let end = match self.walk_from(seed, &rest) {
                Some(id) => id,
                None => continue,
            };

            if self.node(end).is_token_end {
                matches.push(self.reconstruct_token(end));
            }
            self.collect_descendant_token_ends(end, &mut matches);
        }

        if self.config.dedupe_results {
            Self::dedupe_in_place(&mut matches);
        }

        matches
    }

    /// Checks whether any indexed token contains `key` as a substring.
    pub fn contains<K: AsRef<str>>(&self, key: K) -> bool {
        !self.search(key).is_empty()
    }

    /// Returns the number of distinct token-end nodes in the trie.
    ///
    /// Two identical tokens indexed twice count once; two tokens where one is
    /// a strict prefix of the other count twice.
    pub fn len(&self) -> usize {
        self.token_count
    }

    /// Checks whether the trie holds no tokens.
    pub fn is_empty(&self) -> bool {
        self.token_count == 0
    }

    /// Returns the total number of nodes in the arena, across all roots.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.0]
    }

    /// Creates a fresh node and wires it into the forest: as a child of
    /// `parent` when present, as a root otherwise. The node is appended to
    /// the per-character seed index in the same step, so the index holds
    /// every node exactly once, in creation order.
    fn attach_node(&mut self, character: char, parent: Option<NodeId>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(TrieNode::new(character, parent));

        match parent {
            Some(parent_id) => {
                self.nodes[parent_id.0].children.insert(character, id);
            }
            None => {
                self.roots.insert(character, id);
            }
        }

        self.by_character.entry(character).or_default().push(id);
        id
    }

    /// Marks a node as the end of a token. The flag is one-directional and
    /// the token count moves only on the first marking.
    fn mark_token_end(&mut self, id: NodeId) {
        let node = &mut self.nodes[id.0];
        if !node.is_token_end {
            node.is_token_end = true;
            self.token_count += 1;
        }
    }

    /// Walks the remaining key characters down from a seed node, following
    /// exactly one child per step. Returns the node reached after consuming
    /// every character, or `None` as soon as a needed child is absent.
    fn walk_from(&self, start: NodeId, rest: &[char]) -> Option<NodeId> {
        let mut current = start;
        for &c in rest {
            current = *self.node(current).children.get(&c)?;
        }
        Some(current)
    }

    /// Collects the reconstructed token of every token-end node strictly
    /// below `start`, via an iterative depth-first walk. Each descendant is
    /// visited exactly once; the order is unspecified but stable within a
    /// run (the child maps have a fixed hash seed).
    fn collect_descendant_token_ends(&self, start: NodeId, matches: &mut Vec<String>) {
        let mut stack: Vec<NodeId> = self.node(start).children.values().copied().collect();

        while let Some(id) = stack.pop() {
            let node = self.node(id);
            if node.is_token_end {
                matches.push(self.reconstruct_token(id));
            }
            stack.extend(node.children.values().copied());
        }
    }

    /// Reconstructs the token terminating at `id` by climbing parent links up
    /// to the root and reversing the collected characters.
    fn reconstruct_token(&self, id: NodeId) -> String {
        let mut characters = Vec::new();
        let mut cursor = Some(id);

        while let Some(node_id) = cursor {
            let node = self.node(node_id);
            characters.push(node.character);
            cursor = node.parent;
        }

        characters.into_iter().rev().collect()
    }

    /// Drops repeated tokens from a result list, keeping first occurrences.
    fn dedupe_in_place(matches: &mut Vec<String>) {
        let mut seen: FnvHashSet<String> = FnvHashSet::default();
        matches.retain(|token| seen.insert(token.clone()));
    }
}

impl Default for LehuaTrie {
    fn default() -> Self {
        Self::new()
    }
}
