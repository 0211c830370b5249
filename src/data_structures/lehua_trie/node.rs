//! Node implementation for the Lehua Substring Trie.
//!
//! This module provides the TrieNode structure used in the Lehua Trie
//! implementation. Nodes are the fundamental building blocks of the trie, each
//! holding one character, a map of child nodes, and a back-reference to its
//! parent used for token reconstruction.

use fnv::FnvHashMap;

/// Identifier of a node inside the trie's arena.
///
/// All nodes live in a single `Vec` owned by the trie; a `NodeId` is an index
/// into that arena. Parent and child links are stored as ids rather than
/// pointers, so the reverse-navigation link from child to parent never forms
/// an ownership cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(pub(crate) usize);

/// A node in the Lehua Substring Trie.
///
/// The path of characters from a root down to a node spells a prefix shared by
/// every token passing through that node. Terminal nodes mark the exact end of
/// at least one indexed token.
#[derive(Debug)]
pub(crate) struct TrieNode {
    /// The character this node represents
    pub(crate) character: char,

    /// Back-reference to the node one level up; `None` for a root node.
    /// Used solely to reconstruct a token by walking up to the root.
    pub(crate) parent: Option<NodeId>,

    /// Map of characters to child nodes; keys are unique per child
    pub(crate) children: FnvHashMap<char, NodeId>,

    /// Whether at least one indexed token terminates exactly at this node.
    /// Set once, never cleared.
    pub(crate) is_token_end: bool,
}

impl TrieNode {
    /// Creates a new node holding `character` with the given parent link.
    ///
    /// The node is not yet attached to its parent's children map; the owning
    /// trie performs that step explicitly when it pushes the node into the
    /// arena.
    pub(crate) fn new(character: char, parent: Option<NodeId>) -> Self {
        Self {
            character,
            parent,
            children: FnvHashMap::default(),
            is_token_end: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_node_is_empty() {
        let node = TrieNode::new('a', None);
        assert_eq!(node.character, 'a');
        assert!(node.parent.is_none());
        assert!(node.children.is_empty());
        assert!(!node.is_token_end);
    }

    #[test]
    fn test_new_node_keeps_parent_link() {
        let node = TrieNode::new('b', Some(NodeId(7)));
        assert_eq!(node.parent, Some(NodeId(7)));
    }
}
