//! Node implementation for the Olelo Trie.
//!
//! This module provides the TrieNode structure used in the Olelo Trie
//! implementation. Nodes are the fundamental building blocks of the trie,
//! each mapping single characters to owned child nodes.

use std::collections::BTreeMap;

/// A node in the Olelo Trie.
///
/// Each node represents one character position along a word path; the
/// character itself is the key under which the parent holds the node, so the
/// root carries no character at all. Children are stored in a `BTreeMap` so
/// that iteration — and therefore word enumeration — follows a canonical
/// lexicographic order.
#[derive(Debug)]
pub struct TrieNode {
    /// Map of characters to owned child nodes
    pub children: BTreeMap<char, TrieNode>,

    /// Whether the path from the root to this node spells an inserted word
    pub is_end_of_word: bool,
}

impl TrieNode {
    /// Creates a new empty trie node.
    pub fn new() -> Self {
        Self {
            children: BTreeMap::new(),
            is_end_of_word: false,
        }
    }
}

impl Default for TrieNode {
    fn default() -> Self {
        Self::new()
    }
}
