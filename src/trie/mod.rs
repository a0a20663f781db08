//! Olelo Trie Implementation
//!
//! This module provides an in-memory prefix tree (trie) for storing a set of
//! words with fast membership checks and autocomplete-style prefix queries.
//!
//! Key features:
//! * Shared-node insertion: words with common prefixes share path segments
//! * Exact-match lookup and prefix existence checks in O(len(input))
//! * Prefix-bounded enumeration with canonical lexicographic ordering
//! * Structural deletion that prunes branches left without any word
//!
//! # Example
//!
//! ```
//! use olelo_trie::OleloTrie;
//!
//! let mut trie = OleloTrie::new();
//! trie.insert("dog");
//! trie.insert("dogs");
//!
//! assert!(trie.search("dog"));
//! assert!(!trie.search("do"));
//! assert!(trie.starts_with("do"));
//!
//! let words = trie.find_words_with_prefix("do");
//! assert_eq!(words, vec!["dog".to_string(), "dogs".to_string()]);
//!
//! trie.delete("dogs").unwrap();
//! assert!(trie.search("dog"));
//! assert!(!trie.search("dogs"));
//! ```

mod error;
mod node;

pub use error::OleloTrieError;
use node::TrieNode;

use tracing::{debug, trace};

/// Result type for Olelo Trie operations
pub type OleloTrieResult<T> = Result<T, OleloTrieError>;

/// Olelo Trie is an in-memory prefix tree storing a set of words with fast
/// membership and prefix queries.
///
/// Key properties:
/// * Strict tree ownership: the trie owns the root, each node owns its
///   children, and no node holds a parent or shared reference
/// * Mutation requires `&mut self`, so exclusive-writer access is enforced
///   by the compiler; callers needing cross-thread sharing wrap the trie in
///   a lock of their own choosing
/// * Enumeration results are returned in lexicographic order
/// * The empty string is a valid word: inserting it marks the root itself
#[derive(Debug, Default)]
pub struct OleloTrie {
    /// The root node of the trie. It carries no character and is never
    /// pruned, even when the last word is deleted.
    root: TrieNode,
}

impl OleloTrie {
    /// Creates a new empty `OleloTrie`.
    ///
    /// # Returns
    ///
    /// A new `OleloTrie` instance containing no words.
    pub fn new() -> Self {
        Self {
            root: TrieNode::new(),
        }
    }

    /// Inserts a word into the trie.
    ///
    /// Walks the trie from the root, creating a node for every character not
    /// already present on the path, then marks the final node as the end of
    /// a word. Inserting a word that is already present leaves the structure
    /// observably unchanged.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to insert. May be empty, in which case the root
    ///   itself is marked as a word end.
    pub fn insert<W: AsRef<str>>(&mut self, word: W) {
        let word = word.as_ref();

        let mut node = &mut self.root;
        for ch in word.chars() {
            node = node.children.entry(ch).or_default();
        }
        node.is_end_of_word = true;

        trace!(word, "inserted word into trie");
    }

    /// Checks whether a word is contained in the trie.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to look up.
    ///
    /// # Returns
    ///
    /// `true` iff the full character path exists and its terminal node marks
    /// the end of a word. A path that exists only as a prefix of longer
    /// words yields `false`.
    pub fn search<W: AsRef<str>>(&self, word: W) -> bool {
        self.find_node(word.as_ref())
            .is_some_and(|node| node.is_end_of_word)
    }

    /// Checks whether any word in the trie starts with the given prefix.
    ///
    /// The empty prefix always returns `true`: the zero-edge path trivially
    /// exists at the root.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to check.
    ///
    /// # Returns
    ///
    /// `true` iff the full character path for `prefix` exists, regardless of
    /// whether its terminal node marks a word end.
    pub fn starts_with<P: AsRef<str>>(&self, prefix: P) -> bool {
        self.find_node(prefix.as_ref()).is_some()
    }

    /// Returns every word in the trie that begins with the given prefix.
    ///
    /// Words are reconstructed by concatenating `prefix` with the characters
    /// accumulated along the depth-first walk below the prefix-end node, so
    /// the root-to-node path is never re-derived. Results are returned in
    /// lexicographic order, with the empty prefix enumerating the entire
    /// vocabulary.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The prefix to enumerate under.
    ///
    /// # Returns
    ///
    /// A vector of matching words, empty if the prefix path does not exist.
    pub fn find_words_with_prefix<P: AsRef<str>>(&self, prefix: P) -> Vec<String> {
        let prefix = prefix.as_ref();

        let mut words = Vec::new();
        if let Some(node) = self.find_node(prefix) {
            Self::collect_words(node, prefix.to_string(), &mut words);
        }
        words
    }

    /// Removes a word from the trie, pruning any branch left without words.
    ///
    /// The removal decision propagates bottom-up: a node is deleted from its
    /// parent only once it marks no word's end and has no remaining
    /// children. A node marking a shorter word on the same path (deleting
    /// "dogs" while "dog" is present) therefore survives, while dead nodes
    /// below it are reclaimed. The root is never pruned.
    ///
    /// # Arguments
    ///
    /// * `word` - The word to remove.
    ///
    /// # Returns
    ///
    /// * `Ok(())` - The word was present and has been removed.
    /// * `Err(OleloTrieError::WordNotFound)` - The word was not present; the
    ///   trie is left exactly as it was.
    pub fn delete<W: AsRef<str>>(&mut self, word: W) -> OleloTrieResult<()> {
        let word = word.as_ref();
        let chars: Vec<char> = word.chars().collect();

        match Self::remove_recursive(&mut self.root, &chars, 0) {
            Some(_) => {
                debug!(word, "deleted word from trie");
                Ok(())
            }
            None => Err(OleloTrieError::WordNotFound {
                word: word.to_string(),
            }),
        }
    }

    /// Returns the number of words in the trie.
    ///
    /// This counts end-of-word nodes by traversing the entire trie, so it is
    /// an O(n) operation.
    pub fn len(&self) -> usize {
        Self::count_words(&self.root)
    }

    /// Checks whether the trie contains no words.
    pub fn is_empty(&self) -> bool {
        self.root.children.is_empty() && !self.root.is_end_of_word
    }

    /// Removes every word from the trie, leaving a fresh root.
    pub fn clear(&mut self) {
        self.root = TrieNode::new();
    }

    /// Walks the character path for `path`, returning the node it ends at.
    fn find_node(&self, path: &str) -> Option<&TrieNode> {
        let mut node = &self.root;
        for ch in path.chars() {
            node = node.children.get(&ch)?;
        }
        Some(node)
    }

    /// Depth-first collection of the words below `node`.
    ///
    /// `word` is the full word spelled up to `node`; the accumulator is
    /// threaded through parameters so repeated enumerations never share
    /// state. Children are visited in key order and a node's own word is
    /// emitted before its extensions, which yields lexicographic output.
    fn collect_words(node: &TrieNode, word: String, words: &mut Vec<String>) {
        if node.is_end_of_word {
            words.push(word.clone());
        }

        for (ch, child) in &node.children {
            let mut next = word.clone();
            next.push(*ch);
            Self::collect_words(child, next, words);
        }
    }

    /// Recursive removal helper.
    ///
    /// Returns `None` when the word is absent — no node on the path has been
    /// mutated in that case — and `Some(prunable)` on success, where
    /// `prunable` tells the caller whether this node may now be removed from
    /// its parent. Recursion depth equals `word.len()`; the call stack
    /// stands in for parent pointers on the way back up.
    fn remove_recursive(node: &mut TrieNode, word: &[char], depth: usize) -> Option<bool> {
        if depth == word.len() {
            if !node.is_end_of_word {
                return None;
            }
            node.is_end_of_word = false;
            return Some(node.children.is_empty());
        }

        let ch = word[depth];
        let child = node.children.get_mut(&ch)?;
        let child_prunable = Self::remove_recursive(child, word, depth + 1)?;

        if child_prunable {
            node.children.remove(&ch);
        }

        // Prunability never propagates past a node that still marks a word
        // or still has other children.
        Some(!node.is_end_of_word && node.children.is_empty())
    }

    /// Counts end-of-word nodes in the subtree rooted at `node`.
    fn count_words(node: &TrieNode) -> usize {
        let mut count = if node.is_end_of_word { 1 } else { 0 };

        for child in node.children.values() {
            count += Self::count_words(child);
        }

        count
    }
}
