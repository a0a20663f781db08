//! Error types for the Olelo Trie.
//!
//! This module defines the error types that can occur during Olelo Trie
//! operations.

/// Errors that can occur in Olelo Trie operations.
#[derive(Debug, thiserror::Error)]
pub enum OleloTrieError {
    /// Error when `delete` is asked to remove a word the trie does not
    /// contain, either because the character path is incomplete or because
    /// the terminal node does not mark a word's end. The trie is left
    /// unchanged.
    #[error("word not found in trie: '{word}'")]
    WordNotFound {
        /// The word that was not found.
        word: String,
    },
}
