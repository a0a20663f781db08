//! Olelo Trie Library
//!
//! This library provides an in-memory prefix tree (trie) for fast string-set
//! membership checks and autocomplete-style prefix queries over a vocabulary
//! of ASCII/Unicode words. It supports insertion, exact-match lookup, prefix
//! existence checks, prefix-bounded word enumeration, and structural deletion
//! that reclaims dead branches.
//!
//! # Architecture
//!
//! The Olelo Trie is designed with the following principles in mind:
//! - Strict tree ownership: every node has exactly one owner, no parent or
//!   shared references
//! - Compiler-enforced access contract: mutation requires `&mut self`
//! - Comprehensive error handling and propagation
//! - Deterministic, canonically ordered enumeration results
//! - No unsafe code

// Re-export public modules
pub mod trie;

// Internal modules that are not part of the public API
#[cfg(test)]
pub(crate) mod tests;

pub use trie::{OleloTrie, OleloTrieError, OleloTrieResult};

/// Version information for the Olelo Trie library.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
