//! Test modules for the Olelo Trie library.
//!
//! This module contains the testing infrastructure, including:
//! - Parametrized lookup tests over a fixed vocabulary
//! - Property-based tests using proptest
//! - Shared test strategies and fixtures
//!
//! Structural white-box tests live next to the implementation in
//! `src/trie/mod.rs`; black-box tests against the public API live under
//! `tests/`.


// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{word_set_strategy, word_strategy, VOCABULARY};
