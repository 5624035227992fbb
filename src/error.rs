//! Error types for trie operations.

use thiserror::Error;

/// Errors returned by [`RadixTrie`](crate::tree::RadixTrie) operations.
///
/// A key that is simply absent is not an error: lookups report it as `Ok(None)`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TrieError {
    /// The key was empty. Only the root sits at the empty path and it never holds a value.
    #[error("invalid key: keys must contain at least one byte")]
    InvalidKey,
}

/// Result type for trie operations.
pub type Result<T> = std::result::Result<T, TrieError>;
