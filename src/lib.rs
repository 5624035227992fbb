//! An in-memory index from byte-string keys to values, built on a compressed radix trie.
//!
//! ```rust
//! use radix_index::RadixTrie;
//!
//! let mut trie = RadixTrie::new();
//! trie.insert("freddie", "kruger")?;
//! assert_eq!(trie.find("freddie")?, Some(&"kruger"));
//! assert_eq!(trie.find("fredie")?, None);
//! # Ok::<(), radix_index::TrieError>(())
//! ```

pub mod error;
pub mod iter;
pub mod keys;
pub mod mapping;
mod node;
pub mod observer;
pub mod partials;
pub mod stats;
pub mod sync;
pub mod tree;
pub mod utils;

#[cfg(all(test, feature = "tracing"))]
mod test_logging;

pub use error::{Result, TrieError};
pub use keys::VectorKey;
pub use observer::TrieObserver;
#[cfg(feature = "tracing")]
pub use observer::TracingObserver;
pub use stats::{TreeStats, TreeStatsTrait};
pub use sync::SharedRadixTrie;
pub use tree::RadixTrie;

/// The exact-match index interface: the operations a collaborator needs from a trie.
pub trait RadixTree<V> {
    /// Inserts or overwrites; `Ok(true)` if the key is new.
    fn insert<K: AsRef<[u8]>>(&mut self, key: K, value: V) -> Result<bool>;
    /// Exact-match lookup; `Ok(None)` if absent.
    fn find<K: AsRef<[u8]>>(&self, key: K) -> Result<Option<&V>>;
    /// Number of distinct stored keys.
    fn len(&self) -> usize;
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// All entries in ascending key order.
    fn walk(&self) -> Vec<(Vec<u8>, &V)>;
}
