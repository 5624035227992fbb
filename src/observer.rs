//! Structural trace points.
//!
//! The trie never logs on its own. Install a [`TrieObserver`] with
//! [`RadixTrie::with_observer`](crate::tree::RadixTrie::with_observer) to be told when edges are
//! created or split; [`TracingObserver`] forwards those events to `tracing`.

/// Receives structural events from a trie. All methods default to doing nothing.
///
/// `depth` is the number of key bytes consumed above the node the event concerns.
pub trait TrieObserver: Send + Sync {
    /// An edge was shortened to `offset` bytes and its remainder moved into a new child.
    fn on_split(&self, _depth: usize, _offset: usize) {}

    /// A new edge carrying `label_len` key bytes was attached below an existing node.
    fn on_new_edge(&self, _depth: usize, _label_len: usize) {}

    /// An insert finished. `added` is false when an existing value was replaced.
    fn on_insert(&self, _added: bool, _len: usize) {}
}

/// Observer that emits `tracing` events at `trace` level for shape changes and `debug` level for
/// completed inserts.
#[cfg(feature = "tracing")]
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

#[cfg(feature = "tracing")]
impl TrieObserver for TracingObserver {
    fn on_split(&self, depth: usize, offset: usize) {
        tracing::trace!(depth, offset, "split edge");
    }

    fn on_new_edge(&self, depth: usize, label_len: usize) {
        tracing::trace!(depth, label_len, "new edge");
    }

    fn on_insert(&self, added: bool, len: usize) {
        tracing::debug!(added, len, "insert");
    }
}
