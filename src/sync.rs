//! Shared access under a single-writer / multi-reader lock.
//!
//! [`RadixTrie`] itself has no internal synchronization. [`SharedRadixTrie`] holds every
//! mutation under the write lock and every read under the read lock, so inserts are serialized
//! against each other and against finds and walks.

use std::sync::Arc;

use parking_lot::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::Result;
use crate::tree::RadixTrie;

/// A [`RadixTrie`] behind an `Arc<RwLock<..>>`. Cloning shares the same trie.
pub struct SharedRadixTrie<V> {
    inner: Arc<RwLock<RadixTrie<V>>>,
}

impl<V> Clone for SharedRadixTrie<V> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<V> Default for SharedRadixTrie<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> From<RadixTrie<V>> for SharedRadixTrie<V> {
    fn from(trie: RadixTrie<V>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(trie)),
        }
    }
}

impl<V> SharedRadixTrie<V> {
    #[must_use]
    pub fn new() -> Self {
        RadixTrie::new().into()
    }

    /// Inserts under the write lock. See [`RadixTrie::insert`].
    pub fn insert<K: AsRef<[u8]>>(&self, key: K, value: V) -> Result<bool> {
        self.inner.write().insert(key, value)
    }

    /// Finds under the read lock, returning a copy of the value.
    pub fn find<K: AsRef<[u8]>>(&self, key: K) -> Result<Option<V>>
    where
        V: Clone,
    {
        Ok(self.inner.read().find(key)?.cloned())
    }

    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Walks under the read lock, copying out every entry.
    pub fn walk(&self) -> Vec<(Vec<u8>, V)>
    where
        V: Clone,
    {
        self.inner
            .read()
            .walk()
            .into_iter()
            .map(|(k, v)| (k, v.clone()))
            .collect()
    }

    /// Holds the read lock for several operations.
    pub fn read(&self) -> RwLockReadGuard<'_, RadixTrie<V>> {
        self.inner.read()
    }

    /// Holds the write lock for several operations.
    pub fn write(&self) -> RwLockWriteGuard<'_, RadixTrie<V>> {
        self.inner.write()
    }
}
