//! Compressed radix trie.
//!
//! This module contains [`RadixTrie`], an exact-match index from byte-string keys to values.

use std::fmt::{self, Debug};
use std::sync::Arc;

use crate::error::{Result, TrieError};
use crate::iter::{Iter, Values};
use crate::node::Node;
use crate::observer::TrieObserver;
use crate::partials::vector_partial::VectorPartial;
use crate::partials::Partial;

/// A compressed prefix tree (PATRICIA-style radix trie) mapping byte-string keys to values.
///
/// Edges carry multi-byte labels. A key that diverges partway along an edge splits it, so every
/// node other than the root either holds a value or branches to at least two children.
///
/// Lookups are exact: a key that is only a prefix of stored keys is not found.
///
/// ## Type Parameters
///
/// - `V`: the stored value type. The trie never inspects or compares values.
/// - `P`: the edge label representation, [`VectorPartial`] by default.
///
/// ## Examples
///
/// ```rust
/// use radix_index::RadixTrie;
///
/// let mut trie = RadixTrie::new();
/// assert_eq!(trie.insert("james", 4), Ok(true));
/// assert_eq!(trie.insert("janice", 4), Ok(true));
/// assert_eq!(trie.insert("james", 5), Ok(false));
///
/// assert_eq!(trie.find("james"), Ok(Some(&5)));
/// assert_eq!(trie.find("jam"), Ok(None));
/// assert_eq!(trie.len(), 2);
///
/// let keys: Vec<Vec<u8>> = trie.walk().into_iter().map(|(k, _)| k).collect();
/// assert_eq!(keys, vec![b"james".to_vec(), b"janice".to_vec()]);
/// ```
pub struct RadixTrie<V, P: Partial = VectorPartial> {
    root: Node<P, V>,
    count: usize,
    observer: Option<Arc<dyn TrieObserver>>,
}

impl<V, P: Partial> Default for RadixTrie<V, P> {
    /// An empty trie with any label representation.
    fn default() -> Self {
        Self {
            root: Node::root(),
            count: 0,
            observer: None,
        }
    }
}

impl<V> RadixTrie<V> {
    /// Create a new empty trie.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<V, P: Partial> RadixTrie<V, P> {
    /// Create a new empty trie reporting structural changes to `observer`.
    pub fn with_observer(observer: Arc<dyn TrieObserver>) -> Self {
        let mut trie = Self::default();
        trie.observer = Some(observer);
        trie
    }

    /// Install or remove the observer.
    pub fn set_observer(&mut self, observer: Option<Arc<dyn TrieObserver>>) {
        self.observer = observer;
    }

    /// Insert a key-value pair, overwriting the value of an existing key.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the key was not present before
    /// - `Ok(false)` if an existing value was replaced
    /// - `Err(TrieError::InvalidKey)` if the key is empty
    pub fn insert<K>(&mut self, key: K, value: V) -> Result<bool>
    where
        K: AsRef<[u8]>,
    {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(TrieError::InvalidKey);
        }

        let observer = self.observer.as_deref();
        let node = Node::locate_mut(&mut self.root, key, observer);
        let added = node.value.replace(value).is_none();
        if added {
            self.count += 1;
        }
        if let Some(observer) = observer {
            observer.on_insert(added, self.count);
        }
        Ok(added)
    }

    /// Look up the value stored under exactly `key`.
    ///
    /// Returns `Ok(None)` if the key was never inserted, including when it is only a prefix of
    /// stored keys. Never modifies the trie.
    pub fn find<K>(&self, key: K) -> Result<Option<&V>>
    where
        K: AsRef<[u8]>,
    {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(TrieError::InvalidKey);
        }
        Ok(Node::locate(&self.root, key).and_then(Node::value))
    }

    /// Mutable access to the value stored under exactly `key`. Never changes the trie's shape.
    pub fn find_mut<K>(&mut self, key: K) -> Result<Option<&mut V>>
    where
        K: AsRef<[u8]>,
    {
        let key = key.as_ref();
        if key.is_empty() {
            return Err(TrieError::InvalidKey);
        }
        Ok(Node::locate_existing_mut(&mut self.root, key).and_then(Node::value_mut))
    }

    /// Number of stored keys, in constant time.
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Every entry in ascending key order, materialized eagerly.
    pub fn walk(&self) -> Vec<(Vec<u8>, &V)> {
        let mut entries = Vec::with_capacity(self.count);
        entries.extend(self.iter());
        entries
    }

    /// Lazy iterator over every entry in ascending key order. Yields the same sequence as
    /// [`walk`](RadixTrie::walk).
    pub fn iter(&self) -> Iter<'_, P, V> {
        Iter::new(&self.root, self.count)
    }

    /// Values in ascending key order, skipping key reconstruction.
    pub fn values(&self) -> Values<'_, P, V> {
        Values::new(&self.root, self.count)
    }

    pub(crate) fn root(&self) -> &Node<P, V> {
        &self.root
    }
}

impl<V, P: Partial> crate::RadixTree<V> for RadixTrie<V, P> {
    fn insert<K: AsRef<[u8]>>(&mut self, key: K, value: V) -> Result<bool> {
        RadixTrie::insert(self, key, value)
    }

    fn find<K: AsRef<[u8]>>(&self, key: K) -> Result<Option<&V>> {
        RadixTrie::find(self, key)
    }

    fn len(&self) -> usize {
        RadixTrie::len(self)
    }

    fn walk(&self) -> Vec<(Vec<u8>, &V)> {
        RadixTrie::walk(self)
    }
}

impl<'a, V, P: Partial> IntoIterator for &'a RadixTrie<V, P> {
    type Item = (Vec<u8>, &'a V);
    type IntoIter = Iter<'a, P, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Panics if any key is empty.
impl<K: AsRef<[u8]>, V, P: Partial> Extend<(K, V)> for RadixTrie<V, P> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            if let Err(e) = self.insert(key, value) {
                panic!("extend: {e}");
            }
        }
    }
}

/// Panics if any key is empty.
impl<K: AsRef<[u8]>, V, P: Partial> FromIterator<(K, V)> for RadixTrie<V, P> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut trie = Self::default();
        trie.extend(iter);
        trie
    }
}

impl<V: Debug, P: Partial> Debug for RadixTrie<V, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(
                self.iter()
                    .map(|(k, v)| (String::from_utf8_lossy(&k).into_owned(), v)),
            )
            .finish()
    }
}

// The generated drop recurses once per level; unwind from a heap stack instead.
impl<V, P: Partial> Drop for RadixTrie<V, P> {
    fn drop(&mut self) {
        let mut pending: Vec<Node<P, V>> = self.root.take_children().collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.take_children());
        }
    }
}
