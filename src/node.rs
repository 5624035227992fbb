use crate::mapping::sorted_keyed_mapping::SortedKeyedMapping;
use crate::mapping::NodeMapping;
use crate::observer::TrieObserver;
use crate::partials::Partial;

/// A trie vertex. The full key reaching a node is the concatenation of the labels on the path
/// from the root; no node stores its own key.
pub(crate) struct Node<P: Partial, V> {
    pub(crate) label: P,
    pub(crate) value: Option<V>,
    pub(crate) children: SortedKeyedMapping<Node<P, V>>,
}

/// Outcome of comparing the remaining key against the child edge selected by its first byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct EdgeMatch {
    pub(crate) slot: usize,
    /// Length of the common prefix of the edge label and the remaining key.
    pub(crate) common: usize,
    pub(crate) label_len: usize,
}

impl<P: Partial, V> Node<P, V> {
    #[inline]
    pub(crate) fn root() -> Self {
        Self::new_edge(P::from_slice(&[]))
    }

    /// A valueless, childless node. Only valid as the immediate target of an insert.
    #[inline]
    pub(crate) fn new_edge(label: P) -> Self {
        Self {
            label,
            value: None,
            children: SortedKeyedMapping::new(),
        }
    }

    #[cfg(test)]
    pub(crate) fn new_leaf(label: P, value: V) -> Self {
        Self {
            label,
            value: Some(value),
            children: SortedKeyedMapping::new(),
        }
    }

    pub(crate) fn value(&self) -> Option<&V> {
        self.value.as_ref()
    }

    pub(crate) fn value_mut(&mut self) -> Option<&mut V> {
        self.value.as_mut()
    }

    pub(crate) fn num_children(&self) -> usize {
        self.children.num_children()
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn seek_child(&self, key: u8) -> Option<&Node<P, V>> {
        self.children.seek_child(key)
    }

    /// Children in ascending order of the first byte of their labels.
    pub(crate) fn iter(&self) -> impl ExactSizeIterator<Item = (u8, &Self)> {
        self.children.iter()
    }

    /// Shortens this node's label to `at` bytes. The remainder of the label, the value and the
    /// children all move into a single new child, leaving this node as a pure branch point.
    pub(crate) fn split_at(&mut self, at: usize) {
        debug_assert!(at > 0 && at < self.label.len());
        let tail = Node {
            label: self.label.partial_after(at),
            value: self.value.take(),
            children: std::mem::take(&mut self.children),
        };
        self.label = self.label.partial_before(at);
        self.children = SortedKeyedMapping::with_child(tail.label.at(0), tail);
    }

    /// Finds the child whose label starts with `rest[0]` and measures how far it agrees with
    /// `rest`. Shared by the read-only and the extending walks.
    #[inline]
    pub(crate) fn match_edge(&self, rest: &[u8]) -> Option<EdgeMatch> {
        let first = *rest.first()?;
        let slot = self.children.position(first)?;
        let child = self.children.child_at(slot);
        Some(EdgeMatch {
            slot,
            common: child.label.prefix_length_slice(rest),
            label_len: child.label.len(),
        })
    }

    /// Returns the node whose path equals `key`, without modifying anything.
    pub(crate) fn locate<'a>(node: &'a Self, key: &[u8]) -> Option<&'a Self> {
        let mut cur_node = node;
        let mut depth = 0;
        loop {
            let rest = &key[depth..];
            let edge = cur_node.match_edge(rest)?;

            // Either a byte differs, or the key ends partway along the edge.
            if edge.common != edge.label_len {
                return None;
            }

            let child = cur_node.children.child_at(edge.slot);
            if edge.common == rest.len() {
                return Some(child);
            }
            depth += edge.common;
            cur_node = child;
        }
    }

    /// Mutable counterpart of [`Node::locate`]. Stops at the same node and never restructures.
    pub(crate) fn locate_existing_mut<'a>(node: &'a mut Self, key: &[u8]) -> Option<&'a mut Self> {
        let mut cur_node = node;
        let mut depth = 0;
        loop {
            let rest = &key[depth..];
            let edge = cur_node.match_edge(rest)?;
            if edge.common != edge.label_len {
                return None;
            }

            let child = cur_node.children.child_at_mut(edge.slot);
            if edge.common == rest.len() {
                return Some(child);
            }
            depth += edge.common;
            cur_node = child;
        }
    }

    /// Returns the node whose path equals `key`, splitting and creating edges until it exists.
    ///
    /// `key` must be non-empty. Each step consumes at least one byte.
    pub(crate) fn locate_mut<'a>(
        node: &'a mut Self,
        key: &[u8],
        observer: Option<&dyn TrieObserver>,
    ) -> &'a mut Self {
        debug_assert!(!key.is_empty());
        let mut cur_node = node;
        let mut depth = 0;
        loop {
            let rest = &key[depth..];

            let Some(edge) = cur_node.match_edge(rest) else {
                // No edge shares even the first byte: the whole remainder becomes one new edge.
                if let Some(observer) = observer {
                    observer.on_new_edge(depth, rest.len());
                }
                return cur_node
                    .children
                    .add_child(rest[0], Node::new_edge(P::from_slice(rest)));
            };

            let child = cur_node.children.child_at_mut(edge.slot);
            if edge.common < edge.label_len {
                child.split_at(edge.common);
                if let Some(observer) = observer {
                    observer.on_split(depth, edge.common);
                }
            }

            if edge.common == rest.len() {
                return child;
            }
            depth += edge.common;
            cur_node = child;
        }
    }

    /// Moves every child out of this node, leaving it a leaf.
    pub(crate) fn take_children(&mut self) -> std::vec::IntoIter<Self> {
        std::mem::take(&mut self.children).into_children()
    }
}
