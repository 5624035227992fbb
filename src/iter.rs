use std::iter::FusedIterator;

use crate::mapping::sorted_keyed_mapping::SortedKeyedMappingIter;
use crate::node::Node;
use crate::partials::Partial;

type ChildIter<'a, P, V> = SortedKeyedMappingIter<'a, Node<P, V>>;

/// Ordered iterator over `(key, &value)` pairs. Created by
/// [`RadixTrie::iter`](crate::tree::RadixTrie::iter).
pub struct Iter<'a, P: Partial, V> {
    // One child iterator per level we have descended into, paired with the label length that
    // was pushed onto `cur_key` when we entered that level.
    node_iter_stack: Vec<(usize, ChildIter<'a, P, V>)>,
    cur_key: Vec<u8>,
    remaining: usize,
}

impl<'a, P: Partial, V> Iter<'a, P, V> {
    pub(crate) fn new(root: &'a Node<P, V>, len: usize) -> Self {
        Self {
            node_iter_stack: vec![(0, root.children.iter())],
            cur_key: Vec::new(),
            remaining: len,
        }
    }
}

impl<'a, P: Partial, V> Iterator for Iter<'a, P, V> {
    type Item = (Vec<u8>, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let (_, last_iter) = self.node_iter_stack.last_mut()?;

            let Some((_, node)) = last_iter.next() else {
                if let Some((label_len, _)) = self.node_iter_stack.pop() {
                    self.cur_key.truncate(self.cur_key.len() - label_len);
                }
                continue;
            };

            // Descend first: the node's own value precedes everything beneath it.
            self.cur_key.extend_from_slice(node.label.to_slice());
            self.node_iter_stack
                .push((node.label.len(), node.children.iter()));

            if let Some(v) = node.value() {
                self.remaining -= 1;
                return Some((self.cur_key.clone(), v));
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<P: Partial, V> ExactSizeIterator for Iter<'_, P, V> {}

impl<P: Partial, V> FusedIterator for Iter<'_, P, V> {}

/// Ordered iterator over values only. Created by
/// [`RadixTrie::values`](crate::tree::RadixTrie::values).
pub struct Values<'a, P: Partial, V> {
    node_iter_stack: Vec<ChildIter<'a, P, V>>,
    remaining: usize,
}

impl<'a, P: Partial, V> Values<'a, P, V> {
    pub(crate) fn new(root: &'a Node<P, V>, len: usize) -> Self {
        Self {
            node_iter_stack: vec![root.children.iter()],
            remaining: len,
        }
    }
}

impl<'a, P: Partial, V> Iterator for Values<'a, P, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let last_iter = self.node_iter_stack.last_mut()?;
            let Some((_, node)) = last_iter.next() else {
                self.node_iter_stack.pop();
                continue;
            };
            self.node_iter_stack.push(node.children.iter());
            if let Some(v) = node.value() {
                self.remaining -= 1;
                return Some(v);
            }
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<P: Partial, V> ExactSizeIterator for Values<'_, P, V> {}

impl<P: Partial, V> FusedIterator for Values<'_, P, V> {}
