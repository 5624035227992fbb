use crate::mapping::NodeMapping;
use crate::utils::u8_keys::{
    u8_keys_find_insert_position_sorted, u8_keys_find_key_position_sorted,
};

/// Maps a key to a node, using a sorted array of keys and a corresponding array of nodes.
/// Presence of a key at a position means there is a node at the same position in children.
/// Keeping the keys sorted makes lookups a binary search and gives ascending iteration for free,
/// at the cost of shifting entries on insert.
#[derive(Debug)]
pub struct SortedKeyedMapping<N> {
    keys: Vec<u8>,
    children: Vec<N>,
}

impl<N> Default for SortedKeyedMapping<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N> SortedKeyedMapping<N> {
    #[inline]
    pub fn new() -> Self {
        Self {
            keys: Vec::new(),
            children: Vec::new(),
        }
    }

    /// A mapping holding exactly one child.
    pub fn with_child(key: u8, node: N) -> Self {
        Self {
            keys: vec![key],
            children: vec![node],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Consumes the mapping, yielding children in ascending key order.
    pub fn into_children(self) -> std::vec::IntoIter<N> {
        self.children.into_iter()
    }

    /// Children in ascending key order.
    #[inline]
    pub fn iter(&self) -> SortedKeyedMappingIter<'_, N> {
        SortedKeyedMappingIter {
            keys: self.keys.iter(),
            children: self.children.iter(),
        }
    }
}

pub struct SortedKeyedMappingIter<'a, N> {
    keys: std::slice::Iter<'a, u8>,
    children: std::slice::Iter<'a, N>,
}

impl<'a, N> Iterator for SortedKeyedMappingIter<'a, N> {
    type Item = (u8, &'a N);

    fn next(&mut self) -> Option<Self::Item> {
        Some((*self.keys.next()?, self.children.next()?))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.keys.size_hint()
    }
}

impl<N> ExactSizeIterator for SortedKeyedMappingIter<'_, N> {}

impl<N> NodeMapping<N> for SortedKeyedMapping<N> {
    fn add_child(&mut self, key: u8, node: N) -> &mut N {
        let Some(idx) = u8_keys_find_insert_position_sorted(key, &self.keys) else {
            panic!("add_child: key {key:#04x} already mapped");
        };
        self.keys.insert(idx, key);
        self.children.insert(idx, node);
        &mut self.children[idx]
    }

    fn seek_child(&self, key: u8) -> Option<&N> {
        let idx = u8_keys_find_key_position_sorted(key, &self.keys)?;
        Some(&self.children[idx])
    }

    #[inline]
    fn position(&self, key: u8) -> Option<usize> {
        u8_keys_find_key_position_sorted(key, &self.keys)
    }

    #[inline]
    fn child_at(&self, idx: usize) -> &N {
        &self.children[idx]
    }

    #[inline]
    fn child_at_mut(&mut self, idx: usize) -> &mut N {
        &mut self.children[idx]
    }

    #[inline(always)]
    fn num_children(&self) -> usize {
        self.keys.len()
    }
}
