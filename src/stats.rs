//! Statistics and introspection.
//!
//! Gathered by a full traversal, so intended for tests, debugging and benchmarking rather than
//! for the hot path. [`RadixTrie::len`](crate::tree::RadixTrie::len) never uses it.

use crate::node::Node;
use crate::partials::Partial;
use crate::tree::RadixTrie;

pub trait TreeStatsTrait {
    fn get_tree_stats(&self) -> TreeStats;
}

/// Shape of a trie. The root is not counted as a node.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TreeStats {
    pub num_nodes: usize,
    /// Nodes holding a value. Always equal to the trie's `len()`.
    pub num_values: usize,
    /// Nodes without children.
    pub num_leaves: usize,
    /// Nodes with two or more children.
    pub num_branches: usize,
    /// Nodes with no value and fewer than two children. Insertion never leaves one behind.
    pub num_pass_through: usize,
    /// Edges on the longest root-to-node path.
    pub max_height: usize,
    /// Sum of all edge label lengths.
    pub total_label_bytes: usize,
}

impl<V, P: Partial> TreeStatsTrait for RadixTrie<V, P> {
    fn get_tree_stats(&self) -> TreeStats {
        let mut stats = TreeStats::default();
        let mut pending: Vec<(&Node<P, V>, usize)> =
            self.root().iter().map(|(_k, child)| (child, 1)).collect();
        while let Some((node, height)) = pending.pop() {
            record_node(node, &mut stats, height);
            pending.extend(node.iter().map(|(_k, child)| (child, height + 1)));
        }
        stats
    }
}

fn record_node<P: Partial, V>(node: &Node<P, V>, tree_stats: &mut TreeStats, height: usize) {
    if height > tree_stats.max_height {
        tree_stats.max_height = height;
    }
    tree_stats.num_nodes += 1;
    tree_stats.total_label_bytes += node.label.len();
    if node.value().is_some() {
        tree_stats.num_values += 1;
    } else if node.num_children() < 2 {
        tree_stats.num_pass_through += 1;
    }
    if node.is_leaf() {
        tree_stats.num_leaves += 1;
    } else if node.num_children() >= 2 {
        tree_stats.num_branches += 1;
    }
}
