pub mod sorted_keyed_mapping;

/// Maps the first byte of a child's edge label to the child itself.
pub trait NodeMapping<N> {
    /// Adds a child under `key` and returns a reference to it. `key` must not already be present.
    fn add_child(&mut self, key: u8, node: N) -> &mut N;
    fn seek_child(&self, key: u8) -> Option<&N>;
    /// Returns the slot holding `key`, usable with [`child_at`](NodeMapping::child_at).
    fn position(&self, key: u8) -> Option<usize>;
    fn child_at(&self, idx: usize) -> &N;
    fn child_at_mut(&mut self, idx: usize) -> &mut N;
    fn num_children(&self) -> usize;
}
