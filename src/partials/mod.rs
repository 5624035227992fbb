pub mod vector_partial;

/// A compressed edge label: the run of key bytes consumed between a node's parent and the node.
pub trait Partial: AsRef<[u8]> + Sized {
    /// Creates a partial holding a copy of `src`.
    fn from_slice(src: &[u8]) -> Self;
    /// Returns a partial up to `length` bytes.
    fn partial_before(&self, length: usize) -> Self;
    /// Returns a partial from `start` onwards.
    fn partial_after(&self, start: usize) -> Self;
    /// Returns the byte at `pos`.
    fn at(&self, pos: usize) -> u8;
    /// Returns the length of the partial.
    fn len(&self) -> usize;
    /// Returns true if the partial is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
    /// Returns the length of the common prefix between `self` and `slice`.
    fn prefix_length_slice(&self, slice: &[u8]) -> usize;
    /// Returns the partial as a byte slice.
    fn to_slice(&self) -> &[u8];
}
