//! Owned key encodings.
//!
//! The trie accepts any `AsRef<[u8]>` as a key. [`VectorKey`] adds encodings whose byte order
//! agrees with the natural order of the source type, so that [`walk`](crate::tree::RadixTrie::walk)
//! yields integers in numeric order.

pub mod vector_key;

pub use vector_key::VectorKey;
