use crate::partials::Partial;

/// Heap-allocated edge label of any length.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct VectorPartial {
    data: Box<[u8]>,
}

impl From<&[u8]> for VectorPartial {
    fn from(src: &[u8]) -> Self {
        Self::from_slice(src)
    }
}

impl AsRef<[u8]> for VectorPartial {
    fn as_ref(&self) -> &[u8] {
        &self.data
    }
}

impl Partial for VectorPartial {
    fn from_slice(src: &[u8]) -> Self {
        Self {
            data: Box::from(src),
        }
    }

    fn partial_before(&self, length: usize) -> Self {
        assert!(length <= self.data.len());
        VectorPartial::from_slice(&self.data[..length])
    }

    fn partial_after(&self, start: usize) -> Self {
        assert!(start <= self.data.len());
        VectorPartial::from_slice(&self.data[start..])
    }

    #[inline(always)]
    fn at(&self, pos: usize) -> u8 {
        assert!(pos < self.data.len());
        self.data[pos]
    }

    #[inline(always)]
    fn len(&self) -> usize {
        self.data.len()
    }

    fn prefix_length_slice(&self, slice: &[u8]) -> usize {
        self.data
            .iter()
            .zip(slice.iter())
            .take_while(|(a, b)| a == b)
            .count()
    }

    fn to_slice(&self) -> &[u8] {
        &self.data
    }
}
