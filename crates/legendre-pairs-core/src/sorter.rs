//! Distinct vectors in ascending lexicographic order.

use crate::loader::Collection;
use crate::vector::VectorKey;

/// Distinct vectors of one collection, strictly increasing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortedVectors {
    vectors: Vec<VectorKey>,
}

impl SortedVectors {
    /// Sort and deduplicate arbitrary vectors.
    pub fn new(mut vectors: Vec<VectorKey>) -> Self {
        vectors.sort_unstable();
        vectors.dedup();
        Self { vectors }
    }

    /// Sorted distinct vectors of `collection`.
    pub fn from_collection(collection: &Collection) -> Self {
        Self::new(collection.vectors().cloned().collect())
    }

    /// Common dimension, `None` when empty.
    pub fn dimension(&self) -> Option<usize> {
        self.vectors.first().map(VectorKey::dimension)
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    pub fn as_slice(&self) -> &[VectorKey] {
        &self.vectors
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VectorKey> {
        self.vectors.iter()
    }
}

impl From<&Collection> for SortedVectors {
    fn from(collection: &Collection) -> Self {
        Self::from_collection(collection)
    }
}
