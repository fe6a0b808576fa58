use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A sparse vector of term counts, stored as index-sorted pairs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SparseVector {
    indices: Vec<u32>,
    values: Vec<f64>,
}

impl SparseVector {
    /// Build from unordered `(index, value)` pairs.
    /// Repeated indices are summed; zero entries are dropped.
    #[must_use]
    pub fn new(mut pairs: Vec<(u32, f64)>) -> Self {
        pairs.sort_by_key(|&(idx, _)| idx);

        let mut indices: Vec<u32> = Vec::with_capacity(pairs.len());
        let mut values: Vec<f64> = Vec::with_capacity(pairs.len());
        for (idx, value) in pairs {
            match indices.last() {
                Some(&last) if last == idx => {
                    if let Some(v) = values.last_mut() {
                        *v += value;
                    }
                }
                _ => {
                    indices.push(idx);
                    values.push(value);
                }
            }
        }

        let (indices, values) = indices
            .into_iter()
            .zip(values)
            .filter(|&(_, v)| v != 0.0)
            .unzip();
        Self { indices, values }
    }

    #[inline]
    #[must_use]
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Dot product by merging the two sorted index lists
    pub fn dot(&self, other: &SparseVector) -> f64 {
        let (mut i, mut j) = (0, 0);
        let mut sum = 0.0;
        while i < self.indices.len() && j < other.indices.len() {
            match self.indices[i].cmp(&other.indices[j]) {
                Ordering::Less => i += 1,
                Ordering::Greater => j += 1,
                Ordering::Equal => {
                    sum += self.values[i] * other.values[j];
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Cosine similarity; 0.0 when either vector has zero norm
    pub fn cosine_similarity(&self, other: &SparseVector) -> f64 {
        self.cosine_with_norms(other, self.norm(), other.norm())
    }

    /// Cosine similarity with both norms already known, clamped to `[0, 1]`.
    /// 0.0 when either norm is zero.
    pub fn cosine_with_norms(&self, other: &SparseVector, norm_self: f64, norm_other: f64) -> f64 {
        if norm_self == 0.0 || norm_other == 0.0 {
            return 0.0;
        }
        (self.dot(other) / (norm_self * norm_other)).clamp(0.0, 1.0)
    }
}
