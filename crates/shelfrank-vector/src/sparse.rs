use std::collections::BTreeMap;

use crate::vocabulary::DimId;

/// Sparse weight vector, entries sorted by dimension with no zero weights.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    entries: Vec<(DimId, f32)>,
}

impl SparseVector {
    pub fn from_weights(weights: BTreeMap<DimId, f32>) -> Self {
        let entries = weights.into_iter().filter(|(_, w)| *w != 0.0).collect();
        Self { entries }
    }

    /// Scale to unit Euclidean length; the zero vector stays zero.
    #[must_use]
    pub fn l2_normalized(mut self) -> Self {
        let norm = self.norm();
        if norm > 0.0 {
            for (_, w) in &mut self.entries {
                *w /= norm;
            }
        }
        self
    }

    pub fn norm(&self) -> f32 {
        self.entries.iter().map(|(_, w)| w * w).sum::<f32>().sqrt()
    }

    pub fn dot(&self, other: &SparseVector) -> f32 {
        let (mut i, mut j, mut sum) = (0, 0, 0.0f32);
        while i < self.entries.len() && j < other.entries.len() {
            let (a_dim, a_w) = self.entries[i];
            let (b_dim, b_w) = other.entries[j];
            match a_dim.cmp(&b_dim) {
                std::cmp::Ordering::Less => i += 1,
                std::cmp::Ordering::Greater => j += 1,
                std::cmp::Ordering::Equal => {
                    sum += a_w * b_w;
                    i += 1;
                    j += 1;
                }
            }
        }
        sum
    }

    pub fn get(&self, dim: DimId) -> Option<f32> {
        self.entries
            .binary_search_by_key(&dim, |(d, _)| *d)
            .ok()
            .map(|idx| self.entries[idx].1)
    }

    pub fn is_zero(&self) -> bool { self.entries.is_empty() }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (DimId, f32)> + '_ { self.entries.iter().copied() }
}
