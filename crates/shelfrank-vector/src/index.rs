//! TF-IDF vector space over a corpus snapshot.
//!
//! Weights are raw term counts times a smoothed idf,
//! `idf(t) = ln((1 + N) / (1 + df(t))) + 1`, which stays positive even for a
//! term present in every document. Document and query vectors are
//! L2-normalized, so cosine similarity is a plain dot product.

use std::collections::BTreeMap;
use std::time::Instant;
use tracing::info;

use shelfrank_core::config::TextConfig;
use shelfrank_core::types::CatalogRecord;
use shelfrank_text::Normalizer;

use crate::sparse::SparseVector;
use crate::vocabulary::{DimId, Vocabulary};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexStats {
    pub documents: usize,
    pub vocabulary: usize,
    /// Documents that produced no indexable token.
    pub empty_documents: usize,
}

/// Immutable once built; rebuilt wholesale rather than updated.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    records: Vec<CatalogRecord>,
    vocabulary: Vocabulary,
    idf: Vec<f32>,
    vectors: Vec<SparseVector>,
    normalizer: Normalizer,
}

impl SearchIndex {
    pub fn build(records: Vec<CatalogRecord>, normalizer: Normalizer, text: &TextConfig) -> Self {
        let started = Instant::now();
        let mut vocabulary = Vocabulary::new();

        let counts: Vec<BTreeMap<DimId, u32>> = records
            .iter()
            .map(|record| {
                let mut tf = BTreeMap::new();
                for token in normalizer.normalize(&record.indexed_text()) {
                    if token.chars().count() < text.min_token_len {
                        continue;
                    }
                    *tf.entry(vocabulary.intern(&token)).or_insert(0) += 1;
                }
                tf
            })
            .collect();

        let mut df = vec![0u32; vocabulary.len()];
        for tf in &counts {
            for dim in tf.keys() {
                df[*dim as usize] += 1;
            }
        }
        let n = records.len();
        let idf: Vec<f32> = df.iter().map(|&d| smoothed_idf(n, d as usize)).collect();

        let vectors: Vec<SparseVector> = counts
            .iter()
            .map(|tf| weigh(tf, &idf).l2_normalized())
            .collect();

        info!(
            documents = n,
            vocabulary = vocabulary.len(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "built search index"
        );
        Self { records, vocabulary, idf, vectors, normalizer }
    }

    /// Map already-normalized query tokens into this space. Tokens outside the
    /// vocabulary carry no signal and are dropped.
    pub fn project(&self, tokens: &[String]) -> SparseVector {
        let mut tf: BTreeMap<DimId, u32> = BTreeMap::new();
        for token in tokens {
            if let Some(dim) = self.vocabulary.get(token) {
                *tf.entry(dim).or_insert(0) += 1;
            }
        }
        weigh(&tf, &self.idf).l2_normalized()
    }

    /// Normalize `query` with the same pipeline the corpus went through, then project.
    pub fn project_query(&self, query: &str) -> SparseVector {
        self.project(&self.normalizer.normalize(query))
    }

    /// Cosine similarity between document `position` and a projected query,
    /// clamped to [0, 1]. Zero when either side is the zero vector.
    pub fn cosine(&self, position: usize, query: &SparseVector) -> f32 {
        match self.vectors.get(position) {
            Some(doc) if !doc.is_zero() && !query.is_zero() => doc.dot(query).clamp(0.0, 1.0),
            _ => 0.0,
        }
    }

    pub fn records(&self) -> &[CatalogRecord] { &self.records }
    pub fn vectors(&self) -> &[SparseVector] { &self.vectors }
    pub fn vocabulary(&self) -> &Vocabulary { &self.vocabulary }

    pub fn idf(&self, token: &str) -> Option<f32> {
        self.vocabulary.get(token).map(|dim| self.idf[dim as usize])
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            documents: self.records.len(),
            vocabulary: self.vocabulary.len(),
            empty_documents: self.vectors.iter().filter(|v| v.is_zero()).count(),
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn smoothed_idf(n: usize, df: usize) -> f32 {
    ((((1 + n) as f64) / ((1 + df) as f64)).ln() + 1.0) as f32
}

fn weigh(tf: &BTreeMap<DimId, u32>, idf: &[f32]) -> SparseVector {
    #[allow(clippy::cast_precision_loss)]
    let weights = tf
        .iter()
        .map(|(&dim, &count)| (dim, count as f32 * idf[dim as usize]))
        .collect();
    SparseVector::from_weights(weights)
}
