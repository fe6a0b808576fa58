//! Term-count vectorization
//!
//! The vocabulary is global: it is fitted once over every document of the
//! catalog, and term indices follow lexicographic term order so that the
//! same documents always produce the same vectors.

use crate::sparse::SparseVector;
use crate::tokenize::tokenize;
use ahash::AHashMap;
use std::collections::BTreeSet;
use tracing::debug;

/// Sorted term list with a reverse lookup
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: AHashMap<String, u32>,
}

impl Vocabulary {
    fn from_terms(terms: BTreeSet<String>) -> Self {
        let terms: Vec<String> = terms.into_iter().collect();
        let index = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i as u32))
            .collect();
        Self { terms, index }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    pub fn index_of(&self, term: &str) -> Option<u32> {
        self.index.get(term).copied()
    }
}

fn count_terms(tokens: &[String], index: &AHashMap<String, u32>) -> SparseVector {
    let mut counts: AHashMap<u32, f64> = AHashMap::new();
    for token in tokens {
        if let Some(&idx) = index.get(token) {
            *counts.entry(idx).or_insert(0.0) += 1.0;
        }
    }
    SparseVector::new(counts.into_iter().collect())
}

/// Bag-of-words vectorizer producing raw term counts
#[derive(Debug, Clone, Copy, Default)]
pub struct CountVectorizer;

impl CountVectorizer {
    /// Fit the vocabulary over `documents` and vectorize each of them.
    ///
    /// Documents are tokenized once; vector `i` belongs to document `i`.
    pub fn fit_transform<S: AsRef<str>>(documents: &[S]) -> (Vocabulary, Vec<SparseVector>) {
        let tokenized: Vec<Vec<String>> = documents.iter().map(|d| tokenize(d.as_ref())).collect();

        let terms: BTreeSet<String> = tokenized.iter().flatten().cloned().collect();
        let vocabulary = Vocabulary::from_terms(terms);

        let vectors: Vec<SparseVector> = tokenized
            .iter()
            .map(|tokens| count_terms(tokens, &vocabulary.index))
            .collect();

        debug!(
            documents = documents.len(),
            vocabulary = vocabulary.len(),
            "count vectors built"
        );
        (vocabulary, vectors)
    }
}
