//! Pairwise cosine similarity over the whole catalog
//!
//! The matrix is dense, row-major and `N x N` in `f64`, which dominates the
//! memory footprint (about 128 MB for 4,000 items). Only the upper triangle
//! is computed; it is mirrored so `M[i][j] == M[j][i]` holds bit for bit.

use crate::sparse::SparseVector;
use crate::vectorizer::CountVectorizer;
use gamerec_core::{Catalog, GameId};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f64>,
    vocabulary_size: usize,
}

impl SimilarityMatrix {
    /// Fit the vocabulary and compute the matrix in one step.
    ///
    /// Any change to the catalog requires calling this again; vocabulary and
    /// scores are never updated separately.
    pub fn build(catalog: &Catalog) -> Self {
        let texts = catalog.texts();
        let (vocabulary, vectors) = CountVectorizer::fit_transform(&texts);
        let matrix = Self::from_vectors(&vectors, vocabulary.len());
        info!(
            items = matrix.len(),
            vocabulary = matrix.vocabulary_size(),
            "similarity matrix built"
        );
        matrix
    }

    /// Compute all pairwise similarities of `vectors`.
    ///
    /// The diagonal is 1.0 for non-zero vectors and 0.0 for zero vectors,
    /// whose cosine similarity is undefined. Off-diagonal values come from
    /// [`SparseVector::cosine_with_norms`] with each norm computed once.
    pub fn from_vectors(vectors: &[SparseVector], vocabulary_size: usize) -> Self {
        let n = vectors.len();
        debug!(
            n,
            bytes = n * n * std::mem::size_of::<f64>(),
            "allocating similarity matrix"
        );
        let mut data = vec![0.0f64; n * n];
        let norms: Vec<f64> = vectors.iter().map(SparseVector::norm).collect();

        for i in 0..n {
            if norms[i] == 0.0 {
                continue;
            }
            data[i * n + i] = 1.0;
            for j in (i + 1)..n {
                if norms[j] == 0.0 {
                    continue;
                }
                let score = vectors[i].cosine_with_norms(&vectors[j], norms[i], norms[j]);
                data[i * n + j] = score;
                data[j * n + i] = score;
            }
        }

        Self {
            n,
            data,
            vocabulary_size,
        }
    }

    /// Number of items on each axis
    #[inline]
    pub fn len(&self) -> usize {
        self.n
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    #[inline]
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    #[inline]
    pub fn get(&self, i: GameId, j: GameId) -> Option<f64> {
        if i.index() < self.n && j.index() < self.n {
            Some(self.data[i.index() * self.n + j.index()])
        } else {
            None
        }
    }

    /// Similarities of `id` against every item, in id order
    #[inline]
    pub fn row(&self, id: GameId) -> Option<&[f64]> {
        let start = id.index().checked_mul(self.n)?;
        if id.index() < self.n {
            Some(&self.data[start..start + self.n])
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamerec_core::{compose, GameFeatures};

    fn vectors(docs: &[&str]) -> Vec<SparseVector> {
        CountVectorizer::fit_transform(docs).1
    }

    fn game(name: &str, developer: &str, tags: &str) -> GameFeatures {
        GameFeatures {
            name: name.to_string(),
            developer: developer.to_string(),
            genre: "Action".to_string(),
            popular_tags: tags.to_string(),
            game_details: "Single-player".to_string(),
            price: Some(29.99),
        }
    }

    #[test]
    fn test_identity_and_orthogonal() {
        let m = SimilarityMatrix::from_vectors(&vectors(&["doom fps", "doom fps", "farm sim"]), 4);
        assert_eq!(m.get(GameId(0), GameId(0)), Some(1.0));
        assert!((m.get(GameId(0), GameId(1)).unwrap() - 1.0).abs() < 1e-12);
        assert_eq!(m.get(GameId(0), GameId(2)), Some(0.0));
        assert_eq!(m.get(GameId(3), GameId(0)), None);
    }

    #[test]
    fn test_known_cosine_value() {
        // [1,1,0] vs [1,0,1] -> 1/2
        let m = SimilarityMatrix::from_vectors(&vectors(&["aa bb", "aa cc"]), 3);
        assert!((m.get(GameId(0), GameId(1)).unwrap() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_zero_vector_row_is_all_zero() {
        let m = SimilarityMatrix::from_vectors(&vectors(&["doom fps", "", "- ! ?"]), 2);
        assert_eq!(m.row(GameId(1)).unwrap(), &[0.0, 0.0, 0.0]);
        assert_eq!(m.get(GameId(2), GameId(2)), Some(0.0));
        assert_eq!(m.get(GameId(0), GameId(0)), Some(1.0));
    }

    #[test]
    fn test_symmetric_in_range_with_unit_diagonal() {
        let catalog = compose(vec![
            game("DOOM Eternal", "id Software", "FPS,Gore,Demons"),
            game("DOOM", "id Software", "FPS,Gore,Classic"),
            game("DUSK", "New Blood Interactive", "FPS,Retro,Gore"),
            game("Stardew Valley", "ConcernedApe", "Farming,Relaxing"),
        ]);
        let m = SimilarityMatrix::build(&catalog);
        assert_eq!(m.len(), 4);

        for i in 0..m.len() {
            assert_eq!(m.get(GameId(i), GameId(i)), Some(1.0));
            for j in 0..m.len() {
                let a = m.get(GameId(i), GameId(j)).unwrap();
                let b = m.get(GameId(j), GameId(i)).unwrap();
                assert_eq!(a, b);
                assert!((0.0..=1.0).contains(&a));
            }
        }
    }

    #[test]
    fn test_rebuild_is_identical() {
        let catalog = compose(vec![
            game("A Game", "Studio One", "FPS,Horror"),
            game("B Game", "Studio Two", "Horror,Survival"),
            game("C Game", "Studio One", "Puzzle"),
        ]);
        assert_eq!(SimilarityMatrix::build(&catalog), SimilarityMatrix::build(&catalog));
    }

    #[test]
    fn test_empty_catalog() {
        let m = SimilarityMatrix::build(&compose(Vec::new()));
        assert!(m.is_empty());
        assert!(m.row(GameId(0)).is_none());
    }

    #[test]
    fn test_entries_match_pairwise_cosine() {
        let vs = vectors(&["doom fps gore gore", "dusk fps gore retro", "farm sim pixel fps"]);
        let m = SimilarityMatrix::from_vectors(&vs, 8);
        for i in 0..vs.len() {
            for j in (i + 1)..vs.len() {
                assert_eq!(m.get(GameId(i), GameId(j)), Some(vs[i].cosine_similarity(&vs[j])));
            }
        }
    }
}
