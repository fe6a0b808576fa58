//! Top-k queries against a built similarity matrix

use crate::matrix::SimilarityMatrix;
use gamerec_core::{Catalog, Error, GameId, Result};
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::cmp::Reverse;
use tracing::debug;

/// One recommended title
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    /// 1-based position in the result list
    pub rank: usize,
    pub id: GameId,
    pub name: String,
    pub score: f64,
}

/// Order a matrix row by descending score, ties by ascending id, leaving
/// out `exclude`.
///
/// The queried item is removed by id, not by assuming it sorts first:
/// a true duplicate also scores 1.0 and must stay in the results.
pub fn rank_row(row: &[f64], exclude: GameId) -> Vec<(GameId, f64)> {
    let mut scored: Vec<(GameId, f64)> = row
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != exclude.index())
        .map(|(i, &score)| (GameId(i), score))
        .collect();
    scored.sort_by_key(|&(id, score)| (Reverse(OrderedFloat(score)), id));
    scored
}

/// The `k` titles most similar to `title`.
///
/// Fails with [`Error::NotFound`] if no catalog item has that exact name;
/// neither the matrix nor the catalog is touched by a query.
pub fn recommend(
    matrix: &SimilarityMatrix,
    catalog: &Catalog,
    title: &str,
    k: usize,
) -> Result<Vec<Recommendation>> {
    if matrix.len() != catalog.len() {
        return Err(Error::InvalidCatalog(format!(
            "matrix has {} rows but catalog has {} items",
            matrix.len(),
            catalog.len()
        )));
    }

    let query_id = catalog.id_of(title)?;
    let row = matrix
        .row(query_id)
        .ok_or_else(|| Error::InvalidCatalog(format!("no matrix row for id {}", query_id)))?;

    let recommendations: Vec<Recommendation> = rank_row(row, query_id)
        .into_iter()
        .take(k)
        .enumerate()
        .filter_map(|(pos, (id, score))| {
            catalog.get(id).map(|item| Recommendation {
                rank: pos + 1,
                id,
                name: item.name.clone(),
                score,
            })
        })
        .collect();

    debug!(
        title,
        query_id = query_id.index(),
        returned = recommendations.len(),
        "recommendations ranked"
    );
    Ok(recommendations)
}
