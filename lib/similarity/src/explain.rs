//! Presentation of recommendation results
//!
//! Provides output structures that describe a query result: the ranked list
//! with summary statistics, and a side-by-side view of the feature columns
//! that drove the scores.

use crate::recommend::Recommendation;
use gamerec_core::{Catalog, GameId, Item};
use serde::Serialize;
use std::fmt;

/// Summary statistics for one query
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SimilarityStats {
    /// Number of items the query was ranked against
    pub candidates_count: usize,
    /// Number of results returned
    pub results_count: usize,
    pub avg_score: f64,
    pub best_score: f64,
}

impl SimilarityStats {
    /// Compute stats from results sorted best first
    pub fn compute(results: &[Recommendation], candidates_count: usize) -> Self {
        if results.is_empty() {
            return Self {
                candidates_count,
                results_count: 0,
                avg_score: 0.0,
                best_score: 0.0,
            };
        }

        let total: f64 = results.iter().map(|r| r.score).sum();
        Self {
            candidates_count,
            results_count: results.len(),
            avg_score: total / results.len() as f64,
            best_score: results[0].score,
        }
    }
}

/// A ranked answer to "what is similar to this title"
#[derive(Debug, Clone, Serialize)]
pub struct RecommendationReport {
    pub query: String,
    pub query_id: GameId,
    /// Number of results requested
    pub top_k: usize,
    pub recommendations: Vec<Recommendation>,
    pub stats: SimilarityStats,
}

impl RecommendationReport {
    pub fn new(
        query: impl Into<String>,
        query_id: GameId,
        top_k: usize,
        recommendations: Vec<Recommendation>,
        candidates_count: usize,
    ) -> Self {
        let stats = SimilarityStats::compute(&recommendations, candidates_count);
        Self {
            query: query.into(),
            query_id,
            top_k,
            recommendations,
            stats,
        }
    }
}

impl fmt::Display for RecommendationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "The {} most recommended games to {} are:",
            self.recommendations.len(),
            self.query
        )?;
        writeln!(f)?;
        for rec in &self.recommendations {
            writeln!(f, "{} {} ({:.4})", rec.rank, rec.name, rec.score)?;
        }
        Ok(())
    }
}

/// Feature columns of one title
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FeatureRow {
    pub name: String,
    pub genre: String,
    pub game_details: String,
    pub popular_tags: String,
    pub developer: String,
}

impl From<&Item> for FeatureRow {
    fn from(item: &Item) -> Self {
        Self {
            name: item.name.clone(),
            genre: item.genre.clone(),
            game_details: item.game_details.clone(),
            popular_tags: item.popular_tags.clone(),
            developer: item.developer.clone(),
        }
    }
}

/// The queried title followed by its recommendations, feature by feature
#[derive(Debug, Clone, Serialize)]
pub struct FeatureComparison {
    pub rows: Vec<FeatureRow>,
}

impl FeatureComparison {
    pub fn from_report(catalog: &Catalog, report: &RecommendationReport) -> Self {
        let rows = std::iter::once(report.query_id)
            .chain(report.recommendations.iter().map(|r| r.id))
            .filter_map(|id| catalog.get(id))
            .map(FeatureRow::from)
            .collect();
        Self { rows }
    }
}

impl fmt::Display for FeatureComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.rows {
            writeln!(f, "{}", row.name)?;
            writeln!(f, "  genre:        {}", row.genre)?;
            writeln!(f, "  game_details: {}", row.game_details)?;
            writeln!(f, "  popular_tags: {}", row.popular_tags)?;
            writeln!(f, "  developer:    {}", row.developer)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gamerec_core::{compose, GameFeatures};

    fn rec(rank: usize, id: usize, name: &str, score: f64) -> Recommendation {
        Recommendation {
            rank,
            id: GameId(id),
            name: name.to_string(),
            score,
        }
    }

    fn features(name: &str, developer: &str) -> GameFeatures {
        GameFeatures {
            name: name.to_string(),
            developer: developer.to_string(),
            genre: "Action".to_string(),
            popular_tags: "FPS,Gore".to_string(),
            game_details: "Single-player".to_string(),
            price: Some(59.99),
        }
    }

    #[test]
    fn test_similarity_stats() {
        let results = vec![rec(1, 2, "a", 0.9), rec(2, 5, "b", 0.6), rec(3, 1, "c", 0.3)];
        let stats = SimilarityStats::compute(&results, 10);

        assert_eq!(stats.candidates_count, 10);
        assert_eq!(stats.results_count, 3);
        assert_eq!(stats.best_score, 0.9);
        assert!((stats.avg_score - 0.6).abs() < 1e-9);
    }

    #[test]
    fn test_empty_stats() {
        let stats = SimilarityStats::compute(&[], 5);
        assert_eq!(stats.results_count, 0);
        assert_eq!(stats.best_score, 0.0);
    }

    #[test]
    fn test_report_display() {
        let report = RecommendationReport::new(
            "DOOM Eternal",
            GameId(0),
            2,
            vec![rec(1, 1, "DOOM", 0.8), rec(2, 2, "DUSK", 0.45)],
            3,
        );
        let text = report.to_string();
        assert_eq!(
            text,
            "The 2 most recommended games to DOOM Eternal are:\n\n1 DOOM (0.8000)\n2 DUSK (0.4500)\n"
        );
    }

    #[test]
    fn test_report_serialization() {
        let report = RecommendationReport::new("DOOM", GameId(3), 1, vec![rec(1, 0, "DUSK", 0.5)], 4);
        let json = serde_json::to_value(&report).unwrap();

        assert_eq!(json["query"], "DOOM");
        assert_eq!(json["query_id"], 3);
        assert_eq!(json["recommendations"][0]["name"], "DUSK");
        assert_eq!(json["stats"]["candidates_count"], 4);
    }

    #[test]
    fn test_feature_comparison_puts_query_first() {
        let catalog = compose(vec![
            features("DUSK", "New Blood"),
            features("DOOM Eternal", "id Software"),
            features("DOOM", "id Software"),
        ]);
        let report = RecommendationReport::new(
            "DOOM Eternal",
            GameId(1),
            2,
            vec![rec(1, 2, "DOOM", 0.9), rec(2, 0, "DUSK", 0.4)],
            3,
        );
        let comparison = FeatureComparison::from_report(&catalog, &report);
        let names: Vec<&str> = comparison.rows.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["DOOM Eternal", "DOOM", "DUSK"]);

        let text = comparison.to_string();
        assert!(text.starts_with("DOOM Eternal\n  genre:        Action\n"));
        assert!(text.contains("  developer:    New Blood\n"));
    }
}
