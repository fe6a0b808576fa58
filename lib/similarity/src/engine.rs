//! End-to-end recommendation pipeline
//!
//! load -> price filter -> feature projection -> composition -> matrix.
//! Every stage consumes the previous stage's output and returns a new value;
//! the finished engine is read-only.

use crate::explain::{FeatureComparison, RecommendationReport};
use crate::matrix::SimilarityMatrix;
use crate::recommend::{recommend, Recommendation};
use gamerec_core::{
    compose, filter_rows, load_games, project_complete, Catalog, PriceBand, RawGame,
    RecommenderConfig, Result,
};
use serde::Serialize;
use tracing::info;

/// Row counts after each stage
///
/// The load and filter counts are only known when the engine ran those
/// stages; an engine built from a finished catalog leaves them at 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PipelineStats {
    pub loaded: usize,
    pub price_retained: usize,
    pub complete: usize,
    pub catalog_size: usize,
    pub vocabulary_size: usize,
}

/// Everything one run produces, in the shape of the JSON output
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub report: RecommendationReport,
    pub comparison: FeatureComparison,
    pub pipeline: PipelineStats,
}

pub struct RecommendationEngine {
    catalog: Catalog,
    matrix: SimilarityMatrix,
    stats: PipelineStats,
}

impl RecommendationEngine {
    /// Run the full pipeline over the dataset named in `config`.
    pub fn from_config(config: &RecommenderConfig) -> Result<Self> {
        config.validate()?;
        info!("Loading dataset from {:?}", config.input_path);
        let rows = load_games(&config.input_path)?;
        Ok(Self::from_rows(rows, config.price_band()))
    }

    /// Run every stage after loading.
    pub fn from_rows(rows: Vec<RawGame>, band: PriceBand) -> Self {
        let loaded = rows.len();

        let priced = filter_rows(rows, &band);
        let price_retained = priced.len();
        info!(
            loaded,
            retained = price_retained,
            "price band [{}, {}] applied",
            band.min,
            band.max
        );

        let complete_rows = project_complete(priced);
        let complete = complete_rows.len();
        info!(complete, "rows with missing features dropped");

        let mut engine = Self::from_catalog(compose(complete_rows));
        engine.stats.loaded = loaded;
        engine.stats.price_retained = price_retained;
        engine.stats.complete = complete;
        engine
    }

    /// Build the matrix for an already finalized catalog.
    pub fn from_catalog(catalog: Catalog) -> Self {
        let matrix = SimilarityMatrix::build(&catalog);
        let stats = PipelineStats {
            catalog_size: catalog.len(),
            vocabulary_size: matrix.vocabulary_size(),
            ..Default::default()
        };
        Self {
            catalog,
            matrix,
            stats,
        }
    }

    #[inline]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[inline]
    pub fn matrix(&self) -> &SimilarityMatrix {
        &self.matrix
    }

    #[inline]
    pub fn stats(&self) -> PipelineStats {
        self.stats
    }

    pub fn recommend(&self, title: &str, k: usize) -> Result<Vec<Recommendation>> {
        recommend(&self.matrix, &self.catalog, title, k)
    }

    /// Recommendations for `title` with the feature comparison table.
    pub fn report(&self, title: &str, k: usize) -> Result<(RecommendationReport, FeatureComparison)> {
        let query_id = self.catalog.id_of(title)?;
        let recommendations = self.recommend(title, k)?;
        let candidates = self.catalog.len().saturating_sub(1);
        let report = RecommendationReport::new(title, query_id, k, recommendations, candidates);
        let comparison = FeatureComparison::from_report(&self.catalog, &report);
        Ok((report, comparison))
    }

    /// Report, comparison and pipeline counts for one query.
    pub fn summary(&self, title: &str, k: usize) -> Result<RunSummary> {
        let (report, comparison) = self.report(title, k)?;
        Ok(RunSummary {
            report,
            comparison,
            pipeline: self.stats,
        })
    }
}
