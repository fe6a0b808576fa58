//! # gamerec
//!
//! A content-based video game recommender.
//!
//! gamerec reads a Steam catalog export, keeps titles inside a price band,
//! turns each title's metadata into a term-count vector and ranks the
//! catalog by cosine similarity to a reference title.
//!
//! ## Quick Start
//!
//! ### As a CLI
//!
//! ```bash
//! gamerec --input steam_games.csv --title "DOOM Eternal" --top-k 7
//! ```
//!
//! ### As a Library
//!
//! ```rust,no_run
//! use gamerec::prelude::*;
//!
//! let config = RecommenderConfig {
//!     input_path: "steam_games.csv".into(),
//!     ..Default::default()
//! };
//! let engine = RecommendationEngine::from_config(&config).unwrap();
//!
//! for rec in engine.recommend("DOOM Eternal", 7).unwrap() {
//!     println!("{} {} ({:.3})", rec.rank, rec.name, rec.score);
//! }
//! ```
//!
//! ## Crate Structure
//!
//! - `gamerec-core` - Loading, price filtering, feature composition, catalog
//! - `gamerec-similarity` - Vectorization, similarity matrix, ranking, reports

// Re-export core types
pub use gamerec_core::{
    Catalog, GameFeatures, GameId, Item, RawGame,
    PriceBand, RowFilter, RecommenderConfig, ConfigOverrides,
    Error, Result,
};

// Re-export the similarity engine
pub use gamerec_similarity::{
    SimilarityMatrix, Recommendation, RecommendationEngine,
    RecommendationReport, FeatureComparison, PipelineStats, RunSummary,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Catalog, GameId, Item,
        PriceBand, RecommenderConfig,
        Error, Result,
        SimilarityMatrix, Recommendation, RecommendationEngine,
        RecommendationReport, FeatureComparison,
    };
}

/// Pipeline stages, for callers composing them by hand
pub mod stages {
    pub use gamerec_core::{
        combined_text, compose, filter_rows, load_games, load_games_from_reader,
        parse_price, project_complete,
    };
    pub use gamerec_similarity::{recommend, CountVectorizer, Vocabulary};
}
