//! # gamerec Similarity
//!
//! Content similarity engine over a finalized game catalog.
//!
//! Each item's combined text becomes a term-count vector over a vocabulary
//! fitted on the whole catalog; every pair of vectors is compared by cosine
//! similarity, and a query sorts one row of the resulting matrix.
//!
//! ## Example
//!
//! ```rust
//! use gamerec_core::{compose, GameFeatures};
//! use gamerec_similarity::{recommend, SimilarityMatrix};
//!
//! let game = |name: &str, developer: &str, tags: &str| GameFeatures {
//!     name: name.to_string(),
//!     developer: developer.to_string(),
//!     genre: "Action".to_string(),
//!     popular_tags: tags.to_string(),
//!     game_details: "Single-player".to_string(),
//!     price: Some(19.99),
//! };
//!
//! let catalog = compose(vec![
//!     game("DOOM Eternal", "id Software", "FPS,Gore,Demons"),
//!     game("DOOM", "id Software", "FPS,Gore,Demons,Classic"),
//!     game("Stardew Valley", "ConcernedApe", "Farming,Relaxing"),
//! ]);
//! let matrix = SimilarityMatrix::build(&catalog);
//!
//! let recs = recommend(&matrix, &catalog, "DOOM Eternal", 1).unwrap();
//! assert_eq!(recs[0].name, "DOOM");
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Catalog   │────>│ Vectorizer  │────>│   Matrix    │
//! │  (texts)    │     │ (counts)    │     │  (cosine)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!       │                                        │
//!       │              ┌─────────────┐           │
//!       └─────────────>│  Recommend  │<──────────┘
//!                      │  (top-k)    │
//!                      └─────────────┘
//!                             │
//!                      ┌─────────────┐
//!                      │  Explain    │
//!                      │  (report)   │
//!                      └─────────────┘
//! ```

pub mod engine;
pub mod explain;
pub mod matrix;
pub mod recommend;
pub mod sparse;
pub mod tokenize;
pub mod vectorizer;

pub use engine::{PipelineStats, RecommendationEngine, RunSummary};
pub use explain::{FeatureComparison, FeatureRow, RecommendationReport, SimilarityStats};
pub use matrix::SimilarityMatrix;
pub use recommend::{rank_row, recommend, Recommendation};
pub use sparse::SparseVector;
pub use tokenize::tokenize;
pub use vectorizer::{CountVectorizer, Vocabulary};
