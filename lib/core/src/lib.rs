//! # gamerec Core
//!
//! Core library for the gamerec recommender.
//!
//! This crate turns a raw game table into a finalized catalog:
//!
//! - [`loader`] - Reads the delimited dataset and coerces prices
//! - [`PriceBand`] - Closed price interval used to select titles
//! - [`compose`] - Builds the combined text and assigns dense ids
//! - [`Catalog`] - Immutable item collection indexed by id and name
//! - [`RecommenderConfig`] - Run parameters
//!
//! Each stage is a pure function from one value to the next.
//!
//! ## Example
//!
//! ```rust
//! use gamerec_core::{compose, filter_rows, load_games_from_reader, project_complete, PriceBand};
//!
//! let csv = "name,developer,popular_tags,game_details,genre,original_price\n\
//!            DOOM,id Software,\"FPS,Gore\",Single-player,Action,$19.99\n\
//!            Dota 2,Valve,MOBA,Multi-player,Strategy,Free\n";
//!
//! let rows = load_games_from_reader(csv.as_bytes()).unwrap();
//! let priced = filter_rows(rows, &PriceBand::default());
//! let catalog = compose(project_complete(priced));
//!
//! assert_eq!(catalog.len(), 1);
//! assert_eq!(catalog.id_of("DOOM").unwrap().index(), 0);
//! ```

pub mod catalog;
pub mod compose;
pub mod config;
pub mod error;
pub mod filter;
pub mod item;
pub mod loader;

pub use catalog::Catalog;
pub use compose::{combined_text, compose};
pub use config::{ConfigOverrides, RecommenderConfig};
pub use error::{Error, Result};
pub use filter::{filter_rows, project_complete, PriceBand, RowFilter};
pub use item::{GameFeatures, GameId, Item, RawGame};
pub use loader::{load_games, load_games_from_reader, parse_price, REQUIRED_COLUMNS};
