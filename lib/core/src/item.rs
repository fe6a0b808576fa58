use serde::{Deserialize, Serialize};

/// Dense catalog identifier, `0..N` in catalog order.
///
/// Only stable within one run: rebuilding the catalog reassigns ids.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GameId(pub usize);

impl GameId {
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<usize> for GameId {
    fn from(i: usize) -> Self {
        GameId(i)
    }
}

/// A row as read from the dataset, before any filtering.
///
/// Every field is optional: missing cells and unparsable prices are `None`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawGame {
    /// Zero-based position among the data rows of the source file
    pub row: usize,
    pub name: Option<String>,
    pub developer: Option<String>,
    pub genre: Option<String>,
    pub popular_tags: Option<String>,
    pub game_details: Option<String>,
    pub price: Option<f64>,
}

/// The five feature columns of a row with no missing values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameFeatures {
    pub name: String,
    pub developer: String,
    pub genre: String,
    pub popular_tags: String,
    pub game_details: String,
    /// Carried along for reporting; not part of the similarity features
    pub price: Option<f64>,
}

impl GameFeatures {
    /// Project a raw row onto the feature columns.
    /// Returns `None` if any of the five is missing.
    pub fn from_raw(raw: RawGame) -> Option<Self> {
        Some(Self {
            name: raw.name?,
            developer: raw.developer?,
            genre: raw.genre?,
            popular_tags: raw.popular_tags?,
            game_details: raw.game_details?,
            price: raw.price,
        })
    }
}

/// A catalog entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: GameId,
    pub name: String,
    pub developer: String,
    pub genre: String,
    pub popular_tags: String,
    pub game_details: String,
    pub price: Option<f64>,
    /// Text fed to the vectorizer
    pub combined_text: String,
}

impl Item {
    #[inline]
    #[must_use]
    pub fn new(id: GameId, features: GameFeatures, combined_text: String) -> Self {
        Self {
            id,
            name: features.name,
            developer: features.developer,
            genre: features.genre,
            popular_tags: features.popular_tags,
            game_details: features.game_details,
            price: features.price,
            combined_text,
        }
    }
}
