// Row filters applied between loading and composition
use serde::{Deserialize, Serialize};
use tracing::debug;
use crate::item::{GameFeatures, RawGame};

pub const DEFAULT_PRICE_MIN: f64 = 19.99;
pub const DEFAULT_PRICE_MAX: f64 = 59.99;

pub trait RowFilter {
    fn matches(&self, game: &RawGame) -> bool;
}

/// Closed price interval `[min, max]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceBand {
    pub min: f64,
    pub max: f64,
}

impl PriceBand {
    #[inline]
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// A missing price is neither above nor below a bound, so never inside.
    #[inline]
    pub fn contains(&self, price: Option<f64>) -> bool {
        price
            .map(|p| p >= self.min && p <= self.max)
            .unwrap_or(false)
    }
}

impl Default for PriceBand {
    fn default() -> Self {
        Self::new(DEFAULT_PRICE_MIN, DEFAULT_PRICE_MAX)
    }
}

impl RowFilter for PriceBand {
    fn matches(&self, game: &RawGame) -> bool {
        self.contains(game.price)
    }
}

/// Keep the rows accepted by `filter`, in their original order.
pub fn filter_rows<F: RowFilter + ?Sized>(rows: Vec<RawGame>, filter: &F) -> Vec<RawGame> {
    let before = rows.len();
    let kept: Vec<RawGame> = rows.into_iter().filter(|g| filter.matches(g)).collect();
    debug!(before, after = kept.len(), "row filter applied");
    kept
}

/// Reduce rows to the feature columns and drop any row missing one of them.
///
/// Only the feature columns are checked; gaps elsewhere never exclude a row.
pub fn project_complete(rows: Vec<RawGame>) -> Vec<GameFeatures> {
    let before = rows.len();
    let kept: Vec<GameFeatures> = rows.into_iter().filter_map(GameFeatures::from_raw).collect();
    debug!(before, after = kept.len(), "incomplete rows dropped");
    kept
}
