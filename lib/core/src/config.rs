use crate::filter::{PriceBand, DEFAULT_PRICE_MAX, DEFAULT_PRICE_MIN};
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Parameters of one recommendation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommenderConfig {
    /// Path to the delimited game table
    #[serde(default = "default_input_path")]
    pub input_path: PathBuf,

    /// Lower bound of the retained price band (inclusive)
    #[serde(default = "default_price_min")]
    pub price_min: f64,

    /// Upper bound of the retained price band (inclusive)
    #[serde(default = "default_price_max")]
    pub price_max: f64,

    /// Title to find similar games for
    #[serde(default = "default_query_title")]
    pub query_title: String,

    /// Number of recommendations to return
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

fn default_input_path() -> PathBuf {
    PathBuf::from("steam_games.csv")
}

fn default_price_min() -> f64 {
    DEFAULT_PRICE_MIN
}

fn default_price_max() -> f64 {
    DEFAULT_PRICE_MAX
}

fn default_query_title() -> String {
    "DOOM Eternal".to_string()
}

fn default_top_k() -> usize {
    7
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self {
            input_path: default_input_path(),
            price_min: default_price_min(),
            price_max: default_price_max(),
            query_title: default_query_title(),
            top_k: default_top_k(),
        }
    }
}

impl RecommenderConfig {
    /// Read a JSON config file. Absent fields take their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.price_min.is_finite() || !self.price_max.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "price bounds must be finite, got [{}, {}]",
                self.price_min, self.price_max
            )));
        }
        if self.price_min > self.price_max {
            return Err(Error::InvalidConfig(format!(
                "price_min {} exceeds price_max {}",
                self.price_min, self.price_max
            )));
        }
        if self.top_k == 0 {
            return Err(Error::InvalidConfig("top_k must be at least 1".to_string()));
        }
        if self.query_title.trim().is_empty() {
            return Err(Error::InvalidConfig("query_title cannot be empty".to_string()));
        }
        Ok(())
    }

    #[inline]
    pub fn price_band(&self) -> PriceBand {
        PriceBand::new(self.price_min, self.price_max)
    }

    /// Apply `overrides` on top of this config and validate the result.
    ///
    /// Only the fields set in `overrides` change; everything else keeps the
    /// value from the file (or its default).
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Result<Self> {
        if let Some(input) = &overrides.input_path {
            self.input_path = input.clone();
        }
        if let Some(title) = &overrides.query_title {
            self.query_title = title.clone();
        }
        if let Some(k) = overrides.top_k {
            self.top_k = k;
        }
        if let Some(min) = overrides.price_min {
            self.price_min = min;
        }
        if let Some(max) = overrides.price_max {
            self.price_max = max;
        }
        self.validate()?;
        Ok(self)
    }
}

/// Per-run values that take precedence over a config file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfigOverrides {
    pub input_path: Option<PathBuf>,
    pub query_title: Option<String>,
    pub top_k: Option<usize>,
    pub price_min: Option<f64>,
    pub price_max: Option<f64>,
}
