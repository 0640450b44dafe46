//! Ranking configuration.
//!
//! With the `config-file` feature a [`RankConfig`] can be read from TOML;
//! missing keys fall back to the defaults.
//!
//! ```toml
//! score-mode = "per-column"
//! max-results = 50
//! row-separator = " | "
//! ```

use crate::ranked::ScoreMode;

/// Knobs for a [`ListRankAndFilter`](crate::ListRankAndFilter) pass.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config-file", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(
    feature = "config-file",
    serde(default, rename_all = "kebab-case", deny_unknown_fields)
)]
pub struct RankConfig {
    pub score_mode: ScoreMode,
    /// Keep at most this many ranked items; `None` keeps all.
    pub max_results: Option<usize>,
    /// Joins field values into one candidate in whole-row mode.
    pub row_separator: String,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            score_mode: ScoreMode::WholeRow,
            max_results: None,
            row_separator: " ".to_owned(),
        }
    }
}

impl RankConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how field scores combine.
    #[must_use]
    pub fn score_mode(mut self, mode: ScoreMode) -> Self {
        self.score_mode = mode;
        self
    }

    /// Keep at most `limit` items.
    #[must_use]
    pub fn max_results(mut self, limit: usize) -> Self {
        self.max_results = Some(limit);
        self
    }

    /// Keep every matching item.
    #[must_use]
    pub fn unlimited(mut self) -> Self {
        self.max_results = None;
        self
    }

    /// Text placed between fields when scoring a whole row.
    #[must_use]
    pub fn row_separator(mut self, separator: impl Into<String>) -> Self {
        self.row_separator = separator.into();
        self
    }

    /// Parse a TOML document.
    #[cfg(feature = "config-file")]
    pub fn from_toml_str(source: &str) -> crate::Result<Self> {
        toml::from_str(source).map_err(|err| crate::PickListError::Config(err.to_string()))
    }

    /// Serialize to a TOML document.
    #[cfg(feature = "config-file")]
    pub fn to_toml_string(&self) -> crate::Result<String> {
        toml::to_string_pretty(self).map_err(|err| crate::PickListError::Config(err.to_string()))
    }
}
