//! Engine tunables, loaded from TOML
//!
//! ```toml
//! search_depth = 5
//! beam_width = 6
//! tt_capacity = 1048576
//! hash_seed = 42
//! opponent_weight = 1.0
//! combo_floor = 1500
//! ```
//!
//! Every key is optional; missing keys take the defaults below.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::ConfigError;
use crate::eval::{PatternScore, Score, ScoreTable, MIN_OPPONENT_WEIGHT};
use crate::search::{DEFAULT_BEAM_WIDTH, DEFAULT_SEARCH_DEPTH};

/// Default transposition table size in slots
pub const DEFAULT_TT_CAPACITY: usize = 1 << 20;

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Plies searched below each root candidate
    pub search_depth: u8,
    /// Moves tried per node
    pub beam_width: usize,
    /// Transposition table slots
    pub tt_capacity: usize,
    /// Zobrist key seed; the binary picks one from the clock when unset
    pub hash_seed: Option<u64>,
    /// Scale applied to pattern scores of the opposing side
    pub opponent_weight: f64,
    /// Lower end of the combined-threat clamp range
    pub combo_floor: Score,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            search_depth: DEFAULT_SEARCH_DEPTH,
            beam_width: DEFAULT_BEAM_WIDTH,
            tt_capacity: DEFAULT_TT_CAPACITY,
            hash_seed: None,
            opponent_weight: 1.0,
            combo_floor: PatternScore::COMBO_FLOOR,
        }
    }
}

impl EngineConfig {
    /// Parse and validate a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML or unknown keys and
    /// [`ConfigError::Invalid`] for out-of-range values.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, otherwise as
    /// [`EngineConfig::from_toml_str`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Check every value is in range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.beam_width == 0 {
            return Err(invalid("beam_width", "must be at least 1"));
        }
        if self.tt_capacity == 0 {
            return Err(invalid("tt_capacity", "must be at least 1 slot"));
        }
        if !self.opponent_weight.is_finite() || self.opponent_weight < MIN_OPPONENT_WEIGHT {
            return Err(invalid(
                "opponent_weight",
                format!(
                    "{} is below {MIN_OPPONENT_WEIGHT}; double threats would go undetected",
                    self.opponent_weight
                ),
            ));
        }
        if self.combo_floor <= 0 || self.combo_floor >= PatternScore::COMBO_THREAT {
            return Err(invalid(
                "combo_floor",
                format!(
                    "{} is outside (0, {})",
                    self.combo_floor,
                    PatternScore::COMBO_THREAT
                ),
            ));
        }
        Ok(())
    }

    /// Pattern score table for these settings.
    #[must_use]
    pub fn score_table(&self) -> ScoreTable {
        ScoreTable::new(self.opponent_weight, self.combo_floor)
    }
}

fn invalid(field: &'static str, reason: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        reason: reason.into(),
    }
}
