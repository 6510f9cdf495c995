//! Search configuration.
//!
//! Depth brackets and terminal score magnitudes are plain values so they can
//! be tuned from a TOML file without touching the search.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Errors that can occur when loading or validating a configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The values parsed but cannot drive a search.
    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Tunable parameters of the alpha-beta search.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Games with fewer moves played than this search at `opening_depth`.
    pub depth_threshold: usize,
    /// Search depth before `depth_threshold` moves have been played.
    pub opening_depth: u32,
    /// Search depth from `depth_threshold` moves on.
    pub deep_depth: u32,
    /// Score of a win found on the first ply searched.
    pub winning_value: i32,
    /// Base score of a win found deeper in the tree.
    pub will_win_value: i32,
}

/// A position-score magnitude indicating a win (for White if positive,
/// Black if negative).
pub const WINNING_VALUE: i32 = i32::MAX - 20;

/// A magnitude indicating a forced win further down the tree. Kept below
/// [`WINNING_VALUE`] so that immediate wins are never put off.
pub const WILL_WIN_VALUE: i32 = i32::MAX - 40;

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth_threshold: 20,
            opening_depth: 4,
            deep_depth: 5,
            winning_value: WINNING_VALUE,
            will_win_value: WILL_WIN_VALUE,
        }
    }
}

impl SearchConfig {
    /// Parses a configuration from TOML text. Missing keys keep their
    /// defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: SearchConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Checks that the values describe a usable search.
    ///
    /// Both depths must be positive, and `will_win_value` plus the largest
    /// remaining depth must stay below `winning_value` so that an
    /// immediate win always outranks a slower one.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.opening_depth == 0 || self.deep_depth == 0 {
            return Err(ConfigError::Invalid(
                "search depths must be at least 1".to_string(),
            ));
        }
        let max_depth = self.opening_depth.max(self.deep_depth) as i64;
        if self.will_win_value <= 0
            || self.will_win_value as i64 + max_depth >= self.winning_value as i64
        {
            return Err(ConfigError::Invalid(format!(
                "will_win_value ({}) plus depth {} must be positive and below winning_value ({})",
                self.will_win_value, max_depth, self.winning_value
            )));
        }
        Ok(())
    }

    /// Returns the search depth for a game with `move_count` moves played.
    pub fn depth_for(&self, move_count: usize) -> u32 {
        if move_count < self.depth_threshold {
            self.opening_depth
        } else {
            self.deep_depth
        }
    }
}
