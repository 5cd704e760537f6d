//! Puzzle configuration

use crate::{
    normalize_word, ConfigError, GeneratorConfig, Grid, GridParseError, Mode, MAX_DIMENSION, MAX_PLACEMENT_ATTEMPTS,
};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The stock word list
pub const DEFAULT_WORDS: [&str; 7] = ["AMBULANCE", "BOATS", "TRAIN", "AIRPLANE", "LORRY", "TRUCK", "JEEP"];

/// Hand-authored 8x10 grid holding every stock word (hard mode)
pub const FIXED_LAYOUT: [&str; 8] = [
    "AMBULANCED",
    "AIRPLANEXQ",
    "STAOBTRUCK",
    "NIARTWQXZL",
    "JEEPHGFDSO",
    "QWERTYUIPR",
    "MNBVCXZKHR",
    "PLKMJNHGFY",
];

pub fn default_words() -> Vec<String> {
    DEFAULT_WORDS.iter().map(|w| w.to_string()).collect()
}

/// Parse the built-in fixed grid
pub fn fixed_layout() -> Result<Grid, GridParseError> {
    Grid::from_rows(&FIXED_LAYOUT)
}

/// Everything needed to build a puzzle session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PuzzleConfig {
    pub words: Vec<String>,
    pub rows: usize,
    pub cols: usize,
    pub mode: Mode,
    pub max_attempts: usize,
    /// Rows of a hand-authored grid; when set, nothing is generated
    pub fixed: Option<Vec<String>>,
}

impl Default for PuzzleConfig {
    fn default() -> Self {
        Self {
            words: default_words(),
            rows: 10,
            cols: 10,
            mode: Mode::Hard,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
            fixed: None,
        }
    }
}

impl PuzzleConfig {
    /// The built-in fixed 8x10 puzzle
    pub fn fixed_default() -> Self {
        Self {
            rows: FIXED_LAYOUT.len(),
            cols: FIXED_LAYOUT[0].len(),
            fixed: Some(FIXED_LAYOUT.iter().map(|r| r.to_string()).collect()),
            ..Self::default()
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: PuzzleConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Check dimensions and that at least one usable word remains
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.fixed {
            Some(rows) => {
                Grid::from_rows(rows)?;
            }
            None if self.rows == 0 || self.cols == 0 => {
                return Err(ConfigError::ZeroDimensions {
                    rows: self.rows,
                    cols: self.cols,
                });
            }
            None if self.rows > MAX_DIMENSION || self.cols > MAX_DIMENSION => {
                return Err(ConfigError::TooLarge {
                    rows: self.rows,
                    cols: self.cols,
                    max: MAX_DIMENSION,
                });
            }
            None => {}
        }

        if self.words.iter().all(|w| normalize_word(w).is_none()) {
            return Err(ConfigError::NoWords);
        }
        Ok(())
    }

    pub fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            rows: self.rows,
            cols: self.cols,
            max_attempts: self.max_attempts,
        }
    }
}
