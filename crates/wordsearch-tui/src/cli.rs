use clap::Parser;
use std::path::PathBuf;
use wordsearch_core::{ConfigError, Mode, PuzzleConfig};

/// Play a word search in the terminal
#[derive(Parser, Debug)]
#[command(name = "wordsearch", version, about)]
pub struct Args {
    /// Puzzle mode: easy (→ and ↓ only) or hard (any direction)
    #[arg(long)]
    pub mode: Option<Mode>,

    /// Grid rows for generated puzzles
    #[arg(long)]
    pub rows: Option<usize>,

    /// Grid columns for generated puzzles
    #[arg(long)]
    pub cols: Option<usize>,

    /// Comma-separated target words
    #[arg(long, value_delimiter = ',')]
    pub words: Vec<String>,

    /// Seed for reproducible puzzles
    #[arg(long)]
    pub seed: Option<u64>,

    /// Play the built-in 8x10 grid instead of generating one
    #[arg(long)]
    pub fixed: bool,

    /// JSON puzzle config; flags override its values
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Merge the config file (if any) with command line overrides
    pub fn puzzle_config(&self) -> Result<PuzzleConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => PuzzleConfig::load(path)?,
            None => PuzzleConfig::default(),
        };

        if self.fixed {
            let fixed = PuzzleConfig::fixed_default();
            config.rows = fixed.rows;
            config.cols = fixed.cols;
            config.fixed = fixed.fixed;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if !self.words.is_empty() {
            config.words = self.words.clone();
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["wordsearch"]).unwrap();
        let config = args.puzzle_config().unwrap();
        assert_eq!(config, PuzzleConfig::default());
    }

    #[test]
    fn test_overrides() {
        let args = Args::try_parse_from([
            "wordsearch",
            "--mode",
            "easy",
            "--rows",
            "8",
            "--cols",
            "12",
            "--words",
            "cat,dog,emu",
            "--seed",
            "7",
        ])
        .unwrap();
        assert_eq!(args.seed, Some(7));

        let config = args.puzzle_config().unwrap();
        assert_eq!(config.mode, Mode::Easy);
        assert_eq!((config.rows, config.cols), (8, 12));
        assert_eq!(config.words, vec!["cat", "dog", "emu"]);
        assert!(config.fixed.is_none());
    }

    #[test]
    fn test_fixed_flag() {
        let args = Args::try_parse_from(["wordsearch", "--fixed"]).unwrap();
        let config = args.puzzle_config().unwrap();
        assert_eq!((config.rows, config.cols), (8, 10));
        assert!(config.fixed.is_some());
    }

    #[test]
    fn test_bad_mode_is_rejected() {
        assert!(Args::try_parse_from(["wordsearch", "--mode", "medium"]).is_err());
    }

    #[test]
    fn test_zero_rows_is_rejected() {
        let args = Args::try_parse_from(["wordsearch", "--rows", "0"]).unwrap();
        assert!(matches!(args.puzzle_config(), Err(ConfigError::ZeroDimensions { .. })));
    }
}
