//! Word search engine
//!
//! Lays target words into a letter grid, resolves start/end selections into
//! straight paths and matches them against the remaining words. Drawing is
//! left to a [`PuzzleView`] supplied by the front end.
//!
//! ```
//! use wordsearch_core::{NullView, Position, PuzzleConfig, PuzzleSession};
//!
//! let mut session = PuzzleSession::from_config(&PuzzleConfig::fixed_default()).unwrap();
//! let mut view = NullView;
//! session.select_cell(Position::new(0, 0), &mut view);
//! session.select_cell(Position::new(0, 8), &mut view);
//! assert!(session.is_found("AMBULANCE"));
//! ```

mod config;
mod direction;
mod error;
mod generator;
mod grid;
mod matcher;
mod path;
mod rng;
mod session;
mod view;

pub use config::{default_words, fixed_layout, PuzzleConfig, DEFAULT_WORDS, FIXED_LAYOUT};
pub use direction::{Direction, Mode};
pub use error::{ConfigError, GridParseError, SelectionError};
pub use generator::{normalize_word, Generator, GeneratorConfig, Placement, SolvedPath, MAX_PLACEMENT_ATTEMPTS};
pub use grid::{Grid, Position, MAX_DIMENSION};
pub use matcher::find_match;
pub use path::{resolve, ResolvedPath};
pub use rng::{RandomSource, SimpleRng};
pub use session::{GridSource, PuzzleEvent, PuzzleSession, SelectOutcome, SelectionState, Snapshot};
pub use view::{progress_text, reveal_label, CellStyle, NullView, PuzzleView, WordStyle};
