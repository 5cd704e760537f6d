//! The interface between the puzzle session and whatever draws it

use crate::{Grid, Position};
use serde::{Deserialize, Serialize};

/// Visible style of a single grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellStyle {
    #[default]
    None,
    /// Pending start of a selection
    Selected,
    /// Part of a word the player found
    Highlighted,
    /// Part of an unfound word while answers are shown
    Revealed,
}

/// Visible style of an entry in the word list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WordStyle {
    #[default]
    None,
    Found,
}

/// Rendering collaborator driven by [`crate::PuzzleSession`].
///
/// The session never draws anything itself; it reports every visible change
/// through these calls. Front ends also own input and turn clicks or key
/// presses into session calls.
pub trait PuzzleView {
    /// Draw one cell per grid position
    fn render_grid(&mut self, grid: &Grid);

    /// Draw one entry per target word, addressable by the word itself
    fn render_word_list(&mut self, words: &[String]);

    fn apply_cell_style(&mut self, pos: Position, style: CellStyle);

    fn apply_word_style(&mut self, word: &str, style: WordStyle);

    fn show_status(&mut self, message: &str);

    /// "Found X of N"
    fn show_progress(&mut self, found: usize, total: usize);

    /// Whether answers are currently revealed (e.g. to relabel a toggle)
    fn show_reveal_state(&mut self, shown: bool);

    /// Called once when the last word is found
    fn show_completion(&mut self);
}

/// A view that ignores everything; for headless sessions
#[derive(Debug, Default, Clone, Copy)]
pub struct NullView;

impl PuzzleView for NullView {
    fn render_grid(&mut self, _grid: &Grid) {}
    fn render_word_list(&mut self, _words: &[String]) {}
    fn apply_cell_style(&mut self, _pos: Position, _style: CellStyle) {}
    fn apply_word_style(&mut self, _word: &str, _style: WordStyle) {}
    fn show_status(&mut self, _message: &str) {}
    fn show_progress(&mut self, _found: usize, _total: usize) {}
    fn show_reveal_state(&mut self, _shown: bool) {}
    fn show_completion(&mut self) {}
}

/// Progress panel text
pub fn progress_text(found: usize, total: usize) -> String {
    format!("Found {} of {}", found, total)
}

/// Label for the reveal toggle
pub fn reveal_label(shown: bool) -> &'static str {
    if shown {
        "Hide Answers"
    } else {
        "Reveal Answers"
    }
}
