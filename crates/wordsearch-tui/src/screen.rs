use wordsearch_core::{CellStyle, Grid, Position, PuzzleView, WordStyle};

/// In-memory picture of what the session wants on screen.
///
/// The session drives it through [`PuzzleView`]; the renderer then paints it
/// with crossterm.
#[derive(Debug, Default)]
pub struct Screen {
    pub rows: usize,
    pub cols: usize,
    letters: Vec<char>,
    styles: Vec<CellStyle>,
    pub words: Vec<(String, WordStyle)>,
    pub status: String,
    pub found: usize,
    pub total: usize,
    pub answers_shown: bool,
    completion_pending: bool,
}

impl Screen {
    pub fn letter(&self, pos: Position) -> char {
        self.index(pos).map(|i| self.letters[i]).unwrap_or(' ')
    }

    pub fn style(&self, pos: Position) -> CellStyle {
        self.index(pos).map(|i| self.styles[i]).unwrap_or_default()
    }

    /// True once after the session signals completion
    pub fn take_completion(&mut self) -> bool {
        std::mem::take(&mut self.completion_pending)
    }

    fn index(&self, pos: Position) -> Option<usize> {
        (pos.row < self.rows && pos.col < self.cols).then(|| pos.row * self.cols + pos.col)
    }
}

impl PuzzleView for Screen {
    fn render_grid(&mut self, grid: &Grid) {
        self.rows = grid.rows();
        self.cols = grid.cols();
        self.letters = grid.positions().map(|p| grid.get(p).unwrap_or(' ')).collect();
        self.styles = vec![CellStyle::None; self.letters.len()];
    }

    fn render_word_list(&mut self, words: &[String]) {
        self.words = words.iter().map(|w| (w.clone(), WordStyle::None)).collect();
    }

    fn apply_cell_style(&mut self, pos: Position, style: CellStyle) {
        if let Some(i) = self.index(pos) {
            self.styles[i] = style;
        }
    }

    fn apply_word_style(&mut self, word: &str, style: WordStyle) {
        if let Some(entry) = self.words.iter_mut().find(|(w, _)| w == word) {
            entry.1 = style;
        }
    }

    fn show_status(&mut self, message: &str) {
        self.status = message.to_string();
    }

    fn show_progress(&mut self, found: usize, total: usize) {
        self.found = found;
        self.total = total;
    }

    fn show_reveal_state(&mut self, shown: bool) {
        self.answers_shown = shown;
    }

    fn show_completion(&mut self) {
        self.completion_pending = true;
    }
}
