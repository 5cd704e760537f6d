use crate::view::progress_text;
use crate::{
    find_match, normalize_word, path, CellStyle, ConfigError, Generator, GeneratorConfig, Grid, Mode,
    Placement, Position, PuzzleConfig, PuzzleView, RandomSource, SelectionError, SimpleRng, SolvedPath,
    WordStyle,
};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Where the grid comes from on each reset
#[derive(Debug, Clone)]
pub enum GridSource {
    /// Generate a new grid every time
    Generated,
    /// Replay a hand-authored grid
    Fixed(Grid),
}

/// Progress through a two-click selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionState {
    AwaitingStart,
    AwaitingEnd(Position),
}

/// What a call to [`PuzzleSession::select_cell`] did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// First click recorded; waiting for the end cell
    StartSelected(Position),
    /// A word was claimed; `complete` is true if it was the last one
    Found { word: String, complete: bool },
    /// Selection cleared without claiming anything
    Rejected(SelectionError),
}

/// Input events a front end forwards to the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleEvent {
    CellSelected(Position),
    ToggleReveal,
    ModeChanged(Mode),
    Reset,
}

/// Independent marks on a cell; the visible style is the strongest one
#[derive(Debug, Clone, Copy, Default)]
struct CellMarks {
    selected: bool,
    highlighted: bool,
    revealed: bool,
}

impl CellMarks {
    fn style(&self) -> CellStyle {
        if self.selected {
            CellStyle::Selected
        } else if self.highlighted {
            CellStyle::Highlighted
        } else if self.revealed {
            CellStyle::Revealed
        } else {
            CellStyle::None
        }
    }
}

/// Serializable picture of the session for front ends
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub rows: usize,
    pub cols: usize,
    pub grid: Vec<String>,
    pub styles: Vec<Vec<CellStyle>>,
    pub words: Vec<String>,
    pub found: Vec<String>,
    pub placed: usize,
    pub mode: Mode,
    pub answers_shown: bool,
    pub complete: bool,
}

/// One playable puzzle: grid, answers and the player's progress
pub struct PuzzleSession<R: RandomSource = SimpleRng> {
    words: Vec<String>,
    mode: Mode,
    source: GridSource,
    generator: Generator<R>,
    placement: Placement,
    found: HashSet<String>,
    selection: SelectionState,
    answers_shown: bool,
    marks: Vec<CellMarks>,
}

impl PuzzleSession {
    /// Build a session from config, seeding randomness from the platform
    pub fn from_config(config: &PuzzleConfig) -> Result<Self, ConfigError> {
        Self::from_config_with_rng(config, SimpleRng::new())
    }

    /// Play a hand-authored grid; solved paths are located by search
    pub fn with_fixed_grid(grid: Grid, words: &[String], mode: Mode) -> Result<Self, ConfigError> {
        let config = GeneratorConfig::with_size(grid.rows(), grid.cols());
        Self::build(
            prepare_words(words),
            mode,
            GridSource::Fixed(grid),
            Generator::with_rng(config, SimpleRng::new()),
        )
    }
}

impl<R: RandomSource> PuzzleSession<R> {
    /// Build a session from config using the given random source
    pub fn from_config_with_rng(config: &PuzzleConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        let source = match &config.fixed {
            Some(rows) => GridSource::Fixed(Grid::from_rows(rows)?),
            None => GridSource::Generated,
        };
        let generator = Generator::with_rng(config.generator_config(), rng);
        Self::build(prepare_words(&config.words), config.mode, source, generator)
    }

    /// Generate a fresh puzzle for `words`
    pub fn generated(words: &[String], mode: Mode, generator: Generator<R>) -> Result<Self, ConfigError> {
        Self::build(prepare_words(words), mode, GridSource::Generated, generator)
    }

    /// Fails with [`ConfigError::NoWords`] when no usable word is left
    fn build(
        words: Vec<String>,
        mode: Mode,
        source: GridSource,
        mut generator: Generator<R>,
    ) -> Result<Self, ConfigError> {
        if words.is_empty() {
            return Err(ConfigError::NoWords);
        }
        let placement = Self::place(&source, &mut generator, &words, mode);
        let marks = vec![CellMarks::default(); placement.grid.rows() * placement.grid.cols()];
        Ok(Self {
            words,
            mode,
            source,
            generator,
            placement,
            found: HashSet::new(),
            selection: SelectionState::AwaitingStart,
            answers_shown: false,
            marks,
        })
    }

    fn place(source: &GridSource, generator: &mut Generator<R>, words: &[String], mode: Mode) -> Placement {
        let placement = match source {
            GridSource::Generated => generator.generate(words, mode),
            GridSource::Fixed(grid) => Placement::locate(grid.clone(), words),
        };
        info!(
            "New {} puzzle {}x{}: placed {} of {} words",
            mode,
            placement.grid.rows(),
            placement.grid.cols(),
            placement.placed_count(),
            words.len()
        );
        placement
    }

    pub fn grid(&self) -> &Grid {
        &self.placement.grid
    }

    /// Target words in list order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn source(&self) -> &GridSource {
        &self.source
    }

    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    pub fn solved_paths(&self) -> &[SolvedPath] {
        &self.placement.solved
    }

    /// Words that did not make it into the grid
    pub fn unplaced(&self) -> &[String] {
        &self.placement.unplaced
    }

    pub fn placed_count(&self) -> usize {
        self.placement.placed_count()
    }

    pub fn found_count(&self) -> usize {
        self.found.len()
    }

    pub fn total_words(&self) -> usize {
        self.words.len()
    }

    pub fn is_found(&self, word: &str) -> bool {
        self.found.contains(word)
    }

    pub fn is_complete(&self) -> bool {
        self.found.len() == self.words.len()
    }

    pub fn answers_shown(&self) -> bool {
        self.answers_shown
    }

    /// Current visible style of a cell
    pub fn cell_style(&self, pos: Position) -> CellStyle {
        self.mark_index(pos)
            .map(|idx| self.marks[idx].style())
            .unwrap_or_default()
    }

    /// Current visible style of a word list entry
    pub fn word_style(&self, word: &str) -> WordStyle {
        let revealed = self.answers_shown && self.placement.path_for(word).is_some();
        if self.found.contains(word) || revealed {
            WordStyle::Found
        } else {
            WordStyle::None
        }
    }

    /// Draw everything from scratch
    pub fn render(&self, view: &mut impl PuzzleView) {
        view.render_grid(&self.placement.grid);
        view.render_word_list(&self.words);
        for pos in self.placement.grid.positions() {
            let style = self.cell_style(pos);
            if style != CellStyle::None {
                view.apply_cell_style(pos, style);
            }
        }
        for word in &self.words {
            let style = self.word_style(word);
            if style != WordStyle::None {
                view.apply_word_style(word, style);
            }
        }
        view.show_progress(self.found.len(), self.words.len());
        view.show_reveal_state(self.answers_shown);
    }

    /// Dispatch a front end event
    pub fn handle(&mut self, event: PuzzleEvent, view: &mut impl PuzzleView) -> Option<SelectOutcome> {
        match event {
            PuzzleEvent::CellSelected(pos) => return Some(self.select_cell(pos, view)),
            PuzzleEvent::ToggleReveal => self.toggle_reveal(view),
            PuzzleEvent::ModeChanged(mode) => self.change_mode(mode, view),
            PuzzleEvent::Reset => self.reset(view),
        }
        None
    }

    /// Handle a click on a cell: first click picks the start, second resolves
    pub fn select_cell(&mut self, pos: Position, view: &mut impl PuzzleView) -> SelectOutcome {
        match self.selection {
            SelectionState::AwaitingStart => {
                if !self.placement.grid.contains(pos) {
                    return self.reject(SelectionError::OutOfBounds(pos), view);
                }
                self.selection = SelectionState::AwaitingEnd(pos);
                self.update_mark(pos, view, |m| m.selected = true);
                view.show_status("Now click the ending letter");
                SelectOutcome::StartSelected(pos)
            }
            SelectionState::AwaitingEnd(start) => {
                let outcome = self.check_selection(start, pos, view);
                self.selection = SelectionState::AwaitingStart;
                self.update_mark(start, view, |m| m.selected = false);
                match outcome {
                    Ok(word) => {
                        let complete = self.mark_found(&word, view);
                        SelectOutcome::Found { word, complete }
                    }
                    Err(err) => self.reject(err, view),
                }
            }
        }
    }

    fn check_selection(
        &mut self,
        start: Position,
        end: Position,
        view: &mut impl PuzzleView,
    ) -> Result<String, SelectionError> {
        let resolved = path::resolve(&self.placement.grid, start, end, self.mode)?;
        let word = find_match(&resolved.letters, &self.words, &self.found)
            .map(str::to_string)
            .ok_or_else(|| SelectionError::NoMatch(resolved.letters.clone()))?;

        for &cell in &resolved.cells {
            self.update_mark(cell, view, |m| m.highlighted = true);
        }
        Ok(word)
    }

    /// Record a find; returns true on the transition into completion
    fn mark_found(&mut self, word: &str, view: &mut impl PuzzleView) -> bool {
        let was_complete = self.is_complete();
        self.found.insert(word.to_string());

        view.apply_word_style(word, WordStyle::Found);
        view.show_progress(self.found.len(), self.words.len());
        view.show_status(&format!("Found: {}!", word));

        let complete = !was_complete && self.is_complete();
        if complete {
            info!("Puzzle complete: {}", progress_text(self.found.len(), self.words.len()));
            view.show_completion();
        }
        complete
    }

    fn reject(&mut self, err: SelectionError, view: &mut impl PuzzleView) -> SelectOutcome {
        view.show_status(&format!(
            "That's not a word, try again ({})",
            self.mode.selection_hint()
        ));
        SelectOutcome::Rejected(err)
    }

    /// Show or hide the cells of every word not yet found
    pub fn toggle_reveal(&mut self, view: &mut impl PuzzleView) {
        self.answers_shown = !self.answers_shown;

        let solved = self.placement.solved.clone();
        if self.answers_shown {
            for path in &solved {
                if !self.found.contains(&path.word) {
                    for &cell in &path.cells {
                        self.update_mark(cell, view, |m| m.revealed = true);
                    }
                }
                view.apply_word_style(&path.word, WordStyle::Found);
            }
            view.show_status("Answers revealed!");
        } else {
            for path in &solved {
                for &cell in &path.cells {
                    self.update_mark(cell, view, |m| m.revealed = false);
                }
                if !self.found.contains(&path.word) {
                    view.apply_word_style(&path.word, WordStyle::None);
                }
            }
            view.show_status("Answers hidden");
        }
        view.show_reveal_state(self.answers_shown);
    }

    /// Switch mode and start a new puzzle
    pub fn change_mode(&mut self, mode: Mode, view: &mut impl PuzzleView) {
        self.mode = mode;
        self.reset(view);
    }

    /// Clear progress and build a new grid in the current mode
    pub fn reset(&mut self, view: &mut impl PuzzleView) {
        self.found.clear();
        self.selection = SelectionState::AwaitingStart;
        self.answers_shown = false;

        self.placement = Self::place(&self.source, &mut self.generator, &self.words, self.mode);
        self.marks = vec![CellMarks::default(); self.placement.grid.rows() * self.placement.grid.cols()];

        self.render(view);
        view.show_status("Click a starting letter");
    }

    pub fn snapshot(&self) -> Snapshot {
        let grid = &self.placement.grid;
        let styles = (0..grid.rows())
            .map(|row| {
                (0..grid.cols())
                    .map(|col| self.cell_style(Position::new(row, col)))
                    .collect()
            })
            .collect();

        Snapshot {
            rows: grid.rows(),
            cols: grid.cols(),
            grid: grid.to_row_strings(),
            styles,
            words: self.words.clone(),
            found: self.words.iter().filter(|w| self.found.contains(*w)).cloned().collect(),
            placed: self.placed_count(),
            mode: self.mode,
            answers_shown: self.answers_shown,
            complete: self.is_complete(),
        }
    }

    fn mark_index(&self, pos: Position) -> Option<usize> {
        let grid = &self.placement.grid;
        grid.contains(pos).then(|| pos.row * grid.cols() + pos.col)
    }

    fn update_mark(&mut self, pos: Position, view: &mut impl PuzzleView, change: impl FnOnce(&mut CellMarks)) {
        let Some(idx) = self.mark_index(pos) else {
            return;
        };
        let before = self.marks[idx].style();
        change(&mut self.marks[idx]);
        let after = self.marks[idx].style();
        if before != after {
            view.apply_cell_style(pos, after);
        }
    }
}

/// Normalise the target list: uppercase, drop invalid words and duplicates
fn prepare_words(words: &[String]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut prepared = Vec::with_capacity(words.len());
    for word in words {
        match normalize_word(word) {
            Some(upper) if seen.insert(upper.clone()) => prepared.push(upper),
            Some(upper) => warn!("Ignoring duplicate word {}", upper),
            None => warn!("Ignoring word {:?}: only letters A-Z are allowed", word),
        }
    }
    prepared
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{default_words, fixed_layout};
    use std::collections::HashMap;

    /// Records everything the session asks the view to do
    #[derive(Default)]
    struct RecordingView {
        cells: HashMap<Position, CellStyle>,
        words: HashMap<String, WordStyle>,
        statuses: Vec<String>,
        progress: Option<(usize, usize)>,
        reveal_shown: Option<bool>,
        completions: usize,
        grid_renders: usize,
    }

    impl PuzzleView for RecordingView {
        fn render_grid(&mut self, _grid: &Grid) {
            self.grid_renders += 1;
            self.cells.clear();
        }
        fn render_word_list(&mut self, words: &[String]) {
            self.words = words.iter().map(|w| (w.clone(), WordStyle::None)).collect();
        }
        fn apply_cell_style(&mut self, pos: Position, style: CellStyle) {
            self.cells.insert(pos, style);
        }
        fn apply_word_style(&mut self, word: &str, style: WordStyle) {
            self.words.insert(word.to_string(), style);
        }
        fn show_status(&mut self, message: &str) {
            self.statuses.push(message.to_string());
        }
        fn show_progress(&mut self, found: usize, total: usize) {
            self.progress = Some((found, total));
        }
        fn show_reveal_state(&mut self, shown: bool) {
            self.reveal_shown = Some(shown);
        }
        fn show_completion(&mut self) {
            self.completions += 1;
        }
    }

    impl RecordingView {
        fn cell(&self, pos: Position) -> CellStyle {
            self.cells.get(&pos).copied().unwrap_or_default()
        }
        fn word(&self, word: &str) -> WordStyle {
            self.words.get(word).copied().unwrap_or_default()
        }
        fn last_status(&self) -> &str {
            self.statuses.last().map(String::as_str).unwrap_or("")
        }
    }

    fn fixed_session(mode: Mode) -> (PuzzleSession, RecordingView) {
        let session =
            PuzzleSession::with_fixed_grid(fixed_layout().unwrap(), &default_words(), mode).unwrap();
        let mut view = RecordingView::default();
        session.render(&mut view);
        (session, view)
    }

    fn claim(session: &mut PuzzleSession, view: &mut RecordingView, start: Position, end: Position) -> SelectOutcome {
        session.select_cell(start, view);
        session.select_cell(end, view)
    }

    #[test]
    fn test_fixed_grid_locates_every_word() {
        let (session, _) = fixed_session(Mode::Hard);
        assert_eq!(session.placed_count(), 7);
        for path in session.solved_paths() {
            assert_eq!(session.grid().read_path(&path.cells).as_deref(), Some(path.word.as_str()));
        }
    }

    #[test]
    fn test_end_to_end_ambulance() {
        let (mut session, mut view) = fixed_session(Mode::Hard);

        let first = session.select_cell(Position::new(0, 0), &mut view);
        assert_eq!(first, SelectOutcome::StartSelected(Position::new(0, 0)));
        assert_eq!(session.selection(), SelectionState::AwaitingEnd(Position::new(0, 0)));
        assert_eq!(view.cell(Position::new(0, 0)), CellStyle::Selected);
        assert_eq!(view.last_status(), "Now click the ending letter");

        let outcome = session.select_cell(Position::new(0, 8), &mut view);
        assert_eq!(
            outcome,
            SelectOutcome::Found {
                word: "AMBULANCE".to_string(),
                complete: false
            }
        );
        assert_eq!(session.found_count(), 1);
        assert_eq!(view.progress, Some((1, 7)));
        assert_eq!(view.word("AMBULANCE"), WordStyle::Found);
        assert_eq!(view.last_status(), "Found: AMBULANCE!");
        for col in 0..9 {
            assert_eq!(view.cell(Position::new(0, col)), CellStyle::Highlighted);
        }
        assert_eq!(view.cell(Position::new(0, 9)), CellStyle::None);
        assert_eq!(session.selection(), SelectionState::AwaitingStart);
    }

    #[test]
    fn test_reverse_selection_claims_word() {
        let (mut session, mut view) = fixed_session(Mode::Hard);
        // TRAIN is written backwards on row 3
        let outcome = claim(&mut session, &mut view, Position::new(3, 0), Position::new(3, 4));
        assert!(matches!(outcome, SelectOutcome::Found { ref word, .. } if word == "TRAIN"));
    }

    #[test]
    fn test_found_word_cannot_be_claimed_twice() {
        let (mut session, mut view) = fixed_session(Mode::Hard);
        claim(&mut session, &mut view, Position::new(0, 0), Position::new(0, 8));
        let again = claim(&mut session, &mut view, Position::new(0, 8), Position::new(0, 0));
        assert_eq!(again, SelectOutcome::Rejected(SelectionError::NoMatch("ECNALUBMA".to_string())));
        assert_eq!(session.found_count(), 1);
    }

    #[test]
    fn test_invalid_selection_messages() {
        let (mut session, mut view) = fixed_session(Mode::Easy);
        let outcome = claim(&mut session, &mut view, Position::new(0, 0), Position::new(1, 1));
        assert!(matches!(outcome, SelectOutcome::Rejected(SelectionError::IllegalDirection { .. })));
        assert_eq!(view.last_status(), "That's not a word, try again (Must be straight → or ↓)");
        assert_eq!(view.cell(Position::new(0, 0)), CellStyle::None);
        assert_eq!(session.selection(), SelectionState::AwaitingStart);

        let (mut session, mut view) = fixed_session(Mode::Hard);
        let outcome = claim(&mut session, &mut view, Position::new(2, 2), Position::new(2, 2));
        assert_eq!(outcome, SelectOutcome::Rejected(SelectionError::SameCell));
        assert_eq!(view.last_status(), "That's not a word, try again (Must be straight H, V, or D)");
    }

    #[test]
    fn test_out_of_bounds_start_is_rejected() {
        let (mut session, mut view) = fixed_session(Mode::Hard);
        let outcome = session.select_cell(Position::new(20, 0), &mut view);
        assert_eq!(outcome, SelectOutcome::Rejected(SelectionError::OutOfBounds(Position::new(20, 0))));
        assert_eq!(session.selection(), SelectionState::AwaitingStart);
    }

    #[test]
    fn test_completion_fires_once() {
        let (mut session, mut view) = fixed_session(Mode::Hard);
        let paths = session.solved_paths().to_vec();
        let mut last = None;
        for path in &paths {
            let start = path.cells[0];
            let end = *path.cells.last().unwrap();
            last = Some(claim(&mut session, &mut view, start, end));
        }

        assert!(matches!(last, Some(SelectOutcome::Found { complete: true, .. })));
        assert!(session.is_complete());
        assert_eq!(view.completions, 1);

        session.toggle_reveal(&mut view);
        session.toggle_reveal(&mut view);
        assert_eq!(view.completions, 1);
        assert_eq!(view.progress, Some((7, 7)));
    }

    #[test]
    fn test_reveal_toggle_is_reversible() {
        let (mut session, mut view) = fixed_session(Mode::Hard);
        claim(&mut session, &mut view, Position::new(2, 5), Position::new(2, 9)); // TRUCK
        let truck: Vec<Position> = (5..10).map(|c| Position::new(2, c)).collect();

        session.toggle_reveal(&mut view);
        assert!(session.answers_shown());
        assert_eq!(view.reveal_shown, Some(true));
        assert_eq!(view.last_status(), "Answers revealed!");
        for path in session.solved_paths() {
            assert_eq!(view.word(&path.word), WordStyle::Found);
            for &cell in &path.cells {
                if !truck.contains(&cell) {
                    assert_ne!(view.cell(cell), CellStyle::None);
                }
            }
        }
        assert_eq!(view.cell(Position::new(3, 9)), CellStyle::Revealed); // LORRY
        assert_eq!(session.found_count(), 1);

        session.toggle_reveal(&mut view);
        assert_eq!(view.reveal_shown, Some(false));
        assert_eq!(view.last_status(), "Answers hidden");
        for pos in session.grid().positions() {
            let expected = if truck.contains(&pos) {
                CellStyle::Highlighted
            } else {
                CellStyle::None
            };
            assert_eq!(view.cell(pos), expected, "cell {}", pos);
            assert_eq!(session.cell_style(pos), expected);
        }
        for word in session.words() {
            let expected = if word == "TRUCK" { WordStyle::Found } else { WordStyle::None };
            assert_eq!(view.word(word), expected);
        }
    }

    #[test]
    fn test_find_while_revealed_keeps_highlight_after_hide() {
        let (mut session, mut view) = fixed_session(Mode::Hard);
        session.toggle_reveal(&mut view);
        claim(&mut session, &mut view, Position::new(4, 0), Position::new(4, 3)); // JEEP
        assert_eq!(view.cell(Position::new(4, 1)), CellStyle::Highlighted);

        session.toggle_reveal(&mut view);
        assert_eq!(view.cell(Position::new(4, 1)), CellStyle::Highlighted);
        assert_eq!(view.word("JEEP"), WordStyle::Found);
        assert_eq!(view.word("BOATS"), WordStyle::None);
    }

    #[test]
    fn test_reset_clears_progress() {
        let (mut session, mut view) = fixed_session(Mode::Hard);
        claim(&mut session, &mut view, Position::new(0, 0), Position::new(0, 8));
        session.toggle_reveal(&mut view);
        session.select_cell(Position::new(1, 0), &mut view);

        session.reset(&mut view);
        assert_eq!(session.found_count(), 0);
        assert!(!session.answers_shown());
        assert_eq!(session.selection(), SelectionState::AwaitingStart);
        assert_eq!(view.progress, Some((0, 7)));
        assert_eq!(view.reveal_shown, Some(false));
        assert_eq!(view.last_status(), "Click a starting letter");
        assert!(view.cells.is_empty());
        assert!(session.grid().positions().all(|p| session.cell_style(p) == CellStyle::None));
    }

    #[test]
    fn test_mode_change_regenerates() {
        let config = PuzzleConfig::default();
        let mut session = PuzzleSession::from_config_with_rng(&config, SimpleRng::with_seed(11)).unwrap();
        let mut view = RecordingView::default();
        session.render(&mut view);
        assert_eq!(view.grid_renders, 1);
        assert!(session.grid().is_filled());

        session.handle(PuzzleEvent::ModeChanged(Mode::Easy), &mut view);
        assert_eq!(session.mode(), Mode::Easy);
        assert_eq!(view.grid_renders, 2);
        assert!(session.grid().is_filled());
        for path in session.solved_paths() {
            let (a, b) = (path.cells[0], path.cells[1]);
            assert!(b == Position::new(a.row, a.col + 1) || b == Position::new(a.row + 1, a.col));
        }
    }

    #[test]
    fn test_generated_session_is_solvable() {
        let config = PuzzleConfig::default();
        for seed in 0..10 {
            let mut session = PuzzleSession::from_config_with_rng(&config, SimpleRng::with_seed(seed)).unwrap();
            let mut view = RecordingView::default();
            let paths = session.solved_paths().to_vec();
            for path in &paths {
                // claim backwards to exercise reverse matching
                let end = path.cells[0];
                let start = *path.cells.last().unwrap();
                let outcome = claim(&mut session, &mut view, start, end);
                assert!(matches!(outcome, SelectOutcome::Found { .. }), "seed {}: {:?}", seed, outcome);
            }
            assert_eq!(session.found_count(), session.placed_count());
        }
    }

    #[test]
    fn test_duplicate_and_invalid_words_are_skipped() {
        let words: Vec<String> = ["cat", "CAT", "d0g", "emu"].iter().map(|w| w.to_string()).collect();
        let session = PuzzleSession::generated(&words, Mode::Hard, Generator::with_seed(5)).unwrap();
        assert_eq!(session.words(), &["CAT".to_string(), "EMU".to_string()]);
        assert_eq!(session.total_words(), 2);
    }

    #[test]
    fn test_session_without_usable_words_is_rejected() {
        assert!(matches!(
            PuzzleSession::generated(&[], Mode::Hard, Generator::with_seed(1)),
            Err(ConfigError::NoWords)
        ));

        let junk: Vec<String> = vec!["".to_string(), "4x4".to_string()];
        assert!(matches!(
            PuzzleSession::generated(&junk, Mode::Easy, Generator::with_seed(1)),
            Err(ConfigError::NoWords)
        ));
        assert!(matches!(
            PuzzleSession::with_fixed_grid(fixed_layout().unwrap(), &junk, Mode::Hard),
            Err(ConfigError::NoWords)
        ));
    }

    #[test]
    fn test_oversized_generator_does_not_panic() {
        let config = GeneratorConfig::with_size(usize::MAX, usize::MAX);
        let generator = Generator::with_rng(config, SimpleRng::with_seed(3));
        let session = PuzzleSession::generated(&default_words(), Mode::Hard, generator).unwrap();
        assert_eq!(session.grid().rows(), crate::MAX_DIMENSION);
        assert_eq!(session.placed_count(), 7);
        assert!(!session.is_complete());
    }

    #[test]
    fn test_unplaced_word_is_detectable() {
        let config = PuzzleConfig {
            words: vec!["OX".to_string(), "EXTRAORDINARY".to_string()],
            rows: 5,
            cols: 5,
            ..PuzzleConfig::default()
        };
        let session = PuzzleSession::from_config_with_rng(&config, SimpleRng::with_seed(2)).unwrap();
        assert_eq!(session.placed_count(), 1);
        assert_eq!(session.unplaced(), &["EXTRAORDINARY".to_string()]);
        assert!(session.grid().is_filled());
    }

    #[test]
    fn test_snapshot_serializes() {
        let (mut session, mut view) = fixed_session(Mode::Hard);
        claim(&mut session, &mut view, Position::new(4, 0), Position::new(4, 3));
        let snapshot = session.snapshot();
        assert_eq!(snapshot.rows, 8);
        assert_eq!(snapshot.cols, 10);
        assert_eq!(snapshot.grid[0], "AMBULANCED");
        assert_eq!(snapshot.found, vec!["JEEP".to_string()]);
        assert_eq!(snapshot.styles[4][0], CellStyle::Highlighted);

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"mode\":\"hard\""));
        let back: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
