//! WebAssembly word search game
//!
//! Renders the puzzle into plain DOM elements. The page wires up its own
//! click and change handlers and forwards them to [`WordSearchGame`].

use serde::Serialize;
use wasm_bindgen::prelude::*;
use wordsearch_core::{Mode, Position, PuzzleConfig, PuzzleSession, PuzzleView, SelectOutcome};

mod dom;
mod logger;


pub use dom::{DomIds, DomView};

// Initialize panic hook and console logging
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    logger::init(log::LevelFilter::Info);
}

/// Progress summary handed to JavaScript
#[derive(Debug, Clone, Serialize)]
pub(crate) struct Progress {
    found: usize,
    total: usize,
    placed: usize,
    complete: bool,
    answers_shown: bool,
}

impl Progress {
    pub(crate) fn of(session: &PuzzleSession) -> Self {
        Self {
            found: session.found_count(),
            total: session.total_words(),
            placed: session.placed_count(),
            complete: session.is_complete(),
            answers_shown: session.answers_shown(),
        }
    }
}

pub(crate) fn state_json(session: &PuzzleSession) -> String {
    serde_json::to_string(&session.snapshot()).unwrap_or_default()
}

fn config_error(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}

/// The main WASM game controller
#[wasm_bindgen]
pub struct WordSearchGame {
    session: PuzzleSession,
    view: DomView,
}

#[wasm_bindgen]
impl WordSearchGame {
    /// Create a game rendering into the page's default element ids
    /// (`puzzle-grid`, `word-list`, `grid-status`, `progress-panel`,
    /// `reveal-button`, `complete-modal`)
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<WordSearchGame, JsValue> {
        Self::with_config(&PuzzleConfig::default())
    }

    /// Create a game from a JSON puzzle config
    #[wasm_bindgen(js_name = fromConfig)]
    pub fn from_config(config_json: &str) -> Result<WordSearchGame, JsValue> {
        let config = PuzzleConfig::from_json(config_json).map_err(config_error)?;
        Self::with_config(&config)
    }

    /// Create a game rendering into the given elements.
    ///
    /// `config_json` is optional; the stock puzzle is used without it.
    #[wasm_bindgen(js_name = withIds)]
    pub fn with_ids(
        grid: &str,
        word_list: &str,
        status: &str,
        progress: &str,
        reveal_button: &str,
        modal: &str,
        config_json: Option<String>,
    ) -> Result<WordSearchGame, JsValue> {
        let ids = DomIds::new(grid, word_list, status, progress, reveal_button, modal);
        let config = match config_json {
            Some(json) => PuzzleConfig::from_json(&json).map_err(config_error)?,
            None => PuzzleConfig::default(),
        };
        Self::build(&config, &ids)
    }

    fn with_config(config: &PuzzleConfig) -> Result<WordSearchGame, JsValue> {
        Self::build(config, &DomIds::default())
    }

    fn build(config: &PuzzleConfig, ids: &DomIds) -> Result<WordSearchGame, JsValue> {
        let document = web_sys::window()
            .ok_or("No window")?
            .document()
            .ok_or("No document")?;

        let view = DomView::new(document, ids)?;
        let session = PuzzleSession::from_config(config).map_err(config_error)?;

        let mut game = WordSearchGame { session, view };
        game.view.hide_completion();
        game.session.render(&mut game.view);
        game.view.show_status("Click a starting letter");
        Ok(game)
    }

    /// Handle a click on a cell; returns the word claimed, if any
    #[wasm_bindgen]
    pub fn select_cell(&mut self, row: usize, col: usize) -> Option<String> {
        match self.session.select_cell(Position::new(row, col), &mut self.view) {
            SelectOutcome::Found { word, .. } => Some(word),
            SelectOutcome::StartSelected(_) | SelectOutcome::Rejected(_) => None,
        }
    }

    /// Show or hide the answers
    #[wasm_bindgen]
    pub fn toggle_reveal(&mut self) {
        self.session.toggle_reveal(&mut self.view);
    }

    /// Switch to "easy" or "hard" and start a new puzzle
    #[wasm_bindgen]
    pub fn set_mode(&mut self, mode: &str) -> Result<(), JsValue> {
        let mode: Mode = mode.parse().map_err(|e: String| JsValue::from_str(&e))?;
        self.view.hide_completion();
        self.session.change_mode(mode, &mut self.view);
        Ok(())
    }

    /// Start a new puzzle in the current mode
    #[wasm_bindgen]
    pub fn reset(&mut self) {
        self.view.hide_completion();
        self.session.reset(&mut self.view);
    }

    /// Current mode as "easy" or "hard"
    #[wasm_bindgen]
    pub fn mode(&self) -> String {
        self.session.mode().to_string()
    }

    /// Target words in list order
    #[wasm_bindgen]
    pub fn words(&self) -> js_sys::Array {
        self.session
            .words()
            .iter()
            .map(|w| JsValue::from_str(w))
            .collect()
    }

    #[wasm_bindgen]
    pub fn found_count(&self) -> usize {
        self.session.found_count()
    }

    #[wasm_bindgen]
    pub fn total_words(&self) -> usize {
        self.session.total_words()
    }

    #[wasm_bindgen]
    pub fn is_complete(&self) -> bool {
        self.session.is_complete()
    }

    #[wasm_bindgen]
    pub fn answers_shown(&self) -> bool {
        self.session.answers_shown()
    }

    /// Progress as a plain JS object
    #[wasm_bindgen]
    pub fn progress(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&Progress::of(&self.session)).map_err(JsValue::from)
    }

    /// Get current puzzle state as JSON
    #[wasm_bindgen]
    pub fn get_state_json(&self) -> String {
        state_json(&self.session)
    }

    /// Get current puzzle state as a JS object
    #[wasm_bindgen]
    pub fn get_state(&self) -> Result<JsValue, JsValue> {
        serde_wasm_bindgen::to_value(&self.session.snapshot()).map_err(JsValue::from)
    }
}
