//! DOM rendering for the browser game

use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, HtmlElement};
use wordsearch_core::{progress_text, reveal_label, CellStyle, Grid, Position, PuzzleView, WordStyle};

/// Every class the view may put on a grid cell
const CELL_CLASSES: [&str; 3] = ["selected", "highlighted", "reveal-answer"];

/// CSS class for a cell style (None means no class)
pub(crate) fn cell_class(style: CellStyle) -> Option<&'static str> {
    match style {
        CellStyle::None => None,
        CellStyle::Selected => Some("selected"),
        CellStyle::Highlighted => Some("highlighted"),
        CellStyle::Revealed => Some("reveal-answer"),
    }
}

pub(crate) fn cell_id(pos: Position) -> String {
    format!("cell-{}-{}", pos.row, pos.col)
}

pub(crate) fn word_id(word: &str) -> String {
    format!("word-{}", word)
}

/// Element ids the page provides
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomIds {
    pub grid: String,
    pub word_list: String,
    pub status: String,
    pub progress: String,
    pub reveal_button: String,
    pub modal: String,
}

impl DomIds {
    pub fn new(grid: &str, word_list: &str, status: &str, progress: &str, reveal_button: &str, modal: &str) -> Self {
        Self {
            grid: grid.into(),
            word_list: word_list.into(),
            status: status.into(),
            progress: progress.into(),
            reveal_button: reveal_button.into(),
            modal: modal.into(),
        }
    }
}

impl Default for DomIds {
    fn default() -> Self {
        Self::new(
            "puzzle-grid",
            "word-list",
            "grid-status",
            "progress-panel",
            "reveal-button",
            "complete-modal",
        )
    }
}

/// Renders the puzzle as plain DOM elements styled by CSS classes.
///
/// Cells are `div.grid-cell` with `data-row`/`data-col` attributes so the
/// page can delegate clicks back into the game.
pub struct DomView {
    document: Document,
    grid: HtmlElement,
    word_list: Element,
    status: Element,
    progress: Option<Element>,
    reveal_button: Option<Element>,
    modal: Option<HtmlElement>,
}

impl DomView {
    pub fn new(document: Document, ids: &DomIds) -> Result<Self, JsValue> {
        let grid = document
            .get_element_by_id(&ids.grid)
            .ok_or("Grid container not found")?
            .dyn_into::<HtmlElement>()?;
        let word_list = document
            .get_element_by_id(&ids.word_list)
            .ok_or("Word list not found")?;
        let status = document
            .get_element_by_id(&ids.status)
            .ok_or("Status element not found")?;

        // Optional panels
        let progress = document.get_element_by_id(&ids.progress);
        let reveal_button = document.get_element_by_id(&ids.reveal_button);
        let modal = document
            .get_element_by_id(&ids.modal)
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        Ok(Self {
            document,
            grid,
            word_list,
            status,
            progress,
            reveal_button,
            modal,
        })
    }

    /// Hide the completion modal (e.g. before a new puzzle)
    pub fn hide_completion(&self) {
        if let Some(modal) = &self.modal {
            report(modal.style().set_property("display", "none"));
        }
    }

    fn build_cell(&self, pos: Position, letter: char) -> Result<Element, JsValue> {
        let cell = self.document.create_element("div")?;
        cell.class_list().add_1("grid-cell")?;
        cell.set_text_content(Some(&letter.to_string()));
        cell.set_attribute("data-row", &pos.row.to_string())?;
        cell.set_attribute("data-col", &pos.col.to_string())?;
        cell.set_id(&cell_id(pos));
        Ok(cell)
    }

    fn build_grid(&self, grid: &Grid) -> Result<(), JsValue> {
        self.grid.set_inner_html("");
        for pos in grid.positions() {
            let letter = grid.get(pos).unwrap_or(' ');
            let cell = self.build_cell(pos, letter)?;
            self.grid.append_child(&cell)?;
        }
        self.grid.style().set_property(
            "grid-template-columns",
            &format!("repeat({}, var(--grid-cell-size))", grid.cols()),
        )
    }

    fn build_word_list(&self, words: &[String]) -> Result<(), JsValue> {
        self.word_list.set_inner_html("");
        for word in words {
            let item = self.document.create_element("li")?;
            item.class_list().add_1("word-item")?;
            item.set_text_content(Some(word));
            item.set_id(&word_id(word));
            self.word_list.append_child(&item)?;
        }
        Ok(())
    }

    fn style_cell(&self, pos: Position, style: CellStyle) -> Result<(), JsValue> {
        let Some(cell) = self.document.get_element_by_id(&cell_id(pos)) else {
            return Ok(());
        };
        let classes = cell.class_list();
        for class in CELL_CLASSES {
            classes.remove_1(class)?;
        }
        if let Some(class) = cell_class(style) {
            classes.add_1(class)?;
        }
        Ok(())
    }

    fn style_word(&self, word: &str, style: WordStyle) -> Result<(), JsValue> {
        let Some(item) = self.document.get_element_by_id(&word_id(word)) else {
            return Ok(());
        };
        match style {
            WordStyle::Found => item.class_list().add_1("found"),
            WordStyle::None => item.class_list().remove_1("found"),
        }
    }
}

/// DOM calls only fail on malformed ids or detached nodes; log and carry on
fn report(result: Result<(), JsValue>) {
    if let Err(err) = result {
        warn!("DOM update failed: {:?}", err);
    }
}

impl PuzzleView for DomView {
    fn render_grid(&mut self, grid: &Grid) {
        report(self.build_grid(grid));
    }

    fn render_word_list(&mut self, words: &[String]) {
        report(self.build_word_list(words));
    }

    fn apply_cell_style(&mut self, pos: Position, style: CellStyle) {
        report(self.style_cell(pos, style));
    }

    fn apply_word_style(&mut self, word: &str, style: WordStyle) {
        report(self.style_word(word, style));
    }

    fn show_status(&mut self, message: &str) {
        self.status.set_text_content(Some(message));
    }

    fn show_progress(&mut self, found: usize, total: usize) {
        if let Some(progress) = &self.progress {
            progress.set_text_content(Some(&progress_text(found, total)));
        }
    }

    fn show_reveal_state(&mut self, shown: bool) {
        if let Some(button) = &self.reveal_button {
            button.set_text_content(Some(reveal_label(shown)));
        }
    }

    fn show_completion(&mut self) {
        if let Some(modal) = &self.modal {
            report(modal.style().set_property("display", "flex"));
        }
    }
}
