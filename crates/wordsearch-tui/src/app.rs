use crate::celebration::Celebration;
use crate::render::Layout;
use crate::rng::RandSource;
use crate::screen::Screen;
use crate::theme::Theme;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use std::time::Duration;
use wordsearch_core::{PuzzleEvent, Position, PuzzleSession, PuzzleView};

/// Result of handling a key press
pub enum AppAction {
    Continue,
    Quit,
}

/// Current screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenState {
    /// Normal play
    Playing,
    /// Confetti overlay after the last word is found
    Complete,
}

/// The main application state
pub struct App {
    pub session: PuzzleSession<RandSource>,
    /// What the session last drew
    pub screen: Screen,
    /// Keyboard cursor
    pub cursor: Position,
    pub theme: Theme,
    theme_index: usize,
    pub screen_state: ScreenState,
    pub celebration: Celebration,
    /// Grid placement from the last render, for mouse hit testing
    pub layout: Layout,
}

impl App {
    pub fn new(session: PuzzleSession<RandSource>) -> Self {
        let mut screen = Screen::default();
        session.render(&mut screen);
        screen.show_status("Click a starting letter");

        Self {
            session,
            screen,
            cursor: Position::new(0, 0),
            theme: Theme::dark(),
            theme_index: 0,
            screen_state: ScreenState::Playing,
            celebration: Celebration::new(),
            layout: Layout::default(),
        }
    }

    /// Get the tick rate based on current screen
    pub fn get_tick_rate(&self) -> Duration {
        match self.screen_state {
            ScreenState::Complete => Duration::from_millis(33), // 30 FPS for confetti
            ScreenState::Playing => Duration::from_millis(100),
        }
    }

    /// Update animations (called every tick)
    pub fn tick(&mut self) {
        if self.screen_state == ScreenState::Complete {
            self.celebration.update();
        }
    }

    /// Forward an event to the session and pick up a completion signal
    fn dispatch(&mut self, event: PuzzleEvent) {
        self.session.handle(event, &mut self.screen);
        if matches!(event, PuzzleEvent::ModeChanged(_) | PuzzleEvent::Reset) {
            self.clamp_cursor();
        }
        if self.screen.take_completion() {
            self.screen_state = ScreenState::Complete;
            let (width, height) = crossterm::terminal::size().unwrap_or((80, 24));
            self.celebration.reset(width, height);
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> AppAction {
        if self.screen_state == ScreenState::Complete {
            return match key.code {
                KeyCode::Char('q') => AppAction::Quit,
                _ => {
                    // Back to the finished board; reveal still works there
                    self.screen_state = ScreenState::Playing;
                    AppAction::Continue
                }
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => return AppAction::Quit,

            // Navigation
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1, 0),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1, 0),
            KeyCode::Left | KeyCode::Char('h') => self.move_cursor(0, -1),
            KeyCode::Right | KeyCode::Char('l') => self.move_cursor(0, 1),

            KeyCode::Enter | KeyCode::Char(' ') => self.dispatch(PuzzleEvent::CellSelected(self.cursor)),
            KeyCode::Char('r') => self.dispatch(PuzzleEvent::ToggleReveal),
            KeyCode::Char('m') => {
                let mode = self.session.mode().toggled();
                self.dispatch(PuzzleEvent::ModeChanged(mode));
            }
            KeyCode::Char('n') => self.dispatch(PuzzleEvent::Reset),
            KeyCode::Char('t') => self.cycle_theme(),
            _ => {}
        }
        AppAction::Continue
    }

    /// Clicking a cell selects it directly
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        if self.screen_state == ScreenState::Complete {
            self.screen_state = ScreenState::Playing;
            return;
        }
        if let Some(pos) = self.layout.cell_at(mouse.column, mouse.row) {
            self.cursor = pos;
            self.dispatch(PuzzleEvent::CellSelected(pos));
        }
    }

    fn move_cursor(&mut self, row_delta: isize, col_delta: isize) {
        let max_row = self.screen.rows.saturating_sub(1) as isize;
        let max_col = self.screen.cols.saturating_sub(1) as isize;
        let row = (self.cursor.row as isize + row_delta).clamp(0, max_row) as usize;
        let col = (self.cursor.col as isize + col_delta).clamp(0, max_col) as usize;
        self.cursor = Position::new(row, col);
    }

    fn clamp_cursor(&mut self) {
        self.move_cursor(0, 0);
    }

    fn cycle_theme(&mut self) {
        let themes = Theme::all();
        self.theme_index = (self.theme_index + 1) % themes.len();
        self.theme = themes[self.theme_index].clone();
        self.screen.show_status(&format!("Theme: {}", self.theme.name));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use wordsearch_core::{CellStyle, Mode, PuzzleConfig, WordStyle};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn fixed_app() -> App {
        let session =
            PuzzleSession::from_config_with_rng(&PuzzleConfig::fixed_default(), RandSource::new(Some(1))).unwrap();
        App::new(session)
    }

    fn press(app: &mut App, code: KeyCode, times: usize) {
        for _ in 0..times {
            app.handle_key(key(code));
        }
    }

    #[test]
    fn test_new_app_renders_session() {
        let app = fixed_app();
        assert_eq!((app.screen.rows, app.screen.cols), (8, 10));
        assert_eq!(app.screen.letter(Position::new(0, 0)), 'A');
        assert_eq!(app.screen.total, 7);
        assert_eq!(app.screen.status, "Click a starting letter");
    }

    #[test]
    fn test_cursor_boundary() {
        let mut app = fixed_app();
        press(&mut app, KeyCode::Up, 3);
        press(&mut app, KeyCode::Left, 3);
        assert_eq!(app.cursor, Position::new(0, 0));

        press(&mut app, KeyCode::Char('j'), 20);
        press(&mut app, KeyCode::Char('l'), 20);
        assert_eq!(app.cursor, Position::new(7, 9));
    }

    #[test]
    fn test_claim_word_with_keys() {
        let mut app = fixed_app();
        app.handle_key(key(KeyCode::Enter));
        assert_eq!(app.screen.style(Position::new(0, 0)), CellStyle::Selected);

        press(&mut app, KeyCode::Right, 8);
        app.handle_key(key(KeyCode::Char(' ')));

        assert_eq!(app.session.found_count(), 1);
        assert_eq!(app.screen.found, 1);
        assert_eq!(app.screen.status, "Found: AMBULANCE!");
        assert_eq!(app.screen.words[0], ("AMBULANCE".to_string(), WordStyle::Found));
        assert_eq!(app.screen.style(Position::new(0, 4)), CellStyle::Highlighted);
    }

    #[test]
    fn test_completion_switches_screen() {
        let mut app = fixed_app();
        let paths = app.session.solved_paths().to_vec();
        for path in paths {
            app.cursor = path.cells[0];
            app.handle_key(key(KeyCode::Enter));
            app.cursor = path.cells[path.cells.len() - 1];
            app.handle_key(key(KeyCode::Enter));
        }
        assert_eq!(app.screen_state, ScreenState::Complete);
        assert_eq!(app.get_tick_rate(), Duration::from_millis(33));

        app.handle_key(key(KeyCode::Char('x')));
        assert_eq!(app.screen_state, ScreenState::Playing);

        app.handle_key(key(KeyCode::Char('r')));
        assert!(app.screen.answers_shown);
        assert_eq!(app.screen_state, ScreenState::Playing);
    }

    #[test]
    fn test_mode_toggle_and_reset() {
        let mut app = fixed_app();
        assert_eq!(app.session.mode(), Mode::Hard);
        app.handle_key(key(KeyCode::Char('m')));
        assert_eq!(app.session.mode(), Mode::Easy);
        assert_eq!(app.screen.status, "Click a starting letter");

        app.handle_key(key(KeyCode::Char('r')));
        assert!(app.screen.answers_shown);
        app.handle_key(key(KeyCode::Char('n')));
        assert!(!app.screen.answers_shown);
        assert_eq!(app.screen.found, 0);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = fixed_app();
        assert!(matches!(app.handle_key(key(KeyCode::Char('q'))), AppAction::Quit));
        assert!(matches!(app.handle_key(key(KeyCode::Esc)), AppAction::Quit));
    }

    #[test]
    fn test_theme_cycle() {
        let mut app = fixed_app();
        app.handle_key(key(KeyCode::Char('t')));
        assert_eq!(app.theme.name, "light");
        press(&mut app, KeyCode::Char('t'), 2);
        assert_eq!(app.theme.name, "dark");
    }
}
