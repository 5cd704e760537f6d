use crate::app::{App, ScreenState};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    execute,
    style::{Attribute, Color, Print, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal::{self, Clear, ClearType},
};
use std::io;
use wordsearch_core::{progress_text, reveal_label, Position, WordStyle};

/// Each cell is drawn 3 columns wide: " X " or "[X]" under the cursor
const CELL_WIDTH: u16 = 3;
const PANEL_WIDTH: u16 = 34;

/// Where the grid sits on screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Layout {
    /// Column of the left border
    pub grid_x: u16,
    /// Row of the top border
    pub grid_y: u16,
    pub rows: usize,
    pub cols: usize,
}

impl Layout {
    pub fn compute(term_width: u16, term_height: u16, rows: usize, cols: usize) -> Self {
        let mut layout = Self {
            grid_x: 1,
            grid_y: 1,
            rows,
            cols,
        };
        let total_width = layout.grid_width().saturating_add(3 + PANEL_WIDTH);

        if term_width > total_width {
            layout.grid_x = (term_width - total_width) / 2;
        }
        if term_height > layout.grid_height().saturating_add(8) {
            layout.grid_y = 2;
        }
        layout
    }

    pub fn grid_width(&self) -> u16 {
        span(self.cols, CELL_WIDTH).saturating_add(2)
    }

    pub fn grid_height(&self) -> u16 {
        span(self.rows, 1).saturating_add(2)
    }

    /// Screen position of a cell's first column
    pub fn cell_origin(&self, pos: Position) -> (u16, u16) {
        (
            self.grid_x.saturating_add(1).saturating_add(span(pos.col, CELL_WIDTH)),
            self.grid_y.saturating_add(1).saturating_add(span(pos.row, 1)),
        )
    }

    /// Map a terminal coordinate to the grid cell under it
    pub fn cell_at(&self, x: u16, y: u16) -> Option<Position> {
        let col = x.checked_sub(self.grid_x.saturating_add(1))? / CELL_WIDTH;
        let row = y.checked_sub(self.grid_y.saturating_add(1))?;
        let pos = Position::new(row as usize, col as usize);
        (pos.row < self.rows && pos.col < self.cols).then_some(pos)
    }
}

/// Terminal columns taken by `count` items of `width` each, saturating at `u16::MAX`
fn span(count: usize, width: u16) -> u16 {
    u16::try_from(count).unwrap_or(u16::MAX).saturating_mul(width)
}

pub fn render(stdout: &mut io::Stdout, app: &mut App) -> io::Result<()> {
    let (term_width, term_height) = terminal::size()?;
    app.layout = Layout::compute(term_width, term_height, app.screen.rows, app.screen.cols);

    execute!(stdout, Hide)?;
    execute!(stdout, SetBackgroundColor(app.theme.bg), Clear(ClearType::All))?;

    render_grid(stdout, app)?;
    render_panel(stdout, app)?;
    render_controls(stdout, app)?;

    if app.screen_state == ScreenState::Complete {
        render_celebration(stdout, app, term_width, term_height)?;
    }

    execute!(stdout, Show, MoveTo(0, term_height.saturating_sub(1)))?;
    Ok(())
}

fn render_grid(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let theme = &app.theme;
    let layout = app.layout;
    let inner = "-".repeat(layout.grid_width().saturating_sub(2) as usize);

    execute!(
        stdout,
        SetBackgroundColor(theme.bg),
        SetForegroundColor(theme.border),
        MoveTo(layout.grid_x, layout.grid_y),
        Print(format!("+{}+", inner)),
        MoveTo(layout.grid_x, layout.grid_y.saturating_add(layout.grid_height() - 1)),
        Print(format!("+{}+", inner)),
    )?;

    for row in 0..layout.rows {
        let (_, y) = layout.cell_origin(Position::new(row, 0));
        execute!(
            stdout,
            SetBackgroundColor(theme.bg),
            SetForegroundColor(theme.border),
            MoveTo(layout.grid_x, y),
            Print("|"),
            MoveTo(layout.grid_x.saturating_add(layout.grid_width() - 1), y),
            Print("|"),
        )?;

        for col in 0..layout.cols {
            let pos = Position::new(row, col);
            let (x, y) = layout.cell_origin(pos);
            let letter = app.screen.letter(pos);
            let bg = theme.cell_bg(app.screen.style(pos));

            let (text, fg) = if pos == app.cursor && app.screen_state == ScreenState::Playing {
                (format!("[{}]", letter), theme.cursor)
            } else {
                (format!(" {} ", letter), theme.fg)
            };

            execute!(
                stdout,
                MoveTo(x, y),
                SetBackgroundColor(bg),
                SetForegroundColor(fg),
                Print(text),
            )?;
        }
    }

    execute!(stdout, SetBackgroundColor(theme.bg))?;
    Ok(())
}

fn render_panel(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let theme = &app.theme;
    let x = app.layout.grid_x.saturating_add(app.layout.grid_width()).saturating_add(3);
    let mut y = app.layout.grid_y;

    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.fg),
        SetAttribute(Attribute::Bold),
        Print("WORD SEARCH"),
        SetAttribute(Attribute::Reset),
        SetBackgroundColor(theme.bg),
    )?;
    y += 1;

    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(theme.info),
        Print(format!("Mode: {}", app.session.mode())),
    )?;
    y += 1;

    let progress_color = if app.session.is_complete() {
        theme.success
    } else {
        theme.info
    };
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(progress_color),
        Print(progress_text(app.screen.found, app.screen.total)),
    )?;
    y += 2;

    for (word, style) in &app.screen.words {
        let (marker, color) = match style {
            WordStyle::Found => ("✓", theme.found),
            WordStyle::None => ("·", theme.fg),
        };
        execute!(
            stdout,
            MoveTo(x, y),
            SetForegroundColor(color),
            Print(format!("{} {}", marker, word)),
        )?;
        y += 1;
    }

    if !app.session.unplaced().is_empty() {
        y += 1;
        execute!(
            stdout,
            MoveTo(x, y),
            SetForegroundColor(theme.error),
            Print(format!("{} word(s) did not fit", app.session.unplaced().len())),
        )?;
    }

    Ok(())
}

fn render_controls(stdout: &mut io::Stdout, app: &App) -> io::Result<()> {
    let theme = &app.theme;
    let x = app.layout.grid_x;
    let y = app.layout.grid_y.saturating_add(app.layout.grid_height()).saturating_add(1);

    let status_color = if app.screen.status.starts_with("That's not") {
        theme.error
    } else if app.screen.status.starts_with("Found") {
        theme.success
    } else {
        theme.fg
    };
    execute!(
        stdout,
        MoveTo(x, y),
        SetForegroundColor(status_color),
        Print(&app.screen.status),
    )?;

    let controls: [(&str, &str); 7] = [
        ("←↑↓→/hjkl", "move"),
        ("Enter", "select"),
        ("r", reveal_label(app.screen.answers_shown)),
        ("m", "mode"),
        ("n", "new"),
        ("t", "theme"),
        ("q", "quit"),
    ];

    execute!(stdout, MoveTo(x, y.saturating_add(2)))?;
    for (key, label) in controls {
        execute!(
            stdout,
            SetForegroundColor(theme.key),
            Print(key),
            SetForegroundColor(theme.info),
            Print(format!(" {}  ", label)),
        )?;
    }
    Ok(())
}

fn render_celebration(stdout: &mut io::Stdout, app: &App, term_width: u16, term_height: u16) -> io::Result<()> {
    let theme = &app.theme;

    for particle in app.celebration.visible() {
        execute!(
            stdout,
            MoveTo(particle.x as u16, particle.y as u16),
            SetBackgroundColor(theme.bg),
            SetForegroundColor(particle.color),
            Print(particle.char),
        )?;
    }

    let banner = "  ALL WORDS FOUND!  ";
    let hint = " press any key ";
    let bx = term_width.saturating_sub(banner.chars().count() as u16) / 2;
    let by = term_height / 2;

    execute!(stdout, MoveTo(bx, by), SetBackgroundColor(Color::Black))?;
    for (i, ch) in banner.chars().enumerate() {
        execute!(
            stdout,
            SetForegroundColor(app.celebration.banner_color(i)),
            Print(ch),
        )?;
    }
    execute!(
        stdout,
        MoveTo(term_width.saturating_sub(hint.len() as u16) / 2, by + 1),
        SetForegroundColor(theme.info),
        Print(hint),
        SetBackgroundColor(theme.bg),
    )?;
    Ok(())
}
