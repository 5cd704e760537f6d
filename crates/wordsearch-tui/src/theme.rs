use crossterm::style::Color;
use wordsearch_core::CellStyle;

/// Color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: &'static str,
    /// Background color
    pub bg: Color,
    /// Default text color
    pub fg: Color,
    /// Grid border color
    pub border: Color,
    /// Letter under the cursor
    pub cursor: Color,
    /// Pending selection start
    pub selected_bg: Color,
    /// Cells of found words
    pub highlight_bg: Color,
    /// Cells of revealed (unfound) words
    pub reveal_bg: Color,
    /// Found entries in the word list
    pub found: Color,
    /// Error/try again color
    pub error: Color,
    /// Success/complete color
    pub success: Color,
    /// Info text color
    pub info: Color,
    /// Key binding text color
    pub key: Color,
}

impl Theme {
    /// Dark theme (default)
    pub fn dark() -> Self {
        Self {
            name: "dark",
            bg: Color::Rgb { r: 20, g: 22, b: 30 },
            fg: Color::Rgb { r: 230, g: 230, b: 240 },
            border: Color::Rgb { r: 90, g: 95, b: 120 },
            cursor: Color::Rgb { r: 255, g: 210, b: 100 },
            selected_bg: Color::Rgb { r: 150, g: 120, b: 30 },
            highlight_bg: Color::Rgb { r: 40, g: 120, b: 70 },
            reveal_bg: Color::Rgb { r: 50, g: 80, b: 150 },
            found: Color::Rgb { r: 120, g: 125, b: 140 },
            error: Color::Rgb { r: 255, g: 90, b: 90 },
            success: Color::Rgb { r: 90, g: 255, b: 130 },
            info: Color::Rgb { r: 160, g: 165, b: 185 },
            key: Color::Rgb { r: 255, g: 210, b: 100 },
        }
    }

    /// Light theme
    pub fn light() -> Self {
        Self {
            name: "light",
            bg: Color::Rgb { r: 248, g: 248, b: 252 },
            fg: Color::Rgb { r: 30, g: 30, b: 40 },
            border: Color::Rgb { r: 170, g: 170, b: 190 },
            cursor: Color::Rgb { r: 200, g: 90, b: 20 },
            selected_bg: Color::Rgb { r: 255, g: 215, b: 120 },
            highlight_bg: Color::Rgb { r: 160, g: 220, b: 170 },
            reveal_bg: Color::Rgb { r: 170, g: 200, b: 255 },
            found: Color::Rgb { r: 150, g: 150, b: 165 },
            error: Color::Rgb { r: 220, g: 50, b: 50 },
            success: Color::Rgb { r: 40, g: 160, b: 60 },
            info: Color::Rgb { r: 90, g: 90, b: 110 },
            key: Color::Rgb { r: 200, g: 120, b: 20 },
        }
    }

    /// High contrast theme
    pub fn high_contrast() -> Self {
        Self {
            name: "high contrast",
            bg: Color::Black,
            fg: Color::White,
            border: Color::Grey,
            cursor: Color::Yellow,
            selected_bg: Color::DarkYellow,
            highlight_bg: Color::DarkGreen,
            reveal_bg: Color::Blue,
            found: Color::DarkGrey,
            error: Color::Red,
            success: Color::Green,
            info: Color::Grey,
            key: Color::Yellow,
        }
    }

    /// Themes in the order `t` cycles through them
    pub fn all() -> [Theme; 3] {
        [Theme::dark(), Theme::light(), Theme::high_contrast()]
    }

    /// Background for a cell style
    pub fn cell_bg(&self, style: CellStyle) -> Color {
        match style {
            CellStyle::None => self.bg,
            CellStyle::Selected => self.selected_bg,
            CellStyle::Highlighted => self.highlight_bg,
            CellStyle::Revealed => self.reveal_bg,
        }
    }
}
