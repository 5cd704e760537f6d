use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A unit step through the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Direction {
    pub dr: i8,
    pub dc: i8,
}

impl Direction {
    pub const RIGHT: Direction = Direction::new(0, 1);
    pub const LEFT: Direction = Direction::new(0, -1);
    pub const DOWN: Direction = Direction::new(1, 0);
    pub const UP: Direction = Direction::new(-1, 0);
    pub const DOWN_RIGHT: Direction = Direction::new(1, 1);
    pub const DOWN_LEFT: Direction = Direction::new(1, -1);
    pub const UP_RIGHT: Direction = Direction::new(-1, 1);
    pub const UP_LEFT: Direction = Direction::new(-1, -1);

    /// All eight directions, in placement order for hard mode
    pub const ALL: [Direction; 8] = [
        Direction::RIGHT,
        Direction::LEFT,
        Direction::DOWN,
        Direction::UP,
        Direction::DOWN_RIGHT,
        Direction::DOWN_LEFT,
        Direction::UP_RIGHT,
        Direction::UP_LEFT,
    ];

    pub const fn new(dr: i8, dc: i8) -> Self {
        Self { dr, dc }
    }

    pub fn is_horizontal(&self) -> bool {
        self.dr == 0 && self.dc != 0
    }

    pub fn is_vertical(&self) -> bool {
        self.dr != 0 && self.dc == 0
    }

    pub fn is_diagonal(&self) -> bool {
        self.dr != 0 && self.dc != 0
    }
}

/// Puzzle mode: controls both placement directions and which selections are legal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Words run only left-to-right or top-to-bottom
    Easy,
    /// Words run in any of the eight directions
    #[default]
    Hard,
}

impl Mode {
    /// Directions words may be placed in
    pub fn directions(&self) -> &'static [Direction] {
        const EASY: [Direction; 2] = [Direction::RIGHT, Direction::DOWN];
        match self {
            Mode::Easy => &EASY,
            Mode::Hard => &Direction::ALL,
        }
    }

    /// Whether a selection with the given row/col deltas may be claimed
    pub fn allows_selection(&self, delta_row: isize, delta_col: isize) -> bool {
        match self {
            Mode::Easy => {
                (delta_row == 0 && delta_col > 0) || (delta_col == 0 && delta_row > 0)
            }
            Mode::Hard => {
                let horizontal = delta_row == 0 && delta_col != 0;
                let vertical = delta_row != 0 && delta_col == 0;
                let diagonal = delta_row != 0 && delta_row.abs() == delta_col.abs();
                horizontal || vertical || diagonal
            }
        }
    }

    /// Hint appended to the "try again" status
    pub fn selection_hint(&self) -> &'static str {
        match self {
            Mode::Easy => "Must be straight → or ↓",
            Mode::Hard => "Must be straight H, V, or D",
        }
    }

    /// The other mode
    pub fn toggled(&self) -> Mode {
        match self {
            Mode::Easy => Mode::Hard,
            Mode::Hard => Mode::Easy,
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Mode::Easy => write!(f, "easy"),
            Mode::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Mode::Easy),
            "hard" => Ok(Mode::Hard),
            other => Err(format!("unknown mode '{}' (expected easy or hard)", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_sets() {
        assert_eq!(Mode::Easy.directions(), &[Direction::RIGHT, Direction::DOWN]);
        assert_eq!(Mode::Hard.directions().len(), 8);
        assert!(!Mode::Hard.directions().contains(&Direction::new(0, 0)));
    }

    #[test]
    fn test_easy_selection_rule() {
        assert!(Mode::Easy.allows_selection(0, 3));
        assert!(Mode::Easy.allows_selection(4, 0));
        assert!(!Mode::Easy.allows_selection(0, -3));
        assert!(!Mode::Easy.allows_selection(-2, 0));
        assert!(!Mode::Easy.allows_selection(1, 1));
        assert!(!Mode::Easy.allows_selection(0, 0));
    }

    #[test]
    fn test_hard_selection_rule() {
        assert!(Mode::Hard.allows_selection(0, -5));
        assert!(Mode::Hard.allows_selection(-3, 0));
        assert!(Mode::Hard.allows_selection(-2, 2));
        assert!(Mode::Hard.allows_selection(3, -3));
        assert!(!Mode::Hard.allows_selection(2, 3));
        assert!(!Mode::Hard.allows_selection(0, 0));
    }

    #[test]
    fn test_mode_parse_and_display() {
        assert_eq!("Easy".parse::<Mode>(), Ok(Mode::Easy));
        assert_eq!(" hard ".parse::<Mode>(), Ok(Mode::Hard));
        assert!("medium".parse::<Mode>().is_err());
        assert_eq!(Mode::Easy.to_string(), "easy");
        assert_eq!(Mode::default(), Mode::Hard);
        assert_eq!(Mode::Easy.toggled(), Mode::Hard);
    }

    #[test]
    fn test_mode_serde() {
        let json = serde_json::to_string(&Mode::Easy).unwrap();
        assert_eq!(json, "\"easy\"");
        let mode: Mode = serde_json::from_str("\"hard\"").unwrap();
        assert_eq!(mode, Mode::Hard);
    }
}
