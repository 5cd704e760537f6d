use crate::{Direction, GridParseError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Largest row or column count a grid may have
pub const MAX_DIMENSION: usize = 64;

/// A cell coordinate in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Step `steps` cells along `dir`, or `None` if that would go below zero
    pub fn offset(self, dir: Direction, steps: usize) -> Option<Position> {
        let row = offset_axis(self.row, dir.dr, steps)?;
        let col = offset_axis(self.col, dir.dc, steps)?;
        Some(Position::new(row, col))
    }
}

fn offset_axis(base: usize, delta: i8, steps: usize) -> Option<usize> {
    match delta {
        0 => Some(base),
        d if d > 0 => base.checked_add(steps),
        _ => base.checked_sub(steps),
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A rectangular letter grid.
///
/// Cells are explicitly empty (`None`) until a word or the random fill
/// writes a letter into them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Option<char>>,
}

impl Grid {
    /// Create an empty grid. Each dimension is capped at [`MAX_DIMENSION`].
    pub fn new(rows: usize, cols: usize) -> Self {
        let rows = rows.min(MAX_DIMENSION);
        let cols = cols.min(MAX_DIMENSION);
        let len = rows.checked_mul(cols).unwrap_or(0);
        Self {
            rows,
            cols,
            cells: vec![None; len],
        }
    }

    /// Parse a grid from rows of letters, e.g. a hand-authored puzzle.
    ///
    /// Letters are uppercased; every row must have the same length.
    pub fn from_rows<S: AsRef<str>>(rows: &[S]) -> Result<Self, GridParseError> {
        let cols = rows.first().map(|r| r.as_ref().chars().count()).unwrap_or(0);
        if rows.is_empty() || cols == 0 {
            return Err(GridParseError::Empty);
        }
        if rows.len() > MAX_DIMENSION || cols > MAX_DIMENSION {
            return Err(GridParseError::TooLarge {
                rows: rows.len(),
                cols,
                max: MAX_DIMENSION,
            });
        }

        let mut grid = Grid::new(rows.len(), cols);
        for (row, line) in rows.iter().enumerate() {
            let line = line.as_ref();
            let len = line.chars().count();
            if len != cols {
                return Err(GridParseError::RaggedRow {
                    row,
                    expected: cols,
                    found: len,
                });
            }
            for (col, ch) in line.chars().enumerate() {
                if !ch.is_ascii_alphabetic() {
                    return Err(GridParseError::InvalidLetter { row, col, ch });
                }
                grid.set(Position::new(row, col), ch.to_ascii_uppercase());
            }
        }
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Check whether a position lies inside the grid
    pub fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Get the letter at a position (None if empty or out of bounds)
    pub fn get(&self, pos: Position) -> Option<char> {
        if self.contains(pos) {
            self.cells[self.index(pos)]
        } else {
            None
        }
    }

    /// Write a letter into a cell. Out of bounds writes are ignored.
    pub fn set(&mut self, pos: Position, letter: char) {
        if self.contains(pos) {
            let idx = self.index(pos);
            self.cells[idx] = Some(letter);
        }
    }

    pub fn is_empty_at(&self, pos: Position) -> bool {
        self.contains(pos) && self.cells[self.index(pos)].is_none()
    }

    /// Number of cells still empty
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_none()).count()
    }

    /// True once every cell holds a letter
    pub fn is_filled(&self) -> bool {
        self.empty_count() == 0
    }

    /// Iterate over all positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }

    /// Read the letters along a path; `None` if any cell is empty or off-grid
    pub fn read_path(&self, path: &[Position]) -> Option<String> {
        path.iter().map(|&pos| self.get(pos)).collect()
    }

    /// Rows as strings, with `.` for empty cells
    pub fn to_row_strings(&self) -> Vec<String> {
        (0..self.rows)
            .map(|row| {
                (0..self.cols)
                    .map(|col| self.get(Position::new(row, col)).unwrap_or('.'))
                    .collect()
            })
            .collect()
    }

    fn index(&self, pos: Position) -> usize {
        pos.row * self.cols + pos.col
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.to_row_strings() {
            let spaced: Vec<String> = line.chars().map(|c| c.to_string()).collect();
            writeln!(f, "{}", spaced.join(" "))?;
        }
        Ok(())
    }
}
