use crate::{Direction, Grid, Mode, Position, SelectionError};

/// Letters and cells between two selected endpoints
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPath {
    pub letters: String,
    pub cells: Vec<Position>,
}

/// Resolve the straight line from `start` to `end` (inclusive).
///
/// The line must be legal for `mode` and must stay on filled cells all the
/// way to `end`; anything else is rejected rather than partially matched.
pub fn resolve(
    grid: &Grid,
    start: Position,
    end: Position,
    mode: Mode,
) -> Result<ResolvedPath, SelectionError> {
    for pos in [start, end] {
        if !grid.contains(pos) {
            return Err(SelectionError::OutOfBounds(pos));
        }
    }

    let delta_row = end.row as isize - start.row as isize;
    let delta_col = end.col as isize - start.col as isize;
    if delta_row == 0 && delta_col == 0 {
        return Err(SelectionError::SameCell);
    }
    if !mode.allows_selection(delta_row, delta_col) {
        return Err(SelectionError::IllegalDirection { start, end });
    }

    let dir = Direction::new(delta_row.signum() as i8, delta_col.signum() as i8);
    let max_len = grid.rows().max(grid.cols());

    let mut letters = String::new();
    let mut cells = Vec::new();
    let mut current = start;

    for step in 0..max_len {
        let Some(letter) = grid.get(current) else {
            break;
        };
        letters.push(letter);
        cells.push(current);

        if current == end {
            return Ok(ResolvedPath { letters, cells });
        }

        match start.offset(dir, step + 1) {
            Some(next) => current = next,
            None => break,
        }
    }

    Err(SelectionError::IncompletePath(current))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Grid {
        Grid::from_rows(&["ABCD", "EFGH", "IJKL", "MNOP"]).unwrap()
    }

    #[test]
    fn test_resolve_horizontal() {
        let path = resolve(&sample(), Position::new(1, 0), Position::new(1, 3), Mode::Easy).unwrap();
        assert_eq!(path.letters, "EFGH");
        assert_eq!(path.cells.len(), 4);
        assert_eq!(path.cells[3], Position::new(1, 3));
    }

    #[test]
    fn test_resolve_vertical_easy() {
        let path = resolve(&sample(), Position::new(0, 2), Position::new(2, 2), Mode::Easy).unwrap();
        assert_eq!(path.letters, "CGK");
    }

    #[test]
    fn test_easy_rejects_diagonal_and_backwards() {
        let grid = sample();
        assert_eq!(
            resolve(&grid, Position::new(0, 0), Position::new(1, 1), Mode::Easy),
            Err(SelectionError::IllegalDirection {
                start: Position::new(0, 0),
                end: Position::new(1, 1)
            })
        );
        assert!(matches!(
            resolve(&grid, Position::new(2, 3), Position::new(2, 0), Mode::Easy),
            Err(SelectionError::IllegalDirection { .. })
        ));
        assert!(matches!(
            resolve(&grid, Position::new(3, 1), Position::new(0, 1), Mode::Easy),
            Err(SelectionError::IllegalDirection { .. })
        ));
    }

    #[test]
    fn test_hard_reverse_selection_reverses_letters() {
        let grid = sample();
        let pairs = [
            (Position::new(0, 0), Position::new(3, 3)),
            (Position::new(3, 0), Position::new(0, 3)),
            (Position::new(2, 1), Position::new(2, 3)),
            (Position::new(0, 2), Position::new(3, 2)),
        ];
        for (a, b) in pairs {
            let forward = resolve(&grid, a, b, Mode::Hard).unwrap();
            let backward = resolve(&grid, b, a, Mode::Hard).unwrap();
            let reversed: String = backward.letters.chars().rev().collect();
            assert_eq!(forward.letters, reversed);
        }
    }

    #[test]
    fn test_hard_rejects_knight_move() {
        assert!(matches!(
            resolve(&sample(), Position::new(0, 0), Position::new(1, 2), Mode::Hard),
            Err(SelectionError::IllegalDirection { .. })
        ));
    }

    #[test]
    fn test_same_cell_rejected() {
        let pos = Position::new(1, 1);
        assert_eq!(resolve(&sample(), pos, pos, Mode::Hard), Err(SelectionError::SameCell));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        assert_eq!(
            resolve(&sample(), Position::new(0, 0), Position::new(0, 9), Mode::Hard),
            Err(SelectionError::OutOfBounds(Position::new(0, 9)))
        );
    }

    #[test]
    fn test_empty_cell_stops_walk() {
        let mut grid = Grid::new(1, 4);
        grid.set(Position::new(0, 0), 'A');
        grid.set(Position::new(0, 1), 'B');
        grid.set(Position::new(0, 3), 'D');
        assert_eq!(
            resolve(&grid, Position::new(0, 0), Position::new(0, 3), Mode::Hard),
            Err(SelectionError::IncompletePath(Position::new(0, 2)))
        );
    }
}
