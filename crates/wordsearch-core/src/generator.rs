use crate::{Direction, Grid, Mode, Position, RandomSource, SimpleRng};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// Attempts per word before it is given up on
pub const MAX_PLACEMENT_ATTEMPTS: usize = 200;

const ALPHABET: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A placed word and the cells it occupies, in writing order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvedPath {
    pub word: String,
    pub cells: Vec<Position>,
}

/// Result of laying words into a grid
#[derive(Debug, Clone)]
pub struct Placement {
    /// The fully filled grid
    pub grid: Grid,
    /// Ground truth for every word that made it into the grid
    pub solved: Vec<SolvedPath>,
    /// Words that could not be placed within the attempt budget
    pub unplaced: Vec<String>,
}

impl Placement {
    /// Find where each word sits in an existing grid.
    ///
    /// Scans start cells in row-major order and directions in hard-mode order,
    /// keeping the first hit. Used for hand-authored grids.
    pub fn locate(grid: Grid, words: &[String]) -> Self {
        let mut solved = Vec::new();
        let mut unplaced = Vec::new();

        for word in words {
            match locate_word(&grid, word) {
                Some(cells) => solved.push(SolvedPath {
                    word: word.clone(),
                    cells,
                }),
                None => {
                    warn!("Word {} does not appear in the fixed grid", word);
                    unplaced.push(word.clone());
                }
            }
        }

        Self {
            grid,
            solved,
            unplaced,
        }
    }

    /// Number of words that were placed
    pub fn placed_count(&self) -> usize {
        self.solved.len()
    }

    /// Look up the solved path for a word
    pub fn path_for(&self, word: &str) -> Option<&SolvedPath> {
        self.solved.iter().find(|p| p.word == word)
    }
}

fn locate_word(grid: &Grid, word: &str) -> Option<Vec<Position>> {
    let letters: Vec<char> = word.chars().collect();
    for start in grid.positions() {
        for &dir in Direction::ALL.iter() {
            let cells: Option<Vec<Position>> = (0..letters.len())
                .map(|i| start.offset(dir, i).filter(|&p| grid.contains(p)))
                .collect();
            if let Some(cells) = cells {
                if cells
                    .iter()
                    .zip(&letters)
                    .all(|(&pos, &ch)| grid.get(pos) == Some(ch))
                {
                    return Some(cells);
                }
            }
        }
    }
    None
}

/// Uppercase a word, rejecting empty words and anything outside A-Z
pub fn normalize_word(word: &str) -> Option<String> {
    let word = word.trim();
    if word.is_empty() || !word.chars().all(|c| c.is_ascii_alphabetic()) {
        return None;
    }
    Some(word.to_ascii_uppercase())
}

/// Configuration for grid generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub rows: usize,
    pub cols: usize,
    /// Maximum attempts per word
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::generated()
    }
}

impl GeneratorConfig {
    /// The standard 10x10 generated puzzle
    pub fn generated() -> Self {
        Self {
            rows: 10,
            cols: 10,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }

    pub fn with_size(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            ..Self::generated()
        }
    }
}

/// Word search grid generator
pub struct Generator<R: RandomSource = SimpleRng> {
    config: GeneratorConfig,
    rng: R,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a new generator with the default 10x10 configuration
    pub fn new() -> Self {
        Self::with_config(GeneratorConfig::default())
    }

    /// Create a generator with custom configuration
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with a specific seed for reproducibility
    pub fn with_seed(seed: u64) -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: SimpleRng::with_seed(seed),
        }
    }
}

impl<R: RandomSource> Generator<R> {
    /// Create a generator driven by any random source
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Self {
        Self { config, rng }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: GeneratorConfig) {
        self.config = config;
    }

    /// Lay out `words` using the directions allowed in `mode`, then fill the rest.
    ///
    /// Words that cannot be placed are reported in [`Placement::unplaced`];
    /// generation itself never fails.
    pub fn generate(&mut self, words: &[String], mode: Mode) -> Placement {
        let mut grid = Grid::new(self.config.rows, self.config.cols);
        if (grid.rows(), grid.cols()) != (self.config.rows, self.config.cols) {
            warn!(
                "Grid size {}x{} capped to {}x{}",
                self.config.rows,
                self.config.cols,
                grid.rows(),
                grid.cols()
            );
        }
        let mut solved = Vec::new();
        let mut unplaced = Vec::new();

        // Longest first; stable so equal lengths keep list order
        let mut ordered: Vec<&String> = words.iter().collect();
        ordered.sort_by(|a, b| b.chars().count().cmp(&a.chars().count()));

        for word in ordered {
            let Some(upper) = normalize_word(word) else {
                warn!("Skipping word {:?}: only letters A-Z can be placed", word);
                unplaced.push(word.clone());
                continue;
            };
            match self.place_word(&mut grid, &upper, mode) {
                Some(path) => {
                    debug!("Placed {} at {:?}", upper, path.cells.first());
                    solved.push(path);
                }
                None => {
                    warn!(
                        "Could not place word {} in {}x{} grid after {} attempts",
                        upper, self.config.rows, self.config.cols, self.config.max_attempts
                    );
                    unplaced.push(upper);
                }
            }
        }

        self.fill_random_letters(&mut grid);

        Placement {
            grid,
            solved,
            unplaced,
        }
    }

    fn place_word(&mut self, grid: &mut Grid, word: &str, mode: Mode) -> Option<SolvedPath> {
        let letters: Vec<char> = word.chars().collect();
        let directions = mode.directions();

        for _ in 0..self.config.max_attempts {
            let dir = directions[self.rng.next_in_range(0, directions.len() - 1)];

            let Some((min_row, max_row)) = start_range(letters.len(), grid.rows(), dir.dr) else {
                continue;
            };
            let Some((min_col, max_col)) = start_range(letters.len(), grid.cols(), dir.dc) else {
                continue;
            };

            let start = Position::new(
                self.rng.next_in_range(min_row, max_row),
                self.rng.next_in_range(min_col, max_col),
            );

            if let Some(cells) = fit_word(grid, start, dir, &letters) {
                for (&pos, &ch) in cells.iter().zip(&letters) {
                    grid.set(pos, ch);
                }
                return Some(SolvedPath {
                    word: word.to_string(),
                    cells,
                });
            }
        }

        None
    }

    fn fill_random_letters(&mut self, grid: &mut Grid) {
        let empty: Vec<Position> = grid.positions().filter(|&p| grid.is_empty_at(p)).collect();
        for pos in empty {
            let idx = self.rng.next_in_range(0, ALPHABET.len() - 1);
            grid.set(pos, ALPHABET[idx] as char);
        }
    }
}

/// Inclusive range of start indices along one axis so `len` letters fit
fn start_range(len: usize, extent: usize, delta: i8) -> Option<(usize, usize)> {
    let last = extent.checked_sub(1)?;
    match delta {
        0 => Some((0, last)),
        d if d > 0 => Some((0, extent.checked_sub(len)?)),
        _ => {
            let min = len.checked_sub(1)?;
            (min <= last).then_some((min, last))
        }
    }
}

/// Cells for the word if every one is empty or already holds the same letter
fn fit_word(grid: &Grid, start: Position, dir: Direction, letters: &[char]) -> Option<Vec<Position>> {
    let mut cells = Vec::with_capacity(letters.len());
    for (i, &ch) in letters.iter().enumerate() {
        let pos = start.offset(dir, i).filter(|&p| grid.contains(p))?;
        match grid.get(pos) {
            Some(existing) if existing != ch => return None,
            _ => cells.push(pos),
        }
    }
    Some(cells)
}
