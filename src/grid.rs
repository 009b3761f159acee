//! Bingo grid: labelled cells, the highlight cursor and win detection
//!
//! Cells are stored row-major in a single vector. One extra sentinel cell is
//! appended after the `rows * columns` word cells; confirming it asks for a
//! win check instead of marking a word. Index arithmetic:
//!
//! ```text
//! row    = index / columns
//! column = index % columns
//! ```
//!
//! The sentinel sits visually below the last row, at column 0.

use log::debug;
use std::fmt;

use crate::bingo_rand::BingoRand;
use crate::error::GameError;
use crate::word_list::WordList;

/// Largest card accepted, in word cells
pub const MAX_CELLS: usize = 10_000;

pub const DEFAULT_SENTINEL_LABEL: &str = "confirm win";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pub label: String,
    pub toggled: bool,
    pub highlighted: bool,
}

impl Cell {
    pub fn new(label: impl Into<String>) -> Self {
        Cell {
            label: label.into(),
            toggled: false,
            highlighted: false,
        }
    }
}

/// A completed line that wins the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WinLine {
    Row(usize),
    Column(usize),
    MainDiagonal,
    AntiDiagonal,
}

impl fmt::Display for WinLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WinLine::Row(r) => write!(f, "row {}", r + 1),
            WinLine::Column(c) => write!(f, "column {}", c + 1),
            WinLine::MainDiagonal => write!(f, "the main diagonal"),
            WinLine::AntiDiagonal => write!(f, "the anti-diagonal"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    highlighted: usize,
}

/// Number of word cells on a `rows` x `columns` card, rejecting empty and oversized cards
pub fn card_size(rows: usize, columns: usize) -> Result<usize, GameError> {
    if rows == 0 || columns == 0 {
        return Err(GameError::config(format!(
            "grid must have at least one row and one column (got {rows}x{columns})"
        )));
    }
    match rows.checked_mul(columns) {
        Some(cells) if cells <= MAX_CELLS => Ok(cells),
        _ => Err(GameError::config(format!(
            "grid of {rows}x{columns} is too large (at most {MAX_CELLS} cells)"
        ))),
    }
}

impl Grid {
    /// Build a grid from the first `rows * columns` labels, in row-major order
    pub fn from_labels<I, S>(
        rows: usize,
        columns: usize,
        labels: I,
        sentinel_label: &str,
    ) -> Result<Self, GameError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let required = card_size(rows, columns)?;
        let mut cells: Vec<Cell> = labels.into_iter().take(required).map(Cell::new).collect();
        if cells.len() < required {
            return Err(GameError::InsufficientWords {
                available: cells.len(),
                required,
            });
        }
        cells.push(Cell::new(sentinel_label));
        cells[0].highlighted = true;

        Ok(Grid {
            rows,
            columns,
            cells,
            highlighted: 0,
        })
    }

    /// Draw a fresh random card from the word list
    pub fn from_word_list(
        rows: usize,
        columns: usize,
        words: &WordList,
        rng: &mut BingoRand,
        sentinel_label: &str,
    ) -> Result<Self, GameError> {
        let labels = words.sample(card_size(rows, columns)?, rng)?;
        debug!("Dealt {}x{} card from {} words", rows, columns, words.len());
        Self::from_labels(rows, columns, labels, sentinel_label)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of word cells (sentinel excluded)
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    pub fn sentinel_index(&self) -> usize {
        self.cell_count()
    }

    /// All cells, sentinel last
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn sentinel(&self) -> &Cell {
        &self.cells[self.sentinel_index()]
    }

    pub fn highlighted_index(&self) -> usize {
        self.highlighted
    }

    pub fn is_sentinel_highlighted(&self) -> bool {
        self.highlighted == self.sentinel_index()
    }

    pub fn position(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }

    /// Index reached by moving from `index` in `direction`, or `None` at the edge
    pub fn neighbor(&self, index: usize, direction: Direction) -> Option<usize> {
        let sentinel = self.sentinel_index();
        if index == sentinel {
            return match direction {
                Direction::Up => Some(sentinel - self.columns),
                _ => None,
            };
        }
        if index > sentinel {
            return None;
        }

        let (row, column) = self.position(index);
        match direction {
            Direction::Up => (row > 0).then(|| index - self.columns),
            Direction::Down if row + 1 < self.rows => Some(index + self.columns),
            Direction::Down => Some(sentinel),
            Direction::Left => (column > 0).then(|| index - 1),
            Direction::Right => (column + 1 < self.columns).then(|| index + 1),
        }
    }

    /// Move the highlight one step. Returns false when the move would leave the grid.
    pub fn move_highlight(&mut self, direction: Direction) -> bool {
        match self.neighbor(self.highlighted, direction) {
            Some(next) => {
                self.cells[self.highlighted].highlighted = false;
                self.cells[next].highlighted = true;
                debug!("Highlight {:?}: {} -> {}", direction, self.highlighted, next);
                self.highlighted = next;
                true
            }
            None => false,
        }
    }

    /// Flip the toggled flag of a word cell. Returns the new flag, or `None`
    /// for the sentinel and out-of-range indices.
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        if index >= self.sentinel_index() {
            return None;
        }
        let cell = &mut self.cells[index];
        cell.toggled = !cell.toggled;
        debug!("Cell {} '{}' toggled: {}", index, cell.label, cell.toggled);
        Some(cell.toggled)
    }

    fn all_toggled(&self, mut indices: impl Iterator<Item = usize>) -> bool {
        indices.all(|i| self.cells[i].toggled)
    }

    /// First completed line, checking rows, columns, then both diagonals
    pub fn check_for_win(&self) -> Option<WinLine> {
        let columns = self.columns;

        for r in 0..self.rows {
            if self.all_toggled((0..columns).map(|c| r * columns + c)) {
                return Some(WinLine::Row(r));
            }
        }

        for c in 0..columns {
            if self.all_toggled((0..self.rows).map(|r| r * columns + c)) {
                return Some(WinLine::Column(c));
            }
        }

        let diagonal = self.rows.min(columns);
        if self.all_toggled((0..diagonal).map(|i| i * columns + i)) {
            return Some(WinLine::MainDiagonal);
        }
        if self.all_toggled((0..diagonal).map(|i| i * columns + columns - 1 - i)) {
            return Some(WinLine::AntiDiagonal);
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn grid(rows: usize, columns: usize) -> Grid {
        let labels = (0..rows * columns).map(|i| format!("w{i}"));
        Grid::from_labels(rows, columns, labels, DEFAULT_SENTINEL_LABEL).unwrap()
    }

    fn grid_with(rows: usize, columns: usize, toggled: &[(usize, usize)]) -> Grid {
        let mut g = grid(rows, columns);
        for &(r, c) in toggled {
            g.toggle(r * columns + c);
        }
        g
    }

    fn highlighted_count(g: &Grid) -> usize {
        g.cells().iter().filter(|c| c.highlighted).count()
    }

    #[test]
    fn test_new_grid_layout() {
        let g = grid(3, 4);
        assert_eq!(g.cells().len(), 13);
        assert_eq!(g.sentinel().label, "confirm win");
        assert_eq!(g.highlighted_index(), 0);
        assert!(g.cells()[0].highlighted);
        assert_eq!(highlighted_count(&g), 1);
        assert!(g.cells().iter().all(|c| !c.toggled));
        assert_eq!(g.position(6), (1, 2));
    }

    #[test]
    fn test_from_word_list_draws_distinct_labels() {
        let words = WordList::from_lines((0..40).map(|i| format!("buzz{i}")));
        let mut rng = BingoRand::new_predictable(99);
        let g = Grid::from_word_list(5, 5, &words, &mut rng, DEFAULT_SENTINEL_LABEL).unwrap();

        assert_eq!(g.cells().len(), 26);
        let labels: HashSet<_> = g.cells()[..25].iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels.len(), 25);
        assert!(labels.iter().all(|l| words.contains(l)));
    }

    #[test]
    fn test_from_word_list_insufficient() {
        let words = WordList::from_lines(["a", "b", "c", "d"]);
        let mut rng = BingoRand::new_predictable(1);
        let err = Grid::from_word_list(3, 3, &words, &mut rng, DEFAULT_SENTINEL_LABEL).unwrap_err();
        assert!(matches!(
            err,
            GameError::InsufficientWords {
                available: 4,
                required: 9
            }
        ));
    }

    #[test]
    fn test_zero_sized_grid_rejected() {
        let err = Grid::from_labels(0, 3, Vec::<String>::new(), "x").unwrap_err();
        assert!(matches!(err, GameError::Config(_)));
    }

    #[test]
    fn test_oversized_grid_rejected() {
        let err = Grid::from_labels(usize::MAX / 2, 3, ["a"], "x").unwrap_err();
        assert!(err.to_string().contains("too large"));
        assert!(Grid::from_labels(101, 100, ["a"], "x").is_err());
        assert_eq!(card_size(100, 100).unwrap(), MAX_CELLS);
        assert!(card_size(usize::MAX, usize::MAX).is_err());
    }

    #[test]
    fn test_moves_stop_at_edges() {
        let mut g = grid(3, 3);
        assert!(!g.move_highlight(Direction::Up));
        assert!(!g.move_highlight(Direction::Left));
        assert_eq!(g.highlighted_index(), 0);

        assert!(g.move_highlight(Direction::Right));
        assert!(g.move_highlight(Direction::Right));
        assert!(!g.move_highlight(Direction::Right));
        assert_eq!(g.highlighted_index(), 2);
        assert_eq!(highlighted_count(&g), 1);

        assert!(g.move_highlight(Direction::Down));
        assert_eq!(g.highlighted_index(), 5);
        assert!(g.move_highlight(Direction::Left));
        assert_eq!(g.highlighted_index(), 4);
        assert!(g.cells()[4].highlighted);
        assert!(!g.cells()[5].highlighted);
    }

    #[test]
    fn test_no_wraparound_between_rows() {
        let mut g = grid(2, 3);
        g.move_highlight(Direction::Down);
        assert_eq!(g.highlighted_index(), 3);
        assert!(!g.move_highlight(Direction::Left));
        assert_eq!(g.highlighted_index(), 3);
    }

    #[test]
    fn test_sentinel_navigation() {
        let mut g = grid(3, 3);
        // bottom right, then down onto the sentinel
        for d in [Direction::Down, Direction::Down, Direction::Right, Direction::Right] {
            g.move_highlight(d);
        }
        assert_eq!(g.highlighted_index(), 8);
        assert!(g.move_highlight(Direction::Down));
        assert!(g.is_sentinel_highlighted());
        assert_eq!(highlighted_count(&g), 1);

        assert!(!g.move_highlight(Direction::Down));
        assert!(!g.move_highlight(Direction::Left));
        assert!(!g.move_highlight(Direction::Right));
        assert!(g.is_sentinel_highlighted());

        assert!(g.move_highlight(Direction::Up));
        assert_eq!(g.highlighted_index(), 6);
    }

    #[test]
    fn test_every_move_keeps_one_highlight() {
        let mut g = grid(4, 2);
        let pattern = [
            Direction::Right,
            Direction::Down,
            Direction::Down,
            Direction::Left,
            Direction::Down,
            Direction::Down,
            Direction::Down,
            Direction::Up,
            Direction::Right,
            Direction::Up,
            Direction::Up,
            Direction::Up,
            Direction::Up,
        ];
        for d in pattern {
            let before = g.highlighted_index();
            let moved = g.move_highlight(d);
            assert_eq!(moved, before != g.highlighted_index());
            assert_eq!(highlighted_count(&g), 1);
            assert!(g.highlighted_index() <= g.sentinel_index());
        }
    }

    #[test]
    fn test_toggle_touches_only_one_cell() {
        let mut g = grid(3, 3);
        assert_eq!(g.toggle(4), Some(true));
        for (i, cell) in g.cells().iter().enumerate() {
            assert_eq!(cell.toggled, i == 4);
        }
        assert_eq!(g.toggle(4), Some(false));
        assert!(g.cells().iter().all(|c| !c.toggled));
        assert_eq!(g.toggle(9), None);
        assert!(!g.sentinel().toggled);
    }

    #[test]
    fn test_row_win() {
        let g = grid_with(3, 3, &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(g.check_for_win(), Some(WinLine::Row(0)));
    }

    #[test]
    fn test_column_win() {
        let g = grid_with(3, 3, &[(0, 2), (1, 2), (2, 2)]);
        assert_eq!(g.check_for_win(), Some(WinLine::Column(2)));
    }

    #[test]
    fn test_main_diagonal_win() {
        let g = grid_with(3, 3, &[(0, 0), (1, 1), (2, 2)]);
        assert_eq!(g.check_for_win(), Some(WinLine::MainDiagonal));
    }

    #[test]
    fn test_anti_diagonal_win() {
        let g = grid_with(3, 3, &[(0, 2), (1, 1), (2, 0)]);
        assert_eq!(g.check_for_win(), Some(WinLine::AntiDiagonal));
    }

    #[test]
    fn test_scattered_cells_do_not_win() {
        let g = grid_with(3, 3, &[(0, 0), (1, 1)]);
        assert_eq!(g.check_for_win(), None);
        let g = grid_with(3, 3, &[(0, 0), (0, 1), (1, 2), (2, 1)]);
        assert_eq!(g.check_for_win(), None);
        assert_eq!(grid(3, 3).check_for_win(), None);
    }

    #[test]
    fn test_rectangular_diagonals() {
        // 2x4: main diagonal is (0,0),(1,1); anti-diagonal is (0,3),(1,2)
        let g = grid_with(2, 4, &[(0, 0), (1, 1)]);
        assert_eq!(g.check_for_win(), Some(WinLine::MainDiagonal));
        let g = grid_with(2, 4, &[(0, 3), (1, 2)]);
        assert_eq!(g.check_for_win(), Some(WinLine::AntiDiagonal));
    }

    #[test]
    fn test_single_cell_grid() {
        let mut g = grid(1, 1);
        assert!(g.move_highlight(Direction::Down));
        assert!(g.is_sentinel_highlighted());
        assert!(g.move_highlight(Direction::Up));
        g.toggle(0);
        assert_eq!(g.check_for_win(), Some(WinLine::Row(0)));
    }
}
