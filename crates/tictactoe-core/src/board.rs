//! Board representation for a 3x3 game.
//!
//! This module contains:
//! - Player marks and cell values
//! - The nine-cell board, addressed 0-8 in row-major order
//! - The table of winning lines and line detection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of rows (and columns) on the board
pub const BOARD_SIZE: usize = 3;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// A 0-based cell position, row-major (`row * 3 + col`)
pub type Position = usize;

/// All lines that win the game, in detection order.
///
/// Rows first, then columns, then the two diagonals. The first completed
/// line found in this order is the one reported.
pub const WINNING_LINES: [[Position; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// A player's symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other player's mark
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Single-character symbol for rendering
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Contents of a single cell
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The mark in this cell, if any
    pub fn mark(&self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(*mark),
        }
    }
}

/// Convert a 0-based row and column into a board position.
///
/// Returns `None` if either coordinate is off the board.
pub fn row_col_to_index(row: usize, col: usize) -> Option<Position> {
    if row < BOARD_SIZE && col < BOARD_SIZE {
        Some(row * BOARD_SIZE + col)
    } else {
        None
    }
}

/// Convert a board position into its 0-based `(row, col)`.
pub fn index_to_row_col(index: Position) -> Option<(usize, usize)> {
    if index < CELL_COUNT {
        Some((index / BOARD_SIZE, index % BOARD_SIZE))
    } else {
        None
    }
}

/// The game board: exactly nine cells
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Create an empty board
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the cell at a position, or `None` if the position is off the board
    pub fn get(&self, position: Position) -> Option<Cell> {
        self.cells.get(position).copied()
    }

    /// Place a mark. The caller has already validated the position and
    /// checked the cell is empty.
    pub(crate) fn set(&mut self, position: Position, mark: Mark) {
        debug_assert!(self.cells[position].is_empty(), "cell {position} is occupied");
        self.cells[position] = Cell::Marked(mark);
    }

    /// All nine cells in position order
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Positions that are still empty, ascending
    pub fn empty_positions(&self) -> Vec<Position> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// Check if no empty cells remain
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Number of cells holding the given mark
    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.mark() == Some(mark))
            .count()
    }

    /// Find the first completed line in [`WINNING_LINES`] order.
    pub fn winning_line(&self) -> Option<(Mark, [Position; 3])> {
        WINNING_LINES.iter().find_map(|&line| {
            let [a, b, c] = line;
            let mark = self.cells[a].mark()?;
            if self.cells[b] == self.cells[a] && self.cells[c] == self.cells[a] {
                Some((mark, line))
            } else {
                None
            }
        })
    }
}

/// Compact form: one character per cell, `.` for empty, rows separated by `/`
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 && i % BOARD_SIZE == 0 {
                write!(f, "/")?;
            }
            match cell {
                Cell::Empty => write!(f, ".")?,
                Cell::Marked(mark) => write!(f, "{}", mark)?,
            }
        }
        Ok(())
    }
}
