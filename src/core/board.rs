//! The 3×3 grid and win-line detection.
//!
//! Cells are stored row-major:
//!
//! ```text
//!  0 | 1 | 2
//! -----------
//!  3 | 4 | 5
//! -----------
//!  6 | 7 | 8
//! ```

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::Mark;
use crate::error::GameError;

/// Number of cells on the board.
pub const CELLS: usize = 9;

/// The 8 win-lines: rows, columns, diagonals.
pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Move indices in ascending order. Never more than 9, so no heap allocation.
pub type Moves = SmallVec<[usize; CELLS]>;

/// Contents of a single cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    Marked(Mark),
}

impl Cell {
    /// The mark in this cell, if any.
    #[must_use]
    pub const fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Marked(mark) => Some(mark),
        }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// 3×3 board.
///
/// `Copy`, so cloning a game state never shares storage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; CELLS],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from explicit cells.
    #[must_use]
    pub const fn from_cells(cells: [Cell; CELLS]) -> Self {
        Self { cells }
    }

    /// Get the cell at `index`, or `None` if out of range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// All cells, row-major.
    #[must_use]
    pub fn cells(&self) -> &[Cell; CELLS] {
        &self.cells
    }

    /// Place a mark. Caller checks range and occupancy.
    pub(crate) fn place(&mut self, index: usize, mark: Mark) {
        debug_assert!(self.cells[index].is_empty());
        self.cells[index] = Cell::Marked(mark);
    }

    /// Indices of empty cells, ascending.
    #[must_use]
    pub fn empty_cells(&self) -> Moves {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(i, _)| i)
            .collect()
    }

    /// True when no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Mark holding a complete win-line, checked in `WIN_LINES` order.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        WIN_LINES.iter().find_map(|&[a, b, c]| {
            let mark = self.cells[a].mark()?;
            (self.cells[b] == self.cells[a] && self.cells[c] == self.cells[a]).then_some(mark)
        })
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..3 {
            if row > 0 {
                writeln!(f)?;
                writeln!(f, "-----------")?;
            }
            for col in 0..3 {
                let index = row * 3 + col;
                if col > 0 {
                    write!(f, "|")?;
                }
                match self.cells[index] {
                    Cell::Empty => write!(f, " {} ", index)?,
                    Cell::Marked(mark) => write!(f, " {} ", mark)?,
                }
            }
        }
        Ok(())
    }
}

/// Parse a board from 9 symbols: `X`, `O`, and `.`, `-` or `_` for empty.
/// Whitespace is ignored, so rows may be split across lines.
///
/// ```
/// use tictactoe::core::{Board, Cell, Mark};
///
/// let board: Board = "OO. XX. ...".parse().unwrap();
/// assert_eq!(board.get(0), Some(Cell::Marked(Mark::O)));
/// assert_eq!(board.get(2), Some(Cell::Empty));
/// ```
impl FromStr for Board {
    type Err = GameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let symbols: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if symbols.len() != CELLS {
            return Err(GameError::InvalidBoard(format!(
                "expected {} cells, found {}",
                CELLS,
                symbols.len()
            )));
        }

        let mut cells = [Cell::Empty; CELLS];
        for (cell, &symbol) in cells.iter_mut().zip(&symbols) {
            *cell = match symbol {
                '.' | '-' | '_' => Cell::Empty,
                other => Cell::Marked(Mark::try_from(other).map_err(|_| {
                    GameError::InvalidBoard(format!("unknown cell symbol {:?}", other))
                })?),
            };
        }

        Ok(Self { cells })
    }
}
