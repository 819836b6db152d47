//! Sudoku board representation and cell access

use crate::error::{Result, SudokuError};
use std::fmt;

/// Number of rows on a standard board.
pub const N_ROWS: usize = 9;
/// Number of columns on a standard board.
pub const N_COLS: usize = 9;
/// Number of 3x3 boxes on a standard board.
pub const N_BOXES: usize = 9;
/// Side length of a box.
pub const BOX_SIZE: usize = 3;
/// Largest value a cell can hold; 0 means empty.
pub const VALUE_RANGE: u8 = 9;

/// External representation of a board: 9x9 values in [0, 9], 0 = blank.
pub type Matrix = [[u8; N_COLS]; N_ROWS];

/// A single cell of the board.
///
/// Equality covers position and value, so comparing two boards cell by
/// cell compares their contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: usize,
    pub col: usize,
    pub value: u8,
}

/// A 9x9 sudoku board.
///
/// Cells live in a single row-major arena; the row, column, and box
/// accessors walk index ranges over that arena, so a mutation is visible
/// through every view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board (all cells zero).
    pub fn empty() -> Self {
        let mut cells = Vec::with_capacity(N_ROWS * N_COLS);
        for row in 0..N_ROWS {
            for col in 0..N_COLS {
                cells.push(Cell { row, col, value: 0 });
            }
        }
        Self { cells }
    }

    /// Build a board from a matrix of values in [0, 9].
    pub fn from_matrix(matrix: &Matrix) -> Result<Self> {
        let mut board = Self::empty();
        for (row, values) in matrix.iter().enumerate() {
            for (col, &value) in values.iter().enumerate() {
                board.set_value(row, col, value)?;
            }
        }
        Ok(board)
    }

    #[inline]
    fn index(row: usize, col: usize) -> usize {
        row * N_COLS + col
    }

    /// Get the value at the given coordinates.
    pub fn value(&self, row: usize, col: usize) -> u8 {
        self.cells[Self::index(row, col)].value
    }

    /// Set the value at the given coordinates.
    pub fn set_value(&mut self, row: usize, col: usize, value: u8) -> Result<()> {
        if value > VALUE_RANGE {
            return Err(SudokuError::InvalidCellValue(value));
        }
        self.place(row, col, value);
        Ok(())
    }

    /// Write a value known to be in range. Crate-internal fast path for
    /// the backtracking fill and the model decoder.
    pub(crate) fn place(&mut self, row: usize, col: usize, value: u8) {
        debug_assert!(value <= VALUE_RANGE);
        self.cells[Self::index(row, col)].value = value;
    }

    /// Cells of a row, in column order.
    pub fn cells_by_row(&self, row: usize) -> impl Iterator<Item = &Cell> {
        (0..N_COLS).map(move |col| &self.cells[Self::index(row, col)])
    }

    /// Cells of a column, in row order.
    pub fn cells_by_col(&self, col: usize) -> impl Iterator<Item = &Cell> {
        (0..N_ROWS).map(move |row| &self.cells[Self::index(row, col)])
    }

    /// Cells of a box, in row-major order within the box.
    pub fn cells_by_box(&self, box_index: usize) -> impl Iterator<Item = &Cell> {
        (0..N_ROWS).map(move |cell_in_box| {
            let (row, col) = box_cell_to_row_col(box_index, cell_in_box);
            &self.cells[Self::index(row, col)]
        })
    }

    /// All filled cells, in row-major order. Row or column subsets
    /// compose off `cells_by_row`/`cells_by_col`.
    pub fn used_cells(&self) -> Vec<Cell> {
        self.cells.iter().filter(|c| c.value != 0).copied().collect()
    }

    /// All empty cells, in row-major order.
    pub fn empty_cells(&self) -> Vec<Cell> {
        self.cells.iter().filter(|c| c.value == 0).copied().collect()
    }

    /// Number of filled cells.
    pub fn used_count(&self) -> usize {
        self.cells.iter().filter(|c| c.value != 0).count()
    }

    /// First empty cell in row-major order, if any.
    pub fn first_empty(&self) -> Option<Cell> {
        self.cells.iter().find(|c| c.value == 0).copied()
    }

    /// Snapshot the board as a plain matrix.
    pub fn to_matrix(&self) -> Matrix {
        let mut matrix = [[0u8; N_COLS]; N_ROWS];
        for cell in &self.cells {
            matrix[cell.row][cell.col] = cell.value;
        }
        matrix
    }
}

/// Map a (box, cell-within-box) pair to board coordinates.
///
/// Boxes are numbered row-major: box 0 is the top-left 3x3, box 2 the
/// top-right, box 8 the bottom-right. Cells within a box follow the same
/// convention. Inverse of `row_col_to_box`.
pub fn box_cell_to_row_col(box_index: usize, cell_in_box: usize) -> (usize, usize) {
    let row = (box_index / BOX_SIZE) * BOX_SIZE + cell_in_box / BOX_SIZE;
    let col = (box_index % BOX_SIZE) * BOX_SIZE + cell_in_box % BOX_SIZE;
    (row, col)
}

/// Map board coordinates to a (box, cell-within-box) pair.
pub fn row_col_to_box(row: usize, col: usize) -> (usize, usize) {
    let box_index = (row / BOX_SIZE) * BOX_SIZE + col / BOX_SIZE;
    let cell_in_box = (row % BOX_SIZE) * BOX_SIZE + col % BOX_SIZE;
    (box_index, cell_in_box)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..N_ROWS {
            for col in 0..N_COLS {
                let value = self.value(row, col);
                if value == 0 {
                    write!(f, ". ")?;
                } else {
                    write!(f, "{} ", value)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
