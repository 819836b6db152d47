//! Placement legality checks for sudoku boards

use super::grid::{row_col_to_box, Board};

/// Checks candidate placements against the sudoku uniqueness rules.
pub struct RuleChecker<'a> {
    board: &'a Board,
}

impl<'a> RuleChecker<'a> {
    pub fn new(board: &'a Board) -> Self {
        Self { board }
    }

    /// Whether placing `value` at (row, col) keeps the board legal.
    ///
    /// Checks the row, then the column, then the box, stopping at the
    /// first group that already contains the value. The cell's current
    /// value is ignored so a placement can overwrite it.
    pub fn placement_allowed(&self, row: usize, col: usize, value: u8) -> bool {
        !self.used_in_row(row, col, value)
            && !self.used_in_col(row, col, value)
            && !self.used_in_box(row, col, value)
    }

    fn used_in_row(&self, row: usize, col: usize, value: u8) -> bool {
        self.board
            .cells_by_row(row)
            .any(|c| c.col != col && c.value == value)
    }

    fn used_in_col(&self, row: usize, col: usize, value: u8) -> bool {
        self.board
            .cells_by_col(col)
            .any(|c| c.row != row && c.value == value)
    }

    fn used_in_box(&self, row: usize, col: usize, value: u8) -> bool {
        let (box_index, _) = row_col_to_box(row, col);
        self.board
            .cells_by_box(box_index)
            .any(|c| (c.row, c.col) != (row, col) && c.value == value)
    }
}
