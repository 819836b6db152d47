//! Sudoku board model

pub mod grid;
pub mod rules;

pub use grid::{box_cell_to_row_col, row_col_to_box, Board, Cell, Matrix};
pub use grid::{BOX_SIZE, N_BOXES, N_COLS, N_ROWS, VALUE_RANGE};
pub use rules::RuleChecker;
