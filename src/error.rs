//! Error types for the sudoku engine

use thiserror::Error;

/// Errors produced by the sudoku engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SudokuError {
    /// A cell value outside [0, 9] was supplied at board construction
    /// or mutation. Never clamped.
    #[error("a cell cannot contain the value {0}, only values in [0, 9]")]
    InvalidCellValue(u8),

    /// An unrecognized difficulty name was passed to `generate`.
    #[error("unknown difficulty level: {0:?}")]
    InvalidDifficulty(String),

    /// The SAT oracle reported the puzzle instance unsatisfiable.
    #[error("the board has no solution")]
    NoSolution,

    /// Umbrella error of the public `solve` entry point: the input matrix
    /// is malformed or has no solution.
    #[error("the matrix is malformed or has no solution")]
    InvalidMatrix,
}

pub type Result<T> = std::result::Result<T, SudokuError>;
