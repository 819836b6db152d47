//! SAT-backed sudoku generator and solver
//!
//! Puzzles are solved by translating the board into CNF and handing it
//! to a SAT oracle; generation minimizes a random full board down to a
//! unique-solution puzzle at a requested difficulty.

pub mod board;
pub mod error;
pub mod puzzle;
pub mod sat;

pub use board::{Board, Matrix};
pub use error::{Result, SudokuError};
pub use puzzle::{Difficulty, Generator};

use puzzle::SolveSession;

/// Generate a new puzzle with the named difficulty.
///
/// The name is matched case-insensitively against easy, medium, hard,
/// and extreme; anything else fails with `InvalidDifficulty` before any
/// generation work starts.
pub fn generate(difficulty: &str) -> Result<Matrix> {
    let difficulty: Difficulty = difficulty.parse()?;
    Ok(Generator::new(difficulty).generate().to_matrix())
}

/// Solve the given puzzle and return the completed matrix.
///
/// A matrix with out-of-range values or without a solution fails with
/// `InvalidMatrix`; the two low-level conditions collapse into one error
/// kind at this boundary, and no partial grid is ever returned.
pub fn solve(matrix: &Matrix) -> Result<Matrix> {
    let board = Board::from_matrix(matrix).map_err(|_| SudokuError::InvalidMatrix)?;
    let solved = SolveSession::new(&board)
        .solve()
        .map_err(|_| SudokuError::InvalidMatrix)?;
    Ok(solved.to_matrix())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_valid_solution(matrix: &Matrix) {
        let board = Board::from_matrix(matrix).unwrap();
        for group in 0..9 {
            for digits in [
                board.cells_by_row(group).map(|c| c.value).collect::<Vec<_>>(),
                board.cells_by_col(group).map(|c| c.value).collect::<Vec<_>>(),
                board.cells_by_box(group).map(|c| c.value).collect::<Vec<_>>(),
            ] {
                let mut digits = digits;
                digits.sort_unstable();
                assert_eq!(digits, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
            }
        }
    }

    #[test]
    fn test_solve_empty_matrix_returns_valid_completion() {
        let solved = solve(&[[0u8; 9]; 9]).unwrap();
        assert_valid_solution(&solved);
    }

    #[test]
    fn test_solve_rejects_out_of_range_values() {
        let mut matrix = [[0u8; 9]; 9];
        matrix[0][0] = 10;
        assert_eq!(solve(&matrix), Err(SudokuError::InvalidMatrix));
    }

    #[test]
    fn test_solve_rejects_duplicate_in_row() {
        let mut matrix = [[0u8; 9]; 9];
        matrix[0][0] = 1;
        matrix[0][1] = 1;
        assert_eq!(solve(&matrix), Err(SudokuError::InvalidMatrix));
    }

    #[test]
    fn test_generate_easy_clue_count() {
        let matrix = generate("Easy").unwrap();
        let clues = matrix.iter().flatten().filter(|&&v| v != 0).count();
        assert_eq!(clues, 68);
    }

    #[test]
    fn test_generate_case_insensitive() {
        let matrix = generate("extreme").unwrap();
        let clues = matrix.iter().flatten().filter(|&&v| v != 0).count();
        assert!(clues >= 17);
        // The generated puzzle must be solvable
        assert_valid_solution(&solve(&matrix).unwrap());
    }

    #[test]
    fn test_generate_rejects_unknown_difficulty() {
        assert_eq!(
            generate("impossible"),
            Err(SudokuError::InvalidDifficulty("impossible".to_string()))
        );
    }
}
