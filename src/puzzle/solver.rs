//! SAT-backed solving sessions for sudoku boards

use crate::board::Board;
use crate::error::{Result, SudokuError};
use crate::sat::{decode_model, instance_formula, rules_formula, to_literal, Clause, Formula, Oracle};
use std::sync::OnceLock;

static RULES_FORMULA: OnceLock<Formula> = OnceLock::new();

/// The sudoku rules formula, computed once per process.
///
/// The formula depends only on the board dimensions, so every session
/// loads the same immutable value.
pub fn shared_rules_formula() -> &'static Formula {
    RULES_FORMULA.get_or_init(rules_formula)
}

/// One solve session over one board.
///
/// A session owns its oracle: the rules formula plus the board's
/// instance formula are loaded at construction, and every call to
/// `solutions()` starts from a fresh session, so enumeration restarts
/// per call.
pub struct SolveSession {
    oracle: Oracle,
}

impl SolveSession {
    /// Prepare a session for the given board.
    pub fn new(board: &Board) -> Self {
        let mut oracle = Oracle::new();
        oracle.load(shared_rules_formula());
        oracle.load(&instance_formula(board));
        Self { oracle }
    }

    /// Find the first solution.
    pub fn solve(mut self) -> Result<Board> {
        if self.oracle.solve() {
            Ok(decode_model(&self.oracle.model()))
        } else {
            Err(SudokuError::NoSolution)
        }
    }

    /// Lazily enumerate all solutions.
    ///
    /// After each model the iterator adds a blocking clause over the 81
    /// chosen-digit literals, excluding that grid; the sequence ends when
    /// the oracle reports unsatisfiability. Callers interested only in
    /// uniqueness stop after two items.
    pub fn solutions(self) -> Solutions {
        Solutions {
            oracle: self.oracle,
            exhausted: false,
        }
    }
}

/// Iterator over every solution of a session's board.
pub struct Solutions {
    oracle: Oracle,
    exhausted: bool,
}

impl Iterator for Solutions {
    type Item = Board;

    fn next(&mut self) -> Option<Board> {
        if self.exhausted {
            return None;
        }
        if !self.oracle.solve() {
            self.exhausted = true;
            return None;
        }

        let board = decode_model(&self.oracle.model());
        let blocking: Vec<i32> = board
            .used_cells()
            .iter()
            .map(|cell| -to_literal(cell.row, cell.col, (cell.value - 1) as usize))
            .collect();
        self.oracle.add_clause(&Clause::new(blocking));

        Some(board)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Matrix, RuleChecker};
    use crate::puzzle::backtracking::generate_full_board;

    /// A row, column, and box check over a claimed solution.
    fn assert_valid_solution(board: &Board) {
        for group in 0..9 {
            let mut row_digits: Vec<u8> = board.cells_by_row(group).map(|c| c.value).collect();
            let mut col_digits: Vec<u8> = board.cells_by_col(group).map(|c| c.value).collect();
            let mut box_digits: Vec<u8> = board.cells_by_box(group).map(|c| c.value).collect();
            for digits in [&mut row_digits, &mut col_digits, &mut box_digits] {
                digits.sort_unstable();
                assert_eq!(*digits, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
            }
        }
    }

    #[test]
    fn test_shared_rules_formula_is_cached() {
        let first = shared_rules_formula() as *const Formula;
        let second = shared_rules_formula() as *const Formula;
        assert_eq!(first, second);
    }

    #[test]
    fn test_solve_empty_board_yields_valid_solution() {
        let solved = SolveSession::new(&Board::empty()).solve().unwrap();
        assert_valid_solution(&solved);
    }

    #[test]
    fn test_solve_respects_clues() {
        let mut matrix: Matrix = [[0u8; 9]; 9];
        matrix[0][0] = 4;
        matrix[5][7] = 8;
        let board = Board::from_matrix(&matrix).unwrap();

        let solved = SolveSession::new(&board).solve().unwrap();
        assert_valid_solution(&solved);
        assert_eq!(solved.value(0, 0), 4);
        assert_eq!(solved.value(5, 7), 8);
    }

    #[test]
    fn test_solve_unsatisfiable_board() {
        let mut matrix: Matrix = [[0u8; 9]; 9];
        matrix[0][0] = 1;
        matrix[0][5] = 1;
        let board = Board::from_matrix(&matrix).unwrap();

        let result = SolveSession::new(&board).solve();
        assert_eq!(result.unwrap_err(), SudokuError::NoSolution);
    }

    #[test]
    fn test_enumerate_unique_completion() {
        let mut full = generate_full_board();
        // A single blank is forced by its row: exactly one completion
        full.place(4, 4, 0);

        let solutions: Vec<Board> = SolveSession::new(&full).solutions().take(2).collect();
        assert_eq!(solutions.len(), 1);
        assert_valid_solution(&solutions[0]);
    }

    #[test]
    fn test_enumerate_stops_after_second_model() {
        // The empty board has an astronomical number of completions;
        // enumeration must stop lazily at the second one
        let solutions: Vec<Board> = SolveSession::new(&Board::empty()).solutions().take(2).collect();
        assert_eq!(solutions.len(), 2);
        assert_ne!(solutions[0], solutions[1]);
        assert_valid_solution(&solutions[0]);
        assert_valid_solution(&solutions[1]);
    }

    #[test]
    fn test_enumerate_restarts_per_session() {
        let mut full = generate_full_board();
        full.place(0, 0, 0);

        let first_pass = SolveSession::new(&full).solutions().count();
        let second_pass = SolveSession::new(&full).solutions().count();
        assert_eq!(first_pass, 1);
        assert_eq!(second_pass, 1);
    }

    #[test]
    fn test_enumerated_solutions_satisfy_rule_checker() {
        let solved = SolveSession::new(&Board::empty())
            .solutions()
            .next()
            .unwrap();

        let checker = RuleChecker::new(&solved);
        for cell in solved.used_cells() {
            assert!(checker.placement_allowed(cell.row, cell.col, cell.value));
        }
    }
}
