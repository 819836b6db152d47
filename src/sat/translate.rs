//! Translation between sudoku boards and CNF formulas

use super::literal::{from_literal, to_literal};
use crate::board::{box_cell_to_row_col, Board, N_BOXES, N_COLS, N_ROWS, VALUE_RANGE};
use itertools::Itertools;

/// A SAT clause: disjunction of signed literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub literals: Vec<i32>,
}

impl Clause {
    pub fn new(literals: Vec<i32>) -> Self {
        Self { literals }
    }

    /// A clause with a single literal.
    pub fn unit(literal: i32) -> Self {
        Self { literals: vec![literal] }
    }

    /// A clause with two literals.
    pub fn binary(first: i32, second: i32) -> Self {
        Self { literals: vec![first, second] }
    }

    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }
}

/// A CNF formula: conjunction of clauses. Formulas combine by
/// concatenation.
pub type Formula = Vec<Clause>;

/// Translate the sudoku rules into CNF.
///
/// Four constraint families share one uniqueness pattern: for every
/// (group, slot) pair, at least one of the nine candidate literals is
/// true, and no two are true together. The result is independent of any
/// puzzle instance, so callers cache it.
pub fn rules_formula() -> Formula {
    let mut formula = Formula::new();

    // Every cell holds exactly one digit
    uniqueness_family(&mut formula, |row, col, digit| (row, col, digit));
    // Every row holds each digit exactly once
    uniqueness_family(&mut formula, |digit, row, col| (row, col, digit));
    // Every column holds each digit exactly once
    uniqueness_family(&mut formula, |digit, col, row| (row, col, digit));
    // Every box holds each digit exactly once
    uniqueness_family(&mut formula, |digit, box_index, cell_in_box| {
        let (row, col) = box_cell_to_row_col(box_index, cell_in_box);
        (row, col, digit)
    });

    formula
}

/// Emit the uniqueness clauses for one constraint family.
///
/// `map_to_coord` maps a (group, slot, candidate) triple to the
/// (row, col, digit) coordinates of the candidate literal. Groups and
/// slots both range over [0, 9), so the family contributes 81
/// at-least-one clauses and 81 * 36 pairwise at-most-one clauses.
fn uniqueness_family<F>(formula: &mut Formula, map_to_coord: F)
where
    F: Fn(usize, usize, usize) -> (usize, usize, usize),
{
    debug_assert_eq!(N_ROWS, N_COLS);
    debug_assert_eq!(N_ROWS, N_BOXES);

    for group in 0..N_ROWS {
        for slot in 0..N_COLS {
            let candidates: Vec<i32> = (0..VALUE_RANGE as usize)
                .map(|candidate| {
                    let (row, col, digit) = map_to_coord(group, slot, candidate);
                    to_literal(row, col, digit)
                })
                .collect();

            formula.push(Clause::new(candidates.clone()));
            for (&first, &second) in candidates.iter().tuple_combinations() {
                formula.push(Clause::binary(-first, -second));
            }
        }
    }
}

/// Translate the clues of a puzzle instance into CNF: one unit clause
/// per filled cell, forcing the oracle to respect it.
pub fn instance_formula(board: &Board) -> Formula {
    board
        .used_cells()
        .iter()
        .map(|cell| Clause::unit(to_literal(cell.row, cell.col, (cell.value - 1) as usize)))
        .collect()
}

/// Decode a satisfying assignment back into a board.
///
/// Only positive in-range literals carry cell values; anything else in
/// the model is skipped. A cell no literal asserts stays 0, which cannot
/// happen for a model of the full rules formula but must not crash.
pub fn decode_model(model: &[i32]) -> Board {
    let mut board = Board::empty();
    for &literal in model {
        if literal <= 0 {
            continue;
        }
        if let Some((row, col, digit)) = from_literal(literal) {
            board.place(row, col, digit as u8 + 1);
        }
    }
    board
}
