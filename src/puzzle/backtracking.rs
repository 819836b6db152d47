//! Randomized backtracking fill for full boards

use crate::board::{Board, RuleChecker, VALUE_RANGE};
use rand::seq::SliceRandom;
use rand::Rng;

/// Generate a fully filled valid board.
///
/// Backtracking over the CNF-free rule checker is much cheaper than a
/// SAT round trip here, and the shuffled candidate order is what makes
/// boards vary between runs. A 9x9 board is always completable from
/// empty, so this cannot fail.
pub fn generate_full_board() -> Board {
    let mut board = Board::empty();
    let mut rng = rand::thread_rng();
    let filled = fill_cells(&mut board, &mut rng);
    debug_assert!(filled, "an empty sudoku board is always completable");
    board
}

/// Fill the first empty cell and recurse.
///
/// Returns `false` when no candidate digit completes the subtree; the
/// cell is reset to 0 before returning so the caller can try its next
/// candidate.
fn fill_cells<R: Rng>(board: &mut Board, rng: &mut R) -> bool {
    let Some(cell) = board.first_empty() else {
        return true;
    };
    let (row, col) = (cell.row, cell.col);

    let mut candidates: Vec<u8> = (1..=VALUE_RANGE).collect();
    candidates.shuffle(rng);

    for value in candidates {
        if RuleChecker::new(board).placement_allowed(row, col, value) {
            board.place(row, col, value);
            if fill_cells(board, rng) {
                return true;
            }
        }
    }

    board.place(row, col, 0);
    false
}
