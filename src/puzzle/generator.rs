//! Puzzle generation: full board, minimization, difficulty padding

use super::backtracking::generate_full_board;
use super::solver::SolveSession;
use crate::board::Board;
use crate::error::SudokuError;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fewest clues a classic 9x9 puzzle can have and stay unique.
pub const MIN_CLUES: usize = 17;

/// Difficulty levels, each a multiplier over the 17-clue baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Extreme,
}

impl Difficulty {
    pub fn multiplier(self) -> usize {
        match self {
            Difficulty::Easy => 4,
            Difficulty::Medium => 3,
            Difficulty::Hard => 2,
            Difficulty::Extreme => 1,
        }
    }

    /// Clue count a generated puzzle aims for.
    pub fn target_clues(self) -> usize {
        MIN_CLUES * self.multiplier()
    }
}

impl FromStr for Difficulty {
    type Err = SudokuError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name.to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            "extreme" => Ok(Difficulty::Extreme),
            _ => Err(SudokuError::InvalidDifficulty(name.to_string())),
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
            Difficulty::Extreme => "extreme",
        };
        write!(f, "{}", name)
    }
}

/// Generates puzzles with a unique solution at a requested difficulty.
pub struct Generator {
    difficulty: Difficulty,
}

impl Generator {
    pub fn new(difficulty: Difficulty) -> Self {
        Self { difficulty }
    }

    /// Generate a new puzzle.
    ///
    /// A full board is minimized as far as uniqueness allows, then
    /// padded back up with random clues from the full board until the
    /// difficulty target is met. The result can exceed the target only
    /// when the minimal puzzle itself does (easier than requested,
    /// never harder).
    pub fn generate(&self) -> Board {
        let full = generate_full_board();
        let mut puzzle = full.clone();
        Self::wipe_cells(&mut puzzle);
        self.pad_to_target(&mut puzzle, &full);
        puzzle
    }

    /// Remove every clue whose removal keeps the solution unique.
    ///
    /// Candidates are visited once in random order; a clue restored
    /// after a failed removal is never retried.
    fn wipe_cells(puzzle: &mut Board) {
        let mut candidates = puzzle.used_cells();
        candidates.shuffle(&mut rand::thread_rng());

        for cell in candidates {
            puzzle.place(cell.row, cell.col, 0);
            if !has_unique_solution(puzzle) {
                puzzle.place(cell.row, cell.col, cell.value);
            }
        }
    }

    /// Restore random removed clues until the target count is reached.
    fn pad_to_target(&self, puzzle: &mut Board, full: &Board) {
        let target = self.difficulty.target_clues();
        let mut removed = puzzle.empty_cells();
        removed.shuffle(&mut rand::thread_rng());

        let mut used = puzzle.used_count();
        while used < target {
            // Cannot run dry: the full board has 81 >= target clues
            let Some(cell) = removed.pop() else { break };
            puzzle.place(cell.row, cell.col, full.value(cell.row, cell.col));
            used += 1;
        }
    }
}

/// Whether the puzzle has exactly one solution. Enumeration stops after
/// the second model.
fn has_unique_solution(puzzle: &Board) -> bool {
    SolveSession::new(puzzle).solutions().take(2).count() == 1
}
