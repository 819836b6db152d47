//! Puzzle solving and generation

pub mod backtracking;
pub mod generator;
pub mod solver;

pub use backtracking::generate_full_board;
pub use generator::{Difficulty, Generator, MIN_CLUES};
pub use solver::{shared_rules_formula, SolveSession, Solutions};
