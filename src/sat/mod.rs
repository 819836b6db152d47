//! SAT encoding components for sudoku

pub mod literal;
pub mod oracle;
pub mod translate;

pub use literal::{from_literal, to_literal, MAX_LITERAL};
pub use oracle::Oracle;
pub use translate::{decode_model, instance_formula, rules_formula, Clause, Formula};
