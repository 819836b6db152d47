//! SAT oracle backed by CaDiCaL

use super::translate::{Clause, Formula};
use cadical::Solver;

/// Thin wrapper around a CaDiCaL instance.
///
/// One oracle serves one logical solve session; the native solver is
/// released when the oracle is dropped. Not thread-safe: concurrent
/// sessions each build their own oracle.
pub struct Oracle {
    solver: Solver,
    variable_count: usize,
    clause_count: usize,
}

impl Oracle {
    pub fn new() -> Self {
        Self {
            solver: Solver::new(),
            variable_count: 0,
            clause_count: 0,
        }
    }

    /// Append a formula to the working clause set.
    pub fn load(&mut self, formula: &Formula) {
        for clause in formula {
            self.add_clause(clause);
        }
    }

    /// Append a single clause to the working clause set.
    pub fn add_clause(&mut self, clause: &Clause) {
        debug_assert!(!clause.is_empty(), "empty clause is trivially unsatisfiable");

        for &literal in &clause.literals {
            let variable = literal.unsigned_abs() as usize;
            if variable > self.variable_count {
                self.variable_count = variable;
            }
        }

        self.solver.add_clause(clause.literals.iter().copied());
        self.clause_count += 1;
    }

    /// Attempt to satisfy the working set. Returns `true` on a model,
    /// `false` on unsatisfiability.
    pub fn solve(&mut self) -> bool {
        self.solver.solve() == Some(true)
    }

    /// The last satisfying assignment as signed literals, one per
    /// variable. Defined only after a successful `solve`.
    pub fn model(&self) -> Vec<i32> {
        (1..=self.variable_count as i32)
            .map(|variable| match self.solver.value(variable) {
                Some(true) => variable,
                // None means the variable was never assigned; either
                // polarity satisfies, and negative keeps it unasserted
                Some(false) | None => -variable,
            })
            .collect()
    }

    pub fn variable_count(&self) -> usize {
        self.variable_count
    }

    pub fn clause_count(&self) -> usize {
        self.clause_count
    }
}

impl Default for Oracle {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_oracle_is_empty() {
        let oracle = Oracle::new();
        assert_eq!(oracle.variable_count(), 0);
        assert_eq!(oracle.clause_count(), 0);
    }

    #[test]
    fn test_simple_satisfiable() {
        let mut oracle = Oracle::new();
        // x1 ∨ x2, ¬x1 ∨ x2: forces x2
        oracle.add_clause(&Clause::binary(1, 2));
        oracle.add_clause(&Clause::binary(-1, 2));

        assert!(oracle.solve());
        let model = oracle.model();
        assert!(model.contains(&2));
    }

    #[test]
    fn test_unsatisfiable() {
        let mut oracle = Oracle::new();
        oracle.add_clause(&Clause::unit(1));
        oracle.add_clause(&Clause::unit(-1));

        assert!(!oracle.solve());
    }

    #[test]
    fn test_load_counts_clauses_and_variables() {
        let mut oracle = Oracle::new();
        let formula = vec![Clause::new(vec![1, -5, 3]), Clause::binary(2, -7)];
        oracle.load(&formula);

        assert_eq!(oracle.clause_count(), 2);
        assert_eq!(oracle.variable_count(), 7);
    }

    #[test]
    fn test_blocking_clause_excludes_model() {
        let mut oracle = Oracle::new();
        oracle.add_clause(&Clause::binary(1, 2));
        oracle.add_clause(&Clause::binary(-1, -2));

        // Exactly one of x1, x2 is true: two models exist
        assert!(oracle.solve());
        let first = oracle.model();
        oracle.add_clause(&Clause::new(first.iter().map(|&l| -l).collect()));

        assert!(oracle.solve());
        let second = oracle.model();
        assert_ne!(first, second);

        oracle.add_clause(&Clause::new(second.iter().map(|&l| -l).collect()));
        assert!(!oracle.solve());
    }

    #[test]
    fn test_model_covers_all_variables() {
        let mut oracle = Oracle::new();
        oracle.add_clause(&Clause::new(vec![1, 2, 3]));

        assert!(oracle.solve());
        let model = oracle.model();
        assert_eq!(model.len(), 3);
        for (i, literal) in model.iter().enumerate() {
            assert_eq!(literal.unsigned_abs() as usize, i + 1);
        }
    }
}
