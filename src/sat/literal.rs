//! Mapping between board coordinates and SAT literals

use crate::board::{N_COLS, N_ROWS, VALUE_RANGE};

/// Largest literal magnitude the encoding uses: one variable per
/// (row, col, digit) triple.
pub const MAX_LITERAL: i32 = (N_ROWS * N_COLS * VALUE_RANGE as usize) as i32;

/// Encode a (row, col, digit) triple as a positive SAT literal.
///
/// `digit` is the zero-based digit index in [0, 9); callers translate
/// between external values 1-9 and digit indices. The mapping is a
/// bijection onto [1, 729].
#[inline]
pub fn to_literal(row: usize, col: usize, digit: usize) -> i32 {
    debug_assert!(row < N_ROWS && col < N_COLS && digit < VALUE_RANGE as usize);
    let col_coefficient = VALUE_RANGE as usize;
    let row_coefficient = col_coefficient * N_COLS;
    (digit + col_coefficient * col + row_coefficient * row) as i32 + 1
}

/// Decode a positive literal back into its (row, col, digit) triple.
///
/// Returns `None` for literals outside [1, 729]; negative literals carry
/// no coordinate information for the decoder.
#[inline]
pub fn from_literal(literal: i32) -> Option<(usize, usize, usize)> {
    if literal <= 0 || literal > MAX_LITERAL {
        return None;
    }
    let index = (literal - 1) as usize;
    let col_coefficient = VALUE_RANGE as usize;
    let row_coefficient = col_coefficient * N_COLS;

    let row = index / row_coefficient;
    let col = (index % row_coefficient) / col_coefficient;
    let digit = index % col_coefficient;
    Some((row, col, digit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_literal_values() {
        assert_eq!(to_literal(0, 0, 0), 1);
        assert_eq!(to_literal(0, 0, 8), 9);
        assert_eq!(to_literal(0, 1, 0), 10);
        assert_eq!(to_literal(1, 0, 0), 82);
        assert_eq!(to_literal(8, 8, 8), 729);
    }

    #[test]
    fn test_bijection_over_full_domain() {
        let mut seen = [false; MAX_LITERAL as usize + 1];
        for row in 0..9 {
            for col in 0..9 {
                for digit in 0..9 {
                    let literal = to_literal(row, col, digit);
                    assert!(literal >= 1 && literal <= MAX_LITERAL);
                    assert!(!seen[literal as usize], "literal {} reused", literal);
                    seen[literal as usize] = true;
                    assert_eq!(from_literal(literal), Some((row, col, digit)));
                }
            }
        }
    }

    #[test]
    fn test_from_literal_rejects_out_of_range() {
        assert_eq!(from_literal(0), None);
        assert_eq!(from_literal(-5), None);
        assert_eq!(from_literal(MAX_LITERAL + 1), None);
    }
}
