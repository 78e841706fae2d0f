// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exhaustive search for a way to make 10.
//!
//! The search reduces the board one step at a time until a single number is
//! left, and succeeds if that number is exactly 10.
//!
//! # Search Order
//!
//! At each level the solver tries, depth first:
//! 1. every pair of positions `(i, j)` with `i < j`, in ascending order
//! 2. every operator, in the order `+ - * /`
//! 3. the forward order `a op b`, then for `-` and `/` only the reverse order `b op a`
//!
//! The result of the step is placed at the front of the next board. The first
//! branch that reaches 10 wins, so the witness is *a* solution, not
//! necessarily the shortest or simplest one.
//!
//! Division by zero or arithmetic overflow on a branch prunes that branch and
//! nothing else. The search never compares floating point values.
//!
//! # Example
//!
//! ```
//! use make_ten::solver::is_solvable;
//! use make_ten::Rational;
//!
//! let numbers: Vec<Rational> = [2, 2, 3, 3].into_iter().map(Rational::from).collect();
//! let solution = is_solvable(&numbers);
//! assert!(solution.is_found());
//! assert_eq!(solution.trace().last().unwrap().result, Rational::from(10));
//! ```

pub mod statistics;

pub use statistics::{Counters, Statistics};

use crate::puzzle::{Operator, PuzzleState, Step, TARGET};
use crate::rational::{ArithmeticError, Rational};
use strum::IntoEnumIterator;
use tracing::trace;

/// Result of a search: a witness trace, or proof that none exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Solution {
    /// The steps, in order, that reduce the input to 10.
    Found(Vec<Step>),
    NotFound,
}

impl Solution {
    pub fn is_found(&self) -> bool {
        matches!(self, Solution::Found(_))
    }

    /// The witness steps; empty when not found.
    pub fn trace(&self) -> &[Step] {
        match self {
            Solution::Found(steps) => steps.as_slice(),
            Solution::NotFound => &[],
        }
    }

    /// The witness rendered as `"a op b = c"` lines.
    pub fn trace_lines(&self) -> Vec<String> {
        self.trace().iter().map(Step::to_string).collect()
    }
}

/// Depth-first solver that records how much work each search did.
#[derive(Debug, Default)]
pub struct Solver {
    pub statistics: Statistics,
}

impl Solver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Search for a sequence of steps that reduces `numbers` to 10.
    ///
    /// Statistics accumulate across calls; see [`Statistics::reset`].
    pub fn solve(&mut self, numbers: &[Rational]) -> Solution {
        let start = PuzzleState::new(numbers.to_vec());
        match self.search(&start) {
            Some(done) => {
                self.statistics.increment_counter(Counters::Solutions);
                Solution::Found(done.history().to_vec())
            }
            None => Solution::NotFound,
        }
    }

    /// Returns the final single-number board on success.
    fn search(&mut self, state: &PuzzleState) -> Option<PuzzleState> {
        self.statistics.increment_counter(Counters::NodesVisited);

        let numbers = state.numbers();
        if numbers.len() <= 1 {
            if numbers.is_empty() {
                return None;
            }
            self.statistics.increment_counter(Counters::LeavesTested);
            return (numbers[0] == TARGET).then(|| state.clone());
        }

        for i in 0..numbers.len() {
            for j in (i + 1)..numbers.len() {
                let (a, b) = (numbers[i], numbers[j]);
                for op in Operator::iter() {
                    if let Some(done) = self.branch(state, i, j, a, op, b) {
                        return Some(done);
                    }
                    if op.is_commutative() {
                        continue;
                    }
                    if let Some(done) = self.branch(state, i, j, b, op, a) {
                        return Some(done);
                    }
                }
            }
        }
        None
    }

    /// Try one step `left op right` in place of positions `i` and `j`.
    fn branch(
        &mut self,
        state: &PuzzleState,
        i: usize,
        j: usize,
        left: Rational,
        op: Operator,
        right: Rational,
    ) -> Option<PuzzleState> {
        match Step::compute(left, op, right) {
            Ok(step) => self.search(&state.reduced(i, j, step)),
            Err(err) => {
                trace!(%left, %op, %right, %err, "pruned branch");
                let counter = match err {
                    ArithmeticError::Overflow => Counters::OverflowPruned,
                    _ => Counters::DivisionByZeroPruned,
                };
                self.statistics.increment_counter(counter);
                None
            }
        }
    }
}

/// Search `numbers` with a fresh [`Solver`].
pub fn is_solvable(numbers: &[Rational]) -> Solution {
    Solver::new().solve(numbers)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ints(values: &[i64]) -> Vec<Rational> {
        values.iter().copied().map(Rational::from).collect()
    }

    #[test]
    fn test_single_number() {
        assert_eq!(is_solvable(&ints(&[10])), Solution::Found(vec![]));
        assert_eq!(is_solvable(&ints(&[9])), Solution::NotFound);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(is_solvable(&[]), Solution::NotFound);
    }

    #[test]
    fn test_first_witness_order() {
        let solution = is_solvable(&ints(&[2, 2, 3, 3]));
        assert_eq!(
            solution.trace_lines(),
            vec!["2 + 2 = 4", "4 + 3 = 7", "7 + 3 = 10"]
        );
    }

    #[test]
    fn test_reverse_order_is_tried_for_subtraction() {
        // Only 12 - 2 reaches 10; the forward order gives -10.
        let solution = is_solvable(&ints(&[2, 12]));
        assert_eq!(solution.trace_lines(), vec!["12 - 2 = 10"]);
    }

    #[test]
    fn test_reverse_order_is_tried_for_division() {
        let solution = is_solvable(&ints(&[3, 30]));
        assert_eq!(solution.trace_lines(), vec!["30 / 3 = 10"]);
    }

    #[test]
    fn test_division_by_zero_is_pruned() {
        // 0 / 3 is a leaf; 3 / 0 is pruned.
        let mut solver = Solver::new();
        assert_eq!(solver.solve(&ints(&[0, 3])), Solution::NotFound);
        assert_eq!(solver.statistics.get(Counters::DivisionByZeroPruned), 1);
        assert_eq!(solver.statistics.get(Counters::LeavesTested), 5);

        // A zero on the board does not stop the search from finding 5 * 2.
        let solution = solver.solve(&ints(&[5, 0, 2]));
        assert!(solution.is_found());
        assert_eq!(solver.statistics.get(Counters::Solutions), 1);
    }

    #[test]
    fn test_overflow_is_pruned() {
        let mut solver = Solver::new();
        let numbers = ints(&[i64::MAX, 1, 1, 1]);
        assert_eq!(solver.solve(&numbers), Solution::NotFound);
        assert!(solver.statistics.get(Counters::OverflowPruned) > 0);
        assert!(solver.statistics.get(Counters::LeavesTested) > 0);

        // An overflowing branch does not hide a solution elsewhere.
        let solution = is_solvable(&ints(&[i64::MAX, i64::MAX, 5, 5]));
        assert!(solution.is_found());
    }

    #[test]
    fn test_fractional_intermediate() {
        // 5 / (1/2) requires an exact fraction along the way.
        let solution = is_solvable(&[Rational::from(5), Rational::new(1, 2).unwrap()]);
        assert_eq!(solution.trace_lines(), vec!["5 / 1/2 = 10"]);
    }

    #[test]
    fn test_all_ones_unsolvable() {
        let mut solver = Solver::new();
        assert_eq!(solver.solve(&ints(&[1, 1, 1, 1])), Solution::NotFound);
        // 1 - 1 = 0 puts a zero on the board, so some divisions are pruned.
        assert!(solver.statistics.get(Counters::LeavesTested) > 0);
        assert!(solver.statistics.get(Counters::DivisionByZeroPruned) > 0);
        assert_eq!(solver.statistics.get(Counters::Solutions), 0);
    }
}
