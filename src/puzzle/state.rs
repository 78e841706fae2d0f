// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Board state during a solve or a game.
//!
//! A [`PuzzleState`] is an immutable value: every reduction step builds a new
//! state with one fewer number and one more [`Step`] in its history. The
//! solver relies on this, since each branch of the search owns the state it
//! was handed and backtracking is just dropping it.
//!
//! # Examples
//!
//! ```
//! use make_ten::puzzle::{Operator, Outcome, PuzzleState};
//! use make_ten::Rational;
//!
//! let board = PuzzleState::from_integers(&[5, 5]);
//! let done = board.combine(0, 1, Operator::Add).unwrap();
//! assert_eq!(done.numbers(), &[Rational::from(10)]);
//! assert_eq!(done.outcome(), Some(Outcome::Won));
//! assert_eq!(done.history()[0].to_string(), "5 + 5 = 10");
//! ```

use super::{Operator, PuzzleError, TARGET};
use crate::rational::{ArithmeticError, Rational};
use std::fmt;

/// One reduction step: `left operator right = result`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    pub left: Rational,
    pub operator: Operator,
    pub right: Rational,
    pub result: Rational,
}

impl Step {
    /// Compute `left operator right` and record it as a step.
    pub fn compute(
        left: Rational,
        operator: Operator,
        right: Rational,
    ) -> Result<Self, ArithmeticError> {
        let result = operator.apply(left, right)?;
        Ok(Self {
            left,
            operator,
            right,
            result,
        })
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.left, self.operator, self.right, self.result
        )
    }
}

/// How a finished board ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won,
    Lost,
}

/// The numbers currently on the board and the steps that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PuzzleState {
    numbers: Vec<Rational>,
    history: Vec<Step>,
}

impl PuzzleState {
    pub fn new(numbers: Vec<Rational>) -> Self {
        Self {
            numbers,
            history: Vec::new(),
        }
    }

    pub fn from_integers(values: &[i64]) -> Self {
        Self::new(values.iter().copied().map(Rational::from).collect())
    }

    pub fn numbers(&self) -> &[Rational] {
        &self.numbers
    }

    pub fn history(&self) -> &[Step] {
        &self.history
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// `None` while a move is still possible; otherwise whether the last number is 10.
    pub fn outcome(&self) -> Option<Outcome> {
        match self.numbers.as_slice() {
            [last] if *last == TARGET => Some(Outcome::Won),
            [_] => Some(Outcome::Lost),
            _ => None,
        }
    }

    /// Play `numbers[first] op numbers[second]`.
    ///
    /// The two operands leave the board and the result takes position `first`
    /// (or the end of the board, if that is now shorter). On error `self` is
    /// untouched, so a rejected move leaves the game as it was.
    pub fn combine(
        &self,
        first: usize,
        second: usize,
        operator: Operator,
    ) -> Result<Self, PuzzleError> {
        if self.numbers.len() < 2 {
            return Err(PuzzleError::BoardFinished {
                len: self.numbers.len(),
            });
        }
        self.check_index(first)?;
        self.check_index(second)?;
        if first == second {
            return Err(PuzzleError::SameIndex { index: first });
        }
        let step = Step::compute(self.numbers[first], operator, self.numbers[second])?;
        let mut numbers = self.without_pair(first, second);
        numbers.insert(first.min(numbers.len()), step.result);
        Ok(self.successor(numbers, step))
    }

    /// The search's reduction: drop positions `i` and `j` and put the step's
    /// result at the front.
    pub(crate) fn reduced(&self, i: usize, j: usize, step: Step) -> Self {
        let mut numbers = Vec::with_capacity(self.numbers.len() - 1);
        numbers.push(step.result);
        numbers.extend(self.without_pair(i, j));
        self.successor(numbers, step)
    }

    fn without_pair(&self, i: usize, j: usize) -> Vec<Rational> {
        self.numbers
            .iter()
            .enumerate()
            .filter(|&(index, _)| index != i && index != j)
            .map(|(_, &value)| value)
            .collect()
    }

    fn successor(&self, numbers: Vec<Rational>, step: Step) -> Self {
        let mut history = Vec::with_capacity(self.history.len() + 1);
        history.extend_from_slice(&self.history);
        history.push(step);
        Self { numbers, history }
    }

    fn check_index(&self, index: usize) -> Result<(), PuzzleError> {
        if index < self.numbers.len() {
            Ok(())
        } else {
            Err(PuzzleError::IndexOutOfRange {
                index,
                len: self.numbers.len(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_display() {
        let step = Step::compute(Rational::from(3), Operator::Divide, Rational::from(9)).unwrap();
        assert_eq!(step.to_string(), "3 / 9 = 1/3");
    }

    #[test]
    fn test_combine_places_result_at_first() {
        let board = PuzzleState::from_integers(&[1, 2, 3, 4]);

        let next = board.combine(1, 3, Operator::Multiply).unwrap();
        assert_eq!(next.numbers(), PuzzleState::from_integers(&[1, 8, 3]).numbers());

        // first > second: the result lands at the end once the board is shorter.
        let next = board.combine(3, 0, Operator::Subtract).unwrap();
        assert_eq!(next.numbers(), PuzzleState::from_integers(&[2, 3, 3]).numbers());
        assert_eq!(next.history().len(), 1);
        assert_eq!(next.history()[0].to_string(), "4 - 1 = 3");
    }

    #[test]
    fn test_combine_rejects_bad_moves() {
        let board = PuzzleState::from_integers(&[1, 0, 3]);
        assert_eq!(
            board.combine(0, 1, Operator::Divide),
            Err(PuzzleError::Arithmetic(ArithmeticError::DivisionByZero))
        );
        assert_eq!(
            board.combine(2, 2, Operator::Add),
            Err(PuzzleError::SameIndex { index: 2 })
        );
        assert_eq!(
            board.combine(0, 3, Operator::Add),
            Err(PuzzleError::IndexOutOfRange { index: 3, len: 3 })
        );
        // The board itself is unchanged.
        assert_eq!(board, PuzzleState::from_integers(&[1, 0, 3]));
    }

    #[test]
    fn test_combine_rejects_overflow() {
        let board = PuzzleState::from_integers(&[i64::MAX, 1, 2]);
        assert_eq!(
            board.combine(0, 1, Operator::Add),
            Err(PuzzleError::Arithmetic(ArithmeticError::Overflow))
        );
        assert!(board.history().is_empty());
        // The same pair still combines the other way round.
        let next = board.combine(0, 1, Operator::Subtract).unwrap();
        assert_eq!(next.numbers()[0], Rational::from(i64::MAX - 1));
    }

    #[test]
    fn test_combine_on_finished_board() {
        let board = PuzzleState::from_integers(&[10]);
        assert_eq!(
            board.combine(0, 0, Operator::Add),
            Err(PuzzleError::BoardFinished { len: 1 })
        );
        assert_eq!(
            PuzzleState::default().combine(0, 1, Operator::Add),
            Err(PuzzleError::BoardFinished { len: 0 })
        );
    }

    #[test]
    fn test_reduced_prepends_result() {
        let board = PuzzleState::from_integers(&[1, 2, 3, 4]);
        let step = Step::compute(Rational::from(2), Operator::Add, Rational::from(4)).unwrap();
        let next = board.reduced(1, 3, step);
        assert_eq!(next.numbers(), PuzzleState::from_integers(&[6, 1, 3]).numbers());
        assert_eq!(next.history(), &[step]);
        assert_eq!(board.len(), 4);
    }

    #[test]
    fn test_outcome() {
        assert_eq!(PuzzleState::from_integers(&[4, 6]).outcome(), None);
        assert_eq!(PuzzleState::from_integers(&[10]).outcome(), Some(Outcome::Won));
        assert_eq!(PuzzleState::from_integers(&[9]).outcome(), Some(Outcome::Lost));
        assert_eq!(PuzzleState::default().outcome(), None);
    }

    #[test]
    fn test_play_to_a_win() {
        let board = PuzzleState::from_integers(&[2, 2, 3, 3]);
        let board = board.combine(0, 1, Operator::Add).unwrap(); // [4, 3, 3]
        let board = board.combine(0, 1, Operator::Add).unwrap(); // [7, 3]
        assert_eq!(board.numbers(), PuzzleState::from_integers(&[7, 3]).numbers());
        assert_eq!(board.outcome(), None);
        let board = board.combine(0, 1, Operator::Add).unwrap();
        assert_eq!(board.outcome(), Some(Outcome::Won));
        let steps: Vec<String> = board.history().iter().map(Step::to_string).collect();
        assert_eq!(steps, ["2 + 2 = 4", "4 + 3 = 7", "7 + 3 = 10"]);
    }

    #[test]
    fn test_play_to_a_loss() {
        // (2 + 2) * (3 - 3 / 3) is 8, not 10.
        let board = PuzzleState::from_integers(&[2, 2, 3, 3]);
        let board = board.combine(2, 3, Operator::Divide).unwrap(); // [2, 2, 1]
        let board = board.combine(1, 2, Operator::Subtract).unwrap(); // [2, 1]
        let board = board.combine(0, 1, Operator::Add).unwrap(); // [3]
        assert_eq!(board.numbers(), &[Rational::from(3)]);
        assert_eq!(board.outcome(), Some(Outcome::Lost));
    }
}
