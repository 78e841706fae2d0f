// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Puzzle vocabulary: digits, operators, and the board state that shrinks by
//! one number per reduction step.

pub mod digit;
pub mod errors;
pub mod operator;
pub mod state;

pub use digit::Digit;
pub use errors::PuzzleError;
pub use operator::Operator;
pub use state::{Outcome, PuzzleState, Step};

use crate::rational::Rational;

/// Number of values in a puzzle.
pub const PUZZLE_SIZE: usize = 4;

/// The value every puzzle must reach.
pub const TARGET: Rational = Rational::from_integer(10);
