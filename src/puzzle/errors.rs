// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for puzzle boards and puzzle strings.

use crate::rational::ArithmeticError;
use thiserror::Error;

/// Errors from moves on a [`PuzzleState`](super::PuzzleState) or from parsing a puzzle string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PuzzleError {
    /// Fewer than two numbers are left, so no move is possible.
    #[error("board has {len} number(s) left, nothing to combine")]
    BoardFinished { len: usize },

    /// A board position does not exist.
    #[error("position {index} is out of range for a board of {len} numbers")]
    IndexOutOfRange { index: usize, len: usize },

    /// Both operands of a move name the same position.
    #[error("cannot combine position {index} with itself")]
    SameIndex { index: usize },

    /// A puzzle string contains something other than the digits 1-9.
    #[error("invalid puzzle character {found:?} at offset {offset}")]
    InvalidCharacter { found: char, offset: usize },

    /// A puzzle string has the wrong number of digits.
    #[error("puzzle must have {expected} digits, found {found}")]
    WrongLength { expected: usize, found: usize },

    /// The move itself was not computable.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}
