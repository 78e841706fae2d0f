// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for exact rational arithmetic.

use thiserror::Error;

/// Errors raised by [`Rational`](super::Rational) construction and arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    /// A rational was constructed with a zero denominator.
    #[error("denominator cannot be zero (numerator {numerator})")]
    InvalidArgument { numerator: i64 },

    /// The divisor of a division was zero.
    #[error("division by zero")]
    DivisionByZero,

    /// The reduced result does not fit in `i64` numerator and denominator.
    #[error("arithmetic overflow")]
    Overflow,
}

/// Errors raised when parsing a rational from text such as `"3"` or `"-7/2"`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseRationalError {
    /// The text is not an integer or an `n/d` pair of integers.
    #[error("cannot parse {text:?} as a rational")]
    Malformed { text: String },

    /// The text parsed, but described an invalid rational.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}
