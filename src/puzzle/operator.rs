// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The four binary operators of a reduction step.

use crate::rational::{ArithmeticError, Rational};
use std::fmt;
use strum_macros::{EnumCount as EnumCountMacro, EnumIter};

/// An arithmetic operator.
///
/// Iteration order (`Operator::iter()`) is `+ - * /`, which is also the order
/// the solver tries them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumCountMacro)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// Compute `left op right`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] for division by zero and
    /// [`ArithmeticError::Overflow`] when the result does not fit.
    pub fn apply(self, left: Rational, right: Rational) -> Result<Rational, ArithmeticError> {
        match self {
            Operator::Add => left.checked_add(right),
            Operator::Subtract => left.checked_sub(right),
            Operator::Multiply => left.checked_mul(right),
            Operator::Divide => left.checked_div(right),
        }
    }

    /// Whether swapping the operands never changes the result.
    pub fn is_commutative(self) -> bool {
        matches!(self, Operator::Add | Operator::Multiply)
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Subtract),
            '*' | 'x' | '×' => Some(Operator::Multiply),
            '/' | '÷' => Some(Operator::Divide),
            _ => None,
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
