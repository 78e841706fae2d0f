// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Digit type for puzzle numbers.
//!
//! Generated puzzles use single digits 1..=9, which is what lets a puzzle be
//! written as a plain string like `"2233"` and read back character by character.

use crate::rational::Rational;
use std::fmt;

/// Smallest digit a puzzle may contain.
pub const MIN_DIGIT: u8 = 1;

/// Largest digit a puzzle may contain.
pub const MAX_DIGIT: u8 = 9;

/// A puzzle digit in the range `MIN_DIGIT..=MAX_DIGIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digit(u8);

impl Digit {
    /// Create a new digit, panicking if out of range.
    ///
    /// For values already checked against the range, such as draws from a
    /// validated generator config.
    ///
    /// # Panics
    ///
    /// Panics if `value` is outside `1..=9`.
    pub fn new(value: u8) -> Self {
        assert!(
            (MIN_DIGIT..=MAX_DIGIT).contains(&value),
            "Digit out of range: {}",
            value
        );
        Self(value)
    }

    /// Try to create a new digit, returning None if out of range.
    pub fn try_new(value: u8) -> Option<Self> {
        if (MIN_DIGIT..=MAX_DIGIT).contains(&value) {
            Some(Self(value))
        } else {
            None
        }
    }

    /// Read a digit from its character, `'1'..='9'`.
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10).and_then(|d| Self::try_new(d as u8))
    }

    /// Recover a digit from a rational, if it is an integer in range.
    pub fn from_rational(value: Rational) -> Option<Self> {
        if !value.is_integer() {
            return None;
        }
        u8::try_from(value.numerator()).ok().and_then(Self::try_new)
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

impl From<Digit> for Rational {
    fn from(digit: Digit) -> Self {
        Rational::from_integer(i64::from(digit.0))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
