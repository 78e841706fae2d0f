// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Exact rational arithmetic.
//!
//! A [`Rational`] is always stored in lowest terms with a strictly positive
//! denominator, so the sign lives entirely in the numerator and `0` is always
//! `0/1`. Normalization happens once, when the value is constructed; every
//! arithmetic operation builds a fresh value.
//!
//! Intermediate products are formed in `i128`, which cannot overflow for `i64`
//! operands. Only a reduced result that does not fit back into `i64` fails,
//! with [`ArithmeticError::Overflow`].
//!
//! # Examples
//!
//! ```
//! use make_ten::Rational;
//!
//! let third = Rational::new(1, 3).unwrap();
//! let sum = third.checked_add(third).and_then(|s| s.checked_add(third));
//! assert_eq!(sum, Ok(Rational::from(1)));
//! assert_eq!(Rational::new(6, -4).unwrap().to_string(), "-3/2");
//! ```

pub mod errors;

pub use errors::{ArithmeticError, ParseRationalError};

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

/// Greatest common divisor, with `gcd(x, 0) == x`.
pub fn gcd(mut a: u128, mut b: u128) -> u128 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

/// An exact ratio of two integers.
#[derive(Debug, Clone, Copy)]
pub struct Rational {
    numerator: i64,
    denominator: i64,
}

impl Rational {
    /// The additive identity, `0/1`.
    pub const ZERO: Rational = Rational {
        numerator: 0,
        denominator: 1,
    };

    /// Create a rational `numerator / denominator` in lowest terms.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::InvalidArgument`] if `denominator` is zero,
    /// and [`ArithmeticError::Overflow`] for `i64::MIN / -1` and the like,
    /// whose reduced form is not representable.
    pub fn new(numerator: i64, denominator: i64) -> Result<Self, ArithmeticError> {
        if denominator == 0 {
            return Err(ArithmeticError::InvalidArgument { numerator });
        }
        Self::normalized(i128::from(numerator), i128::from(denominator))
    }

    /// Create the integer rational `value / 1`.
    pub const fn from_integer(value: i64) -> Self {
        Self {
            numerator: value,
            denominator: 1,
        }
    }

    /// Reduce by the gcd, move the sign onto the numerator, and narrow to `i64`.
    ///
    /// Callers guarantee `denominator != 0`.
    fn normalized(numerator: i128, denominator: i128) -> Result<Self, ArithmeticError> {
        debug_assert!(denominator != 0);
        let divisor = gcd(numerator.unsigned_abs(), denominator.unsigned_abs());
        let divisor = i128::try_from(divisor).map_err(|_| ArithmeticError::Overflow)?;
        let (mut numerator, mut denominator) = (numerator / divisor, denominator / divisor);
        if denominator < 0 {
            numerator = numerator.checked_neg().ok_or(ArithmeticError::Overflow)?;
            denominator = denominator.checked_neg().ok_or(ArithmeticError::Overflow)?;
        }
        Ok(Self {
            numerator: i64::try_from(numerator).map_err(|_| ArithmeticError::Overflow)?,
            denominator: i64::try_from(denominator).map_err(|_| ArithmeticError::Overflow)?,
        })
    }

    pub fn numerator(self) -> i64 {
        self.numerator
    }

    pub fn denominator(self) -> i64 {
        self.denominator
    }

    pub fn is_zero(self) -> bool {
        self.numerator == 0
    }

    pub fn is_integer(self) -> bool {
        self.denominator == 1
    }

    /// `self + other`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Overflow`] if the sum is not representable.
    pub fn checked_add(self, other: Rational) -> Result<Rational, ArithmeticError> {
        let (a, b, c, d) = self.widened(other);
        Self::normalized(a * d + c * b, b * d)
    }

    /// `self - other`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Overflow`] if the difference is not representable.
    pub fn checked_sub(self, other: Rational) -> Result<Rational, ArithmeticError> {
        let (a, b, c, d) = self.widened(other);
        Self::normalized(a * d - c * b, b * d)
    }

    /// `self * other`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Overflow`] if the product is not representable.
    pub fn checked_mul(self, other: Rational) -> Result<Rational, ArithmeticError> {
        let (a, b, c, d) = self.widened(other);
        Self::normalized(a * c, b * d)
    }

    /// Divide by `other`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::DivisionByZero`] if `other` is zero, and
    /// [`ArithmeticError::Overflow`] if the quotient is not representable.
    pub fn checked_div(self, other: Rational) -> Result<Rational, ArithmeticError> {
        if other.is_zero() {
            return Err(ArithmeticError::DivisionByZero);
        }
        let (a, b, c, d) = self.widened(other);
        Self::normalized(a * d, b * c)
    }

    /// `-self`.
    ///
    /// # Errors
    ///
    /// Returns [`ArithmeticError::Overflow`] for a numerator of `i64::MIN`.
    pub fn checked_neg(self) -> Result<Rational, ArithmeticError> {
        Ok(Self {
            numerator: self
                .numerator
                .checked_neg()
                .ok_or(ArithmeticError::Overflow)?,
            denominator: self.denominator,
        })
    }

    /// Both operands' fields as `i128`: `(a, b, c, d)` for `a/b` and `c/d`.
    ///
    /// Any product of two of these, and any sum of two such products, fits in `i128`.
    fn widened(self, other: Rational) -> (i128, i128, i128, i128) {
        (
            i128::from(self.numerator),
            i128::from(self.denominator),
            i128::from(other.numerator),
            i128::from(other.denominator),
        )
    }

    /// Floating point approximation, for display only.
    ///
    /// Never used for equality or by the solver.
    pub fn to_f64(self) -> f64 {
        self.numerator as f64 / self.denominator as f64
    }
}

impl Default for Rational {
    fn default() -> Self {
        Self::ZERO
    }
}

impl From<i64> for Rational {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

/// Equality by cross-multiplication: `a/b == c/d` iff `a*d == c*b`.
impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        let (a, b, c, d) = self.widened(*other);
        a * d == c * b
    }
}

impl Eq for Rational {}

// Stored values are in lowest terms, so equal rationals have equal fields.
impl Hash for Rational {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.numerator.hash(state);
        self.denominator.hash(state);
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

impl FromStr for Rational {
    type Err = ParseRationalError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let malformed = || ParseRationalError::Malformed {
            text: text.to_string(),
        };
        let trimmed = text.trim();
        match trimmed.split_once('/') {
            Some((numerator, denominator)) => {
                let numerator = numerator.trim().parse().map_err(|_| malformed())?;
                let denominator = denominator.trim().parse().map_err(|_| malformed())?;
                Ok(Rational::new(numerator, denominator)?)
            }
            None => {
                let value = trimmed.parse().map_err(|_| malformed())?;
                Ok(Rational::from_integer(value))
            }
        }
    }
}
