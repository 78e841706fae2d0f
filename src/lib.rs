// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Generator and solver for "make 10" puzzles.
//!
//! Given four numbers, repeatedly pick two of them and replace them with their
//! sum, difference, product or quotient. The puzzle is solved when the last
//! number left is exactly 10.
//!
//! # Architecture
//!
//! - [`rational`]: exact fractions, so `8 / 3 * 3` is `8` and never `7.999..`
//! - [`puzzle`]: digits, operators, and the [`PuzzleState`] board that shrinks
//!   by one number per step
//! - [`solver`]: depth-first search over pairs, operators and operand order,
//!   returning a witness trace
//! - [`generator`]: random draws checked by the solver, with a fixed fallback
//! - [`config`]: generator settings, loadable from TOML
//!
//! # Example
//!
//! ```
//! use make_ten::generator::{parse_puzzle, puzzle_to_string, PuzzleGenerator};
//! use make_ten::{is_solvable, GeneratorConfig};
//!
//! let config = GeneratorConfig { seed: Some(7), ..GeneratorConfig::default() };
//! let mut generator = PuzzleGenerator::new(config).expect("default range is valid");
//! let puzzle = generator.generate();
//! assert!(is_solvable(&puzzle).is_found());
//!
//! let text = puzzle_to_string(&puzzle);
//! assert_eq!(parse_puzzle(&text).unwrap(), puzzle);
//! ```

pub mod config;
pub mod generator;
pub mod puzzle;
pub mod rational;
pub mod solver;

// Re-export commonly used types
pub use config::GeneratorConfig;
pub use generator::{generate, PuzzleGenerator};
pub use puzzle::{Operator, PuzzleState};
pub use rational::{ArithmeticError, Rational};
pub use solver::{is_solvable, Solution, Solver};
