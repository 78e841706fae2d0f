// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Puzzle generation.
//!
//! A puzzle is four distinct digits drawn uniformly from the configured range.
//! Draws are repeated until the solver finds a way to make 10, up to
//! `max_attempts` times. If every draw fails, the generator returns
//! [`FALLBACK_PUZZLE`], so generation itself never fails. The configuration
//! is validated when the generator is built, which is the only fallible step.
//!
//! Puzzles are written as their digits run together (`"2233"`), and
//! [`parse_puzzle`] reads that form back to restart a game from scratch.

use crate::config::{ConfigError, GeneratorConfig};
use crate::puzzle::{Digit, PuzzleError, PUZZLE_SIZE};
use crate::rational::Rational;
use crate::solver::{Solution, Solver};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

/// Returned when every random draw is unsolvable: `2 + 2 + 3 + 3 = 10`.
pub const FALLBACK_PUZZLE: [u8; PUZZLE_SIZE] = [2, 2, 3, 3];

/// Generates solvable puzzles from a random source.
#[derive(Debug)]
pub struct PuzzleGenerator<R: Rng = StdRng> {
    config: GeneratorConfig,
    rng: R,
    solver: Solver,
}

impl PuzzleGenerator<StdRng> {
    /// Seeded from `config.seed` if set, otherwise from OS entropy.
    ///
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`GeneratorConfig::validate`].
    pub fn new(config: GeneratorConfig) -> Result<Self, ConfigError> {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self::with_rng(config, rng)
    }
}

impl<R: Rng> PuzzleGenerator<R> {
    /// # Errors
    ///
    /// Returns the [`ConfigError`] from [`GeneratorConfig::validate`]; a range
    /// with fewer than four digits could never produce a puzzle.
    pub fn with_rng(config: GeneratorConfig, rng: R) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::validated(config, rng))
    }

    /// Callers guarantee `config.validate()` succeeds.
    fn validated(config: GeneratorConfig, rng: R) -> Self {
        Self {
            config,
            rng,
            solver: Solver::new(),
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The solver used to check draws, with its accumulated statistics.
    pub fn solver(&self) -> &Solver {
        &self.solver
    }

    /// Generate a solvable puzzle of four numbers.
    pub fn generate(&mut self) -> Vec<Rational> {
        self.generate_with_solution().0
    }

    /// Generate a solvable puzzle together with the witness the solver found.
    pub fn generate_with_solution(&mut self) -> (Vec<Rational>, Solution) {
        for attempt in 1..=self.config.max_attempts {
            let numbers = self.draw();
            let solution = self.solver.solve(&numbers);
            if solution.is_found() {
                debug!(
                    attempt,
                    puzzle = %puzzle_to_string(&numbers),
                    solution = ?solution.trace_lines(),
                    "Found solvable puzzle"
                );
                return (numbers, solution);
            }
            debug!(attempt, puzzle = %puzzle_to_string(&numbers), "Rejected unsolvable draw");
        }

        warn!(
            attempts = self.config.max_attempts,
            "No solvable draw found, using fallback puzzle"
        );
        let numbers = fallback_puzzle();
        let solution = self.solver.solve(&numbers);
        (numbers, solution)
    }

    /// Draw distinct digits, re-drawing duplicates.
    fn draw(&mut self) -> Vec<Rational> {
        let range = self.config.min_digit..=self.config.max_digit;
        let mut digits: Vec<Digit> = Vec::with_capacity(PUZZLE_SIZE);
        while digits.len() < PUZZLE_SIZE {
            let digit = Digit::new(self.rng.random_range(range.clone()));
            if !digits.contains(&digit) {
                digits.push(digit);
            }
        }
        digits.into_iter().map(Rational::from).collect()
    }
}

/// Generate a puzzle with the default configuration.
pub fn generate() -> Vec<Rational> {
    PuzzleGenerator::validated(GeneratorConfig::default(), StdRng::from_os_rng()).generate()
}

pub fn fallback_puzzle() -> Vec<Rational> {
    FALLBACK_PUZZLE
        .iter()
        .map(|&d| Rational::from(Digit::new(d)))
        .collect()
}

/// Concatenate the numbers' display forms: `[2, 2, 3, 3]` becomes `"2233"`.
///
/// Only unambiguous for single-digit puzzles, which is all the generator makes.
pub fn puzzle_to_string(numbers: &[Rational]) -> String {
    numbers.iter().map(Rational::to_string).collect()
}

/// Read a puzzle string back into numbers, one digit per character.
pub fn parse_puzzle(text: &str) -> Result<Vec<Rational>, PuzzleError> {
    let numbers = text
        .chars()
        .enumerate()
        .map(|(offset, c)| {
            Digit::from_char(c)
                .map(Rational::from)
                .ok_or(PuzzleError::InvalidCharacter { found: c, offset })
        })
        .collect::<Result<Vec<_>, _>>()?;
    if numbers.len() != PUZZLE_SIZE {
        return Err(PuzzleError::WrongLength {
            expected: PUZZLE_SIZE,
            found: numbers.len(),
        });
    }
    Ok(numbers)
}
