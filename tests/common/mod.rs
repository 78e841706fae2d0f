// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use make_ten::puzzle::Step;
use make_ten::Rational;

/// Integer rationals from plain integers.
pub fn ints(values: &[i64]) -> Vec<Rational> {
    values.iter().copied().map(Rational::from).collect()
}

/// Replay a witness trace against the starting numbers.
///
/// Each step must use two numbers still on the board, compute its result
/// correctly, and put that result back. Returns the final board.
pub fn replay(start: &[Rational], trace: &[Step]) -> Vec<Rational> {
    let mut board = start.to_vec();
    for step in trace {
        let recomputed = step
            .operator
            .apply(step.left, step.right)
            .unwrap_or_else(|err| panic!("step {step} is not computable: {err}"));
        assert_eq!(recomputed, step.result, "step {step} has the wrong result");

        take(&mut board, step.left, step);
        take(&mut board, step.right, step);
        board.push(step.result);
    }
    board
}

fn take(board: &mut Vec<Rational>, value: Rational, step: &Step) {
    let index = board
        .iter()
        .position(|&n| n == value)
        .unwrap_or_else(|| panic!("step {step} uses {value}, which is not on the board {board:?}"));
    board.remove(index);
}
