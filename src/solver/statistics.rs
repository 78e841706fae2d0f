// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Statistics
//!
//! Counters filled in by the solver as it walks the search tree.

use strum::EnumCount;
use strum_macros::EnumCount as EnumCountMacro;

#[derive(Debug, EnumCountMacro, Copy, Clone, PartialEq, Eq)]
#[repr(u8)]
pub enum Counters {
    /// Boards the search has visited, including the starting one.
    NodesVisited,
    /// Single-number boards compared against the target.
    LeavesTested,
    /// Branches dropped because they divided by zero.
    DivisionByZeroPruned,
    /// Branches dropped because a result did not fit in `i64`.
    OverflowPruned,
    /// Searches that ended with a witness.
    Solutions,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    stats: [u64; Counters::COUNT],
}

impl Statistics {
    pub fn new() -> Self {
        Statistics::default()
    }

    /// Increment the specified counter by 1.
    pub(crate) fn increment_counter(&mut self, counter: Counters) {
        self.stats[counter as usize] += 1;
    }

    /// Get the current value of the specified counter.
    pub fn get(&self, counter: Counters) -> u64 {
        self.stats[counter as usize]
    }

    pub fn reset(&mut self) {
        self.stats = [0; Counters::COUNT];
    }
}
