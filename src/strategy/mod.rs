//! Execution strategies.
//!
//! A strategy applies a [`WordMatcher`] to every candidate and collects the words
//! that reduce. Runs are idempotent: the same candidates and matcher always give the
//! same set of words, whichever strategy is used.

mod parallel;
mod sequential;

pub use parallel::{partition_size, Parallel};
pub use sequential::Sequential;

use crate::error::Result;
use crate::matcher::WordMatcher;
use crate::types::{CandidateSet, ExecutionMode, MatchedWords};

/// Trait for execution strategies
pub trait ExecutionStrategy {
    /// Mode implemented by this strategy
    fn mode(&self) -> ExecutionMode;

    /// Apply `matcher` to every candidate, blocking until all are checked
    fn run(&self, candidates: &CandidateSet, matcher: &dyn WordMatcher) -> Result<MatchedWords>;
}

/// Strategy for a mode. `workers` only affects the parallel strategy.
pub fn strategy_for(mode: ExecutionMode, workers: Option<usize>) -> Box<dyn ExecutionStrategy> {
    match mode {
        ExecutionMode::Sequential => Box::new(Sequential),
        ExecutionMode::Parallel => Box::new(Parallel::new(workers)),
    }
}
