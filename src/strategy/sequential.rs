use std::collections::BTreeSet;
use std::time::Instant;

use log::{debug, trace};

use super::ExecutionStrategy;
use crate::error::Result;
use crate::matcher::WordMatcher;
use crate::types::{CandidateSet, ExecutionMode, MatchedWords};

/// Single-threaded strategy. Candidates are checked in ascending order and the
/// result is sorted.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sequential;

impl ExecutionStrategy for Sequential {
    fn mode(&self) -> ExecutionMode {
        ExecutionMode::Sequential
    }

    fn run(&self, candidates: &CandidateSet, matcher: &dyn WordMatcher) -> Result<MatchedWords> {
        let start = Instant::now();
        let mut matches = BTreeSet::new();

        for word in candidates.iter() {
            if matcher.matches(word) {
                trace!("+{}", word);
                matches.insert(word.to_string());
            } else {
                trace!("-{}", word);
            }
        }

        debug!(
            "sequential match of {} candidates took {:?}",
            candidates.len(),
            start.elapsed()
        );

        Ok(MatchedWords::Sorted(matches))
    }
}
