use std::sync::Arc;

use log::trace;

use super::{single_deletions, WordMatcher};
use crate::types::{char_len, Dictionary};

/// Recursive backtracking matcher without memoization.
///
/// Deletes characters left to right and stops at the first branch that reaches the
/// empty string. Dictionary membership prunes every other branch.
#[derive(Debug, Clone)]
pub struct RecursiveMatcher {
    dictionary: Arc<Dictionary>,
}

impl RecursiveMatcher {
    pub fn new(dictionary: Arc<Dictionary>) -> Self {
        Self { dictionary }
    }
}

impl WordMatcher for RecursiveMatcher {
    fn matches(&self, word: &str) -> bool {
        if word.is_empty() {
            trace!("complete match!");
            return true;
        }

        if !self.dictionary.contains(word) {
            return false;
        }

        trace!("match: {}, length={}", word, char_len(word));

        let found = single_deletions(word).any(|reduced| self.matches(&reduced));
        if !found {
            trace!("backtracking from {}", word);
        }
        found
    }
}
