mod memoized;
mod recursive;

pub use memoized::MemoizedMatcher;
pub use recursive::RecursiveMatcher;

use std::sync::Arc;

use crate::types::Dictionary;

/// Trait for reducibility matchers
pub trait WordMatcher: Send + Sync {
    /// Check if `word` can be unbuilt one character at a time, every intermediate
    /// string being a dictionary word, until nothing is left
    fn matches(&self, word: &str) -> bool;
}

/// Enum wrapper for all matcher types
#[derive(Debug)]
pub enum Matcher {
    Recursive(RecursiveMatcher),
    Memoized(MemoizedMatcher),
}

impl Matcher {
    /// Plain backtracking when `cache_size` is 0, memoized otherwise
    pub fn new(dictionary: Arc<Dictionary>, cache_size: usize) -> Self {
        if cache_size == 0 {
            Matcher::Recursive(RecursiveMatcher::new(dictionary))
        } else {
            Matcher::Memoized(MemoizedMatcher::new(dictionary, cache_size))
        }
    }
}

impl WordMatcher for Matcher {
    fn matches(&self, word: &str) -> bool {
        match self {
            Matcher::Recursive(m) => m.matches(word),
            Matcher::Memoized(m) => m.matches(word),
        }
    }
}

/// Every string obtained by deleting exactly one character of `word`, left to right
pub(crate) fn single_deletions(word: &str) -> impl Iterator<Item = String> + '_ {
    word.char_indices().map(move |(i, c)| {
        let mut reduced = String::with_capacity(word.len() - c.len_utf8());
        reduced.push_str(&word[..i]);
        reduced.push_str(&word[i + c.len_utf8()..]);
        reduced
    })
}
