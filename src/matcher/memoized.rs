use std::num::NonZeroUsize;
use std::sync::Arc;

use log::trace;
use lru::LruCache;
use parking_lot::Mutex;

use super::{single_deletions, WordMatcher};
use crate::types::Dictionary;

/// Backtracking matcher that remembers the outcome for every dictionary word it has
/// fully explored.
///
/// The dictionary never changes, so a cached outcome stays valid for the lifetime of
/// the matcher and can be shared between workers. The cache lock is released before
/// recursing.
#[derive(Debug)]
pub struct MemoizedMatcher {
    dictionary: Arc<Dictionary>,
    cache: Mutex<LruCache<String, bool>>,
}

impl MemoizedMatcher {
    pub fn new(dictionary: Arc<Dictionary>, cache_size: usize) -> Self {
        let cache_size = NonZeroUsize::new(cache_size).unwrap_or(NonZeroUsize::MIN);
        Self {
            dictionary,
            cache: Mutex::new(LruCache::new(cache_size)),
        }
    }

    /// Number of cached outcomes
    pub fn cached(&self) -> usize {
        self.cache.lock().len()
    }

    /// Clear the cache
    pub fn clear_cache(&self) {
        self.cache.lock().clear();
    }
}

impl WordMatcher for MemoizedMatcher {
    fn matches(&self, word: &str) -> bool {
        if word.is_empty() {
            return true;
        }

        if !self.dictionary.contains(word) {
            return false;
        }

        if let Some(&found) = self.cache.lock().get(word) {
            trace!("cached: {} -> {}", word, found);
            return found;
        }

        let found = single_deletions(word).any(|reduced| self.matches(&reduced));

        self.cache.lock().put(word.to_string(), found);
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::RecursiveMatcher;

    const NO_EXTRA: [&str; 0] = [];

    fn dictionary(words: &[&str]) -> Arc<Dictionary> {
        Arc::new(Dictionary::from_lines(words, NO_EXTRA))
    }

    #[test]
    fn test_memoized_agrees_with_recursive() {
        let dict = dictionary(&[
            "a", "i", "at", "it", "ta", "cat", "act", "tac", "cats", "acts", "scat", "tic",
            "stic", "bc", "abc", "ab",
        ]);
        let plain = RecursiveMatcher::new(dict.clone());
        let memo = MemoizedMatcher::new(dict.clone(), 8);

        for word in dict.iter() {
            assert_eq!(memo.matches(word), plain.matches(word), "word: {}", word);
        }
        for word in ["", "zzz", "cast", "ca"] {
            assert_eq!(memo.matches(word), plain.matches(word), "word: {}", word);
        }
    }

    #[test]
    fn test_outcomes_are_cached() {
        let memo = MemoizedMatcher::new(dictionary(&["a", "at", "cat"]), 16);
        assert_eq!(memo.cached(), 0);

        assert!(memo.matches("cat"));
        assert!(memo.cached() >= 1);

        // second call is served from the cache and gives the same answer
        assert!(memo.matches("cat"));

        memo.clear_cache();
        assert_eq!(memo.cached(), 0);
    }

    #[test]
    fn test_tiny_cache_still_correct() {
        let memo = MemoizedMatcher::new(dictionary(&["a", "bc", "abc", "at", "cat"]), 1);
        assert!(!memo.matches("abc"));
        assert!(memo.matches("cat"));
        assert!(!memo.matches("abc"));
    }

    #[test]
    fn test_zero_cache_size_is_clamped() {
        let memo = MemoizedMatcher::new(dictionary(&["a", "at"]), 0);
        assert!(memo.matches("at"));
    }
}
