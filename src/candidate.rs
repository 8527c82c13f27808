use std::collections::BTreeSet;

use log::debug;

use crate::types::{char_len, CandidateSet, Dictionary};

/// Select the words of `word_length` characters that contain at least one of
/// `one_char_words`.
///
/// A word without any one-character word inside can never end its reduction chain
/// on one, so it is discarded before matching. Passing this filter does not imply a
/// match.
pub fn select_candidates(
    dictionary: &Dictionary,
    word_length: usize,
    one_char_words: &BTreeSet<String>,
) -> CandidateSet {
    let sized: Vec<&str> = dictionary
        .iter()
        .filter(|w| char_len(w) == word_length)
        .collect();

    debug!("number of candidate words: {}", sized.len());

    let candidates: BTreeSet<String> = sized
        .into_iter()
        .filter(|w| one_char_words.iter().any(|c| w.contains(c.as_str())))
        .map(str::to_string)
        .collect();

    debug!(
        "number of candidate words (after trimming): {}",
        candidates.len()
    );

    CandidateSet::from_set(candidates)
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_EXTRA: [&str; 0] = [];

    fn one_char(words: &[&str]) -> BTreeSet<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_selects_by_length() {
        let dict = Dictionary::from_lines(["a", "at", "cat", "cats", "bats"], NO_EXTRA);
        let candidates = select_candidates(&dict, 4, &one_char(&["a"]));
        let words: Vec<&str> = candidates.iter().collect();
        assert_eq!(words, vec!["bats", "cats"]);
    }

    #[test]
    fn test_prunes_words_without_one_char_word() {
        let dict = Dictionary::from_lines(["a", "cats", "dogs"], NO_EXTRA);
        let candidates = select_candidates(&dict, 4, &dict.one_char_words());
        assert!(candidates.contains("cats"));
        assert!(!candidates.contains("dogs"));
    }

    #[test]
    fn test_no_one_char_words_means_no_candidates() {
        let dict = Dictionary::from_lines(["cats", "dogs"], NO_EXTRA);
        let candidates = select_candidates(&dict, 4, &dict.one_char_words());
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        let dict = Dictionary::from_lines(["а", "удар", "ab"], NO_EXTRA);
        let candidates = select_candidates(&dict, 4, &dict.one_char_words());
        assert!(candidates.contains("удар"));
        assert_eq!(candidates.len(), 1);
    }
}
