//! Integration tests comparing execution strategies and matchers.

use std::collections::BTreeSet;
use std::sync::Arc;

use scrabble_engine_r::{
    partition_size, read_dictionary, select_candidates, Dictionary, ExecutionStrategy,
    MatchedWords, Matcher, MemoizedMatcher, Parallel, RecursiveMatcher, Sequential, WordMatcher,
};

const NO_EXTRA: [&str; 0] = [];

/// Every string over `alphabet` up to `max_len` characters, as dictionary lines
fn generated_lines(alphabet: &[char], max_len: usize) -> Vec<String> {
    let mut all = Vec::new();
    let mut layer = vec![String::new()];
    for _ in 0..max_len {
        let mut next = Vec::new();
        for prefix in &layer {
            for &c in alphabet {
                let mut word = prefix.clone();
                word.push(c);
                next.push(word);
            }
        }
        all.extend(next.iter().cloned());
        layer = next;
    }
    all
}

/// Keep words whose character code sum is not divisible by 3, which leaves holes
/// in most reduction chains
fn sparse_dictionary() -> Arc<Dictionary> {
    let lines: Vec<String> = generated_lines(&['a', 'b', 'c', 'd'], 5)
        .into_iter()
        .filter(|w| w.chars().count() == 1 || w.chars().map(|c| c as u32).sum::<u32>() % 3 != 0)
        .collect();
    Arc::new(Dictionary::from_lines(lines, NO_EXTRA))
}

fn sorted(words: MatchedWords) -> Vec<String> {
    words.into_sorted_vec()
}

#[test]
fn test_parallel_independent_of_worker_count() {
    let dict = sparse_dictionary();
    let candidates = select_candidates(&dict, 5, &dict.one_char_words());
    assert!(candidates.len() > 100);

    let matcher = RecursiveMatcher::new(dict.clone());
    let expected = Sequential.run(&candidates, &matcher).unwrap();
    assert!(!expected.is_empty());
    assert!(expected.len() < candidates.len());

    for workers in [1, 2, 3, 5, 8, 16, 1000] {
        let actual = Parallel::new(Some(workers))
            .run(&candidates, &matcher)
            .unwrap();
        assert_eq!(actual, expected, "workers: {}", workers);
    }
}

#[test]
fn test_matches_are_subset_of_candidates() {
    let dict = sparse_dictionary();
    let candidates = select_candidates(&dict, 4, &dict.one_char_words());
    let matcher = RecursiveMatcher::new(dict.clone());

    let found = Parallel::new(Some(4)).run(&candidates, &matcher).unwrap();
    assert!(found.iter().all(|w| candidates.contains(w)));
}

#[test]
fn test_memoized_matcher_agrees_with_recursive() {
    let dict = sparse_dictionary();
    let candidates = select_candidates(&dict, 5, &dict.one_char_words());

    let recursive = RecursiveMatcher::new(dict.clone());
    // a tiny cache forces evictions while the workers share it
    let memoized = MemoizedMatcher::new(dict.clone(), 8);

    let expected = sorted(Sequential.run(&candidates, &recursive).unwrap());
    let actual = sorted(Parallel::new(Some(4)).run(&candidates, &memoized).unwrap());
    assert_eq!(actual, expected);
    assert!(memoized.cached() <= 8);
}

#[test]
fn test_every_match_has_a_reduction_chain() {
    let dict = sparse_dictionary();
    let candidates = select_candidates(&dict, 5, &dict.one_char_words());
    let matcher = Matcher::new(dict.clone(), 0);

    let found = Sequential.run(&candidates, &matcher).unwrap();
    for word in found.iter() {
        // some single deletion must itself be a dictionary word that matches
        let chars: Vec<char> = word.chars().collect();
        let has_step = (0..chars.len()).any(|i| {
            let reduced: String = chars
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, c)| c)
                .collect();
            dict.contains(&reduced) && matcher.matches(&reduced)
        });
        assert!(has_step, "{} has no reduction step", word);
    }
}

#[test]
fn test_read_dictionary_feeds_strategies() {
    let text = "a\nat\ncat\ncats\nscats\nstcats\n";
    let dict = Arc::new(read_dictionary(text.as_bytes(), NO_EXTRA).unwrap());

    let candidates = select_candidates(&dict, 5, &dict.one_char_words());
    let matcher = RecursiveMatcher::new(dict.clone());

    let seq = Sequential.run(&candidates, &matcher).unwrap();
    let par = Parallel::new(Some(2)).run(&candidates, &matcher).unwrap();

    assert_eq!(sorted(seq), vec!["scats"]);
    assert_eq!(sorted(par), vec!["scats"]);
}

#[test]
fn test_partitions_cover_all_candidates() {
    let dict = sparse_dictionary();
    let candidates = select_candidates(&dict, 5, &dict.one_char_words());
    let words: Vec<&str> = candidates.iter().collect();

    for workers in 1..=12 {
        let size = partition_size(words.len(), workers);
        let covered: BTreeSet<&str> = words.chunks(size).flatten().copied().collect();
        assert_eq!(covered.len(), words.len());
        assert!(words.chunks(size).count() <= workers);
    }
}
