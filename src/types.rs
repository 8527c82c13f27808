use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// Normalized, deduplicated dictionary.
///
/// There are no mutators: once built by the normalizer the set is a read-only
/// snapshot that can be shared between worker threads behind an `Arc`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: HashSet<String>,
}

impl Dictionary {
    pub(crate) fn from_set(words: HashSet<String>) -> Self {
        Self { words }
    }

    /// Case-sensitive membership test
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Read-only view of the underlying set
    pub fn as_set(&self) -> &HashSet<String> {
        &self.words
    }

    /// Same dictionary with `words` added
    pub(crate) fn with_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_string()));
        self
    }

    /// All words made of exactly one character
    pub fn one_char_words(&self) -> BTreeSet<String> {
        self.words
            .iter()
            .filter(|w| char_len(w) == 1)
            .cloned()
            .collect()
    }
}

/// Words of the target length that survived the one-character-word prefilter.
///
/// Kept sorted so the sequential strategy and the parallel partitioning both see
/// the same total order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateSet {
    words: BTreeSet<String>,
}

impl CandidateSet {
    pub(crate) fn from_set(words: BTreeSet<String>) -> Self {
        Self { words }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Iterate in ascending lexicographic order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Read-only view of the underlying set
    pub fn as_set(&self) -> &BTreeSet<String> {
        &self.words
    }
}

/// Words for which a reduction chain exists.
///
/// Equality is set equality: a `Sorted` and an `Unordered` result holding the same
/// words compare equal.
#[derive(Debug, Clone)]
pub enum MatchedWords {
    /// Produced by the sequential strategy
    Sorted(BTreeSet<String>),
    /// Produced by the parallel strategy
    Unordered(HashSet<String>),
}

impl MatchedWords {
    pub fn len(&self) -> usize {
        match self {
            MatchedWords::Sorted(words) => words.len(),
            MatchedWords::Unordered(words) => words.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, word: &str) -> bool {
        match self {
            MatchedWords::Sorted(words) => words.contains(word),
            MatchedWords::Unordered(words) => words.contains(word),
        }
    }

    pub fn iter(&self) -> Box<dyn Iterator<Item = &str> + '_> {
        match self {
            MatchedWords::Sorted(words) => Box::new(words.iter().map(String::as_str)),
            MatchedWords::Unordered(words) => Box::new(words.iter().map(String::as_str)),
        }
    }

    pub fn into_sorted_vec(self) -> Vec<String> {
        match self {
            MatchedWords::Sorted(words) => words.into_iter().collect(),
            MatchedWords::Unordered(words) => {
                let mut words: Vec<String> = words.into_iter().collect();
                words.sort();
                words
            }
        }
    }
}

impl PartialEq for MatchedWords {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|w| other.contains(w))
    }
}

impl Eq for MatchedWords {}

/// How candidates are distributed over threads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ExecutionMode {
    #[default]
    Sequential,
    Parallel,
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::Sequential => write!(f, "sequential"),
            ExecutionMode::Parallel => write!(f, "parallel"),
        }
    }
}

/// Lifecycle of a matching run. `Done` may be re-entered by running again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunState {
    #[default]
    Idle,
    Running,
    Done,
}

/// Length in characters (not bytes)
pub(crate) fn char_len(word: &str) -> usize {
    word.chars().count()
}
