//! Run configuration.
//!
//! [`ScrabbleConfig::validate`] is the only place input shape is checked; the
//! engine itself trusts a validated configuration.

use std::collections::BTreeSet;

use crate::error::{Result, ScrabbleError};
use crate::source::{resolve_charset, DictionaryLocation, DEFAULT_CHARSET};
use crate::types::{char_len, ExecutionMode};

/// Shortest word length that can be searched for
pub const MIN_WORD_LENGTH: usize = 2;

/// Longest word length that can be searched for
pub const MAX_WORD_LENGTH: usize = 50;

/// Word length used when none is given
pub const DEFAULT_WORD_LENGTH: usize = 9;

/// Configuration for a single run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrabbleConfig {
    /// Path, `file://` URL or `http(s)://` URL of the dictionary
    pub dictionary_url: String,
    /// Charset label used when the dictionary has no BOM
    pub dictionary_charset: String,
    /// Detect the encoding when the bytes do not decode with `dictionary_charset`
    pub detect_charset: bool,
    /// Length of the words to find
    pub word_length: usize,
    /// One-character words added to the dictionary
    pub one_char_words: BTreeSet<String>,
    /// Sequential or parallel matching
    pub mode: ExecutionMode,
    /// Report every match, not just the count
    pub log_matches: bool,
    /// Worker count for parallel matching (`None` = hardware parallelism)
    pub workers: Option<usize>,
    /// LRU size for memoized matching; 0 disables memoization
    pub cache_size: usize,
}

impl Default for ScrabbleConfig {
    fn default() -> Self {
        Self {
            dictionary_url: String::new(),
            dictionary_charset: DEFAULT_CHARSET.to_string(),
            detect_charset: true,
            word_length: DEFAULT_WORD_LENGTH,
            one_char_words: BTreeSet::new(),
            mode: ExecutionMode::Sequential,
            log_matches: false,
            workers: None,
            cache_size: 0,
        }
    }
}

impl ScrabbleConfig {
    /// Create a new configuration for the given dictionary
    pub fn new(dictionary_url: impl Into<String>) -> Self {
        Self {
            dictionary_url: dictionary_url.into(),
            ..Self::default()
        }
    }

    /// Set the dictionary charset
    pub fn with_charset(mut self, charset: impl Into<String>) -> Self {
        self.dictionary_charset = charset.into();
        self
    }

    /// Enable or disable encoding detection
    pub fn with_charset_detection(mut self, detect_charset: bool) -> Self {
        self.detect_charset = detect_charset;
        self
    }

    /// Set the word length
    pub fn with_word_length(mut self, word_length: usize) -> Self {
        self.word_length = word_length;
        self
    }

    /// Set the extra one-character words
    pub fn with_one_char_words<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.one_char_words = words.into_iter().map(Into::into).collect();
        self
    }

    /// Set the execution mode
    pub fn with_mode(mut self, mode: ExecutionMode) -> Self {
        self.mode = mode;
        self
    }

    /// Enable or disable per-match reporting
    pub fn with_log_matches(mut self, log_matches: bool) -> Self {
        self.log_matches = log_matches;
        self
    }

    /// Set the parallel worker count
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Set the memoization cache size
    pub fn with_cache_size(mut self, cache_size: usize) -> Self {
        self.cache_size = cache_size;
        self
    }

    /// Parsed dictionary location
    pub fn location(&self) -> Result<DictionaryLocation> {
        DictionaryLocation::parse(&self.dictionary_url)
    }

    /// Check every field against its allowed shape
    pub fn validate(&self) -> Result<()> {
        self.location()?;

        if resolve_charset(&self.dictionary_charset).is_none() {
            return Err(ScrabbleError::ConfigError(format!(
                "specified charset is not valid: {}",
                self.dictionary_charset
            )));
        }

        if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&self.word_length) {
            return Err(ScrabbleError::ConfigError(format!(
                "word length must be >={} and <={}, got {}",
                MIN_WORD_LENGTH, MAX_WORD_LENGTH, self.word_length
            )));
        }

        if let Some(word) = self.one_char_words.iter().find(|w| char_len(w) != 1) {
            return Err(ScrabbleError::ConfigError(format!(
                "each one-character word must have length=1, got {:?}",
                word
            )));
        }

        if self.workers == Some(0) {
            return Err(ScrabbleError::ConfigError(
                "worker count must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
