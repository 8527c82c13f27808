//! Scrabbler module.
//!
//! Loads a dictionary once, derives the candidates for the configured length and
//! finds the candidates that can be unbuilt down to a one-character word.

use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Instant;

use log::{debug, info};
use parking_lot::Mutex;

use crate::candidate::select_candidates;
use crate::config::ScrabbleConfig;
use crate::error::Result;
use crate::matcher::Matcher;
use crate::source::{load_dictionary, DictionaryLoader};
use crate::strategy::strategy_for;
use crate::types::{CandidateSet, Dictionary, ExecutionMode, MatchedWords, RunState};

/// Dictionary, candidates and matcher for one configuration.
///
/// Everything except the run state is fixed at construction, so matching can be
/// repeated and always yields the same words.
pub struct Scrabbler {
    dictionary: Arc<Dictionary>,
    one_char_words: BTreeSet<String>,
    candidates: CandidateSet,
    matcher: Matcher,
    mode: ExecutionMode,
    workers: Option<usize>,
    state: Mutex<RunState>,
}

impl Scrabbler {
    /// Create a scrabbler over an already-normalized dictionary.
    ///
    /// `config.one_char_words` are added to `dictionary` if missing, so every word
    /// used for pruning can also end a reduction chain.
    pub fn new(dictionary: Dictionary, config: &ScrabbleConfig) -> Self {
        let dictionary = Arc::new(dictionary.with_words(&config.one_char_words));

        let mut one_char_words = dictionary.one_char_words();
        one_char_words.extend(config.one_char_words.iter().cloned());

        let candidates = select_candidates(&dictionary, config.word_length, &one_char_words);
        let matcher = Matcher::new(dictionary.clone(), config.cache_size);

        Self {
            dictionary,
            one_char_words,
            candidates,
            matcher,
            mode: config.mode,
            workers: config.workers,
            state: Mutex::new(RunState::Idle),
        }
    }

    /// Load the dictionary named by `config.dictionary_url`
    pub fn load(config: &ScrabbleConfig) -> Result<Self> {
        let loader = config.location()?.loader()?;
        Self::from_loader(loader.as_ref(), config)
    }

    /// Load the dictionary through an explicit loader
    pub fn from_loader(loader: &dyn DictionaryLoader, config: &ScrabbleConfig) -> Result<Self> {
        let start = Instant::now();
        let dictionary = load_dictionary(
            loader,
            &config.dictionary_charset,
            config.detect_charset,
            &config.one_char_words,
        )?;
        let scrabbler = Self::new(dictionary, config);

        info!(
            "loaded {} words ({} candidates of length {}) from {} in {:?}",
            scrabbler.dictionary.len(),
            scrabbler.candidates.len(),
            config.word_length,
            loader.describe(),
            start.elapsed()
        );

        Ok(scrabbler)
    }

    /// Build from decoded lines
    pub fn from_lines<I, S>(lines: I, config: &ScrabbleConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dictionary = Dictionary::from_lines(lines, &config.one_char_words);
        Self::new(dictionary, config)
    }

    /// The full normalized dictionary
    pub fn dictionary_words(&self) -> &Dictionary {
        &self.dictionary
    }

    /// Candidates of the configured length
    pub fn candidate_words(&self) -> &CandidateSet {
        &self.candidates
    }

    /// Configured plus discovered one-character words
    pub fn one_char_words(&self) -> &BTreeSet<String> {
        &self.one_char_words
    }

    /// Configured execution mode
    pub fn mode(&self) -> ExecutionMode {
        self.mode
    }

    /// Current run state
    pub fn state(&self) -> RunState {
        *self.state.lock()
    }

    /// Find the matching words with the configured mode
    pub fn find_matching_words(&self) -> Result<MatchedWords> {
        self.find_matching_words_with(self.mode)
    }

    /// Find the matching words with an explicit mode
    pub fn find_matching_words_with(&self, mode: ExecutionMode) -> Result<MatchedWords> {
        *self.state.lock() = RunState::Running;
        debug!(
            "{} match over {} candidates",
            mode,
            self.candidates.len()
        );

        let result = strategy_for(mode, self.workers).run(&self.candidates, &self.matcher);

        *self.state.lock() = match &result {
            Ok(_) => RunState::Done,
            Err(_) => RunState::Idle,
        };
        result
    }
}
