//! Scrabble Engine - finds words that can be unbuilt one letter at a time
//!
//! A word of the requested length matches when some sequence of single-character
//! deletions reduces it to a one-character word, and every intermediate string is
//! itself in the dictionary. The library provides:
//! - Dictionary loading from files, `file://` and `http(s)://` URLs
//! - Charset decoding with BOM sniffing and encoding detection
//! - Candidate selection by length and one-character word content
//! - Backtracking matcher with optional LRU memoization
//! - Sequential and partitioned parallel execution
//!
//! # Example
//!
//! ```rust
//! use scrabble_engine_r::{ExecutionMode, ScrabbleConfig, Scrabbler};
//!
//! let config = ScrabbleConfig::new("memory")
//!     .with_word_length(4)
//!     .with_one_char_words(["a"])
//!     .with_mode(ExecutionMode::Parallel);
//!
//! let scrabbler = Scrabbler::from_lines(["at", "cat", "cats", "dogs"], &config);
//! let matches = scrabbler.find_matching_words().unwrap();
//!
//! assert_eq!(matches.into_sorted_vec(), vec!["cats"]);
//! ```
//!
//! # Dictionary Format
//!
//! One word per line; lines end at `\n`, `\r\n` or a lone `\r`. Control
//! characters and spaces are trimmed from both ends, blank lines are dropped and any
//! line holding a character outside the Basic Multilingual Plane is skipped. Words
//! are case-sensitive. The charset label is a hint: bytes that do not decode with it
//! are decoded with a detected encoding unless detection is turned off.

pub mod candidate;
pub mod cli;
pub mod config;
pub mod error;
pub mod matcher;
pub mod normalize;
pub mod scrabbler;
pub mod source;
pub mod strategy;
pub mod types;

// Re-export commonly used items
pub use candidate::select_candidates;
pub use config::{ScrabbleConfig, DEFAULT_WORD_LENGTH, MAX_WORD_LENGTH, MIN_WORD_LENGTH};
pub use error::{LoadErrorKind, MatchErrorKind, Result, ScrabbleError};
pub use matcher::{Matcher, MemoizedMatcher, RecursiveMatcher, WordMatcher};
pub use normalize::{normalize_line, read_dictionary, split_lines};
pub use scrabbler::Scrabbler;
pub use types::{CandidateSet, Dictionary, ExecutionMode, MatchedWords, RunState};

// Re-export execution strategies
pub use strategy::{partition_size, strategy_for, ExecutionStrategy, Parallel, Sequential};

// Re-export dictionary sources
#[cfg(feature = "http")]
pub use source::HttpLoader;
pub use source::{
    load_dictionary, DictionaryLoader, DictionaryLocation, FileLoader, MemoryLoader,
    DEFAULT_CHARSET,
};
