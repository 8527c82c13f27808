//! Command-line arguments for the `scrabbler` binary.

use clap::{ArgGroup, Parser};

use crate::config::{ScrabbleConfig, DEFAULT_WORD_LENGTH, MAX_WORD_LENGTH, MIN_WORD_LENGTH};
use crate::source::{resolve_charset, DictionaryLocation, DEFAULT_CHARSET};
use crate::types::{char_len, ExecutionMode};

/// Find dictionary words that can be unbuilt, one character at a time, down to a
/// single-character word
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "scrabbler", author, version, about, long_about = None)]
#[command(group(ArgGroup::new("mode").required(true).args(["sequential", "parallel"])))]
pub struct Args {
    /// URL or path of a dictionary with one word per line. Dictionary contents are
    /// case-sensitive
    #[arg(short = 'u', long = "dictionary-url", visible_alias = "du", value_name = "URL", value_parser = parse_dictionary_url)]
    pub dictionary_url: String,

    /// Suggested dictionary charset
    #[arg(short = 'c', long = "dictionary-charset", visible_alias = "dc", value_name = "NAME", default_value = DEFAULT_CHARSET, value_parser = parse_charset)]
    pub dictionary_charset: String,

    /// Fail on bytes that do not decode with the charset instead of detecting the
    /// encoding
    #[arg(long = "no-charset-detection")]
    pub no_charset_detection: bool,

    /// Length of words to find (>=2 and <=50)
    #[arg(short = 'l', long = "word-length", visible_alias = "wl", value_name = "N", default_value_t = DEFAULT_WORD_LENGTH, value_parser = parse_word_length)]
    pub word_length: usize,

    /// Comma-separated, case-sensitive 1-character words to add to the dictionary
    #[arg(short = 'o', long = "one-char-words", visible_alias = "ocw", value_name = "WORDS", value_delimiter = ',', value_parser = parse_one_char_word)]
    pub one_char_words: Vec<String>,

    /// Use a sequential algorithm to find matching words
    #[arg(short = 's', long = "sequential", visible_alias = "seq")]
    pub sequential: bool,

    /// Use a parallel algorithm to find matching words
    #[arg(short = 'p', long = "parallel", visible_alias = "par")]
    pub parallel: bool,

    /// Log matching words
    #[arg(short = 'm', long = "log-matching", visible_alias = "lm")]
    pub log_matching: bool,

    /// Number of parallel workers (default: auto-detect)
    #[arg(short = 't', long = "threads", value_name = "N", value_parser = parse_threads)]
    pub threads: Option<usize>,

    /// Memoize reducibility checks in an LRU cache of this size (0 = off)
    #[arg(long = "cache-size", value_name = "N", default_value_t = 0)]
    pub cache_size: usize,
}

impl Args {
    /// Selected execution mode
    pub fn mode(&self) -> ExecutionMode {
        if self.parallel {
            ExecutionMode::Parallel
        } else {
            ExecutionMode::Sequential
        }
    }

    /// Convert into an engine configuration
    pub fn into_config(self) -> ScrabbleConfig {
        let mode = self.mode();
        ScrabbleConfig {
            dictionary_url: self.dictionary_url,
            dictionary_charset: self.dictionary_charset,
            detect_charset: !self.no_charset_detection,
            word_length: self.word_length,
            one_char_words: self.one_char_words.into_iter().collect(),
            mode,
            log_matches: self.log_matching,
            workers: self.threads,
            cache_size: self.cache_size,
        }
    }
}

fn parse_dictionary_url(value: &str) -> Result<String, String> {
    DictionaryLocation::parse(value)
        .map(|_| value.trim().to_string())
        .map_err(|e| format!("specified URL is not valid: {}", e))
}

fn parse_charset(value: &str) -> Result<String, String> {
    resolve_charset(value)
        .map(|_| value.trim().to_string())
        .ok_or_else(|| "specified charset is not valid".to_string())
}

fn parse_word_length(value: &str) -> Result<usize, String> {
    let length: usize = value
        .parse()
        .map_err(|_| format!("'{}' is not a number", value))?;
    if !(MIN_WORD_LENGTH..=MAX_WORD_LENGTH).contains(&length) {
        return Err(format!(
            "value must be >={} and <={} characters",
            MIN_WORD_LENGTH, MAX_WORD_LENGTH
        ));
    }
    Ok(length)
}

fn parse_one_char_word(value: &str) -> Result<String, String> {
    if char_len(value) != 1 {
        return Err("each specified word must have length=1".to_string());
    }
    Ok(value.to_string())
}

fn parse_threads(value: &str) -> Result<usize, String> {
    match value.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err("must be a positive number".to_string()),
    }
}
