//! Dictionary normalization.
//!
//! Turns decoded text, one word per line, into a [`Dictionary`]: lines end at
//! `\n`, `\r\n` or a lone `\r`, are trimmed of control characters and spaces,
//! empty lines are skipped, and any line holding a character outside the Basic
//! Multilingual Plane is dropped whole.

use std::collections::HashSet;
use std::io::{self, BufRead, Read};

use log::{debug, trace};

use crate::error::{LoadErrorKind, Result, ScrabbleError};
use crate::types::Dictionary;

/// Largest code point representable without a surrogate pair
const MAX_BMP_CHAR: char = '\u{FFFF}';

/// Characters up to and including the space are stripped from both ends of a line
fn is_trimmable(c: char) -> bool {
    c <= ' '
}

/// Split decoded text into lines ending at `\n`, `\r\n` or a lone `\r`.
///
/// A `\r\n` pair yields an extra empty piece, which the normalizer drops anyway.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split(['\r', '\n'])
}

/// Check that every character of `s` lies in the Basic Multilingual Plane
pub fn is_bmp(s: &str) -> bool {
    s.chars().all(|c| c <= MAX_BMP_CHAR)
}

/// Normalize a single line, returning the word it contributes (if any)
pub fn normalize_line(line: &str) -> Option<&str> {
    let word = line.trim_matches(is_trimmable);

    if word.is_empty() {
        return None;
    }

    if !is_bmp(word) {
        trace!("dropping line outside BMP: {:?}", word);
        return None;
    }

    Some(word)
}

impl Dictionary {
    /// Build a dictionary from decoded lines plus extra one-character words.
    ///
    /// The extra words are inserted as given, without passing through the line filter.
    pub fn from_lines<I, S, E, W>(lines: I, extra_one_char_words: E) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        E: IntoIterator<Item = W>,
        W: AsRef<str>,
    {
        let mut words: HashSet<String> = extra_one_char_words
            .into_iter()
            .map(|w| w.as_ref().to_string())
            .collect();

        let mut lines_seen = 0usize;
        for line in lines {
            lines_seen += 1;
            if let Some(word) = normalize_line(line.as_ref()) {
                words.insert(word.to_string());
            }
        }

        debug!(
            "normalized {} lines into {} dictionary words",
            lines_seen,
            words.len()
        );

        Dictionary::from_set(words)
    }
}

/// Read a dictionary from an already-decoded text stream.
///
/// Any read failure aborts the whole load; no partial dictionary is returned.
pub fn read_dictionary<R, E, W>(mut reader: R, extra_one_char_words: E) -> Result<Dictionary>
where
    R: BufRead,
    E: IntoIterator<Item = W>,
    W: AsRef<str>,
{
    let mut text = String::new();
    reader.read_to_string(&mut text).map_err(|e| {
        let kind = if e.kind() == io::ErrorKind::InvalidData {
            LoadErrorKind::Decode
        } else {
            LoadErrorKind::Io
        };
        ScrabbleError::load(kind, format!("Failed to read dictionary: {}", e))
    })?;

    Ok(Dictionary::from_lines(split_lines(&text), extra_one_char_words))
}
