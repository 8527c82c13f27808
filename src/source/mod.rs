//! Dictionary sources.
//!
//! Fetches the raw bytes of a dictionary (file, `file://` or `http(s)://` URL, or
//! memory), decodes them with the requested charset and hands the text to the
//! normalizer.

pub mod charset;
pub mod loader;

#[cfg(feature = "http")]
pub use loader::HttpLoader;
pub use charset::{decode, decode_detecting, detect_encoding, resolve_charset, DEFAULT_CHARSET};
pub use loader::{DictionaryLoader, DictionaryLocation, FileLoader, MemoryLoader};

use log::debug;

use crate::error::Result;
use crate::normalize::split_lines;
use crate::types::Dictionary;

/// Fetch, decode and normalize a dictionary.
///
/// With `detect_charset` set, bytes that do not decode with `charset` are decoded
/// with a detected encoding instead. Either the whole dictionary is returned or an
/// error; nothing partial.
pub fn load_dictionary<E, W>(
    loader: &dyn DictionaryLoader,
    charset: &str,
    detect_charset: bool,
    extra_one_char_words: E,
) -> Result<Dictionary>
where
    E: IntoIterator<Item = W>,
    W: AsRef<str>,
{
    debug!("loading dictionary from {}", loader.describe());

    let bytes = loader.load_bytes()?;
    let text = if detect_charset {
        decode_detecting(&bytes, charset)?
    } else {
        decode(&bytes, charset)?
    };

    Ok(Dictionary::from_lines(split_lines(&text), extra_one_char_words))
}
