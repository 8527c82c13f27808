use std::borrow::Cow;

use chardetng::EncodingDetector;
use encoding_rs::Encoding;
use log::{debug, info};

use crate::error::{LoadErrorKind, Result, ScrabbleError};

/// Charset assumed when none is given
pub const DEFAULT_CHARSET: &str = "UTF-8";

/// Look up an encoding by its WHATWG label (e.g. "utf-8", "windows-1251", "latin1")
pub fn resolve_charset(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
}

/// Decode raw dictionary bytes.
///
/// A byte order mark wins over `charset`; otherwise `charset` is used. Malformed
/// sequences fail the whole decode instead of being replaced.
pub fn decode<'a>(bytes: &'a [u8], charset: &str) -> Result<Cow<'a, str>> {
    let hinted = hinted_encoding(charset)?;

    let (encoding, body) = match Encoding::for_bom(bytes) {
        Some((encoding, bom_len)) => (encoding, &bytes[bom_len..]),
        None => (hinted, bytes),
    };

    debug!("decoding {} bytes as {}", body.len(), encoding.name());
    decode_strict(encoding, body)
}

/// Decode raw dictionary bytes, guessing the encoding when the hint does not fit.
///
/// Same as [`decode`] while the BOM or `charset` decodes cleanly. Otherwise the
/// bytes are fed to a statistical detector and decoded with its guess; the guess is
/// still decoded strictly.
pub fn decode_detecting<'a>(bytes: &'a [u8], charset: &str) -> Result<Cow<'a, str>> {
    let hinted = hinted_encoding(charset)?;

    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        return decode_strict(encoding, &bytes[bom_len..]);
    }

    match decode_strict(hinted, bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            let guessed = detect_encoding(bytes);
            if guessed == hinted {
                return Err(err);
            }
            info!(
                "dictionary is not valid {}, detected {}",
                hinted.name(),
                guessed.name()
            );
            decode_strict(guessed, bytes)
        }
    }
}

/// Statistical guess of the encoding of `bytes`
pub fn detect_encoding(bytes: &[u8]) -> &'static Encoding {
    let mut detector = EncodingDetector::new();
    detector.feed(bytes, true);
    detector.guess(None, true)
}

fn hinted_encoding(charset: &str) -> Result<&'static Encoding> {
    resolve_charset(charset).ok_or_else(|| {
        ScrabbleError::load(
            LoadErrorKind::UnknownCharset,
            format!("Unknown charset: {}", charset),
        )
    })
}

fn decode_strict<'a>(encoding: &'static Encoding, body: &'a [u8]) -> Result<Cow<'a, str>> {
    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .ok_or_else(|| {
            ScrabbleError::load(
                LoadErrorKind::Decode,
                format!("Dictionary is not valid {}", encoding.name()),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use encoding_rs::WINDOWS_1251;

    #[test]
    fn test_resolve_charset_labels() {
        assert_eq!(resolve_charset("UTF-8").map(|e| e.name()), Some("UTF-8"));
        assert_eq!(resolve_charset(" utf8 ").map(|e| e.name()), Some("UTF-8"));
        assert_eq!(
            resolve_charset("windows-1251").map(|e| e.name()),
            Some("windows-1251")
        );
        assert!(resolve_charset("INVALID_CHARSET").is_none());
    }

    #[test]
    fn test_decode_utf8() {
        let text = decode("cat\nземя\n".as_bytes(), DEFAULT_CHARSET).unwrap();
        assert_eq!(text, "cat\nземя\n");
    }

    #[test]
    fn test_decode_windows_1251() {
        let (bytes, _, had_errors) = WINDOWS_1251.encode("вяръ\nземя\n");
        assert!(!had_errors);
        let text = decode(&bytes, "windows-1251").unwrap();
        assert_eq!(text, "вяръ\nземя\n");
    }

    #[test]
    fn test_bom_overrides_hint() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("земя".as_bytes());
        let text = decode(&bytes, "windows-1251").unwrap();
        assert_eq!(text, "земя");
    }

    #[test]
    fn test_malformed_bytes_fail() {
        let err = decode(&[b'a', 0xFF, b'b'], "UTF-8").unwrap_err();
        assert_eq!(err.load_kind(), Some(LoadErrorKind::Decode));
    }

    #[test]
    fn test_unknown_charset_fails() {
        let err = decode(b"cat", "INVALID_CHARSET").unwrap_err();
        assert_eq!(err.load_kind(), Some(LoadErrorKind::UnknownCharset));
    }

    fn bulgarian_text() -> String {
        [
            "и", "на", "за", "от", "се", "да", "не", "това", "като", "при", "със", "които",
            "беше", "така", "много", "време", "човек", "година", "къща", "вода", "земя",
            "хляб", "вяра", "град", "село", "работа", "жена", "дете", "майка", "баща",
            "ден", "нощ", "път", "място", "дума", "език", "книга", "училище", "небе",
            "слънце", "планина", "морето", "гора", "птица", "цвете", "приятел", "живот",
        ]
        .join("\n")
    }

    #[test]
    fn test_detecting_keeps_valid_hint() {
        let text = decode_detecting("cat\nземя\n".as_bytes(), DEFAULT_CHARSET).unwrap();
        assert_eq!(text, "cat\nземя\n");
    }

    #[test]
    fn test_detecting_windows_1251_without_hint() {
        let source = bulgarian_text();
        let (bytes, _, _) = WINDOWS_1251.encode(&source);
        assert!(decode(&bytes, DEFAULT_CHARSET).is_err());

        assert_eq!(detect_encoding(&bytes), WINDOWS_1251);
        let text = decode_detecting(&bytes, DEFAULT_CHARSET).unwrap();
        assert_eq!(text, source);
    }

    #[test]
    fn test_detecting_still_honours_bom() {
        let mut bytes = vec![0xEF, 0xBB, 0xBF];
        bytes.extend_from_slice("земя".as_bytes());
        let text = decode_detecting(&bytes, "windows-1251").unwrap();
        assert_eq!(text, "земя");
    }

    #[test]
    fn test_detecting_unknown_charset_fails() {
        let err = decode_detecting(b"cat", "INVALID_CHARSET").unwrap_err();
        assert_eq!(err.load_kind(), Some(LoadErrorKind::UnknownCharset));
    }
}
