use thiserror::Error;

/// Classifies dictionary loading errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadErrorKind {
    /// File open/read failure
    Io,
    /// Remote fetch failed
    Download,
    /// Bytes are not valid in the selected charset
    Decode,
    /// URL scheme or feature not available
    UnsupportedSource,
    /// Charset label not recognised
    UnknownCharset,
}

/// Classifies matching errors for programmatic matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchErrorKind {
    /// Worker pool could not be started
    PoolUnavailable,
    /// A worker died before the join completed
    WorkerPanicked,
}

/// Scrabble engine error types
#[derive(Error, Debug)]
pub enum ScrabbleError {
    #[error("Load error: {message}")]
    LoadError {
        kind: LoadErrorKind,
        message: String,
    },

    #[error("Match error: {message}")]
    MatchError {
        kind: MatchErrorKind,
        message: String,
    },

    #[error("Config error: {0}")]
    ConfigError(String),
}

impl ScrabbleError {
    pub(crate) fn load(kind: LoadErrorKind, message: impl Into<String>) -> Self {
        ScrabbleError::LoadError {
            kind,
            message: message.into(),
        }
    }

    pub(crate) fn matching(kind: MatchErrorKind, message: impl Into<String>) -> Self {
        ScrabbleError::MatchError {
            kind,
            message: message.into(),
        }
    }

    /// Kind of a load error, if this is one
    pub fn load_kind(&self) -> Option<LoadErrorKind> {
        match self {
            ScrabbleError::LoadError { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    /// Kind of a match error, if this is one
    pub fn match_kind(&self) -> Option<MatchErrorKind> {
        match self {
            ScrabbleError::MatchError { kind, .. } => Some(*kind),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScrabbleError>;
