use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{LoadErrorKind, Result, ScrabbleError};

/// Trait for fetching raw dictionary bytes
pub trait DictionaryLoader: Send + Sync {
    /// Fetch the whole dictionary
    fn load_bytes(&self) -> Result<Vec<u8>>;

    /// Human-readable origin, used in logs
    fn describe(&self) -> String;
}

/// Filesystem dictionary
#[derive(Debug, Clone)]
pub struct FileLoader {
    path: PathBuf,
}

impl FileLoader {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DictionaryLoader for FileLoader {
    fn load_bytes(&self) -> Result<Vec<u8>> {
        fs::read(&self.path).map_err(|e| {
            ScrabbleError::load(
                LoadErrorKind::Io,
                format!("Failed to read '{}': {}", self.path.display(), e),
            )
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Remote dictionary fetched over HTTP(S)
#[cfg(feature = "http")]
#[derive(Debug, Clone)]
pub struct HttpLoader {
    url: String,
}

#[cfg(feature = "http")]
impl HttpLoader {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

#[cfg(feature = "http")]
impl DictionaryLoader for HttpLoader {
    fn load_bytes(&self) -> Result<Vec<u8>> {
        use std::io::Read;

        log::info!("Downloading dictionary from {}", self.url);

        let response = ureq::get(&self.url).call().map_err(|e| {
            ScrabbleError::load(LoadErrorKind::Download, format!("Download failed: {}", e))
        })?;

        let (_, body) = response.into_parts();
        let mut reader = body.into_reader();
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).map_err(|e| {
            ScrabbleError::load(
                LoadErrorKind::Download,
                format!("Failed to read response from {}: {}", self.url, e),
            )
        })?;

        log::info!("Downloaded {} bytes", bytes.len());
        Ok(bytes)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// In-memory dictionary for testing
#[derive(Debug, Clone, Default)]
pub struct MemoryLoader {
    bytes: Vec<u8>,
}

impl MemoryLoader {
    pub fn new(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: bytes.into(),
        }
    }
}

impl DictionaryLoader for MemoryLoader {
    fn load_bytes(&self) -> Result<Vec<u8>> {
        Ok(self.bytes.clone())
    }

    fn describe(&self) -> String {
        format!("<memory: {} bytes>", self.bytes.len())
    }
}

/// Where a dictionary lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryLocation {
    /// Local path, given directly or as a `file://` URL
    File(PathBuf),
    /// `http://` or `https://` URL
    Http(String),
}

impl DictionaryLocation {
    /// Parse a path or URL.
    ///
    /// `file://host/path` keeps the host as the first path component, so both
    /// `file:///abs/dict.txt` and `file://rel/dict.txt` are accepted.
    pub fn parse(location: &str) -> Result<Self> {
        let location = location.trim();

        if location.is_empty() {
            return Err(ScrabbleError::ConfigError(
                "dictionary location is empty".to_string(),
            ));
        }

        if let Some(rest) = location.strip_prefix("file://") {
            let path = match rest.strip_prefix("localhost") {
                Some(p) if p.starts_with('/') => p,
                _ => rest,
            };
            if path.is_empty() {
                return Err(ScrabbleError::ConfigError(format!(
                    "file URL has no path: {}",
                    location
                )));
            }
            return Ok(DictionaryLocation::File(PathBuf::from(path)));
        }

        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            let host = location
                .split_once("://")
                .map(|(_, rest)| rest)
                .unwrap_or_default();
            if host.is_empty() || host.starts_with('/') {
                return Err(ScrabbleError::ConfigError(format!(
                    "URL has no host: {}",
                    location
                )));
            }
            return Ok(DictionaryLocation::Http(location.to_string()));
        }

        if let Some((scheme, _)) = location.split_once("://") {
            return Err(ScrabbleError::ConfigError(format!(
                "unsupported URL scheme '{}': {}",
                scheme, location
            )));
        }

        Ok(DictionaryLocation::File(PathBuf::from(location)))
    }

    /// Loader for this location
    pub fn loader(&self) -> Result<Box<dyn DictionaryLoader>> {
        match self {
            DictionaryLocation::File(path) => Ok(Box::new(FileLoader::new(path))),
            #[cfg(feature = "http")]
            DictionaryLocation::Http(url) => Ok(Box::new(HttpLoader::new(url.clone()))),
            #[cfg(not(feature = "http"))]
            DictionaryLocation::Http(url) => Err(ScrabbleError::load(
                LoadErrorKind::UnsupportedSource,
                format!("HTTP support is disabled, cannot fetch {}", url),
            )),
        }
    }
}
