//! Where the agenda data document comes from.
//!
//! A source is either a local file (the same-directory `data.json` by
//! default) or an `http(s)` URL. Both are read with a single retrieval: no
//! headers, no auth, no retry. File failures are mapped onto HTTP-like status
//! codes so callers see one error taxonomy.

use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::LoadError;

/// Location of the data document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentSource {
    File(PathBuf),
    Http(String),
}

impl DocumentSource {
    /// Interpret a CLI/config string: `http://` and `https://` are URLs,
    /// anything else is a file path.
    pub fn parse(location: &str) -> Self {
        let lower = location.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DocumentSource::Http(location.to_string())
        } else {
            DocumentSource::File(PathBuf::from(location))
        }
    }

    /// Like [`parse`](Self::parse), but resolves relative file paths
    /// against `base`.
    pub fn parse_relative_to(location: &str, base: &Path) -> Self {
        match Self::parse(location) {
            DocumentSource::File(path) if path.is_relative() => {
                DocumentSource::File(base.join(path))
            }
            other => other,
        }
    }

    /// Human-readable location used in errors and logs.
    pub fn location(&self) -> String {
        self.to_string()
    }

    /// Retrieve the raw document body.
    pub fn fetch(&self) -> Result<String, LoadError> {
        match self {
            DocumentSource::File(path) => fetch_file(path),
            DocumentSource::Http(url) => fetch_http(url),
        }
    }
}

impl fmt::Display for DocumentSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentSource::File(path) => write!(f, "{}", path.display()),
            DocumentSource::Http(url) => f.write_str(url),
        }
    }
}

fn fetch_file(path: &Path) -> Result<String, LoadError> {
    let location = path.display().to_string();
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::Fetch { location, status: 404 },
        ErrorKind::PermissionDenied => LoadError::Fetch { location, status: 403 },
        _ => LoadError::Io { location, source },
    })
}

fn fetch_http(url: &str) -> Result<String, LoadError> {
    tracing::debug!("GET {url}");
    match ureq::get(url).call() {
        Ok(response) => response.into_string().map_err(|source| LoadError::Io {
            location: url.to_string(),
            source,
        }),
        Err(ureq::Error::Status(status, _)) => Err(LoadError::Fetch {
            location: url.to_string(),
            status,
        }),
        Err(ureq::Error::Transport(transport)) => Err(LoadError::Transport {
            location: url.to_string(),
            message: transport.to_string(),
        }),
    }
}
