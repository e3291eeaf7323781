//! Error types for agenda-core.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while retrieving and parsing the data document.
///
/// Any of these aborts the render: no section binder runs.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The retrieval completed with a non-success status.
    #[error("failed to fetch agenda data from {location}: status {status}")]
    Fetch { location: String, status: u16 },

    /// The HTTP request never produced a response (DNS, connect, TLS...).
    #[error("failed to reach {location}: {message}")]
    Transport { location: String, message: String },

    /// Malformed JSON, or JSON missing a required section.
    #[error("failed to parse agenda data at {location}: {source}")]
    Parse {
        location: String,
        #[source]
        source: serde_json::Error,
    },

    /// Any other I/O failure while reading the document body.
    #[error("I/O error reading {location}: {source}")]
    Io {
        location: String,
        #[source]
        source: std::io::Error,
    },
}

impl LoadError {
    /// Status code carried by a [`LoadError::Fetch`].
    pub fn status(&self) -> Option<u16> {
        match self {
            LoadError::Fetch { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Errors raised while loading `agenda.yaml`.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Underlying I/O failure.
    #[error("I/O error reading config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// YAML parse error, with file path and serde_yaml's line context.
    #[error("failed to parse config at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// YAML serialization error (scaffolding a default config).
    #[error("YAML serialization error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}
