//! Error types for agenda-output.

use std::path::PathBuf;

use thiserror::Error;

use agenda_core::ConfigError;
use agenda_renderer::RenderError;

/// All errors that can arise while producing or comparing output files.
///
/// A failed document load is not an error here: it is reported through the
/// run result, alongside the error page that was rendered for it.
#[derive(Debug, Error)]
pub enum OutputError {
    /// An error from the rendering engine.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// An error loading `agenda.yaml`.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// An I/O error, with annotated path for context.
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error (hash store).
    #[error("hash store JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience constructor for [`OutputError::Io`].
pub(crate) fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> OutputError {
    OutputError::Io {
        path: path.into(),
        source,
    }
}
