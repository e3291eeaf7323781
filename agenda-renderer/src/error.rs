//! Error and warning types for agenda-renderer.

use std::path::PathBuf;

use thiserror::Error;

/// All errors that can arise while producing the final page.
#[derive(Debug, Error)]
pub enum RenderError {
    /// Tera template engine error.
    #[error("template engine error: {0}")]
    Tera(#[from] tera::Error),

    /// JSON serialization error (building tera context).
    #[error("context serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Filesystem error while loading user templates.
    #[error("template io error at {path}: {source}")]
    Io { path: PathBuf, source: std::io::Error },
}

/// A non-fatal binding problem. The affected section is skipped; every other
/// section still renders.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindingWarning {
    /// A fixed skeleton element is absent.
    #[error("element not found for selector: #{id}")]
    MissingElement { id: String },

    /// A document column names a container the skeleton does not have.
    #[error("column container not found for id: {id}")]
    MissingColumn { id: String },

    /// A team entry whose `type` is neither `member` nor `qrCode`.
    #[error("team entry {position} has an unrecognized type and was skipped")]
    UnrecognizedTeamEntry { position: usize },
}
