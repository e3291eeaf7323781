//! Atomic page writer and render orchestration.
//!
//! ## `atomic_write`
//!
//! 1. Normalise line endings and SHA-256 hash the rendered page.
//! 2. Compare with the stored hash and skip if identical.
//! 3. Write to `<path>.agenda.tmp`.
//! 4. Rename to the final path.
//! 5. Update the hash store entry (the caller saves the store).

use std::path::{Path, PathBuf};

use chrono::Utc;
use sha2::{Digest, Sha256};

use agenda_core::LoadError;
use agenda_renderer::{BindingWarning, RenderOutcome};

use crate::error::{io_err, OutputError};
use crate::hash_store::{self, HashStore};
use crate::pipeline::RenderJob;

// ---------------------------------------------------------------------------
// Write result
// ---------------------------------------------------------------------------

/// Outcome of writing the output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written (content changed or did not previously exist).
    Written { path: PathBuf },
    /// Rendered content matches the stored hash; file left alone.
    Unchanged { path: PathBuf },
    /// `--dry-run`: the file would have been written.
    WouldWrite { path: PathBuf },
}

impl WriteResult {
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path }
            | WriteResult::Unchanged { path }
            | WriteResult::WouldWrite { path } => path,
        }
    }
}

// ---------------------------------------------------------------------------
// atomic_write
// ---------------------------------------------------------------------------

/// SHA-256 hex digest of `content` after CRLF normalisation.
pub fn content_hash(content: &str) -> String {
    let normalized = content.replace("\r\n", "\n");
    let mut h = Sha256::new();
    h.update(normalized.as_bytes());
    hex::encode(h.finalize())
}

/// Atomically write `content` to `path` unless the store says it is current.
pub(crate) fn atomic_write(
    path: &Path,
    content: &str,
    store: &mut HashStore,
    dry_run: bool,
) -> Result<WriteResult, OutputError> {
    let tmp = PathBuf::from(format!("{}.agenda.tmp", path.display()));
    let normalized = content.replace("\r\n", "\n");
    let digest = content_hash(&normalized);

    let key = hash_store::key_for(path);
    if store.get(&key) == Some(&digest) && path.exists() {
        tracing::debug!("unchanged: {}", path.display());
        return Ok(WriteResult::Unchanged {
            path: path.to_path_buf(),
        });
    }

    if dry_run {
        tracing::info!("[dry-run] would write: {}", path.display());
        return Ok(WriteResult::WouldWrite {
            path: path.to_path_buf(),
        });
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| io_err(parent, e))?;
    }
    std::fs::write(&tmp, &normalized).map_err(|e| io_err(&tmp, e))?;

    if let Err(e) = std::fs::rename(&tmp, path) {
        let _ = std::fs::remove_file(&tmp);
        return Err(io_err(path, e));
    }

    store.insert(key, digest);
    tracing::info!("wrote: {}", path.display());
    Ok(WriteResult::Written {
        path: path.to_path_buf(),
    })
}

// ---------------------------------------------------------------------------
// render_agenda
// ---------------------------------------------------------------------------

/// Outcome of rendering one job to disk.
#[derive(Debug)]
pub struct RenderRunResult {
    pub write: WriteResult,
    pub warnings: Vec<BindingWarning>,
    /// Set when the document failed to load and the error page was written.
    pub load_error: Option<LoadError>,
}

impl RenderRunResult {
    pub fn output(&self) -> &Path {
        self.write.path()
    }
}

/// Render `job` and write the page (or the error page) with a hash-gated
/// atomic write.
pub fn render_agenda(job: &RenderJob, dry_run: bool) -> Result<RenderRunResult, OutputError> {
    let started_at = Utc::now();
    let outcome = job.render()?;
    let (html, warnings, load_error) = match outcome {
        RenderOutcome::Agenda(page) => (page.html, page.warnings, None),
        RenderOutcome::LoadFailed { html, error } => (html, Vec::new(), Some(error)),
    };

    let mut store = hash_store::load_for(&job.output)?;
    let write = atomic_write(&job.output, &html, &mut store.files, dry_run)?;

    if !dry_run {
        store.rendered_at = started_at;
        hash_store::save_for(&job.output, &store)?;
    }

    Ok(RenderRunResult {
        write,
        warnings,
        load_error,
    })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
