//! Unified diff of the page `render` would write against the one on disk.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use similar::TextDiff;

use crate::{error::io_err, pipeline::RenderJob, OutputError};

/// Diff of one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDiff {
    pub path: PathBuf,
    pub unified_diff: String,
}

/// Render `job` and compare it to the current output file. `None` when they
/// match. A missing output diffs against an empty file. Nothing is written.
pub fn diff_agenda(job: &RenderJob) -> Result<Option<FileDiff>, OutputError> {
    let outcome = job.render()?;
    let rendered = normalize_line_endings(outcome.html());
    let existing = read_existing_or_empty(&job.output)?;
    if existing == rendered {
        return Ok(None);
    }

    let name = job
        .output
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| job.output.display().to_string());
    let old_header = format!("a/{name}");
    let new_header = format!("b/{name}");
    let unified = TextDiff::from_lines(&existing, &rendered)
        .unified_diff()
        .header(&old_header, &new_header)
        .context_radius(3)
        .to_string();

    Ok(Some(FileDiff {
        path: job.output.clone(),
        unified_diff: unified,
    }))
}

fn read_existing_or_empty(path: &Path) -> Result<String, OutputError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(normalize_line_endings(&content)),
        Err(err) if err.kind() == ErrorKind::NotFound => Ok(String::new()),
        Err(err) => Err(io_err(path, err)),
    }
}

fn normalize_line_endings(content: &str) -> String {
    content.replace("\r\n", "\n")
}
