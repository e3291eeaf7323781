//! Hash store: SHA-256 tracking for rendered pages.
//!
//! Persists a [`HashStoreFile`] JSON document named `.agenda-hashes.json`
//! next to the output file. Writes go through a `.tmp` file and a rename.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{io_err, OutputError};

/// File name of the store, created in the output file's directory.
pub const HASH_STORE_FILE: &str = ".agenda-hashes.json";

/// Output path string to the SHA-256 hex digest of its last written content.
pub type HashStore = HashMap<String, String>;

/// On-disk hash store payload.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HashStoreFile {
    /// When the last non-dry-run render finished.
    pub rendered_at: DateTime<Utc>,
    pub files: HashStore,
}

impl HashStoreFile {
    fn empty() -> Self {
        HashStoreFile {
            rendered_at: Utc::now(),
            files: HashMap::new(),
        }
    }
}

/// Key under which `output` is tracked.
pub fn key_for(output: &Path) -> String {
    output.to_string_lossy().to_string()
}

/// `<output dir>/.agenda-hashes.json`
pub fn store_path_for(output: &Path) -> PathBuf {
    match output.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir.join(HASH_STORE_FILE),
        _ => PathBuf::from(HASH_STORE_FILE),
    }
}

/// Load the store tracking `output`. Missing file means an empty store.
pub fn load_for(output: &Path) -> Result<HashStoreFile, OutputError> {
    let path = store_path_for(output);
    if !path.exists() {
        return Ok(HashStoreFile::empty());
    }
    let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
    Ok(serde_json::from_str(&contents)?)
}

/// Save the store tracking `output` atomically.
pub fn save_for(output: &Path, store: &HashStoreFile) -> Result<(), OutputError> {
    let path = store_path_for(output);
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir).map_err(|e| io_err(dir, e))?;
    }

    let json = serde_json::to_string_pretty(store)?;
    let tmp = path.with_extension("json.tmp");
    std::fs::write(&tmp, &json).map_err(|e| io_err(&tmp, e))?;
    std::fs::rename(&tmp, &path).map_err(|e| io_err(&path, e))?;
    Ok(())
}
