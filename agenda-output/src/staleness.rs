//! Output staleness detection for `agenda check`.
//!
//! Signal precedence:
//! 1. `NeverRendered` (no hash store entry for the output)
//! 2. `Stale` (output missing, or data/config changed after `rendered_at`)
//! 3. `Modified` (output edited since it was written)
//! 4. `Current`

use std::path::Path;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::{error::io_err, hash_store, pipeline::RenderJob, writer::content_hash, OutputError};

/// State of a job's output file relative to its inputs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StalenessSignal {
    NeverRendered,
    Current,
    Stale { reason: String },
    Modified,
}

impl StalenessSignal {
    pub fn label(&self) -> &'static str {
        match self {
            StalenessSignal::NeverRendered => "never rendered",
            StalenessSignal::Current => "current",
            StalenessSignal::Stale { .. } => "stale",
            StalenessSignal::Modified => "modified",
        }
    }
}

/// Classify the output of `job`. Remote data sources carry no timestamp and
/// never make the output stale on their own.
pub fn check(job: &RenderJob) -> Result<StalenessSignal, OutputError> {
    let store_path = hash_store::store_path_for(&job.output);
    if !store_path.exists() {
        return Ok(StalenessSignal::NeverRendered);
    }
    let store = hash_store::load_for(&job.output)?;
    let Some(expected_hash) = store.files.get(&hash_store::key_for(&job.output)) else {
        return Ok(StalenessSignal::NeverRendered);
    };

    if !job.output.exists() {
        return Ok(StalenessSignal::Stale {
            reason: format!("output {} is missing", job.output.display()),
        });
    }

    let rendered_ts = datetime_to_unix_duration(store.rendered_at);
    let inputs = [("data", job.data_path().map(Path::to_path_buf)), ("config", job.config_path())];
    for (what, path) in inputs {
        let Some(path) = path else { continue };
        let Ok(meta) = std::fs::metadata(&path) else { continue };
        let mtime = meta.modified().map_err(|e| io_err(&path, e))?;
        if unix_duration(mtime) > rendered_ts {
            return Ok(StalenessSignal::Stale {
                reason: format!("{what} changed {} ago", format_system_time_age(mtime)),
            });
        }
    }

    let content = std::fs::read_to_string(&job.output).map_err(|e| io_err(&job.output, e))?;
    if &content_hash(&content) != expected_hash {
        return Ok(StalenessSignal::Modified);
    }

    Ok(StalenessSignal::Current)
}

/// Format age from a filesystem timestamp.
pub fn format_system_time_age(timestamp: SystemTime) -> String {
    let age = SystemTime::now()
        .duration_since(timestamp)
        .unwrap_or_default();
    format_seconds(age.as_secs())
}

/// Format age from a chrono timestamp (hash store `rendered_at`).
pub fn format_datetime_age(timestamp: DateTime<Utc>) -> String {
    let age = Utc::now().signed_duration_since(timestamp).num_seconds().max(0) as u64;
    format_seconds(age)
}

fn unix_duration(timestamp: SystemTime) -> Duration {
    timestamp.duration_since(UNIX_EPOCH).unwrap_or_default()
}

fn datetime_to_unix_duration(timestamp: DateTime<Utc>) -> Duration {
    let secs = timestamp.timestamp().max(0) as u64;
    Duration::new(secs, timestamp.timestamp_subsec_nanos())
}

fn format_seconds(seconds: u64) -> String {
    if seconds < 60 {
        return format!("{seconds}s");
    }
    if seconds < 60 * 60 {
        return format!("{}m", seconds / 60);
    }
    if seconds < 60 * 60 * 24 {
        return format!("{}h", seconds / (60 * 60));
    }
    format!("{}d", seconds / (60 * 60 * 24))
}
