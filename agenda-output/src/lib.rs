//! # agenda-output
//!
//! Hash-gated atomic page writer, unified diffs, and output staleness.
//!
//! Build a [`RenderJob`] from `agenda.yaml` (or defaults), then call
//! [`render_agenda`] to write the page, [`diff_agenda`] to preview it, or
//! [`staleness::check`] to see whether the file on disk is still current.

pub mod diff;
pub mod error;
pub mod hash_store;
pub mod pipeline;
pub mod staleness;
pub mod writer;

pub use diff::{diff_agenda, FileDiff};
pub use error::OutputError;
pub use pipeline::RenderJob;
pub use staleness::StalenessSignal;
pub use writer::{render_agenda, RenderRunResult, WriteResult};
