//! `agenda diff` — show the unified diff of what render would write.

use anyhow::{Context, Result};
use clap::Args;

use agenda_output::diff_agenda;

use super::JobArgs;

/// Arguments for `agenda diff`.
#[derive(Args, Debug)]
pub struct DiffArgs {
    #[command(flatten)]
    pub paths: JobArgs,
}

impl DiffArgs {
    pub fn run(self) -> Result<()> {
        let job = self.paths.job(self.paths.load_config()?);
        let diff = diff_agenda(&job)
            .with_context(|| format!("diff failed for '{}'", job.output.display()))?;

        let Some(diff) = diff else {
            println!("No differences for '{}'.", job.output.display());
            return Ok(());
        };
        print!("{}", diff.unified_diff);
        if !diff.unified_diff.ends_with('\n') {
            println!();
        }
        Ok(())
    }
}
