//! `agenda render` — load, bind, and write the agenda page.

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::Args;
use colored::Colorize;

use agenda_core::BarScale;
use agenda_output::{render_agenda, WriteResult};

use super::JobArgs;

/// Arguments for `agenda render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    #[command(flatten)]
    pub paths: JobArgs,

    /// Directory of tera template overrides (relative to the working directory).
    #[arg(long, short = 't', value_name = "DIR")]
    pub template_dir: Option<PathBuf>,

    /// Bar width mode: percentage | relative-pixels.
    #[arg(long, value_name = "S")]
    pub bar_scale: Option<BarScale>,

    /// Show what would be written without writing anything.
    #[arg(long)]
    pub dry_run: bool,
}

impl RenderArgs {
    pub fn run(self) -> Result<()> {
        let mut config = self.paths.load_config()?;
        if let Some(dir) = self.template_dir {
            let dir = if dir.is_relative() {
                std::env::current_dir()
                    .context("cannot determine the working directory")?
                    .join(dir)
            } else {
                dir
            };
            config.template_dir = Some(dir);
        }
        if let Some(scale) = self.bar_scale {
            config.bar_scale = scale;
        }
        let job = self.paths.job(config);

        let result = render_agenda(&job, self.dry_run)
            .with_context(|| format!("render failed for '{}'", job.source))?;

        let prefix = if self.dry_run { "[dry-run] " } else { "" };
        match &result.write {
            WriteResult::Written { path } => println!("{prefix}✎  wrote {}", path.display()),
            WriteResult::WouldWrite { path } => println!("{prefix}~  would write {}", path.display()),
            WriteResult::Unchanged { path } => println!("{prefix}·  unchanged {}", path.display()),
        }
        for warning in &result.warnings {
            println!("  {} {warning}", "warning:".yellow().bold());
        }

        if let Some(error) = result.load_error {
            let action = match &result.write {
                WriteResult::Written { .. } => "wrote error page to",
                WriteResult::WouldWrite { .. } => "would write error page to",
                WriteResult::Unchanged { .. } => "error page unchanged at",
            };
            bail!("{error}; {action} {}", result.write.path().display());
        }
        Ok(())
    }
}
