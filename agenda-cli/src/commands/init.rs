//! `agenda init [DIR]` — scaffold `agenda.yaml` and a sample `data.json`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use agenda_core::{
    config::{self, AgendaConfig, CONFIG_FILE},
    loader::{DEFAULT_DATA_FILE, SAMPLE_DOCUMENT},
};

/// Scaffold a new agenda directory. Existing files are left untouched.
#[derive(Args, Debug)]
pub struct InitArgs {
    /// Directory to scaffold (created if missing).
    #[arg(default_value = ".")]
    pub dir: PathBuf,
}

impl InitArgs {
    pub fn run(self) -> Result<()> {
        std::fs::create_dir_all(&self.dir)
            .with_context(|| format!("cannot create '{}'", self.dir.display()))?;

        let yaml = config::to_yaml(&AgendaConfig::default())
            .context("failed to serialize default config")?;
        write_new(&self.dir.join(CONFIG_FILE), &yaml)?;
        write_new(&self.dir.join(DEFAULT_DATA_FILE), SAMPLE_DOCUMENT)?;

        println!("Run 'agenda render' in {} to build the page.", self.dir.display());
        Ok(())
    }
}

fn write_new(path: &Path, contents: &str) -> Result<()> {
    if path.exists() {
        println!("·  {} exists, skipped", path.display());
        return Ok(());
    }
    std::fs::write(path, contents)
        .with_context(|| format!("failed to write '{}'", path.display()))?;
    println!("✓  created {}", path.display());
    Ok(())
}
