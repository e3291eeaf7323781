pub mod check;
pub mod diff;
pub mod init;
pub mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use agenda_core::{config, AgendaConfig, DocumentSource};
use agenda_output::RenderJob;

/// Where the document comes from and where the page goes.
#[derive(Args, Debug, Clone)]
pub struct JobArgs {
    /// Config file (default: ./agenda.yaml when present).
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Data document: file path or http(s) URL.
    #[arg(long, short = 'd', value_name = "SRC")]
    pub data: Option<String>,

    /// Output HTML file.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl JobArgs {
    pub fn load_config(&self) -> Result<AgendaConfig> {
        match &self.config {
            Some(path) => config::load_config(path)
                .with_context(|| format!("failed to load config '{}'", path.display())),
            None => config::load_config_at(&PathBuf::from("."))
                .context("failed to load ./agenda.yaml"),
        }
    }

    /// Build the job, applying `--data` and `--output` over the config.
    /// Flag paths are relative to the working directory.
    pub fn job(&self, config: AgendaConfig) -> RenderJob {
        let mut job = RenderJob::from_config(config);
        if let Some(data) = &self.data {
            job = job.with_source(DocumentSource::parse(data));
        }
        if let Some(output) = &self.output {
            job = job.with_output(output.clone());
        }
        job
    }
}
