//! Shared render pipeline entrypoint used by `render`, `diff` and `check`.

use std::path::{Path, PathBuf};

use agenda_core::{config, loader, AgendaConfig, DocumentSource};
use agenda_renderer::{RenderOutcome, Renderer};

use crate::error::OutputError;

/// One data source rendered to one output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderJob {
    pub source: DocumentSource,
    pub output: PathBuf,
    pub config: AgendaConfig,
}

impl RenderJob {
    /// Source and output taken from `config`.
    pub fn from_config(config: AgendaConfig) -> Self {
        RenderJob {
            source: config.source(),
            output: config.output_path(),
            config,
        }
    }

    /// Load `<dir>/agenda.yaml` (or defaults) and build the job from it.
    pub fn at(dir: &Path) -> Result<Self, OutputError> {
        Ok(Self::from_config(config::load_config_at(dir)?))
    }

    pub fn with_source(mut self, source: DocumentSource) -> Self {
        self.source = source;
        self
    }

    pub fn with_output(mut self, output: PathBuf) -> Self {
        self.output = output;
        self
    }

    pub fn renderer(&self) -> Result<Renderer, OutputError> {
        Ok(Renderer::from_config(&self.config)?)
    }

    /// Load the document and render it. A load failure still yields a page
    /// (the error page); only engine failures are errors here.
    pub fn render(&self) -> Result<RenderOutcome, OutputError> {
        let renderer = self.renderer()?;
        let loaded = loader::load(&self.source);
        Ok(renderer.render_loaded(loaded)?)
    }

    /// Local file the document is read from, if any.
    pub fn data_path(&self) -> Option<&Path> {
        match &self.source {
            DocumentSource::File(path) => Some(path),
            DocumentSource::Http(_) => None,
        }
    }

    /// `agenda.yaml` next to the configured base directory, when it exists.
    pub fn config_path(&self) -> Option<PathBuf> {
        let path = self.config.base_dir.join(config::CONFIG_FILE);
        path.exists().then_some(path)
    }
}
