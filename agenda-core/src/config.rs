//! `agenda.yaml` — optional render configuration.
//!
//! Every key is optional. Relative paths are resolved against the directory
//! holding the config file, so a config can travel with its `data.json`.
//!
//! ```yaml
//! data: data.json
//! output: agenda.html
//! template_dir: templates
//! title: Client Agenda
//! columns: [column-1, column-2, column-3]
//! placeholder_image: placeholder_default.png
//! bar_scale: percentage
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::loader::DEFAULT_DATA_FILE;
use crate::source::DocumentSource;
use crate::types::ColumnId;

/// Default config file name.
pub const CONFIG_FILE: &str = "agenda.yaml";

/// Default output file name.
pub const DEFAULT_OUTPUT_FILE: &str = "agenda.html";

/// Image used for team members without `imagePath`.
pub const DEFAULT_PLACEHOLDER_IMAGE: &str = "placeholder_default.png";

/// How bar widths are computed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum BarScale {
    /// Width is the item's `barPercentage`, verbatim.
    #[default]
    Percentage,
    /// Width in pixels, proportional to the first item of the column.
    RelativePixels,
}

impl std::str::FromStr for BarScale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "percentage" => Ok(BarScale::Percentage),
            "relative_pixels" => Ok(BarScale::RelativePixels),
            other => Err(format!(
                "unknown bar scale '{other}'; expected: percentage, relative-pixels"
            )),
        }
    }
}

impl std::fmt::Display for BarScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BarScale::Percentage => write!(f, "percentage"),
            BarScale::RelativePixels => write!(f, "relative-pixels"),
        }
    }
}

/// Contents of `agenda.yaml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AgendaConfig {
    /// Data document: file path or `http(s)` URL.
    pub data: String,
    pub output: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template_dir: Option<PathBuf>,
    pub title: String,
    /// Column container ids present in the skeleton.
    pub columns: Vec<ColumnId>,
    pub placeholder_image: String,
    pub bar_scale: BarScale,
    /// Directory the config was loaded from; relative paths resolve here.
    #[serde(skip)]
    pub base_dir: PathBuf,
}

impl Default for AgendaConfig {
    fn default() -> Self {
        AgendaConfig {
            data: DEFAULT_DATA_FILE.to_string(),
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            template_dir: None,
            title: "Client Agenda".to_string(),
            columns: default_columns(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
            bar_scale: BarScale::default(),
            base_dir: PathBuf::from("."),
        }
    }
}

/// `column-1`, `column-2`, `column-3`.
pub fn default_columns() -> Vec<ColumnId> {
    (1..=3).map(|n| ColumnId(format!("column-{n}"))).collect()
}

impl AgendaConfig {
    /// Defaults rooted at `dir`.
    pub fn default_at(dir: &Path) -> Self {
        AgendaConfig { base_dir: dir.to_path_buf(), ..Self::default() }
    }

    /// The data source, with relative file paths resolved.
    pub fn source(&self) -> DocumentSource {
        DocumentSource::parse_relative_to(&self.data, &self.base_dir)
    }

    /// Output path, resolved against the config directory.
    pub fn output_path(&self) -> PathBuf {
        self.resolve(&self.output)
    }

    /// Template override directory, resolved against the config directory.
    pub fn template_dir_path(&self) -> Option<PathBuf> {
        self.template_dir.as_deref().map(|dir| self.resolve(dir))
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_relative() {
            self.base_dir.join(path)
        } else {
            path.to_path_buf()
        }
    }
}

/// Load the config file at `path`.
pub fn load_config(path: &Path) -> Result<AgendaConfig, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let mut config: AgendaConfig = if contents.trim().is_empty() {
        AgendaConfig::default()
    } else {
        serde_yaml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?
    };
    config.base_dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from("."));
    Ok(config)
}

/// Load `<dir>/agenda.yaml` if present, otherwise defaults rooted at `dir`.
pub fn load_config_at(dir: &Path) -> Result<AgendaConfig, ConfigError> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        tracing::debug!("no {CONFIG_FILE} in {}; using defaults", dir.display());
        return Ok(AgendaConfig::default_at(dir));
    }
    load_config(&path)
}

/// Serialize a config to YAML (used by `agenda init`).
pub fn to_yaml(config: &AgendaConfig) -> Result<String, ConfigError> {
    Ok(serde_yaml::to_string(config)?)
}
