//! Tera page shell and the [`Renderer`] that ties binding and templating.
//!
//! # Render flow
//!
//! | Load result | Binders | Body                                        |
//! |-------------|---------|---------------------------------------------|
//! | `Ok(doc)`   | all 5   | bound skeleton                              |
//! | `Err(_)`    | none    | single error notice replacing the skeleton  |
//!
//! Either way the body is wrapped in `page.html.tera`.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use tera::Tera;

use agenda_core::types::ColumnId;
use agenda_core::{AgendaConfig, AgendaDocument, LoadError};

use crate::binders::{bind_all, BindOptions, BindReport};
use crate::context::PageContext;
use crate::dom::Element;
use crate::error::{BindingWarning, RenderError};
use crate::skeleton::Skeleton;

// ---------------------------------------------------------------------------
// Embedded templates — baked into the binary at compile time via include_str!
// ---------------------------------------------------------------------------

/// Name of the page shell template.
pub const PAGE_TEMPLATE: &str = "page.html.tera";

const TPLS: &[(&str, &str)] = &[
    (PAGE_TEMPLATE, include_str!("templates/page.html.tera")),
    ("agenda.css.tera", include_str!("templates/agenda.css.tera")),
];

/// The generic message shown when the data document cannot be loaded.
pub const ERROR_NOTICE: &str = "Error loading agenda data. Please check console.";

// ---------------------------------------------------------------------------
// Template loading helpers
// ---------------------------------------------------------------------------

fn io_err(path: impl Into<PathBuf>, source: std::io::Error) -> RenderError {
    RenderError::Io { path: path.into(), source }
}

fn normalize_template_name(path: &Path) -> String {
    path.to_string_lossy()
        .replace('\\', "/")
        .to_lowercase()
}

fn collect_template_files(dir: &Path, out: &mut Vec<PathBuf>) -> Result<(), RenderError> {
    let entries = std::fs::read_dir(dir).map_err(|e| io_err(dir, e))?;
    for entry in entries {
        let entry = entry.map_err(|e| io_err(dir, e))?;
        let path = entry.path();
        let meta = entry.metadata().map_err(|e| io_err(&path, e))?;
        if meta.is_dir() {
            collect_template_files(&path, out)?;
        } else if meta.is_file() {
            out.push(path);
        }
    }
    Ok(())
}

fn load_user_templates(dir: &Path) -> Result<Vec<(String, String)>, RenderError> {
    if !dir.exists() {
        tracing::warn!("template directory {} does not exist; using built-in templates", dir.display());
        return Ok(vec![]);
    }
    let mut files = Vec::new();
    collect_template_files(dir, &mut files)?;
    let mut templates = Vec::new();
    for path in files {
        if path.extension().and_then(|s| s.to_str()) != Some("tera") {
            continue;
        }
        let rel = path.strip_prefix(dir).unwrap_or(path.as_path());
        let name = normalize_template_name(rel);
        let contents = std::fs::read_to_string(&path).map_err(|e| io_err(&path, e))?;
        tracing::debug!("template override: {name}");
        templates.push((name, contents));
    }
    Ok(templates)
}

fn build_tera(user_template_dir: Option<&Path>) -> Result<Tera, RenderError> {
    let mut templates: HashMap<String, String> = HashMap::new();
    for (name, content) in TPLS {
        templates.insert(
            normalize_template_name(Path::new(name)),
            (*content).to_string(),
        );
    }
    if let Some(dir) = user_template_dir {
        for (name, content) in load_user_templates(dir)? {
            templates.insert(name, content);
        }
    }

    let mut tera = Tera::default();
    let items: Vec<(String, String)> = templates.into_iter().collect();
    tera.add_raw_templates(items)?;
    Ok(tera)
}

// ---------------------------------------------------------------------------
// TemplateEngine
// ---------------------------------------------------------------------------

/// Tera-based page shell with optional user overrides.
///
/// `user_template_dir` may contain `page.html.tera` and/or `agenda.css.tera`
/// replacing the embedded defaults.
pub struct TemplateEngine {
    tera: Tera,
}

impl TemplateEngine {
    pub fn new(user_template_dir: Option<&Path>) -> Result<Self, RenderError> {
        let tera = build_tera(user_template_dir)?;
        Ok(TemplateEngine { tera })
    }

    /// Render the page shell around `ctx.body`. Line endings are normalised
    /// to LF.
    pub fn render_page(&self, ctx: &PageContext) -> Result<String, RenderError> {
        let tera_ctx = ctx.to_tera_context()?;
        let html = self.tera.render(PAGE_TEMPLATE, &tera_ctx)?;
        Ok(html.replace("\r\n", "\n"))
    }
}

// ---------------------------------------------------------------------------
// Options and outcomes
// ---------------------------------------------------------------------------

/// Everything a [`Renderer`] needs besides the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    pub title: String,
    /// Column containers to create in the skeleton.
    pub columns: Vec<ColumnId>,
    pub bind: BindOptions,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions::from_config(&AgendaConfig::default())
    }
}

impl RenderOptions {
    pub fn from_config(config: &AgendaConfig) -> Self {
        RenderOptions {
            title: config.title.clone(),
            columns: config.columns.clone(),
            bind: BindOptions {
                bar_scale: config.bar_scale,
                placeholder_image: config.placeholder_image.clone(),
            },
        }
    }
}

/// A bound agenda page.
#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub html: String,
    pub warnings: Vec<BindingWarning>,
}

/// Result of rendering a load attempt.
#[derive(Debug)]
pub enum RenderOutcome {
    /// The document loaded and every binder ran.
    Agenda(RenderedPage),
    /// The document failed to load; `html` is the error page.
    LoadFailed { html: String, error: LoadError },
}

impl RenderOutcome {
    pub fn html(&self) -> &str {
        match self {
            RenderOutcome::Agenda(page) => &page.html,
            RenderOutcome::LoadFailed { html, .. } => html,
        }
    }

    pub fn warnings(&self) -> &[BindingWarning] {
        match self {
            RenderOutcome::Agenda(page) => &page.warnings,
            RenderOutcome::LoadFailed { .. } => &[],
        }
    }

    pub fn load_error(&self) -> Option<&LoadError> {
        match self {
            RenderOutcome::Agenda(_) => None,
            RenderOutcome::LoadFailed { error, .. } => Some(error),
        }
    }
}

// ---------------------------------------------------------------------------
// Renderer
// ---------------------------------------------------------------------------

/// Binds documents onto fresh skeletons and wraps them in the page shell.
///
/// Create once and reuse.
pub struct Renderer {
    engine: TemplateEngine,
    options: RenderOptions,
}

impl Renderer {
    /// Embedded templates, default options.
    pub fn new() -> Result<Self, RenderError> {
        Self::with_options(RenderOptions::default(), None)
    }

    pub fn with_options(
        options: RenderOptions,
        user_template_dir: Option<&Path>,
    ) -> Result<Self, RenderError> {
        Ok(Renderer { engine: TemplateEngine::new(user_template_dir)?, options })
    }

    /// Build a renderer from `agenda.yaml` settings.
    pub fn from_config(config: &AgendaConfig) -> Result<Self, RenderError> {
        let template_dir = config.template_dir_path();
        Self::with_options(RenderOptions::from_config(config), template_dir.as_deref())
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// A fresh, unbound skeleton.
    pub fn skeleton(&self) -> Skeleton {
        Skeleton::agenda(&self.options.columns)
    }

    /// Run all five binders against `skeleton`.
    pub fn bind(&self, doc: &AgendaDocument, skeleton: &mut Skeleton) -> BindReport {
        bind_all(doc, skeleton, &self.options.bind)
    }

    /// Bind `doc` onto a fresh skeleton and render the full page.
    pub fn render(&self, doc: &AgendaDocument) -> Result<RenderedPage, RenderError> {
        let mut skeleton = self.skeleton();
        let report = self.bind(doc, &mut skeleton);
        let ctx = PageContext::for_agenda(&self.options.title, doc, &skeleton);
        let html = self.engine.render_page(&ctx)?;
        Ok(RenderedPage { html, warnings: report.into_warnings() })
    }

    /// The page whose entire body is [`ERROR_NOTICE`].
    pub fn render_error_page(&self) -> Result<String, RenderError> {
        let mut skeleton = self.skeleton();
        skeleton.replace_body(error_notice());
        let ctx = PageContext::for_error(&self.options.title, &skeleton);
        self.engine.render_page(&ctx)
    }

    /// Render the outcome of a load attempt. A load error is logged and
    /// yields the error page; no binder runs.
    pub fn render_loaded(
        &self,
        loaded: Result<AgendaDocument, LoadError>,
    ) -> Result<RenderOutcome, RenderError> {
        match loaded {
            Ok(doc) => Ok(RenderOutcome::Agenda(self.render(&doc)?)),
            Err(error) => {
                tracing::error!("error loading agenda data: {error}");
                let html = self.render_error_page()?;
                Ok(RenderOutcome::LoadFailed { html, error })
            }
        }
    }
}

fn error_notice() -> Element {
    Element::new("p")
        .with_attr("style", "color: red; padding: 2em;")
        .with_text(ERROR_NOTICE)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
