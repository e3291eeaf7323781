//! Section binders — each maps one section of the document onto one region
//! of the skeleton.
//!
//! Binders touch disjoint regions, so their order does not matter. Each one
//! clears its region before populating it, which makes re-binding the same
//! document idempotent. A missing element is recorded as a
//! [`BindingWarning`], logged, and the binder moves on.

pub mod assets;
pub mod footer;
pub mod header;
pub mod team;
pub mod topics;

use agenda_core::config::DEFAULT_PLACEHOLDER_IMAGE;
use agenda_core::{AgendaDocument, BarScale};

use crate::error::BindingWarning;
use crate::skeleton::Skeleton;

/// Knobs shared by all binders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BindOptions {
    pub bar_scale: BarScale,
    /// Image used for team members without `imagePath`.
    pub placeholder_image: String,
}

impl Default for BindOptions {
    fn default() -> Self {
        BindOptions {
            bar_scale: BarScale::default(),
            placeholder_image: DEFAULT_PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

/// Warnings collected during one bind pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindReport {
    warnings: Vec<BindingWarning>,
}

impl BindReport {
    /// Log and record a warning.
    pub fn warn(&mut self, warning: BindingWarning) {
        tracing::warn!("{warning}");
        self.warnings.push(warning);
    }

    pub fn warnings(&self) -> &[BindingWarning] {
        &self.warnings
    }

    pub fn into_warnings(self) -> Vec<BindingWarning> {
        self.warnings
    }

    pub fn is_clean(&self) -> bool {
        self.warnings.is_empty()
    }
}

/// A binder's signature.
pub type Binder = fn(&AgendaDocument, &mut Skeleton, &BindOptions, &mut BindReport);

/// All five binders.
pub const BINDERS: &[(&str, Binder)] = &[
    ("header", header::bind),
    ("assets", assets::bind),
    ("topics", topics::bind),
    ("team", team::bind),
    ("footer", footer::bind),
];

/// Run every binder against `skeleton`.
pub fn bind_all(doc: &AgendaDocument, skeleton: &mut Skeleton, options: &BindOptions) -> BindReport {
    let mut report = BindReport::default();
    for (name, binder) in BINDERS {
        tracing::debug!("binding section: {name}");
        binder(doc, skeleton, options, &mut report);
    }
    report
}

/// Set the text of `#id`, warning when the element is absent.
pub(crate) fn set_text(skeleton: &mut Skeleton, id: &str, text: &str, report: &mut BindReport) {
    match skeleton.element_mut(id) {
        Some(element) => element.set_text(text),
        None => report.warn(BindingWarning::MissingElement { id: id.to_string() }),
    }
}
