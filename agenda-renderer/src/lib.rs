//! # agenda-renderer
//!
//! Binds an [`AgendaDocument`](agenda_core::AgendaDocument) onto the agenda
//! page skeleton and wraps the result in a tera page shell.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use agenda_core::{loader, DocumentSource};
//! use agenda_renderer::Renderer;
//!
//! fn render(location: &str) -> Option<String> {
//!     let renderer = Renderer::new().ok()?;
//!     let loaded = loader::load(&DocumentSource::parse(location));
//!     let outcome = renderer.render_loaded(loaded).ok()?;
//!     Some(outcome.html().to_string())
//! }
//! ```

pub mod bars;
pub mod binders;
pub mod context;
pub mod dom;
pub mod engine;
pub mod error;
pub mod skeleton;

pub use binders::{bind_all, BindOptions, BindReport};
pub use context::PageContext;
pub use dom::{Element, Node};
pub use engine::{RenderOptions, RenderOutcome, RenderedPage, Renderer, TemplateEngine, ERROR_NOTICE};
pub use error::{BindingWarning, RenderError};
pub use skeleton::Skeleton;
