//! Agenda core library — data document model, loading, configuration.
//!
//! - [`types`] — the agenda document and its sections
//! - [`source`] — where the document is fetched from
//! - [`loader`] — fetch + parse into [`AgendaDocument`]
//! - [`config`] — optional `agenda.yaml`
//! - [`error`] — [`LoadError`], [`ConfigError`]

pub mod config;
pub mod error;
pub mod loader;
pub mod source;
pub mod types;

pub use config::{AgendaConfig, BarScale};
pub use error::{ConfigError, LoadError};
pub use loader::{load, load_document_at, parse_document, SAMPLE_DOCUMENT};
pub use source::DocumentSource;
pub use types::{
    AgendaDocument, AssetsSection, ClientInfo, Column, ColumnId, Footer, Item, QrCode, TeamEntry,
    TeamMember, Topic, TopicPoint,
};
