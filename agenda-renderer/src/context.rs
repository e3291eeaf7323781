//! Page context — serializable payload for the tera page shell.

use serde::{Deserialize, Serialize};

use agenda_core::types::non_empty;
use agenda_core::AgendaDocument;

use crate::error::RenderError;
use crate::skeleton::Skeleton;

/// Everything `page.html.tera` can reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageContext {
    /// `<title>` text (escaped by the template).
    pub title: String,
    /// Pre-serialized, already-escaped `<body>` children.
    pub body: String,
    pub meta: MetaCtx,
}

/// Page metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaCtx {
    pub generator: String,
    pub internal_use_only: bool,
}

impl MetaCtx {
    fn new(internal_use_only: bool) -> Self {
        MetaCtx {
            generator: format!("agenda {}", env!("CARGO_PKG_VERSION")),
            internal_use_only,
        }
    }
}

impl PageContext {
    /// Context for a bound agenda. The title gains the client name when the
    /// document has one.
    pub fn for_agenda(title: &str, doc: &AgendaDocument, skeleton: &Skeleton) -> Self {
        let title = match non_empty(&doc.client_info.name) {
            Some(name) => format!("{title} | {name}"),
            None => title.to_string(),
        };
        PageContext {
            title,
            body: skeleton.body_html(),
            meta: MetaCtx::new(doc.client_info.internal_use_only),
        }
    }

    /// Context for the load-failure page.
    pub fn for_error(title: &str, skeleton: &Skeleton) -> Self {
        PageContext {
            title: title.to_string(),
            body: skeleton.body_html(),
            meta: MetaCtx::new(false),
        }
    }

    pub fn to_tera_context(&self) -> Result<tera::Context, RenderError> {
        tera::Context::from_serialize(self).map_err(RenderError::from)
    }
}
