//! Document loading: one fetch, one parse.
//!
//! # API pattern
//!
//! - `load(&DocumentSource)` — fetch + parse from any source
//! - `parse_document(location, body)` — parse an already-fetched body
//! - `load_document_at(dir)` — the same-directory `data.json`

use std::path::{Path, PathBuf};

use crate::error::LoadError;
use crate::source::DocumentSource;
use crate::types::AgendaDocument;

/// File name of the static data document next to the page.
pub const DEFAULT_DATA_FILE: &str = "data.json";

/// A complete example document, scaffolded by `agenda init`.
pub const SAMPLE_DOCUMENT: &str = include_str!("sample/data.json");

/// `<dir>/data.json` — pure, no I/O.
pub fn document_path_at(dir: &Path) -> PathBuf {
    dir.join(DEFAULT_DATA_FILE)
}

/// Parse a fetched body into an [`AgendaDocument`].
///
/// Malformed JSON and documents missing a required section both come back as
/// [`LoadError::Parse`] with serde_json's line/column context. A leading
/// UTF-8 byte order mark is ignored.
pub fn parse_document(location: &str, body: &str) -> Result<AgendaDocument, LoadError> {
    let body = body.strip_prefix('\u{feff}').unwrap_or(body);
    serde_json::from_str(body).map_err(|source| LoadError::Parse {
        location: location.to_string(),
        source,
    })
}

/// Fetch and parse the document at `source`.
pub fn load(source: &DocumentSource) -> Result<AgendaDocument, LoadError> {
    let location = source.location();
    let body = source.fetch()?;
    let document = parse_document(&location, &body)?;
    tracing::debug!(
        "loaded agenda data from {location}: {} columns, {} items, {} topics, {} team entries",
        document.assets_section.columns.len(),
        document.item_count(),
        document.discussion_topics.len(),
        document.team.len(),
    );
    Ok(document)
}

/// Load `<dir>/data.json`.
pub fn load_document_at(dir: &Path) -> Result<AgendaDocument, LoadError> {
    load(&DocumentSource::File(document_path_at(dir)))
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TeamEntry;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"{
        "clientInfo": {"name": "Acme"},
        "assetsSection": {"columns": []},
        "discussionTopics": [],
        "team": []
    }"#;

    #[test]
    fn document_path_is_same_directory_data_json() {
        let path = document_path_at(Path::new("/srv/agenda"));
        assert!(path.ends_with("agenda/data.json"));
    }

    #[test]
    fn minimal_document_parses() {
        let doc = parse_document("inline", MINIMAL).expect("parse");
        assert_eq!(doc.client_info.name.as_deref(), Some("Acme"));
        assert!(doc.footer.is_none());
    }

    #[test]
    fn sample_document_parses() {
        let doc = parse_document("sample", SAMPLE_DOCUMENT).expect("sample must parse");
        assert_eq!(doc.assets_section.columns.len(), 3);
        assert_eq!(doc.team.len(), 3);
    }

    #[test]
    fn malformed_json_is_parse_error() {
        let err = parse_document("inline", "{not json").unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }), "got: {err}");
    }

    #[test]
    fn missing_required_section_is_parse_error() {
        let err = parse_document("inline", r#"{"clientInfo": {}}"#).unwrap_err();
        assert!(matches!(err, LoadError::Parse { .. }), "got: {err}");
        assert!(err.to_string().contains("assetsSection"));
    }

    #[test]
    fn load_document_at_reads_data_json() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(DEFAULT_DATA_FILE),
            r#"{
                "clientInfo": {},
                "assetsSection": {"columns": []},
                "discussionTopics": [],
                "team": [{"type": "qrCode", "imagePath": "qr.png"}]
            }"#,
        )
        .unwrap();
        let doc = load_document_at(dir.path()).expect("load");
        assert!(matches!(doc.team[0], TeamEntry::QrCode(_)));
    }

    #[test]
    fn untyped_team_entry_and_null_column_id_do_not_fail_the_parse() {
        let body = r#"{
            "clientInfo": {},
            "assetsSection": {"columns": [{"id": null, "title": "Assets", "items": []}]},
            "discussionTopics": [],
            "team": [{"name": "Ada"}]
        }"#;
        let doc = parse_document("inline", body).expect("parse");
        assert!(doc.assets_section.columns[0].id.as_ref().is_empty());
        assert_eq!(doc.team, vec![TeamEntry::Unrecognized]);
    }

    #[test]
    fn byte_order_mark_is_ignored() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(DEFAULT_DATA_FILE), format!("\u{feff}{MINIMAL}")).unwrap();
        let doc = load_document_at(dir.path()).expect("BOM-prefixed document must load");
        assert_eq!(doc.client_info.name.as_deref(), Some("Acme"));
    }

    #[test]
    fn load_document_at_missing_is_fetch_error() {
        let dir = TempDir::new().unwrap();
        let err = load_document_at(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::Fetch { status: 404, .. }));
    }
}
