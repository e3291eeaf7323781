use agenda_core::{
    load, parse_document, AgendaDocument, BarScale, ColumnId, DocumentSource, LoadError,
    SAMPLE_DOCUMENT,
};
use agenda_renderer::{
    BindingWarning, RenderOptions, RenderOutcome, Renderer, Skeleton, ERROR_NOTICE,
};
use rstest::rstest;

fn sample() -> AgendaDocument {
    parse_document("sample", SAMPLE_DOCUMENT).expect("sample parses")
}

fn bound(doc: &AgendaDocument) -> (Skeleton, Vec<BindingWarning>) {
    let renderer = Renderer::new().expect("renderer");
    let mut skeleton = renderer.skeleton();
    let report = renderer.bind(doc, &mut skeleton);
    (skeleton, report.into_warnings())
}

fn text(skeleton: &Skeleton, id: &str) -> String {
    skeleton
        .element(id)
        .unwrap_or_else(|| panic!("missing #{id}"))
        .text_content()
}

// ---------------------------------------------------------------------------
// Text fields
// ---------------------------------------------------------------------------

#[test]
fn header_fields_mirror_the_document() {
    let doc = sample();
    let (skeleton, warnings) = bound(&doc);
    assert!(warnings.is_empty(), "{warnings:?}");
    assert_eq!(text(&skeleton, "client-name"), "Harbor & Finch Family Trust");
    assert_eq!(text(&skeleton, "client-address-1"), "1200 Harbor Point Drive");
    assert_eq!(text(&skeleton, "client-address-2"), "Suite 400, Portland, ME 04101");
    assert_eq!(text(&skeleton, "meeting-date"), "Thursday, March 12, 2026");
    assert_eq!(text(&skeleton, "internal-use-notice"), "For Internal use only");
    assert_eq!(
        skeleton.element("header-logo").unwrap().attr("src"),
        Some("assets/logo.png")
    );
}

#[test]
fn null_fields_never_render_as_null_or_undefined() {
    let doc = parse_document(
        "inline",
        r#"{
            "clientInfo": {"name": null, "addressLine2": null, "meetingDate": null},
            "assetsSection": {"heading": null, "columns": [
                {"id": "column-1", "title": null, "items": [{"label": null, "value": null}]}
            ]},
            "discussionTopics": [{"title": null, "points": [{"text": null}]}],
            "team": [{"type": "member", "name": null, "email": null}],
            "footer": {"line1": null, "line2": null}
        }"#,
    )
    .expect("parse");
    let (skeleton, _) = bound(&doc);
    let html = skeleton.body().to_html();
    assert!(!html.contains("null"), "{html}");
    assert!(!html.contains("undefined"), "{html}");
    assert_eq!(text(&skeleton, "client-name"), "");
    assert_eq!(text(&skeleton, "footer-content"), "");
}

// ---------------------------------------------------------------------------
// Bars
// ---------------------------------------------------------------------------

#[rstest]
#[case(0.0)]
#[case(12.5)]
#[case(59.05)]
#[case(99.999)]
#[case(100.0)]
fn bar_width_equals_input_percentage(#[case] percentage: f64) {
    let mut doc = sample();
    doc.assets_section.columns[0].items[0].bar_percentage = Some(percentage);
    let (skeleton, _) = bound(&doc);
    let bar = skeleton.element("column-1").unwrap().find_all_by_class("bar")[0];
    let width = bar.style("width").expect("width");
    let rendered: f64 = width.strip_suffix('%').expect("percent").parse().expect("number");
    assert_eq!(rendered, percentage);
}

#[test]
fn bars_only_for_items_with_percentage() {
    let doc = sample();
    let (skeleton, _) = bound(&doc);
    for column in &doc.assets_section.columns {
        let container = skeleton.element(column.id.as_ref()).unwrap();
        let expected = column.items.iter().filter(|i| i.bar_percentage.is_some()).count();
        assert_eq!(container.find_all_by_class("bar").len(), expected, "{}", column.id);
        assert_eq!(container.find_all_by_class("data-item").len(), column.items.len());
    }
}

// ---------------------------------------------------------------------------
// Topics and team
// ---------------------------------------------------------------------------

#[test]
fn topic_numbers_are_contiguous_from_one() {
    let (skeleton, _) = bound(&sample());
    let numbers: Vec<String> = skeleton
        .element("topics-list-container")
        .unwrap()
        .find_all_by_class("topic-number")
        .iter()
        .map(|e| e.text_content())
        .collect();
    assert_eq!(numbers, vec!["1.", "2.", "3."]);
}

#[test]
fn team_variants_keep_their_own_fields() {
    let (skeleton, _) = bound(&sample());
    let grid = skeleton.element("team-grid-container").unwrap();
    let tiles: Vec<_> = grid.child_elements().collect();
    assert_eq!(tiles.len(), 3);
    for tile in &tiles[..2] {
        assert!(tile.find_all_by_class("qr-code").is_empty());
        assert_eq!(tile.find_all_by_class("email").len(), 1);
    }
    let qr = tiles[2];
    assert_eq!(qr.find_all_by_class("qr-code").len(), 1);
    assert!(qr.find_all_by_class("email").is_empty());
    assert!(qr.find_all_by_class("phone").is_empty());
    // Second member has no phone.
    assert!(tiles[1].find_all_by_class("phone").is_empty());
}

// ---------------------------------------------------------------------------
// Partial-failure isolation
// ---------------------------------------------------------------------------

#[test]
fn unmatched_column_is_isolated() {
    let doc = sample();
    let options = RenderOptions {
        columns: vec![ColumnId::from("column-1"), ColumnId::from("column-3")],
        ..RenderOptions::default()
    };
    let renderer = Renderer::with_options(options, None).expect("renderer");
    let mut skeleton = renderer.skeleton();
    let warnings = renderer.bind(&doc, &mut skeleton).into_warnings();

    assert_eq!(warnings, vec![BindingWarning::MissingColumn { id: "column-2".to_string() }]);
    assert!(skeleton.element("column-2").is_none());
    assert!(text(&skeleton, "column-1").contains("Investment Assets"));
    assert!(text(&skeleton, "column-3").contains("Liabilities"));
    assert!(!text(&skeleton, "topics-list-container").is_empty());
    assert!(!text(&skeleton, "team-grid-container").is_empty());
    assert!(!text(&skeleton, "footer-content").is_empty());
}

#[test]
fn relative_pixel_scale_applies_to_every_column() {
    let options = RenderOptions {
        bind: agenda_renderer::BindOptions {
            bar_scale: BarScale::RelativePixels,
            ..Default::default()
        },
        ..RenderOptions::default()
    };
    let renderer = Renderer::with_options(options, None).expect("renderer");
    let mut skeleton = renderer.skeleton();
    renderer.bind(&sample(), &mut skeleton);
    let widths: Vec<String> = skeleton
        .element("column-1")
        .unwrap()
        .find_all_by_class("bar")
        .iter()
        .map(|b| b.style("width").unwrap().to_string())
        .collect();
    // $10.5M baseline: 6.2/10.5*70 = 41.33, 4.3/10.5*70 = 28.67
    assert_eq!(widths, vec!["70px", "41px", "29px"]);
}

// ---------------------------------------------------------------------------
// Load failures
// ---------------------------------------------------------------------------

#[test]
fn parse_failure_replaces_whole_body() {
    let renderer = Renderer::new().expect("renderer");
    let loaded = parse_document("data.json", "{ broken");
    let outcome = renderer.render_loaded(loaded).expect("render");
    assert!(matches!(outcome, RenderOutcome::LoadFailed { error: LoadError::Parse { .. }, .. }));

    let html = outcome.html();
    let body_start = html.find("<body>").unwrap() + "<body>".len();
    let body_end = html.find("</body>").unwrap();
    let body = html[body_start..body_end].trim();
    assert!(body.starts_with("<p "));
    assert!(body.ends_with("</p>"));
    assert_eq!(body.matches("<p").count(), 1);
    assert!(body.contains(ERROR_NOTICE));
}

#[test]
fn http_error_status_renders_error_page_without_warnings() {
    use std::io::{Read, Write};

    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("bind");
    let url = format!("http://{}/data.json", listener.local_addr().expect("addr"));
    let server = std::thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request);
            let _ = stream.write_all(
                b"HTTP/1.1 500 Internal Server Error\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
            );
        }
    });

    let renderer = Renderer::new().expect("renderer");
    let outcome = renderer
        .render_loaded(load(&DocumentSource::parse(&url)))
        .expect("render");
    server.join().expect("server thread");

    assert!(matches!(
        outcome.load_error(),
        Some(LoadError::Fetch { status: 500, .. })
    ));
    assert!(outcome.warnings().is_empty());
    assert!(outcome.html().contains(ERROR_NOTICE));
    assert!(!outcome.html().contains("<div class=\"team-member"));
}

#[test]
fn full_render_is_deterministic() {
    let renderer = Renderer::new().expect("renderer");
    let a = renderer.render(&sample()).expect("render a");
    let b = renderer.render(&sample()).expect("render b");
    assert_eq!(a.html, b.html);
}
