//! Team grid: member tiles and the QR scheduling tile.

use agenda_core::types::{non_empty, text, QrCode, TeamEntry, TeamMember};
use agenda_core::AgendaDocument;

use crate::binders::{BindOptions, BindReport};
use crate::dom::Element;
use crate::error::BindingWarning;
use crate::skeleton::{Skeleton, TEAM_GRID_CONTAINER};

pub const QR_ALT_TEXT: &str = "QR Code for Scheduling";
pub const DEFAULT_SCHEDULE_URL: &str = "#";
pub const DEFAULT_SCHEDULE_TEXT: &str = "Schedule";

pub fn bind(
    doc: &AgendaDocument,
    skeleton: &mut Skeleton,
    options: &BindOptions,
    report: &mut BindReport,
) {
    let Some(container) = skeleton.element_mut(TEAM_GRID_CONTAINER) else {
        report.warn(BindingWarning::MissingElement { id: TEAM_GRID_CONTAINER.to_string() });
        return;
    };
    container.clear();
    for (position, entry) in doc.team.iter().enumerate() {
        match entry {
            TeamEntry::Member(member) => container.append(member_tile(member, options)),
            TeamEntry::QrCode(qr) => container.append(qr_tile(qr)),
            TeamEntry::Unrecognized => {
                report.warn(BindingWarning::UnrecognizedTeamEntry { position: position + 1 });
                container.append(Element::new("div").with_class("team-member"));
            }
        }
    }
}

fn member_tile(member: &TeamMember, options: &BindOptions) -> Element {
    let image = non_empty(&member.image_path).unwrap_or(options.placeholder_image.as_str());
    let email = text(&member.email);

    let mut tile = Element::new("div")
        .with_class("team-member")
        .with_child(
            Element::new("img")
                .with_attr("src", image)
                .with_attr("alt", text(&member.name)),
        )
        .with_child(
            Element::new("p")
                .with_class("name")
                .with_child(Element::new("strong").with_text(text(&member.name))),
        )
        .with_child(Element::new("p").with_class("title").with_text(text(&member.title)))
        .with_child(
            Element::new("p").with_class("email").with_child(
                Element::new("a")
                    .with_attr("href", &format!("mailto:{email}"))
                    .with_text(email),
            ),
        );

    if let Some(phone) = non_empty(&member.phone) {
        tile.append(Element::new("p").with_class("phone").with_text(phone));
    }
    tile
}

fn qr_tile(qr: &QrCode) -> Element {
    Element::new("div")
        .with_class("team-member schedule-section")
        .with_child(
            Element::new("img")
                .with_class("qr-code")
                .with_attr("src", text(&qr.image_path))
                .with_attr("alt", QR_ALT_TEXT),
        )
        .with_child(
            Element::new("a")
                .with_class("schedule-link")
                .with_attr("href", non_empty(&qr.link_url).unwrap_or(DEFAULT_SCHEDULE_URL))
                .with_text(non_empty(&qr.link_text).unwrap_or(DEFAULT_SCHEDULE_TEXT)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binders::fixtures;
    use agenda_core::config::default_columns;

    fn member(phone: Option<&str>, image: Option<&str>) -> TeamEntry {
        TeamEntry::Member(TeamMember {
            name: Some("Jordan Ellis".to_string()),
            title: Some("Advisor".to_string()),
            email: Some("jordan@example.com".to_string()),
            phone: phone.map(str::to_string),
            image_path: image.map(str::to_string),
        })
    }

    fn bound(team: Vec<TeamEntry>) -> (Skeleton, BindReport) {
        let mut doc = fixtures::document();
        doc.team = team;
        let mut skeleton = Skeleton::agenda(&default_columns());
        let mut report = BindReport::default();
        bind(&doc, &mut skeleton, &BindOptions::default(), &mut report);
        (skeleton, report)
    }

    fn tiles(skeleton: &Skeleton) -> Vec<&Element> {
        skeleton
            .element(TEAM_GRID_CONTAINER)
            .unwrap()
            .child_elements()
            .collect()
    }

    #[test]
    fn member_tile_has_image_name_title_mailto_and_phone() {
        let (skeleton, _) = bound(vec![member(Some("555-0142"), Some("jordan.jpg"))]);
        let tile = tiles(&skeleton)[0];
        let img = tile.find_all_by_tag("img")[0];
        assert_eq!(img.attr("src"), Some("jordan.jpg"));
        assert_eq!(img.attr("alt"), Some("Jordan Ellis"));
        assert_eq!(tile.find_all_by_tag("strong")[0].text_content(), "Jordan Ellis");
        assert_eq!(tile.find_all_by_class("title")[0].text_content(), "Advisor");
        let mail = tile.find_all_by_tag("a")[0];
        assert_eq!(mail.attr("href"), Some("mailto:jordan@example.com"));
        assert_eq!(mail.text_content(), "jordan@example.com");
        assert_eq!(tile.find_all_by_class("phone")[0].text_content(), "555-0142");
        assert!(tile.find_all_by_class("qr-code").is_empty());
    }

    #[test]
    fn member_defaults_placeholder_and_omits_phone() {
        let (skeleton, _) = bound(vec![member(None, None)]);
        let tile = tiles(&skeleton)[0];
        assert_eq!(
            tile.find_all_by_tag("img")[0].attr("src"),
            Some("placeholder_default.png")
        );
        assert!(tile.find_all_by_class("phone").is_empty());
    }

    #[test]
    fn qr_tile_defaults_link_and_never_shows_contact_fields() {
        let (skeleton, _) = bound(vec![TeamEntry::QrCode(QrCode {
            image_path: Some("qr.png".to_string()),
            link_url: None,
            link_text: None,
        })]);
        let tile = tiles(&skeleton)[0];
        assert!(tile.has_class("schedule-section"));
        let img = tile.find_all_by_class("qr-code")[0];
        assert_eq!(img.attr("alt"), Some(QR_ALT_TEXT));
        let link = tile.find_all_by_class("schedule-link")[0];
        assert_eq!(link.attr("href"), Some("#"));
        assert_eq!(link.text_content(), "Schedule");
        assert!(tile.find_all_by_class("email").is_empty());
        assert!(tile.find_all_by_class("phone").is_empty());
        assert!(!tile.to_html().contains("mailto:"));
    }

    #[test]
    fn qr_tile_uses_supplied_link() {
        let (skeleton, _) = bound(vec![TeamEntry::QrCode(QrCode {
            image_path: Some("qr.png".to_string()),
            link_url: Some("https://example.com/book".to_string()),
            link_text: Some("Book time".to_string()),
        })]);
        let link = tiles(&skeleton)[0].find_all_by_class("schedule-link")[0];
        assert_eq!(link.attr("href"), Some("https://example.com/book"));
        assert_eq!(link.text_content(), "Book time");
    }

    #[test]
    fn entries_keep_input_order_and_unknown_types_warn() {
        let (skeleton, report) = bound(vec![
            member(None, None),
            TeamEntry::Unrecognized,
            TeamEntry::QrCode(QrCode::default()),
        ]);
        let tiles = tiles(&skeleton);
        assert_eq!(tiles.len(), 3);
        assert!(!tiles[0].has_class("schedule-section"));
        assert_eq!(tiles[1].to_html(), "<div class=\"team-member\"></div>");
        assert!(tiles[2].has_class("schedule-section"));
        assert_eq!(
            report.warnings(),
            &[BindingWarning::UnrecognizedTeamEntry { position: 2 }]
        );
    }

    #[test]
    fn member_name_is_escaped() {
        let (skeleton, _) = bound(vec![TeamEntry::Member(TeamMember {
            name: Some("<b>Ada</b>".to_string()),
            ..TeamMember::default()
        })]);
        let html = skeleton.body().to_html();
        assert!(html.contains("<strong>&lt;b&gt;Ada&lt;/b&gt;</strong>"));
    }
}
