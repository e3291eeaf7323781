//! The agenda page skeleton: the fixed markup binders populate in place.
//!
//! # Binding contract
//!
//! | Region   | Element ids                                                      |
//! |----------|------------------------------------------------------------------|
//! | header   | `client-name`, `client-address-1`, `client-address-2`,           |
//! |          | `meeting-date`, `internal-use-notice`, `header-logo`             |
//! | assets   | `data-main-heading`, `data-sub-heading`, `data-disclaimer`,      |
//! |          | one container per configured column id                           |
//! | topics   | `topics-list-container`                                          |
//! | team     | `team-grid-container`                                            |
//! | footer   | `footer-content`                                                 |

use agenda_core::types::ColumnId;

use crate::dom::{escape_text, Element, Node};

pub const CLIENT_NAME: &str = "client-name";
pub const CLIENT_ADDRESS_1: &str = "client-address-1";
pub const CLIENT_ADDRESS_2: &str = "client-address-2";
pub const MEETING_DATE: &str = "meeting-date";
pub const INTERNAL_USE_NOTICE: &str = "internal-use-notice";
pub const HEADER_LOGO: &str = "header-logo";
pub const DATA_MAIN_HEADING: &str = "data-main-heading";
pub const DATA_SUB_HEADING: &str = "data-sub-heading";
pub const DATA_DISCLAIMER: &str = "data-disclaimer";
pub const TOPICS_LIST_CONTAINER: &str = "topics-list-container";
pub const TEAM_GRID_CONTAINER: &str = "team-grid-container";
pub const FOOTER_CONTENT: &str = "footer-content";

const BLOCK_DEPTH: usize = 2;

/// Logo shown until the document supplies `logoPath`.
pub const DEFAULT_LOGO: &str = "logo.png";

/// Owned markup tree rooted at the page's `<body>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Skeleton {
    body: Element,
}

impl Skeleton {
    /// Wrap an arbitrary body element.
    pub fn from_body(body: Element) -> Self {
        Skeleton { body }
    }

    /// The standard agenda layout with the given column containers.
    pub fn agenda(columns: &[ColumnId]) -> Self {
        let header = Element::new("header")
            .with_class("agenda-header")
            .with_child(
                Element::new("img")
                    .with_id(HEADER_LOGO)
                    .with_class("header-logo")
                    .with_attr("src", DEFAULT_LOGO)
                    .with_attr("alt", "Company logo"),
            )
            .with_child(
                Element::new("div")
                    .with_class("client-block")
                    .with_child(Element::new("h1").with_id(CLIENT_NAME))
                    .with_child(Element::new("p").with_id(CLIENT_ADDRESS_1))
                    .with_child(Element::new("p").with_id(CLIENT_ADDRESS_2)),
            )
            .with_child(
                Element::new("div")
                    .with_class("meeting-block")
                    .with_child(Element::new("p").with_id(MEETING_DATE).with_class("meeting-date"))
                    .with_child(
                        Element::new("p")
                            .with_id(INTERNAL_USE_NOTICE)
                            .with_class("internal-use"),
                    ),
            );

        let mut column_row = Element::new("div").with_class("data-columns");
        for column in columns {
            column_row.append(Element::new("div").with_id(column.as_ref()).with_class("data-column"));
        }

        let data = Element::new("section")
            .with_class("data-section")
            .with_child(Element::new("h2").with_id(DATA_MAIN_HEADING))
            .with_child(Element::new("p").with_id(DATA_SUB_HEADING).with_class("sub-heading"))
            .with_child(column_row)
            .with_child(Element::new("p").with_id(DATA_DISCLAIMER).with_class("disclaimer"));

        let topics = Element::new("section")
            .with_class("topics-section")
            .with_child(Element::new("h2").with_text("Discussion Topics"))
            .with_child(Element::new("div").with_id(TOPICS_LIST_CONTAINER));

        let team = Element::new("section")
            .with_class("team-section")
            .with_child(Element::new("h2").with_text("Your Team"))
            .with_child(
                Element::new("div")
                    .with_id(TEAM_GRID_CONTAINER)
                    .with_class("team-grid"),
            );

        let footer = Element::new("footer")
            .with_id(FOOTER_CONTENT)
            .with_class("agenda-footer");

        let page = Element::new("div")
            .with_class("agenda-page")
            .with_child(header)
            .with_child(data)
            .with_child(topics)
            .with_child(team)
            .with_child(footer);

        Skeleton { body: Element::new("body").with_child(page) }
    }

    pub fn body(&self) -> &Element {
        &self.body
    }

    pub fn element(&self, id: &str) -> Option<&Element> {
        self.body.find_by_id(id)
    }

    pub fn element_mut(&mut self, id: &str) -> Option<&mut Element> {
        self.body.find_by_id_mut(id)
    }

    /// Drop every child of `<body>` and leave only `replacement`.
    pub fn replace_body(&mut self, replacement: Element) {
        self.body.clear();
        self.body.append(replacement);
    }

    /// Serialized `<body>` children. The page wrapper and its sections are
    /// broken onto separate lines so rendered files diff cleanly.
    pub fn body_html(&self) -> String {
        self.body
            .children()
            .iter()
            .map(|child| match child {
                Node::Element(e) => e.to_html_block(BLOCK_DEPTH),
                Node::Text(t) => escape_text(t),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
