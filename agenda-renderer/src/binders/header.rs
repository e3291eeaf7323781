//! Header/branding: client name, address, meeting date, notice, logo.

use agenda_core::types::{non_empty, text};
use agenda_core::AgendaDocument;

use crate::binders::{set_text, BindOptions, BindReport};
use crate::error::BindingWarning;
use crate::skeleton::{
    Skeleton, CLIENT_ADDRESS_1, CLIENT_ADDRESS_2, CLIENT_NAME, HEADER_LOGO, INTERNAL_USE_NOTICE,
    MEETING_DATE,
};

/// Text shown when `internalUseOnly` is set.
pub const INTERNAL_USE_TEXT: &str = "For Internal use only";

pub fn bind(doc: &AgendaDocument, skeleton: &mut Skeleton, _: &BindOptions, report: &mut BindReport) {
    let info = &doc.client_info;
    set_text(skeleton, CLIENT_NAME, text(&info.name), report);
    set_text(skeleton, CLIENT_ADDRESS_1, text(&info.address_line1), report);
    set_text(skeleton, CLIENT_ADDRESS_2, text(&info.address_line2), report);
    set_text(skeleton, MEETING_DATE, text(&info.meeting_date), report);

    let notice = if info.internal_use_only { INTERNAL_USE_TEXT } else { "" };
    set_text(skeleton, INTERNAL_USE_NOTICE, notice, report);

    match skeleton.element_mut(HEADER_LOGO) {
        Some(logo) => {
            if let Some(path) = non_empty(&info.logo_path) {
                logo.set_attr("src", path);
            }
        }
        None => report.warn(BindingWarning::MissingElement { id: HEADER_LOGO.to_string() }),
    }
}
