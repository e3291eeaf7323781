//! Footer: two plain lines. Without a `footer` section the skeleton's footer
//! is left as is.

use agenda_core::types::text;
use agenda_core::AgendaDocument;

use crate::binders::{BindOptions, BindReport};
use crate::dom::Element;
use crate::error::BindingWarning;
use crate::skeleton::{Skeleton, FOOTER_CONTENT};

pub fn bind(doc: &AgendaDocument, skeleton: &mut Skeleton, _: &BindOptions, report: &mut BindReport) {
    let Some(footer) = &doc.footer else { return };
    let Some(container) = skeleton.element_mut(FOOTER_CONTENT) else {
        report.warn(BindingWarning::MissingElement { id: FOOTER_CONTENT.to_string() });
        return;
    };
    container.clear();
    container.append(Element::new("p").with_text(text(&footer.line1)));
    container.append(Element::new("p").with_text(text(&footer.line2)));
}
