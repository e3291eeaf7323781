//! Assets summary: headings plus one container per document column.

use agenda_core::types::{non_empty, text, Column};
use agenda_core::AgendaDocument;

use crate::bars::{column_widths, BAR_TRACK_PADDING};
use crate::binders::{set_text, BindOptions, BindReport};
use crate::dom::Element;
use crate::error::BindingWarning;
use crate::skeleton::{Skeleton, DATA_DISCLAIMER, DATA_MAIN_HEADING, DATA_SUB_HEADING};

pub fn bind(
    doc: &AgendaDocument,
    skeleton: &mut Skeleton,
    options: &BindOptions,
    report: &mut BindReport,
) {
    let section = &doc.assets_section;
    set_text(skeleton, DATA_MAIN_HEADING, text(&section.heading), report);
    set_text(skeleton, DATA_SUB_HEADING, text(&section.sub_heading), report);
    set_text(skeleton, DATA_DISCLAIMER, text(&section.disclaimer), report);

    for column in &section.columns {
        match skeleton.element_mut(column.id.as_ref()) {
            Some(container) => fill_column(container, column, options),
            None => report.warn(BindingWarning::MissingColumn { id: column.id.0.clone() }),
        }
    }
}

fn fill_column(container: &mut Element, column: &Column, options: &BindOptions) {
    container.clear();
    container.set_class_name(&format!(
        "data-column {}",
        non_empty(&column.css_class).unwrap_or("")
    ));
    container.append(Element::new("h3").with_text(text(&column.title)));

    let widths = column_widths(&column.items, options.bar_scale);
    for (item, width) in column.items.iter().zip(widths) {
        container.append(
            Element::new("div")
                .with_class("data-item")
                .with_child(Element::new("span").with_text(text(&item.label)))
                .with_child(
                    Element::new("span")
                        .with_class("value")
                        .with_text(text(&item.value)),
                ),
        );

        let Some(width) = width else { continue };
        let mut track = Element::new("div");
        track.set_class_name(&format!(
            "bar-chart-container {}",
            non_empty(&item.bar_class).unwrap_or("")
        ));
        track.set_style("padding-right", BAR_TRACK_PADDING);
        track.set_style("box-sizing", "border-box");

        let mut bar = Element::new("div").with_class("bar");
        bar.set_style("width", &width);
        track.append(bar);
        container.append(track);
    }
}
