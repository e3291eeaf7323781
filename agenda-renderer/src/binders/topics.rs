//! Numbered discussion topics.

use agenda_core::types::{non_empty, text, Topic, TopicPoint};
use agenda_core::AgendaDocument;

use crate::binders::{BindOptions, BindReport};
use crate::dom::Element;
use crate::error::BindingWarning;
use crate::skeleton::{Skeleton, TOPICS_LIST_CONTAINER};

/// Label of the hyperlink appended to linked points.
pub const LEARN_MORE: &str = "learn more";

pub fn bind(doc: &AgendaDocument, skeleton: &mut Skeleton, _: &BindOptions, report: &mut BindReport) {
    let Some(container) = skeleton.element_mut(TOPICS_LIST_CONTAINER) else {
        report.warn(BindingWarning::MissingElement { id: TOPICS_LIST_CONTAINER.to_string() });
        return;
    };
    container.clear();
    for (index, topic) in doc.discussion_topics.iter().enumerate() {
        container.append(topic_item(index + 1, topic));
    }
}

fn topic_item(number: usize, topic: &Topic) -> Element {
    let header = Element::new("p")
        .with_class("topic-header")
        .with_child(
            Element::new("span")
                .with_class("topic-number")
                .with_text(&format!("{number}.")),
        )
        .with_child(format!(" {}", text(&topic.title)));

    let mut item = Element::new("div").with_class("topic-item").with_child(header);
    if !topic.points.is_empty() {
        let mut list = Element::new("ul");
        for point in &topic.points {
            list.append(point_item(point));
        }
        item.append(list);
    }
    item
}

fn point_item(point: &TopicPoint) -> Element {
    let li = Element::new("li");
    match non_empty(&point.link) {
        Some(link) => li
            .with_child(format!("{} (", text(&point.text)))
            .with_child(Element::new("a").with_attr("href", link).with_text(LEARN_MORE))
            .with_child(")"),
        None => li.with_text(text(&point.text)),
    }
}
