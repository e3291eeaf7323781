//! Minimal owned DOM: elements, text nodes, id lookup, HTML serialization.
//!
//! The tree is the only mutable state a render touches. Binders receive it
//! by `&mut` and locate their regions with [`Element::find_by_id_mut`].

use std::fmt::Write as _;

/// Elements serialized without a closing tag.
const VOID_ELEMENTS: &[&str] = &["area", "br", "col", "hr", "img", "input", "link", "meta"];

/// A node in the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

/// An HTML element with ordered attributes and children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: &str) -> Self {
        Element { tag: tag.to_string(), attrs: Vec::new(), children: Vec::new() }
    }

    // -- builder helpers ----------------------------------------------------

    pub fn with_id(self, id: &str) -> Self {
        self.with_attr("id", id)
    }

    pub fn with_class(self, class: &str) -> Self {
        self.with_attr("class", class)
    }

    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        self.set_attr(name, value);
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.set_text(text);
        self
    }

    pub fn with_child(mut self, child: impl Into<Node>) -> Self {
        self.append(child);
        self
    }

    // -- accessors ----------------------------------------------------------

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn id(&self) -> Option<&str> {
        self.attr("id")
    }

    pub fn class_name(&self) -> &str {
        self.attr("class").unwrap_or("")
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.class_name().split_whitespace().any(|c| c == class)
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(e) => Some(e),
            Node::Text(_) => None,
        })
    }

    /// Concatenated text of this element and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    // -- mutation -----------------------------------------------------------

    /// Set or replace an attribute, keeping its original position.
    pub fn set_attr(&mut self, name: &str, value: &str) {
        match self.attrs.iter_mut().find(|(k, _)| k == name) {
            Some((_, v)) => *v = value.to_string(),
            None => self.attrs.push((name.to_string(), value.to_string())),
        }
    }

    pub fn remove_attr(&mut self, name: &str) {
        self.attrs.retain(|(k, _)| k != name);
    }

    /// Replace the class list. An empty list removes the attribute.
    pub fn set_class_name(&mut self, class: &str) {
        let normalized = class.split_whitespace().collect::<Vec<_>>().join(" ");
        if normalized.is_empty() {
            self.remove_attr("class");
        } else {
            self.set_attr("class", &normalized);
        }
    }

    pub fn add_class(&mut self, class: &str) {
        if self.has_class(class) {
            return;
        }
        let joined = format!("{} {class}", self.class_name());
        self.set_class_name(&joined);
    }

    /// Set one inline style property, keeping the others.
    pub fn set_style(&mut self, property: &str, value: &str) {
        let mut decls: Vec<(String, String)> = self
            .attr("style")
            .unwrap_or("")
            .split(';')
            .filter_map(|decl| {
                let (k, v) = decl.split_once(':')?;
                Some((k.trim().to_string(), v.trim().to_string()))
            })
            .filter(|(k, _)| !k.is_empty())
            .collect();
        match decls.iter_mut().find(|(k, _)| k == property) {
            Some((_, v)) => *v = value.to_string(),
            None => decls.push((property.to_string(), value.to_string())),
        }
        let style = decls
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join("; ");
        self.set_attr("style", &style);
    }

    /// Value of one inline style property.
    pub fn style(&self, property: &str) -> Option<&str> {
        self.attr("style")?.split(';').find_map(|decl| {
            let (k, v) = decl.split_once(':')?;
            (k.trim() == property).then(|| v.trim())
        })
    }

    /// Remove every child.
    pub fn clear(&mut self) {
        self.children.clear();
    }

    /// Replace all children with a single text node (none for `""`).
    pub fn set_text(&mut self, text: &str) {
        self.children.clear();
        if !text.is_empty() {
            self.children.push(Node::Text(text.to_string()));
        }
    }

    pub fn append(&mut self, child: impl Into<Node>) {
        self.children.push(child.into());
    }

    // -- lookup -------------------------------------------------------------

    /// Depth-first search for the element carrying `id`.
    pub fn find_by_id(&self, id: &str) -> Option<&Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.child_elements().find_map(|child| child.find_by_id(id))
    }

    pub fn find_by_id_mut(&mut self, id: &str) -> Option<&mut Element> {
        if self.id() == Some(id) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|node| match node {
            Node::Element(child) => child.find_by_id_mut(id),
            Node::Text(_) => None,
        })
    }

    /// All descendants (including `self`) with the given tag, in document order.
    pub fn find_all_by_tag<'a>(&'a self, tag: &str) -> Vec<&'a Element> {
        let mut out = Vec::new();
        collect_by(self, &|e| e.tag == tag, &mut out);
        out
    }

    /// All descendants (including `self`) carrying `class`, in document order.
    pub fn find_all_by_class<'a>(&'a self, class: &str) -> Vec<&'a Element> {
        let mut out = Vec::new();
        collect_by(self, &|e| e.has_class(class), &mut out);
        out
    }

    // -- serialization ------------------------------------------------------

    /// Serialize to HTML, escaping text and attribute values.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_element(self, &mut out);
        out
    }

    /// Like [`to_html`](Self::to_html), but the outer `depth` levels of
    /// element-only containers put each child on its own indented line.
    pub fn to_html_block(&self, depth: usize) -> String {
        let mut out = String::new();
        write_block(self, depth, 0, &mut out);
        out
    }

    /// Serialize only the children (the element's "inner HTML").
    pub fn inner_html(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            write_node(child, &mut out);
        }
        out
    }
}

fn collect_text(element: &Element, out: &mut String) {
    for child in &element.children {
        match child {
            Node::Text(t) => out.push_str(t),
            Node::Element(e) => collect_text(e, out),
        }
    }
}

fn collect_by<'a>(element: &'a Element, pred: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
    if pred(element) {
        out.push(element);
    }
    for child in element.child_elements() {
        collect_by(child, pred, out);
    }
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text(t) => out.push_str(&escape_text(t)),
        Node::Element(e) => write_element(e, out),
    }
}

fn write_open_tag(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    for (name, value) in &element.attrs {
        let _ = write!(out, " {name}=\"{}\"", escape_attr(value));
    }
    out.push('>');
}

fn write_element(element: &Element, out: &mut String) {
    write_open_tag(element, out);
    if VOID_ELEMENTS.contains(&element.tag.as_str()) {
        return;
    }
    for child in &element.children {
        write_node(child, out);
    }
    let _ = write!(out, "</{}>", element.tag);
}

fn write_block(element: &Element, depth: usize, indent: usize, out: &mut String) {
    let pad = "  ".repeat(indent);
    let element_only = element.children.iter().all(|c| matches!(c, Node::Element(_)));
    if depth == 0 || element.children.is_empty() || !element_only {
        out.push_str(&pad);
        write_element(element, out);
        return;
    }
    out.push_str(&pad);
    write_open_tag(element, out);
    out.push('\n');
    for child in element.child_elements() {
        write_block(child, depth - 1, indent + 1, out);
        out.push('\n');
    }
    let _ = write!(out, "{pad}</{}>", element.tag);
}

/// Escape `&`, `<`, `>` for text content.
pub fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape text plus `"` for double-quoted attribute values.
pub fn escape_attr(s: &str) -> String {
    escape_text(s).replace('"', "&quot;")
}
