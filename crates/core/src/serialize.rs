//! HTML serialization with position stamping.
//!
//! [`to_html`] writes a hast tree out as HTML and, while doing so, records
//! where each node landed in the output. Trees built in code can then be
//! converted against a [`VFile`](crate::VFile) holding the returned text,
//! exactly as if an HTML parser had produced them.

use serde_json::Value;

use crate::hast::{self, Node, Point, Position};
use crate::location::Location;

/// Elements without content or closing tag.
const VOID: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track", "wbr",
];

/// Elements whose text is written without escaping.
const RAW_TEXT: &[&str] = &["script", "style"];

/// Serializes `tree` to HTML, setting the position of every node.
///
/// # Example
///
/// ```rust
/// use verba_core::hast::{Element, Node};
/// use verba_core::to_html;
///
/// let mut tree: Node = Element::new("p").with_children(vec![Node::text("a & b")]).into();
/// assert_eq!(to_html(&mut tree), "<p>a &amp; b</p>");
/// assert_eq!(tree.children()[0].start().unwrap().offset, Some(3));
/// ```
pub fn to_html(tree: &mut Node) -> String {
    let mut writer = Writer { out: String::new() };
    writer.node(tree, false);

    let location = Location::new(&writer.out);
    resolve(tree, &location);

    writer.out
}

/// Writes HTML, recording offsets only; lines and columns are resolved
/// once the whole document is known.
struct Writer {
    out: String,
}

impl Writer {
    fn point(&self) -> Point {
        Point { offset: Some(self.out.len()), ..Point::default() }
    }

    fn write(&mut self, value: &str) {
        self.out.push_str(value);
    }

    fn node(&mut self, node: &mut Node, raw: bool) {
        let start = self.point();

        match node {
            Node::Root(root) => {
                for child in &mut root.children {
                    self.node(child, false);
                }
            }
            Node::Element(element) => {
                self.write("<");
                self.write(&element.tag_name);
                for (name, value) in &element.properties {
                    if let Some(attribute) = attribute(name, value) {
                        self.write(" ");
                        self.write(&attribute);
                    }
                }
                self.write(">");

                if !VOID.contains(&element.tag_name.as_str()) {
                    let raw = RAW_TEXT.contains(&element.tag_name.as_str());
                    for child in &mut element.children {
                        self.node(child, raw);
                    }
                    self.write("</");
                    self.write(&element.tag_name);
                    self.write(">");
                }
            }
            Node::Text(text) => {
                if raw {
                    self.write(&text.value);
                } else {
                    self.write(&escape(&text.value, false));
                }
            }
            Node::Comment(comment) => {
                self.write("<!--");
                self.write(&comment.value);
                self.write("-->");
            }
            Node::Doctype(_) => self.write("<!doctype html>"),
            Node::Unknown => {}
        }

        let end = self.point();
        if let Some(position) = node.position_mut() {
            *position = Some(Position::new(start, end));
        }
    }
}

/// Fills in line and column of every point from its offset.
fn resolve(node: &mut Node, location: &Location) {
    if let Some(Some(position)) = node.position_mut() {
        for point in [&mut position.start, &mut position.end] {
            if let Some(resolved) = point.offset.and_then(|offset| location.to_point(offset)) {
                point.line = Some(resolved.line);
                point.column = Some(resolved.column);
            }
        }
    }

    match node {
        Node::Root(root) => root.children.iter_mut().for_each(|child| resolve(child, location)),
        Node::Element(element) => element.children.iter_mut().for_each(|child| resolve(child, location)),
        _ => {}
    }
}

fn attribute(name: &str, value: &Value) -> Option<String> {
    let name = hast::property_to_attribute(name);

    let value = match value {
        Value::Null | Value::Bool(false) | Value::Object(_) => return None,
        Value::Bool(true) => return Some(name),
        Value::String(value) => value.clone(),
        Value::Number(number) => number.to_string(),
        Value::Array(values) => values
            .iter()
            .map(|value| value.as_str().map_or_else(|| value.to_string(), str::to_string))
            .collect::<Vec<_>>()
            .join(" "),
    };

    Some(format!("{}=\"{}\"", name, escape(&value, true)))
}

fn escape(value: &str, attribute: bool) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' if !attribute => out.push_str("&lt;"),
            '"' if attribute => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}
