//! The HTML syntax tree consumed by the converter.
//!
//! This module provides [`Node`] and its variants, modelled on the hast
//! format: a `root` holding `element`, `text`, `comment`, and `doctype`
//! nodes, each with an optional source [`Position`]. Trees usually come from
//! an HTML parser as JSON:
//!
//! ```rust
//! use verba_core::hast::Node;
//!
//! let tree = Node::from_json(r#"{
//!     "type": "element",
//!     "tagName": "p",
//!     "properties": {"dataNlcst": "ignore"},
//!     "children": [{"type": "text", "value": "Hidden"}]
//! }"#).unwrap();
//!
//! assert_eq!(tree.as_element().unwrap().data_nlcst(), Some("ignore"));
//! assert_eq!(tree.text_content(), "Hidden");
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{Result, VerbaError};

/// Element properties, keyed by hast property name (`dataNlcst`, `className`).
pub type Properties = BTreeMap<String, Value>;

/// One place in the source document, as reported by the HTML parser.
///
/// Every field is optional: parsers may omit positional info, which the
/// converter checks for before doing any work.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub line: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<usize>,
}

impl Point {
    pub fn new(line: usize, column: usize, offset: usize) -> Self {
        Self { line: Some(line), column: Some(column), offset: Some(offset) }
    }

    /// Line and column, when both are present and 1-based.
    pub fn line_column(&self) -> Option<(usize, usize)> {
        match (self.line, self.column) {
            (Some(line), Some(column)) if line > 0 && column > 0 => Some((line, column)),
            _ => None,
        }
    }
}

/// Source span of an input node.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    #[serde(default)]
    pub start: Point,
    #[serde(default)]
    pub end: Point,
}

impl Position {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }
}

/// A node in an HTML syntax tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Root(Root),
    Element(Element),
    Text(Text),
    Comment(Comment),
    Doctype(Doctype),
    /// Any node with a `type` this crate doesn't model.
    #[serde(other)]
    Unknown,
}

/// Document root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Root {
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// An HTML element.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Element {
    #[serde(rename = "tagName")]
    pub tag_name: String,
    #[serde(default)]
    pub properties: Properties,
    #[serde(default)]
    pub children: Vec<Node>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// Character data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Text {
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// An HTML comment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default)]
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// A document type declaration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Doctype {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Node {
    /// Parses a tree from hast JSON.
    ///
    /// # Errors
    ///
    /// Returns [`VerbaError::ExpectedNode`] if the JSON is not an object with
    /// a string `type`, and [`VerbaError::Json`] if it is otherwise malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_value(value)
    }

    /// Converts an already parsed JSON value into a tree.
    pub fn from_value(value: Value) -> Result<Self> {
        match value.get("type") {
            Some(Value::String(_)) => Ok(serde_json::from_value(value)?),
            _ => Err(VerbaError::ExpectedNode),
        }
    }

    /// Creates a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text { value: value.into(), position: None })
    }

    /// Creates a comment node.
    pub fn comment(value: impl Into<String>) -> Self {
        Node::Comment(Comment { value: value.into(), position: None })
    }

    /// Creates a root node.
    pub fn root(children: Vec<Node>) -> Self {
        Node::Root(Root { children, position: None })
    }

    /// Creates a doctype node.
    pub fn doctype() -> Self {
        Node::Doctype(Doctype { position: None })
    }

    /// The unist `type` of this node.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Root(_) => "root",
            Node::Element(_) => "element",
            Node::Text(_) => "text",
            Node::Comment(_) => "comment",
            Node::Doctype(_) => "doctype",
            Node::Unknown => "unknown",
        }
    }

    pub fn position(&self) -> Option<&Position> {
        match self {
            Node::Root(node) => node.position.as_ref(),
            Node::Element(node) => node.position.as_ref(),
            Node::Text(node) => node.position.as_ref(),
            Node::Comment(node) => node.position.as_ref(),
            Node::Doctype(node) => node.position.as_ref(),
            Node::Unknown => None,
        }
    }

    pub fn position_mut(&mut self) -> Option<&mut Option<Position>> {
        match self {
            Node::Root(node) => Some(&mut node.position),
            Node::Element(node) => Some(&mut node.position),
            Node::Text(node) => Some(&mut node.position),
            Node::Comment(node) => Some(&mut node.position),
            Node::Doctype(node) => Some(&mut node.position),
            Node::Unknown => None,
        }
    }

    /// Start point of this node, if it has a position.
    pub fn start(&self) -> Option<&Point> {
        self.position().map(|position| &position.start)
    }

    /// Children of parent nodes; empty for literals.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Root(node) => &node.children,
            Node::Element(node) => &node.children,
            _ => &[],
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Text content of this node.
    ///
    /// Parents concatenate the values of all descendant text nodes (comments
    /// inside them are skipped); text and comment nodes return their value.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text(node) => node.value.clone(),
            Node::Comment(node) => node.value.clone(),
            Node::Root(_) | Node::Element(_) => {
                let mut out = String::new();
                collect_text(self.children(), &mut out);
                out
            }
            Node::Doctype(_) | Node::Unknown => String::new(),
        }
    }
}

fn collect_text(children: &[Node], out: &mut String) {
    for child in children {
        match child {
            Node::Text(text) => out.push_str(&text.value),
            Node::Root(_) | Node::Element(_) => collect_text(child.children(), out),
            _ => {}
        }
    }
}

impl Element {
    /// Creates an element without properties or children.
    pub fn new(tag_name: impl Into<String>) -> Self {
        Self { tag_name: tag_name.into(), ..Default::default() }
    }

    /// Sets a property. HTML attribute names (`data-nlcst`) are accepted and
    /// stored under their property name (`dataNlcst`).
    pub fn with_property(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.properties.insert(attribute_to_property(name), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    /// Looks up a property by property name or HTML attribute name.
    pub fn property(&self, name: &str) -> Option<&Value> {
        self.properties.get(name).or_else(|| self.properties.get(&attribute_to_property(name)))
    }

    /// Whether a property is set to something other than `null` or `false`.
    pub fn has_property(&self, name: &str) -> bool {
        !matches!(self.property(name), None | Some(Value::Null) | Some(Value::Bool(false)))
    }

    /// Value of the `data-nlcst` attribute, if it is a string.
    pub fn data_nlcst(&self) -> Option<&str> {
        self.property("dataNlcst").and_then(Value::as_str)
    }

    pub fn is(&self, tag_name: &str) -> bool {
        self.tag_name == tag_name
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Maps an HTML attribute name to its hast property name.
///
/// `data-foo-bar` becomes `dataFooBar`; `class` and `for` become `className`
/// and `htmlFor`. Other names pass through unchanged.
pub fn attribute_to_property(name: &str) -> String {
    match name {
        "class" => return "className".to_string(),
        "for" => return "htmlFor".to_string(),
        _ => {}
    }

    let Some(rest) = name.strip_prefix("data-") else {
        return name.to_string();
    };

    let mut property = String::from("data");
    for segment in rest.split('-').filter(|segment| !segment.is_empty()) {
        let mut chars = segment.chars();
        if let Some(first) = chars.next() {
            property.extend(first.to_uppercase());
            property.push_str(chars.as_str());
        }
    }
    property
}

/// Maps a hast property name back to its HTML attribute name.
pub fn property_to_attribute(name: &str) -> String {
    match name {
        "className" => return "class".to_string(),
        "htmlFor" => return "for".to_string(),
        _ => {}
    }

    let rest = name.strip_prefix("data").unwrap_or_default();
    if rest.starts_with(|c: char| c.is_ascii_uppercase()) {
        let mut attribute = String::from("data");
        for c in rest.chars() {
            if c.is_ascii_uppercase() {
                attribute.push('-');
                attribute.push(c.to_ascii_lowercase());
            } else {
                attribute.push(c);
            }
        }
        return attribute;
    }

    match name {
        "acceptCharset" => "accept-charset".to_string(),
        "httpEquiv" => "http-equiv".to_string(),
        _ => name.to_ascii_lowercase(),
    }
}
