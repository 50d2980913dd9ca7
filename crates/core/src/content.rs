//! Element classification.
//!
//! Pure predicates over hast nodes deciding how the converter treats them:
//! skipped, mapped to source, turned into a paragraph, grouped into implicit
//! paragraphs, unwrapped, or kept as phrasing content. The tag tables follow
//! the HTML content model.

use serde_json::Value;

use crate::convert::ConvertConfig;
use crate::hast::{Element, Node};

/// Elements whose content never ends up in the output.
const IGNORED: &[&str] = &["script", "style", "svg", "math", "del"];

/// Elements whose whole subtree is one paragraph.
const EXPLICIT_PARAGRAPH: &[&str] = &["p", "h1", "h2", "h3", "h4", "h5", "h6"];

/// Elements in which runs of phrasing content form implicit paragraphs.
const FLOW_ACCEPTING: &[&str] = &[
    "body",
    "article",
    "section",
    "blockquote",
    "nav",
    "aside",
    "header",
    "footer",
    "address",
    "li",
    "dt",
    "dd",
    "figure",
    "figcaption",
    "div",
    "main",
    "caption",
    "td",
    "th",
    "form",
    "fieldset",
    "details",
    "dialog",
];

/// Elements that are transparent for paragraph grouping.
/// See <https://html.spec.whatwg.org/multipage/dom.html#paragraphs>.
const UNWRAP_IN_PARAGRAPH: &[&str] = &["a", "ins", "del", "map"];

/// Phrasing elements, apart from embedded content, body-ok links, and microdata meta.
const PHRASING: &[&str] = &[
    "a", "abbr", "area", "b", "bdi", "bdo", "br", "button", "cite", "code", "data", "datalist", "del", "dfn", "em", "i",
    "input", "ins", "kbd", "keygen", "label", "map", "mark", "meter", "noscript", "output", "progress", "q", "ruby",
    "s", "samp", "script", "select", "small", "span", "strong", "sub", "sup", "template", "textarea", "time", "u",
    "var", "wbr",
];

/// Replaced content that renders external resources rather than text.
const EMBEDDED: &[&str] = &["audio", "canvas", "embed", "iframe", "img", "math", "object", "picture", "svg", "video"];

/// `rel` values allowing a `<link>` in the body.
const BODY_OK_LINK_TYPES: &[&str] = &["pingback", "prefetch", "stylesheet"];

fn element_in(node: &Node, tags: &[&str]) -> bool {
    node.as_element().is_some_and(|element| tags.contains(&element.tag_name.as_str()))
}

/// Whether `node` is an explicit paragraph (`<p>`, headings).
pub fn is_explicit_paragraph(node: &Node) -> bool {
    element_in(node, EXPLICIT_PARAGRAPH)
}

/// Whether `node` groups its phrasing content into implicit paragraphs.
pub fn is_flow_accepting(node: &Node) -> bool {
    element_in(node, FLOW_ACCEPTING)
}

/// Whether `node` is unwrapped when grouping paragraphs (`<a>`, `<ins>`, `<del>`, `<map>`).
pub fn is_unwrappable(node: &Node) -> bool {
    element_in(node, UNWRAP_IN_PARAGRAPH)
}

/// Whether `node` is embedded content.
pub fn is_embedded(node: &Node) -> bool {
    element_in(node, EMBEDDED)
}

/// Whether `node` is phrasing content.
pub fn is_phrasing(node: &Node) -> bool {
    match node {
        Node::Text(_) => true,
        Node::Element(element) => {
            PHRASING.contains(&element.tag_name.as_str())
                || is_embedded(node)
                || is_body_ok_link(element)
                || (element.is("meta") && element.has_property("itemProp"))
        }
        _ => false,
    }
}

/// Whether `node` is a text node of only inter-element whitespace.
pub fn is_whitespace(node: &Node) -> bool {
    match node {
        Node::Text(text) => text.value.chars().all(|c| matches!(c, ' ' | '\t' | '\n' | '\x0C' | '\r')),
        _ => false,
    }
}

fn is_body_ok_link(element: &Element) -> bool {
    if !element.is("link") {
        return false;
    }

    if element.has_property("itemProp") {
        return true;
    }

    let rel: Vec<&str> = match element.property("rel") {
        Some(Value::Array(values)) => values.iter().filter_map(Value::as_str).collect(),
        Some(Value::String(value)) => value.split_ascii_whitespace().collect(),
        _ => Vec::new(),
    };

    !rel.is_empty() && rel.iter().all(|value| BODY_OK_LINK_TYPES.contains(value))
}

/// Configurable predicates: which elements are ignored and which are source.
#[derive(Debug, Clone, Copy)]
pub struct Classifier<'a> {
    config: &'a ConvertConfig,
}

impl<'a> Classifier<'a> {
    pub fn new(config: &'a ConvertConfig) -> Self {
        Self { config }
    }

    /// Whether `node` is an element whose content is dropped.
    pub fn is_ignored(&self, node: &Node) -> bool {
        let Some(element) = node.as_element() else {
            return false;
        };

        IGNORED.contains(&element.tag_name.as_str())
            || self.config.ignore_tags.iter().any(|tag| element.is(tag))
            || self.data_nlcst(element) == Some("ignore")
    }

    /// Whether `node` is an element mapped to a single source node.
    pub fn is_source(&self, node: &Node) -> bool {
        let Some(element) = node.as_element() else {
            return false;
        };

        element.is("code")
            || self.config.source_tags.iter().any(|tag| element.is(tag))
            || self.data_nlcst(element) == Some("source")
    }

    fn data_nlcst<'e>(&self, element: &'e Element) -> Option<&'e str> {
        if self.config.data_attribute { element.data_nlcst() } else { None }
    }
}
