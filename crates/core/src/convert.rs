//! hast to nlcst conversion.
//!
//! This module provides the main API: the [`ToNlcst`] builder and the
//! [`to_nlcst`] convenience function.
//!
//! # Paragraphs
//!
//! Explicit paragraphs (`<p>`, `<h1>`..`<h6>`) always become one paragraph.
//! Inside flow containers (`<div>`, `<li>`, `<article>`, ...) runs of
//! phrasing content become implicit paragraphs, following a simplified
//! version of <https://html.spec.whatwg.org/multipage/dom.html#paragraphs>:
//!
//! ```html
//! <article>
//!   An implicit paragraph.
//!   <h1>An explicit paragraph.</h1>
//! </article>
//! ```
//!
//! # Ignored and source nodes
//!
//! `<script>`, `<style>`, `<svg>`, `<math>`, and `<del>` are ignored, as is
//! any element with `data-nlcst="ignore"`. `<code>`, and elements with
//! `data-nlcst="source"`, become a single `SourceNode`.
//!
//! # Positions
//!
//! Output positions are computed from text length, starting at the offset
//! where each converted input node begins. Synthetic whitespace for `<br>`
//! and `<wbr>` is positioned at the element.
//!
//! # Example
//!
//! ```rust
//! use verba_core::hast::{Element, Node};
//! use verba_core::{BasicParser, VFile, to_html, to_nlcst};
//!
//! let mut tree = Node::root(vec![Element::new("p").with_children(vec![Node::text("foo")]).into()]);
//! let file = VFile::new(to_html(&mut tree));
//!
//! let root = to_nlcst(&tree, &file, &BasicParser::new()).unwrap();
//! let word = &root.children[0].children[0].children[0];
//! assert_eq!(word.to_string(), "foo");
//! assert_eq!(word.position().unwrap().start.offset, Some(3));
//! ```

use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use crate::content::{self, Classifier};
use crate::hast::Node;
use crate::location::Location;
use crate::nlcst::{Paragraph, Root, Sentence, SentenceContent};
use crate::parser::{ParserHandle, ParserSource};
use crate::unist::Position;
use crate::vfile::VFile;
use crate::{Result, VerbaError};

/// Punctuation ending a sentence.
static TERMINAL_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[!.?\x{2026}\x{203D}]+$").expect("terminal marker expression is valid"));

/// Configuration for conversion.
///
/// The defaults reproduce the standard behavior; the tag lists extend the
/// built-in ignored and source elements.
///
/// # Example
///
/// ```rust
/// use verba_core::ConvertConfig;
///
/// let config = ConvertConfig::builder()
///     .ignore_tag("aside")
///     .source_tag("kbd")
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct ConvertConfig {
    /// Extra tag names whose content is dropped (default: none).
    pub ignore_tags: Vec<String>,

    /// Extra tag names mapped to source nodes (default: none).
    pub source_tags: Vec<String>,

    /// Whether to honor `data-nlcst="ignore"` and `data-nlcst="source"` (default: true).
    pub data_attribute: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self { ignore_tags: Vec::new(), source_tags: Vec::new(), data_attribute: true }
    }
}

impl ConvertConfig {
    /// Creates a new builder for ConvertConfig.
    pub fn builder() -> ConvertConfigBuilder {
        ConvertConfigBuilder::new()
    }
}

/// Builder for ConvertConfig.
pub struct ConvertConfigBuilder {
    config: ConvertConfig,
}

impl ConvertConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: ConvertConfig::default() }
    }

    /// Adds a tag whose content is dropped.
    pub fn ignore_tag(mut self, tag: impl Into<String>) -> Self {
        self.config.ignore_tags.push(tag.into());
        self
    }

    /// Adds a tag mapped to a source node.
    pub fn source_tag(mut self, tag: impl Into<String>) -> Self {
        self.config.source_tags.push(tag.into());
        self
    }

    /// Sets whether to honor the `data-nlcst` attribute.
    pub fn data_attribute(mut self, value: bool) -> Self {
        self.config.data_attribute = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> ConvertConfig {
        self.config
    }
}

impl Default for ConvertConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Main entry point for conversion.
///
/// Collects the tree, the file it was parsed from, and a parser, then checks
/// them in that order before converting.
///
/// # Example
///
/// ```rust
/// use verba_core::hast::Node;
/// use verba_core::{BasicParser, ToNlcst, VFile, VerbaError};
///
/// let tree = Node::text("foo");
/// let file = VFile::new("foo");
///
/// let result = ToNlcst::new().tree(&tree).file(&file).parser(&BasicParser::new()).convert();
/// assert!(matches!(result, Err(VerbaError::ExpectedPosition)));
/// ```
#[derive(Debug, Default)]
pub struct ToNlcst<'a> {
    tree: Option<&'a Node>,
    file: Option<&'a VFile>,
    parser: Option<ParserSource<'a>>,
    config: ConvertConfig,
}

impl<'a> ToNlcst<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the hast tree to convert.
    pub fn tree(mut self, tree: &'a Node) -> Self {
        self.tree = Some(tree);
        self
    }

    /// Sets the file `tree` was parsed from.
    pub fn file(mut self, file: &'a VFile) -> Self {
        self.file = Some(file);
        self
    }

    /// Sets the natural-language parser.
    pub fn parser(mut self, parser: impl Into<ParserSource<'a>>) -> Self {
        self.parser = Some(parser.into());
        self
    }

    pub fn config(mut self, config: ConvertConfig) -> Self {
        self.config = config;
        self
    }

    /// Converts the tree.
    ///
    /// # Errors
    ///
    /// Returns [`VerbaError::ExpectedNode`], [`VerbaError::ExpectedFile`], or
    /// [`VerbaError::ExpectedParser`] when the tree, file, or parser is
    /// missing, and [`VerbaError::ExpectedPosition`] when the tree has no
    /// line and column on its start point.
    pub fn convert(self) -> Result<Root> {
        let tree = self.tree.ok_or(VerbaError::ExpectedNode)?;
        let file = self.file.ok_or(VerbaError::ExpectedFile)?;
        let parser = self.parser.ok_or(VerbaError::ExpectedParser)?;

        if tree.start().and_then(|point| point.line_column()).is_none() {
            return Err(VerbaError::ExpectedPosition);
        }

        let doc = file.value();
        let location = Location::new(doc);
        let mut converter = Converter {
            classifier: Classifier::new(&self.config),
            location: &location,
            parser: parser.resolve(),
            results: Vec::new(),
        };

        converter.find(tree);

        let position = match (location.to_point(0), location.to_point(doc.len())) {
            (Some(start), Some(end)) => Some(Position::new(start, end)),
            _ => None,
        };

        debug!(paragraphs = converter.results.len(), length = doc.len(), "converted hast to nlcst");

        Ok(Root { children: converter.results, position })
    }
}

/// Turns a hast tree into an nlcst tree.
///
/// `tree` must have positional info and `file` must hold the document it
/// was parsed from.
pub fn to_nlcst<'a>(tree: &'a Node, file: &'a VFile, parser: impl Into<ParserSource<'a>>) -> Result<Root> {
    ToNlcst::new().tree(tree).file(file).parser(parser).convert()
}

/// Turns a hast tree given as JSON into an nlcst tree.
///
/// # Errors
///
/// Returns [`VerbaError::ExpectedNode`] if `tree` is not an object with a
/// string `type`.
pub fn to_nlcst_value<'a>(
    tree: &serde_json::Value, file: &'a VFile, parser: impl Into<ParserSource<'a>>,
) -> Result<Root> {
    let parser = parser.into();
    let tree = Node::from_value(tree.clone())?;
    ToNlcst::new().tree(&tree).file(file).parser(parser).convert()
}

/// State of one conversion.
struct Converter<'a> {
    classifier: Classifier<'a>,
    location: &'a Location,
    parser: ParserHandle<'a>,
    results: Vec<Paragraph>,
}

impl Converter<'_> {
    /// Looks for paragraphs in `node`.
    fn find(&mut self, node: &Node) {
        match node {
            Node::Root(root) => self.find_all(&root.children),
            Node::Element(element) if !self.classifier.is_ignored(node) => {
                if content::is_explicit_paragraph(node) {
                    self.add(std::slice::from_ref(node));
                } else if content::is_flow_accepting(node) {
                    let children = self.flatten_all(&element.children);
                    self.implicit(&children);
                } else {
                    self.find_all(&element.children);
                }
            }
            _ => {}
        }
    }

    fn find_all<'n>(&mut self, children: impl IntoIterator<Item = &'n Node>) {
        for child in children {
            self.find(child);
        }
    }

    /// Unravels `<a>`, `<ins>`, `<del>`, and `<map>`, unless ignored.
    fn flatten_all<'n>(&self, children: &'n [Node]) -> Vec<&'n Node> {
        let mut results = Vec::new();

        for child in children {
            if content::is_unwrappable(child) && !self.classifier.is_ignored(child) {
                results.extend(self.flatten_all(child.children()));
            } else {
                results.push(child);
            }
        }

        results
    }

    /// Groups runs of phrasing content into implicit paragraphs.
    fn implicit(&mut self, children: &[&Node]) {
        let mut start: Option<usize> = None;
        let mut viable = false;

        for index in 0..=children.len() {
            let child = children.get(index).copied();

            match (child, start) {
                (Some(node), _) if content::is_phrasing(node) => {
                    if start.is_none() {
                        start = Some(index);
                    }

                    if !viable && !content::is_embedded(node) && !content::is_whitespace(node) {
                        viable = true;
                    }
                }
                (Some(node), None) => {
                    self.find(node);
                }
                (_, Some(from)) => {
                    let run = &children[from..index];

                    if viable {
                        self.add(run.iter().copied());
                    } else {
                        trace!(nodes = run.len(), "skipping run without text");
                        self.find_all(run.iter().copied());
                    }

                    if let Some(node) = child {
                        self.find(node);
                    }

                    viable = false;
                    start = None;
                }
                (None, None) => {}
            }
        }
    }

    /// Adds one paragraph built from `nodes`, if they have any content.
    fn add<'n>(&mut self, nodes: impl IntoIterator<Item = &'n Node>) {
        let result = self.all(nodes);

        let (Some(first), Some(last)) = (result.first(), result.last()) else {
            return;
        };

        let position = span(first.position(), last.position());
        let mut sentence = Sentence { children: result, position };

        for plugin in self.parser.sentence_plugins() {
            plugin(&mut sentence);
        }

        let mut paragraph = Paragraph { children: split_sentence(sentence), position };

        for plugin in self.parser.paragraph_plugins() {
            plugin(&mut paragraph);
        }

        trace!(sentences = paragraph.children.len(), "added paragraph");
        self.results.push(paragraph);
    }

    /// Converts one node into sentence content.
    ///
    /// Returns `None` for nodes contributing nothing of their own.
    fn one(&self, node: &Node) -> Option<Vec<SentenceContent>> {
        let mut replacement = match node {
            Node::Text(text) => self.parser.tokenize(&text.value),
            Node::Element(element) if !self.classifier.is_ignored(node) => {
                if element.is("wbr") {
                    vec![SentenceContent::white_space(" ")]
                } else if element.is("br") {
                    vec![SentenceContent::white_space("\n")]
                } else if self.classifier.is_source(node) {
                    vec![SentenceContent::source(node.text_content())]
                } else {
                    return Some(self.all(&element.children));
                }
            }
            _ => return None,
        };

        let offset = node
            .start()
            .and_then(|point| point.line_column())
            .and_then(|(line, column)| self.location.to_offset(line, column));

        if let Some(offset) = offset {
            self.patch(&mut replacement, offset);
        }

        Some(replacement)
    }

    fn all<'n>(&self, nodes: impl IntoIterator<Item = &'n Node>) -> Vec<SentenceContent> {
        nodes.into_iter().filter_map(|node| self.one(node)).flatten().collect()
    }

    /// Positions each node in `nodes`, the first starting at `offset`.
    ///
    /// nlcst nodes are concrete, so where each ends follows from its text.
    fn patch(&self, nodes: &mut [SentenceContent], offset: usize) {
        let mut from = offset;

        for node in nodes {
            if let Some(children) = node.children_mut() {
                self.patch(children, from);
            }

            let to = from + node.text_len();
            let position = match (self.location.to_point(from), self.location.to_point(to)) {
                (Some(start), Some(end)) => Some(Position::new(start, end)),
                _ => None,
            };
            node.set_position(position);

            from = to;
        }
    }
}

/// Position from the start of `first` to the end of `last`.
fn span(first: Option<&Position>, last: Option<&Position>) -> Option<Position> {
    Some(Position::new(first?.start, last?.end))
}

fn is_terminal_marker(node: &SentenceContent) -> bool {
    match node {
        SentenceContent::Punctuation(literal) => TERMINAL_MARKER.is_match(&literal.value),
        _ => false,
    }
}

/// Splits a sentence after each terminal marker.
///
/// The last group is closed at the end of the content, so content without
/// terminal markers still yields one sentence.
fn split_sentence(sentence: Sentence) -> Vec<Sentence> {
    let mut result = Vec::new();
    let mut pending = Vec::new();
    let count = sentence.children.len();

    for (index, token) in sentence.children.into_iter().enumerate() {
        let close = index == count - 1 || is_terminal_marker(&token);
        pending.push(token);

        if close {
            let children = std::mem::take(&mut pending);
            let position = span(
                children.first().and_then(SentenceContent::position),
                children.last().and_then(SentenceContent::position),
            );
            result.push(Sentence { children, position });
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hast::Element;
    use crate::nlcst::Extension;
    use crate::parser::BasicParser;
    use crate::serialize::to_html;

    fn convert(mut tree: Node) -> (Root, String) {
        let html = to_html(&mut tree);
        let file = VFile::new(html.clone());
        let root = to_nlcst(&tree, &file, &BasicParser::new()).unwrap();
        (root, html)
    }

    fn el(tag: &str, children: Vec<Node>) -> Node {
        Element::new(tag).with_children(children).into()
    }

    fn texts(root: &Root) -> Vec<String> {
        root.children.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_explicit_paragraph() {
        let (root, html) = convert(Node::root(vec![el("p", vec![Node::text("foo")])]));
        assert_eq!(html, "<p>foo</p>");
        assert_eq!(root.children.len(), 1);

        let sentence = &root.children[0].children[0];
        assert_eq!(sentence.children.len(), 1);

        let word = &sentence.children[0];
        assert_eq!(word.kind(), "WordNode");
        assert_eq!(word.position().unwrap().offsets(), Some(3..6));
        assert_eq!(word.children().unwrap()[0].position().unwrap().offsets(), Some(3..6));
        assert_eq!(sentence.position.unwrap().offsets(), Some(3..6));
        assert_eq!(root.children[0].position.unwrap().offsets(), Some(3..6));
        assert_eq!(root.position.unwrap().offsets(), Some(0..10));
    }

    #[test]
    fn test_implicit_paragraphs_around_explicit() {
        let (root, _) =
            convert(el("div", vec![Node::text("foo"), el("p", vec![Node::text("bar")]), Node::text("baz")]));
        assert_eq!(texts(&root), ["foo", "bar", "baz"]);
    }

    #[test]
    fn test_whitespace_between_blocks_is_dropped() {
        let (root, _) =
            convert(el("div", vec![Node::text("\n  "), el("p", vec![Node::text("x")]), Node::text("\n")]));
        assert_eq!(texts(&root), ["x"]);
    }

    #[test]
    fn test_empty_flow_container() {
        let (root, _) = convert(el("div", vec![]));
        assert!(root.children.is_empty());
    }

    #[test]
    fn test_image_only_flow_container() {
        let (root, _) = convert(el("div", vec![Element::new("img").into()]));
        assert!(root.children.is_empty());
    }

    #[test]
    fn test_image_then_text_is_viable() {
        let (root, _) = convert(el("div", vec![Element::new("img").into(), Node::text(" caption")]));
        assert_eq!(texts(&root), [" caption"]);
    }

    #[test]
    fn test_non_viable_run_is_searched() {
        let (root, _) = convert(el(
            "div",
            vec![el("video", vec![el("div", vec![Node::text("deep")])]), el("section", vec![])],
        ));
        assert_eq!(texts(&root), ["deep"]);
    }

    #[test]
    fn test_other_containers_are_searched() {
        let (root, _) = convert(el(
            "table",
            vec![el("tr", vec![el("td", vec![Node::text("a")]), el("td", vec![Node::text("b")])])],
        ));
        assert_eq!(texts(&root), ["a", "b"]);
    }

    #[test]
    fn test_text_outside_flow_is_skipped() {
        let (root, _) = convert(el("span", vec![Node::text("loose")]));
        assert!(root.children.is_empty());
    }

    #[test]
    fn test_br_and_wbr() {
        let (root, _) = convert(el(
            "p",
            vec![Node::text("a"), Element::new("br").into(), Node::text("b"), Element::new("wbr").into()],
        ));

        let leaves: Vec<_> =
            root.children[0].children[0].children.iter().map(|node| (node.kind(), node.to_string())).collect();
        assert_eq!(
            leaves,
            [
                ("WordNode", "a".to_string()),
                ("WhiteSpaceNode", "\n".to_string()),
                ("WordNode", "b".to_string()),
                ("WhiteSpaceNode", " ".to_string())
            ]
        );

        let br = &root.children[0].children[0].children[1];
        assert_eq!(br.position().unwrap().offsets(), Some(4..5));
    }

    #[test]
    fn test_source_nodes() {
        let (root, html) = convert(el(
            "p",
            vec![Node::text("Call "), el("code", vec![Node::text("x()")]), Node::text(" now")],
        ));
        assert_eq!(html, "<p>Call <code>x()</code> now</p>");

        let source = root.children[0].children[0].children.iter().find(|node| node.kind() == "SourceNode").unwrap();
        assert_eq!(source.to_string(), "x()");
        assert_eq!(source.position().unwrap().offsets(), Some(8..11));
    }

    #[test]
    fn test_data_nlcst() {
        let (root, _) = convert(Node::root(vec![
            el(
                "p",
                vec![
                    Node::text("This is "),
                    Element::new("span")
                        .with_property("data-nlcst", "ignore")
                        .with_children(vec![Node::text("hidden")])
                        .into(),
                    Node::text("."),
                ],
            ),
            Element::new("p").with_property("data-nlcst", "ignore").with_children(vec![Node::text("Gone.")]).into(),
            Element::new("p").with_property("data-nlcst", "source").with_children(vec![Node::text("All code")]).into(),
        ]));

        assert_eq!(texts(&root), ["This is .", "All code"]);
        assert_eq!(root.children[1].children[0].children[0].kind(), "SourceNode");
    }

    #[test]
    fn test_ignored_elements() {
        let (root, _) = convert(el(
            "div",
            vec![
                Node::text("a "),
                el("script", vec![Node::text("var x;")]),
                el("del", vec![Node::text("old")]),
                Node::text("b"),
            ],
        ));
        assert_eq!(texts(&root), ["a b"]);
    }

    #[test]
    fn test_unwrapped_links() {
        let (root, _) = convert(el(
            "div",
            vec![
                Node::text("a "),
                el("a", vec![Node::text("b "), el("ins", vec![Node::text("c")])]),
                Node::text(" d"),
                el("ul", vec![el("li", vec![Node::text("e")])]),
            ],
        ));
        assert_eq!(texts(&root), ["a b c d", "e"]);
    }

    #[test]
    fn test_link_wrapping_blocks() {
        let (root, _) = convert(el("div", vec![el("a", vec![el("p", vec![Node::text("x")]), Node::text("y")])]));
        assert_eq!(texts(&root), ["x", "y"]);
    }

    #[test]
    fn test_sentence_splitting() {
        let (root, _) = convert(el("p", vec![Node::text("One. Two?! Three")]));
        let sentences: Vec<_> = root.children[0].children.iter().map(ToString::to_string).collect();
        assert_eq!(sentences, ["One.", " Two?!", " Three"]);

        let second = &root.children[0].children[1];
        assert_eq!(second.position.unwrap().offsets(), Some(7..13));
    }

    #[test]
    fn test_comment_and_doctype_contribute_nothing() {
        let (root, html) = convert(Node::root(vec![Node::doctype(), Node::comment("note")]));
        assert!(root.children.is_empty());
        assert_eq!(root.position.unwrap().offsets(), Some(0..html.len()));
    }

    #[test]
    fn test_plugins() {
        let parser = BasicParser::new()
            .use_sentence_plugin(|sentence| sentence.children.retain(|node| node.kind() != "WhiteSpaceNode"))
            .use_paragraph_plugin(|paragraph| paragraph.children.truncate(1));

        let mut tree = el("p", vec![Node::text("a b. c")]);
        let file = VFile::new(to_html(&mut tree));
        let root = to_nlcst(&tree, &file, &parser).unwrap();

        assert_eq!(texts(&root), ["ab."]);
    }

    /// Emits `:)` as an emoticon and `#tag` as a hashtag parent.
    struct EmoticonParser;

    impl crate::parser::Parser for EmoticonParser {
        fn tokenize(&self, value: &str) -> Vec<SentenceContent> {
            value
                .split_inclusive(' ')
                .flat_map(|chunk| {
                    let (token, space) = match chunk.strip_suffix(' ') {
                        Some(token) => (token, Some(SentenceContent::white_space(" "))),
                        None => (chunk, None),
                    };
                    let token = match token {
                        ":)" => SentenceContent::Extension(Extension::literal("EmoticonNode", token)),
                        _ if token.starts_with('#') => SentenceContent::Extension(Extension::parent(
                            "HashtagNode",
                            vec![SentenceContent::symbol("#"), SentenceContent::word(&token[1..])],
                        )),
                        _ => SentenceContent::word(token),
                    };
                    std::iter::once(token).chain(space)
                })
                .collect()
        }
    }

    #[test]
    fn test_extension_kinds_are_positioned() {
        let mut tree = el("p", vec![Node::text("hi :) #rust")]);
        let file = VFile::new(to_html(&mut tree));
        let root = to_nlcst(&tree, &file, &EmoticonParser).unwrap();

        let sentence = &root.children[0].children[0];
        let kinds: Vec<_> = sentence.children.iter().map(SentenceContent::kind).collect();
        assert_eq!(kinds, ["WordNode", "WhiteSpaceNode", "EmoticonNode", "WhiteSpaceNode", "HashtagNode"]);

        let emoticon = &sentence.children[2];
        assert_eq!(emoticon.position().unwrap().offsets(), Some(6..8));

        let hashtag = &sentence.children[4];
        assert_eq!(hashtag.position().unwrap().offsets(), Some(9..14));
        let inner = hashtag.children().unwrap();
        assert_eq!(inner[0].position().unwrap().offsets(), Some(9..10));
        assert_eq!(inner[1].position().unwrap().offsets(), Some(10..14));
        assert_eq!(sentence.position.unwrap().offsets(), Some(3..14));
    }

    #[test]
    fn test_config_tags() {
        let mut tree = el(
            "div",
            vec![Node::text("a "), el("kbd", vec![Node::text("Ctrl")]), el("aside", vec![Node::text("x")])],
        );
        let file = VFile::new(to_html(&mut tree));
        let config = ConvertConfig::builder().ignore_tag("aside").source_tag("kbd").build();

        let root = ToNlcst::new().tree(&tree).file(&file).parser(&BasicParser::new()).config(config).convert().unwrap();

        assert_eq!(texts(&root), ["a Ctrl"]);
        assert_eq!(root.children[0].children[0].children[2].kind(), "SourceNode");
    }

    #[test]
    fn test_nodes_without_position_stay_unpositioned() {
        let mut tree = el("p", vec![Node::text("foo")]);
        let file = VFile::new(to_html(&mut tree));
        if let Node::Element(p) = &mut tree {
            if let Node::Text(text) = &mut p.children[0] {
                text.position = None;
            }
        }

        let root = to_nlcst(&tree, &file, &BasicParser::new()).unwrap();
        assert_eq!(root.children.len(), 1);
        assert!(root.children[0].position.is_none());
        assert!(root.children[0].children[0].children[0].position().is_none());
    }

    #[test]
    fn test_split_without_terminal() {
        let sentences =
            split_sentence(Sentence::new(vec![SentenceContent::word("a"), SentenceContent::white_space(" ")]));
        assert_eq!(sentences.len(), 1);
        assert_eq!(sentences[0].children.len(), 2);
    }

    #[test]
    fn test_split_ignores_non_terminal_punctuation() {
        let sentences = split_sentence(Sentence::new(vec![
            SentenceContent::word("a"),
            SentenceContent::punctuation(","),
            SentenceContent::symbol("."),
            SentenceContent::word("b"),
            SentenceContent::punctuation("…"),
        ]));
        assert_eq!(sentences.len(), 1);
    }
}
