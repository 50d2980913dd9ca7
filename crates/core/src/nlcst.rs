//! The natural-language syntax tree produced by the converter.
//!
//! The tree is concrete: every character of the text it was built from is
//! present in exactly one literal node, so the text of any node is the
//! concatenation of the literals below it. [`Display`](std::fmt::Display)
//! writes that text, and [`text_len`](SentenceContent::text_len) measures it
//! without allocating.
//!
//! ```text
//! RootNode
//! └─ ParagraphNode
//!    └─ SentenceNode
//!       ├─ WordNode
//!       │  └─ TextNode "Hello"
//!       ├─ PunctuationNode ","
//!       ├─ WhiteSpaceNode " "
//!       └─ SourceNode "x()"
//! ```
//!
//! Tokenizers may add kinds of their own through [`Extension`].

use std::fmt;

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

use crate::Result;
use crate::unist::Position;

/// Document root: every paragraph found in the HTML tree.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "RootNode")]
pub struct Root {
    pub children: Vec<Paragraph>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// A paragraph: one or more sentences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "ParagraphNode")]
pub struct Paragraph {
    pub children: Vec<Sentence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// A sentence: words, punctuation, whitespace, and source.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "SentenceNode")]
pub struct Sentence {
    pub children: Vec<SentenceContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// A word: a parent of text, symbols, and punctuation.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Word {
    pub children: Vec<SentenceContent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

/// A node holding a piece of text verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Literal {
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Literal {
    pub fn new(value: impl Into<String>) -> Self {
        Self { value: value.into(), position: None }
    }
}

/// A node kind a tokenizer introduces on top of the standard ones, such as
/// `EmoticonNode`. It holds either a `value` or `children`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Extension {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<SentenceContent>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,
}

impl Extension {
    /// A leaf of kind `kind`.
    pub fn literal(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self { kind: kind.into(), value: Some(value.into()), children: None, position: None }
    }

    /// A parent of kind `kind`.
    pub fn parent(kind: impl Into<String>, children: Vec<SentenceContent>) -> Self {
        Self { kind: kind.into(), value: None, children: Some(children), position: None }
    }
}

/// Content of sentences (and of words).
#[derive(Debug, Clone, PartialEq)]
pub enum SentenceContent {
    Word(Word),
    Punctuation(Literal),
    Symbol(Literal),
    WhiteSpace(Literal),
    /// Verbatim, non-natural-language text such as code.
    Source(Literal),
    Text(Literal),
    /// Any other kind, serialized under its own `type`.
    Extension(Extension),
}

/// Types with a dedicated [`SentenceContent`] variant.
const STANDARD_KINDS: &[&str] =
    &["WordNode", "PunctuationNode", "SymbolNode", "WhiteSpaceNode", "SourceNode", "TextNode"];

#[derive(Serialize)]
#[serde(tag = "type")]
enum StandardRef<'a> {
    #[serde(rename = "WordNode")]
    Word(&'a Word),
    #[serde(rename = "PunctuationNode")]
    Punctuation(&'a Literal),
    #[serde(rename = "SymbolNode")]
    Symbol(&'a Literal),
    #[serde(rename = "WhiteSpaceNode")]
    WhiteSpace(&'a Literal),
    #[serde(rename = "SourceNode")]
    Source(&'a Literal),
    #[serde(rename = "TextNode")]
    Text(&'a Literal),
}

#[derive(Deserialize)]
#[serde(tag = "type")]
enum Standard {
    #[serde(rename = "WordNode")]
    Word(Word),
    #[serde(rename = "PunctuationNode")]
    Punctuation(Literal),
    #[serde(rename = "SymbolNode")]
    Symbol(Literal),
    #[serde(rename = "WhiteSpaceNode")]
    WhiteSpace(Literal),
    #[serde(rename = "SourceNode")]
    Source(Literal),
    #[serde(rename = "TextNode")]
    Text(Literal),
}

impl Serialize for SentenceContent {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        match self {
            SentenceContent::Word(word) => StandardRef::Word(word).serialize(serializer),
            SentenceContent::Punctuation(literal) => StandardRef::Punctuation(literal).serialize(serializer),
            SentenceContent::Symbol(literal) => StandardRef::Symbol(literal).serialize(serializer),
            SentenceContent::WhiteSpace(literal) => StandardRef::WhiteSpace(literal).serialize(serializer),
            SentenceContent::Source(literal) => StandardRef::Source(literal).serialize(serializer),
            SentenceContent::Text(literal) => StandardRef::Text(literal).serialize(serializer),
            SentenceContent::Extension(extension) => extension.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for SentenceContent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        let kind = value
            .get("type")
            .and_then(Value::as_str)
            .ok_or_else(|| <D::Error as de::Error>::missing_field("type"))?;

        if !STANDARD_KINDS.contains(&kind) {
            return Extension::deserialize(value)
                .map(SentenceContent::Extension)
                .map_err(<D::Error as de::Error>::custom);
        }

        let content = match Standard::deserialize(value).map_err(<D::Error as de::Error>::custom)? {
            Standard::Word(word) => SentenceContent::Word(word),
            Standard::Punctuation(literal) => SentenceContent::Punctuation(literal),
            Standard::Symbol(literal) => SentenceContent::Symbol(literal),
            Standard::WhiteSpace(literal) => SentenceContent::WhiteSpace(literal),
            Standard::Source(literal) => SentenceContent::Source(literal),
            Standard::Text(literal) => SentenceContent::Text(literal),
        };
        Ok(content)
    }
}

impl SentenceContent {
    /// A word holding one text node.
    pub fn word(value: impl Into<String>) -> Self {
        SentenceContent::Word(Word { children: vec![SentenceContent::text(value)], position: None })
    }

    pub fn punctuation(value: impl Into<String>) -> Self {
        SentenceContent::Punctuation(Literal::new(value))
    }

    pub fn symbol(value: impl Into<String>) -> Self {
        SentenceContent::Symbol(Literal::new(value))
    }

    pub fn white_space(value: impl Into<String>) -> Self {
        SentenceContent::WhiteSpace(Literal::new(value))
    }

    pub fn source(value: impl Into<String>) -> Self {
        SentenceContent::Source(Literal::new(value))
    }

    pub fn text(value: impl Into<String>) -> Self {
        SentenceContent::Text(Literal::new(value))
    }

    /// The unist `type` of this node.
    pub fn kind(&self) -> &str {
        match self {
            SentenceContent::Extension(extension) => &extension.kind,
            SentenceContent::Word(_) => "WordNode",
            SentenceContent::Punctuation(_) => "PunctuationNode",
            SentenceContent::Symbol(_) => "SymbolNode",
            SentenceContent::WhiteSpace(_) => "WhiteSpaceNode",
            SentenceContent::Source(_) => "SourceNode",
            SentenceContent::Text(_) => "TextNode",
        }
    }

    fn literal(&self) -> Option<&Literal> {
        match self {
            SentenceContent::Word(_) | SentenceContent::Extension(_) => None,
            SentenceContent::Punctuation(literal)
            | SentenceContent::Symbol(literal)
            | SentenceContent::WhiteSpace(literal)
            | SentenceContent::Source(literal)
            | SentenceContent::Text(literal) => Some(literal),
        }
    }

    /// The literal value, for leaf nodes.
    pub fn value(&self) -> Option<&str> {
        match self {
            SentenceContent::Extension(extension) => extension.value.as_deref(),
            _ => self.literal().map(|literal| literal.value.as_str()),
        }
    }

    /// Children, for parent nodes.
    pub fn children(&self) -> Option<&[SentenceContent]> {
        match self {
            SentenceContent::Word(word) => Some(&word.children),
            SentenceContent::Extension(extension) => extension.children.as_deref(),
            _ => None,
        }
    }

    pub fn children_mut(&mut self) -> Option<&mut [SentenceContent]> {
        match self {
            SentenceContent::Word(word) => Some(&mut word.children),
            SentenceContent::Extension(extension) => extension.children.as_deref_mut(),
            _ => None,
        }
    }

    pub fn position(&self) -> Option<&Position> {
        match self {
            SentenceContent::Word(word) => word.position.as_ref(),
            SentenceContent::Extension(extension) => extension.position.as_ref(),
            _ => self.literal().and_then(|literal| literal.position.as_ref()),
        }
    }

    pub fn set_position(&mut self, position: Option<Position>) {
        match self {
            SentenceContent::Word(word) => word.position = position,
            SentenceContent::Extension(extension) => extension.position = position,
            SentenceContent::Punctuation(literal)
            | SentenceContent::Symbol(literal)
            | SentenceContent::WhiteSpace(literal)
            | SentenceContent::Source(literal)
            | SentenceContent::Text(literal) => literal.position = position,
        }
    }

    /// Byte length of the text this node represents.
    pub fn text_len(&self) -> usize {
        match self.children() {
            Some(children) => children.iter().map(SentenceContent::text_len).sum(),
            None => self.value().map_or(0, str::len),
        }
    }
}

impl fmt::Display for SentenceContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.children() {
            Some(children) => children.iter().try_for_each(|child| fmt::Display::fmt(child, f)),
            None => f.write_str(self.value().unwrap_or_default()),
        }
    }
}

impl Sentence {
    pub fn new(children: Vec<SentenceContent>) -> Self {
        Self { children, position: None }
    }

    pub fn text_len(&self) -> usize {
        self.children.iter().map(SentenceContent::text_len).sum()
    }
}

impl fmt::Display for Sentence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.children.iter().try_for_each(|child| fmt::Display::fmt(child, f))
    }
}

impl Paragraph {
    pub fn new(children: Vec<Sentence>) -> Self {
        Self { children, position: None }
    }

    pub fn text_len(&self) -> usize {
        self.children.iter().map(Sentence::text_len).sum()
    }
}

impl fmt::Display for Paragraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.children.iter().try_for_each(|child| fmt::Display::fmt(child, f))
    }
}

impl Root {
    /// Serializes the tree to a JSON value.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }

    /// Serializes the tree to a JSON string.
    pub fn to_json_string(&self, pretty: bool) -> Result<String> {
        let json = if pretty { serde_json::to_string_pretty(self)? } else { serde_json::to_string(self)? };
        Ok(json)
    }

    /// All sentences, in document order.
    pub fn sentences(&self) -> impl Iterator<Item = &Sentence> {
        self.children.iter().flat_map(|paragraph| paragraph.children.iter())
    }
}

/// Paragraph texts are joined by blank lines.
impl fmt::Display for Root {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, paragraph) in self.children.iter().enumerate() {
            if index > 0 {
                f.write_str("\n\n")?;
            }
            fmt::Display::fmt(paragraph, f)?;
        }
        Ok(())
    }
}
