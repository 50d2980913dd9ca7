//! The natural-language tokenizer the converter delegates to.
//!
//! The converter never decides where words begin or end: it hands every
//! text node to a [`Parser`] and positions whatever comes back. Parsers can
//! also carry plugins that post-process each assembled sentence and
//! paragraph.
//!
//! A parser is given to the converter either as an instance or as a type to
//! construct, see [`ParserSource`]. [`BasicParser`] is a small reference
//! tokenizer good enough for tests and simple Latin-script prose.

use std::fmt;
use std::ops::Deref;
use std::sync::LazyLock;

use regex::Regex;

use crate::nlcst::{Paragraph, Sentence, SentenceContent};

/// Hook run on every sentence before it is split at terminal markers.
pub type SentencePlugin = Box<dyn Fn(&mut Sentence) + Send + Sync>;

/// Hook run on every paragraph before it is added to the root.
pub type ParagraphPlugin = Box<dyn Fn(&mut Paragraph) + Send + Sync>;

/// A natural-language tokenizer.
pub trait Parser {
    /// Splits text into words, punctuation, symbols, and whitespace.
    ///
    /// The concatenated text of the returned nodes must equal `value`.
    fn tokenize(&self, value: &str) -> Vec<SentenceContent>;

    fn sentence_plugins(&self) -> &[SentencePlugin] {
        &[]
    }

    fn paragraph_plugins(&self) -> &[ParagraphPlugin] {
        &[]
    }
}

/// How the converter gets hold of a parser.
#[derive(Clone, Copy)]
pub enum ParserSource<'a> {
    /// An already constructed parser, borrowed for the conversion.
    Instance(&'a dyn Parser),
    /// A constructor, called once per conversion.
    Constructor(fn() -> Box<dyn Parser>),
}

impl ParserSource<'static> {
    /// A source constructing a fresh `P` for each conversion.
    ///
    /// # Example
    ///
    /// ```rust
    /// use verba_core::{BasicParser, ParserSource};
    ///
    /// let source = ParserSource::constructor::<BasicParser>();
    /// ```
    pub fn constructor<P: Parser + Default + 'static>() -> Self {
        fn construct<P: Parser + Default + 'static>() -> Box<dyn Parser> {
            Box::new(P::default())
        }

        ParserSource::Constructor(construct::<P>)
    }
}

impl<'a> ParserSource<'a> {
    pub(crate) fn resolve(self) -> ParserHandle<'a> {
        match self {
            ParserSource::Instance(parser) => ParserHandle::Borrowed(parser),
            ParserSource::Constructor(construct) => ParserHandle::Owned(construct()),
        }
    }
}

impl<'a, P: Parser> From<&'a P> for ParserSource<'a> {
    fn from(parser: &'a P) -> Self {
        ParserSource::Instance(parser)
    }
}

impl<'a, 'p: 'a> From<&'a (dyn Parser + 'p)> for ParserSource<'a> {
    fn from(parser: &'a (dyn Parser + 'p)) -> Self {
        ParserSource::Instance(parser)
    }
}

impl fmt::Debug for ParserSource<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParserSource::Instance(_) => f.write_str("ParserSource::Instance"),
            ParserSource::Constructor(_) => f.write_str("ParserSource::Constructor"),
        }
    }
}

/// A parser resolved from a [`ParserSource`].
pub(crate) enum ParserHandle<'a> {
    Borrowed(&'a dyn Parser),
    Owned(Box<dyn Parser>),
}

impl<'a> Deref for ParserHandle<'a> {
    type Target = dyn Parser + 'a;

    fn deref(&self) -> &Self::Target {
        match self {
            ParserHandle::Borrowed(parser) => *parser,
            ParserHandle::Owned(parser) => parser.as_ref(),
        }
    }
}

/// Words (with inner apostrophes), whitespace, terminal marker runs, single
/// punctuation characters, and anything else as a symbol.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"(?s)(?P<word>[\p{L}\p{N}\p{M}]+(?:['’][\p{L}\p{N}\p{M}]+)*)",
        r"|(?P<space>\s+)",
        r"|(?P<terminal>[!.?\x{2026}\x{203D}]+)",
        r"|(?P<punctuation>\p{P})",
        r"|(?P<symbol>.)",
    ))
    .expect("token expression is valid")
});

/// A regex-driven tokenizer for Latin-script text.
///
/// # Example
///
/// ```rust
/// use verba_core::{BasicParser, Parser};
///
/// let tokens = BasicParser::new().tokenize("Hi, you!");
/// let kinds: Vec<_> = tokens.iter().map(|token| token.kind()).collect();
/// assert_eq!(kinds, ["WordNode", "PunctuationNode", "WhiteSpaceNode", "WordNode", "PunctuationNode"]);
/// ```
#[derive(Default)]
pub struct BasicParser {
    sentence_plugins: Vec<SentencePlugin>,
    paragraph_plugins: Vec<ParagraphPlugin>,
}

impl BasicParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a hook run on every sentence.
    pub fn use_sentence_plugin(mut self, plugin: impl Fn(&mut Sentence) + Send + Sync + 'static) -> Self {
        self.sentence_plugins.push(Box::new(plugin));
        self
    }

    /// Registers a hook run on every paragraph.
    pub fn use_paragraph_plugin(mut self, plugin: impl Fn(&mut Paragraph) + Send + Sync + 'static) -> Self {
        self.paragraph_plugins.push(Box::new(plugin));
        self
    }
}

impl Parser for BasicParser {
    fn tokenize(&self, value: &str) -> Vec<SentenceContent> {
        TOKEN
            .captures_iter(value)
            .filter_map(|captures| {
                if let Some(word) = captures.name("word") {
                    Some(SentenceContent::word(word.as_str()))
                } else if let Some(space) = captures.name("space") {
                    Some(SentenceContent::white_space(space.as_str()))
                } else if let Some(terminal) = captures.name("terminal") {
                    Some(SentenceContent::punctuation(terminal.as_str()))
                } else if let Some(punctuation) = captures.name("punctuation") {
                    Some(SentenceContent::punctuation(punctuation.as_str()))
                } else {
                    captures.name("symbol").map(|symbol| SentenceContent::symbol(symbol.as_str()))
                }
            })
            .collect()
    }

    fn sentence_plugins(&self) -> &[SentencePlugin] {
        &self.sentence_plugins
    }

    fn paragraph_plugins(&self) -> &[ParagraphPlugin] {
        &self.paragraph_plugins
    }
}

impl fmt::Debug for BasicParser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BasicParser")
            .field("sentence_plugins", &self.sentence_plugins.len())
            .field("paragraph_plugins", &self.paragraph_plugins.len())
            .finish()
    }
}
