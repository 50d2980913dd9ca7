pub mod content;
pub mod convert;
pub mod error;
pub mod hast;
pub mod location;
pub mod nlcst;
pub mod parser;
pub mod serialize;
pub mod unist;
pub mod vfile;

pub use convert::{ConvertConfig, ConvertConfigBuilder, ToNlcst, to_nlcst, to_nlcst_value};
pub use error::{Result, VerbaError};
pub use location::Location;
pub use nlcst::{Extension, Literal, Paragraph, Root, Sentence, SentenceContent, Word};
pub use parser::{BasicParser, ParagraphPlugin, Parser, ParserSource, SentencePlugin};
pub use serialize::to_html;
pub use unist::{Point, Position};
pub use vfile::{VFile, VFileMessage};
