extern crate core;

mod error;
mod scalar;

pub use error::{ScanResult, YamlError, YamlResult};
pub use scalar::Scalar;

use std::borrow::Cow;
use std::fmt::{Display, Formatter};

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ScalarType {
    /// Unquoted string type like:
    /// ```yaml
    ///   multiline
    ///   string
    /// ```
    Plain,
    /// Folded string type like:
    /// ```yaml
    ///   >
    ///     folded
    ///     string
    /// ```
    Folded,
    /// Literal string type like:
    /// ```yaml
    ///   |
    ///     literal
    ///     string
    /// ```
    Literal,
    /// Single quote string which permits any symbol inside
    /// E.g. :
    /// ```yaml
    /// ' This is a quoted string
    ///    with ''quoted'' string within.'
    /// ```
    SingleQuote,
    /// Double quote string which supports escape sequences
    /// E.g. :
    /// ```yaml
    /// "This is a quoted string
    ///    with \"double quoted\" string within."
    /// ```
    DoubleQuote,
}

impl Display for ScalarType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ScalarType::Plain => write!(f, ":"),
            ScalarType::Folded => write!(f, ">"),
            ScalarType::Literal => write!(f, "|"),
            ScalarType::SingleQuote => write!(f, "'"),
            ScalarType::DoubleQuote => write!(f, "\""),
        }
    }
}

/// Kind of the token under the tokenizer cursor, without its payload.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum TokenKind {
    /// Nothing was read yet.
    None,
    StreamStart,
    StreamEnd,
    DocumentStart,
    DocumentEnd,
    BlockMappingStart,
    BlockSequenceStart,
    BlockEntryStart,
    BlockEnd,
    FlowMappingStart,
    FlowMappingEnd,
    FlowSequenceStart,
    FlowSequenceEnd,
    FlowEntryStart,
    KeyStart,
    ValueStart,
    PlainScalar,
    SingleQuotedScalar,
    DoubleQuotedScalar,
    LiteralScalar,
    FoldedScalar,
    Tag,
    Anchor,
    Alias,
    Directive,
}

impl TokenKind {
    #[must_use]
    pub fn is_scalar(self) -> bool {
        matches!(
            self,
            TokenKind::PlainScalar
                | TokenKind::SingleQuotedScalar
                | TokenKind::DoubleQuotedScalar
                | TokenKind::LiteralScalar
                | TokenKind::FoldedScalar
        )
    }
}

impl From<ScalarType> for TokenKind {
    fn from(value: ScalarType) -> Self {
        match value {
            ScalarType::Plain => TokenKind::PlainScalar,
            ScalarType::Folded => TokenKind::FoldedScalar,
            ScalarType::Literal => TokenKind::LiteralScalar,
            ScalarType::SingleQuote => TokenKind::SingleQuotedScalar,
            ScalarType::DoubleQuote => TokenKind::DoubleQuotedScalar,
        }
    }
}

/// A `%` line before a document.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum Directive<'input> {
    /// `%YAML 1.2`
    Version { major: u8, minor: u8 },
    /// `%TAG !u! tag:unity3d.com,2011:`
    Tag {
        handle: Cow<'input, str>,
        prefix: Cow<'input, str>,
    },
    /// Any other directive, ignored by readers.
    Reserved { name: Cow<'input, str> },
}

#[derive(Clone, PartialEq, Debug)]
pub enum TokenType<'input> {
    StreamStart,
    StreamEnd,
    DocumentStart,
    DocumentEnd,
    BlockSequenceStart,
    BlockMappingStart,
    BlockEnd,
    BlockEntry,
    FlowEntry,
    Key,
    Value,
    FlowSequenceStart,
    FlowSequenceEnd,
    FlowMappingStart,
    FlowMappingEnd,
    Alias(Cow<'input, str>),
    Anchor(Cow<'input, str>),
    Directive(Directive<'input>),
    /// Tag exactly as written, its handle is not resolved yet.
    Tag(Tag),
    Scalar(Scalar<'input>),
}

impl TokenType<'_> {
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        match self {
            TokenType::StreamStart => TokenKind::StreamStart,
            TokenType::StreamEnd => TokenKind::StreamEnd,
            TokenType::DocumentStart => TokenKind::DocumentStart,
            TokenType::DocumentEnd => TokenKind::DocumentEnd,
            TokenType::BlockSequenceStart => TokenKind::BlockSequenceStart,
            TokenType::BlockMappingStart => TokenKind::BlockMappingStart,
            TokenType::BlockEnd => TokenKind::BlockEnd,
            TokenType::BlockEntry => TokenKind::BlockEntryStart,
            TokenType::FlowEntry => TokenKind::FlowEntryStart,
            TokenType::Key => TokenKind::KeyStart,
            TokenType::Value => TokenKind::ValueStart,
            TokenType::FlowSequenceStart => TokenKind::FlowSequenceStart,
            TokenType::FlowSequenceEnd => TokenKind::FlowSequenceEnd,
            TokenType::FlowMappingStart => TokenKind::FlowMappingStart,
            TokenType::FlowMappingEnd => TokenKind::FlowMappingEnd,
            TokenType::Alias(_) => TokenKind::Alias,
            TokenType::Anchor(_) => TokenKind::Anchor,
            TokenType::Directive(_) => TokenKind::Directive,
            TokenType::Tag(_) => TokenKind::Tag,
            TokenType::Scalar(scalar) => scalar.style().into(),
        }
    }
}

#[derive(PartialEq, Clone, Copy)]
pub enum ChompIndicator {
    /// `-` final line break and any trailing empty lines are excluded from the scalar’s content
    Strip,
    ///  ` ` final line break character is preserved in the scalar’s content
    Clip,
    /// `+` final line break and any trailing empty lines are considered to be part of the scalar’s content
    Keep,
}

#[derive(Default, Debug, Clone, Copy, Eq, PartialEq)]
pub struct Marker {
    /// index in bytes of the input string.
    pub pos: usize,
    /// Column of mark. One indexed.
    pub col: u32,
    /// Line of mark. One indexed.
    pub line: u32,
}

impl Display for Marker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {} column {}", self.line, self.col)
    }
}

#[derive(Clone, Copy, PartialEq, Debug, Eq, Default)]
pub struct Span {
    pub start: Marker,
    pub end: Marker,
}

impl Span {
    pub fn new(start: Marker, end: Marker) -> Self {
        Span { start, end }
    }

    pub fn empty(mark: Marker) -> Self {
        Span {
            start: mark,
            end: mark,
        }
    }
}

/// Kind of the event under the parser cursor.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum EventKind {
    /// Nothing was read yet.
    Nothing,
    StreamStart,
    StreamEnd,
    DocumentStart,
    DocumentEnd,
    Alias,
    Scalar,
    SequenceStart,
    SequenceEnd,
    MappingStart,
    MappingEnd,
}

impl EventKind {
    #[must_use]
    pub fn is_node_start(self) -> bool {
        matches!(self, EventKind::SequenceStart | EventKind::MappingStart)
    }

    #[must_use]
    pub fn is_node_end(self) -> bool {
        matches!(self, EventKind::SequenceEnd | EventKind::MappingEnd)
    }
}

impl Display for EventKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        core::fmt::Debug::fmt(self, f)
    }
}

/// A YAML tag.
#[derive(Clone, PartialEq, Debug, Eq, Ord, PartialOrd, Hash)]
pub struct Tag {
    /// Handle of the tag (`!` included). Once resolved, the prefix the handle stands for.
    pub handle: String,
    /// The suffix of the tag.
    pub suffix: String,
}

impl Tag {
    /// Returns whether the tag is a YAML tag from the core schema (`!!str`, `!!int`, ...).
    ///
    /// The YAML specification specifies [a list of
    /// tags](https://yaml.org/spec/1.2.2/#103-core-schema) for the Core Schema. This function
    /// checks whether _the handle_ (but not the suffix) is the handle for the YAML Core Schema.
    ///
    /// # Return
    /// Returns `true` if the handle is `tag:yaml.org,2002`, `false` otherwise.
    #[must_use]
    pub fn is_yaml_core_schema(&self) -> bool {
        self.handle == "tag:yaml.org,2002:"
    }

    /// The non-specific `!` tag.
    #[must_use]
    pub fn is_non_specific(&self) -> bool {
        self.handle.is_empty() && self.suffix == "!"
    }
}

impl Display for Tag {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}{}", self.handle, self.suffix)
    }
}

#[cfg(test)]
mod test {
    use std::borrow::Cow;

    use crate::{Scalar, ScalarType, Tag, TokenKind, TokenType};

    #[test]
    fn test_token_kind() {
        let token = TokenType::Scalar(Scalar::new(ScalarType::Folded, Cow::Borrowed("x")));
        assert_eq!(token.kind(), TokenKind::FoldedScalar);
        assert!(token.kind().is_scalar());
        assert_eq!(TokenType::Key.kind(), TokenKind::KeyStart);
        assert!(!TokenType::FlowEntry.kind().is_scalar());
    }

    #[test]
    fn test_tag_display() {
        let tag = Tag {
            handle: "!".to_string(),
            suffix: "tag1".to_string(),
        };
        assert_eq!(tag.to_string(), "!tag1");

        let tag = Tag {
            handle: "tag:yaml.org,2002:".to_string(),
            suffix: "int".to_string(),
        };
        assert!(tag.is_yaml_core_schema());
        assert_eq!(tag.to_string(), "tag:yaml.org,2002:int");
    }
}
