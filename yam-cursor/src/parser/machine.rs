use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::{HashMap, HashSet};
use tracing::{debug, trace};
use yam_cursor_common::{
    Directive, EventKind, Scalar, Span, Tag, TokenKind, TokenType, YamlError, YamlResult,
};

use crate::config::TokenizerConfig;
use crate::parser::event::ParseEvent;
use crate::tokenizer::{Token, Tokenizer};

const CORE_SCHEMA_PREFIX: &str = "tag:yaml.org,2002:";

#[derive(Clone, Copy, PartialEq, Debug, Eq)]
enum State {
    StreamStart,
    ImplicitDocumentStart,
    DocumentStart,
    DocumentContent,
    DocumentEnd,
    BlockNode,
    BlockSequenceFirstEntry,
    BlockSequenceEntry,
    IndentlessSequenceEntry,
    BlockMappingFirstKey,
    BlockMappingKey,
    BlockMappingValue,
    FlowSequenceFirstEntry,
    FlowSequenceEntry,
    FlowSequenceEntryMappingKey,
    FlowSequenceEntryMappingValue,
    FlowSequenceEntryMappingEnd,
    FlowMappingFirstKey,
    FlowMappingKey,
    FlowMappingValue,
    FlowMappingEmptyValue,
    End,
}

/// Cursor over the parse events of a YAML stream.
///
/// Tokens are pulled from the wrapped [`Tokenizer`] one at a time, only as many as needed to
/// decide the next event.
pub struct Parser<'input> {
    tokenizer: Tokenizer<'input>,
    states: Vec<State>,
    state: State,
    token: Option<Token<'input>>,
    current: Option<ParseEvent<'input>>,
    error: Option<YamlError>,
    tag_handles: HashMap<String, String>,
    anchors: HashSet<String>,
}

impl<'input> Parser<'input> {
    pub fn from_tokenizer(tokenizer: Tokenizer<'input>) -> Parser<'input> {
        Parser {
            tokenizer,
            states: Vec::new(),
            state: State::StreamStart,
            token: None,
            current: None,
            error: None,
            tag_handles: Self::default_tag_handles(),
            anchors: HashSet::new(),
        }
    }

    pub fn new(input: &'input [u8]) -> Parser<'input> {
        Parser::from_tokenizer(Tokenizer::new(input))
    }

    pub fn from_str(input: &'input str) -> Parser<'input> {
        Parser::from_tokenizer(Tokenizer::from_str(input))
    }

    pub fn with_config(input: &'input [u8], config: TokenizerConfig) -> Parser<'input> {
        Parser::from_tokenizer(Tokenizer::with_config(input, config))
    }

    /// Moves the cursor to the next event.
    ///
    /// Returns `Ok(false)` once `StreamEnd` was already returned. After an error every call
    /// returns that same error.
    pub fn read(&mut self) -> YamlResult<bool> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        if self.state == State::End {
            return Ok(false);
        }
        match self.state_machine() {
            Ok(event) => {
                self.current = Some(event);
                Ok(true)
            }
            Err(err) => {
                debug!(error = %err, "parser stopped");
                self.current = None;
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    #[must_use]
    pub fn current_event_kind(&self) -> EventKind {
        self.current
            .as_ref()
            .map_or(EventKind::Nothing, |event| event.kind)
    }

    #[must_use]
    pub fn current_event(&self) -> Option<&ParseEvent<'input>> {
        self.current.as_ref()
    }

    #[must_use]
    pub fn try_get_current_tag(&self) -> Option<&Tag> {
        self.current.as_ref().and_then(|event| event.tag.as_ref())
    }

    #[must_use]
    pub fn try_get_current_anchor(&self) -> Option<&str> {
        self.current
            .as_ref()
            .and_then(|event| event.anchor.as_deref())
    }

    /// Text of the scalar under the cursor. The cursor doesn't move.
    pub fn get_scalar_as_string(&self) -> YamlResult<String> {
        match &self.current {
            Some(ParseEvent {
                kind: EventKind::Scalar,
                scalar: Some(scalar),
                ..
            }) => Ok(String::from(scalar.as_str())),
            _ => Err(self.expected_scalar()),
        }
    }

    /// Text of the scalar under the cursor, then moves to the next event.
    pub fn read_scalar_as_string(&mut self) -> YamlResult<String> {
        let value = self.get_scalar_as_string()?;
        self.read()?;
        Ok(value)
    }

    /// Moves the scalar under the cursor out without copying it, then moves to the next event.
    pub fn read_scalar(&mut self) -> YamlResult<Scalar<'input>> {
        let scalar = match self.current.as_mut() {
            Some(ParseEvent {
                kind: EventKind::Scalar,
                scalar,
                ..
            }) => scalar.take(),
            _ => None,
        };
        let Some(scalar) = scalar else {
            return Err(self.expected_scalar());
        };
        self.read()?;
        Ok(scalar)
    }

    fn expected_scalar(&self) -> YamlError {
        YamlError::UnexpectedEvent {
            expected: EventKind::Scalar,
            found: self.current_event_kind(),
        }
    }

    /// Reads until the cursor is on an event of `kind`, then reads once more.
    pub fn skip_after(&mut self, kind: EventKind) -> YamlResult<()> {
        loop {
            self.read_while_skipping()?;
            if self.current_event_kind() == kind {
                return self.read_while_skipping();
            }
        }
    }

    /// Steps over the node under the cursor.
    ///
    /// A scalar or alias takes one step. A collection is skipped up to its matching end, and
    /// the cursor lands on whatever follows it.
    pub fn skip_current_node(&mut self) -> YamlResult<()> {
        match self.current_event_kind() {
            EventKind::Scalar | EventKind::Alias => self.read_while_skipping(),
            EventKind::SequenceStart | EventKind::MappingStart => {
                let mut depth = 1usize;
                while depth > 0 {
                    self.read_while_skipping()?;
                    let kind = self.current_event_kind();
                    if kind.is_node_start() {
                        depth += 1;
                    } else if kind.is_node_end() {
                        depth -= 1;
                    }
                }
                trace!(kind = %self.current_event_kind(), "skipped collection");
                self.read_while_skipping()
            }
            found => Err(YamlError::UnexpectedEvent {
                expected: EventKind::Scalar,
                found,
            }),
        }
    }

    fn read_while_skipping(&mut self) -> YamlResult<()> {
        if self.read()? {
            Ok(())
        } else {
            Err(YamlError::InvalidState(
                "reached the end of the stream while skipping",
            ))
        }
    }

    fn peek_token(&mut self) -> YamlResult<&Token<'input>> {
        if self.token.is_none() {
            let token = self.scan_next_token()?;
            self.token = Some(token);
        }
        self.token
            .as_ref()
            .ok_or(YamlError::InvalidState("token lookahead is empty"))
    }

    /// Kind and span of the next token, without consuming it.
    fn peek(&mut self) -> YamlResult<(TokenKind, Span)> {
        let token = self.peek_token()?;
        Ok((token.kind(), token.span))
    }

    fn scan_next_token(&mut self) -> YamlResult<Token<'input>> {
        if !self.tokenizer.read()? {
            return Err(YamlError::parse_str(
                self.tokenizer.mark(),
                "unexpected end of token stream",
            ));
        }
        self.tokenizer
            .take_token()
            .ok_or(YamlError::InvalidState("tokenizer has no current token"))
    }

    fn fetch_token(&mut self) -> YamlResult<Token<'input>> {
        match self.token.take() {
            Some(token) => Ok(token),
            None => self.scan_next_token(),
        }
    }

    fn skip(&mut self) {
        self.token = None;
    }

    fn pop_state(&mut self) {
        self.state = self.states.pop().unwrap_or(State::End);
    }

    fn push_state(&mut self, state: State) {
        self.states.push(state);
    }

    fn state_machine(&mut self) -> YamlResult<ParseEvent<'input>> {
        match self.state {
            State::StreamStart => self.stream_start(),

            State::ImplicitDocumentStart => self.document_start(true),
            State::DocumentStart => self.document_start(false),
            State::DocumentContent => self.document_content(),
            State::DocumentEnd => self.document_end(),

            State::BlockNode => self.parse_node(true, false),

            State::BlockMappingFirstKey => self.block_mapping_key(true),
            State::BlockMappingKey => self.block_mapping_key(false),
            State::BlockMappingValue => self.block_mapping_value(),

            State::BlockSequenceFirstEntry => self.block_sequence_entry(true),
            State::BlockSequenceEntry => self.block_sequence_entry(false),

            State::FlowSequenceFirstEntry => self.flow_sequence_entry(true),
            State::FlowSequenceEntry => self.flow_sequence_entry(false),

            State::FlowMappingFirstKey => self.flow_mapping_key(true),
            State::FlowMappingKey => self.flow_mapping_key(false),
            State::FlowMappingValue => self.flow_mapping_value(false),

            State::IndentlessSequenceEntry => self.indentless_sequence_entry(),

            State::FlowSequenceEntryMappingKey => self.flow_sequence_entry_mapping_key(),
            State::FlowSequenceEntryMappingValue => self.flow_sequence_entry_mapping_value(),
            State::FlowSequenceEntryMappingEnd => self.flow_sequence_entry_mapping_end(),
            State::FlowMappingEmptyValue => self.flow_mapping_value(true),

            State::End => Err(YamlError::InvalidState("the stream has already ended")),
        }
    }

    fn stream_start(&mut self) -> YamlResult<ParseEvent<'input>> {
        let (kind, span) = self.peek()?;
        if kind == TokenKind::StreamStart {
            self.state = State::ImplicitDocumentStart;
            self.skip();
            Ok(ParseEvent::new(EventKind::StreamStart, span))
        } else {
            Err(YamlError::parse_str(
                span.start,
                "did not find expected <stream-start>",
            ))
        }
    }

    fn document_start(&mut self, implicit: bool) -> YamlResult<ParseEvent<'input>> {
        while self.peek()?.0 == TokenKind::DocumentEnd {
            self.skip();
        }

        let (kind, span) = self.peek()?;
        match kind {
            TokenKind::StreamEnd => {
                self.state = State::End;
                self.skip();
                Ok(ParseEvent::new(EventKind::StreamEnd, span))
            }
            TokenKind::Directive | TokenKind::DocumentStart => self.explicit_document_start(),
            _ if implicit => {
                self.reset_document();
                self.push_state(State::DocumentEnd);
                self.state = State::BlockNode;
                trace!(line = span.start.line, "implicit document");
                Ok(ParseEvent::new(
                    EventKind::DocumentStart,
                    Span::empty(span.start),
                ))
            }
            _ => self.explicit_document_start(),
        }
    }

    fn explicit_document_start(&mut self) -> YamlResult<ParseEvent<'input>> {
        self.reset_document();
        self.process_directives()?;
        let (kind, span) = self.peek()?;
        if kind == TokenKind::DocumentStart {
            self.push_state(State::DocumentEnd);
            self.state = State::DocumentContent;
            self.skip();
            trace!(line = span.start.line, "explicit document");
            Ok(ParseEvent::new(EventKind::DocumentStart, span))
        } else {
            Err(YamlError::parse_str(
                span.start,
                "did not find expected <document start>",
            ))
        }
    }

    // `%TAG` handles stay registered until the end of the stream, anchors only for one document.
    fn reset_document(&mut self) {
        self.anchors.clear();
    }

    fn default_tag_handles() -> HashMap<String, String> {
        let mut handles = HashMap::new();
        handles.insert(String::from("!"), String::from("!"));
        handles.insert(String::from("!!"), String::from(CORE_SCHEMA_PREFIX));
        handles
    }

    fn process_directives(&mut self) -> YamlResult<()> {
        let mut version_seen = false;
        while self.peek()?.0 == TokenKind::Directive {
            let token = self.fetch_token()?;
            let mark = token.span.start;
            match token.token_type {
                TokenType::Directive(Directive::Version { major, minor }) => {
                    if version_seen {
                        return Err(YamlError::parse_str(
                            mark,
                            "found duplicate %YAML directive",
                        ));
                    }
                    if major != 1 {
                        return Err(YamlError::parse_str(
                            mark,
                            "found incompatible YAML document",
                        ));
                    }
                    version_seen = true;
                    trace!(major, minor, "version directive");
                }
                TokenType::Directive(Directive::Tag { handle, prefix }) => {
                    self.tag_handles
                        .insert(handle.into_owned(), prefix.into_owned());
                }
                TokenType::Directive(Directive::Reserved { name }) => {
                    trace!(name = %name, "ignored reserved directive");
                }
                _ => return Err(YamlError::InvalidState("expected a directive token")),
            }
        }
        Ok(())
    }

    fn document_content(&mut self) -> YamlResult<ParseEvent<'input>> {
        let (kind, span) = self.peek()?;
        match kind {
            TokenKind::Directive
            | TokenKind::DocumentStart
            | TokenKind::DocumentEnd
            | TokenKind::StreamEnd => {
                self.pop_state();
                Ok(ParseEvent::empty_scalar(span.start))
            }
            _ => self.parse_node(true, false),
        }
    }

    fn document_end(&mut self) -> YamlResult<ParseEvent<'input>> {
        let (kind, span) = self.peek()?;
        if kind == TokenKind::DocumentEnd {
            self.skip();
            // A bare document may follow an explicit `...`.
            self.state = State::ImplicitDocumentStart;
            Ok(ParseEvent::new(EventKind::DocumentEnd, span))
        } else {
            self.state = State::DocumentStart;
            Ok(ParseEvent::new(
                EventKind::DocumentEnd,
                Span::empty(span.start),
            ))
        }
    }

    fn fetch_anchor(&mut self) -> YamlResult<Cow<'input, str>> {
        let token = self.fetch_token()?;
        match token.token_type {
            TokenType::Anchor(name) => {
                self.anchors.insert(String::from(&*name));
                Ok(name)
            }
            _ => Err(YamlError::InvalidState("expected an anchor token")),
        }
    }

    fn fetch_tag(&mut self) -> YamlResult<Tag> {
        let token = self.fetch_token()?;
        let TokenType::Tag(tag) = token.token_type else {
            return Err(YamlError::InvalidState("expected a tag token"));
        };
        // Verbatim and non-specific tags have no handle to resolve.
        if tag.handle.is_empty() {
            return Ok(tag);
        }
        match self.tag_handles.get(&tag.handle) {
            Some(prefix) => Ok(Tag {
                handle: prefix.clone(),
                suffix: tag.suffix,
            }),
            None => Err(YamlError::parse_str(
                token.span.start,
                "while parsing a node, found undefined tag handle",
            )),
        }
    }

    fn parse_node(
        &mut self,
        block: bool,
        indentless_sequence: bool,
    ) -> YamlResult<ParseEvent<'input>> {
        let mut anchor = None;
        let mut tag = None;
        let (kind, span) = self.peek()?;
        let start = span.start;
        match kind {
            TokenKind::Alias => {
                self.pop_state();
                let token = self.fetch_token()?;
                let TokenType::Alias(name) = token.token_type else {
                    return Err(YamlError::InvalidState("expected an alias token"));
                };
                if !self.anchors.contains(&*name) {
                    return Err(YamlError::parse_str(
                        start,
                        "while parsing node, found unknown anchor",
                    ));
                }
                return Ok(ParseEvent::alias(name, token.span));
            }
            TokenKind::Anchor => {
                anchor = Some(self.fetch_anchor()?);
                if self.peek()?.0 == TokenKind::Tag {
                    tag = Some(self.fetch_tag()?);
                }
            }
            TokenKind::Tag => {
                tag = Some(self.fetch_tag()?);
                if self.peek()?.0 == TokenKind::Anchor {
                    anchor = Some(self.fetch_anchor()?);
                }
            }
            _ => {}
        }

        let (kind, span) = self.peek()?;
        let node_span = Span::new(start, span.end);
        match kind {
            TokenKind::BlockEntryStart if indentless_sequence => {
                self.state = State::IndentlessSequenceEntry;
                Ok(ParseEvent::node(
                    EventKind::SequenceStart,
                    node_span,
                    tag,
                    anchor,
                ))
            }
            kind if kind.is_scalar() => {
                self.pop_state();
                let token = self.fetch_token()?;
                let TokenType::Scalar(scalar) = token.token_type else {
                    return Err(YamlError::InvalidState("expected a scalar token"));
                };
                Ok(ParseEvent::scalar(
                    scalar,
                    Span::new(start, token.span.end),
                    tag,
                    anchor,
                ))
            }
            TokenKind::FlowSequenceStart => {
                self.state = State::FlowSequenceFirstEntry;
                Ok(ParseEvent::node(
                    EventKind::SequenceStart,
                    node_span,
                    tag,
                    anchor,
                ))
            }
            TokenKind::FlowMappingStart => {
                self.state = State::FlowMappingFirstKey;
                Ok(ParseEvent::node(
                    EventKind::MappingStart,
                    node_span,
                    tag,
                    anchor,
                ))
            }
            TokenKind::BlockSequenceStart if block => {
                self.state = State::BlockSequenceFirstEntry;
                Ok(ParseEvent::node(
                    EventKind::SequenceStart,
                    node_span,
                    tag,
                    anchor,
                ))
            }
            TokenKind::BlockMappingStart if block => {
                self.state = State::BlockMappingFirstKey;
                Ok(ParseEvent::node(
                    EventKind::MappingStart,
                    node_span,
                    tag,
                    anchor,
                ))
            }
            // ex 7.2, an empty scalar can follow a secondary tag
            _ if tag.is_some() || anchor.is_some() => {
                self.pop_state();
                Ok(ParseEvent::empty_scalar_with_properties(
                    span.start, tag, anchor,
                ))
            }
            _ => Err(YamlError::parse_str(
                span.start,
                "while parsing a node, did not find expected node content",
            )),
        }
    }

    fn block_mapping_key(&mut self, first: bool) -> YamlResult<ParseEvent<'input>> {
        // skip BlockMappingStart
        if first {
            let _ = self.peek()?;
            self.skip();
        }
        let (kind, span) = self.peek()?;
        match kind {
            TokenKind::KeyStart => {
                self.skip();
                let (kind, span) = self.peek()?;
                match kind {
                    TokenKind::KeyStart | TokenKind::ValueStart | TokenKind::BlockEnd => {
                        self.state = State::BlockMappingValue;
                        // empty scalar
                        Ok(ParseEvent::empty_scalar(span.start))
                    }
                    _ => {
                        self.push_state(State::BlockMappingValue);
                        self.parse_node(true, true)
                    }
                }
            }
            TokenKind::ValueStart => {
                self.state = State::BlockMappingValue;
                Ok(ParseEvent::empty_scalar(span.start))
            }
            TokenKind::BlockEnd => {
                self.pop_state();
                self.skip();
                Ok(ParseEvent::new(EventKind::MappingEnd, span))
            }
            _ => Err(YamlError::parse_str(
                span.start,
                "while parsing a block mapping, did not find expected key",
            )),
        }
    }

    fn block_mapping_value(&mut self) -> YamlResult<ParseEvent<'input>> {
        let (kind, span) = self.peek()?;
        if kind != TokenKind::ValueStart {
            self.state = State::BlockMappingKey;
            return Ok(ParseEvent::empty_scalar(span.start));
        }

        self.skip();
        let (kind, span) = self.peek()?;
        match kind {
            TokenKind::KeyStart | TokenKind::ValueStart | TokenKind::BlockEnd => {
                self.state = State::BlockMappingKey;
                Ok(ParseEvent::empty_scalar(span.start))
            }
            _ => {
                self.push_state(State::BlockMappingKey);
                self.parse_node(true, true)
            }
        }
    }

    fn flow_mapping_key(&mut self, first: bool) -> YamlResult<ParseEvent<'input>> {
        if first {
            let _ = self.peek()?;
            self.skip();
        }
        let (mut kind, mut span) = self.peek()?;
        if kind != TokenKind::FlowMappingEnd {
            if !first {
                if kind != TokenKind::FlowEntryStart {
                    return Err(YamlError::parse_str(
                        span.start,
                        "while parsing a flow mapping, did not find expected ',' or '}'",
                    ));
                }
                self.skip();
                (kind, span) = self.peek()?;
            }

            match kind {
                TokenKind::KeyStart => {
                    self.skip();
                    let (kind, span) = self.peek()?;
                    return match kind {
                        TokenKind::ValueStart
                        | TokenKind::FlowEntryStart
                        | TokenKind::FlowMappingEnd => {
                            self.state = State::FlowMappingValue;
                            Ok(ParseEvent::empty_scalar(span.start))
                        }
                        _ => {
                            self.push_state(State::FlowMappingValue);
                            self.parse_node(false, false)
                        }
                    };
                }
                TokenKind::ValueStart => {
                    self.state = State::FlowMappingValue;
                    return Ok(ParseEvent::empty_scalar(span.start));
                }
                TokenKind::FlowMappingEnd => {}
                _ => {
                    self.push_state(State::FlowMappingEmptyValue);
                    return self.parse_node(false, false);
                }
            }
        }

        self.pop_state();
        self.skip();
        Ok(ParseEvent::new(EventKind::MappingEnd, span))
    }

    fn flow_mapping_value(&mut self, empty: bool) -> YamlResult<ParseEvent<'input>> {
        let (kind, span) = self.peek()?;
        if !empty && kind == TokenKind::ValueStart {
            self.skip();
            let (next, _) = self.peek()?;
            if !matches!(next, TokenKind::FlowEntryStart | TokenKind::FlowMappingEnd) {
                self.push_state(State::FlowMappingKey);
                return self.parse_node(false, false);
            }
        }

        self.state = State::FlowMappingKey;
        Ok(ParseEvent::empty_scalar(span.start))
    }

    fn flow_sequence_entry(&mut self, first: bool) -> YamlResult<ParseEvent<'input>> {
        // skip FlowSequenceStart
        if first {
            let _ = self.peek()?;
            self.skip();
        }
        let (mut kind, mut span) = self.peek()?;
        if kind != TokenKind::FlowSequenceEnd && !first {
            if kind != TokenKind::FlowEntryStart {
                return Err(YamlError::parse_str(
                    span.start,
                    "while parsing a flow sequence, expected ',' or ']'",
                ));
            }
            self.skip();
            (kind, span) = self.peek()?;
        }

        match kind {
            TokenKind::FlowSequenceEnd => {
                self.pop_state();
                self.skip();
                Ok(ParseEvent::new(EventKind::SequenceEnd, span))
            }
            TokenKind::KeyStart => {
                self.state = State::FlowSequenceEntryMappingKey;
                self.skip();
                Ok(ParseEvent::new(EventKind::MappingStart, span))
            }
            _ => {
                self.push_state(State::FlowSequenceEntry);
                self.parse_node(false, false)
            }
        }
    }

    fn indentless_sequence_entry(&mut self) -> YamlResult<ParseEvent<'input>> {
        let (kind, span) = self.peek()?;
        if kind != TokenKind::BlockEntryStart {
            self.pop_state();
            return Ok(ParseEvent::new(
                EventKind::SequenceEnd,
                Span::empty(span.start),
            ));
        }

        self.skip();
        let (kind, span) = self.peek()?;
        match kind {
            TokenKind::BlockEntryStart
            | TokenKind::KeyStart
            | TokenKind::ValueStart
            | TokenKind::BlockEnd => {
                self.state = State::IndentlessSequenceEntry;
                Ok(ParseEvent::empty_scalar(span.start))
            }
            _ => {
                self.push_state(State::IndentlessSequenceEntry);
                self.parse_node(true, false)
            }
        }
    }

    fn block_sequence_entry(&mut self, first: bool) -> YamlResult<ParseEvent<'input>> {
        // BLOCK-SEQUENCE-START
        if first {
            let _ = self.peek()?;
            self.skip();
        }
        let (kind, span) = self.peek()?;
        match kind {
            TokenKind::BlockEnd => {
                self.pop_state();
                self.skip();
                Ok(ParseEvent::new(EventKind::SequenceEnd, span))
            }
            TokenKind::BlockEntryStart => {
                self.skip();
                let (kind, span) = self.peek()?;
                match kind {
                    TokenKind::BlockEntryStart | TokenKind::BlockEnd => {
                        self.state = State::BlockSequenceEntry;
                        Ok(ParseEvent::empty_scalar(span.start))
                    }
                    _ => {
                        self.push_state(State::BlockSequenceEntry);
                        self.parse_node(true, false)
                    }
                }
            }
            _ => Err(YamlError::parse_str(
                span.start,
                "while parsing a block collection, did not find expected '-' indicator",
            )),
        }
    }

    fn flow_sequence_entry_mapping_key(&mut self) -> YamlResult<ParseEvent<'input>> {
        let (kind, span) = self.peek()?;
        match kind {
            TokenKind::ValueStart | TokenKind::FlowEntryStart | TokenKind::FlowSequenceEnd => {
                self.state = State::FlowSequenceEntryMappingValue;
                Ok(ParseEvent::empty_scalar(span.start))
            }
            _ => {
                self.push_state(State::FlowSequenceEntryMappingValue);
                self.parse_node(false, false)
            }
        }
    }

    fn flow_sequence_entry_mapping_value(&mut self) -> YamlResult<ParseEvent<'input>> {
        let (kind, span) = self.peek()?;
        if kind != TokenKind::ValueStart {
            self.state = State::FlowSequenceEntryMappingEnd;
            return Ok(ParseEvent::empty_scalar(span.start));
        }

        self.skip();
        let (kind, span) = self.peek()?;
        match kind {
            TokenKind::FlowEntryStart | TokenKind::FlowSequenceEnd => {
                self.state = State::FlowSequenceEntryMappingEnd;
                Ok(ParseEvent::empty_scalar(span.start))
            }
            _ => {
                self.push_state(State::FlowSequenceEntryMappingEnd);
                self.parse_node(false, false)
            }
        }
    }

    fn flow_sequence_entry_mapping_end(&mut self) -> YamlResult<ParseEvent<'input>> {
        let (_, span) = self.peek()?;
        self.state = State::FlowSequenceEntry;
        Ok(ParseEvent::new(
            EventKind::MappingEnd,
            Span::empty(span.start),
        ))
    }
}

impl<'input> Iterator for Parser<'input> {
    type Item = YamlResult<ParseEvent<'input>>;

    /// Moves each event out of the cursor, so `current_event` is empty between calls.
    fn next(&mut self) -> Option<Self::Item> {
        if self.error.is_some() {
            return None;
        }
        match self.read() {
            Ok(true) => self.current.take().map(Ok),
            Ok(false) => None,
            Err(err) => Some(Err(err)),
        }
    }
}
