use alloc::borrow::Cow;
use alloc::collections::VecDeque;
use alloc::format;
use alloc::string::String;
use alloc::vec::Vec;

use tracing::{debug, trace};
use yam_cursor_common::{
    ChompIndicator, Directive, Marker, Scalar, ScalarType, ScanResult, Span, Tag, TokenKind,
    TokenType, YamlError, YamlResult,
};

use crate::config::TokenizerConfig;
use crate::tokenizer::char_utils::{
    as_hex, is_anchor_char, is_blank, is_blank_or_break, is_blank_or_breakz, is_break, is_flow,
    is_document_indicator, is_tag_char, is_uri_char,
};
use crate::tokenizer::source::StrSource;
use crate::tokenizer::text::ScalarText;

const BOM: &[u8] = b"\xEF\xBB\xBF";
const STRIPPED_ANNOTATION: &[u8] = b"stripped";

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum SkipTabs {
    Yes,
    No,
    Result { any_tabs: bool, has_yaml_ws: bool },
}

impl SkipTabs {
    pub(crate) fn found_tabs(&self) -> bool {
        matches!(self, SkipTabs::Result { any_tabs: true, .. })
    }

    #[must_use]
    pub(crate) fn has_valid_yaml_ws(&self) -> bool {
        matches!(
            self,
            SkipTabs::Result {
                has_yaml_ws: true,
                ..
            }
        )
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct Token<'input> {
    pub span: Span,
    pub token_type: TokenType<'input>,
}

impl Token<'_> {
    #[must_use]
    pub fn kind(&self) -> TokenKind {
        self.token_type.kind()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct SimpleKey {
    possible: bool,
    required: bool,
    token_number: usize,
    mark: Marker,
}

impl SimpleKey {
    fn new(mark: Marker) -> SimpleKey {
        SimpleKey {
            possible: false,
            required: false,
            token_number: 0,
            mark,
        }
    }
}

#[derive(Clone, Debug, Default)]
struct Indent {
    indent: u32,
    needs_block_end: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum FlowKind {
    Mapping,
    Sequence,
}

/// Pull based YAML tokenizer.
///
/// Each [`Tokenizer::read`] moves the cursor to the next token. Tokens are scanned lazily;
/// the only ones held back are those that follow a possible simple key, because a later `:`
/// inserts `Key` (and maybe `BlockMappingStart`) in front of them.
pub struct Tokenizer<'input> {
    src: StrSource<'input>,
    config: TokenizerConfig,
    mark: Marker,
    tokens: VecDeque<Token<'input>>,
    current: Option<Token<'input>>,
    error: Option<YamlError>,
    /// Offset of the first byte that isn't UTF-8, reported right after `StreamStart`.
    utf8_error_at: Option<usize>,

    simple_keys: Vec<SimpleKey>,
    indents: Vec<Indent>,
    flow_stack: Vec<FlowKind>,
    stream_start_produced: bool,
    stream_end_produced: bool,
    simple_key_allowed: bool,
    leading_whitespace: bool,

    adjacent_value_allowed_at: usize,
    tokens_parsed: usize,
    flow_level: u32,
    indent: u32,
    document_start_line: u32,
    property_line: u32,
}

impl<'input> Tokenizer<'input> {
    pub fn new(input: &'input [u8]) -> Tokenizer<'input> {
        Tokenizer::with_config(input, TokenizerConfig::default())
    }

    pub fn from_str(input: &'input str) -> Tokenizer<'input> {
        Tokenizer::from_source(StrSource::new(input), None, TokenizerConfig::default())
    }

    pub fn with_config(input: &'input [u8], config: TokenizerConfig) -> Tokenizer<'input> {
        match simdutf8::compat::from_utf8(input) {
            Ok(text) => Tokenizer::from_source(StrSource::new(text), None, config),
            Err(err) => {
                let valid = err.valid_up_to();
                let text = core::str::from_utf8(&input[..valid]).unwrap_or_default();
                Tokenizer::from_source(StrSource::new(text), Some(valid), config)
            }
        }
    }

    fn from_source(
        src: StrSource<'input>,
        utf8_error_at: Option<usize>,
        config: TokenizerConfig,
    ) -> Tokenizer<'input> {
        Tokenizer {
            src,
            config,
            mark: Marker {
                pos: 0,
                col: 1,
                line: 1,
            },
            tokens: VecDeque::new(),
            current: None,
            error: None,
            utf8_error_at,
            simple_keys: Vec::new(),
            indents: Vec::new(),
            flow_stack: Vec::new(),

            stream_start_produced: false,
            stream_end_produced: false,
            simple_key_allowed: true,
            leading_whitespace: true,

            adjacent_value_allowed_at: 0,
            tokens_parsed: 0,
            flow_level: 0,
            indent: 0,
            document_start_line: 0,
            property_line: 0,
        }
    }

    /// Moves the cursor to the next token.
    ///
    /// Returns `Ok(false)` once `StreamEnd` was already returned. After an error every call
    /// returns that same error.
    pub fn read(&mut self) -> YamlResult<bool> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }
        if self.stream_end_produced {
            return Ok(false);
        }
        match self.next_token() {
            Ok(token) => {
                self.current = Some(token);
                Ok(true)
            }
            Err(err) => {
                debug!(error = %err, "tokenizer stopped");
                self.current = None;
                self.error = Some(err.clone());
                Err(err)
            }
        }
    }

    #[must_use]
    pub fn current_kind(&self) -> TokenKind {
        self.current.as_ref().map_or(TokenKind::None, Token::kind)
    }

    #[must_use]
    pub fn current_token(&self) -> Option<&Token<'input>> {
        self.current.as_ref()
    }

    /// Moves the current token out, leaving the cursor empty until the next `read`.
    pub fn take_token(&mut self) -> Option<Token<'input>> {
        self.current.take()
    }

    /// Takes the scalar payload of the current token.
    ///
    /// # Errors
    /// Returns [`YamlError::InvalidState`] when the current token carries no scalar.
    pub fn take_scalar(&mut self) -> YamlResult<Scalar<'input>> {
        match self.current.as_mut() {
            Some(Token {
                token_type: TokenType::Scalar(scalar),
                ..
            }) => {
                let style = scalar.style();
                Ok(core::mem::replace(
                    scalar,
                    Scalar::new(style, Cow::Borrowed("")),
                ))
            }
            _ => Err(YamlError::InvalidState("current token is not a scalar")),
        }
    }

    #[must_use]
    pub fn mark(&self) -> Marker {
        self.mark
    }

    #[must_use]
    pub fn error(&self) -> Option<&YamlError> {
        self.error.as_ref()
    }

    #[must_use]
    pub fn config(&self) -> &TokenizerConfig {
        &self.config
    }

    fn get_span(&self, start: Marker) -> Span {
        Span {
            start,
            end: self.mark,
        }
    }

    fn next_token(&mut self) -> YamlResult<Token<'input>> {
        self.fetch_more_tokens()?;

        let Some(tok) = self.tokens.pop_front() else {
            return Err(YamlError::new_str(self.mark, "no token was produced"));
        };
        self.tokens_parsed += 1;

        if tok.token_type == TokenType::StreamEnd {
            self.stream_end_produced = true;
        }
        Ok(tok)
    }

    fn fetch_more_tokens(&mut self) -> ScanResult {
        let mut need_more;
        loop {
            if self.tokens.is_empty() {
                need_more = true;
            } else {
                need_more = false;
                self.stale_simple_keys()?;
                for sk in &self.simple_keys {
                    if sk.possible && sk.token_number == self.tokens_parsed {
                        need_more = true;
                        break;
                    }
                }
            }

            if !need_more {
                break;
            }

            self.fetch_next_token()?;
        }
        Ok(())
    }

    fn process_start(&mut self) -> Option<ScanResult> {
        if self.src.peek() == b'%' {
            Some(self.fetch_directive())
        } else if self.src.next_is_document_start() {
            Some(self.fetch_document_indicator(TokenType::DocumentStart))
        } else if self.src.next_is_document_end() {
            Some(self.finish_document())
        } else {
            None
        }
    }

    fn fetch_next_token(&mut self) -> ScanResult {
        if !self.stream_start_produced {
            self.fetch_stream_start();
            return Ok(());
        }

        if let Some(pos) = self.utf8_error_at {
            return Err(self.utf8_error(pos));
        }

        self.skip_to_next_token()?;
        self.stale_simple_keys()?;

        let mark = self.mark;
        let dedented = self.unroll_indent(mark.col);

        if self.src.buf_is_empty() {
            return self.fetch_stream_end();
        }

        if self.mark.col == 1 {
            if let Some(res) = self.process_start() {
                return res;
            }
        }

        // A dedent must land on the column of a level that is still open.
        let between_levels = dedented && self.mark.col != self.indent && self.mark.col != 1;
        if self.mark.col < self.indent || between_levels {
            return Err(YamlError::new_str(self.mark, "invalid indentation"));
        }

        self.fetch_main_loop()
    }

    fn utf8_error(&self, pos: usize) -> YamlError {
        let valid = self.src.bytes();
        let line = memchr::memchr_iter(b'\n', valid).count() + 1;
        let line_start = memchr::memrchr(b'\n', valid).map_or(0, |i| i + 1);
        YamlError::InvalidUtf8 {
            mark: Marker {
                pos,
                col: (pos - line_start + 1) as u32,
                line: line as u32,
            },
        }
    }

    fn fetch_stream_start(&mut self) {
        let mark = self.mark;
        self.indent = 0;
        self.stream_start_produced = true;
        self.simple_key_allowed = true;
        if self.src.remaining().starts_with(BOM) {
            self.src.skip(BOM.len());
            self.mark.pos += BOM.len();
        }
        self.tokens.push_back(Token {
            span: Span::new(mark, self.mark),
            token_type: TokenType::StreamStart,
        });
        self.simple_keys.push(SimpleKey::new(Marker::default()));
    }

    fn fetch_stream_end(&mut self) -> ScanResult {
        // StreamEnd always sits at the start of a line.
        if self.mark.col != 1 {
            self.mark.col = 1;
            self.mark.line += 1;
        }

        if self.flow_level > 0 {
            return Err(YamlError::new_str(
                self.mark,
                "while scanning a flow collection, found unexpected end of stream",
            ));
        }

        // A key that is still required at EOF never got its `:`.
        for sk in &mut self.simple_keys {
            if sk.required && sk.possible {
                return Err(YamlError::new_str(self.mark, "simple key expected"));
            }
            sk.possible = false;
        }

        self.unroll_indent(0);
        self.remove_simple_key()?;
        self.simple_key_allowed = false;

        self.tokens.push_back(Token {
            span: Span::empty(self.mark),
            token_type: TokenType::StreamEnd,
        });
        Ok(())
    }

    fn fetch_document_indicator(&mut self, token_type: TokenType<'input>) -> ScanResult {
        self.unroll_indent(0);
        self.remove_simple_key()?;
        self.simple_key_allowed = false;

        let mark = self.mark;
        self.skip_n_non_blank(3);

        if token_type == TokenType::DocumentStart {
            self.document_start_line = mark.line;
        }
        trace!(line = mark.line, kind = ?token_type.kind(), "document marker");

        let span = Span::new(mark, self.mark);
        self.tokens.push_back(Token { span, token_type });
        Ok(())
    }

    fn fetch_main_loop(&mut self) -> ScanResult {
        let c = self.src.peek_two();
        match c {
            [b'[', _] => self.fetch_flow_collection_start(FlowKind::Sequence),
            [b'{', _] => self.fetch_flow_collection_start(FlowKind::Mapping),
            [b']', _] => self.fetch_flow_collection_end(FlowKind::Sequence),
            [b'}', _] => self.fetch_flow_collection_end(FlowKind::Mapping),
            [b',', _] => self.fetch_flow_entry(),
            [b'-', x] if is_blank_or_breakz(x) => self.fetch_block_entry(),
            [b'?', x] if is_blank_or_breakz(x) => self.fetch_key(),
            [b':', x] if is_blank_or_breakz(x) => self.fetch_value(),
            [b':', x]
                if self.flow_level > 0
                    && (is_flow(x) || self.mark.pos == self.adjacent_value_allowed_at) =>
            {
                self.fetch_flow_value()
            }
            [b'*', _] => self.fetch_anchor(true),
            [b'&', _] => self.fetch_anchor(false),
            [b'!', _] => self.fetch_tag(),
            [b'|', _] if self.flow_level == 0 => self.fetch_block_scalar(true),
            [b'>', _] if self.flow_level == 0 => self.fetch_block_scalar(false),
            [b'\'', _] => self.fetch_flow_scalar(true),
            [b'"', _] => self.fetch_flow_scalar(false),
            [b'%' | b'@' | b'`', _] => {
                let chr = self.src.peek_char();
                Err(YamlError::new_str(
                    self.mark,
                    &format!("unexpected character `{chr}`"),
                ))
            }
            _ => self.fetch_plain_scalar(),
        }
    }

    fn fetch_flow_collection_start(&mut self, kind: FlowKind) -> ScanResult {
        self.save_simple_key();

        self.roll_one_col_indent();
        self.increase_flow_level(kind)?;

        self.simple_key_allowed = true;

        let start_mark = self.mark;
        self.skip_non_blank();
        self.skip_ws_to_eol(SkipTabs::Yes)?;

        let token_type = match kind {
            FlowKind::Mapping => TokenType::FlowMappingStart,
            FlowKind::Sequence => TokenType::FlowSequenceStart,
        };
        let span = self.get_span(start_mark);
        self.tokens.push_back(Token { span, token_type });

        Ok(())
    }

    fn fetch_flow_collection_end(&mut self, kind: FlowKind) -> ScanResult {
        match self.flow_stack.last() {
            None => {
                return Err(YamlError::new_str(
                    self.mark,
                    "found a closing bracket without a matching opening one",
                ))
            }
            Some(open) if *open != kind => {
                return Err(YamlError::new_str(
                    self.mark,
                    "closing bracket doesn't match the open flow collection",
                ))
            }
            Some(_) => {}
        }
        self.remove_simple_key()?;
        self.decrease_flow_level();

        self.simple_key_allowed = false;

        let start_mark = self.mark;
        self.skip_non_blank();
        self.skip_ws_to_eol(SkipTabs::Yes)?;

        if self.flow_level > 0 {
            self.adjacent_value_allowed_at = self.mark.pos;
        }

        let token_type = match kind {
            FlowKind::Mapping => TokenType::FlowMappingEnd,
            FlowKind::Sequence => TokenType::FlowSequenceEnd,
        };
        let span = self.get_span(start_mark);
        self.tokens.push_back(Token { span, token_type });
        Ok(())
    }

    fn fetch_plain_scalar(&mut self) -> ScanResult {
        if self.next_is_document_annotation() {
            self.skip_document_annotation();
            return Ok(());
        }

        self.save_simple_key();
        self.simple_key_allowed = false;

        let tok = self.scan_plain_scalar()?;

        self.tokens.push_back(tok);
        Ok(())
    }

    /// Unity writes `--- !u!4 &1 stripped` with the object body starting at column 1 on the
    /// next line. The trailing `stripped` word annotates the document and is not a node.
    fn next_is_document_annotation(&self) -> bool {
        if self.flow_level > 0
            || self.mark.line != self.document_start_line
            || self.mark.line != self.property_line
        {
            return false;
        }
        let rest = match self.src.remaining().strip_prefix(STRIPPED_ANNOTATION) {
            Some(rest) => rest,
            None => return false,
        };
        let line_len = memchr::memchr2(b'\n', b'\r', rest).unwrap_or(rest.len());
        let tail = &rest[..line_len];
        // Only blanks or a comment may follow the word.
        match tail.iter().position(|&c| !is_blank(c)) {
            None => {}
            Some(i) if i > 0 && tail[i] == b'#' => {}
            Some(_) => return false,
        }

        let next_line = &rest[line_len..];
        let next_line = next_line
            .strip_prefix(b"\r\n")
            .or_else(|| next_line.strip_prefix(b"\n"))
            .or_else(|| next_line.strip_prefix(b"\r"));
        match next_line.and_then(|next| next.first().map(|c| (next, *c))) {
            Some((next, c)) => {
                !is_blank_or_break(c) && c != b'#' && c != b'%' && !is_document_indicator(next)
            }
            None => false,
        }
    }

    fn skip_document_annotation(&mut self) {
        let start = self.mark;
        let len = self.src.skip_while_non_breakz();
        self.mark.pos += len;
        self.mark.col += len as u32;
        trace!(line = start.line, "skipped document annotation");
    }

    fn fetch_flow_entry(&mut self) -> ScanResult {
        self.remove_simple_key()?;
        self.simple_key_allowed = true;

        let start_mark = self.mark;
        self.skip_non_blank();
        self.skip_ws_to_eol(SkipTabs::Yes)?;

        let span = self.get_span(start_mark);
        self.tokens.push_back(Token {
            token_type: TokenType::FlowEntry,
            span,
        });
        Ok(())
    }

    fn fetch_block_entry(&mut self) -> ScanResult {
        if self.flow_level > 0 {
            return Err(YamlError::new_str(
                self.mark,
                r#""-" is only valid inside a block"#,
            ));
        }
        if !self.simple_key_allowed {
            return Err(YamlError::new_str(
                self.mark,
                "block sequence entries are not allowed in this context",
            ));
        }

        let mark = self.mark;
        self.skip_non_blank();

        self.roll_indent(mark.col, None, TokenType::BlockSequenceStart, mark);
        let found_tabs = self.skip_ws_to_eol(SkipTabs::Yes)?.found_tabs();
        if found_tabs && self.src.peek() == b'-' && is_blank_or_breakz(self.src.peek_nth(1)) {
            return Err(YamlError::new_str(
                self.mark,
                "'-' must be followed by a valid YAML whitespace",
            ));
        }

        self.skip_ws_to_eol(SkipTabs::No)?;
        if self.src.next_is_break() || self.src.next_is_flow() {
            self.roll_one_col_indent();
        }

        self.remove_simple_key()?;
        self.simple_key_allowed = true;

        let span = self.get_span(mark);
        self.tokens.push_back(Token {
            span,
            token_type: TokenType::BlockEntry,
        });

        Ok(())
    }

    fn fetch_key(&mut self) -> ScanResult {
        let start_mark = self.mark;
        if self.flow_level == 0 {
            if !self.simple_key_allowed {
                return Err(YamlError::new_str(
                    self.mark,
                    "mapping keys are not allowed in this context",
                ));
            }
            self.roll_indent(
                start_mark.col,
                None,
                TokenType::BlockMappingStart,
                start_mark,
            );
        }

        self.remove_simple_key()?;

        self.simple_key_allowed = self.flow_level == 0;

        self.skip_non_blank();
        self.skip_yaml_whitespace()?;
        if self.src.peek() == b'\t' {
            return Err(YamlError::new_str(
                self.mark,
                "tabs disallowed in this context",
            ));
        }
        let span = self.get_span(start_mark);
        self.tokens.push_back(Token {
            span,
            token_type: TokenType::Key,
        });
        Ok(())
    }

    fn skip_yaml_whitespace(&mut self) -> ScanResult {
        let mut need_whitespace = true;
        loop {
            match self.src.peek() {
                b' ' => {
                    self.skip_blank();
                    need_whitespace = false;
                }
                b'\n' | b'\r' => {
                    self.skip_linebreak();
                    if self.flow_level == 0 {
                        self.simple_key_allowed = true;
                    }
                    need_whitespace = false;
                }
                b'#' if !need_whitespace => self.skip_comment(),
                _ => break,
            }
        }

        if need_whitespace && !self.src.next_is_z() {
            Err(YamlError::new_str(self.mark, "expected whitespace"))
        } else {
            Ok(())
        }
    }

    fn fetch_value(&mut self) -> ScanResult {
        let Some(sk) = self.simple_keys.last().cloned() else {
            return Err(YamlError::new_str(self.mark, "simple key stack is empty"));
        };
        let start_mark = self.mark;

        self.skip_non_blank();
        if self.src.peek() == b'\t'
            && !self.skip_ws_to_eol(SkipTabs::Yes)?.has_valid_yaml_ws()
            && (self.src.peek() == b'-' || self.src.next_is_alpha())
        {
            return Err(YamlError::new_str(
                self.mark,
                "':' must be followed by a valid YAML whitespace",
            ));
        }

        if sk.possible {
            // The saved candidate becomes the key.
            let tok = Token {
                span: Span::empty(sk.mark),
                token_type: TokenType::Key,
            };
            self.insert_token(sk.token_number, tok);

            self.roll_indent(
                sk.mark.col,
                Some(sk.token_number),
                TokenType::BlockMappingStart,
                sk.mark,
            );
            self.roll_one_col_indent();

            if let Some(last) = self.simple_keys.last_mut() {
                last.possible = false;
            }
            self.simple_key_allowed = false;
        } else {
            // `:` after an explicit `?` key or an empty key.
            if self.flow_level == 0 {
                if !self.simple_key_allowed {
                    return Err(YamlError::new_str(
                        start_mark,
                        "mapping values are not allowed in this context",
                    ));
                }

                self.roll_indent(
                    start_mark.col,
                    None,
                    TokenType::BlockMappingStart,
                    start_mark,
                );
            }
            self.roll_one_col_indent();

            self.simple_key_allowed = self.flow_level == 0;
        }
        self.tokens.push_back(Token {
            span: Span::empty(start_mark),
            token_type: TokenType::Value,
        });

        Ok(())
    }

    fn fetch_flow_value(&mut self) -> ScanResult {
        let nc = self.src.peek_nth(1);

        // In flow, `:` glued to its value is a value indicator only after a quoted key or a
        // closed collection (`["a":[]]`). `[a:b]` is the single scalar `a:b`, `[a:]` has an
        // empty value.
        if self.mark.pos != self.adjacent_value_allowed_at && matches!(nc, b'[' | b'{') {
            return Err(YamlError::new_str(
                self.mark,
                "':' may not precede any of `[{` in flow mapping",
            ));
        }

        self.fetch_value()
    }

    fn fetch_anchor(&mut self, is_alias: bool) -> ScanResult {
        self.save_simple_key();
        self.simple_key_allowed = false;
        if !is_alias {
            self.property_line = self.mark.line;
        }

        let tok = self.scan_anchor(is_alias)?;

        self.tokens.push_back(tok);

        Ok(())
    }

    fn fetch_tag(&mut self) -> ScanResult {
        self.save_simple_key();
        self.simple_key_allowed = false;
        self.property_line = self.mark.line;

        let tok = self.scan_tag()?;
        self.tokens.push_back(tok);
        Ok(())
    }

    fn fetch_block_scalar(&mut self, is_literal: bool) -> ScanResult {
        self.save_simple_key();
        self.simple_key_allowed = true;
        let tok = self.scan_block_scalar(is_literal)?;

        self.tokens.push_back(tok);
        Ok(())
    }

    fn fetch_flow_scalar(&mut self, single: bool) -> ScanResult {
        self.save_simple_key();
        self.simple_key_allowed = false;

        let tok = self.scan_flow_scalar(single)?;

        // JSON-like keys may be followed by a glued `:`.
        self.skip_to_next_token()?;
        self.adjacent_value_allowed_at = self.mark.pos;

        self.tokens.push_back(tok);
        Ok(())
    }

    fn fetch_directive(&mut self) -> ScanResult {
        self.unroll_indent(0);
        self.remove_simple_key()?;

        self.simple_key_allowed = false;

        let tok = self.scan_directive()?;
        self.tokens.push_back(tok);

        Ok(())
    }

    fn finish_document(&mut self) -> ScanResult {
        self.fetch_document_indicator(TokenType::DocumentEnd)?;
        self.skip_ws_to_eol(SkipTabs::Yes)?;
        if self.src.next_is_breakz() {
            Ok(())
        } else {
            Err(YamlError::new_str(
                self.mark,
                "invalid content after document end marker",
            ))
        }
    }

    fn skip_n_non_blank(&mut self, count: usize) {
        self.src.skip(count);

        self.mark.pos += count;
        self.mark.col += count as u32;
        self.leading_whitespace = false;
    }

    fn skip_ws_to_eol(&mut self, skip_tabs: SkipTabs) -> Result<SkipTabs, YamlError> {
        let (n_bytes, result) = self.src.skip_ws_to_eol(skip_tabs);

        self.mark.col += n_bytes;
        self.mark.pos += n_bytes as usize;
        result.map_err(|message| YamlError::new_str(self.mark, message))
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn skip_linebreak(&mut self) {
        match self.src.peek_two() {
            [b'\r', b'\n'] => {
                self.mark.pos += 2;
                self.mark.col = 1;
                self.mark.line += 1;
                self.leading_whitespace = true;
                self.src.skip(2);
            }
            [b'\n' | b'\r', _] => {
                self.mark.pos += 1;
                self.mark.col = 1;
                self.mark.line += 1;
                self.leading_whitespace = true;
                self.src.skip(1);
            }
            _ => {}
        }
    }

    fn skip_blank(&mut self) {
        self.src.skip(1);

        self.mark.pos += 1;
        self.mark.col += 1;
    }

    fn skip_non_blank(&mut self) {
        self.src.skip(1);

        self.mark.pos += 1;
        self.mark.col += 1;
        self.leading_whitespace = false;
    }

    fn skip_comment(&mut self) {
        let comment_length = self.src.skip_while_non_breakz();
        self.mark.pos += comment_length;
        self.mark.col += comment_length as u32;
    }

    fn is_within_block(&self) -> bool {
        !self.indents.is_empty()
    }

    fn skip_to_next_token(&mut self) -> ScanResult {
        loop {
            match self.src.peek() {
                // Tabs can't indent block content. Flow content and leading blanks outside of
                // indentation may use them.
                b'\t'
                    if self.is_within_block()
                        && self.leading_whitespace
                        && self.mark.col < self.indent =>
                {
                    self.skip_ws_to_eol(SkipTabs::Yes)?;
                    if !self.src.next_is_breakz() {
                        return Err(YamlError::new_str(
                            self.mark,
                            "tabs disallowed within this context (block indentation)",
                        ));
                    }
                }
                b'\t' | b' ' => self.skip_blank(),
                b'\n' | b'\r' => {
                    self.skip_linebreak();
                    if self.flow_level == 0 {
                        self.simple_key_allowed = true;
                    }
                }
                b'#' => self.skip_comment(),
                _ => break,
            }
        }
        Ok(())
    }

    fn scan_directive(&mut self) -> YamlResult<Token<'input>> {
        let start_mark = self.mark;
        self.skip_non_blank();

        let name = self.scan_directive_name()?;
        let directive = match name {
            "YAML" => self.scan_version_directive_value(&start_mark)?,
            "TAG" => self.scan_tag_directive_value(&start_mark)?,
            _ => {
                // Reserved directive, the rest of the line is ignored.
                self.skip_comment();
                Directive::Reserved {
                    name: Cow::Borrowed(name),
                }
            }
        };

        self.skip_ws_to_eol(SkipTabs::Yes)?;

        if self.src.next_is_breakz() {
            self.skip_linebreak();
            Ok(Token {
                span: Span::new(start_mark, self.mark),
                token_type: TokenType::Directive(directive),
            })
        } else {
            Err(YamlError::new_str(
                start_mark,
                "while scanning a directive, did not find expected comment or line break",
            ))
        }
    }

    #[allow(clippy::too_many_lines)]
    fn scan_plain_scalar(&mut self) -> YamlResult<Token<'input>> {
        self.unroll_non_block_indents();
        let indent = self.indent + 1;
        let start_mark = self.mark;
        let in_flow = self.flow_level > 0;

        if in_flow && start_mark.col < indent {
            return Err(YamlError::new_str(
                start_mark,
                "invalid indentation in flow construct",
            ));
        }

        let input = self.src.bytes();
        let mut text = ScalarText::default();
        // Blanks between two words on the same line, kept as an input range.
        let mut whitespace: Option<(usize, usize)> = None;
        let mut leading_blanks = false;
        let mut trailing_breaks = 0usize;
        let mut end_mark = self.mark;

        loop {
            if (self.mark.col == 1 && self.src.next_is_document_indicator())
                || self.src.peek() == b'#'
            {
                break;
            }

            if in_flow && self.src.peek() == b'-' && is_flow(self.src.peek_nth(1)) {
                return Err(YamlError::new_str(
                    self.mark,
                    "plain scalar cannot start with '-' followed by ,[]{}",
                ));
            }

            if !self.src.next_is_blank_or_breakz() && self.src.next_can_be_plain_scalar(in_flow) {
                if leading_blanks {
                    if trailing_breaks == 0 {
                        text.push_bytes(input, b" ");
                    } else {
                        for _ in 0..trailing_breaks {
                            text.push_bytes(input, b"\n");
                        }
                    }
                    trailing_breaks = 0;
                    leading_blanks = false;
                } else if let Some((start, end)) = whitespace.take() {
                    text.push_range(input, start, end);
                }

                let run_start = self.mark.pos;
                self.skip_non_blank();
                while !self.src.next_is_blank_or_breakz()
                    && self.src.next_can_be_plain_scalar(in_flow)
                {
                    self.skip_non_blank();
                }
                text.push_range(input, run_start, self.mark.pos);
                end_mark = self.mark;
            }

            // Stopped on EOF, `: `, or a flow indicator.
            if !(self.src.next_is_blank() || self.src.next_is_break()) {
                break;
            }

            while self.src.next_is_blank_or_break() {
                if self.src.next_is_blank() {
                    if !leading_blanks {
                        let pos = self.mark.pos;
                        whitespace = Some(whitespace.map_or((pos, pos + 1), |(s, _)| (s, pos + 1)));
                        self.skip_blank();
                    } else if self.mark.col < indent && self.src.peek() == b'\t' {
                        // Tab in the indentation columns, fine only on an empty line.
                        self.skip_ws_to_eol(SkipTabs::Yes)?;
                        if !self.src.next_is_breakz() {
                            return Err(YamlError::new_str(
                                start_mark,
                                "while scanning a plain scalar, found a tab",
                            ));
                        }
                    } else {
                        self.skip_blank();
                    }
                } else if leading_blanks {
                    self.skip_linebreak();
                    trailing_breaks += 1;
                } else {
                    whitespace = None;
                    self.skip_linebreak();
                    leading_blanks = true;
                }
            }

            if !in_flow && self.mark.col < indent {
                break;
            }
        }

        if leading_blanks {
            self.simple_key_allowed = true;
        }

        if text.is_empty() {
            // Nothing consumed, e.g. `{...`.
            Err(YamlError::new_str(
                start_mark,
                "unexpected end of plain scalar",
            ))
        } else {
            let value = text.into_cow(self.src.input(), start_mark)?;
            Ok(Token {
                span: Span::new(start_mark, end_mark),
                token_type: TokenType::Scalar(Scalar::new(ScalarType::Plain, value)),
            })
        }
    }

    #[allow(clippy::too_many_lines)]
    fn scan_flow_scalar(&mut self, single: bool) -> YamlResult<Token<'input>> {
        let start_mark = self.mark;
        let input = self.src.bytes();

        let mut text = ScalarText::default();
        let mut whitespace: Option<(usize, usize)> = None;
        let mut leading_break = false;
        let mut trailing_breaks = 0usize;
        let mut leading_blanks;

        /* Eat the left quote. */
        self.skip_non_blank();

        loop {
            if self.mark.col == 1 && self.src.next_is_document_indicator() {
                return Err(YamlError::new_str(
                    start_mark,
                    "while scanning a quoted scalar, found unexpected document indicator",
                ));
            }

            if self.src.next_is_z() {
                return Err(YamlError::new_str(
                    start_mark,
                    "while scanning a quoted scalar, found unexpected end of stream",
                ));
            }

            if self.mark.col < self.indent {
                return Err(YamlError::new_str(
                    start_mark,
                    "invalid indentation in quoted scalar",
                ));
            }

            leading_blanks = false;
            self.consume_flow_scalar_non_whitespace_chars(
                single,
                &mut text,
                &mut leading_blanks,
                &start_mark,
            )?;

            match self.src.peek() {
                b'\'' if single => break,
                b'"' if !single => break,
                _ => {}
            }

            while self.src.next_is_blank() || self.src.next_is_break() {
                if self.src.next_is_blank() {
                    if leading_blanks {
                        if self.src.peek() == b'\t' && self.mark.col < self.indent {
                            return Err(YamlError::new_str(
                                self.mark,
                                "tab cannot be used as indentation",
                            ));
                        }
                    } else {
                        let pos = self.mark.pos;
                        whitespace = Some(whitespace.map_or((pos, pos + 1), |(s, _)| (s, pos + 1)));
                    }
                    self.skip_blank();
                } else if leading_blanks {
                    self.skip_linebreak();
                    trailing_breaks += 1;
                } else {
                    whitespace = None;
                    self.skip_linebreak();
                    leading_break = true;
                    leading_blanks = true;
                }
            }

            // Fold.
            if leading_blanks {
                if leading_break {
                    if trailing_breaks == 0 {
                        text.push_bytes(input, b" ");
                    } else {
                        for _ in 0..trailing_breaks {
                            text.push_bytes(input, b"\n");
                        }
                    }
                } else {
                    // An escaped line break: only the trailing empty lines are kept.
                    for _ in 0..trailing_breaks {
                        text.push_bytes(input, b"\n");
                    }
                }
                trailing_breaks = 0;
                leading_break = false;
            } else if let Some((start, end)) = whitespace.take() {
                text.push_range(input, start, end);
            }
        }

        self.skip_non_blank();
        let end_mark = self.mark;
        self.skip_ws_to_eol(SkipTabs::Yes)?;
        match self.src.peek() {
            b',' | b'}' | b']' if self.flow_level > 0 => {}
            _ if self.src.next_is_breakz() => {}
            // Quoted key. Block keys stay on one line.
            b':' if self.flow_level == 0 && start_mark.line == self.mark.line => {}
            b':' if self.flow_level > 0 => {}
            _ => {
                return Err(YamlError::new_str(
                    self.mark,
                    "invalid trailing content after quoted scalar",
                ));
            }
        }

        let style = if single {
            ScalarType::SingleQuote
        } else {
            ScalarType::DoubleQuote
        };
        let value = text.into_cow(self.src.input(), start_mark)?;
        Ok(Token {
            span: Span::new(start_mark, end_mark),
            token_type: TokenType::Scalar(Scalar::new(style, value)),
        })
    }

    fn consume_flow_scalar_non_whitespace_chars(
        &mut self,
        single: bool,
        text: &mut ScalarText,
        leading_blanks: &mut bool,
        start_mark: &Marker,
    ) -> ScanResult {
        let input = self.src.bytes();
        let mut run_start = self.mark.pos;
        while !self.src.next_is_blank_or_breakz() {
            match self.src.peek() {
                // `''`
                b'\'' if self.src.peek_nth(1) == b'\'' && single => {
                    text.push_range(input, run_start, self.mark.pos + 1);
                    self.skip_n_non_blank(2);
                    run_start = self.mark.pos;
                }
                b'\'' if single => break,
                b'"' if !single => break,
                b'\\' if !single && is_break(self.src.peek_nth(1)) => {
                    text.push_range(input, run_start, self.mark.pos);
                    self.skip_non_blank();
                    self.skip_linebreak();
                    *leading_blanks = true;
                    return Ok(());
                }
                b'\\' if !single => {
                    text.push_range(input, run_start, self.mark.pos);
                    let chr = self.resolve_flow_scalar_escape_sequence(start_mark)?;
                    text.push_char(input, chr);
                    run_start = self.mark.pos;
                }
                _ => self.skip_non_blank(),
            }
        }
        text.push_range(input, run_start, self.mark.pos);
        Ok(())
    }

    /// Escape the sequence we encounter in a flow scalar.
    ///
    /// `self.src.peek()` must point to the `\` starting the escape sequence.
    ///
    /// # Errors
    /// Return an error if an invalid escape sequence is found.
    fn resolve_flow_scalar_escape_sequence(&mut self, start_mark: &Marker) -> YamlResult<char> {
        let mut code_length = 0usize;
        let mut ret = '\0';

        match self.src.peek_nth(1) {
            b'0' => ret = '\0',
            b'a' => ret = '\x07',
            b'b' => ret = '\x08',
            b't' | b'\t' => ret = '\t',
            b'n' => ret = '\n',
            b'v' => ret = '\x0b',
            b'f' => ret = '\x0c',
            b'r' => ret = '\x0d',
            b'e' => ret = '\x1b',
            b' ' => ret = '\x20',
            b'"' => ret = '"',
            b'/' => ret = '/',
            b'\\' => ret = '\\',
            // Unicode next line (#x85)
            b'N' => ret = '\u{85}',
            // Unicode non-breaking space (#xA0)
            b'_' => ret = '\u{A0}',
            // Unicode line separator (#x2028)
            b'L' => ret = '\u{2028}',
            // Unicode paragraph separator (#x2029)
            b'P' => ret = '\u{2029}',
            b'x' => code_length = 2,
            b'u' => code_length = 4,
            b'U' => code_length = 8,
            _ => {
                return Err(YamlError::new_str(
                    *start_mark,
                    "while parsing a quoted scalar, found unknown escape character",
                ));
            }
        }
        self.skip_n_non_blank(2);

        if code_length > 0 {
            let mut value = 0u32;
            for i in 0..code_length {
                let Some(digit) = as_hex(self.src.peek_nth(i)) else {
                    return Err(YamlError::new_str(
                        *start_mark,
                        "while parsing a quoted scalar, did not find expected hexadecimal number",
                    ));
                };
                value = (value << 4) + digit;
            }

            let Some(ch) = char::from_u32(value) else {
                return Err(YamlError::new_str(
                    *start_mark,
                    "while parsing a quoted scalar, found invalid Unicode character escape code",
                ));
            };
            ret = ch;

            self.skip_n_non_blank(code_length);
        }
        Ok(ret)
    }

    fn scan_block_scalar(&mut self, literal: bool) -> YamlResult<Token<'input>> {
        let start_mark = self.mark;
        let mut chomping = ChompIndicator::Clip;
        let mut increment: u32 = 0;
        let mut indent: u32 = 0;
        let mut trailing_blank: bool;
        let mut leading_blank: bool = false;
        let scalar_type = if literal {
            ScalarType::Literal
        } else {
            ScalarType::Folded
        };

        let mut string = Vec::<u8>::new();
        let mut leading_break = Vec::<u8>::new();
        let mut trailing_breaks = Vec::<u8>::new();
        let mut chomping_break = Vec::<u8>::new();

        self.skip_non_blank();
        self.unroll_non_block_indents();

        if self.src.peek() == b'+' || self.src.peek() == b'-' {
            chomping = self.scan_chomping_indicator();
            if self.src.peek().is_ascii_digit() {
                increment = self.scan_indentation_indicator(&start_mark)?;
            }
        } else if self.src.peek().is_ascii_digit() {
            increment = self.scan_indentation_indicator(&start_mark)?;
            if self.src.peek() == b'+' || self.src.peek() == b'-' {
                chomping = self.scan_chomping_indicator();
            }
        }

        self.skip_ws_to_eol(SkipTabs::Yes)?;

        if !self.src.next_is_breakz() {
            return Err(YamlError::new_str(
                start_mark,
                "while scanning a block scalar, did not find expected comment or line break",
            ));
        }

        if self.src.next_is_break() {
            self.read_break(&mut chomping_break);
        }

        if self.src.peek() == b'\t' {
            return Err(YamlError::new_str(
                start_mark,
                "a block scalar content cannot start with a tab",
            ));
        }

        if increment > 0 {
            indent = self.indent.max(1) + increment;
        }

        if indent == 0 {
            self.skip_block_scalar_first_line_indent(&mut indent, &mut trailing_breaks);
        } else {
            self.skip_block_scalar_indent(indent, &mut trailing_breaks);
        }

        // Header followed by EOF, e.g. `- |+`.
        if self.src.next_is_z() {
            let contents = match chomping {
                ChompIndicator::Strip => Vec::new(),
                // No break after the header.
                _ if self.mark.line == start_mark.line => Vec::new(),
                ChompIndicator::Clip => chomping_break,
                ChompIndicator::Keep if trailing_breaks.is_empty() => chomping_break,
                ChompIndicator::Keep => trailing_breaks,
            };
            return self.block_scalar_token(scalar_type, contents, start_mark);
        }

        if self.mark.col < indent && self.mark.col > self.indent {
            return Err(YamlError::new_str(
                self.mark,
                "wrongly indented line in block scalar",
            ));
        }

        while self.mark.col == indent && !self.src.next_is_z() {
            if indent == 1 && self.src.next_is_document_indicator() {
                break;
            }

            trailing_blank = self.src.next_is_blank();
            if !literal && !leading_break.is_empty() && !leading_blank && !trailing_blank {
                string.extend_from_slice(&trailing_breaks);
                if trailing_breaks.is_empty() {
                    string.push(b' ');
                }
            } else {
                string.extend_from_slice(&leading_break);
                string.extend_from_slice(&trailing_breaks);
            }

            leading_break.clear();
            trailing_breaks.clear();

            leading_blank = self.src.next_is_blank();

            self.scan_block_scalar_content_line(&mut string);

            if self.src.next_is_z() {
                break;
            }

            self.read_break(&mut leading_break);

            self.skip_block_scalar_indent(indent, &mut trailing_breaks);
        }

        if chomping != ChompIndicator::Strip {
            string.extend_from_slice(&leading_break);
            // EOF right after content on an indented line counts as a line break.
            if self.src.next_is_z() && self.mark.col > indent.max(1) {
                string.push(b'\n');
            }
        }

        if chomping == ChompIndicator::Keep {
            string.extend_from_slice(&trailing_breaks);
        }

        self.block_scalar_token(scalar_type, string, start_mark)
    }

    fn scan_chomping_indicator(&mut self) -> ChompIndicator {
        let chomping = if self.src.peek() == b'+' {
            ChompIndicator::Keep
        } else {
            ChompIndicator::Strip
        };
        self.skip_non_blank();
        chomping
    }

    fn scan_indentation_indicator(&mut self, start_mark: &Marker) -> YamlResult<u32> {
        if self.src.peek() == b'0' {
            return Err(YamlError::new_str(
                *start_mark,
                "while scanning a block scalar, found an indentation indicator equal to 0",
            ));
        }
        let increment = u32::from(self.src.peek() - b'0');
        self.skip_non_blank();
        Ok(increment)
    }

    fn block_scalar_token(
        &self,
        scalar_type: ScalarType,
        contents: Vec<u8>,
        start_mark: Marker,
    ) -> YamlResult<Token<'input>> {
        let value = String::from_utf8(contents)
            .map_err(|_| YamlError::new_str(start_mark, "block scalar is not valid UTF-8"))?;
        Ok(Token {
            span: self.get_span(start_mark),
            token_type: TokenType::Scalar(Scalar::new(scalar_type, Cow::Owned(value))),
        })
    }

    fn scan_block_scalar_content_line(&mut self, string: &mut Vec<u8>) {
        let start = self.mark.pos;
        let n_bytes = self.src.skip_while_non_breakz();
        self.mark.pos += n_bytes;
        self.mark.col += n_bytes as u32;
        self.leading_whitespace = false;
        string.extend_from_slice(&self.src.bytes()[start..start + n_bytes]);
    }

    fn skip_block_scalar_first_line_indent(&mut self, indent: &mut u32, breaks: &mut Vec<u8>) {
        let mut max_indent = 0;
        loop {
            // Indentation is spaces only.
            while self.src.peek() == b' ' {
                self.skip_blank();
            }

            if self.mark.col > max_indent {
                max_indent = self.mark.col;
            }

            if self.src.next_is_break() {
                self.read_break(breaks);
            } else {
                break;
            }
        }

        // Top level block scalars may have their content at column 1.
        *indent = max_indent.max(self.indent + 1);
    }

    /// Skip the block scalar indentation and empty lines.
    fn skip_block_scalar_indent(&mut self, indent: u32, breaks: &mut Vec<u8>) {
        loop {
            // Indentation is spaces only.
            while self.mark.col < indent && self.src.peek() == b' ' {
                self.skip_blank();
            }

            if self.src.next_is_break() {
                self.read_break(breaks);
            } else {
                break;
            }
        }
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    fn read_break(&mut self, s: &mut Vec<u8>) {
        self.skip_linebreak();
        s.push(b'\n');
    }

    fn scan_anchor(&mut self, alias: bool) -> YamlResult<Token<'input>> {
        let start_mark = self.mark;

        self.skip_non_blank();
        let name_start = self.mark.pos;
        while !self.src.next_is_z() && is_anchor_char(self.src.peek()) {
            self.skip_non_blank();
        }

        let name = self
            .src
            .input()
            .get(name_start..self.mark.pos)
            .unwrap_or_default();
        if name.is_empty() {
            return Err(YamlError::new_str(
                start_mark,
                "while scanning an anchor or alias, did not find expected alphabetic or numeric character",
            ));
        }

        let tok = if alias {
            TokenType::Alias(Cow::Borrowed(name))
        } else {
            TokenType::Anchor(Cow::Borrowed(name))
        };
        Ok(Token {
            span: Span::new(start_mark, self.mark),
            token_type: tok,
        })
    }

    fn scan_tag(&mut self) -> YamlResult<Token<'input>> {
        let start_mark = self.mark;

        // `!<verbatim>`
        let (handle, suffix) = if self.src.peek_nth(1) == b'<' {
            (String::new(), self.scan_verbatim_tag(&start_mark)?)
        } else {
            // `!suffix` or `!handle!suffix`
            let head = self.scan_tag_handle(false, &start_mark)?;
            if head.len() >= 2 && head.starts_with('!') && head.ends_with('!') {
                let suffix = self.scan_tag_shorthand_suffix("", &start_mark)?;
                (head, suffix)
            } else {
                let suffix = self.scan_tag_shorthand_suffix(&head, &start_mark)?;
                // Lone `!` is the non-specific tag.
                if suffix.is_empty() {
                    (String::new(), String::from("!"))
                } else {
                    (String::from("!"), suffix)
                }
            }
        };

        if self.src.next_is_blank_or_breakz() || (self.flow_level > 0 && self.src.next_is_flow()) {
            // A tag may be followed by an empty node.
            Ok(Token {
                span: Span::new(start_mark, self.mark),
                token_type: TokenType::Tag(Tag { handle, suffix }),
            })
        } else {
            Err(YamlError::new_str(
                start_mark,
                "while scanning a tag, did not find expected whitespace or line break",
            ))
        }
    }

    fn scan_verbatim_tag(&mut self, start_mark: &Marker) -> YamlResult<String> {
        self.skip_n_non_blank(2);

        let start = self.mark.pos;
        while is_uri_char(self.src.peek()) {
            if self.src.peek() == b'%' {
                self.skip_uri_escape(start_mark)?;
            } else {
                self.skip_non_blank();
            }
        }
        let raw = &self.src.bytes()[start..self.mark.pos];

        if self.src.peek() != b'>' {
            return Err(YamlError::new_str(
                *start_mark,
                "while scanning a verbatim tag, did not find the expected '>'",
            ));
        }
        self.skip_non_blank();

        decode_uri(raw, start_mark)
    }

    fn scan_tag_handle(&mut self, directive: bool, mark: &Marker) -> YamlResult<String> {
        if self.src.peek() != b'!' {
            return Err(YamlError::new_str(
                *mark,
                "while scanning a tag, did not find expected '!'",
            ));
        }

        let start = self.mark.pos;
        self.skip_non_blank();

        let n_chars = self.src.skip_while_alpha();
        self.mark.pos += n_chars;
        self.mark.col += n_chars as u32;

        if self.src.peek() == b'!' {
            self.skip_non_blank();
        } else if directive && n_chars != 0 {
            // Tag tokens fall back to a `!suffix`, `%TAG` handles must be closed.
            return Err(YamlError::new_str(
                *mark,
                "while parsing a tag directive, did not find expected '!'",
            ));
        }
        let handle = self
            .src
            .input()
            .get(start..self.mark.pos)
            .unwrap_or_default();
        Ok(String::from(handle))
    }

    fn scan_tag_shorthand_suffix(&mut self, head: &str, mark: &Marker) -> YamlResult<String> {
        let mut length = head.len();
        let start = self.mark.pos;

        while is_tag_char(self.src.peek()) {
            if self.src.peek() == b'%' {
                self.skip_uri_escape(mark)?;
            } else {
                self.skip_non_blank();
            }
            length += 1;
        }

        if length == 0 {
            return Err(YamlError::new_str(
                *mark,
                "while parsing a tag, did not find expected tag URI",
            ));
        }

        // Leading `!` is not part of the suffix.
        let mut raw = Vec::with_capacity(head.len() + self.mark.pos - start);
        if head.len() > 1 {
            raw.extend_from_slice(&head.as_bytes()[1..]);
        }
        raw.extend_from_slice(&self.src.bytes()[start..self.mark.pos]);
        decode_uri(&raw, mark)
    }

    /// Checks a single `%XX` escape and steps over it.
    fn skip_uri_escape(&mut self, mark: &Marker) -> ScanResult {
        let valid = self.src.peek() == b'%'
            && self.src.peek_nth(1).is_ascii_hexdigit()
            && self.src.peek_nth(2).is_ascii_hexdigit();
        if !valid {
            return Err(YamlError::new_str(
                *mark,
                "while parsing a tag, found an invalid escape sequence",
            ));
        }
        self.skip_n_non_blank(3);
        Ok(())
    }

    /// Closes every block level deeper than `col`. Returns `true` when any level was closed.
    fn unroll_indent(&mut self, col: u32) -> bool {
        if self.flow_level > 0 {
            return false;
        }

        let mut dedented = false;
        while self.indent > col {
            let Some(indent) = self.indents.pop() else {
                break;
            };
            dedented = true;
            self.indent = indent.indent;
            if indent.needs_block_end {
                self.tokens.push_back(Token {
                    span: Span::empty(self.mark),
                    token_type: TokenType::BlockEnd,
                });
            }
        }
        dedented
    }

    fn roll_indent(
        &mut self,
        col: u32,
        number: Option<usize>,
        token_type: TokenType<'input>,
        mark: Marker,
    ) {
        if self.flow_level > 0 {
            return;
        }

        if self.indent <= col {
            if let Some(indent) = self.indents.last() {
                if !indent.needs_block_end {
                    self.indent = indent.indent;
                    self.indents.pop();
                }
            }
        }

        if self.indent < col {
            self.indents.push(Indent {
                indent: self.indent,
                needs_block_end: true,
            });
            self.indent = col;
            let token = Token {
                span: Span::empty(mark),
                token_type,
            };
            match number {
                Some(n) => self.insert_token(n, token),
                None => self.tokens.push_back(token),
            }
        }
    }

    fn roll_one_col_indent(&mut self) {
        if self.flow_level == 0 && self.indents.last().map_or(false, |x| x.needs_block_end) {
            self.indents.push(Indent {
                indent: self.indent,
                needs_block_end: false,
            });
            self.indent += 1;
        }
    }

    fn unroll_non_block_indents(&mut self) {
        while let Some(indent) = self.indents.last() {
            if indent.needs_block_end {
                break;
            }
            self.indent = indent.indent;
            self.indents.pop();
        }
    }

    /// Inserts a token in front of the one with the given absolute token number.
    fn insert_token(&mut self, token_number: usize, token: Token<'input>) {
        let pos = token_number
            .saturating_sub(self.tokens_parsed)
            .min(self.tokens.len());
        self.tokens.insert(pos, token);
    }

    fn increase_flow_level(&mut self, kind: FlowKind) -> ScanResult {
        if self.flow_level >= self.config.max_flow_depth {
            return Err(YamlError::new_str(self.mark, "recursion limit exceeded"));
        }
        self.simple_keys.push(SimpleKey::new(Marker::default()));
        self.flow_stack.push(kind);
        self.flow_level += 1;
        Ok(())
    }

    fn decrease_flow_level(&mut self) {
        if self.flow_level > 0 {
            self.flow_level -= 1;
            self.flow_stack.pop();
            self.simple_keys.pop();
        }
    }

    fn stale_simple_keys(&mut self) -> ScanResult {
        let max_len = self.config.max_simple_key_len;
        for sk in &mut self.simple_keys {
            if sk.possible
                // Block simple keys are single line.
                && self.flow_level == 0
                && (sk.mark.line < self.mark.line || sk.mark.pos + max_len < self.mark.pos)
            {
                if sk.required {
                    return Err(YamlError::new_str(self.mark, "simple key expect ':'"));
                }
                sk.possible = false;
            }
        }
        Ok(())
    }

    fn remove_simple_key(&mut self) -> ScanResult {
        if let Some(last) = self.simple_keys.last_mut() {
            if last.possible && last.required {
                return Err(YamlError::new_str(self.mark, "simple key expected"));
            }
            last.possible = false;
        }
        Ok(())
    }

    fn save_simple_key(&mut self) {
        if self.simple_key_allowed {
            let required = self.flow_level == 0
                && self.indent == self.mark.col
                && self.indents.last().map_or(false, |x| x.needs_block_end);

            let sk = SimpleKey {
                mark: self.mark,
                required,
                possible: true,
                token_number: self.tokens_parsed + self.tokens.len(),
            };

            if let Some(last) = self.simple_keys.last_mut() {
                *last = sk;
            }
        }
    }

    fn scan_directive_name(&mut self) -> YamlResult<&'input str> {
        let start_mark = self.mark;

        let n_chars = self.src.skip_while_alpha();
        self.mark.pos += n_chars;
        self.mark.col += n_chars as u32;

        let name = self
            .src
            .input()
            .get(start_mark.pos..self.mark.pos)
            .unwrap_or_default();
        if name.is_empty() {
            return Err(YamlError::new_str(
                start_mark,
                "while scanning a directive, could not find expected directive name",
            ));
        }

        if !self.src.next_is_blank_or_breakz() {
            return Err(YamlError::new_str(
                start_mark,
                "while scanning a directive, found unexpected non-alphabetical character",
            ));
        }

        Ok(name)
    }

    fn skip_directive_blanks(&mut self) {
        let n_blanks = self.src.skip_while_blank();
        self.mark.pos += n_blanks;
        self.mark.col += n_blanks as u32;
    }

    fn scan_version_directive_value(&mut self, marker: &Marker) -> YamlResult<Directive<'input>> {
        self.skip_directive_blanks();

        let major = self.scan_version_directive_number(marker)?;

        if self.src.peek() != b'.' {
            return Err(YamlError::new_str(
                *marker,
                "while scanning a YAML directive, did not find expected digit or '.' character",
            ));
        }
        self.skip_non_blank();

        let minor = self.scan_version_directive_number(marker)?;

        Ok(Directive::Version { major, minor })
    }

    fn scan_tag_directive_value(&mut self, mark: &Marker) -> YamlResult<Directive<'input>> {
        self.skip_directive_blanks();
        let handle = self.scan_tag_handle(true, mark)?;

        self.skip_directive_blanks();
        let prefix = self.scan_tag_prefix(mark)?;

        if self.src.next_is_blank_or_breakz() {
            Ok(Directive::Tag {
                handle: Cow::Owned(handle),
                prefix: Cow::Owned(prefix),
            })
        } else {
            Err(YamlError::new_str(
                *mark,
                "while scanning TAG, did not find expected whitespace or line break",
            ))
        }
    }

    fn scan_version_directive_number(&mut self, mark: &Marker) -> YamlResult<u8> {
        let mut val = 0u32;
        let mut length = 0usize;
        while self.src.peek().is_ascii_digit() {
            if length + 1 > 9 {
                return Err(YamlError::new_str(
                    *mark,
                    "while scanning a YAML directive, found extremely long version number",
                ));
            }
            length += 1;
            val = val * 10 + u32::from(self.src.peek() - b'0');
            self.skip_non_blank();
        }

        if length == 0 {
            return Err(YamlError::new_str(
                *mark,
                "while scanning a YAML directive, did not find expected version number",
            ));
        }

        u8::try_from(val).map_err(|_| {
            YamlError::new_str(
                *mark,
                "while scanning a YAML directive, found extremely long version number",
            )
        })
    }

    fn scan_tag_prefix(&mut self, start_mark: &Marker) -> YamlResult<String> {
        let start = self.mark.pos;

        if self.src.peek() == b'!' {
            self.skip_non_blank();
        } else if !is_tag_char(self.src.peek()) {
            return Err(YamlError::new_str(
                *start_mark,
                "invalid global tag character",
            ));
        } else if self.src.peek() == b'%' {
            self.skip_uri_escape(start_mark)?;
        } else {
            self.skip_non_blank();
        }

        while is_uri_char(self.src.peek()) {
            if self.src.peek() == b'%' {
                self.skip_uri_escape(start_mark)?;
            } else {
                self.skip_non_blank();
            }
        }

        decode_uri(&self.src.bytes()[start..self.mark.pos], start_mark)
    }
}

/// Decodes the `%XX` escapes of a tag or tag prefix.
fn decode_uri(raw: &[u8], mark: &Marker) -> YamlResult<String> {
    let decoded = urlencoding::decode_binary(raw);
    String::from_utf8(decoded.into_owned()).map_err(|_| {
        YamlError::new_str(
            *mark,
            "while parsing a tag, found an invalid UTF-8 codepoint",
        )
    })
}

impl<'input> Iterator for Tokenizer<'input> {
    type Item = YamlResult<Token<'input>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.error.is_some() || self.stream_end_produced {
            return None;
        }
        match self.read() {
            Ok(true) => self.take_token().map(Ok),
            Ok(false) => None,
            Err(err) => Some(Err(err)),
        }
    }
}
