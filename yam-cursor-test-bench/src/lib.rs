pub mod consts;

use std::fmt::Write;

use yam_cursor::{Directive, EventKind, ParseEvent, Parser, Tag, Token, TokenType, Tokenizer};

///
/// Assert that in for given input, the parser generates expected set of events
///
/// Expected strings ending in `ERR` only need to match the events emitted before the error.
///
/// # Panics
///
///    Function panics if there is a difference between expected events string and one generated
///    from the input.
pub fn assert_eq_event(input: &str, events: &str) {
    let mut line = String::new();
    let mut parser = Parser::from_str(input);

    write_str_from_event(&mut line, &mut parser, false);
    let expected = unescape_text(events);
    match expected.strip_suffix("ERR") {
        Some(prefix) => {
            assert!(line.ends_with("\nERR"), "Expected error in case: {input}\n{line}");
            assert!(
                line.starts_with(prefix),
                "Error in case: {input}\nexpected prefix:{prefix}\nactual:{line}"
            );
        }
        None => assert_eq!(line, expected, "Error in case: {input}"),
    }
}

///
/// Assert that in for given input, the tokenizer generates expected set of tokens.
///
/// # Panics
///
///    Function panics if the token dump differs from `tokens`.
pub fn assert_eq_tokens(input: &str, tokens: &str) {
    let mut line = String::new();
    let mut tokenizer = Tokenizer::from_str(input);

    write_str_from_tokens(&mut line, &mut tokenizer);
    assert_eq!(line, unescape_text(tokens), "Error in case: {input}");
}

pub fn write_str_from_event(line: &mut String, parser: &mut Parser<'_>, emit_stream_token: bool) {
    for result in parser.by_ref() {
        match result {
            Ok(ev) => write_event(line, &ev, emit_stream_token),
            Err(err) => {
                line.push_str("\nERR");
                if emit_stream_token {
                    let _ = write!(line, "{err:?}");
                }
                break;
            }
        }
    }
    if emit_stream_token {
        line.push('\n');
    }
}

fn write_event(line: &mut String, ev: &ParseEvent<'_>, emit_stream_token: bool) {
    let _ = match ev.kind {
        EventKind::StreamStart if emit_stream_token => write!(line, "+STR"),
        EventKind::StreamEnd if emit_stream_token => write!(line, "\n-STR"),
        EventKind::DocumentStart => write!(line, "\n+DOC"),
        EventKind::DocumentEnd => write!(line, "\n-DOC"),
        EventKind::Alias => {
            write!(line, "\n=ALI *{}", ev.anchor.as_deref().unwrap_or_default())
        }
        EventKind::Scalar => {
            let anchor = extract_anchor(ev);
            let tag_info = extract_tag_full(ev.tag.as_ref());
            match &ev.scalar {
                Some(scalar) => write!(
                    line,
                    "\n=VAL{anchor}{tag_info} {}{}",
                    scalar.style(),
                    scalar.as_str()
                ),
                None => write!(line, "\n=VAL{anchor}{tag_info} :"),
            }
        }
        EventKind::SequenceStart => {
            let tag_info = extract_tag_full(ev.tag.as_ref());
            let anchor = extract_anchor(ev);
            write!(line, "\n+SEQ{anchor}{tag_info}")
        }
        EventKind::SequenceEnd => write!(line, "\n-SEQ"),
        EventKind::MappingStart => {
            let tag_info = extract_tag_full(ev.tag.as_ref());
            let anchor = extract_anchor(ev);
            write!(line, "\n+MAP{anchor}{tag_info}")
        }
        EventKind::MappingEnd => write!(line, "\n-MAP"),
        _ => Ok(()),
    };
}

fn extract_tag_full(tag: Option<&Tag>) -> String {
    if let Some(x) = tag {
        let cap = x.suffix.len() + x.handle.len() + 3;
        let mut sb = String::with_capacity(cap);
        sb.push_str(" <");
        sb.push_str(&x.handle);
        sb.push_str(&x.suffix);
        sb.push('>');
        sb
    } else {
        String::default()
    }
}

fn extract_anchor(ev: &ParseEvent<'_>) -> String {
    match ev.anchor.as_deref() {
        Some(name) => format!(" &{name}"),
        None => String::default(),
    }
}

/// Dumps every token on its own line, one tag per token kind.
pub fn write_str_from_tokens(line: &mut String, tokenizer: &mut Tokenizer<'_>) {
    for result in tokenizer.by_ref() {
        match result {
            Ok(token) => write_token(line, &token),
            Err(_) => {
                line.push_str("\nERR");
                break;
            }
        }
    }
}

fn write_token(line: &mut String, token: &Token<'_>) {
    let _ = match &token.token_type {
        TokenType::StreamStart => write!(line, "+STR"),
        TokenType::StreamEnd => write!(line, "\n-STR"),
        TokenType::DocumentStart => write!(line, "\n---"),
        TokenType::DocumentEnd => write!(line, "\n..."),
        TokenType::BlockSequenceStart => write!(line, "\n+BSEQ"),
        TokenType::BlockMappingStart => write!(line, "\n+BMAP"),
        TokenType::BlockEnd => write!(line, "\n-BLK"),
        TokenType::BlockEntry => write!(line, "\nENT"),
        TokenType::FlowEntry => write!(line, "\n,"),
        TokenType::Key => write!(line, "\nKEY"),
        TokenType::Value => write!(line, "\nVAL"),
        TokenType::FlowSequenceStart => write!(line, "\n["),
        TokenType::FlowSequenceEnd => write!(line, "\n]"),
        TokenType::FlowMappingStart => write!(line, "\n{{"),
        TokenType::FlowMappingEnd => write!(line, "\n}}"),
        TokenType::Alias(name) => write!(line, "\n*{name}"),
        TokenType::Anchor(name) => write!(line, "\n&{name}"),
        TokenType::Tag(tag) => write!(line, "\n<{}{}>", tag.handle, tag.suffix),
        TokenType::Scalar(scalar) => write!(line, "\n{}{}", scalar.style(), scalar.as_str()),
        TokenType::Directive(Directive::Version { major, minor }) => {
            write!(line, "\n%YAML {major}.{minor}")
        }
        TokenType::Directive(Directive::Tag { handle, prefix }) => {
            write!(line, "\n%TAG {handle} {prefix}")
        }
        TokenType::Directive(Directive::Reserved { name }) => write!(line, "\n%{name}"),
    };
}

#[derive(Copy, Clone, PartialEq, Eq)]
enum EscapeState {
    Default,
    Slash,
}

pub fn unescape_text(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut state = EscapeState::Default;
    for char in text.chars() {
        match (char, state) {
            ('\\', EscapeState::Default) => {
                state = EscapeState::Slash;
            }
            ('n', EscapeState::Slash) => {
                state = EscapeState::Default;
                output.push('\n');
            }
            ('r', EscapeState::Slash) => {
                state = EscapeState::Default;
                output.push('\r');
            }
            ('t', EscapeState::Slash) => {
                state = EscapeState::Default;
                output.push('\t');
            }
            ('b', EscapeState::Slash) => {
                state = EscapeState::Default;
                output.push('\x08');
            }
            ('\\', EscapeState::Slash) => {
                state = EscapeState::Default;
                output.push('\\');
            }
            (_, EscapeState::Slash) => {
                state = EscapeState::Default;
                output.push('\\');
                output.push(char);
            }
            (_, EscapeState::Default) => output.push(char),
        }
    }

    output
}
