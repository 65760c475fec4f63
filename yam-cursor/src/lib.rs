#![no_std]
extern crate alloc;
extern crate core;
extern crate yam_cursor_common;

pub use config::TokenizerConfig;
pub use parser::{ParseEvent, Parser};
pub use tokenizer::{Token, Tokenizer};
pub use yam_cursor_common::{
    Directive, EventKind, Marker, Scalar, ScalarType, Span, Tag, TokenKind, TokenType, YamlError,
    YamlResult,
};

mod config;
pub mod parser;
pub mod tokenizer;
