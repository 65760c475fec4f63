mod char_utils;
mod scanner;
mod source;
mod text;

pub use scanner::{Token, Tokenizer};

#[cfg(test)]
mod test {
    use alloc::vec::Vec;

    use yam_cursor_common::{Directive, ScalarType, TokenKind, TokenType, YamlError};

    use crate::config::TokenizerConfig;
    use crate::tokenizer::Tokenizer;

    fn kinds(input: &str) -> Vec<TokenKind> {
        let mut tokenizer = Tokenizer::from_str(input);
        let mut kinds = Vec::new();
        while tokenizer.read().unwrap() {
            kinds.push(tokenizer.current_kind());
        }
        kinds
    }

    #[test]
    fn test_empty_input() {
        let mut tokenizer = Tokenizer::new(b"");
        assert_eq!(tokenizer.current_kind(), TokenKind::None);
        assert!(tokenizer.read().unwrap());
        assert_eq!(tokenizer.current_kind(), TokenKind::StreamStart);
        assert!(tokenizer.read().unwrap());
        assert_eq!(tokenizer.current_kind(), TokenKind::StreamEnd);
        assert!(!tokenizer.read().unwrap());
        assert!(!tokenizer.read().unwrap());
    }

    #[test]
    fn test_take_scalar_keeps_kind() {
        let mut tokenizer = Tokenizer::from_str("'quoted'");
        tokenizer.read().unwrap();
        assert!(matches!(
            tokenizer.take_scalar(),
            Err(YamlError::InvalidState(_))
        ));
        tokenizer.read().unwrap();
        assert_eq!(tokenizer.current_kind(), TokenKind::SingleQuotedScalar);
        let scalar = tokenizer.take_scalar().unwrap();
        assert_eq!(scalar.as_str(), "quoted");
        assert_eq!(scalar.style(), ScalarType::SingleQuote);
        assert_eq!(tokenizer.current_kind(), TokenKind::SingleQuotedScalar);
        assert_eq!(tokenizer.take_scalar().unwrap().as_str(), "");
    }

    #[test]
    fn test_plain_scalar_borrows_input() {
        let mut tokenizer = Tokenizer::from_str("a scaler");
        tokenizer.read().unwrap();
        tokenizer.read().unwrap();
        let scalar = tokenizer.take_scalar().unwrap();
        assert!(scalar.is_borrowed());
        assert_eq!(scalar.as_str(), "a scaler");
    }

    #[test]
    fn test_folded_plain_scalar() {
        let mut tokenizer = Tokenizer::from_str("first  \n  second\n\n  third ");
        tokenizer.read().unwrap();
        tokenizer.read().unwrap();
        let scalar = tokenizer.take_scalar().unwrap();
        assert!(!scalar.is_borrowed());
        assert_eq!(scalar.as_str(), "first second\nthird");
    }

    #[test]
    fn test_quoted_escapes() {
        let mut tokenizer = Tokenizer::from_str(r#""tab\there ☺ 'x'""#);
        tokenizer.read().unwrap();
        tokenizer.read().unwrap();
        assert_eq!(tokenizer.take_scalar().unwrap().as_str(), "tab\there \u{263A} 'x'");

        let mut tokenizer = Tokenizer::from_str("'it''s'");
        tokenizer.read().unwrap();
        tokenizer.read().unwrap();
        assert_eq!(tokenizer.take_scalar().unwrap().as_str(), "it's");
    }

    #[test]
    fn test_block_sequence_tokens() {
        assert_eq!(
            kinds("- item 1\n- item 2\n"),
            [
                TokenKind::StreamStart,
                TokenKind::BlockSequenceStart,
                TokenKind::BlockEntryStart,
                TokenKind::PlainScalar,
                TokenKind::BlockEntryStart,
                TokenKind::PlainScalar,
                TokenKind::BlockEnd,
                TokenKind::StreamEnd,
            ]
        );
    }

    #[test]
    fn test_directive_payload() {
        let mut tokenizer = Tokenizer::from_str("%TAG !u! tag:unity3d.com,2011:\n--- !u!29\n");
        tokenizer.read().unwrap();
        tokenizer.read().unwrap();
        let token = tokenizer.take_token().unwrap();
        match token.token_type {
            TokenType::Directive(Directive::Tag { handle, prefix }) => {
                assert_eq!(handle, "!u!");
                assert_eq!(prefix, "tag:unity3d.com,2011:");
            }
            other => panic!("unexpected token {other:?}"),
        }
        tokenizer.read().unwrap();
        assert_eq!(tokenizer.current_kind(), TokenKind::DocumentStart);
        tokenizer.read().unwrap();
        let token = tokenizer.take_token().unwrap();
        match token.token_type {
            TokenType::Tag(tag) => {
                assert_eq!(tag.handle, "!u!");
                assert_eq!(tag.suffix, "29");
            }
            other => panic!("unexpected token {other:?}"),
        }
    }

    #[test]
    fn test_error_is_latched() {
        let mut tokenizer = Tokenizer::from_str("\"unterminated");
        assert!(tokenizer.read().unwrap());
        let err = tokenizer.read().unwrap_err();
        assert!(matches!(err, YamlError::Tokenize { .. }));
        assert_eq!(tokenizer.read().unwrap_err(), err);
        assert_eq!(tokenizer.error(), Some(&err));
    }

    #[test]
    fn test_invalid_utf8() {
        let mut tokenizer = Tokenizer::new(b"a: 1\nb: \xFF");
        assert!(tokenizer.read().unwrap());
        assert_eq!(tokenizer.current_kind(), TokenKind::StreamStart);
        match tokenizer.read() {
            Err(YamlError::InvalidUtf8 { mark }) => {
                assert_eq!(mark.pos, 8);
                assert_eq!(mark.line, 2);
                assert_eq!(mark.col, 4);
            }
            other => panic!("unexpected result {other:?}"),
        }
    }

    #[test]
    fn test_flow_depth_limit() {
        let config = TokenizerConfig::default().with_max_flow_depth(2);
        let tokenizer = Tokenizer::with_config(b"[[[a]]]", config);
        let result: Result<Vec<_>, _> = tokenizer.collect();
        assert!(result.is_err());

        let tokenizer = Tokenizer::with_config(b"[[a]]", config);
        let result: Result<Vec<_>, _> = tokenizer.collect();
        assert!(result.is_ok());
    }

    #[test]
    fn test_simple_key_length_limit() {
        let config = TokenizerConfig::default().with_max_simple_key_len(4);
        let tokenizer = Tokenizer::with_config(b"abcdefgh: 1", config);
        assert!(tokenizer.collect::<Result<Vec<_>, _>>().is_err());

        let tokenizer = Tokenizer::with_config(b"abc: 1", config);
        assert!(tokenizer.collect::<Result<Vec<_>, _>>().is_ok());
    }

    #[test]
    fn test_current_token_span() {
        let mut tokenizer = Tokenizer::from_str("- item");
        while tokenizer.current_kind() != TokenKind::PlainScalar {
            assert!(tokenizer.read().unwrap());
        }
        let token = tokenizer.current_token().unwrap();
        assert_eq!(token.span.start.col, 3);
        assert_eq!(token.span.end.col, 7);
    }

    #[test]
    fn test_unbalanced_brackets() {
        let tokenizer = Tokenizer::from_str("[a}");
        assert!(tokenizer.collect::<Result<Vec<_>, _>>().is_err());

        let tokenizer = Tokenizer::from_str("]");
        assert!(tokenizer.collect::<Result<Vec<_>, _>>().is_err());

        let tokenizer = Tokenizer::from_str("{a: b");
        assert!(tokenizer.collect::<Result<Vec<_>, _>>().is_err());
    }

    #[test]
    fn test_document_annotation_skipped() {
        assert_eq!(
            kinds("--- !u!1 &2 stripped\nGameObject:\n"),
            [
                TokenKind::StreamStart,
                TokenKind::DocumentStart,
                TokenKind::Tag,
                TokenKind::Anchor,
                TokenKind::BlockMappingStart,
                TokenKind::KeyStart,
                TokenKind::PlainScalar,
                TokenKind::ValueStart,
                TokenKind::BlockEnd,
                TokenKind::StreamEnd,
            ]
        );
    }

    #[test]
    fn test_scalar_after_properties_on_marker_line() {
        for input in [
            "--- !!str foo\nbar\n",
            "--- &a foo\nbar\n",
            "--- &a stripped words\nbar\n",
        ] {
            let scalars: Vec<_> = Tokenizer::from_str(input)
                .filter_map(|token| match token.unwrap().token_type {
                    TokenType::Scalar(scalar) => Some(scalar.into_owned()),
                    _ => None,
                })
                .collect();
            assert_eq!(scalars.len(), 1, "{input}");
            assert_ne!(scalars[0].as_str(), "bar", "{input}");
            assert!(scalars[0].as_str().ends_with(" bar"), "{input}");
        }

        let mut tokenizer = Tokenizer::from_str("--- !!str stripped\n");
        while tokenizer.current_kind() != TokenKind::PlainScalar {
            assert!(tokenizer.read().unwrap());
        }
        assert_eq!(tokenizer.take_scalar().unwrap().as_str(), "stripped");
    }

    #[test]
    fn test_dedent_between_levels() {
        let mut tokenizer = Tokenizer::from_str("a:\n  b: 1\n c: 2");
        let err = loop {
            match tokenizer.read() {
                Ok(true) => assert_ne!(tokenizer.current_kind(), TokenKind::StreamEnd),
                Ok(false) => panic!("dedent was accepted"),
                Err(err) => break err,
            }
        };
        match err {
            YamlError::Tokenize { mark, info } => {
                assert_eq!(mark.line, 3);
                assert_eq!(mark.col, 2);
                assert_eq!(info, "invalid indentation");
            }
            other => panic!("unexpected error {other:?}"),
        }

        assert_eq!(
            kinds("a:\n  b: 1\nc: 2").last(),
            Some(&TokenKind::StreamEnd)
        );
        assert_eq!(
            kinds("a:\n  - b\n  - c\nd:\n- e\n").last(),
            Some(&TokenKind::StreamEnd)
        );
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let mut tokenizer = Tokenizer::from_str("a: 'x");
        let results: Vec<_> = tokenizer.by_ref().collect();
        assert!(results.last().unwrap().is_err());
        assert!(tokenizer.next().is_none());
    }
}
