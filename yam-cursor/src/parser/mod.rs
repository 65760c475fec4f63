mod event;
mod machine;

pub use event::ParseEvent;
pub use machine::Parser;

#[cfg(test)]
mod test {
    use alloc::string::ToString;
    use alloc::vec::Vec;

    use yam_cursor_common::{EventKind, YamlError};

    use crate::parser::Parser;

    fn event_kinds(input: &str) -> Vec<EventKind> {
        Parser::from_str(input)
            .map(|event| event.unwrap().kind)
            .collect()
    }

    #[test]
    fn test_empty_stream() {
        let mut parser = Parser::new(b"");
        assert_eq!(parser.current_event_kind(), EventKind::Nothing);
        assert!(parser.read().unwrap());
        assert_eq!(parser.current_event_kind(), EventKind::StreamStart);
        assert!(parser.read().unwrap());
        assert_eq!(parser.current_event_kind(), EventKind::StreamEnd);
        assert!(!parser.read().unwrap());
    }

    #[test]
    fn test_skip_current_node() {
        let yaml = "a: 1\n\
                    b: { ba: 2 }\n\
                    c: { ca: [100, 200, 300] }\n\
                    d: { da: [100, 200, 300], db: 100 }\n\
                    e: { ea: [{eaa: 100}, 200, 300], db: {} }\n\
                    f: [{ fa: 100, fb: [100, 200, 300] }]";
        let mut parser = Parser::from_str(yaml);

        parser.skip_after(EventKind::MappingStart).unwrap();
        assert_eq!(parser.get_scalar_as_string().unwrap(), "a");

        for next_key in ["b", "c", "d", "e", "f"] {
            parser.read().unwrap();
            parser.skip_current_node().unwrap();
            assert_eq!(parser.get_scalar_as_string().unwrap(), next_key);
        }

        parser.read().unwrap();
        parser.skip_current_node().unwrap();
        assert_eq!(parser.current_event_kind(), EventKind::MappingEnd);
    }

    #[test]
    fn test_tag_on_block_mapping() {
        let mut parser = Parser::from_str("!tag1\na: 100\nb: 200");
        parser.skip_after(EventKind::DocumentStart).unwrap();
        assert_eq!(parser.current_event_kind(), EventKind::MappingStart);
        let tag = parser.try_get_current_tag().unwrap();
        assert_eq!(tag.to_string(), "!tag1");
    }

    #[test]
    fn test_anchor_and_alias() {
        let mut parser = Parser::from_str("a: &x 1\nb: *x\n");
        parser.skip_after(EventKind::MappingStart).unwrap();
        assert_eq!(parser.read_scalar_as_string().unwrap(), "a");
        assert_eq!(parser.try_get_current_anchor(), Some("x"));
        assert_eq!(parser.read_scalar_as_string().unwrap(), "1");
        assert_eq!(parser.read_scalar_as_string().unwrap(), "b");
        assert_eq!(parser.current_event_kind(), EventKind::Alias);
        assert_eq!(parser.try_get_current_anchor(), Some("x"));
    }

    #[test]
    fn test_unknown_alias() {
        let result: Result<Vec<_>, _> = Parser::from_str("a: *nope").collect();
        assert!(matches!(result, Err(YamlError::Parse { .. })));
    }

    #[test]
    fn test_tag_handles() {
        let mut parser = Parser::from_str("%TAG !e! tag:example.com,2000:\n--- !e!foo bar\n");
        parser.skip_after(EventKind::DocumentStart).unwrap();
        assert_eq!(
            parser.try_get_current_tag().unwrap().to_string(),
            "tag:example.com,2000:foo"
        );
        assert_eq!(parser.read_scalar_as_string().unwrap(), "bar");

        let result: Result<Vec<_>, _> = Parser::from_str("--- !e!foo bar\n").collect();
        assert!(matches!(result, Err(YamlError::Parse { .. })));

        let mut parser = Parser::from_str("!!int 3");
        parser.skip_after(EventKind::DocumentStart).unwrap();
        assert!(parser.try_get_current_tag().unwrap().is_yaml_core_schema());
    }

    #[test]
    fn test_tag_handles_outlive_document() {
        let input = "%TAG !u! tag:unity3d.com,2011:\n--- !u!1 a\n--- !u!4 b\n";
        let tags: Vec<_> = Parser::from_str(input)
            .filter_map(|event| event.unwrap().tag)
            .map(|tag| tag.to_string())
            .collect();
        assert_eq!(tags, ["tag:unity3d.com,2011:1", "tag:unity3d.com,2011:4"]);
    }

    #[test]
    fn test_anchors_reset_per_document() {
        let result: Result<Vec<_>, _> = Parser::from_str("--- &a 1
--- *a
").collect();
        assert!(matches!(result, Err(YamlError::Parse { .. })));
    }

    #[test]
    fn test_incompatible_version() {
        let result: Result<Vec<_>, _> = Parser::from_str("%YAML 2.0\n--- a\n").collect();
        assert!(matches!(result, Err(YamlError::Parse { .. })));

        let kinds = event_kinds("%YAML 1.1\n--- a\n");
        assert_eq!(kinds.len(), 5);
    }

    #[test]
    fn test_scalar_accessors_reject_other_events() {
        let mut parser = Parser::from_str("[a]");
        parser.read().unwrap();
        assert_eq!(
            parser.get_scalar_as_string(),
            Err(YamlError::UnexpectedEvent {
                expected: EventKind::Scalar,
                found: EventKind::StreamStart,
            })
        );
        parser.skip_after(EventKind::DocumentStart).unwrap();
        assert!(matches!(
            parser.skip_after(EventKind::Alias),
            Err(YamlError::InvalidState(_))
        ));
    }

    #[test]
    fn test_skip_requires_node() {
        let mut parser = Parser::from_str("a");
        parser.read().unwrap();
        assert!(matches!(
            parser.skip_current_node(),
            Err(YamlError::UnexpectedEvent {
                found: EventKind::StreamStart,
                ..
            })
        ));
    }

    #[test]
    fn test_read_scalar_borrows() {
        let mut parser = Parser::from_str("key: value");
        parser.skip_after(EventKind::MappingStart).unwrap();
        let key = parser.read_scalar().unwrap();
        assert!(key.is_borrowed());
        assert_eq!(key.as_str(), "key");
        assert_eq!(parser.read_scalar().unwrap().as_str(), "value");
        assert_eq!(parser.current_event_kind(), EventKind::MappingEnd);
    }

    #[test]
    fn test_single_pair_mapping_in_flow_sequence() {
        assert_eq!(
            event_kinds("[a: b, c]"),
            [
                EventKind::StreamStart,
                EventKind::DocumentStart,
                EventKind::SequenceStart,
                EventKind::MappingStart,
                EventKind::Scalar,
                EventKind::Scalar,
                EventKind::MappingEnd,
                EventKind::Scalar,
                EventKind::SequenceEnd,
                EventKind::DocumentEnd,
                EventKind::StreamEnd,
            ]
        );
    }

    #[test]
    fn test_errors_are_replayed() {
        let mut parser = Parser::from_str("a: 1\n- b\n");
        let err = loop {
            match parser.read() {
                Ok(true) => continue,
                Ok(false) => panic!("expected an error"),
                Err(err) => break err,
            }
        };
        assert_eq!(parser.read(), Err(err));
        assert_eq!(parser.current_event_kind(), EventKind::Nothing);
    }
}
