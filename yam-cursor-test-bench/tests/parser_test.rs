use yam_cursor::{EventKind, Parser, ScalarType, TokenizerConfig, YamlError};

const UNITY_SCENE: &str = "%YAML 1.1
%TAG !u! tag:unity3d.com,2011:
--- !u!29 &1
OcclusionCullingSettings:
  m_ObjectHideFlags: 0
  serializedVersion: 2
  m_OcclusionBakeSettings:
    smallestOccluder: 5
    smallestHole: 0.25
    backfaceThreshold: 100
  m_SceneGUID: 00000000000000000000000000000000
  m_OcclusionCullingData: {fileID: 0}
--- !u!104 &2
RenderSettings:
  m_ObjectHideFlags: 0
  serializedVersion: 9
--- !u!4 &62555683 stripped
Transform:
  m_CorrespondingSourceObject: {fileID: 180319434217191821, guid: 0f48f06ff1ceb490892217c1fb56ad67,
    type: 3}
  m_PrefabInstance: {fileID: 62555682}
  m_PrefabAsset: {fileID: 0}
--- !u!4 &65300469 stripped
Transform:
  m_CorrespondingSourceObject: {fileID: 180319434217191821, guid: 89d43c10426ce4d61b44a4261ce6e27d,
    type: 3}
  m_PrefabInstance: {fileID: 65300468}
  m_PrefabAsset: {fileID: 0}
--- !u!1001 &91330633
PrefabInstance:
  m_ObjectHideFlags: 0
  serializedVersion: 2
  m_Modification:
    serializedVersion: 2";

#[test]
fn unity_documents() {
    let mut parser = Parser::from_str(UNITY_SCENE);
    parser.skip_after(EventKind::StreamStart).unwrap();

    let documents = [
        ("OcclusionCullingSettings", "29", "1"),
        ("RenderSettings", "104", "2"),
        ("Transform", "4", "62555683"),
        ("Transform", "4", "65300469"),
        ("PrefabInstance", "1001", "91330633"),
    ];
    for (name, class_id, file_id) in documents {
        assert_eq!(parser.current_event_kind(), EventKind::DocumentStart);
        parser.read().unwrap();
        assert_eq!(parser.current_event_kind(), EventKind::MappingStart);
        let tag = parser.try_get_current_tag().unwrap();
        assert_eq!(tag.handle, "tag:unity3d.com,2011:");
        assert_eq!(tag.suffix, class_id);
        assert_eq!(parser.try_get_current_anchor(), Some(file_id));

        parser.read().unwrap();
        assert_eq!(parser.read_scalar_as_string().unwrap(), name);
        parser.skip_current_node().unwrap();
        assert_eq!(parser.current_event_kind(), EventKind::MappingEnd);
        parser.read().unwrap();
        assert_eq!(parser.current_event_kind(), EventKind::DocumentEnd);
        parser.read().unwrap();
    }

    assert_eq!(parser.current_event_kind(), EventKind::StreamEnd);
    assert!(!parser.read().unwrap());
}

#[test]
fn unity_nested_values() {
    let mut parser = Parser::from_str(UNITY_SCENE);
    parser.skip_after(EventKind::MappingStart).unwrap();
    assert_eq!(parser.read_scalar_as_string().unwrap(), "OcclusionCullingSettings");
    assert_eq!(parser.current_event_kind(), EventKind::MappingStart);
    parser.read().unwrap();

    let mut smallest_hole = None;
    let mut scene_guid = None;
    while parser.current_event_kind() != EventKind::MappingEnd {
        let key = parser.read_scalar_as_string().unwrap();
        match key.as_str() {
            "m_OcclusionBakeSettings" => {
                parser.read().unwrap();
                while parser.current_event_kind() != EventKind::MappingEnd {
                    let inner = parser.read_scalar_as_string().unwrap();
                    let value = parser.read_scalar().unwrap();
                    if inner == "smallestHole" {
                        smallest_hole = value.try_get_f64();
                    }
                }
                parser.read().unwrap();
            }
            "m_SceneGUID" => {
                let value = parser.read_scalar().unwrap();
                assert!(value.is_borrowed());
                scene_guid = Some(value.into_owned());
            }
            _ => parser.skip_current_node().unwrap(),
        }
    }

    assert_eq!(smallest_hole, Some(0.25));
    let scene_guid = scene_guid.unwrap();
    assert_eq!(scene_guid.as_str(), "00000000000000000000000000000000");
    assert_eq!(scene_guid.style(), ScalarType::Plain);
}

#[test]
fn skip_current_node_over_flow_collections() {
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
fn skip_current_node_on_alias() {
    let mut parser = Parser::from_str("- &a x\n- *a\n- y\n");
    parser.skip_after(EventKind::SequenceStart).unwrap();
    parser.skip_current_node().unwrap();
    assert_eq!(parser.current_event_kind(), EventKind::Alias);
    parser.skip_current_node().unwrap();
    assert_eq!(parser.read_scalar_as_string().unwrap(), "y");
    assert_eq!(parser.current_event_kind(), EventKind::SequenceEnd);
}

#[test]
fn tag_on_block_mapping() {
    let mut parser = Parser::from_str("!tag1\na: 100\nb: 200");
    parser.skip_after(EventKind::DocumentStart).unwrap();
    assert_eq!(parser.current_event_kind(), EventKind::MappingStart);
    assert_eq!(parser.try_get_current_tag().unwrap().to_string(), "!tag1");
}

#[test]
fn current_event_exposes_span() {
    let mut parser = Parser::from_str("key: value\n");
    parser.skip_after(EventKind::MappingStart).unwrap();
    parser.read().unwrap();
    let event = parser.current_event().unwrap();
    assert_eq!(event.kind, EventKind::Scalar);
    assert_eq!(event.span.start.line, 1);
    assert_eq!(event.span.start.col, 6);
    assert_eq!(event.span.start.pos, 5);
}

#[test]
fn config_limits_reach_parser() {
    let config = TokenizerConfig::default().with_max_flow_depth(1);
    let mut parser = Parser::with_config(b"[[1]]", config);
    let err = loop {
        match parser.read() {
            Ok(true) => continue,
            Ok(false) => panic!("expected the flow depth limit to trigger"),
            Err(err) => break err,
        }
    };
    assert!(matches!(err, YamlError::Tokenize { .. }));
}

#[test]
fn invalid_dedent_is_a_tokenize_error() {
    let err = Parser::from_str("a:\n  b: 1\n c: 2")
        .find_map(Result::err)
        .unwrap();
    assert!(matches!(err, YamlError::Tokenize { .. }), "{err:?}");
    assert_eq!(err.mark().unwrap().line, 3);
}

#[test]
fn iterator_yields_owned_events() {
    let events: Vec<_> = Parser::from_str("[a, b]")
        .map(|event| event.unwrap())
        .filter_map(|event| event.scalar)
        .map(|scalar| scalar.into_owned())
        .collect();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].as_str(), "a");
    assert_eq!(events[1].as_str(), "b");
}
