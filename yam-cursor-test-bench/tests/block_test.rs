use yam_cursor_test_bench::assert_eq_event;
use yam_cursor_test_bench::consts::*;

#[test]
fn block_seq() {
    assert_eq_event(BLOCK1_INPUT, BLOCK_EVENTS);
    assert_eq_event(BLOCK2_INPUT, BLOCK_EVENTS);
    assert_eq_event(BLOCK_NESTED_SEQ_INPUT, BLOCK_NESTED_SEQ_EVENTS);
}

#[test]
fn block_map() {
    assert_eq_event(BLOCK_MAP_INPUT, BLOCK_MAP_EVENTS);
    assert_eq_event(BLOCK_EMPTY_VALUE_INPUT, BLOCK_EMPTY_VALUE_EVENTS);
    assert_eq_event(BLOCK_EXPLICIT_KEY_INPUT, BLOCK_EXPLICIT_KEY_EVENTS);
}

#[test]
fn block_nested_collections() {
    assert_eq_event(BLOCK_MAP_IN_SEQ_INPUT, BLOCK_MAP_IN_SEQ_EVENTS);
    assert_eq_event(BLOCK_COMPACT_SEQ_INPUT, BLOCK_COMPACT_SEQ_EVENTS);
}

#[test]
fn block_compact_seq_with_properties() {
    assert_eq_event(COMPACT_SEQ_TAGGED_INPUT, COMPACT_SEQ_TAGGED_EVENTS);
}

#[test]
fn block_explicit_key_with_seq() {
    assert_eq_event(EXPLICIT_KEY_SEQ_INPUT, EXPLICIT_KEY_SEQ_EVENTS);
    assert_eq_event(EXPLICIT_KEY_COMPACT_SEQ_INPUT, EXPLICIT_KEY_COMPACT_SEQ_EVENTS);
}

#[test]
fn block_scalars() {
    assert_eq_event(LITERAL_INPUT, LITERAL_EVENTS);
    assert_eq_event(FOLD_INPUT, FOLD_EVENTS);
    assert_eq_event(MULTILINE_PLAIN_INPUT, MULTILINE_PLAIN_EVENTS);
}

#[test]
fn block_node_properties() {
    assert_eq_event(ANCHOR_INPUT, ANCHOR_EVENTS);
    assert_eq_event(TAG_INPUT, TAG_EVENTS);
}

#[test]
fn block_err() {
    assert_eq_event(ERR_MAP_THEN_SEQ_INPUT, ERR_MAP_THEN_SEQ_EVENTS);
    assert_eq_event(ERR_SEQ_THEN_MAP_INPUT, ERR_SEQ_THEN_MAP_EVENTS);
    assert_eq_event(ERR_UNKNOWN_ALIAS_INPUT, ERR_UNKNOWN_ALIAS_EVENTS);
    assert_eq_event(ERR_INVALID_DEDENT_INPUT, ERR_INVALID_DEDENT_EVENTS);
}
