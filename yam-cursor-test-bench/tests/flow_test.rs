use yam_cursor_test_bench::assert_eq_event;
use yam_cursor_test_bench::consts::*;

#[test]
fn flow_seq() {
    assert_eq_event(SEQ_FLOW_INPUT, SEQ_FLOW_EVENTS);
    assert_eq_event(SEQ_FLOW2_INPUT, SEQ_FLOW_EVENTS);
}

#[test]
fn flow_map() {
    assert_eq_event(MAP_FLOW_INPUT, MAP_FLOW_EVENTS);
    assert_eq_event(FLOW_EMPTY_KEY_INPUT, FLOW_EMPTY_KEY_EVENTS);
}

#[test]
fn flow_implicit_map_in_seq() {
    assert_eq_event(FLOW_PAIR_IN_SEQ_INPUT, FLOW_PAIR_IN_SEQ_EVENTS);
}

#[test]
fn flow_plain_starting_with_indicator() {
    assert_eq_event(FLOW_INDICATOR_SCALAR_INPUT, FLOW_INDICATOR_SCALAR_EVENTS);
}

#[test]
fn flow_in_block() {
    assert_eq_event(FLOW_IN_BLOCK_INPUT, FLOW_IN_BLOCK_EVENTS);
}

#[test]
fn flow_err() {
    assert_eq_event(ERR_UNCLOSED_FLOW_INPUT, ERR_UNCLOSED_FLOW_EVENTS);
}
