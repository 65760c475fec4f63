use yam_cursor_test_bench::assert_eq_event;
use yam_cursor_test_bench::consts::*;

#[test]
fn quote_single() {
    assert_eq_event(QUOTE_SINGLE_INPUT, QUOTE_SINGLE_EVENTS);
}

#[test]
fn quote_double() {
    assert_eq_event(QUOTE_DOUBLE_INPUT, QUOTE_DOUBLE_EVENTS);
}

#[test]
fn quote_keys() {
    assert_eq_event(QUOTE_KEY_INPUT, QUOTE_KEY_EVENTS);
}

#[test]
fn quote_err() {
    assert_eq_event(ERR_UNTERMINATED_QUOTE_INPUT, ERR_UNTERMINATED_QUOTE_EVENTS);
}
