use yam_cursor_test_bench::assert_eq_event;
use yam_cursor_test_bench::consts::*;

#[test]
fn doc_empty() {
    assert_eq_event(EMPTY_DOC_INPUT, EMPTY_DOC_EVENTS);
    assert_eq_event("", "");
}

#[test]
fn doc_multiple() {
    assert_eq_event(MULTI_DOC_INPUT, MULTI_DOC_EVENTS);
}

#[test]
fn doc_directives() {
    assert_eq_event(DIRECTIVE_INPUT, DIRECTIVE_EVENTS);
}

#[test]
fn doc_unity() {
    assert_eq_event(UNITY_INPUT, UNITY_EVENTS);
}

#[test]
fn doc_properties_before_scalar() {
    assert_eq_event(DOC_PROPERTIES_SCALAR_INPUT, DOC_PROPERTIES_SCALAR_EVENTS);
}
