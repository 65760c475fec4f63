use alloc::borrow::Cow;

use yam_cursor_common::{EventKind, Marker, Scalar, ScalarType, Span, Tag};

/// One step of the parse event stream.
///
/// `tag` and `anchor` are the node properties written in front of a scalar or a collection
/// start. On [`EventKind::Alias`] events `anchor` is the name the alias refers to.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseEvent<'input> {
    pub kind: EventKind,
    pub span: Span,
    pub scalar: Option<Scalar<'input>>,
    pub tag: Option<Tag>,
    pub anchor: Option<Cow<'input, str>>,
}

impl<'input> ParseEvent<'input> {
    pub(crate) fn new(kind: EventKind, span: Span) -> ParseEvent<'input> {
        ParseEvent {
            kind,
            span,
            scalar: None,
            tag: None,
            anchor: None,
        }
    }

    pub(crate) fn node(
        kind: EventKind,
        span: Span,
        tag: Option<Tag>,
        anchor: Option<Cow<'input, str>>,
    ) -> ParseEvent<'input> {
        ParseEvent {
            kind,
            span,
            scalar: None,
            tag,
            anchor,
        }
    }

    pub(crate) fn scalar(
        scalar: Scalar<'input>,
        span: Span,
        tag: Option<Tag>,
        anchor: Option<Cow<'input, str>>,
    ) -> ParseEvent<'input> {
        ParseEvent {
            kind: EventKind::Scalar,
            span,
            scalar: Some(scalar),
            tag,
            anchor,
        }
    }

    /// Plain empty scalar standing in for a missing key or value.
    pub(crate) fn empty_scalar(mark: Marker) -> ParseEvent<'input> {
        ParseEvent::empty_scalar_with_properties(mark, None, None)
    }

    pub(crate) fn empty_scalar_with_properties(
        mark: Marker,
        tag: Option<Tag>,
        anchor: Option<Cow<'input, str>>,
    ) -> ParseEvent<'input> {
        ParseEvent::scalar(
            Scalar::new(ScalarType::Plain, Cow::Borrowed("")),
            Span::empty(mark),
            tag,
            anchor,
        )
    }

    pub(crate) fn alias(name: Cow<'input, str>, span: Span) -> ParseEvent<'input> {
        ParseEvent::node(EventKind::Alias, span, None, Some(name))
    }
}
