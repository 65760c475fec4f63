use alloc::borrow::Cow;
use alloc::string::String;
use alloc::vec::Vec;

use yam_cursor_common::{Marker, YamlError, YamlResult};

/// Scalar content collected while scanning.
///
/// Adjacent input ranges keep the text borrowed. The first byte that doesn't come from the
/// input right after the current range (a folded line break, a decoded escape) switches to an
/// owned buffer.
#[derive(Debug, Default)]
pub(crate) enum ScalarText {
    #[default]
    Empty,
    Borrowed {
        start: usize,
        end: usize,
    },
    Owned(Vec<u8>),
}

impl ScalarText {
    pub(crate) fn is_empty(&self) -> bool {
        match self {
            ScalarText::Empty => true,
            ScalarText::Borrowed { start, end } => start == end,
            ScalarText::Owned(buf) => buf.is_empty(),
        }
    }

    /// Appends `input[start..end]`.
    pub(crate) fn push_range(&mut self, input: &[u8], start: usize, end: usize) {
        if start >= end {
            return;
        }
        match self {
            ScalarText::Empty => *self = ScalarText::Borrowed { start, end },
            ScalarText::Borrowed { end: cur_end, .. } if *cur_end == start => *cur_end = end,
            ScalarText::Borrowed {
                start: cur_start,
                end: cur_end,
            } => {
                let mut buf = Vec::with_capacity(*cur_end - *cur_start + end - start);
                buf.extend_from_slice(&input[*cur_start..*cur_end]);
                buf.extend_from_slice(&input[start..end]);
                *self = ScalarText::Owned(buf);
            }
            ScalarText::Owned(buf) => buf.extend_from_slice(&input[start..end]),
        }
    }

    /// Appends bytes that are not a continuation of the input.
    pub(crate) fn push_bytes(&mut self, input: &[u8], bytes: &[u8]) {
        if bytes.is_empty() {
            return;
        }
        match self {
            ScalarText::Empty => *self = ScalarText::Owned(bytes.to_vec()),
            ScalarText::Borrowed { start, end } => {
                let mut buf = Vec::with_capacity(*end - *start + bytes.len());
                buf.extend_from_slice(&input[*start..*end]);
                buf.extend_from_slice(bytes);
                *self = ScalarText::Owned(buf);
            }
            ScalarText::Owned(buf) => buf.extend_from_slice(bytes),
        }
    }

    pub(crate) fn push_char(&mut self, input: &[u8], chr: char) {
        let mut buf = [0u8; 4];
        self.push_bytes(input, chr.encode_utf8(&mut buf).as_bytes());
    }

    pub(crate) fn into_cow<'input>(
        self,
        input: &'input str,
        mark: Marker,
    ) -> YamlResult<Cow<'input, str>> {
        match self {
            ScalarText::Empty => Ok(Cow::Borrowed("")),
            ScalarText::Borrowed { start, end } => input
                .get(start..end)
                .map(Cow::Borrowed)
                .ok_or_else(|| YamlError::new_str(mark, "scalar split inside a UTF-8 sequence")),
            ScalarText::Owned(buf) => String::from_utf8(buf)
                .map(Cow::Owned)
                .map_err(|_| YamlError::new_str(mark, "scalar is not valid UTF-8")),
        }
    }
}

#[cfg(test)]
mod test {
    use alloc::borrow::Cow;

    use yam_cursor_common::Marker;

    use crate::tokenizer::text::ScalarText;

    const INPUT: &str = "a scalar\n  next line";

    #[test]
    fn test_contiguous_ranges_stay_borrowed() {
        let mut text = ScalarText::default();
        assert!(text.is_empty());
        text.push_range(INPUT.as_bytes(), 0, 1);
        text.push_range(INPUT.as_bytes(), 1, 2);
        text.push_range(INPUT.as_bytes(), 2, 8);
        let value = text.into_cow(INPUT, Marker::default()).unwrap();
        assert!(matches!(value, Cow::Borrowed("a scalar")));
    }

    #[test]
    fn test_fold_switches_to_owned() {
        let mut text = ScalarText::default();
        text.push_range(INPUT.as_bytes(), 0, 8);
        text.push_bytes(INPUT.as_bytes(), b" ");
        text.push_range(INPUT.as_bytes(), 11, 20);
        let value = text.into_cow(INPUT, Marker::default()).unwrap();
        assert!(matches!(value, Cow::Owned(_)));
        assert_eq!(value, "a scalar next line");
    }

    #[test]
    fn test_push_char() {
        let mut text = ScalarText::default();
        text.push_char(INPUT.as_bytes(), '\u{2028}');
        let value = text.into_cow(INPUT, Marker::default()).unwrap();
        assert_eq!(value, "\u{2028}");
    }
}
