#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) fn is_blank_or_break(c: u8) -> bool {
    c == b' ' || c == b'\t' || c == b'\r' || c == b'\n'
}

pub(crate) fn is_anchor_char(c: u8) -> bool {
    is_yaml_non_space(c) && !is_flow(c) && c != b'\0'
}

pub(crate) fn is_yaml_non_space(c: u8) -> bool {
    !is_blank(c) && !is_break(c)
}

#[cfg_attr(not(feature = "no-inline"), inline)]
#[must_use]
pub(crate) fn is_word_char(c: u8) -> bool {
    c.is_ascii_alphanumeric() || c == b'-'
}

#[cfg_attr(not(feature = "no-inline"), inline)]
#[must_use]
pub(crate) fn is_blank_or_breakz(c: u8) -> bool {
    c == b'\0' || is_blank(c) || is_break(c)
}

/// Check whether the character is a valid URI character.
#[cfg_attr(not(feature = "no-inline"), inline)]
#[must_use]
pub(crate) fn is_uri_char(c: u8) -> bool {
    is_word_char(c) || b"#;/?:@&=+$,_.!~*\'()[]%".contains(&c)
}

#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) fn is_break(c: u8) -> bool {
    c == b'\r' || c == b'\n'
}

#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) fn is_blank(c: u8) -> bool {
    c == b' ' || c == b'\t'
}

#[cfg_attr(not(feature = "no-inline"), inline)]
pub(crate) fn is_flow(c: u8) -> bool {
    matches!(c, b',' | b'[' | b']' | b'{' | b'}')
}

/// Value of an ASCII hex digit, `None` for anything else.
#[cfg_attr(not(feature = "no-inline"), inline)]
#[must_use]
pub(crate) fn as_hex(c: u8) -> Option<u32> {
    match c {
        b'0'..=b'9' => Some(u32::from(c - b'0')),
        b'a'..=b'f' => Some(u32::from(c - b'a') + 10),
        b'A'..=b'F' => Some(u32::from(c - b'A') + 10),
        _ => None,
    }
}

pub(crate) fn is_tag_char(chr: u8) -> bool {
    is_uri_char(chr) && !is_flow(chr) && chr != b'!'
}

#[cfg_attr(not(feature = "no-inline"), inline)]
#[must_use]
pub(crate) fn is_alpha(c: u8) -> bool {
    matches!(c, b'0'..=b'9' | b'a'..=b'z' | b'A'..=b'Z' | b'_' | b'-')
}

/// `---` or `...` followed by a blank, a break or the end of input.
pub(crate) fn is_document_indicator(bytes: &[u8]) -> bool {
    match bytes {
        [b'-', b'-', b'-'] | [b'.', b'.', b'.'] => true,
        [b'-', b'-', b'-', c, ..] | [b'.', b'.', b'.', c, ..] => is_blank_or_breakz(*c),
        _ => false,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_indicators() {
        assert!(is_document_indicator(b"---"));
        assert!(is_document_indicator(b"--- !tag"));
        assert!(is_document_indicator(b"...\n"));
        assert!(!is_document_indicator(b"---a"));
        assert!(!is_document_indicator(b"--"));

        assert!(is_flow(b'}'));
        assert!(!is_anchor_char(b','));
        assert!(is_tag_char(b'%'));
        assert!(!is_tag_char(b'!'));
        assert_eq!(as_hex(b'F'), Some(15));
        assert_eq!(as_hex(b'g'), None);
    }
}
