use crate::tokenizer::char_utils::{
    is_alpha, is_blank, is_blank_or_break, is_blank_or_breakz, is_break, is_flow,
};
use crate::tokenizer::scanner::SkipTabs;

///
/// Byte cursor over already validated UTF-8 input.
///
/// # Peeking
/// - `peek() -> u8`: next byte, `0` at the end of input.
/// - `peek_nth(n) -> u8`: byte `n` positions ahead, `0` past the end of input.
/// - `peek_two() -> [u8; 2]`: the next two bytes, used for indicator dispatch.
///
/// # Skipping
/// - `skip(n)`: advance `n` bytes. Callers keep their `Marker` in sync.
/// - `skip_while_blank`, `skip_while_non_breakz` and `skip_ws_to_eol` return how many bytes
///   they consumed.
///
/// # Classification
/// The `next_is_*` family tests the next byte. Variants ending in `z` also accept the end of
/// input.
pub(crate) struct StrSource<'input> {
    input: &'input str,
    pos: usize,
}

impl<'input> StrSource<'input> {
    pub(crate) fn new(input: &'input str) -> StrSource<'input> {
        StrSource { input, pos: 0 }
    }

    #[must_use]
    pub(crate) fn input(&self) -> &'input str {
        self.input
    }

    #[must_use]
    pub(crate) fn bytes(&self) -> &'input [u8] {
        self.input.as_bytes()
    }

    /// Unconsumed part of the input.
    #[must_use]
    pub(crate) fn remaining(&self) -> &'input [u8] {
        self.input.as_bytes().get(self.pos..).unwrap_or_default()
    }

    #[must_use]
    #[cfg_attr(not(feature = "no-inline"), inline)]
    pub(crate) fn peek(&self) -> u8 {
        self.peek_nth(0)
    }

    #[must_use]
    #[cfg_attr(not(feature = "no-inline"), inline)]
    pub(crate) fn peek_nth(&self, n: usize) -> u8 {
        self.input.as_bytes().get(self.pos + n).copied().unwrap_or(0)
    }

    #[must_use]
    pub(crate) fn peek_two(&self) -> [u8; 2] {
        [self.peek(), self.peek_nth(1)]
    }

    /// The character starting at the cursor, for error messages.
    #[must_use]
    pub(crate) fn peek_char(&self) -> char {
        self.input
            .get(self.pos..)
            .and_then(|rest| rest.chars().next())
            .unwrap_or(char::REPLACEMENT_CHARACTER)
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    pub(crate) fn skip(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.input.len());
    }

    #[must_use]
    pub(crate) fn buf_is_empty(&self) -> bool {
        self.pos >= self.input.len()
    }

    #[must_use]
    pub(crate) fn next_is_z(&self) -> bool {
        self.buf_is_empty()
    }

    pub(crate) fn skip_while_alpha(&mut self) -> usize {
        let mut n_chars = 0;
        while is_alpha(self.peek()) {
            n_chars += 1;
            self.skip(1);
        }
        n_chars
    }

    pub(crate) fn skip_while_blank(&mut self) -> usize {
        let mut n_chars = 0;
        while is_blank(self.peek()) {
            n_chars += 1;
            self.skip(1);
        }
        n_chars
    }

    /// Skips to the next line break or the end of input.
    pub(crate) fn skip_while_non_breakz(&mut self) -> usize {
        let rest = self.remaining();
        let count = memchr::memchr2(b'\n', b'\r', rest).unwrap_or(rest.len());
        self.skip(count);
        count
    }

    pub(crate) fn skip_ws_to_eol(
        &mut self,
        skip_tabs: SkipTabs,
    ) -> (u32, Result<SkipTabs, &'static str>) {
        let mut chars_consumed = 0;
        let mut any_tabs = false;
        let mut has_yaml_ws = false;
        loop {
            match self.peek() {
                b' ' => {
                    has_yaml_ws = true;
                    self.skip(1);
                }
                b'\t' if skip_tabs != SkipTabs::No => {
                    any_tabs = true;
                    self.skip(1);
                }
                // YAML comments must be preceded by whitespace.
                b'#' if !any_tabs && !has_yaml_ws => {
                    return (
                        chars_consumed,
                        Err("comments must be separated from other tokens by whitespace"),
                    );
                }
                b'#' => {
                    chars_consumed += self.skip_while_non_breakz() as u32;
                    break;
                }
                _ => break,
            }
            chars_consumed += 1;
        }

        (
            chars_consumed,
            Ok(SkipTabs::Result {
                any_tabs,
                has_yaml_ws,
            }),
        )
    }

    pub(crate) fn next_is_three(&self, chr: u8) -> bool {
        self.peek() == chr && self.peek_nth(1) == chr && self.peek_nth(2) == chr
    }

    #[must_use]
    pub(crate) fn next_is_flow(&self) -> bool {
        is_flow(self.peek())
    }

    #[must_use]
    pub(crate) fn next_is_break(&self) -> bool {
        is_break(self.peek())
    }

    #[must_use]
    pub(crate) fn next_is_blank(&self) -> bool {
        is_blank(self.peek())
    }

    #[must_use]
    pub(crate) fn next_is_breakz(&self) -> bool {
        self.next_is_z() || is_break(self.peek())
    }

    #[must_use]
    pub(crate) fn next_is_blank_or_break(&self) -> bool {
        is_blank_or_break(self.peek())
    }

    #[must_use]
    #[cfg_attr(not(feature = "no-inline"), inline)]
    pub(crate) fn next_is_blank_or_breakz(&self) -> bool {
        self.next_is_z() || is_blank_or_break(self.peek())
    }

    #[must_use]
    pub(crate) fn next_is_alpha(&self) -> bool {
        is_alpha(self.peek())
    }

    #[cfg_attr(not(feature = "no-inline"), inline)]
    pub(crate) fn next_can_be_plain_scalar(&self, in_flow: bool) -> bool {
        let nc = self.peek_nth(1);
        match self.peek() {
            // indicators can end a plain scalar, see 7.3.3. Plain Style
            b':' if is_blank_or_breakz(nc) || (in_flow && is_flow(nc)) => false,
            c if in_flow && is_flow(c) => false,
            _ => true,
        }
    }

    pub(crate) fn next_is_document_indicator(&self) -> bool {
        (self.next_is_three(b'-') || self.next_is_three(b'.'))
            && is_blank_or_breakz(self.peek_nth(3))
    }

    #[must_use]
    pub(crate) fn next_is_document_end(&self) -> bool {
        self.next_is_three(b'.') && is_blank_or_breakz(self.peek_nth(3))
    }

    #[must_use]
    pub(crate) fn next_is_document_start(&self) -> bool {
        self.next_is_three(b'-') && is_blank_or_breakz(self.peek_nth(3))
    }
}

#[cfg(test)]
mod test {
    use crate::tokenizer::scanner::SkipTabs;
    use crate::tokenizer::source::StrSource;

    const TEST_STR: &str = "                                      \
                                    \n                     \
                hello ";

    #[test]
    fn test_skip_ws_to_eol() {
        let mut x = StrSource::new(TEST_STR);
        let (consume, skip) = x.skip_ws_to_eol(SkipTabs::Yes);
        assert_eq!(consume, 38);
        assert_eq!(
            skip,
            Ok(SkipTabs::Result {
                has_yaml_ws: true,
                any_tabs: false
            })
        );
        assert!(x.next_is_break());
    }

    #[test]
    fn test_skip_comment() {
        let mut x = StrSource::new("  # comment\nnext");
        let (consume, skip) = x.skip_ws_to_eol(SkipTabs::Yes);
        assert_eq!(consume, 11);
        assert!(skip.is_ok());
        assert!(x.next_is_break());

        let mut x = StrSource::new("#comment");
        let (_, skip) = x.skip_ws_to_eol(SkipTabs::Yes);
        assert!(skip.is_err());
    }

    #[test]
    fn test_plain_scalar_lookahead() {
        assert!(StrSource::new(":,b").next_can_be_plain_scalar(false));
        assert!(!StrSource::new(":,b").next_can_be_plain_scalar(true));
        assert!(!StrSource::new(": b").next_can_be_plain_scalar(false));
        assert!(StrSource::new(":b").next_can_be_plain_scalar(true));
        assert!(!StrSource::new("]").next_can_be_plain_scalar(true));
    }
}
