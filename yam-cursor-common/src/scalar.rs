use std::borrow::Cow;
use std::fmt::{Display, Formatter};

use crate::ScalarType;

/// Text of a single scalar node together with the style it was written in.
///
/// The value borrows from the input whenever the scalar was written on one line without
/// escapes. Folded lines, escape sequences and block scalars produce an owned copy.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Scalar<'input> {
    style: ScalarType,
    value: Cow<'input, str>,
}

impl<'input> Scalar<'input> {
    pub fn new(style: ScalarType, value: Cow<'input, str>) -> Self {
        Scalar { style, value }
    }

    /// Plain scalar with no content, the value of an omitted key or value.
    #[must_use]
    pub fn empty() -> Scalar<'static> {
        Scalar {
            style: ScalarType::Plain,
            value: Cow::Borrowed(""),
        }
    }

    #[must_use]
    pub fn style(&self) -> ScalarType {
        self.style
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        self.value.as_bytes()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.value.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Whether the value still points into the input buffer.
    #[must_use]
    pub fn is_borrowed(&self) -> bool {
        matches!(self.value, Cow::Borrowed(_))
    }

    #[must_use]
    pub fn into_value(self) -> Cow<'input, str> {
        self.value
    }

    #[must_use]
    pub fn into_owned(self) -> Scalar<'static> {
        Scalar {
            style: self.style,
            value: Cow::Owned(self.value.into_owned()),
        }
    }

    /// Checks for the YAML 1.1 null forms. Matching is byte exact, so `nUll` is not null.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self.as_bytes(), b"" | b"~" | b"null" | b"Null" | b"NULL")
    }

    #[must_use]
    pub fn try_get_bool(&self) -> Option<bool> {
        match self.as_bytes() {
            b"true" | b"True" | b"TRUE" => Some(true),
            b"false" | b"False" | b"FALSE" => Some(false),
            _ => None,
        }
    }

    /// Decimal integers with an optional sign, or `0x`/`0o` prefixed hex and octal.
    #[must_use]
    pub fn try_get_i64(&self) -> Option<i64> {
        let value = self.as_str();
        match value.as_bytes() {
            [b'0', b'x', rest @ ..] if is_unsigned(rest) => i64::from_str_radix(&value[2..], 16).ok(),
            [b'0', b'o', rest @ ..] if is_unsigned(rest) => i64::from_str_radix(&value[2..], 8).ok(),
            [b'0', b'x' | b'o', ..] => None,
            _ => value.parse::<i64>().ok(),
        }
    }

    #[must_use]
    pub fn try_get_f64(&self) -> Option<f64> {
        let value = self.as_str();
        match value.as_bytes() {
            b".inf" | b".Inf" | b".INF" | b"+.inf" | b"+.Inf" | b"+.INF" => Some(f64::INFINITY),
            b"-.inf" | b"-.Inf" | b"-.INF" => Some(f64::NEG_INFINITY),
            b".nan" | b".NaN" | b".NAN" => Some(f64::NAN),
            // Rust accepts `inf` and `NaN`, YAML doesn't.
            bytes if bytes.iter().any(u8::is_ascii_digit) => value.parse::<f64>().ok(),
            _ => None,
        }
    }
}

// `from_str_radix` takes a sign, prefixed literals don't.
fn is_unsigned(digits: &[u8]) -> bool {
    !digits.is_empty() && !matches!(digits[0], b'+' | b'-')
}

impl Display for Scalar<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.value)
    }
}

impl AsRef<str> for Scalar<'_> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

#[cfg(test)]
mod test {
    use std::borrow::Cow;

    use crate::{Scalar, ScalarType};

    fn plain(value: &str) -> Scalar<'_> {
        Scalar::new(ScalarType::Plain, Cow::Borrowed(value))
    }

    #[test]
    fn test_is_null() {
        for input in ["null", "Null", "NULL", "~", ""] {
            assert!(plain(input).is_null(), "`{input}` should be null");
        }
        for input in ["nUll", "null0", "nil", " null"] {
            assert!(!plain(input).is_null(), "`{input}` should not be null");
        }
    }

    #[test]
    fn test_bool() {
        assert_eq!(plain("true").try_get_bool(), Some(true));
        assert_eq!(plain("FALSE").try_get_bool(), Some(false));
        assert_eq!(plain("yes").try_get_bool(), None);
        assert_eq!(plain("tRue").try_get_bool(), None);
    }

    #[test]
    fn test_numbers() {
        assert_eq!(plain("100").try_get_i64(), Some(100));
        assert_eq!(plain("-42").try_get_i64(), Some(-42));
        assert_eq!(plain("0x1F").try_get_i64(), Some(31));
        assert_eq!(plain("0o17").try_get_i64(), Some(15));
        assert_eq!(plain("0x").try_get_i64(), None);
        assert_eq!(plain("0x-5").try_get_i64(), None);
        assert_eq!(plain("0o+7").try_get_i64(), None);
        assert_eq!(plain("12a").try_get_i64(), None);

        assert_eq!(plain("1.5").try_get_f64(), Some(1.5));
        assert_eq!(plain("-.inf").try_get_f64(), Some(f64::NEG_INFINITY));
        assert!(plain(".NaN").try_get_f64().is_some_and(f64::is_nan));
        assert_eq!(plain("inf").try_get_f64(), None);
        assert_eq!(plain("infinity").try_get_f64(), None);
    }

    #[test]
    fn test_display_and_ownership() {
        let input = String::from("a scalar");
        let scalar = plain(&input);
        assert!(scalar.is_borrowed());
        assert_eq!(scalar.to_string(), "a scalar");

        let owned = scalar.into_owned();
        assert!(!owned.is_borrowed());
        assert_eq!(owned.as_str(), "a scalar");
        assert_eq!(Scalar::empty().style(), ScalarType::Plain);
    }
}
