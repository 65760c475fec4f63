use crate::{EventKind, Marker};

/// A specialized `Result` type where the error is hard-wired to [`YamlError`].
pub type YamlResult<T> = Result<T, YamlError>;
pub type ScanResult = Result<(), YamlError>;

/// Everything that can go wrong while reading YAML.
///
/// None of these are recoverable. Once a tokenizer or parser returns an error it keeps
/// returning the same error on every later call.
#[derive(Debug, Clone, Eq, PartialEq, thiserror::Error)]
pub enum YamlError {
    /// Input bytes do not form valid YAML tokens.
    #[error("{info} at {mark}")]
    Tokenize { mark: Marker, info: String },
    /// Input is not valid UTF-8. `mark.pos` is the offset of the first invalid byte.
    #[error("invalid UTF-8 sequence at {mark}")]
    InvalidUtf8 { mark: Marker },
    /// Tokens are valid on their own but do not form a YAML document.
    #[error("{info} at {mark}")]
    Parse { mark: Marker, info: String },
    /// The API was used in a way that the current cursor position doesn't allow.
    #[error("invalid state: {0}")]
    InvalidState(&'static str),
    #[error("expected {expected} event, found {found}")]
    UnexpectedEvent {
        expected: EventKind,
        found: EventKind,
    },
}

impl YamlError {
    pub fn new_str(marker: Marker, info: &str) -> Self {
        YamlError::Tokenize {
            mark: marker,
            info: info.to_string(),
        }
    }

    pub fn parse_str(marker: Marker, info: &str) -> Self {
        YamlError::Parse {
            mark: marker,
            info: info.to_string(),
        }
    }

    /// Position in the input the error points at, if it has one.
    #[must_use]
    pub fn mark(&self) -> Option<Marker> {
        match self {
            YamlError::Tokenize { mark, .. }
            | YamlError::InvalidUtf8 { mark }
            | YamlError::Parse { mark, .. } => Some(*mark),
            YamlError::InvalidState(_) | YamlError::UnexpectedEvent { .. } => None,
        }
    }
}

#[cfg(test)]
mod test {
    use crate::{EventKind, Marker, YamlError};

    #[test]
    fn test_error_display() {
        let mark = Marker {
            pos: 7,
            col: 3,
            line: 2,
        };
        let err = YamlError::new_str(mark, "invalid indentation");
        assert_eq!(err.to_string(), "invalid indentation at line 2 column 3");
        assert_eq!(err.mark(), Some(mark));

        let err = YamlError::UnexpectedEvent {
            expected: EventKind::Scalar,
            found: EventKind::MappingStart,
        };
        assert_eq!(
            err.to_string(),
            "expected Scalar event, found MappingStart"
        );
        assert_eq!(err.mark(), None);
    }
}
