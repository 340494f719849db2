//! Error types for record operations over dynamic values.

use std::fmt;

/// Represents errors raised by the JSON record operations.
///
/// Typed records never produce these; the compiler rejects mismatched shapes.
///
/// # Examples
///
/// ```rust
/// use funclib::record::RecordError;
///
/// let error = RecordError::TypeMismatch { expected: "object", found: "array" };
/// assert_eq!(format!("{error}"), "expected a record of kind object, found array");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    /// A value that must be a record is of another kind.
    TypeMismatch {
        /// The kind that was required.
        expected: &'static str,
        /// The kind that was supplied.
        found: &'static str,
    },
    /// A typed value could not be converted to or from its JSON form.
    Conversion {
        /// What kind of failure occurred.
        kind: ConversionKind,
        /// The underlying error message.
        message: String,
        /// One-based line of the failure, or 0 when it has no position.
        line: usize,
        /// One-based column of the failure, or 0 when it has no position.
        column: usize,
    },
}

/// Category of a [`RecordError::Conversion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionKind {
    /// Reading or writing the underlying stream failed.
    Io,
    /// The input was not syntactically valid JSON.
    Syntax,
    /// The JSON was valid but did not match the shape of the target type.
    Data,
    /// The input ended before a complete value was read.
    Eof,
}

impl fmt::Display for ConversionKind {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Io => "io",
            Self::Syntax => "syntax",
            Self::Data => "data",
            Self::Eof => "eof",
        };
        formatter.write_str(name)
    }
}

impl RecordError {
    #[cfg(feature = "json")]
    pub(crate) fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(expected, found, "rejected non-record input");
        Self::TypeMismatch { expected, found }
    }
}

impl fmt::Display for RecordError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::TypeMismatch { expected, found } => {
                write!(formatter, "expected a record of kind {expected}, found {found}")
            }
            Self::Conversion { kind, message, .. } => {
                write!(formatter, "record conversion failed ({kind}): {message}")
            }
        }
    }
}

impl std::error::Error for RecordError {}

#[cfg(feature = "json")]
impl From<serde_json::Error> for RecordError {
    fn from(error: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let kind = match error.classify() {
            Category::Io => ConversionKind::Io,
            Category::Syntax => ConversionKind::Syntax,
            Category::Data => ConversionKind::Data,
            Category::Eof => ConversionKind::Eof,
        };
        Self::Conversion {
            kind,
            message: error.to_string(),
            line: error.line(),
            column: error.column(),
        }
    }
}

#[cfg(all(test, feature = "json"))]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_syntax_failure_keeps_kind_and_position() {
        let error = RecordError::from(serde_json::from_str::<u8>("\n  x").unwrap_err());
        let RecordError::Conversion { kind, line, column, .. } = error else {
            panic!("expected a conversion error");
        };
        assert_eq!(kind, ConversionKind::Syntax);
        assert_eq!((line, column), (2, 3));
    }

    #[test]
    fn test_data_failure_is_told_apart_from_syntax() {
        let error = RecordError::from(serde_json::from_value::<u8>(json!("text")).unwrap_err());
        assert!(matches!(
            error,
            RecordError::Conversion {
                kind: ConversionKind::Data,
                ..
            }
        ));
        assert!(error.to_string().starts_with("record conversion failed (data): "));
    }

    #[test]
    fn test_truncated_input_is_eof() {
        let error = RecordError::from(serde_json::from_str::<Vec<u8>>("[1, 2").unwrap_err());
        assert!(matches!(
            error,
            RecordError::Conversion {
                kind: ConversionKind::Eof,
                ..
            }
        ));
    }
}
