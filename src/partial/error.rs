//! Error types for the runtime partial-application engine.

use std::fmt;

/// Represents errors raised by [`Partial`](super::Partial).
///
/// The statically typed [`partial!`](crate::partial!) macro never produces
/// these: wrong arities are rejected by the compiler there.
///
/// # Examples
///
/// ```rust
/// use funclib::partial::PartialError;
///
/// let error = PartialError::ArityMismatch { expected: 2, actual: 3 };
/// assert_eq!(
///     format!("{error}"),
///     "partial application expected 2 unbound argument(s) but received 3"
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PartialError {
    /// The number of unbound arguments differs from the number of
    /// placeholder occurrences in the binding list.
    ArityMismatch {
        /// Number of placeholder occurrences.
        expected: usize,
        /// Number of unbound arguments supplied.
        actual: usize,
    },
    /// The binding list is longer than the number of placeholder tokens.
    TooManyBindings {
        /// Maximum length of a binding list.
        limit: usize,
    },
}

impl PartialError {
    pub(crate) fn arity_mismatch(expected: usize, actual: usize) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(expected, actual, "rejected call with wrong number of unbound arguments");
        Self::ArityMismatch { expected, actual }
    }

    pub(crate) fn too_many_bindings(limit: usize) -> Self {
        #[cfg(feature = "tracing")]
        tracing::debug!(limit, "rejected binding list longer than the placeholder set");
        Self::TooManyBindings { limit }
    }
}

impl fmt::Display for PartialError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ArityMismatch { expected, actual } => write!(
                formatter,
                "partial application expected {expected} unbound argument(s) but received {actual}"
            ),
            Self::TooManyBindings { limit } => write!(
                formatter,
                "binding list holds more than {limit} argument(s)"
            ),
        }
    }
}

impl std::error::Error for PartialError {}
