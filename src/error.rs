//! Error types for matriz operations.

use std::fmt;

/// Main error type for matriz operations.
///
/// The combination engine itself has no fatal conditions: malformed
/// sub-property text degrades to "no synthetic parameters" with a warning.
/// Errors originate at the edges — building a value set from inconsistent
/// data, or loading value sets from a backing store.
///
/// # Examples
///
/// ```
/// use matriz::error::MatrizError;
///
/// let err = MatrizError::DimensionMismatch {
///     expected: "DATABASE".to_string(),
///     actual: "JDK".to_string(),
///     parameter: "JDK8".to_string(),
/// };
/// assert!(err.to_string().contains("DATABASE"));
/// ```
#[derive(Debug)]
pub enum MatrizError {
    /// A value set was given a parameter belonging to another dimension.
    DimensionMismatch {
        /// Dimension the value set was declared for
        expected: String,
        /// Dimension of the offending parameter
        actual: String,
        /// Name of the offending parameter
        parameter: String,
    },

    /// The backing value-set source failed to load.
    Source(String),

    /// Generic error with string message.
    Other(String),
}

impl fmt::Display for MatrizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatrizError::DimensionMismatch {
                expected,
                actual,
                parameter,
            } => {
                write!(
                    f,
                    "dimension mismatch: value set for {expected} was given parameter '{parameter}' of dimension {actual}"
                )
            }
            MatrizError::Source(msg) => write!(f, "value-set source error: {msg}"),
            MatrizError::Other(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for MatrizError {}

impl From<String> for MatrizError {
    fn from(msg: String) -> Self {
        MatrizError::Other(msg)
    }
}

impl From<&str> for MatrizError {
    fn from(msg: &str) -> Self {
        MatrizError::Other(msg.to_string())
    }
}

/// Convenience result type for matriz operations.
pub type Result<T> = std::result::Result<T, MatrizError>;
