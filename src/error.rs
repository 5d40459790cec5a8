use std::fmt;

/// Result type for evalset operations
pub type Result<T> = std::result::Result<T, EvalError>;

/// Main error type for the evaluation subsystem
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Batch or label shape does not satisfy a metric's precondition
    DimensionMismatch {
        expected: String,
        actual: String,
    },

    /// Invalid parameter value
    InvalidParameter {
        name: String,
        reason: String,
    },

    /// IO errors (report sinks)
    IoError(String),

    /// Serialization/deserialization errors
    SerializationError(String),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::DimensionMismatch { expected, actual } => {
                write!(f, "Dimension mismatch: expected {}, got {}", expected, actual)
            }
            EvalError::InvalidParameter { name, reason } => {
                write!(f, "Invalid parameter '{}': {}", name, reason)
            }
            EvalError::IoError(msg) => write!(f, "IO error: {}", msg),
            EvalError::SerializationError(msg) => write!(f, "Serialization error: {}", msg),
        }
    }
}

impl std::error::Error for EvalError {}

impl From<std::io::Error> for EvalError {
    fn from(err: std::io::Error) -> Self {
        EvalError::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for EvalError {
    fn from(err: serde_json::Error) -> Self {
        EvalError::SerializationError(err.to_string())
    }
}

// Helper functions for common error patterns
impl EvalError {
    pub fn dimension_mismatch<S: Into<String>>(expected: S, actual: S) -> Self {
        EvalError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }

    pub fn invalid_parameter<S: Into<String>>(name: S, reason: S) -> Self {
        EvalError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
