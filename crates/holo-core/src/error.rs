//! Error types shared across the holo workspace.
//!
//! Only structural problems are errors. Numerical degeneracies (zero-norm
//! vectors, near-zero spectral bins) are absorbed by the engine and never
//! surface here.

use thiserror::Error;

/// Errors raised by holo operations.
///
/// # Example
///
/// ```
/// use holo_core::HoloError;
///
/// let err = HoloError::DimensionMismatch { expected: 1024, actual: 512 };
/// assert_eq!(err.to_string(), "dimension mismatch: expected 1024, got 512");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HoloError {
    /// An n-ary operation received no operands.
    #[error("{operation} requires at least one operand")]
    EmptyOperandSet {
        /// Name of the operation, e.g. `"bind"`.
        operation: &'static str,
    },

    /// An operand's length differs from the engine dimension.
    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    /// The engine was configured with an unusable dimension.
    #[error("invalid dimension {dimension}: must be at least 1")]
    InvalidDimension { dimension: usize },

    /// A backend name other than `fft` or `naive`.
    #[error("unknown backend {name:?}: expected \"fft\" or \"naive\"")]
    InvalidBackend { name: String },

    /// A configuration document could not be parsed.
    #[error("invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// JSON wire-format encode/decode failure.
    #[error("serialization error: {message}")]
    Serialization { message: String },

    /// File access failure (CLI only).
    #[error("io error: {message}")]
    Io { message: String },
}

impl From<serde_json::Error> for HoloError {
    fn from(err: serde_json::Error) -> Self {
        HoloError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<std::io::Error> for HoloError {
    fn from(err: std::io::Error) -> Self {
        HoloError::Io {
            message: err.to_string(),
        }
    }
}

/// Result alias for holo operations.
pub type HoloResult<T> = Result<T, HoloError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_operand_message_names_operation() {
        let err = HoloError::EmptyOperandSet { operation: "bind" };
        assert_eq!(err.to_string(), "bind requires at least one operand");
    }

    #[test]
    fn serde_json_error_converts() {
        let parse: Result<Vec<f64>, _> = serde_json::from_str("[1.0,");
        let err: HoloError = parse.unwrap_err().into();
        assert!(matches!(err, HoloError::Serialization { .. }));
    }

    #[test]
    fn invalid_backend_quotes_name() {
        let err = HoloError::InvalidBackend {
            name: "gpu".into(),
        };
        assert!(err.to_string().contains("\"gpu\""));
    }
}
