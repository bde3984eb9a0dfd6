// SPDX-License-Identifier: MIT

//! Typed error handling for stepgate-rs
//!
//! Evaluation itself fails closed and reports `false` instead of an error.
//! These types cover the places that do surface failures: comparisons with
//! missing operands, document loading and the support helpers.

use thiserror::Error;

use crate::support::codec::CodecError;

/// Error type returned by a [`ValueResolver`](crate::gate::resolver::ValueResolver)
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Top-level error type for stepgate-rs
#[derive(Debug, Error)]
pub enum GateError {
    /// A value was missing where the operation requires one
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Operator token outside the supported table
    #[error("Unknown operator: '{0}'")]
    UnknownOperator(String),

    /// A condition document element could not be used
    #[error("Malformed condition at index {index}: {reason}")]
    MalformedCondition { index: usize, reason: String },

    /// The value resolver failed
    #[error("Resolver error: {0}")]
    Resolver(String),

    /// Configuration errors (unknown env values, missing actor)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Compression / decompression failures
    #[error(transparent)]
    Codec(#[from] CodecError),

    /// I/O errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),

    /// Generic error wrapper
    #[error("{0}")]
    Other(String),
}

impl GateError {
    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Create a malformed condition error
    pub fn malformed(index: usize, reason: impl Into<String>) -> Self {
        Self::MalformedCondition {
            index,
            reason: reason.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create from a generic error
    pub fn other(message: impl Into<String>) -> Self {
        Self::Other(message.into())
    }
}

impl From<BoxError> for GateError {
    fn from(err: BoxError) -> Self {
        Self::Resolver(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(
            GateError::invalid_argument("left operand is null").to_string(),
            "Invalid argument: left operand is null"
        );
        assert_eq!(
            GateError::UnknownOperator("between".to_string()).to_string(),
            "Unknown operator: 'between'"
        );
        assert_eq!(
            GateError::malformed(2, "stepRef is blank").to_string(),
            "Malformed condition at index 2: stepRef is blank"
        );
    }

    #[test]
    fn test_from_box_error() {
        let boxed: BoxError = "store offline".into();
        let err = GateError::from(boxed);
        assert!(matches!(err, GateError::Resolver(ref m) if m == "store offline"));
    }
}
