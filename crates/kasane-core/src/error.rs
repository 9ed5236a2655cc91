//! Error types and handling for configuration composition

use thiserror::Error;

/// Main error type for configuration composition operations
#[derive(Debug, Error)]
pub enum KasaneError {
    /// An application type selector outside the closed enumeration.
    ///
    /// This is a programmer error, not a transient condition; there is no
    /// fallback preset.
    #[error("invalid application type '{value}' (expected one of: {expected})")]
    InvalidAppType { value: String, expected: String },

    /// Failures while serializing a composed sequence or formatter options
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Error kind enumeration for categorizing errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    AppType,
    Serialization,
}

impl KasaneError {
    /// Get the error kind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            KasaneError::InvalidAppType { .. } => ErrorKind::AppType,
            KasaneError::Serialization(_) => ErrorKind::Serialization,
        }
    }

    /// Create an invalid application type error naming the offending value
    pub fn invalid_app_type(value: impl Into<String>) -> Self {
        Self::InvalidAppType {
            value: value.into(),
            expected: "fullstack, backend-only".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_app_type_names_the_offending_value() {
        let err = KasaneError::invalid_app_type("staging");
        assert_eq!(err.kind(), ErrorKind::AppType);
        let message = err.to_string();
        assert!(message.contains("staging"));
        assert!(message.contains("fullstack"));
    }
}
