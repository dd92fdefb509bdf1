//! Error types for the gateway domain library.

use thiserror::Error;

/// Result type alias for gateway operations.
pub type Result<T> = std::result::Result<T, GatewayError>;

/// Errors raised while building the navigation tree.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NavError {
    /// A group was declared without any child links.
    #[error("Navigation group '{0}' has no children")]
    EmptyGroup(String),

    /// An entry name was empty or whitespace-only.
    #[error("Navigation entry name must not be blank")]
    BlankName,

    /// A link path was not an absolute route path.
    #[error("Invalid route path '{path}' for '{name}': must start with '/'")]
    InvalidPath { name: String, path: String },

    /// Two links share the same path, which would make two entries active at once.
    #[error("Duplicate route path '{0}' in navigation tree")]
    DuplicatePath(String),
}

/// Errors raised by the add-device form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A required field was left blank.
    #[error("{0} is required")]
    MissingField(&'static str),
}

/// Errors raised by the discovery scan state machine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ScanError {
    /// A scan was requested while one is already in flight.
    #[error("A discovery scan is already running")]
    AlreadyScanning,
}

/// Top-level error for gateway operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error(transparent)]
    Navigation(#[from] NavError),

    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Scan(#[from] ScanError),

    /// Parsing a categorical value (status, severity, protocol) failed.
    #[error("Invalid {kind}: '{value}' (expected one of: {expected})")]
    InvalidValue {
        kind: &'static str,
        value: String,
        expected: String,
    },
}

impl GatewayError {
    /// Build an `InvalidValue` error from the list of accepted spellings.
    pub fn invalid_value(kind: &'static str, value: &str, expected: &[&str]) -> Self {
        Self::InvalidValue {
            kind,
            value: value.to_string(),
            expected: expected.join(", "),
        }
    }

    /// Check if this error came from user input rather than program state.
    pub fn is_validation_error(&self) -> bool {
        matches!(self, Self::Form(_) | Self::InvalidValue { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_field_message() {
        let err = GatewayError::from(FormError::MissingField("IP Address"));
        assert_eq!(err.to_string(), "IP Address is required");
        assert!(err.is_validation_error());
    }

    #[test]
    fn test_invalid_value_lists_expected() {
        let err = GatewayError::invalid_value("severity", "urgent", &["critical", "high"]);
        assert_eq!(
            err.to_string(),
            "Invalid severity: 'urgent' (expected one of: critical, high)"
        );
    }

    #[test]
    fn test_scan_error_is_not_validation() {
        let err = GatewayError::from(ScanError::AlreadyScanning);
        assert!(!err.is_validation_error());
    }
}
