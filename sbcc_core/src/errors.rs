//! # Error Types
//!
//! Structured error types for sbcc_core. These errors are designed to be
//! informative for both humans and LLMs, providing enough context to
//! understand and fix issues programmatically.
//!
//! Validation errors are field-scoped: they name the offending field so a
//! UI can pin the message to the matching control while the rest of the
//! row stays editable.
//!
//! ## Example
//!
//! ```rust
//! use sbcc_core::errors::{CarbonError, CarbonResult};
//!
//! fn validate_quantity(quantity: f64) -> CarbonResult<()> {
//!     if quantity < 0.0 {
//!         return Err(CarbonError::InvalidInput {
//!             field: "quantity".to_string(),
//!             value: quantity.to_string(),
//!             reason: "Quantity must be non-negative".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for sbcc_core operations
pub type CarbonResult<T> = Result<T, CarbonError>;

/// Structured error type for estimator operations.
///
/// Each variant provides specific context about what went wrong,
/// enabling programmatic error handling by LLMs and other consumers.
/// Unresolved catalogue identifiers are deliberately NOT errors; lookups
/// return `None` and the calculation treats a no-match as a zero factor.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CarbonError {
    /// An input value is invalid (negative, non-numeric, wrong enum member)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// File I/O error during export
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CarbonError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CarbonError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CarbonError::MissingField {
            field: field.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CarbonError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Check if this error is scoped to a single input field
    /// (shown inline next to the control rather than ending the session)
    pub fn is_field_error(&self) -> bool {
        matches!(
            self,
            CarbonError::InvalidInput { .. } | CarbonError::MissingField { .. }
        )
    }

    /// The field an inline error belongs to, if any
    pub fn field(&self) -> Option<&str> {
        match self {
            CarbonError::InvalidInput { field, .. } => Some(field),
            CarbonError::MissingField { field } => Some(field),
            _ => None,
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CarbonError::InvalidInput { .. } => "INVALID_INPUT",
            CarbonError::MissingField { .. } => "MISSING_FIELD",
            CarbonError::FileError { .. } => "FILE_ERROR",
            CarbonError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}
