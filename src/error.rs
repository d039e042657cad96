//! Error types for the divider calculator.
//!
//! This module provides a unified error type [`DividerError`]. Every failure
//! of the core computations is an [`DividerError::InvalidInput`]; the other
//! variants come from loading a resistor catalog.

use thiserror::Error;

/// Result type alias using [`DividerError`].
pub type Result<T> = std::result::Result<T, DividerError>;

/// Unified error type for all divider operations.
#[derive(Error, Debug)]
pub enum DividerError {
    // ============ Computation Errors ============
    /// A field is non-numeric, out of range, or would divide by zero
    #[error("Invalid input for '{field}': {message}")]
    InvalidInput { field: String, message: String },

    // ============ Catalog Errors ============
    /// A line of the catalog file is not a positive number
    #[error("Catalog parse error at line {line}: {message}")]
    CatalogParse { line: usize, message: String },

    /// The catalog holds no values
    #[error("Resistor catalog is empty")]
    EmptyCatalog,

    // ============ I/O Errors ============
    /// Error reading a catalog file
    #[error("Failed to read catalog file '{path}': {source}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl DividerError {
    /// Create an invalid input error
    pub fn invalid_input(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a catalog parse error
    pub fn catalog_parse(line: usize, message: impl Into<String>) -> Self {
        Self::CatalogParse {
            line,
            message: message.into(),
        }
    }

    /// Whether this error should be reported as "Please enter valid numbers".
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_input_message() {
        let err = DividerError::invalid_input("vout", "must not be zero");
        assert!(err.is_invalid_input());
        assert_eq!(err.to_string(), "Invalid input for 'vout': must not be zero");
    }

    #[test]
    fn test_catalog_errors_are_not_invalid_input() {
        assert!(!DividerError::EmptyCatalog.is_invalid_input());
        let err = DividerError::catalog_parse(3, "expected a number");
        assert!(!err.is_invalid_input());
        assert_eq!(err.to_string(), "Catalog parse error at line 3: expected a number");
    }
}
