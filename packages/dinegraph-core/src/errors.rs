//! Error types for dinegraph-core
//!
//! Provides unified error handling across the crate.

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for dinegraph-core operations
#[derive(Debug, Error)]
pub enum DinegraphError {
    /// Two records share the same identifier within one graph build
    #[error("Duplicate identifier '{identifier}' at records {first_index} and {second_index}")]
    DuplicateIdentifier {
        identifier: String,
        first_index: usize,
        second_index: usize,
    },

    /// A numeric attribute is NaN, infinite, or out of its domain
    #[error("Invalid attribute '{field}' = {value} for '{identifier}'")]
    InvalidAttribute {
        identifier: String,
        field: &'static str,
        value: f64,
    },

    /// A mapped column is absent from the table header
    #[error("Missing column '{column}' in header (available: {available})")]
    MissingColumn { column: String, available: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV reader error (header or framing, not per-row parse failures)
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DinegraphError {
    /// Create an invalid attribute error
    pub fn invalid_attribute(identifier: impl Into<String>, field: &'static str, value: f64) -> Self {
        DinegraphError::InvalidAttribute {
            identifier: identifier.into(),
            field,
            value,
        }
    }

    /// Create a missing column error listing the header that was found
    pub fn missing_column(column: impl Into<String>, headers: &csv::StringRecord) -> Self {
        DinegraphError::MissingColumn {
            column: column.into(),
            available: headers.iter().collect::<Vec<_>>().join(", "),
        }
    }
}

/// Result type alias for dinegraph operations
pub type Result<T> = std::result::Result<T, DinegraphError>;
