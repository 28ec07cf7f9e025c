//! Domain error types
//!
//! This module defines the error taxonomy for Tabula. Each stage of the
//! export flow maps to one variant, and adapters convert third-party errors
//! into these variants so no driver or SDK types leak past the adapter layer.

use thiserror::Error;

/// Main Tabula error type
///
/// One variant per stage of the export flow. Every variant carries a
/// human-readable description so the top-level status string can embed it.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Configuration-related errors (missing or blank environment variables)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Database unreachable or credentials rejected
    #[error("Connection error: {0}")]
    Connection(String),

    /// Stored procedure execution or result streaming failures
    #[error("Query error: {0}")]
    Query(String),

    /// Workbook serialization failures
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Object storage upload failures
    #[error("Upload error: {0}")]
    Upload(String),
}

// Conversion from std::io::Error (TCP connect phase)
impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::Connection(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_display() {
        let err = ExportError::Configuration("DB_SERVER is not set".to_string());
        assert_eq!(err.to_string(), "Configuration error: DB_SERVER is not set");
    }

    #[test]
    fn test_connection_error_display() {
        let err = ExportError::Connection("connection refused".to_string());
        assert_eq!(err.to_string(), "Connection error: connection refused");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err: ExportError = io_err.into();
        assert!(matches!(err, ExportError::Connection(_)));
    }

    #[test]
    fn test_export_error_implements_std_error() {
        let err = ExportError::Upload("access denied".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
