//! Result type alias for Tabula
//!
//! Convenience alias using `ExportError` as the error type; use this for all
//! fallible operations in the crate.

use super::errors::ExportError;

/// Result type alias for Tabula operations
pub type Result<T> = std::result::Result<T, ExportError>;
