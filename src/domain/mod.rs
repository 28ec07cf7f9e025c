//! Core domain types
//!
//! Error taxonomy, the crate-wide `Result` alias, and the report document
//! model shared by the adapters and the export flow.

pub mod errors;
pub mod report;
pub mod result;

pub use errors::ExportError;
pub use report::{CellValue, ReportDocument, ResultSet};
pub use result::Result;
