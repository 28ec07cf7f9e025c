//! Export flow

pub mod exporter;
pub mod workbook;

pub use exporter::{ReportExporter, CONTENT_TYPE, OBJECT_KEY, SHEET_NAME};
