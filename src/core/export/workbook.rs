//! XLSX serialization
//!
//! Turns a [`ReportDocument`] into a single-sheet XLSX workbook in memory.
//! Every cell is written as a string; the document has already converted all
//! scalars (including NULLs) to text.

use crate::domain::errors::ExportError;
use crate::domain::report::ReportDocument;
use crate::domain::result::Result;
use rust_xlsxwriter::Workbook;

/// Serializes the document into an in-memory XLSX buffer
///
/// The workbook contains exactly one worksheet: the header row followed by
/// one row per result row.
///
/// # Errors
///
/// Returns `Serialization` if the workbook cannot be built or saved.
pub fn serialize(document: &ReportDocument) -> Result<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet
        .set_name(document.sheet_name())
        .map_err(|e| ExportError::Serialization(format!("Invalid worksheet name: {e}")))?;

    for (col, label) in document.header().iter().enumerate() {
        worksheet
            .write_string(0, col as u16, label)
            .map_err(|e| ExportError::Serialization(format!("Failed to write header: {e}")))?;
    }

    for (row_index, row) in document.rows().iter().enumerate() {
        for (col, cell) in row.iter().enumerate() {
            worksheet
                .write_string(row_index as u32 + 1, col as u16, cell)
                .map_err(|e| ExportError::Serialization(format!("Failed to write row: {e}")))?;
        }
    }

    workbook
        .save_to_buffer()
        .map_err(|e| ExportError::Serialization(format!("Failed to save workbook: {e}")))
}
