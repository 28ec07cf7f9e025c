//! Report document model
//!
//! The adapter-neutral representation of a stored procedure result set and
//! the tabular document built from it. The database adapter converts driver
//! scalars into [`CellValue`]s; the document converts every cell to text as
//! rows are appended, so the serializer only ever sees strings.

/// A single scalar cell produced by the stored procedure
///
/// Covers the database-native scalar kinds after adapter conversion. Types
/// without a natural numeric or boolean mapping (GUIDs, decimals, temporal
/// values, binary) arrive here already rendered as `Text`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    /// Database NULL
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl CellValue {
    /// Renders the textual representation of this cell
    ///
    /// A database NULL renders as the literal text `"NULL"` rather than an
    /// empty cell. This mirrors the source report format and is relied on by
    /// downstream consumers of the spreadsheet.
    pub fn as_text(&self) -> String {
        match self {
            CellValue::Null => "NULL".to_string(),
            CellValue::Bool(b) => b.to_string(),
            CellValue::Int(i) => i.to_string(),
            CellValue::Float(f) => f.to_string(),
            CellValue::Text(s) => s.clone(),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_string())
    }
}

/// The tabular output of a stored procedure invocation
///
/// Column labels in procedure order plus zero or more rows, each with one
/// cell per column.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    /// Column labels, in the order reported by the query metadata
    pub columns: Vec<String>,

    /// Result rows, one `CellValue` per column
    pub rows: Vec<Vec<CellValue>>,
}

/// An in-memory tabular document ready for serialization
///
/// The first row is the header (column labels); every subsequent row is one
/// result row with all cells converted to text. No filtering or renaming is
/// applied, so a result set with N columns and M rows always produces a
/// document with N columns and M+1 rows.
#[derive(Debug, Clone)]
pub struct ReportDocument {
    sheet_name: String,
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl ReportDocument {
    /// Creates an empty document with the given sheet name and header row
    pub fn new(sheet_name: impl Into<String>, header: Vec<String>) -> Self {
        Self {
            sheet_name: sheet_name.into(),
            header,
            rows: Vec::new(),
        }
    }

    /// Builds a document from a result set, preserving column order
    pub fn from_result_set(sheet_name: impl Into<String>, result_set: ResultSet) -> Self {
        let mut document = Self::new(sheet_name, result_set.columns);
        for row in result_set.rows {
            document.push_row(row);
        }
        document
    }

    /// Appends one result row, converting every cell to text
    pub fn push_row(&mut self, cells: Vec<CellValue>) {
        self.rows.push(cells.iter().map(CellValue::as_text).collect());
    }

    /// Worksheet name for the serialized document
    pub fn sheet_name(&self) -> &str {
        &self.sheet_name
    }

    /// Header row (column labels)
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Data rows (header excluded)
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Total row count including the header
    pub fn row_count(&self) -> usize {
        self.rows.len() + 1
    }

    /// Column count, derived from the header
    pub fn column_count(&self) -> usize {
        self.header.len()
    }
}
