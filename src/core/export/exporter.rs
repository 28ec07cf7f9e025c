//! Report exporter - the main export flow
//!
//! One linear sequence per invocation: fetch the stored procedure result
//! set, build the tabular document, serialize it to XLSX, upload it to the
//! object store, and report the outcome as a human-readable status string.

use crate::adapters::traits::{ObjectStore, ReportSource};
use crate::core::export::workbook;
use crate::domain::report::ReportDocument;
use crate::domain::result::Result;
use std::sync::Arc;
use std::time::Instant;

/// Fixed destination key; overwrites any existing object (last-writer-wins)
pub const OBJECT_KEY: &str = "stored_procedure_results.xlsx";

/// Worksheet title for the serialized report
pub const SHEET_NAME: &str = "Stored procedure Dummy_sp data";

/// MIME type for XLSX artifacts
pub const CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Report exporter
///
/// Owns the source and destination adapters for one invocation. The
/// [`export`](ReportExporter::export) entry point never fails past its own
/// boundary: every error is logged and folded into the returned status
/// string.
pub struct ReportExporter {
    source: Arc<dyn ReportSource>,
    store: Arc<dyn ObjectStore>,
    bucket: String,
}

impl ReportExporter {
    /// Creates a new exporter
    pub fn new(source: Arc<dyn ReportSource>, store: Arc<dyn ObjectStore>, bucket: String) -> Self {
        Self {
            source,
            store,
            bucket,
        }
    }

    /// Runs the export and returns a status string
    ///
    /// On success the message names the destination bucket and key. On any
    /// failure the message is the error description prefixed with
    /// `"Error: "`. This method always returns a string; callers never see
    /// an error value.
    pub async fn export(&self) -> String {
        match self.run().await {
            Ok(message) => message,
            Err(e) => {
                tracing::error!(error = %e, "Export failed");
                format!("Error: {e}")
            }
        }
    }

    async fn run(&self) -> Result<String> {
        let start = Instant::now();

        let result_set = self.source.fetch_result_set().await?;
        let document = ReportDocument::from_result_set(SHEET_NAME, result_set);

        tracing::info!(
            columns = document.column_count(),
            rows = document.row_count(),
            "Result set fetched"
        );

        let artifact = workbook::serialize(&document)?;
        tracing::info!(size = artifact.len(), "Workbook serialized");

        self.store
            .put_object(OBJECT_KEY, artifact, CONTENT_TYPE)
            .await?;

        tracing::info!(
            bucket = %self.bucket,
            key = OBJECT_KEY,
            duration_ms = start.elapsed().as_millis() as u64,
            "File uploaded"
        );

        Ok(format!(
            "File uploaded successfully to {}/{}",
            self.bucket, OBJECT_KEY
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::ExportError;
    use crate::domain::report::{CellValue, ResultSet};
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct FakeSource {
        result: Mutex<Option<Result<ResultSet>>>,
    }

    impl FakeSource {
        fn returning(result_set: ResultSet) -> Self {
            Self {
                result: Mutex::new(Some(Ok(result_set))),
            }
        }

        fn failing(error: ExportError) -> Self {
            Self {
                result: Mutex::new(Some(Err(error))),
            }
        }
    }

    #[async_trait]
    impl ReportSource for FakeSource {
        async fn fetch_result_set(&self) -> Result<ResultSet> {
            self.result.lock().unwrap().take().expect("single fetch")
        }
    }

    #[derive(Default)]
    struct CapturingStore {
        captured: Mutex<Option<(String, Vec<u8>, String)>>,
    }

    #[async_trait]
    impl ObjectStore for CapturingStore {
        async fn put_object(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<()> {
            *self.captured.lock().unwrap() =
                Some((key.to_string(), body, content_type.to_string()));
            Ok(())
        }
    }

    struct FailingStore;

    #[async_trait]
    impl ObjectStore for FailingStore {
        async fn put_object(&self, _key: &str, _body: Vec<u8>, _content_type: &str) -> Result<()> {
            Err(ExportError::Upload("access denied".to_string()))
        }
    }

    fn sample_result_set() -> ResultSet {
        ResultSet {
            columns: vec!["id".to_string(), "name".to_string()],
            rows: vec![
                vec![CellValue::Int(1), CellValue::from("a")],
                vec![CellValue::Int(2), CellValue::Null],
            ],
        }
    }

    #[tokio::test]
    async fn test_export_success_names_bucket_and_key() {
        let source = Arc::new(FakeSource::returning(sample_result_set()));
        let store = Arc::new(CapturingStore::default());
        let exporter = ReportExporter::new(source, store, "report-bucket".to_string());

        let message = exporter.export().await;
        assert!(message.contains("report-bucket"));
        assert!(message.contains(OBJECT_KEY));
        assert!(!message.starts_with("Error: "));
    }

    #[tokio::test]
    async fn test_export_uploads_xlsx_artifact() {
        let source = Arc::new(FakeSource::returning(sample_result_set()));
        let store = Arc::new(CapturingStore::default());
        let exporter =
            ReportExporter::new(source, store.clone(), "report-bucket".to_string());

        exporter.export().await;

        let (key, body, content_type) = store.captured.lock().unwrap().take().unwrap();
        assert_eq!(key, OBJECT_KEY);
        assert_eq!(content_type, CONTENT_TYPE);
        assert_eq!(&body[..2], b"PK");
    }

    #[tokio::test]
    async fn test_export_with_empty_result_set_still_uploads() {
        let result_set = ResultSet {
            columns: vec!["id".to_string()],
            rows: vec![],
        };
        let source = Arc::new(FakeSource::returning(result_set));
        let store = Arc::new(CapturingStore::default());
        let exporter =
            ReportExporter::new(source, store.clone(), "report-bucket".to_string());

        let message = exporter.export().await;
        assert!(!message.starts_with("Error: "));
        assert!(store.captured.lock().unwrap().is_some());
    }

    #[tokio::test]
    async fn test_connection_failure_returns_error_string() {
        let source = Arc::new(FakeSource::failing(ExportError::Connection(
            "connection refused".to_string(),
        )));
        let store = Arc::new(CapturingStore::default());
        let exporter =
            ReportExporter::new(source, store.clone(), "report-bucket".to_string());

        let message = exporter.export().await;
        assert!(message.starts_with("Error: "));
        assert!(message.contains("connection refused"));
        // Nothing was uploaded
        assert!(store.captured.lock().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_upload_failure_returns_error_string() {
        let source = Arc::new(FakeSource::returning(sample_result_set()));
        let exporter = ReportExporter::new(
            source,
            Arc::new(FailingStore),
            "report-bucket".to_string(),
        );

        let message = exporter.export().await;
        assert!(message.starts_with("Error: "));
        assert!(message.contains("access denied"));
    }
}
