//! Adapter abstraction traits
//!
//! These traits define the seams between the export flow and its external
//! systems, so the flow can be exercised against in-memory fakes in tests.

use crate::domain::{Result, ResultSet};
use async_trait::async_trait;

/// Source of the report data
///
/// Implemented by the SQL Server adapter; each call performs one complete
/// fetch (connect, execute, drain, disconnect).
#[async_trait]
pub trait ReportSource: Send + Sync {
    /// Executes the report query and returns its full result set
    ///
    /// # Errors
    ///
    /// Returns `Connection` if the database is unreachable or rejects the
    /// credentials, `Query` if execution or result streaming fails.
    async fn fetch_result_set(&self) -> Result<ResultSet>;
}

/// Destination object store
///
/// A key-addressed blob store written once per invocation. Writes overwrite
/// any existing object at the key (last-writer-wins, no versioning).
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Writes a binary object under the given key
    ///
    /// # Errors
    ///
    /// Returns `Upload` if the store rejects the write.
    async fn put_object(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<()>;
}
