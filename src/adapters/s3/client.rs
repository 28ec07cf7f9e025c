//! S3 object store
//!
//! Single-write S3 backend for the serialized report. Uses the ambient AWS
//! credential chain; `PutObject` overwrites any existing object at the key.

use crate::adapters::traits::ObjectStore;
use crate::domain::errors::ExportError;
use crate::domain::result::Result;
use async_trait::async_trait;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client as S3Client;

/// Object store backed by an S3 bucket
pub struct S3ObjectStore {
    client: S3Client,
    bucket: String,
}

impl S3ObjectStore {
    /// Creates a new store for the given bucket
    pub fn new(client: S3Client, bucket: String) -> Self {
        Self { client, bucket }
    }

    /// Destination bucket name
    pub fn bucket(&self) -> &str {
        &self.bucket
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(&self, key: &str, body: Vec<u8>, content_type: &str) -> Result<()> {
        let size = body.len();

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .send()
            .await
            .map_err(|e| {
                ExportError::Upload(format!(
                    "Failed to write object to s3://{}/{}: {}",
                    self.bucket, key, e
                ))
            })?;

        tracing::debug!(bucket = %self.bucket, key, size, "Object written to S3");
        Ok(())
    }
}
