// Tabula - SQL Server stored procedure to S3 spreadsheet exporter
// Copyright (c) 2026 Tabula Contributors
// Licensed under the MIT License

use lambda_runtime::{service_fn, LambdaEvent};
use serde_json::{json, Value};
use std::sync::Arc;
use tabula::adapters::mssql::MssqlReportSource;
use tabula::adapters::s3::S3ObjectStore;
use tabula::config::ExporterConfig;
use tabula::core::export::ReportExporter;
use tabula::logging::init_logging;

/// Lambda handler
///
/// The event payload is accepted but unused. The response mirrors the usual
/// proxy shape: a status code plus the exporter's status string as the body.
/// Failures are folded into the body; the handler itself never errors.
async fn handle_request(_event: LambdaEvent<Value>) -> Result<Value, lambda_runtime::Error> {
    let message = run_export().await;
    let status_code = if message.starts_with("Error: ") { 500 } else { 200 };

    Ok(json!({
        "statusCode": status_code,
        "body": message,
    }))
}

/// Runs one complete export, returning the status string
async fn run_export() -> String {
    let config = match ExporterConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "Failed to load configuration");
            return format!("Error: {e}");
        }
    };

    tracing::info!(
        endpoint = %config.database.endpoint(),
        bucket = %config.storage.bucket,
        "Starting export"
    );

    let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = Arc::new(S3ObjectStore::new(
        aws_sdk_s3::Client::new(&aws_config),
        config.storage.bucket.clone(),
    ));
    let source = Arc::new(MssqlReportSource::new(config.database.clone()));

    let exporter = ReportExporter::new(source, store, config.storage.bucket.clone());
    exporter.export().await
}

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    // Load environment variables from .env file if present (local runs only)
    let _ = dotenvy::dotenv();

    if let Err(e) = init_logging("info") {
        eprintln!("Failed to initialize logging: {e}");
    }

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        "Tabula - Stored Procedure Report Exporter"
    );

    lambda_runtime::run(service_fn(handle_request)).await
}
