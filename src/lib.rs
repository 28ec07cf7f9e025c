// Tabula - SQL Server stored procedure to S3 spreadsheet exporter
// Copyright (c) 2026 Tabula Contributors
// Licensed under the MIT License

//! # Tabula - Stored Procedure Report Exporter
//!
//! Tabula is a single-purpose serverless function: on each invocation it
//! executes a fixed stored procedure on SQL Server, serializes the result
//! set into a one-sheet XLSX workbook, and uploads the file to S3 under a
//! fixed key.
//!
//! ## Architecture
//!
//! Tabula follows a layered architecture:
//!
//! - [`core`] - Business logic (the export flow, XLSX serialization)
//! - [`adapters`] - External integrations (SQL Server, S3)
//! - [`domain`] - Core domain types, errors, and the report document model
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use tabula::adapters::mssql::MssqlReportSource;
//! use tabula::adapters::s3::S3ObjectStore;
//! use tabula::config::ExporterConfig;
//! use tabula::core::export::ReportExporter;
//!
//! #[tokio::main]
//! async fn main() {
//!     let config = ExporterConfig::from_env().expect("configuration");
//!
//!     let aws_config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
//!     let store = Arc::new(S3ObjectStore::new(
//!         aws_sdk_s3::Client::new(&aws_config),
//!         config.storage.bucket.clone(),
//!     ));
//!     let source = Arc::new(MssqlReportSource::new(config.database.clone()));
//!
//!     let exporter = ReportExporter::new(source, store, config.storage.bucket.clone());
//!     println!("{}", exporter.export().await);
//! }
//! ```
//!
//! ## Error Handling
//!
//! All fallible operations return [`domain::Result`] with the
//! [`domain::ExportError`] taxonomy (configuration, connection, query,
//! serialization, upload). The top-level [`core::export::ReportExporter::export`]
//! entry point folds every failure into a returned `"Error: ..."` status
//! string and never raises past its boundary.

pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
