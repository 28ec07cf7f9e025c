//! Configuration management
//!
//! Environment-sourced configuration with secure credential handling.

pub mod schema;
pub mod secret;

pub use schema::{DatabaseConfig, ExporterConfig, StorageConfig};
pub use secret::{secret_string, SecretString, SecretValue};
