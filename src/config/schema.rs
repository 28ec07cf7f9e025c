//! Configuration schema types
//!
//! Tabula is configured entirely from the execution environment: the five
//! variables below are resolved once per invocation, validated for presence
//! eagerly, and carried in an immutable config struct for the rest of the
//! run.

use crate::config::secret::{secret_string, SecretString};
use crate::domain::errors::ExportError;
use crate::domain::result::Result;

/// Environment variable holding the SQL Server host
pub const ENV_DB_SERVER: &str = "DB_SERVER";
/// Environment variable holding the database name
pub const ENV_DB_NAME: &str = "DB_NAME";
/// Environment variable holding the SQL login user
pub const ENV_DB_USER: &str = "DB_USER";
/// Environment variable holding the SQL login password
pub const ENV_DB_PASSWORD: &str = "DB_PASSWORD";
/// Environment variable holding the destination bucket name
pub const ENV_S3_BUCKET_NAME: &str = "s3_bucket_name";

/// Default TDS port for SQL Server
const DEFAULT_PORT: u16 = 1433;

/// Main Tabula configuration
#[derive(Debug, Clone)]
pub struct ExporterConfig {
    /// SQL Server connection settings
    pub database: DatabaseConfig,

    /// Object storage settings
    pub storage: StorageConfig,
}

/// SQL Server connection configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// Server host name or address
    pub server: String,

    /// Database name
    pub database: String,

    /// SQL authentication user
    pub username: String,

    /// SQL authentication password (redacted in Debug output)
    pub password: SecretString,

    /// TDS port (fixed at 1433)
    pub port: u16,
}

/// Object storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Destination bucket name
    pub bucket: String,
}

impl ExporterConfig {
    /// Loads configuration from the execution environment
    ///
    /// All five variables are required and must be non-blank. Missing
    /// variables are collected and reported together so a misconfigured
    /// deployment surfaces every problem at once instead of one per run.
    ///
    /// # Errors
    ///
    /// Returns `ExportError::Configuration` naming every missing variable.
    pub fn from_env() -> Result<Self> {
        let mut missing = Vec::new();

        let server = require_var(ENV_DB_SERVER, &mut missing);
        let database = require_var(ENV_DB_NAME, &mut missing);
        let username = require_var(ENV_DB_USER, &mut missing);
        let password = require_var(ENV_DB_PASSWORD, &mut missing);
        let bucket = require_var(ENV_S3_BUCKET_NAME, &mut missing);

        if !missing.is_empty() {
            return Err(ExportError::Configuration(format!(
                "Missing required environment variables: {}",
                missing.join(", ")
            )));
        }

        Ok(Self {
            database: DatabaseConfig {
                server,
                database,
                username,
                password: secret_string(password),
                port: DEFAULT_PORT,
            },
            storage: StorageConfig { bucket },
        })
    }
}

impl DatabaseConfig {
    /// Renders a log-safe endpoint description (no credentials)
    pub fn endpoint(&self) -> String {
        format!("{}:{}/{}", self.server, self.port, self.database)
    }
}

/// Reads a required environment variable, recording it as missing when unset
/// or blank
fn require_var(name: &'static str, missing: &mut Vec<&'static str>) -> String {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => value,
        _ => {
            missing.push(name);
            String::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;
    use std::sync::Mutex;

    // from_env tests mutate process-wide environment state
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn set_all_vars() {
        std::env::set_var(ENV_DB_SERVER, "db.example.com");
        std::env::set_var(ENV_DB_NAME, "reports");
        std::env::set_var(ENV_DB_USER, "exporter");
        std::env::set_var(ENV_DB_PASSWORD, "hunter2");
        std::env::set_var(ENV_S3_BUCKET_NAME, "report-bucket");
    }

    fn clear_all_vars() {
        for name in [
            ENV_DB_SERVER,
            ENV_DB_NAME,
            ENV_DB_USER,
            ENV_DB_PASSWORD,
            ENV_S3_BUCKET_NAME,
        ] {
            std::env::remove_var(name);
        }
    }

    #[test]
    fn test_from_env_complete() {
        let _guard = ENV_LOCK.lock().unwrap();
        set_all_vars();

        let config = ExporterConfig::from_env().unwrap();
        assert_eq!(config.database.server, "db.example.com");
        assert_eq!(config.database.database, "reports");
        assert_eq!(config.database.username, "exporter");
        assert_eq!(config.database.password.expose_secret().as_ref(), "hunter2");
        assert_eq!(config.database.port, 1433);
        assert_eq!(config.storage.bucket, "report-bucket");

        clear_all_vars();
    }

    #[test]
    fn test_from_env_reports_all_missing_variables() {
        let _guard = ENV_LOCK.lock().unwrap();
        clear_all_vars();

        let err = ExporterConfig::from_env().unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("Configuration error:"));
        assert!(message.contains(ENV_DB_SERVER));
        assert!(message.contains(ENV_DB_PASSWORD));
        assert!(message.contains(ENV_S3_BUCKET_NAME));
    }

    #[test]
    fn test_from_env_blank_value_counts_as_missing() {
        let _guard = ENV_LOCK.lock().unwrap();
        set_all_vars();
        std::env::set_var(ENV_DB_USER, "  ");

        let err = ExporterConfig::from_env().unwrap_err();
        assert!(err.to_string().contains(ENV_DB_USER));

        clear_all_vars();
    }

    #[test]
    fn test_endpoint_is_credential_free() {
        let config = DatabaseConfig {
            server: "db.example.com".to_string(),
            database: "reports".to_string(),
            username: "exporter".to_string(),
            password: secret_string("hunter2".to_string()),
            port: 1433,
        };

        let endpoint = config.endpoint();
        assert_eq!(endpoint, "db.example.com:1433/reports");
        assert!(!endpoint.contains("hunter2"));
        assert!(!endpoint.contains("exporter"));
    }
}
