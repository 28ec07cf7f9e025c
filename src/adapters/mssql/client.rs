//! SQL Server report source
//!
//! Connects to SQL Server over TDS, executes the report stored procedure,
//! and drains its single result set. Each fetch opens a fresh connection and
//! drops it before returning, on success and failure alike.

use crate::adapters::mssql::models::cell_from_column_data;
use crate::adapters::traits::ReportSource;
use crate::config::schema::DatabaseConfig;
use crate::domain::errors::ExportError;
use crate::domain::report::ResultSet;
use crate::domain::result::Result;
use async_trait::async_trait;
use futures::TryStreamExt;
use secrecy::ExposeSecret;
use tiberius::{AuthMethod, Client, Config, QueryItem};
use tokio::net::TcpStream;
use tokio_util::compat::TokioAsyncWriteCompatExt;

/// The fixed, parameterless stored procedure producing the report
pub const STORED_PROCEDURE: &str = "dbo.Dummy_sp";

/// Report source backed by a SQL Server stored procedure
pub struct MssqlReportSource {
    config: DatabaseConfig,
}

impl MssqlReportSource {
    /// Creates a new source from connection configuration
    pub fn new(config: DatabaseConfig) -> Self {
        Self { config }
    }

    fn tds_config(&self) -> Config {
        let mut config = Config::new();
        config.host(&self.config.server);
        config.port(self.config.port);
        config.database(&self.config.database);
        config.authentication(AuthMethod::sql_server(
            &self.config.username,
            self.config.password.expose_secret().as_ref(),
        ));
        config.trust_cert();
        config
    }
}

#[async_trait]
impl ReportSource for MssqlReportSource {
    async fn fetch_result_set(&self) -> Result<ResultSet> {
        let tds_config = self.tds_config();

        let tcp = TcpStream::connect(tds_config.get_addr()).await.map_err(|e| {
            ExportError::Connection(format!(
                "Failed to reach {}: {}",
                self.config.endpoint(),
                e
            ))
        })?;
        tcp.set_nodelay(true)?;

        let mut client = Client::connect(tds_config, tcp.compat_write())
            .await
            .map_err(|e| {
                ExportError::Connection(format!(
                    "Login to {} failed: {}",
                    self.config.endpoint(),
                    e
                ))
            })?;

        tracing::debug!(
            endpoint = %self.config.endpoint(),
            procedure = STORED_PROCEDURE,
            "Connected to SQL Server"
        );

        let mut stream = client
            .simple_query(format!("EXEC {STORED_PROCEDURE}"))
            .await
            .map_err(|e| {
                ExportError::Query(format!("{STORED_PROCEDURE} execution failed: {e}"))
            })?;

        let mut result_set = ResultSet::default();
        while let Some(item) = stream
            .try_next()
            .await
            .map_err(|e| ExportError::Query(format!("Failed to read result set: {e}")))?
        {
            match item {
                QueryItem::Metadata(meta) => {
                    // Only the first result set is exported
                    if !result_set.columns.is_empty() {
                        break;
                    }
                    result_set.columns = meta
                        .columns()
                        .iter()
                        .map(|column| column.name().to_string())
                        .collect();
                }
                QueryItem::Row(row) => {
                    let cells = row
                        .into_iter()
                        .map(cell_from_column_data)
                        .collect::<Result<Vec<_>>>()?;
                    result_set.rows.push(cells);
                }
            }
        }

        tracing::debug!(
            columns = result_set.columns.len(),
            rows = result_set.rows.len(),
            "Result set drained"
        );

        // client (and its connection) dropped here on every path
        Ok(result_set)
    }
}
