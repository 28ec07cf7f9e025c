//! External integrations
//!
//! Adapters for the systems the exporter talks to: the SQL Server report
//! source and the S3 destination, behind the traits in [`traits`].

pub mod mssql;
pub mod s3;
pub mod traits;

pub use traits::{ObjectStore, ReportSource};
