//! SQL Server adapter

pub mod client;
pub mod models;

pub use client::{MssqlReportSource, STORED_PROCEDURE};
