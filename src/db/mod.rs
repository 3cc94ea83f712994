//! Database access

use time::OffsetDateTime;

use crate::error::Error;

pub mod postgres;

/// A value bound to a statement parameter
#[derive(Debug, Clone, PartialEq)]
pub enum SqlValue {
    /// Nullable text value
    Text(Option<String>),
    /// UTC timestamp value
    Timestamp(OffsetDateTime),
}

/// Statement execution against the persistence backend
///
/// [postgres::PostgresDb] is the live implementation; tests substitute a
/// recording fake.
#[allow(async_fn_in_trait)]
pub trait SqlExec {
    /// Executes a write statement and returns the affected row count
    async fn execute(&self, stmt: &str, params: &[SqlValue]) -> Result<u64, Error>;

    /// Runs a query and returns the first column of the first row as text
    async fn query_text(&self, stmt: &str) -> Result<Option<String>, Error>;
}
