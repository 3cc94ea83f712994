//! Postgres DB

use tokio_postgres::types::ToSql;

use crate::error::Error;

use super::{SqlExec, SqlValue};

/// Postgres DB
#[derive(Debug, Clone)]
pub struct PostgresDb {
    /// Postgres pool
    pool: deadpool_postgres::Pool,
}

impl PostgresDb {
    /// Creates a new instance
    pub fn new(postgres_pool: deadpool_postgres::Pool) -> Self {
        Self {
            pool: postgres_pool,
        }
    }

    /// Returns a pooled postgres client
    async fn client(&self) -> Result<deadpool_postgres::Object, Error> {
        Ok(self.pool.get().await?)
    }
}

/// Borrows [SqlValue]s as postgres parameters
fn pg_params(values: &[SqlValue]) -> Vec<&(dyn ToSql + Sync)> {
    values
        .iter()
        .map(|value| match value {
            SqlValue::Text(text) => text as &(dyn ToSql + Sync),
            SqlValue::Timestamp(ts) => ts as &(dyn ToSql + Sync),
        })
        .collect()
}

impl SqlExec for PostgresDb {
    async fn execute(&self, stmt: &str, params: &[SqlValue]) -> Result<u64, Error> {
        let client = self.client().await?;
        Ok(client.execute(stmt, &pg_params(params)).await?)
    }

    async fn query_text(&self, stmt: &str) -> Result<Option<String>, Error> {
        let client = self.client().await?;
        let rows = client.query(stmt, &[]).await?;
        Ok(rows
            .into_iter()
            .next()
            .and_then(|row| row.get::<_, Option<String>>(0)))
    }
}
