//! Error

/// Error
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Connection pool error
    #[error("pool error: {0}")]
    Pool(String),
    /// Database error
    #[error("database error: {0}")]
    Database(String),
}

impl From<deadpool_postgres::PoolError> for Error {
    fn from(value: deadpool_postgres::PoolError) -> Self {
        Error::Pool(value.to_string())
    }
}

impl From<tokio_postgres::Error> for Error {
    fn from(value: tokio_postgres::Error) -> Self {
        Error::Database(value.to_string())
    }
}
