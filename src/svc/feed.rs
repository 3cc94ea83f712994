//! Feed source service

use time::OffsetDateTime;

use crate::{
    db::{postgres::PostgresDb, SqlExec, SqlValue},
    error::Error,
    mdl::{FeedSource, NewFeedSource},
};

/// Feed source service
#[derive(Debug, Clone)]
pub struct FeedService<C> {
    /// Database client
    pub db: C,
}

impl FeedService<PostgresDb> {
    /// Creates a new service instance backed by a postgres pool
    pub fn new(postgres_pool: deadpool_postgres::Pool) -> Self {
        Self {
            db: PostgresDb::new(postgres_pool),
        }
    }
}

impl<C> FeedService<C>
where
    C: SqlExec,
{
    /// Adds a feed source to the db
    ///
    /// CREATED_AT and UPDATED_AT are evaluated separately at call time.
    pub async fn add_feed_source(&self, new_feed: NewFeedSource) -> Result<FeedSource, Error> {
        let stmt = "INSERT INTO FEED_SOURCE (NAME, URL, CATEGORY, CREATED_AT, UPDATED_AT) VALUES ($1, $2, $3, $4, $5)";

        let created_at = OffsetDateTime::now_utc();
        let updated_at = OffsetDateTime::now_utc();

        let params = [
            SqlValue::Text(new_feed.name.clone()),
            SqlValue::Text(new_feed.url.clone()),
            SqlValue::Text(new_feed.category.clone()),
            SqlValue::Timestamp(created_at),
            SqlValue::Timestamp(updated_at),
        ];
        self.db.execute(stmt, &params).await?;

        Ok(FeedSource {
            name: new_feed.name,
            url: new_feed.url,
            category: new_feed.category,
            created_at,
            updated_at,
        })
    }

    /// Fetches the current date from the db
    ///
    /// Connectivity check only: the driver's value is returned verbatim and
    /// errors propagate to the caller.
    pub async fn fetch_current_date(&self) -> Result<Option<String>, Error> {
        let stmt = "SELECT NOW()::TEXT";

        self.db.query_text(stmt).await
    }
}
