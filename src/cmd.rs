//! Commands

use clap::Parser;
use tracing::{error, info};

use crate::{db::SqlExec, mdl::NewFeedSource, svc::feed::FeedService};

/// CLI main arguments
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct MainArgs {
    /// Feed name
    pub name: Option<String>,
    /// Feed URL
    pub url: Option<String>,
    /// Feed category
    pub category: Option<String>,
}

/// Runs the program
///
/// A missing name or URL aborts before any database work, and a persistence
/// failure is logged rather than propagated: in both cases the process
/// completes normally.
pub async fn run<C>(args: MainArgs, service: &FeedService<C>)
where
    C: SqlExec,
{
    let (name, url) = match (args.name, args.url) {
        (Some(name), Some(url)) => (name, url),
        _ => {
            error!("usage: feedsub <FEED_NAME> <FEED_URL> [CATEGORY]");
            return;
        }
    };

    info!(
        "received feed details: name={}, url={}, category={:?}",
        name, url, args.category
    );

    let new_feed = NewFeedSource {
        name: Some(name),
        url: Some(url),
        category: args.category,
    };
    match service.add_feed_source(new_feed).await {
        Ok(feed) => info!(
            "feed source added successfully: {}",
            feed.name.unwrap_or_default()
        ),
        Err(err) => error!("error saving feed source: {err}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{tests::FakeDb, SqlValue};

    /// Creates a service instance over a recording fake
    fn init_service(db: FakeDb) -> FeedService<FakeDb> {
        FeedService { db }
    }

    #[tokio::test]
    async fn test_run_without_args() {
        let service = init_service(FakeDb::default());
        let args = MainArgs::try_parse_from(["feedsub"]).unwrap();

        run(args, &service).await;

        assert!(service.db.execute_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_run_with_one_arg() {
        let service = init_service(FakeDb::default());
        let args = MainArgs::try_parse_from(["feedsub", "TechNews"]).unwrap();

        run(args, &service).await;

        assert!(service.db.execute_calls.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_run_without_category() {
        let service = init_service(FakeDb::default());
        let args =
            MainArgs::try_parse_from(["feedsub", "TechNews", "http://example.com/feed.xml"])
                .unwrap();

        run(args, &service).await;

        let calls = service.db.execute_calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (_, params) = &calls[0];
        assert_eq!(params[0], SqlValue::Text(Some("TechNews".to_string())));
        assert_eq!(
            params[1],
            SqlValue::Text(Some("http://example.com/feed.xml".to_string()))
        );
        assert_eq!(params[2], SqlValue::Text(None));
    }

    #[tokio::test]
    async fn test_run_with_category() {
        let service = init_service(FakeDb::default());
        let args = MainArgs::try_parse_from([
            "feedsub",
            "TechNews",
            "http://example.com/feed.xml",
            "Technology",
        ])
        .unwrap();

        run(args, &service).await;

        let calls = service.db.execute_calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (_, params) = &calls[0];
        assert_eq!(params[2], SqlValue::Text(Some("Technology".to_string())));
    }

    #[tokio::test]
    async fn test_run_db_error() {
        let service = init_service(FakeDb {
            fail_execute: true,
            ..Default::default()
        });
        let args =
            MainArgs::try_parse_from(["feedsub", "TechNews", "http://example.com/feed.xml"])
                .unwrap();

        // must complete normally even though the insert fails
        run(args, &service).await;

        assert_eq!(service.db.execute_calls.lock().unwrap().len(), 1);
    }
}
