//! Feed source registration CLI

use clap::Parser;

use feedsub::{cmd, config::AppConfig, svc::feed::FeedService, trace};

#[tokio::main]
async fn main() {
    let args = cmd::MainArgs::parse();

    let cfg = AppConfig::load();
    trace::init_tracer(&cfg);

    let service = FeedService::new(cfg.postgres.new_pool());
    cmd::run(args, &service).await;
}
