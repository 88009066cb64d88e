use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use maps_client::MapsClient;
use tabletrend_common::{Config, TimeFrame};
use tabletrend_core::{
    BusinessResolver, CapitalizedSpanFinder, ResolutionCoordinator, TrendsService, TumblingCache,
};
use twitter_client::TwitterClient;

/// Compute trending food businesses for a place from recent social posts.
#[derive(Parser)]
#[command(name = "tabletrend")]
struct Args {
    /// Geographic place to search, e.g. "Toronto"
    #[arg(long)]
    place: String,

    /// How far back to look: one-day, three-day, or week
    #[arg(long, default_value = "one-day")]
    timeframe: TimeFrame,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("tabletrend=info".parse()?))
        .init();

    let args = Args::parse();
    let config = Config::from_env();

    let maps = Arc::new(MapsClient::new(config.maps_api_key.clone()));
    let finder = Arc::new(CapitalizedSpanFinder);
    let resolver = Arc::new(BusinessResolver::new(maps, finder));
    let coordinator = ResolutionCoordinator::new(resolver, config.resolver_pool_size);
    let cache = TumblingCache::new(
        Duration::from_secs(config.cache_window_minutes * 60),
        config.cache_capacity,
    );
    let source = Arc::new(TwitterClient::new(
        config.twitter_bearer_token.clone(),
        config.twitter_search_url.clone(),
    ));
    let service = TrendsService::new(source, coordinator, cache, config.food_keywords.clone());

    info!(place = args.place.as_str(), timeframe = %args.timeframe, "Computing trends");
    let snapshot = service.compute_trends(&args.place, args.timeframe).await?;

    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
