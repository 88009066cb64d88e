//! The cache-fronted entry point: search posts, resolve them, aggregate
//! into a snapshot.

use std::sync::Arc;

use tracing::{debug, info};

use tabletrend_common::{TimeFrame, TrendError, TrendsSnapshot};

use crate::aggregate::aggregate;
use crate::cache::TumblingCache;
use crate::coordinator::ResolutionCoordinator;
use crate::query::SearchQueryBuilder;
use crate::traits::PostSource;

pub struct TrendsService {
    source: Arc<dyn PostSource>,
    coordinator: ResolutionCoordinator,
    cache: TumblingCache<String, TrendsSnapshot>,
    keywords: Vec<String>,
}

impl TrendsService {
    pub fn new(
        source: Arc<dyn PostSource>,
        coordinator: ResolutionCoordinator,
        cache: TumblingCache<String, TrendsSnapshot>,
        keywords: Vec<String>,
    ) -> Self {
        Self {
            source,
            coordinator,
            cache,
            keywords,
        }
    }

    /// Compute the trends snapshot for a place and time frame, serving
    /// repeated identical queries from the tumbling cache within a window.
    ///
    /// Post-search failure is the only error that leaves this method; all
    /// resolution failures have already been absorbed downstream, so the
    /// worst outcome of a degraded run is an empty snapshot.
    pub async fn compute_trends(
        &self,
        place: &str,
        timeframe: TimeFrame,
    ) -> Result<TrendsSnapshot, TrendError> {
        let cache_key = format!("{place}-{timeframe}");
        if let Some(snapshot) = self.cache.get(&cache_key) {
            debug!(key = cache_key.as_str(), "Serving trends from cache");
            return Ok(snapshot);
        }

        let query = SearchQueryBuilder::new()
            .any_keywords(&self.keywords)
            .place(place)
            .build();
        let posts = self
            .source
            .search(&query, timeframe)
            .await
            .map_err(|e| TrendError::Search(e.to_string()))?;
        info!(place, %timeframe, posts = posts.len(), "Resolving post batch");

        let mentions = self.coordinator.resolve_all(posts).await;
        let trends = aggregate(&mentions);
        let snapshot = TrendsSnapshot::new(timeframe, trends);

        self.cache.put(cache_key, snapshot.clone());
        Ok(snapshot)
    }
}
