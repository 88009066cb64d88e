//! End-to-end pipeline tests with in-memory collaborators: post source,
//! mapping service, and entity finder are all fakes; everything between
//! them is the real pipeline.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::Utc;

use tabletrend_common::{Business, GeoPoint, Post, TimeFrame, TrendError, TrendsSnapshot};
use tabletrend_core::{
    BusinessResolver, EntityFinder, GeoResolver, NameSpan, PlaceRef, PostSource,
    ResolutionCoordinator, TrendsService, TumblingCache,
};

const WINDOW: Duration = Duration::from_secs(600);

fn geo_post(lat: f64, lng: f64) -> Post {
    Post {
        text: "so good here".to_string(),
        hashtags: vec![],
        repost_count: 2,
        favorite_count: 5,
        created_at: Utc::now(),
        author_handle: "eater".to_string(),
        coordinate: Some(GeoPoint { lat, lng }),
    }
}

fn text_post(text: &str) -> Post {
    Post {
        text: text.to_string(),
        hashtags: vec![],
        repost_count: 1,
        favorite_count: 1,
        created_at: Utc::now(),
        author_handle: "foodie".to_string(),
        coordinate: None,
    }
}

fn food_business(place_id: &str) -> Business {
    Business {
        place_id: place_id.to_string(),
        name: place_id.to_uppercase(),
        formatted_address: "1 Main St".to_string(),
        rating: 4.5,
        categories: vec!["restaurant".to_string()],
        photo_refs: vec![],
    }
}

/// Post source that returns a fixed batch and counts searches, so tests
/// can tell cache hits from recomputations.
struct FixedSource {
    posts: Vec<Post>,
    calls: AtomicUsize,
}

impl FixedSource {
    fn new(posts: Vec<Post>) -> Self {
        Self {
            posts,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl PostSource for FixedSource {
    async fn search(&self, _query: &str, _timeframe: TimeFrame) -> Result<Vec<Post>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.posts.clone())
    }
}

struct FailingSource;

#[async_trait]
impl PostSource for FailingSource {
    async fn search(&self, _query: &str, _timeframe: TimeFrame) -> Result<Vec<Post>> {
        Err(anyhow!("search service unavailable"))
    }
}

/// Mapping fake: every reverse geocode lands on place "a"; text search for
/// "Bistro B" lands on place "b".
struct StubGeo {
    details: HashMap<String, Business>,
}

impl StubGeo {
    fn new() -> Self {
        Self {
            details: HashMap::from([
                ("a".to_string(), food_business("a")),
                ("b".to_string(), food_business("b")),
            ]),
        }
    }
}

#[async_trait]
impl GeoResolver for StubGeo {
    async fn reverse_geocode(&self, _lat: f64, _lng: f64) -> Result<Vec<PlaceRef>> {
        Ok(vec![PlaceRef {
            place_id: "a".to_string(),
        }])
    }

    async fn find_by_text(&self, text: &str) -> Result<Vec<PlaceRef>> {
        if text == "Bistro B" {
            Ok(vec![PlaceRef {
                place_id: "b".to_string(),
            }])
        } else {
            Ok(vec![])
        }
    }

    async fn place_details(&self, place_id: &str) -> Result<Option<Business>> {
        Ok(self.details.get(place_id).cloned())
    }
}

/// Finder that proposes the whole token sequence as one candidate span.
struct WholeTextFinder;

impl EntityFinder for WholeTextFinder {
    fn find_candidate_spans(&self, tokens: &[String]) -> Vec<NameSpan> {
        if tokens.is_empty() {
            vec![]
        } else {
            vec![NameSpan {
                start: 0,
                end: tokens.len(),
                confidence: 0.8,
            }]
        }
    }
}

fn service_with(source: Arc<dyn PostSource>, capacity: usize) -> TrendsService {
    let resolver = Arc::new(BusinessResolver::new(
        Arc::new(StubGeo::new()),
        Arc::new(WholeTextFinder),
    ));
    let coordinator = ResolutionCoordinator::new(resolver, 4);
    let cache: TumblingCache<String, TrendsSnapshot> = TumblingCache::new(WINDOW, capacity);
    TrendsService::new(source, coordinator, cache, vec!["food".to_string()])
}

#[tokio::test]
async fn two_geo_posts_and_one_text_post_rank_a_over_b() {
    let source = Arc::new(FixedSource::new(vec![
        geo_post(43.6, -79.4),
        text_post("Bistro B"),
        geo_post(43.7, -79.3),
    ]));
    let service = service_with(source, 8);

    let snapshot = service.compute_trends("Toronto", TimeFrame::OneDay).await.unwrap();

    assert_eq!(snapshot.trend_count, 2);
    assert_eq!(snapshot.trends.len(), 2);
    assert_eq!(snapshot.timeframe, TimeFrame::OneDay);

    let a = &snapshot.trends[0];
    let b = &snapshot.trends[1];
    assert_eq!(a.business.place_id, "a");
    assert_eq!(a.total_mentions, 2);
    assert_eq!(a.total_reposts, 4);
    assert_eq!(a.total_favorites, 10);
    assert_eq!(b.business.place_id, "b");
    assert_eq!(b.total_mentions, 1);
}

#[tokio::test]
async fn identical_query_is_served_from_cache() {
    let source = Arc::new(FixedSource::new(vec![geo_post(43.6, -79.4)]));
    let service = service_with(source.clone(), 8);

    let first = service.compute_trends("Toronto", TimeFrame::Week).await.unwrap();
    let second = service.compute_trends("Toronto", TimeFrame::Week).await.unwrap();

    assert_eq!(source.calls.load(Ordering::SeqCst), 1);
    assert_eq!(first, second);
}

#[tokio::test]
async fn different_timeframes_are_distinct_cache_keys() {
    let source = Arc::new(FixedSource::new(vec![geo_post(43.6, -79.4)]));
    let service = service_with(source.clone(), 8);

    service.compute_trends("Toronto", TimeFrame::OneDay).await.unwrap();
    service.compute_trends("Toronto", TimeFrame::Week).await.unwrap();

    assert_eq!(source.calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn capacity_one_cache_only_retains_the_first_query() {
    let source = Arc::new(FixedSource::new(vec![geo_post(43.6, -79.4)]));
    let service = service_with(source.clone(), 1);

    service.compute_trends("Toronto", TimeFrame::OneDay).await.unwrap();
    service.compute_trends("Montreal", TimeFrame::OneDay).await.unwrap();
    // Toronto is cached; Montreal was rejected at capacity and recomputes.
    service.compute_trends("Toronto", TimeFrame::OneDay).await.unwrap();
    service.compute_trends("Montreal", TimeFrame::OneDay).await.unwrap();

    assert_eq!(source.calls.load(Ordering::SeqCst), 3);
}

#[tokio::test]
async fn empty_batch_yields_empty_snapshot() {
    let service = service_with(Arc::new(FixedSource::new(vec![])), 8);
    let snapshot = service.compute_trends("Nowhere", TimeFrame::OneDay).await.unwrap();
    assert_eq!(snapshot.trend_count, 0);
    assert!(snapshot.trends.is_empty());
}

#[tokio::test]
async fn unresolvable_posts_yield_empty_snapshot_not_error() {
    let service = service_with(
        Arc::new(FixedSource::new(vec![text_post("nothing findable here")])),
        8,
    );
    let snapshot = service.compute_trends("Toronto", TimeFrame::OneDay).await.unwrap();
    assert_eq!(snapshot.trend_count, 0);
}

#[tokio::test]
async fn search_failure_is_the_only_error_out_of_the_core() {
    let service = service_with(Arc::new(FailingSource), 8);
    let err = service.compute_trends("Toronto", TimeFrame::OneDay).await.unwrap_err();
    assert!(matches!(err, TrendError::Search(_)));
}
