//! Collaborator contracts consumed by the pipeline. Production
//! implementations live in the client crates (see `adapters`); tests
//! substitute in-memory fakes.

use anyhow::Result;
use async_trait::async_trait;

use tabletrend_common::{Business, Post, TimeFrame};

/// A candidate place reference from geocoding or text search. Only the id
/// is carried; the full record comes from a follow-up details call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaceRef {
    pub place_id: String,
}

/// A candidate business-name span over a token sequence, half-open
/// `[start, end)`, with a confidence score in `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct NameSpan {
    pub start: usize,
    pub end: usize,
    pub confidence: f64,
}

/// Searches the post service for posts matching a query within a time frame.
/// May paginate internally; returns the full batch.
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn search(&self, query: &str, timeframe: TimeFrame) -> Result<Vec<Post>>;
}

/// The mapping collaborator: reverse geocoding, place search by text, and
/// place-details lookup.
#[async_trait]
pub trait GeoResolver: Send + Sync {
    async fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<Vec<PlaceRef>>;

    async fn find_by_text(&self, text: &str) -> Result<Vec<PlaceRef>>;

    /// `Ok(None)` when the place id is unknown to the mapping service.
    async fn place_details(&self, place_id: &str) -> Result<Option<Business>>;
}

/// Finds candidate business-name spans in a token sequence. CPU-bound and
/// local; implementations must be safe for concurrent reads and must reset
/// any per-call adaptive state before returning, so scores are independent
/// across posts.
pub trait EntityFinder: Send + Sync {
    fn find_candidate_spans(&self, tokens: &[String]) -> Vec<NameSpan>;
}
