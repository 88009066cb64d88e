//! Trend aggregation pipeline: resolves a batch of social posts about a
//! place to food businesses, aggregates the mentions into ranked trends,
//! and fronts repeated queries with a tumbling cache.

pub mod adapters;
pub mod aggregate;
pub mod cache;
pub mod coordinator;
pub mod finder;
pub mod query;
pub mod resolve;
pub mod service;
pub mod traits;

pub use aggregate::aggregate;
pub use cache::TumblingCache;
pub use coordinator::ResolutionCoordinator;
pub use finder::CapitalizedSpanFinder;
pub use query::SearchQueryBuilder;
pub use resolve::{BusinessResolver, FOOD_CATEGORIES};
pub use service::TrendsService;
pub use traits::{EntityFinder, GeoResolver, NameSpan, PlaceRef, PostSource};
