use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

// --- Geo Types ---

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

// --- Time Frame ---

/// How far back a trends query looks. The string forms are the values
/// callers pass in query parameters and cache keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TimeFrame {
    OneDay,
    ThreeDay,
    Week,
}

impl TimeFrame {
    pub fn duration_days(&self) -> i64 {
        match self {
            TimeFrame::OneDay => 1,
            TimeFrame::ThreeDay => 3,
            TimeFrame::Week => 7,
        }
    }

    /// UTC instant at the start of this time frame (now minus the frame's days).
    pub fn since(&self) -> DateTime<Utc> {
        Utc::now() - Duration::days(self.duration_days())
    }
}

impl std::fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeFrame::OneDay => write!(f, "one-day"),
            TimeFrame::ThreeDay => write!(f, "three-day"),
            TimeFrame::Week => write!(f, "week"),
        }
    }
}

impl std::str::FromStr for TimeFrame {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "one-day" => Ok(TimeFrame::OneDay),
            "three-day" => Ok(TimeFrame::ThreeDay),
            "week" => Ok(TimeFrame::Week),
            other => Err(format!("invalid timeframe: {other}")),
        }
    }
}

// --- Posts ---

/// One social media post about a place. Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub text: String,
    pub hashtags: Vec<String>,
    pub repost_count: u32,
    pub favorite_count: u32,
    pub created_at: DateTime<Utc>,
    pub author_handle: String,
    pub coordinate: Option<GeoPoint>,
}

// --- Businesses ---

/// A physical place entity returned by the mapping collaborator.
/// `place_id` is the stable identity used for grouping mentions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    pub place_id: String,
    pub name: String,
    pub formatted_address: String,
    pub rating: f64,
    pub categories: Vec<String>,
    pub photo_refs: Vec<String>,
}

/// The outcome of resolving one post. `business` is `None` when no
/// confident match was found — a normal result, not a failure.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedMention {
    pub post: Post,
    pub business: Option<Business>,
}

// --- Trends ---

/// Aggregate engagement for one business across a query batch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub business: Business,
    pub total_mentions: u32,
    pub total_reposts: u64,
    pub total_favorites: u64,
}

impl Trend {
    /// Ranking key: mentions first, then favorites, then reposts.
    /// Compared descending when ordering a snapshot.
    pub fn rank_key(&self) -> (u32, u64, u64) {
        (self.total_mentions, self.total_favorites, self.total_reposts)
    }
}

/// Immutable result of one pipeline run. `trend_count` always equals
/// `trends.len()` and `trends` is sorted by descending `rank_key`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendsSnapshot {
    pub trend_count: usize,
    pub generated_at: DateTime<Utc>,
    pub timeframe: TimeFrame,
    pub trends: Vec<Trend>,
}

impl TrendsSnapshot {
    pub fn new(timeframe: TimeFrame, trends: Vec<Trend>) -> Self {
        Self {
            trend_count: trends.len(),
            generated_at: Utc::now(),
            timeframe,
            trends,
        }
    }
}
