use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Timestamp format used in the search request body (`yyyyMMddHHmm`).
pub const REQUEST_DATE_FORMAT: &str = "%Y%m%d%H%M";

/// Timestamp format of the `created_at` field on returned tweets,
/// e.g. `Mon Sep 24 03:35:21 +0000 2018`.
pub const CREATED_AT_FORMAT: &str = "%a %b %d %H:%M:%S %z %Y";

// --- Request ---

#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub query: String,
    #[serde(rename = "fromDate")]
    pub from_date: String,
    #[serde(rename = "toDate")]
    pub to_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next: Option<String>,
}

// --- Response ---

#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<TweetData>,
    #[serde(default)]
    pub next: Option<String>,
}

/// One tweet as returned by the search endpoint. Fields the pipeline does
/// not consume are left out; serde ignores them.
#[derive(Debug, Clone, Deserialize)]
pub struct TweetData {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub retweet_count: u32,
    #[serde(default)]
    pub favorite_count: u32,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub user: Option<TweetUser>,
    #[serde(default)]
    pub entities: Option<TweetEntities>,
    #[serde(default)]
    pub geo: Option<TweetGeo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TweetUser {
    #[serde(default)]
    pub screen_name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TweetEntities {
    #[serde(default)]
    pub hashtags: Vec<HashtagEntity>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HashtagEntity {
    pub text: String,
}

/// Exact point geotag. `coordinates` is `[lat, lng]` (unlike the GeoJSON
/// `coordinates` field, which is lng-first).
#[derive(Debug, Clone, Deserialize)]
pub struct TweetGeo {
    pub coordinates: [f64; 2],
}

impl TweetData {
    /// Parse `created_at` into a UTC timestamp. Unparseable or absent
    /// timestamps are logged and yield `None`.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        let raw = self.created_at.as_deref()?;
        match DateTime::parse_from_str(raw, CREATED_AT_FORMAT) {
            Ok(dt) => Some(dt.with_timezone(&Utc)),
            Err(e) => {
                warn!(raw, error = %e, "Unparseable tweet timestamp");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_created_at() {
        let tweet = TweetData {
            text: String::new(),
            retweet_count: 0,
            favorite_count: 0,
            created_at: Some("Mon Sep 24 03:35:21 +0000 2018".to_string()),
            user: None,
            entities: None,
            geo: None,
        };
        let dt = tweet.created_at_utc().unwrap();
        assert_eq!(dt.to_rfc3339(), "2018-09-24T03:35:21+00:00");
    }

    #[test]
    fn bad_created_at_yields_none() {
        let tweet = TweetData {
            text: String::new(),
            retweet_count: 0,
            favorite_count: 0,
            created_at: Some("not a date".to_string()),
            user: None,
            entities: None,
            geo: None,
        };
        assert!(tweet.created_at_utc().is_none());
    }

    #[test]
    fn request_serializes_camel_case_dates_and_omits_missing_next() {
        let req = SearchRequest {
            query: "(pizza) place:\"Toronto\"".to_string(),
            from_date: "202608220000".to_string(),
            to_date: "202608290000".to_string(),
            next: None,
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["fromDate"], "202608220000");
        assert!(json.get("next").is_none());
    }

    #[test]
    fn response_defaults_to_empty_page() {
        let resp: SearchResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.results.is_empty());
        assert!(resp.next.is_none());
    }
}
