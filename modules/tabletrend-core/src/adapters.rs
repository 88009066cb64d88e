//! Trait implementations wiring the HTTP client crates into the pipeline's
//! collaborator contracts, plus the DTO-to-domain conversions.

use anyhow::Result;
use async_trait::async_trait;
use chrono::Utc;

use maps_client::{MapsClient, PlaceDetails};
use tabletrend_common::{Business, GeoPoint, Post, TimeFrame};
use twitter_client::{TweetData, TwitterClient};

use crate::traits::{GeoResolver, PlaceRef, PostSource};

#[async_trait]
impl GeoResolver for MapsClient {
    async fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<Vec<PlaceRef>> {
        let candidates = MapsClient::reverse_geocode(self, lat, lng).await?;
        Ok(candidates
            .into_iter()
            .map(|c| PlaceRef {
                place_id: c.place_id,
            })
            .collect())
    }

    async fn find_by_text(&self, text: &str) -> Result<Vec<PlaceRef>> {
        let candidates = MapsClient::find_place_by_text(self, text).await?;
        Ok(candidates
            .into_iter()
            .map(|c| PlaceRef {
                place_id: c.place_id,
            })
            .collect())
    }

    async fn place_details(&self, place_id: &str) -> Result<Option<Business>> {
        let details = MapsClient::place_details(self, place_id).await?;
        Ok(details.map(business_from_details))
    }
}

#[async_trait]
impl PostSource for TwitterClient {
    async fn search(&self, query: &str, timeframe: TimeFrame) -> Result<Vec<Post>> {
        let tweets = TwitterClient::search(self, query, timeframe.since()).await?;
        Ok(tweets.into_iter().map(post_from_tweet).collect())
    }
}

fn business_from_details(details: PlaceDetails) -> Business {
    Business {
        place_id: details.place_id,
        name: details.name.unwrap_or_default(),
        formatted_address: details.formatted_address.unwrap_or_default(),
        rating: details.rating.unwrap_or(0.0),
        categories: details.types,
        photo_refs: details
            .photos
            .into_iter()
            .map(|p| p.photo_reference)
            .collect(),
    }
}

fn post_from_tweet(tweet: TweetData) -> Post {
    // An unparseable timestamp degrades to "now" rather than dropping the
    // post; the pipeline only reads timestamps for presentation.
    let created_at = tweet.created_at_utc().unwrap_or_else(Utc::now);
    Post {
        created_at,
        hashtags: tweet
            .entities
            .map(|e| e.hashtags.into_iter().map(|h| h.text).collect())
            .unwrap_or_default(),
        repost_count: tweet.retweet_count,
        favorite_count: tweet.favorite_count,
        author_handle: tweet.user.map(|u| u.screen_name).unwrap_or_default(),
        coordinate: tweet.geo.map(|g| GeoPoint {
            lat: g.coordinates[0],
            lng: g.coordinates[1],
        }),
        text: tweet.text,
    }
}
