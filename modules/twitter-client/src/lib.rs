//! Thin async client for the tweet search endpoint: one POST per page,
//! following `next` tokens until the result set is exhausted.

pub mod error;
pub mod types;

pub use error::{Result, TwitterError};
pub use types::{
    HashtagEntity, SearchRequest, SearchResponse, TweetData, TweetEntities, TweetGeo, TweetUser,
};

use chrono::{DateTime, Duration, Utc};
use tracing::debug;

use types::REQUEST_DATE_FORMAT;

pub struct TwitterClient {
    client: reqwest::Client,
    bearer_token: String,
    search_url: String,
}

impl TwitterClient {
    pub fn new(bearer_token: String, search_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            bearer_token,
            search_url,
        }
    }

    /// Run a search from `from` until now, accumulating tweets across all
    /// result pages.
    pub async fn search(&self, query: &str, from: DateTime<Utc>) -> Result<Vec<TweetData>> {
        // Clock drift occurs between this server and the search service.
        // If we are ahead of it, it rejects a toDate past its current time,
        // so back the upper bound off by 30 seconds.
        let to = Utc::now() - Duration::seconds(30);

        let mut request = SearchRequest {
            query: query.to_string(),
            from_date: from.format(REQUEST_DATE_FORMAT).to_string(),
            to_date: to.format(REQUEST_DATE_FORMAT).to_string(),
            next: None,
        };

        let mut tweets = Vec::new();
        loop {
            let page = self.send(&request).await?;
            debug!(page_size = page.results.len(), "Fetched search page");
            tweets.extend(page.results);
            match page.next {
                Some(next) => request.next = Some(next),
                None => break,
            }
        }
        Ok(tweets)
    }

    async fn send(&self, request: &SearchRequest) -> Result<SearchResponse> {
        let resp = self
            .client
            .post(&self.search_url)
            .bearer_auth(&self.bearer_token)
            .json(request)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(TwitterError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        Ok(resp.json().await?)
    }
}
