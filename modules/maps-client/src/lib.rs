//! Thin async client for the Google Maps web service endpoints the trends
//! pipeline needs: reverse geocoding, find-place-from-text, place details,
//! and place photos.

pub mod error;
pub mod types;

pub use error::{MapsError, Result};
pub use types::{DetailsResponse, FindPlaceResponse, GeocodeResponse, Photo, PlaceCandidate, PlaceDetails};

use tracing::debug;

const BASE_URL: &str = "https://maps.googleapis.com/maps/api";

/// Place-details fields requested from the API. Keeping the mask narrow
/// keeps the per-call billing tier down.
const DETAILS_FIELDS: &str = "place_id,name,formatted_address,rating,types,photos";

/// Default photo width when the caller specifies neither dimension; the
/// photo endpoint rejects requests without at least one.
const DEFAULT_PHOTO_WIDTH: u32 = 400;

pub struct MapsClient {
    client: reqwest::Client,
    api_key: String,
}

impl MapsClient {
    pub fn new(api_key: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
        }
    }

    /// Reverse-geocode a coordinate into candidate place references,
    /// nearest first.
    pub async fn reverse_geocode(&self, lat: f64, lng: f64) -> Result<Vec<PlaceCandidate>> {
        let url = format!("{BASE_URL}/geocode/json");
        let resp: GeocodeResponse = self
            .client
            .get(&url)
            .query(&[("latlng", format!("{lat},{lng}")), ("key", self.api_key.clone())])
            .send()
            .await?
            .json()
            .await?;

        check_status(&resp.status, resp.error_message.as_deref())?;
        debug!(lat, lng, results = resp.results.len(), "reverse geocoded");
        Ok(resp.results)
    }

    /// Search for places matching a free-text query. Requests place ids only.
    pub async fn find_place_by_text(&self, text: &str) -> Result<Vec<PlaceCandidate>> {
        let url = format!("{BASE_URL}/place/findplacefromtext/json");
        let resp: FindPlaceResponse = self
            .client
            .get(&url)
            .query(&[
                ("input", text),
                ("inputtype", "textquery"),
                ("fields", "place_id"),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .json()
            .await?;

        check_status(&resp.status, resp.error_message.as_deref())?;
        debug!(text, candidates = resp.candidates.len(), "find place by text");
        Ok(resp.candidates)
    }

    /// Fetch place details for a place id. `Ok(None)` when the id is unknown.
    pub async fn place_details(&self, place_id: &str) -> Result<Option<PlaceDetails>> {
        let url = format!("{BASE_URL}/place/details/json");
        let resp: DetailsResponse = self
            .client
            .get(&url)
            .query(&[
                ("place_id", place_id),
                ("fields", DETAILS_FIELDS),
                ("key", self.api_key.as_str()),
            ])
            .send()
            .await?
            .json()
            .await?;

        check_status(&resp.status, resp.error_message.as_deref())?;
        Ok(resp.result)
    }

    /// Fetch raw photo bytes by photo reference. At least one dimension is
    /// sent; defaults to `DEFAULT_PHOTO_WIDTH` when the caller gives neither.
    pub async fn place_photo(
        &self,
        photo_reference: &str,
        max_width: Option<u32>,
        max_height: Option<u32>,
    ) -> Result<Vec<u8>> {
        let url = format!("{BASE_URL}/place/photo");
        let mut query: Vec<(&str, String)> = vec![
            ("photoreference", photo_reference.to_string()),
            ("key", self.api_key.clone()),
        ];
        match (max_width, max_height) {
            (None, None) => query.push(("maxwidth", DEFAULT_PHOTO_WIDTH.to_string())),
            (w, h) => {
                if let Some(w) = w {
                    query.push(("maxwidth", w.to_string()));
                }
                if let Some(h) = h {
                    query.push(("maxheight", h.to_string()));
                }
            }
        }

        let resp = self.client.get(&url).query(&query).send().await?;
        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(MapsError::Api {
                status: status.to_string(),
                message: body,
            });
        }
        Ok(resp.bytes().await?.to_vec())
    }
}

/// `OK` and `ZERO_RESULTS` are both successful outcomes; anything else
/// (quota, key, request errors) surfaces as an API error.
fn check_status(status: &str, error_message: Option<&str>) -> Result<()> {
    match status {
        "OK" | "ZERO_RESULTS" => Ok(()),
        other => Err(MapsError::Api {
            status: other.to_string(),
            message: error_message.unwrap_or("").to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_results_is_not_an_error() {
        assert!(check_status("ZERO_RESULTS", None).is_ok());
    }

    #[test]
    fn denied_status_is_an_error() {
        let err = check_status("REQUEST_DENIED", Some("bad key")).unwrap_err();
        match err {
            MapsError::Api { status, message } => {
                assert_eq!(status, "REQUEST_DENIED");
                assert_eq!(message, "bad key");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn details_response_tolerates_missing_fields() {
        let json = r#"{"status":"OK","result":{"place_id":"abc"}}"#;
        let resp: DetailsResponse = serde_json::from_str(json).unwrap();
        let details = resp.result.unwrap();
        assert_eq!(details.place_id, "abc");
        assert!(details.name.is_none());
        assert!(details.types.is_empty());
        assert!(details.photos.is_empty());
    }
}
