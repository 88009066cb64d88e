use serde::Deserialize;

// --- Shared ---

/// A candidate reference from geocoding or find-place. Only the place id is
/// requested; full records come from a follow-up details call.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceCandidate {
    pub place_id: String,
}

// --- Reverse geocoding ---

#[derive(Debug, Clone, Deserialize)]
pub struct GeocodeResponse {
    pub status: String,
    #[serde(default)]
    pub results: Vec<PlaceCandidate>,
    #[serde(default)]
    pub error_message: Option<String>,
}

// --- Find place from text ---

#[derive(Debug, Clone, Deserialize)]
pub struct FindPlaceResponse {
    pub status: String,
    #[serde(default)]
    pub candidates: Vec<PlaceCandidate>,
    #[serde(default)]
    pub error_message: Option<String>,
}

// --- Place details ---

#[derive(Debug, Clone, Deserialize)]
pub struct DetailsResponse {
    pub status: String,
    pub result: Option<PlaceDetails>,
    #[serde(default)]
    pub error_message: Option<String>,
}

/// The subset of place-details fields the trends pipeline consumes,
/// matching the requested field mask.
#[derive(Debug, Clone, Deserialize)]
pub struct PlaceDetails {
    pub place_id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub formatted_address: Option<String>,
    #[serde(default)]
    pub rating: Option<f64>,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Photo {
    pub photo_reference: String,
}
