use thiserror::Error;

pub type Result<T> = std::result::Result<T, MapsError>;

#[derive(Debug, Error)]
pub enum MapsError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("API error (status {status}): {message}")]
    Api { status: String, message: String },

    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<reqwest::Error> for MapsError {
    fn from(err: reqwest::Error) -> Self {
        MapsError::Network(err.to_string())
    }
}

impl From<serde_json::Error> for MapsError {
    fn from(err: serde_json::Error) -> Self {
        MapsError::Parse(err.to_string())
    }
}
