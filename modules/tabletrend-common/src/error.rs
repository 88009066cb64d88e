use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrendError {
    #[error("Post search error: {0}")]
    Search(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}
