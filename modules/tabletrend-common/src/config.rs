use std::env;

/// Food-related keywords used to build the post search query when no
/// keyword list is supplied through the environment.
pub const DEFAULT_FOOD_KEYWORDS: &[&str] = &[
    "food", "eat", "dinner", "lunch", "brunch", "restaurant", "cafe", "bakery", "bar", "patio",
];

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    // Post search
    pub twitter_search_url: String,
    pub twitter_bearer_token: String,

    // Mapping service
    pub maps_api_key: String,

    // Resolution worker pool
    pub resolver_pool_size: usize,

    // Tumbling cache
    pub cache_window_minutes: u64,
    pub cache_capacity: usize,

    // Query keywords
    pub food_keywords: Vec<String>,
}

impl Config {
    /// Load configuration from environment variables.
    /// Panics with a clear message if required vars are missing.
    pub fn from_env() -> Self {
        Self {
            twitter_search_url: required_env("TWITTER_SEARCH_URL"),
            twitter_bearer_token: required_env("TWITTER_BEARER_TOKEN"),
            maps_api_key: required_env("MAPS_API_KEY"),
            resolver_pool_size: env_or("RESOLVER_POOL_SIZE", "8"),
            cache_window_minutes: env_or("CACHE_WINDOW_MINUTES", "10"),
            cache_capacity: env_or("CACHE_CAPACITY", "64"),
            food_keywords: food_keywords_from_env(),
        }
    }
}

fn required_env(key: &str) -> String {
    env::var(key).unwrap_or_else(|_| panic!("{key} environment variable is required"))
}

fn env_or<T: std::str::FromStr>(key: &str, default: &str) -> T
where
    T::Err: std::fmt::Debug,
{
    env::var(key)
        .unwrap_or_else(|_| default.to_string())
        .parse()
        .unwrap_or_else(|e| panic!("{key} must be a number: {e:?}"))
}

fn food_keywords_from_env() -> Vec<String> {
    match env::var("FOOD_KEYWORDS") {
        Ok(raw) => raw
            .split(',')
            .map(|kw| kw.trim().to_string())
            .filter(|kw| !kw.is_empty())
            .collect(),
        Err(_) => DEFAULT_FOOD_KEYWORDS.iter().map(|kw| kw.to_string()).collect(),
    }
}
