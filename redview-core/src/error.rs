use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Feed API error: {0}")]
    FeedApi(#[from] FeedApiError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Internal error: {message}")]
    Internal { message: String },
}

#[derive(Error, Debug)]
pub enum FeedApiError {
    #[error("Server error: {status_code}")]
    ServerError { status_code: u16 },

    #[error("Request failed with status {status_code}")]
    RequestFailed { status_code: u16 },

    #[error("Request timeout")]
    RequestTimeout,

    #[error("Invalid feed response: {details}")]
    InvalidResponse { details: String },

    #[error(
        "No posts returned for r/{subreddit}: check the subreddit spelling, \
         or it may be private or empty"
    )]
    EmptyFeed { subreddit: String },
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {path}")]
    FileNotFound { path: String },

    #[error("Invalid title replacement pattern: {pattern}")]
    InvalidRule {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("Configuration parsing error: {0}")]
    Parse(#[from] toml::de::Error),
}
