use crate::error::*;
use tracing::{error, warn};

pub trait ErrorExt {
    fn log_error(&self) -> &Self;
    fn log_warn(&self) -> &Self;
    fn user_friendly_message(&self) -> String;
    fn error_code(&self) -> String;
}

impl ErrorExt for CoreError {
    fn log_error(&self) -> &Self {
        error!("CoreError: {}", self);
        match self {
            CoreError::FeedApi(e) => {
                error!("Feed API error details: {:?}", e);
            }
            CoreError::Config(e) => {
                error!("Configuration error details: {:?}", e);
            }
            _ => {}
        }
        self
    }

    fn log_warn(&self) -> &Self {
        warn!("CoreError (warning): {}", self);
        self
    }

    fn user_friendly_message(&self) -> String {
        match self {
            CoreError::FeedApi(e) => e.user_friendly_message(),
            CoreError::Config(e) => e.user_friendly_message(),
            CoreError::Network(_) => {
                "Network connection error. Please check your internet connection.".to_string()
            }
            CoreError::Io(_) => "A file could not be read or written.".to_string(),
            CoreError::Serialization(_) => {
                "The feed response could not be decoded.".to_string()
            }
            CoreError::Internal { message } => format!("Internal error: {}", message),
        }
    }

    fn error_code(&self) -> String {
        match self {
            CoreError::FeedApi(_) => "FEED_API".to_string(),
            CoreError::Config(_) => "CONFIG".to_string(),
            CoreError::Io(_) => "IO".to_string(),
            CoreError::Serialization(_) => "SERIALIZATION".to_string(),
            CoreError::Network(_) => "NETWORK".to_string(),
            CoreError::Internal { .. } => "INTERNAL".to_string(),
        }
    }
}

impl FeedApiError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            FeedApiError::ServerError { status_code } => {
                format!("Reddit is having trouble right now (status {}).", status_code)
            }
            FeedApiError::RequestFailed { status_code } => {
                format!("The feed request was rejected (status {}).", status_code)
            }
            FeedApiError::RequestTimeout => {
                "The feed request took too long to complete.".to_string()
            }
            FeedApiError::InvalidResponse { .. } => {
                "Reddit returned a response that could not be understood.".to_string()
            }
            FeedApiError::EmptyFeed { subreddit } => format!(
                "No posts found for r/{}. Check the subreddit name, or it may be \
                 private or empty.",
                subreddit
            ),
        }
    }
}

impl ConfigError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ConfigError::FileNotFound { path } => {
                format!("Configuration file not found: {}", path)
            }
            ConfigError::InvalidRule { pattern, .. } => format!(
                "The title replacement pattern \"{}\" is not a valid regular expression.",
                pattern
            ),
            ConfigError::InvalidValue { field, value } => {
                format!("\"{}\" is not a valid value for {}.", value, field)
            }
            ConfigError::Parse(_) => {
                "The configuration file could not be parsed.".to_string()
            }
        }
    }
}
