use redview_core::{Config, CoreError, FeedApiError, RawPost};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error, info};

const FEED_BASE: &str = "https://www.reddit.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing<T> {
    pub kind: String,
    pub data: ListingData<T>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingData<T> {
    #[serde(default = "Vec::new")]
    pub children: Vec<ListingChild<T>>,
    pub after: Option<String>,
    pub before: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListingChild<T> {
    pub kind: String,
    pub data: T,
}

/// Client for the public Reddit JSON feed. One instance is reused across
/// fetch cycles; each cycle issues exactly one listing request.
#[derive(Debug)]
pub struct FeedClient {
    http_client: Client,
    user_agent: String,
}

impl FeedClient {
    pub fn new(user_agent: String) -> Result<Self, CoreError> {
        let http_client = Client::builder()
            .user_agent(&user_agent)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            http_client,
            user_agent,
        })
    }

    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Fetches one page of posts for the configured subreddit(s) and sort
    /// mode. An empty page is reported as an error: in practice it means a
    /// misspelled, private, or empty subreddit rather than a quiet feed.
    pub async fn fetch_posts(&self, config: &Config) -> Result<Vec<RawPost>, CoreError> {
        let subreddit = config.subreddit.joined();
        let url = format!("{}/r/{}/{}.json", FEED_BASE, subreddit, config.feed);
        let limit = config.count.to_string();
        // raw_json=1 stops Reddit from HTML-escaping URLs in the payload.
        let query = [("limit", limit.as_str()), ("raw_json", "1")];

        info!("Fetching feed page for r/{} ({})", subreddit, config.feed);
        let response = match self.http_client.get(&url).query(&query).send().await {
            Ok(response) => response,
            Err(e) => {
                error!("Network error fetching r/{}: {}", subreddit, e);
                if e.is_timeout() {
                    return Err(CoreError::FeedApi(FeedApiError::RequestTimeout));
                }
                return Err(CoreError::Network(e));
            }
        };

        let status = response.status();
        if !status.is_success() {
            error!("Feed request failed with status {} for r/{}", status, subreddit);
            if status.is_server_error() {
                return Err(CoreError::FeedApi(FeedApiError::ServerError {
                    status_code: status.as_u16(),
                }));
            }
            return Err(CoreError::FeedApi(FeedApiError::RequestFailed {
                status_code: status.as_u16(),
            }));
        }
        debug!("Feed request successful: {} for r/{}", status, subreddit);

        let body = response.text().await?;
        let posts = decode_listing(&body, &subreddit)?;
        info!("Retrieved {} posts from r/{}", posts.len(), subreddit);
        Ok(posts)
    }
}

/// Decodes a listing body into raw posts. Split out of the request path so
/// the tolerance rules can be exercised without a network.
pub fn decode_listing(body: &str, subreddit: &str) -> Result<Vec<RawPost>, CoreError> {
    let listing: Listing<RawPost> = serde_json::from_str(body).map_err(|e| {
        error!("Failed to parse feed page for r/{}: {}", subreddit, e);
        CoreError::FeedApi(FeedApiError::InvalidResponse {
            details: format!("failed to parse posts for r/{}", subreddit),
        })
    })?;

    if listing.data.children.is_empty() {
        return Err(CoreError::FeedApi(FeedApiError::EmptyFeed {
            subreddit: subreddit.to_string(),
        }));
    }

    Ok(listing
        .data
        .children
        .into_iter()
        .map(|child| child.data)
        .collect())
}
