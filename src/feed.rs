//! Feed Client
//!
//! Fetches the source RSS feed through the rss2json conversion API and
//! validates the response. All failure modes collapse into `FeedError`;
//! the component boundary turns that into an error card, nothing panics.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};
use thiserror::Error;

use crate::models::{FeedItem, FeedResponse};

/// Source feed (fixed, no runtime configuration)
pub const FEED_URL: &str = "https://popygcom.wordpress.com/feed/";

/// RSS-to-JSON conversion endpoint
pub const CONVERT_ENDPOINT: &str = "https://api.rss2json.com/v1/api.json";

/// Refresh every 30 minutes
pub const REFRESH_INTERVAL_MS: u32 = 30 * 60 * 1000;

/// Everything that can go wrong in one fetch cycle
#[derive(Debug, Error)]
pub enum FeedError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("HTTP error: status {0}")]
    Http(u16),
    #[error("feed service error: {0}")]
    Service(String),
    #[error("malformed feed payload: {0}")]
    Decode(String),
    #[error("Unable to load articles. Please try again later.")]
    Empty,
}

/// Conversion API URL with the feed address as an escaped query parameter
pub fn endpoint_url(feed_url: &str) -> String {
    format!(
        "{}?rss_url={}",
        CONVERT_ENDPOINT,
        utf8_percent_encode(feed_url, NON_ALPHANUMERIC)
    )
}

/// Fetch the feed and return its items, newest first as the service sends
/// them. Zero items is reported as an error so the caller renders exactly
/// one card for it.
pub async fn fetch_feed() -> Result<Vec<FeedItem>, FeedError> {
    let url = endpoint_url(FEED_URL);

    let response = reqwest::get(&url)
        .await
        .map_err(|e| FeedError::Network(e.to_string()))?;

    if !response.status().is_success() {
        return Err(FeedError::Http(response.status().as_u16()));
    }

    let payload: FeedResponse = response
        .json()
        .await
        .map_err(|e| FeedError::Decode(e.to_string()))?;

    if payload.status != "ok" {
        let reason = payload.message.unwrap_or(payload.status);
        return Err(FeedError::Service(reason));
    }

    if payload.items.is_empty() {
        return Err(FeedError::Empty);
    }

    Ok(payload.items)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_url_escapes_feed_address() {
        let url = endpoint_url(FEED_URL);

        assert!(url.starts_with("https://api.rss2json.com/v1/api.json?rss_url="));
        // The feed address must arrive fully escaped
        assert!(url.contains("https%3A%2F%2Fpopygcom%2Ewordpress%2Ecom%2Ffeed%2F"));
        assert!(!url[CONVERT_ENDPOINT.len() + "?rss_url=".len()..].contains('/'));
    }

    #[test]
    fn test_error_messages_are_human_readable() {
        assert_eq!(
            FeedError::Http(503).to_string(),
            "HTTP error: status 503"
        );
        assert_eq!(
            FeedError::Service("Feed not found".to_string()).to_string(),
            "feed service error: Feed not found"
        );
        assert_eq!(
            FeedError::Empty.to_string(),
            "Unable to load articles. Please try again later."
        );
    }
}
