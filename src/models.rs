//! Feed Models
//!
//! Data structures matching the rss2json conversion API payload.

use serde::Deserialize;

/// One feed entry as returned by the conversion service.
/// Every field may be absent; defaults are applied at view-model time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct FeedItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub content: Option<String>,
}

/// Top-level conversion API response
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FeedResponse {
    pub status: String,
    pub message: Option<String>,
    #[serde(default)]
    pub items: Vec<FeedItem>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_full_response() {
        let json = r#"{
            "status": "ok",
            "feed": {"title": "Some Blog"},
            "items": [
                {"title": "A", "link": "http://x", "description": "<p>hello</p>", "thumbnail": "", "content": ""}
            ]
        }"#;

        let response: FeedResponse = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(response.status, "ok");
        assert_eq!(response.message, None);
        assert_eq!(response.items.len(), 1);
        assert_eq!(response.items[0].title.as_deref(), Some("A"));
        assert_eq!(response.items[0].link.as_deref(), Some("http://x"));
    }

    #[test]
    fn test_deserialize_missing_items() {
        let json = r#"{"status": "error", "message": "Feed not found"}"#;

        let response: FeedResponse = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(response.status, "error");
        assert_eq!(response.message.as_deref(), Some("Feed not found"));
        assert!(response.items.is_empty());
    }

    #[test]
    fn test_deserialize_sparse_item() {
        let json = r#"{"status": "ok", "items": [{}]}"#;

        let response: FeedResponse = serde_json::from_str(json).expect("should deserialize");
        assert_eq!(response.items[0], FeedItem::default());
    }
}
