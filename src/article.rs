//! Article View Models
//!
//! Pure transformation from feed items to renderable cards:
//! tag stripping, summary truncation and image resolution.
//! Kept free of DOM types so it runs under plain `cargo test`.

use std::sync::OnceLock;

use regex::Regex;

use crate::models::FeedItem;

/// Cards rendered per fetch cycle
pub const MAX_ARTICLES: usize = 3;

/// Summary length in characters, before the appended ellipsis
pub const SUMMARY_LEN: usize = 200;

/// Local fallback image when no item image can be resolved
pub const PLACEHOLDER_IMAGE: &str = "images/placeholder.png";

static TAG_RE: OnceLock<Regex> = OnceLock::new();
static IMG_SRC_RE: OnceLock<Regex> = OnceLock::new();

fn tag_re() -> &'static Regex {
    TAG_RE.get_or_init(|| Regex::new(r"<[^>]*>").expect("tag pattern is valid"))
}

fn img_src_re() -> &'static Regex {
    IMG_SRC_RE.get_or_init(|| Regex::new(r#"<img[^>]+src="([^">]+)""#).expect("img pattern is valid"))
}

/// Renderable card derived from one feed item
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleView {
    pub title: String,
    pub link: String,
    pub summary: String,
    pub image_url: String,
}

impl ArticleView {
    pub fn from_item(item: &FeedItem) -> Self {
        let title = item.title.clone().unwrap_or_else(|| "No Title".to_string());
        let link = item.link.clone().unwrap_or_else(|| "#".to_string());
        let description = item.description.as_deref().unwrap_or("No description available");

        Self {
            title,
            link,
            summary: summarize(description),
            image_url: resolve_image(item),
        }
    }
}

/// Map the first `MAX_ARTICLES` items to cards, in feed order
pub fn select_articles(items: &[FeedItem]) -> Vec<ArticleView> {
    items.iter().take(MAX_ARTICLES).map(ArticleView::from_item).collect()
}

/// Remove markup tags, leaving plain text
pub fn strip_tags(html: &str) -> String {
    tag_re().replace_all(html, "").into_owned()
}

/// Strip tags and truncate to `SUMMARY_LEN` characters, then append an
/// ellipsis. Truncation is char-based so multibyte text never splits.
pub fn summarize(description: &str) -> String {
    let text = strip_tags(description);
    let mut summary: String = text.chars().take(SUMMARY_LEN).collect();
    summary.push_str("...");
    summary
}

/// Image URL precedence: thumbnail, then the first `<img>` source found in
/// the item content, then the placeholder asset. An empty thumbnail string
/// counts as absent.
pub fn resolve_image(item: &FeedItem) -> String {
    if let Some(thumbnail) = item.thumbnail.as_deref() {
        if !thumbnail.is_empty() {
            return thumbnail.to_string();
        }
    }

    if let Some(content) = item.content.as_deref() {
        if let Some(caps) = img_src_re().captures(content) {
            return caps[1].to_string();
        }
    }

    PLACEHOLDER_IMAGE.to_string()
}
