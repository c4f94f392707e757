//! Normalization from [`RawPost`] payloads to [`trendscope_core::Post`].
//!
//! Count parsing is delegated to [`crate::parse`]; this module only decides
//! which default each missing field receives.

use trendscope_core::{Post, NO_URL, PLACEHOLDER};

use crate::parse::parse_count;
use crate::types::{RawCount, RawPost};

/// Platform tag used when a payload does not name its source.
pub const UNKNOWN_PLATFORM: &str = "Unknown";

/// Normalizes a raw payload into a canonical [`Post`].
///
/// Never fails: a missing or blank title becomes `N/A`, counts fall back to
/// `0`, and every other text field gets its documented default.
#[must_use]
pub fn normalize(raw: RawPost) -> Post {
    let post = Post {
        platform: text_or(raw.platform, UNKNOWN_PLATFORM),
        title: text_or(raw.title, PLACEHOLDER),
        views: count(raw.views.as_ref()),
        likes: count(raw.likes.as_ref()),
        url: text_or(raw.url, NO_URL),
        thumbnail: text_or(raw.thumbnail, ""),
        channel: text_or(raw.channel, PLACEHOLDER),
        published_time: text_or(raw.published_time, PLACEHOLDER),
        summary: text_or(raw.summary, ""),
    };
    debug_assert!(!post.title.is_empty(), "normalized title must not be empty");
    post
}

/// Trims `value`, treating absent and blank text alike.
fn text_or(value: Option<String>, default: &str) -> String {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Converts a raw count to a non-negative integer; anything unusable is `0`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count(value: Option<&RawCount>) -> u64 {
    match value {
        Some(RawCount::Integer(n)) => u64::try_from(*n).unwrap_or(0),
        Some(RawCount::Float(f)) if f.is_finite() && *f > 0.0 => *f as u64,
        Some(RawCount::Text(text)) => parse_count(text),
        Some(RawCount::Float(_) | RawCount::Unsupported(_)) | None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_defaults_for_title_and_text_views() {
        let raw = RawPost {
            title: Some("X".to_string()),
            views: Some(RawCount::from("1k")),
            ..RawPost::default()
        };
        let post = normalize(raw);
        assert_eq!(post.title, "X");
        assert_eq!(post.views, 1000);
        assert_eq!(post.likes, 0);
        assert_eq!(post.thumbnail, "");
        assert_eq!(post.channel, "N/A");
        assert_eq!(post.published_time, "N/A");
        assert_eq!(post.url, "#");
        assert_eq!(post.summary, "");
        assert_eq!(post.platform, UNKNOWN_PLATFORM);
    }

    #[test]
    fn missing_title_becomes_placeholder() {
        let post = normalize(RawPost::default());
        assert_eq!(post.title, PLACEHOLDER);
    }

    #[test]
    fn blank_title_becomes_placeholder() {
        let raw = RawPost {
            title: Some("   ".to_string()),
            ..RawPost::default()
        };
        assert_eq!(normalize(raw).title, PLACEHOLDER);
    }

    #[test]
    fn text_fields_are_trimmed() {
        let mut raw = RawPost::new("YouTube", "  عنوان  ");
        raw.channel = Some(" قناة ".to_string());
        let post = normalize(raw);
        assert_eq!(post.title, "عنوان");
        assert_eq!(post.channel, "قناة");
        assert_eq!(post.platform, "YouTube");
    }

    #[test]
    fn integer_counts_pass_through() {
        let mut raw = RawPost::new("TikTok", "t");
        raw.views = Some(RawCount::from(8_000_000));
        raw.likes = Some(RawCount::from(950_000));
        let post = normalize(raw);
        assert_eq!(post.views, 8_000_000);
        assert_eq!(post.likes, 950_000);
    }

    #[test]
    fn negative_counts_clamp_to_zero() {
        let mut raw = RawPost::new("Twitter", "t");
        raw.views = Some(RawCount::Integer(-5));
        raw.likes = Some(RawCount::Float(-2.5));
        let post = normalize(raw);
        assert_eq!(post.views, 0);
        assert_eq!(post.likes, 0);
    }

    #[test]
    fn float_counts_truncate() {
        let mut raw = RawPost::new("Twitter", "t");
        raw.views = Some(RawCount::Float(12.9));
        assert_eq!(normalize(raw).views, 12);
    }

    #[test]
    fn non_numeric_counts_are_zero() {
        let mut raw = RawPost::new("Twitter", "t");
        raw.views = Some(RawCount::from("lots"));
        raw.likes = Some(RawCount::Unsupported(serde_json::json!({"n": 1})));
        let post = normalize(raw);
        assert_eq!(post.views, 0);
        assert_eq!(post.likes, 0);
    }

    #[test]
    fn deserializes_partial_json_payload() {
        let raw: RawPost = serde_json::from_value(serde_json::json!({
            "title": "X",
            "views": "1k",
            "likes": true
        }))
        .expect("payload should deserialize");
        let post = normalize(raw);
        assert_eq!(post.views, 1000);
        assert_eq!(post.likes, 0);
        assert_eq!(post.channel, "N/A");
    }

    #[test]
    fn deserializes_numeric_json_counts() {
        let raw: RawPost = serde_json::from_value(serde_json::json!({
            "title": "X",
            "views": 1200000,
            "likes": 2.5e3
        }))
        .expect("payload should deserialize");
        let post = normalize(raw);
        assert_eq!(post.views, 1_200_000);
        assert_eq!(post.likes, 2_500);
    }
}
