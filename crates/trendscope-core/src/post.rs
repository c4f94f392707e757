//! Canonical record types shared by the sources, the analyzer and the CLI.

use serde::{Deserialize, Serialize};

/// Sentinel URL for posts that have no link.
pub const NO_URL: &str = "#";

/// Placeholder for text fields a source could not provide.
pub const PLACEHOLDER: &str = "N/A";

/// A trending post normalized from any source.
///
/// Posts are built once by the normalizer and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    /// Source tag, e.g. `YouTube` or `Google Trends`.
    pub platform: String,
    /// Never empty; `N/A` when the source had no title.
    pub title: String,
    pub views: u64,
    /// `0` both for "no likes" and for "source does not report likes".
    pub likes: u64,
    /// `#` when the source had no link.
    pub url: String,
    pub thumbnail: String,
    pub channel: String,
    pub published_time: String,
    /// Only filled when the summarizer ran for this post.
    pub summary: String,
}

/// A post paired with the polarity of its title.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentInfo {
    pub post: Post,
    /// Polarity in `[-1.0, 1.0]`.
    pub sentiment: f32,
}

/// Aggregates computed over a non-empty set of posts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub most_viewed: Post,
    /// Meaningful only when `likes > 0`; see [`Post::likes`].
    pub most_liked: Post,
    pub most_loved: SentimentInfo,
    pub most_hated: SentimentInfo,
    /// At most five `(word, count)` pairs, most frequent first.
    pub top_keywords: Vec<(String, usize)>,
}

impl Post {
    /// Whether the post links anywhere.
    #[must_use]
    pub fn has_url(&self) -> bool {
        !self.url.is_empty() && self.url != NO_URL
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn post(url: &str) -> Post {
        Post {
            platform: "YouTube".to_string(),
            title: "t".to_string(),
            views: 1,
            likes: 0,
            url: url.to_string(),
            thumbnail: String::new(),
            channel: PLACEHOLDER.to_string(),
            published_time: PLACEHOLDER.to_string(),
            summary: String::new(),
        }
    }

    #[test]
    fn has_url_false_for_sentinel() {
        assert!(!post(NO_URL).has_url());
        assert!(!post("").has_url());
    }

    #[test]
    fn has_url_true_for_real_link() {
        assert!(post("https://youtube.com/watch?v=abc").has_url());
    }

    #[test]
    fn analysis_result_serializes_keywords_as_pairs() {
        let p = post("#");
        let result = AnalysisResult {
            most_viewed: p.clone(),
            most_liked: p.clone(),
            most_loved: SentimentInfo {
                post: p.clone(),
                sentiment: 0.5,
            },
            most_hated: SentimentInfo {
                post: p,
                sentiment: -0.5,
            },
            top_keywords: vec![("قطة".to_string(), 2)],
        };
        let json = serde_json::to_value(&result).expect("serialize");
        assert_eq!(json["top_keywords"][0][0], "قطة");
        assert_eq!(json["top_keywords"][0][1], 2);
        assert_eq!(json["most_loved"]["sentiment"], 0.5);
    }
}
