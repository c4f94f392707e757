//! Raw payload types produced by the sources before normalization.
//!
//! Every field is optional: scraped pages and feeds routinely omit thumbnails,
//! channels, like counts and even titles. Defaults are applied in exactly one
//! place, [`crate::normalize::normalize`].
//!
//! ### Counts
//! Sources disagree on how counts look. The sample feed has plain integers,
//! the YouTube trending page has localized text (`"1.2 مليون مشاهدة"`),
//! Google Trends has `"20,000+"`. [`RawCount`] keeps whichever form arrived.

use serde::Deserialize;

/// A view or like count as the source reported it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RawCount {
    Integer(i64),
    Float(f64),
    Text(String),
    /// Booleans, objects and anything else a source should not have sent.
    Unsupported(serde_json::Value),
}

impl From<i64> for RawCount {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<&str> for RawCount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for RawCount {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One post as a source delivered it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawPost {
    #[serde(default)]
    pub platform: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub views: Option<RawCount>,
    #[serde(default)]
    pub likes: Option<RawCount>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub published_time: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
}

impl RawPost {
    /// Starts a payload for `platform` with the given title.
    #[must_use]
    pub fn new(platform: &str, title: impl Into<String>) -> Self {
        Self {
            platform: Some(platform.to_string()),
            title: Some(title.into()),
            ..Self::default()
        }
    }
}
