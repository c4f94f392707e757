//! `YouTube` trending page scraper.
//!
//! The trending page embeds its data as a `ytInitialData = {...};` script
//! assignment. Two layouts have been observed:
//!
//! - newer: `tabs[0].tabRenderer.content.richGridRenderer.contents`
//! - older: `tabs[0].tabRenderer.content.sectionListRenderer.contents[0]
//!   .itemSectionRenderer.contents`
//!
//! Items are either `richItemRenderer.content.videoRenderer` or a bare
//! `videoRenderer`. Like counts are not exposed on the trending page.

use futures::future::BoxFuture;
use reqwest::header::ACCEPT_LANGUAGE;
use reqwest::Client;
use serde_json::Value;

use super::TrendSource;
use crate::client::fetch_text;
use crate::error::SourceError;
use crate::types::{RawCount, RawPost};

pub(crate) const PLATFORM: &str = "YouTube";
const ACCEPT_LANGUAGE_VALUE: &str = "en-US,en;q=0.9,ar;q=0.8";
const INITIAL_DATA_MARKER: &str = "ytInitialData";
const YOUTUBE_ORIGIN: &str = "https://youtube.com";

const TAB_CONTENT_PATH: &str = "/contents/twoColumnBrowseResultsRenderer/tabs/0/tabRenderer/content";
const RICH_GRID_PATH: &str = "/richGridRenderer/contents";
const SECTION_LIST_PATH: &str = "/sectionListRenderer/contents/0/itemSectionRenderer/contents";

pub struct YouTubeTrendingSource {
    client: Client,
    url: String,
}

impl YouTubeTrendingSource {
    #[must_use]
    pub fn new(client: Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    async fn fetch_trending(&self) -> Result<Vec<RawPost>, SourceError> {
        let html = fetch_text(
            self.client
                .get(&self.url)
                .header(ACCEPT_LANGUAGE, ACCEPT_LANGUAGE_VALUE),
        )
        .await?;
        parse_trending_page(&html)
    }
}

impl TrendSource for YouTubeTrendingSource {
    fn name(&self) -> &str {
        "youtube_trending"
    }

    fn fetch(&self) -> BoxFuture<'_, Result<Vec<RawPost>, SourceError>> {
        Box::pin(self.fetch_trending())
    }
}

/// Parses a trending page into raw posts.
///
/// A page without `ytInitialData` yields an empty list.
///
/// # Errors
///
/// Returns [`SourceError::Json`] if the embedded data is not valid JSON and
/// [`SourceError::UnexpectedShape`] if neither known layout is present.
pub(crate) fn parse_trending_page(html: &str) -> Result<Vec<RawPost>, SourceError> {
    let Some(data) = extract_initial_data(html) else {
        tracing::debug!("no ytInitialData on trending page");
        return Ok(Vec::new());
    };
    let data = data.map_err(|source| SourceError::Json {
        context: "ytInitialData".to_string(),
        source,
    })?;

    let items = video_items(&data).ok_or_else(|| {
        SourceError::UnexpectedShape("no known video list layout in ytInitialData".to_string())
    })?;

    Ok(items.iter().filter_map(video_to_raw).collect())
}

/// Reads the first JSON object after the `ytInitialData` marker.
///
/// The stream deserializer stops at the end of the object, so the trailing
/// `;</script>` needs no special handling.
fn extract_initial_data(html: &str) -> Option<Result<Value, serde_json::Error>> {
    let marker = html.find(INITIAL_DATA_MARKER)?;
    let rest = &html[marker..];
    let brace = rest.find('{')?;
    serde_json::Deserializer::from_str(&rest[brace..])
        .into_iter::<Value>()
        .next()
}

fn video_items(data: &Value) -> Option<&Vec<Value>> {
    let content = data.pointer(TAB_CONTENT_PATH)?;
    if let Some(items) = content.pointer(RICH_GRID_PATH).and_then(Value::as_array) {
        return Some(items);
    }
    tracing::debug!("rich grid layout missing; trying section list layout");
    content.pointer(SECTION_LIST_PATH).and_then(Value::as_array)
}

fn video_to_raw(item: &Value) -> Option<RawPost> {
    let renderer = item
        .pointer("/richItemRenderer/content/videoRenderer")
        .or_else(|| item.get("videoRenderer"))?;

    let video_id = text_at(renderer, "/videoId")?;

    let url = text_at(renderer, "/navigationEndpoint/commandMetadata/webCommandMetadata/url")
        .map_or_else(
            || format!("{YOUTUBE_ORIGIN}/watch?v={video_id}"),
            |path| format!("{YOUTUBE_ORIGIN}{path}"),
        );

    let thumbnail = renderer
        .pointer("/thumbnail/thumbnails")
        .and_then(Value::as_array)
        .and_then(|thumbs| thumbs.last())
        .and_then(|thumb| thumb.get("url"))
        .and_then(Value::as_str)
        .map(str::to_string);

    Some(RawPost {
        platform: Some(PLATFORM.to_string()),
        title: text_at(renderer, "/title/runs/0/text")
            .or_else(|| text_at(renderer, "/title/simpleText")),
        views: text_at(renderer, "/viewCountText/simpleText").map(RawCount::Text),
        likes: None,
        url: Some(url),
        thumbnail,
        channel: text_at(renderer, "/longBylineText/runs/0/text"),
        published_time: text_at(renderer, "/publishedTimeText/simpleText"),
        summary: None,
    })
}

/// Non-empty string at a JSON pointer.
fn text_at(value: &Value, pointer: &str) -> Option<String> {
    value
        .pointer(pointer)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
