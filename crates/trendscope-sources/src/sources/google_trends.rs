//! Google Trends daily trending-searches RSS source.
//!
//! Items carry their approximate traffic as text (`<ht:approx_traffic>20,000+`)
//! and a picture either as `<ht:picture>` text or a `<thumbnail url="...">`
//! element. Each item with a link is summarized; summaries run one at a time.

use futures::future::BoxFuture;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use reqwest::Client;

use super::TrendSource;
use crate::client::fetch_text;
use crate::error::SourceError;
use crate::summarize::{Summarizer, SUMMARY_NO_LINK};
use crate::types::{RawCount, RawPost};

pub(crate) const PLATFORM: &str = "Google Trends";
const CHANNEL: &str = "Google Search";
const UNTITLED: &str = "Untitled";

/// One `<item>` as read from the feed.
#[derive(Debug, Default, Clone, PartialEq)]
pub(crate) struct TrendItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub traffic: Option<String>,
    pub picture: Option<String>,
    pub pub_date: Option<String>,
}

pub struct GoogleTrendsSource {
    client: Client,
    url: String,
    geo: String,
    limit: usize,
    summarizer: Summarizer,
}

impl GoogleTrendsSource {
    #[must_use]
    pub fn new(
        client: Client,
        url: impl Into<String>,
        geo: impl Into<String>,
        limit: usize,
        summarizer: Summarizer,
    ) -> Self {
        Self {
            client,
            url: url.into(),
            geo: geo.into(),
            limit,
            summarizer,
        }
    }

    async fn fetch_trends(&self) -> Result<Vec<RawPost>, SourceError> {
        let xml = fetch_text(self.client.get(&self.url).query(&[("geo", &self.geo)])).await?;
        let items = parse_trends_feed(&xml, self.limit)?;
        tracing::debug!(geo = %self.geo, count = items.len(), "parsed Google Trends items");

        let mut posts = Vec::with_capacity(items.len());
        for item in items {
            let summary = match item.link.as_deref() {
                Some(link) => self.summarizer.summarize(link).await,
                None => SUMMARY_NO_LINK.to_string(),
            };
            posts.push(item_to_raw(item, summary));
        }
        Ok(posts)
    }
}

impl TrendSource for GoogleTrendsSource {
    fn name(&self) -> &str {
        "google_trends"
    }

    fn fetch(&self) -> BoxFuture<'_, Result<Vec<RawPost>, SourceError>> {
        Box::pin(self.fetch_trends())
    }
}

fn item_to_raw(item: TrendItem, summary: String) -> RawPost {
    RawPost {
        platform: Some(PLATFORM.to_string()),
        title: Some(item.title.unwrap_or_else(|| UNTITLED.to_string())),
        views: item.traffic.map(RawCount::Text),
        likes: None,
        url: item.link,
        thumbnail: item.picture,
        channel: Some(CHANNEL.to_string()),
        published_time: item.pub_date,
        summary: Some(summary),
    }
}

/// Parses up to `limit` `<item>`s from a Google Trends RSS body.
///
/// Namespaced elements are matched by local name, so `ht:approx_traffic`
/// and `approx_traffic` are treated alike.
///
/// # Errors
///
/// Returns [`SourceError::Xml`] if the XML is malformed.
pub(crate) fn parse_trends_feed(xml: &str, limit: usize) -> Result<Vec<TrendItem>, SourceError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    if limit == 0 {
        return Ok(items);
    }

    let mut current: Option<TrendItem> = None;
    let mut current_tag = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => {
                let name = local_name(&e);
                if name == "item" {
                    current = Some(TrendItem::default());
                } else if let Some(item) = current.as_mut() {
                    read_thumbnail_attr(&e, &name, item);
                }
                current_tag = name;
            }
            Ok(Event::Empty(e)) => {
                if let Some(item) = current.as_mut() {
                    read_thumbnail_attr(&e, &local_name(&e), item);
                }
            }
            Ok(Event::Text(e)) => {
                if let Some(item) = current.as_mut() {
                    let text = e.unescape().unwrap_or_default().into_owned();
                    assign_field(item, &current_tag, text);
                }
            }
            Ok(Event::CData(e)) => {
                if let Some(item) = current.as_mut() {
                    let text = String::from_utf8_lossy(e.as_ref()).into_owned();
                    assign_field(item, &current_tag, text);
                }
            }
            Ok(Event::End(e)) => {
                let raw = e.local_name();
                let name = std::str::from_utf8(raw.as_ref()).unwrap_or("");
                if name == "item" {
                    if let Some(item) = current.take() {
                        items.push(item);
                        if items.len() >= limit {
                            break;
                        }
                    }
                }
                current_tag.clear();
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(SourceError::Xml(e)),
            _ => {}
        }
    }

    Ok(items)
}

fn local_name(e: &BytesStart<'_>) -> String {
    let raw = e.local_name();
    std::str::from_utf8(raw.as_ref()).unwrap_or("").to_string()
}

fn read_thumbnail_attr(e: &BytesStart<'_>, name: &str, item: &mut TrendItem) {
    if name != "thumbnail" || item.picture.is_some() {
        return;
    }
    for attr in e.attributes().flatten() {
        if attr.key.as_ref() == b"url" {
            let url = String::from_utf8_lossy(attr.value.as_ref()).trim().to_string();
            if !url.is_empty() {
                item.picture = Some(url);
            }
        }
    }
}

fn assign_field(item: &mut TrendItem, tag: &str, text: String) {
    let text = text.trim().to_string();
    if text.is_empty() {
        return;
    }
    match tag {
        "title" => item.title = Some(text),
        "link" => item.link = Some(text),
        "approx_traffic" => item.traffic = Some(text),
        "picture" => item.picture = Some(text),
        "pubDate" => item.pub_date = Some(text),
        _ => {}
    }
}
