//! Best-effort article summaries via the Gemini `generateContent` API.
//!
//! The summarizer never fails: a missing key, a missing link or any error
//! along the way yields one of the fixed placeholder strings below.

use std::sync::LazyLock;

use regex::Regex;
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use trendscope_core::{AppConfig, NO_URL};

use crate::client::fetch_text;
use crate::error::SourceError;

pub const SUMMARY_DISABLED: &str = "summarization disabled";
pub const SUMMARY_NO_LINK: &str = "no valid link to summarize";
pub const SUMMARY_NO_CONTENT: &str = "no content found at link";
pub const SUMMARY_FAILED: &str = "failed to summarize content";

const GEMINI_KEY_HEADER: &str = "x-goog-api-key";

static PARAGRAPH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<p\b[^>]*>(.*?)</p>").expect("valid paragraph regex"));
static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("valid tag regex"));

/// Summarizer settings, threaded in explicitly rather than read from globals.
#[derive(Clone)]
pub struct SummarizerConfig {
    /// `None` disables summarization.
    pub api_key: Option<String>,
    pub model: String,
    pub base_url: String,
    /// Article text is cut to this many characters before prompting.
    pub max_chars: usize,
}

impl SummarizerConfig {
    #[must_use]
    pub fn from_app_config(config: &AppConfig) -> Self {
        Self {
            api_key: config.gemini_api_key.clone(),
            model: config.gemini_model.clone(),
            base_url: config.gemini_base_url.clone(),
            max_chars: config.summary_max_chars,
        }
    }

    #[must_use]
    pub fn disabled() -> Self {
        Self {
            api_key: None,
            model: "gemini-pro".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            max_chars: 3000,
        }
    }
}

impl std::fmt::Debug for SummarizerConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SummarizerConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[redacted]"))
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .field("max_chars", &self.max_chars)
            .finish()
    }
}

#[derive(Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<Content>,
}

#[derive(Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Deserialize)]
struct Part {
    text: Option<String>,
}

#[derive(Debug)]
pub struct Summarizer {
    client: Client,
    config: SummarizerConfig,
}

impl Summarizer {
    #[must_use]
    pub fn new(client: Client, config: SummarizerConfig) -> Self {
        Self { client, config }
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.config.api_key.is_some()
    }

    /// Summarizes the article at `url` in one sentence.
    ///
    /// Returns a placeholder instead of an error when the link is missing,
    /// summarization is disabled, the page has no paragraphs, or any request
    /// fails. A missing link is reported first, with or without an API key.
    pub async fn summarize(&self, url: &str) -> String {
        if url.trim().is_empty() || url == NO_URL {
            return SUMMARY_NO_LINK.to_string();
        }
        let Some(api_key) = self.config.api_key.as_deref() else {
            return SUMMARY_DISABLED.to_string();
        };

        match self.try_summarize(api_key, url).await {
            Ok(Some(summary)) => summary,
            Ok(None) => SUMMARY_NO_CONTENT.to_string(),
            Err(e) => {
                tracing::warn!(url, error = %e, "summarization failed");
                SUMMARY_FAILED.to_string()
            }
        }
    }

    async fn try_summarize(&self, api_key: &str, url: &str) -> Result<Option<String>, SourceError> {
        let html = fetch_text(self.client.get(url)).await?;
        let article = extract_paragraph_text(&html);
        if article.is_empty() {
            return Ok(None);
        }

        let excerpt: String = article.chars().take(self.config.max_chars).collect();
        let prompt = format!(
            "Summarize the following article in one short sentence in Arabic:\n\n{excerpt}"
        );

        let endpoint = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.base_url.trim_end_matches('/'),
            self.config.model
        );
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        tracing::debug!(url, model = %self.config.model, "requesting summary");
        let raw = fetch_text(
            self.client
                .post(&endpoint)
                .header(GEMINI_KEY_HEADER, api_key)
                .json(&body),
        )
        .await?;

        let response: GenerateContentResponse =
            serde_json::from_str(&raw).map_err(|source| SourceError::Json {
                context: "Gemini generateContent response".to_string(),
                source,
            })?;

        let text = response
            .candidates
            .into_iter()
            .filter_map(|c| c.content)
            .flat_map(|c| c.parts)
            .find_map(|p| p.text.filter(|t| !t.trim().is_empty()))
            .ok_or_else(|| SourceError::UnexpectedShape("Gemini returned no text".to_string()))?;

        Ok(Some(text.trim().to_string()))
    }
}

/// Joins the text of every `<p>` element, tags stripped, whitespace collapsed.
pub(crate) fn extract_paragraph_text(html: &str) -> String {
    PARAGRAPH_RE
        .captures_iter(html)
        .filter_map(|cap| cap.get(1))
        .map(|m| decode_entities(&TAG_RE.replace_all(m.as_str(), " ")))
        .flat_map(|text| {
            text.split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn decode_entities(text: &str) -> String {
    text.replace("&nbsp;", " ")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&amp;", "&")
}
