#[derive(Clone)]
pub struct AppConfig {
    pub log_level: String,
    pub request_timeout_secs: u64,
    pub user_agent: String,
    pub youtube_trending_url: String,
    pub google_trends_url: String,
    pub google_trends_geo: String,
    pub google_trends_limit: usize,
    pub include_sample_feed: bool,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub summary_max_chars: usize,
}

impl AppConfig {
    /// Whether article summaries can be requested.
    #[must_use]
    pub fn summarizer_enabled(&self) -> bool {
        self.gemini_api_key.is_some()
    }
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("youtube_trending_url", &self.youtube_trending_url)
            .field("google_trends_url", &self.google_trends_url)
            .field("google_trends_geo", &self.google_trends_geo)
            .field("google_trends_limit", &self.google_trends_limit)
            .field("include_sample_feed", &self.include_sample_feed)
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("gemini_model", &self.gemini_model)
            .field("gemini_base_url", &self.gemini_base_url)
            .field("summary_max_chars", &self.summary_max_chars)
            .finish()
    }
}
