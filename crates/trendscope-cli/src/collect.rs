//! Source selection and collection for the CLI.
//!
//! Sources are declared in a fixed order (YouTube, Google Trends, sample
//! feed); the collector keeps that order in its output.

use trendscope_core::{AppConfig, Post};
use trendscope_sources::{
    build_http_client, collect, GoogleTrendsSource, SampleSource, Summarizer, SummarizerConfig,
    TrendSource, YouTubeTrendingSource,
};

use crate::SourceArgs;

/// Build the sources selected by `args` and the configuration.
///
/// The sample feed is included when either `--sample` is passed or
/// `TRENDSCOPE_INCLUDE_SAMPLE_FEED` is set.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed.
pub(crate) fn build_sources(
    config: &AppConfig,
    args: SourceArgs,
) -> anyhow::Result<Vec<Box<dyn TrendSource>>> {
    let client = build_http_client(config.request_timeout_secs, &config.user_agent)
        .map_err(|e| anyhow::anyhow!("failed to build HTTP client: {e}"))?;

    let mut sources: Vec<Box<dyn TrendSource>> = Vec::new();

    if !args.no_youtube {
        sources.push(Box::new(YouTubeTrendingSource::new(
            client.clone(),
            config.youtube_trending_url.clone(),
        )));
    }

    if !args.no_google_trends {
        if !config.summarizer_enabled() {
            tracing::warn!("GEMINI_API_KEY is not set; article summaries are disabled");
        }
        let summarizer =
            Summarizer::new(client.clone(), SummarizerConfig::from_app_config(config));
        sources.push(Box::new(GoogleTrendsSource::new(
            client,
            config.google_trends_url.clone(),
            config.google_trends_geo.clone(),
            config.google_trends_limit,
            summarizer,
        )));
    }

    if args.sample || config.include_sample_feed {
        sources.push(Box::new(SampleSource::new()));
    }

    Ok(sources)
}

/// Fetch every selected source and return the normalized posts.
///
/// # Errors
///
/// Returns an error only if the sources cannot be built. Individual source
/// failures are logged and skipped by [`collect`].
pub(crate) async fn collect_posts(
    config: &AppConfig,
    args: SourceArgs,
) -> anyhow::Result<Vec<Post>> {
    let sources = build_sources(config, args)?;
    if sources.is_empty() {
        tracing::warn!("every source is disabled; nothing to collect");
        return Ok(Vec::new());
    }

    let names: Vec<&str> = sources.iter().map(|s| s.name()).collect();
    tracing::info!(sources = ?names, "fetching trends");

    Ok(collect(&sources).await)
}
