//! Source abstractions and the collector that fans in their results.

mod google_trends;
mod sample;
mod youtube;

pub use google_trends::GoogleTrendsSource;
pub use sample::SampleSource;
pub use youtube::YouTubeTrendingSource;

use futures::future::{join_all, BoxFuture};
use trendscope_core::Post;

use crate::error::SourceError;
use crate::normalize::normalize;
use crate::types::RawPost;

/// A boundary collaborator that retrieves raw trend payloads.
pub trait TrendSource: Send + Sync {
    /// Stable name used in logs, e.g. `youtube_trending`.
    fn name(&self) -> &str;

    /// Fetches this source's current payloads.
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<RawPost>, SourceError>>;
}

/// Collect posts from every source.
///
/// Sources are fetched concurrently but results are concatenated in the
/// declared order, each source's own order preserved. A failed source is
/// logged and contributes nothing. No cross-source deduplication is done.
pub async fn collect(sources: &[Box<dyn TrendSource>]) -> Vec<Post> {
    let results = join_all(sources.iter().map(|source| source.fetch())).await;

    let mut posts = Vec::new();
    for (source, result) in sources.iter().zip(results) {
        match result {
            Ok(raw_posts) => {
                tracing::debug!(
                    source = source.name(),
                    count = raw_posts.len(),
                    "collected source payloads"
                );
                posts.extend(raw_posts.into_iter().map(normalize));
            }
            Err(e) => {
                tracing::warn!(
                    source = source.name(),
                    error = %e,
                    "source fetch failed; skipping"
                );
            }
        }
    }

    tracing::info!(
        sources = sources.len(),
        count = posts.len(),
        "collected posts from all sources"
    );
    posts
}

#[cfg(test)]
mod tests {
    use futures::FutureExt;

    use super::*;

    struct FixedSource {
        name: &'static str,
        titles: Vec<&'static str>,
        fail: bool,
    }

    impl TrendSource for FixedSource {
        fn name(&self) -> &str {
            self.name
        }

        fn fetch(&self) -> BoxFuture<'_, Result<Vec<RawPost>, SourceError>> {
            let result = if self.fail {
                Err(SourceError::UnexpectedShape("boom".to_string()))
            } else {
                Ok(self
                    .titles
                    .iter()
                    .map(|t| RawPost::new(self.name, *t))
                    .collect())
            };
            futures::future::ready(result).boxed()
        }
    }

    fn fixed(name: &'static str, titles: Vec<&'static str>) -> Box<dyn TrendSource> {
        Box::new(FixedSource {
            name,
            titles,
            fail: false,
        })
    }

    fn failing(name: &'static str) -> Box<dyn TrendSource> {
        Box::new(FixedSource {
            name,
            titles: vec![],
            fail: true,
        })
    }

    #[tokio::test]
    async fn concatenates_in_declared_order() {
        let sources = vec![fixed("a", vec!["a1", "a2"]), fixed("b", vec!["b1"])];
        let posts = collect(&sources).await;
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["a1", "a2", "b1"]);
        assert_eq!(posts[2].platform, "b");
    }

    #[tokio::test]
    async fn failed_source_contributes_nothing() {
        let sources = vec![fixed("a", vec!["a1"]), failing("broken"), fixed("c", vec!["c1"])];
        let posts = collect(&sources).await;
        let titles: Vec<&str> = posts.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["a1", "c1"]);
    }

    #[tokio::test]
    async fn all_sources_failing_yields_empty() {
        let sources = vec![failing("x"), failing("y")];
        assert!(collect(&sources).await.is_empty());
    }

    #[tokio::test]
    async fn duplicates_across_sources_are_kept() {
        let sources = vec![fixed("a", vec!["same"]), fixed("b", vec!["same"])];
        assert_eq!(collect(&sources).await.len(), 2);
    }

    #[tokio::test]
    async fn no_sources_yields_empty() {
        let sources: Vec<Box<dyn TrendSource>> = Vec::new();
        assert!(collect(&sources).await.is_empty());
    }
}
