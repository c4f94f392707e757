//! Trend analysis over a collected set of posts.

use std::cmp::Ordering;

use trendscope_core::{AnalysisResult, Post, SentimentInfo};

use crate::keywords::{top_keywords, TOP_KEYWORDS};
use crate::scorer::SentimentScorer;

/// Analyze a set of posts.
///
/// 1. Score every title with `scorer`.
/// 2. Select the most viewed, most liked, most positive and most negative
///    post. Ties go to the post that appears first in `posts`.
/// 3. Count the top title keywords.
///
/// Returns `None` for an empty slice. The result is deterministic for a
/// deterministic scorer.
///
/// `most_liked` cannot tell "zero likes" from "likes unknown", since sources
/// without like counts report `0`. Callers should check `likes > 0` before
/// presenting it.
pub fn analyze<S>(posts: &[Post], scorer: &S) -> Option<AnalysisResult>
where
    S: SentimentScorer + ?Sized,
{
    if posts.is_empty() {
        tracing::info!("no posts to analyze");
        return None;
    }

    tracing::debug!(count = posts.len(), "analyzing posts");

    let sentiments: Vec<SentimentInfo> = posts
        .iter()
        .map(|post| SentimentInfo {
            post: post.clone(),
            sentiment: sanitize(scorer.score(&post.title)),
        })
        .collect();

    let most_viewed = first_by(posts, |a, b| a.views.cmp(&b.views))?;
    let most_liked = first_by(posts, |a, b| a.likes.cmp(&b.likes))?;
    let most_loved = first_by(&sentiments, |a, b| a.sentiment.total_cmp(&b.sentiment))?;
    let most_hated = first_by(&sentiments, |a, b| b.sentiment.total_cmp(&a.sentiment))?;

    let top_keywords = top_keywords(posts.iter().map(|p| p.title.as_str()), TOP_KEYWORDS);

    Some(AnalysisResult {
        most_viewed: most_viewed.clone(),
        most_liked: most_liked.clone(),
        most_loved: most_loved.clone(),
        most_hated: most_hated.clone(),
        top_keywords,
    })
}

/// First element that no later element strictly exceeds under `cmp`.
///
/// `Iterator::max_by` returns the *last* maximum, so ties are resolved here
/// by only replacing the best on a strictly greater element.
fn first_by<T, F>(items: &[T], cmp: F) -> Option<&T>
where
    F: Fn(&T, &T) -> Ordering,
{
    let mut iter = items.iter();
    let mut best = iter.next()?;
    for item in iter {
        if cmp(item, best) == Ordering::Greater {
            best = item;
        }
    }
    Some(best)
}

/// Keeps scores inside `[-1.0, 1.0]`; a non-finite score counts as neutral.
///
/// Adding `0.0` folds `-0.0` into `0.0` so `total_cmp` treats them as equal.
fn sanitize(score: f32) -> f32 {
    if score.is_finite() {
        score.clamp(-1.0, 1.0) + 0.0
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "analyze_test.rs"]
mod tests;
