//! Plain-text and JSON rendering of collected posts and their analysis.

use std::fmt;

use chrono::{DateTime, Utc};
use trendscope_core::{AnalysisResult, Post, SentimentInfo};

const RULE: &str = "----------------------------------------";

/// Human-readable trend report.
///
/// `None` (no posts collected) renders a single "no data" line. The most
/// liked post is omitted when no post reported any likes.
pub(crate) struct TextReport<'a> {
    pub analysis: Option<&'a AnalysisResult>,
    pub post_count: usize,
}

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(analysis) = self.analysis else {
            return writeln!(f, "no data to analyze");
        };

        writeln!(f, "Trend report ({} posts)", self.post_count)?;
        writeln!(f, "{RULE}")?;

        write_post(f, "Most viewed", &analysis.most_viewed)?;
        if analysis.most_liked.likes > 0 {
            write_post(f, "Most liked", &analysis.most_liked)?;
        }
        write_sentiment(f, "Most loved", &analysis.most_loved)?;
        write_sentiment(f, "Most hated", &analysis.most_hated)?;

        writeln!(f, "Top keywords:")?;
        if analysis.top_keywords.is_empty() {
            writeln!(f, "  (none)")?;
        }
        for (word, count) in &analysis.top_keywords {
            writeln!(f, "  {word} ({count})")?;
        }
        Ok(())
    }
}

/// Numbered list of posts, one block per post.
pub(crate) struct PostList<'a>(pub &'a [Post]);

impl fmt::Display for PostList<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return writeln!(f, "no posts collected");
        }

        for (i, post) in self.0.iter().enumerate() {
            writeln!(f, "{}. [{}] {}", i + 1, post.platform, post.title)?;
            writeln!(
                f,
                "   {} views, {} likes, {} ({})",
                group_digits(post.views),
                group_digits(post.likes),
                post.channel,
                post.published_time
            )?;
            if post.has_url() {
                writeln!(f, "   {}", post.url)?;
            }
            if !post.summary.is_empty() {
                writeln!(f, "   {}", post.summary)?;
            }
        }
        Ok(())
    }
}

/// JSON document for `report --json`.
pub(crate) fn json_report(
    posts: &[Post],
    analysis: Option<&AnalysisResult>,
    generated_at: DateTime<Utc>,
) -> serde_json::Value {
    serde_json::json!({
        "generated_at": generated_at.to_rfc3339(),
        "post_count": posts.len(),
        "analysis": analysis,
        "posts": posts,
    })
}

fn write_post(f: &mut fmt::Formatter<'_>, label: &str, post: &Post) -> fmt::Result {
    writeln!(f, "{label}: {}", post.title)?;
    writeln!(
        f,
        "  {} | {} views | {} likes",
        post.platform,
        group_digits(post.views),
        group_digits(post.likes)
    )?;
    write_url(f, post)
}

fn write_sentiment(f: &mut fmt::Formatter<'_>, label: &str, info: &SentimentInfo) -> fmt::Result {
    writeln!(f, "{label} ({:.2}): {}", info.sentiment, info.post.title)?;
    writeln!(f, "  {}", info.post.platform)?;
    write_url(f, &info.post)
}

fn write_url(f: &mut fmt::Formatter<'_>, post: &Post) -> fmt::Result {
    if post.has_url() {
        writeln!(f, "  {}", post.url)?;
    }
    Ok(())
}

/// `1234567` -> `1,234,567`.
fn group_digits(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
