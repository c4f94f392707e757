//! Built-in offline feed of social posts.
//!
//! Stands in for platforms without a scraper (Twitter, TikTok, Facebook,
//! Instagram) and lets the pipeline run without network access.

use futures::future::BoxFuture;
use futures::FutureExt;

use super::TrendSource;
use crate::error::SourceError;
use crate::types::{RawCount, RawPost};

/// `(platform, title, views, likes, url)`
const SAMPLE_POSTS: &[(&str, &str, i64, i64, &str)] = &[
    (
        "Twitter",
        "إطلاق هاتف ذكي جديد يثير الجدل بين المستخدمين",
        520_000,
        26_000,
        "https://twitter.com/trends/status/1001",
    ),
    (
        "TikTok",
        "تحدي رقص جديد ينتشر بسرعة مذهلة",
        7_900_000,
        910_000,
        "https://www.tiktok.com/@trends/video/2002",
    ),
    (
        "Facebook",
        "نقاش حاد حول قرار رفع أسعار الوقود",
        310_000,
        8_100,
        "https://www.facebook.com/trends/posts/3003",
    ),
    (
        "Instagram",
        "صور رائعة من حفل افتتاح المهرجان",
        1_150_000,
        240_000,
        "https://www.instagram.com/p/trends4004",
    ),
    (
        "Twitter",
        "فشل إطلاق قمر صناعي يسبب خيبة أمل كبيرة",
        760_000,
        12_500,
        "https://twitter.com/trends/status/5005",
    ),
];

#[derive(Debug, Default)]
pub struct SampleSource;

impl SampleSource {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// The fixed payloads this source returns.
    #[must_use]
    pub fn posts() -> Vec<RawPost> {
        SAMPLE_POSTS
            .iter()
            .map(|&(platform, title, views, likes, url)| RawPost {
                views: Some(RawCount::Integer(views)),
                likes: Some(RawCount::Integer(likes)),
                url: Some(url.to_string()),
                ..RawPost::new(platform, title)
            })
            .collect()
    }
}

impl TrendSource for SampleSource {
    fn name(&self) -> &str {
        "sample_feed"
    }

    fn fetch(&self) -> BoxFuture<'_, Result<Vec<RawPost>, SourceError>> {
        futures::future::ready(Ok(Self::posts())).boxed()
    }
}
