//! Trend analysis for trendscope.
//!
//! Scores every post title with a [`SentimentScorer`], picks the most viewed,
//! most liked, most positive and most negative posts, and counts the most
//! frequent title keywords.

pub mod analyze;
pub mod keywords;
pub mod scorer;

pub use analyze::analyze;
pub use keywords::{top_keywords, STOP_WORDS};
pub use scorer::{lexicon_score, LexiconScorer, SentimentScorer};
