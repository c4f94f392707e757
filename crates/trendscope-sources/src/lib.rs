//! Trend sources for trendscope.
//!
//! Fetches raw payloads from each source, normalizes them into
//! [`trendscope_core::Post`]s and concatenates the results, skipping any
//! source that fails.

pub mod client;
pub mod error;
pub mod normalize;
pub mod parse;
pub mod sources;
pub mod summarize;
pub mod types;

pub use client::build_http_client;
pub use error::SourceError;
pub use normalize::normalize;
pub use parse::parse_count;
pub use sources::{
    collect, GoogleTrendsSource, SampleSource, TrendSource, YouTubeTrendingSource,
};
pub use summarize::{Summarizer, SummarizerConfig};
pub use types::{RawCount, RawPost};
