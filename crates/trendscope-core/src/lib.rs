//! Shared data model and configuration for trendscope.

pub mod app_config;
pub mod config;
pub mod post;

use thiserror::Error;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env};
pub use post::{AnalysisResult, Post, SentimentInfo, NO_URL, PLACEHOLDER};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
