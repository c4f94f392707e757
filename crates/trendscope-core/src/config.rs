use crate::app_config::AppConfig;
use crate::ConfigError;

pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files.
///
/// # Errors
///
/// Returns `ConfigError` if a value is present but invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// Every variable is optional; the lookup is injected so tests can use a
/// plain `HashMap` instead of mutating the process environment.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let log_level = or_default("TRENDSCOPE_LOG_LEVEL", "info");
    let request_timeout_secs = parse_u64("TRENDSCOPE_REQUEST_TIMEOUT_SECS", "15")?;
    let user_agent = or_default("TRENDSCOPE_USER_AGENT", DEFAULT_USER_AGENT);

    let youtube_trending_url = or_default(
        "TRENDSCOPE_YOUTUBE_TRENDING_URL",
        "https://www.youtube.com/feed/trending",
    );
    let google_trends_url = or_default(
        "TRENDSCOPE_GOOGLE_TRENDS_URL",
        "https://trends.google.com/trends/trendingsearches/daily/rss",
    );
    let google_trends_geo = or_default("TRENDSCOPE_GOOGLE_TRENDS_GEO", "SA");
    let google_trends_limit = parse_usize("TRENDSCOPE_GOOGLE_TRENDS_LIMIT", "5")?;

    let include_sample_feed = parse_bool(
        "TRENDSCOPE_INCLUDE_SAMPLE_FEED",
        &or_default("TRENDSCOPE_INCLUDE_SAMPLE_FEED", "false"),
    )?;

    // An empty key in `.env` means "not configured".
    let gemini_api_key = lookup("GEMINI_API_KEY")
        .ok()
        .filter(|key| !key.trim().is_empty());
    let gemini_model = or_default("TRENDSCOPE_GEMINI_MODEL", "gemini-pro");
    let gemini_base_url = or_default(
        "TRENDSCOPE_GEMINI_BASE_URL",
        "https://generativelanguage.googleapis.com",
    );
    let summary_max_chars = parse_usize("TRENDSCOPE_SUMMARY_MAX_CHARS", "3000")?;

    Ok(AppConfig {
        log_level,
        request_timeout_secs,
        user_agent,
        youtube_trending_url,
        google_trends_url,
        google_trends_geo,
        google_trends_limit,
        include_sample_feed,
        gemini_api_key,
        gemini_model,
        gemini_base_url,
        summary_max_chars,
    })
}

/// Parse a boolean flag, accepting `true/false`, `1/0`, `yes/no` in any case.
fn parse_bool(var: &str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" | "" => Ok(false),
        other => Err(ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: format!("expected a boolean, got \"{other}\""),
        }),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
