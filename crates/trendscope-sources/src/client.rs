//! Shared HTTP client construction.

use std::time::Duration;

use reqwest::Client;

use crate::error::SourceError;

const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Builds the `reqwest::Client` shared by every source and the summarizer.
///
/// # Errors
///
/// Returns [`SourceError::Http`] if the underlying client cannot be
/// constructed (e.g., invalid TLS config).
pub fn build_http_client(timeout_secs: u64, user_agent: &str) -> Result<Client, SourceError> {
    let client = Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
        .user_agent(user_agent)
        .build()?;
    Ok(client)
}

/// Sends `request` and returns the body text, mapping non-2xx statuses to
/// [`SourceError::UnexpectedStatus`].
pub(crate) async fn fetch_text(request: reqwest::RequestBuilder) -> Result<String, SourceError> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::UnexpectedStatus {
            status: status.as_u16(),
            url: response.url().to_string(),
        });
    }
    Ok(response.text().await?)
}
