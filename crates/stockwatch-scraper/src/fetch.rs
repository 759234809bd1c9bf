//! HTTP helper that turns a target URL into a raw HTML body.

use std::time::Duration;

use reqwest::Client;

use crate::error::ScraperError;

const HTML_ACCEPT: &str = "text/html,application/xhtml+xml";

/// Thin wrapper over a shared `reqwest::Client` that sends browser-like
/// headers and reads the whole response body as text.
///
/// There is no retry: the next poll iteration is the retry.
#[derive(Debug, Clone)]
pub struct HtmlClient {
    client: Client,
}

impl HtmlClient {
    /// Creates an `HtmlClient` with the given request timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`ScraperError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, ScraperError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetch the HTML body of `url`.
    ///
    /// # Errors
    ///
    /// - [`ScraperError::Http`] on network, TLS, timeout or body-decoding failure.
    /// - [`ScraperError::UnexpectedStatus`] for any non-2xx response.
    pub async fn fetch_html(&self, url: &str) -> Result<String, ScraperError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, HTML_ACCEPT)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::UnexpectedStatus {
                status: status.as_u16(),
                url: url.to_owned(),
            });
        }

        let body = response.text().await?;
        tracing::debug!(url, bytes = body.len(), "fetched page");
        Ok(body)
    }
}
