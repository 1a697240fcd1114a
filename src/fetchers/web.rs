//! HTTP fetcher.
//!
//! Sends browser-like headers so news sites serve their regular article
//! pages, and turns transport errors and non-success statuses into
//! [`AnalyzerError::Fetch`].

use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Client;
use std::collections::BTreeMap;
use std::time::{Duration, Instant};
use tracing::{error, info, instrument};
use url::Url;

use super::Fetch;
use crate::config::FetchConfig;
use crate::error::AnalyzerError;

/// A fetched page together with its HTTP metadata.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub content: String,
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    /// Final URL after redirects.
    pub url: String,
    pub content_type: Option<String>,
}

/// Fetches pages over HTTP(S).
#[derive(Debug, Clone)]
pub struct WebFetcher {
    client: Client,
    timeout: Duration,
}

fn default_headers(user_agent: &str) -> Result<HeaderMap, AnalyzerError> {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::USER_AGENT,
        HeaderValue::from_str(user_agent)
            .map_err(|e| AnalyzerError::invalid_input(format!("user agent: {}", e)))?,
    );
    headers.insert(
        header::ACCEPT,
        HeaderValue::from_static(
            "text/html,application/xhtml+xml,application/xml;q=0.9,image/webp,*/*;q=0.8",
        ),
    );
    headers.insert(header::ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.5"));
    headers.insert(header::UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    Ok(headers)
}

/// Check that `url` is non-empty and has both a scheme and a host.
pub fn validate_url(url: &str) -> Result<Url, AnalyzerError> {
    if url.trim().is_empty() {
        return Err(AnalyzerError::InvalidUrl("URL cannot be empty".to_string()));
    }
    let parsed = Url::parse(url).map_err(|e| AnalyzerError::InvalidUrl(format!("{}: {}", url, e)))?;
    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(AnalyzerError::InvalidUrl(format!("{}: missing host", url)));
    }
    Ok(parsed)
}

impl WebFetcher {
    /// Build a fetcher from fetch settings.
    pub fn new(config: &FetchConfig) -> Result<Self, AnalyzerError> {
        let timeout = Duration::from_secs(config.timeout_secs);
        let client = Client::builder()
            .timeout(timeout)
            .default_headers(default_headers(&config.user_agent)?)
            .build()
            .map_err(|e| AnalyzerError::fetch("<client>", e))?;
        Ok(Self { client, timeout })
    }

    /// Request timeout applied to every fetch.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Fetch `url` and keep the response metadata.
    #[instrument(level = "info", skip_all, fields(%url))]
    pub async fn fetch_with_metadata(&self, url: &str) -> Result<FetchedPage, AnalyzerError> {
        let parsed = validate_url(url)?;
        let t0 = Instant::now();

        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .and_then(|r| r.error_for_status())
            .map_err(|e| {
                error!(error = %e, elapsed_ms = t0.elapsed().as_millis() as u64, "Fetch failed");
                AnalyzerError::fetch(url, e)
            })?;

        let status_code = response.status().as_u16();
        let final_url = response.url().to_string();
        let headers: BTreeMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.to_string(), v.to_string())))
            .collect();
        let content_type = headers.get(header::CONTENT_TYPE.as_str()).cloned();

        let content = response.text().await.map_err(|e| AnalyzerError::fetch(url, e))?;
        info!(
            status = status_code,
            bytes = content.len(),
            elapsed_ms = t0.elapsed().as_millis() as u64,
            "Fetched page"
        );

        Ok(FetchedPage {
            content,
            status_code,
            headers,
            url: final_url,
            content_type,
        })
    }
}

impl Fetch for WebFetcher {
    async fn fetch(&self, source: &str) -> Result<String, AnalyzerError> {
        Ok(self.fetch_with_metadata(source).await?.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url_rejects_empty() {
        assert!(matches!(validate_url(""), Err(AnalyzerError::InvalidUrl(_))));
        assert!(matches!(validate_url("   "), Err(AnalyzerError::InvalidUrl(_))));
    }

    #[test]
    fn test_validate_url_rejects_missing_scheme_or_host() {
        assert!(matches!(
            validate_url("www.bbc.co.uk/news"),
            Err(AnalyzerError::InvalidUrl(_))
        ));
        assert!(matches!(
            validate_url("mailto:editor@example.com"),
            Err(AnalyzerError::InvalidUrl(_))
        ));
    }

    #[test]
    fn test_validate_url_accepts_article_url() {
        let url = validate_url("https://www.bbc.co.uk/news/articles/abc").unwrap();
        assert_eq!(url.host_str(), Some("www.bbc.co.uk"));
    }

    #[test]
    fn test_new_uses_configured_timeout() {
        let fetcher = WebFetcher::new(&FetchConfig {
            timeout_secs: 3,
            ..FetchConfig::default()
        })
        .unwrap();
        assert_eq!(fetcher.timeout(), Duration::from_secs(3));
    }

    #[tokio::test]
    async fn test_fetch_invalid_url_fails_before_network() {
        let fetcher = WebFetcher::new(&FetchConfig::default()).unwrap();
        let err = fetcher.fetch("not a url").await.unwrap_err();
        assert!(matches!(err, AnalyzerError::InvalidUrl(_)));
    }
}
