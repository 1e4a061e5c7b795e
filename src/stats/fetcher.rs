//! Generic authenticated HTTP fetching against the statistics API

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Client, Method};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, instrument};

use crate::constants::HTTP_POOL_MAX_IDLE_PER_HOST;
use crate::error::BotError;

/// Issues authenticated requests against a fixed base URL and normalizes
/// transport and HTTP-status failures into [`BotError`].
///
/// The underlying reqwest client pools connections internally; observable
/// behavior stays one request per call.
#[derive(Debug, Clone)]
pub struct ApiFetcher {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiFetcher {
    /// Creates a fetcher for `base_url` with an optional bearer token.
    ///
    /// # Arguments
    /// * `base_url` - Root of the API, trailing slashes are trimmed
    /// * `token` - Bearer credential; `None` sends unauthenticated requests
    /// * `timeout_seconds` - Fixed per-request timeout
    pub fn new(
        base_url: impl Into<String>,
        token: Option<String>,
        timeout_seconds: u64,
    ) -> Result<Self, BotError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .pool_max_idle_per_host(HTTP_POOL_MAX_IDLE_PER_HOST)
            .build()?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// The configured base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetches `endpoint` with the given query-string pairs and parses the
    /// body as JSON.
    #[instrument(skip(self, query))]
    pub async fn get(&self, endpoint: &str, query: &[(&str, String)]) -> Result<Value, BotError> {
        self.request(Method::GET, endpoint, query, HeaderMap::new())
            .await
    }

    /// Central request method. A default `Authorization: Bearer <token>`
    /// header is attached when a token is configured; caller-supplied
    /// headers are merged on top and win on conflict.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        query: &[(&str, String)],
        extra_headers: HeaderMap,
    ) -> Result<Value, BotError> {
        let url = self.build_url(endpoint);
        debug!("{} {url}", method.as_str());

        let mut headers = HeaderMap::new();
        if let Some(token) = &self.token {
            let value = HeaderValue::from_str(&format!("Bearer {token}"))
                .map_err(|e| BotError::config_error(format!("Invalid API token: {e}")))?;
            headers.insert(AUTHORIZATION, value);
        }
        // Caller-supplied headers override the defaults.
        for (name, value) in extra_headers.iter() {
            headers.insert(name.clone(), value.clone());
        }

        let response = match self
            .client
            .request(method, &url)
            .query(query)
            .headers(headers)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!("Request failed for URL {}: {}", url, e);
                return if e.is_timeout() {
                    Err(BotError::network_timeout(&url))
                } else if e.is_connect() {
                    Err(BotError::network_connection(&url, e.to_string()))
                } else {
                    Err(BotError::ApiFetch(e))
                };
            }
        };

        let status = response.status();
        debug!("Response status: {status}");

        if !status.is_success() {
            let status_code = status.as_u16();
            let reason = status.canonical_reason().unwrap_or("Unknown error");
            error!("HTTP {} - {} (URL: {})", status_code, reason, url);

            return Err(match status_code {
                404 => BotError::api_not_found(&url),
                429 => BotError::api_rate_limit(reason, &url),
                400..=499 => BotError::api_client_error(status_code, reason, &url),
                _ => BotError::api_server_error(status_code, reason, &url),
            });
        }

        let body = response.text().await.map_err(BotError::ApiFetch)?;
        debug!("Response length: {} bytes", body.len());

        let value = serde_json::from_str(&body)?;
        Ok(value)
    }

    fn build_url(&self, endpoint: &str) -> String {
        format!("{}/{}", self.base_url, endpoint.trim_start_matches('/'))
    }
}
