//! Upstream HTTP client with credentials and timeout baked in.
//!
//! # Responsibilities
//! - Hold the fixed upstream base URL
//! - Attach basic-auth credentials to every outbound call
//! - Bound every call with the configured timeout
//! - Buffer the upstream response for the relay

use std::time::Duration;

use base64::{engine::general_purpose, Engine as _};
use reqwest::header::{self, HeaderMap, HeaderValue};
use reqwest::Client;

use crate::config::UpstreamConfig;
use crate::upstream::types::{OutboundRequest, UpstreamError, UpstreamResponse, UpstreamResult};

/// Client for the single upstream API.
///
/// Cheap to clone; clones share the same connection pool.
#[derive(Clone, Debug)]
pub struct UpstreamClient {
    http: Client,
    base_url: String,
    timeout: Duration,
}

impl UpstreamClient {
    /// Build the client from validated configuration.
    pub fn new(config: &UpstreamConfig) -> UpstreamResult<Self> {
        let timeout = Duration::from_secs(config.timeout_secs);

        let mut headers = HeaderMap::new();
        headers.insert(
            header::AUTHORIZATION,
            basic_auth_header(&config.username, &config.token)?,
        );

        let mut builder = Client::builder()
            .timeout(timeout)
            .user_agent(config.user_agent.as_str())
            .default_headers(headers);

        if !config.use_system_proxy {
            builder = builder.no_proxy();
        }

        let http = builder.build().map_err(UpstreamError::Build)?;

        tracing::info!(
            base_url = %config.base_url,
            username = %config.username,
            timeout_secs = config.timeout_secs,
            "Upstream client initialized"
        );

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    /// Base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Configured per-call deadline.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send one request and buffer the full response.
    pub async fn execute(&self, request: OutboundRequest) -> UpstreamResult<UpstreamResponse> {
        let response = self
            .http
            .request(request.method, request.url)
            .body(request.body)
            .send()
            .await
            .map_err(|e| UpstreamError::from_send(e, self.timeout))?;

        let status = response.status();
        let headers = response.headers().clone();
        let body = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::from_body(e, self.timeout))?;

        Ok(UpstreamResponse {
            status,
            headers,
            body,
        })
    }
}

/// Encode `username:token` as a sensitive `Basic` authorization value.
fn basic_auth_header(username: &str, token: &str) -> UpstreamResult<HeaderValue> {
    let encoded = general_purpose::STANDARD.encode(format!("{}:{}", username, token));
    let mut value = HeaderValue::from_str(&format!("Basic {}", encoded))
        .map_err(|_| UpstreamError::InvalidCredentials)?;
    value.set_sensitive(true);
    Ok(value)
}
