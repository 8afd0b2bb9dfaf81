//! Upstream response and error definitions.

use std::time::Duration;

use axum::body::Bytes;
use axum::http::{header, HeaderMap, Method, StatusCode};
use thiserror::Error;
use url::Url;

/// A request ready to dispatch to the upstream.
///
/// `url` already carries the filtered query string.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: Method,
    pub url: Url,
    pub body: Bytes,
}

/// A fully buffered upstream response.
#[derive(Debug, Clone)]
pub struct UpstreamResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl UpstreamResponse {
    /// The upstream's reported content type, or `""` when absent.
    pub fn content_type(&self) -> &str {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
    }
}

/// Errors that can occur while talking to the upstream.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The HTTP client could not be constructed.
    #[error("Failed to build upstream client: {0}")]
    Build(#[source] reqwest::Error),

    /// The credentials cannot be encoded as a header value.
    #[error("Upstream credentials are not a valid header value")]
    InvalidCredentials,

    /// The call exceeded the configured deadline.
    #[error("Upstream request timed out after {} seconds", .0.as_secs())]
    Timeout(Duration),

    /// Connection could not be established (DNS, refused, TLS).
    #[error("Failed to connect to upstream: {0}")]
    Connect(#[source] reqwest::Error),

    /// Any other failure while sending the request.
    #[error("Upstream request failed: {0}")]
    Request(#[source] reqwest::Error),

    /// The response arrived but its body could not be read.
    #[error("Failed to read upstream response body: {0}")]
    Body(#[source] reqwest::Error),
}

impl UpstreamError {
    /// Classify a send-side reqwest error.
    pub(crate) fn from_send(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else if err.is_connect() {
            Self::Connect(err)
        } else {
            Self::Request(err)
        }
    }

    /// Classify a body-read reqwest error.
    pub(crate) fn from_body(err: reqwest::Error, timeout: Duration) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout)
        } else {
            Self::Body(err)
        }
    }

    /// Returns true if the call was abandoned because of the deadline.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout(_))
    }
}

/// Result type for upstream operations.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_content_type() {
        let mut headers = HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            HeaderValue::from_static("application/json; charset=utf-8"),
        );
        let response = UpstreamResponse {
            status: StatusCode::OK,
            headers,
            body: Bytes::new(),
        };
        assert_eq!(response.content_type(), "application/json; charset=utf-8");
    }

    #[test]
    fn test_missing_content_type() {
        let response = UpstreamResponse {
            status: StatusCode::NO_CONTENT,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        };
        assert_eq!(response.content_type(), "");
    }

    #[test]
    fn test_error_display() {
        let err = UpstreamError::Timeout(Duration::from_secs(30));
        assert_eq!(err.to_string(), "Upstream request timed out after 30 seconds");
        assert!(err.is_timeout());
        assert!(!UpstreamError::InvalidCredentials.is_timeout());
    }
}
