//! Response relay.
//!
//! Copies an [`UpstreamResponse`] onto the reply to the original caller.
//!
//! # Design Decisions
//! - Status and body pass through untouched
//! - Header values are appended, so repeated upstream headers survive
//! - Hop-by-hop headers describe the upstream connection, not the payload,
//!   and are not relayed
//! - Dispatch failures become 502, or 504 when the deadline was hit

use axum::body::Body;
use axum::http::{HeaderName, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::upstream::{UpstreamError, UpstreamResponse};

fn is_hop_by_hop(name: &HeaderName) -> bool {
    matches!(
        name.as_str(),
        "connection"
            | "keep-alive"
            | "proxy-connection"
            | "proxy-authenticate"
            | "proxy-authorization"
            | "te"
            | "trailer"
            | "transfer-encoding"
            | "upgrade"
    )
}

/// Turn an upstream response into the caller's response.
pub fn relay(upstream: UpstreamResponse) -> Response {
    let mut response = Response::new(Body::from(upstream.body));
    *response.status_mut() = upstream.status;

    let headers = response.headers_mut();
    for (name, value) in upstream.headers.iter() {
        if !is_hop_by_hop(name) {
            headers.append(name.clone(), value.clone());
        }
    }

    response
}

/// Synthesized reply for a request the upstream never answered.
pub fn failure_response(err: &UpstreamError) -> Response {
    if err.is_timeout() {
        (StatusCode::GATEWAY_TIMEOUT, "Upstream request timed out").into_response()
    } else {
        (StatusCode::BAD_GATEWAY, "Upstream request failed").into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Bytes};
    use axum::http::{header, HeaderMap, HeaderValue};
    use std::time::Duration;

    fn upstream(status: StatusCode, headers: HeaderMap, body: &'static [u8]) -> UpstreamResponse {
        UpstreamResponse {
            status,
            headers,
            body: Bytes::from_static(body),
        }
    }

    #[tokio::test]
    async fn test_relay_copies_status_and_body() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let response = relay(upstream(StatusCode::UNPROCESSABLE_ENTITY, headers, br#"{"message":"Validation Failed"}"#));

        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "application/json");
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], br#"{"message":"Validation Failed"}"#);
    }

    #[test]
    fn test_relay_appends_repeated_headers() {
        let mut headers = HeaderMap::new();
        headers.append("x-multi", HeaderValue::from_static("one"));
        headers.append("x-multi", HeaderValue::from_static("two"));
        headers.insert("x-ratelimit-remaining", HeaderValue::from_static("4999"));

        let response = relay(upstream(StatusCode::OK, headers, b""));

        let values: Vec<_> = response.headers().get_all("x-multi").iter().collect();
        assert_eq!(values, vec!["one", "two"]);
        assert_eq!(response.headers()["x-ratelimit-remaining"], "4999");
    }

    #[test]
    fn test_relay_drops_hop_by_hop() {
        let mut headers = HeaderMap::new();
        headers.insert(header::CONNECTION, HeaderValue::from_static("keep-alive"));
        headers.insert(header::TRANSFER_ENCODING, HeaderValue::from_static("chunked"));
        headers.insert("keep-alive", HeaderValue::from_static("timeout=5"));
        headers.insert(header::ETAG, HeaderValue::from_static("\"abc\""));

        let response = relay(upstream(StatusCode::OK, headers, b"{}"));

        assert!(response.headers().get(header::CONNECTION).is_none());
        assert!(response.headers().get(header::TRANSFER_ENCODING).is_none());
        assert!(response.headers().get("keep-alive").is_none());
        assert_eq!(response.headers()[header::ETAG], "\"abc\"");
    }

    #[test]
    fn test_failure_status_mapping() {
        let timeout = failure_response(&UpstreamError::Timeout(Duration::from_secs(30)));
        assert_eq!(timeout.status(), StatusCode::GATEWAY_TIMEOUT);

        let other = failure_response(&UpstreamError::InvalidCredentials);
        assert_eq!(other.status(), StatusCode::BAD_GATEWAY);
    }
}
