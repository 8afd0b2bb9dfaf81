//! Request translation.
//!
//! Maps an inbound request onto an [`OutboundRequest`] against the fixed
//! upstream base URL. The caller never chooses the destination host; only
//! the wildcard path and the query are carried over.

use axum::body::Bytes;
use axum::http::Method;
use thiserror::Error;
use url::{form_urlencoded, Url};

use crate::upstream::OutboundRequest;

/// An inbound request reduced to the parts that get forwarded.
#[derive(Debug, Clone)]
pub struct InboundRequest {
    pub method: Method,
    /// Wildcard remainder after the route prefix, leading `/` included.
    pub path: String,
    /// Decoded query pairs in arrival order, repeated keys kept.
    pub query: Vec<(String, String)>,
    pub body: Bytes,
}

/// Reasons an inbound request cannot be mapped onto the upstream.
#[derive(Debug, Error)]
pub enum TranslateError {
    /// `.` or `..` segments (plain or percent-encoded) would be resolved
    /// away by URL parsing, so the path could not be forwarded as sent.
    #[error("path '{0}' contains a dot segment")]
    DotSegment(String),

    #[error("invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

/// Strip `prefix` from a raw URI path, leaving the remainder untouched.
pub fn wildcard_path<'a>(uri_path: &'a str, prefix: &str) -> &'a str {
    uri_path.strip_prefix(prefix).unwrap_or(uri_path)
}

fn is_dot_segment(segment: &str) -> bool {
    let segment = segment.to_ascii_lowercase().replace("%2e", ".");
    segment == "." || segment == ".."
}

/// Decode a raw query string into ordered pairs.
///
/// A bare `flag` decodes to `("flag", "")`.
pub fn parse_query(raw: Option<&str>) -> Vec<(String, String)> {
    raw.map(|q| form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}

/// Drop every pair whose value is empty.
///
/// The upstream treats `flag=` differently from an absent `flag`, and the
/// inbound parser cannot tell `flag` from `flag=`, so both are omitted.
/// Repeated keys keep each of their non-empty values in order.
pub fn filter_query(query: Vec<(String, String)>) -> Vec<(String, String)> {
    query.into_iter().filter(|(_, value)| !value.is_empty()).collect()
}

/// Build the outbound request for `inbound` against `base_url`.
///
/// `base_url` must not end in `/`; the wildcard path supplies it.
/// Paths with dot segments are refused rather than normalized.
pub fn translate(inbound: InboundRequest, base_url: &str) -> Result<OutboundRequest, TranslateError> {
    if inbound.path.split('/').any(is_dot_segment) {
        return Err(TranslateError::DotSegment(inbound.path));
    }

    let mut url = Url::parse(&format!("{}{}", base_url, inbound.path))?;

    let query = filter_query(inbound.query);
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(&query);
    }

    Ok(OutboundRequest {
        method: inbound.method,
        url,
        body: inbound.body,
    })
}
