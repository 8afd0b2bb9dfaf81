//! The `/github/*path` handler.

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{Request, StatusCode, Uri};
use axum::response::{IntoResponse, Redirect, Response};

use crate::http::server::AppState;
use crate::proxy::relay::{failure_response, relay};
use crate::proxy::translate::{parse_query, translate, wildcard_path, InboundRequest};
use crate::proxy::GITHUB_PREFIX;

/// Forward one request to the upstream and relay whatever comes back.
pub async fn proxy_handler(State(state): State<AppState>, request: Request<Body>) -> Response {
    let (parts, body) = request.into_parts();
    let method = parts.method;
    let path = wildcard_path(parts.uri.path(), GITHUB_PREFIX).to_string();
    let query = parse_query(parts.uri.query());

    // A failed read is not fatal; forward what we have.
    let body = match axum::body::to_bytes(body, usize::MAX).await {
        Ok(bytes) => bytes,
        Err(e) => {
            tracing::warn!(method = %method, path = %path, error = %e, "Error reading request body");
            Bytes::new()
        }
    };

    let inbound = InboundRequest {
        method: method.clone(),
        path: path.clone(),
        query,
        body,
    };

    let outbound = match translate(inbound, state.upstream.base_url()) {
        Ok(outbound) => outbound,
        Err(e) => {
            tracing::warn!(method = %method, path = %path, error = %e, "Cannot build upstream URL");
            return (StatusCode::BAD_REQUEST, "Invalid upstream path").into_response();
        }
    };
    let query = outbound.url.query().unwrap_or_default().to_string();

    tracing::info!(
        method = %method,
        path = %path,
        query = %query,
        "Proxying request"
    );

    match state.upstream.execute(outbound).await {
        Ok(upstream) => {
            tracing::info!(
                content_type = %upstream.content_type(),
                status = upstream.status.as_u16(),
                "Upstream responded"
            );
            relay(upstream)
        }
        Err(e) => {
            tracing::error!(
                method = %method,
                path = %path,
                query = %query,
                error = %e,
                "Error sending request"
            );
            failure_response(&e)
        }
    }
}

/// Bare `/github`: redirect to `/github/`, keeping the query.
///
/// 308 so that non-GET methods and their bodies survive the hop.
pub async fn prefix_redirect(uri: Uri) -> Redirect {
    let target = match uri.query() {
        Some(query) => format!("{}/?{}", GITHUB_PREFIX, query),
        None => format!("{}/", GITHUB_PREFIX),
    };
    Redirect::permanent(&target)
}
