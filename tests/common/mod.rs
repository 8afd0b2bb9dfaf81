//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::time::Duration;

use axum::body::{to_bytes, Body, Bytes};
use axum::http::{HeaderMap, Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use tokio::io::AsyncWriteExt;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use github_proxy::config::ProxyConfig;
use github_proxy::{HttpServer, Shutdown};

pub const USERNAME: &str = "octocat";
pub const TOKEN: &str = "ghp_test";
/// base64("octocat:ghp_test")
pub const EXPECTED_AUTH: &str = "Basic b2N0b2NhdDpnaHBfdGVzdA==";

/// What the mock upstream saw.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub path: String,
    pub query: Option<String>,
    pub headers: HeaderMap,
    pub body: Bytes,
}

/// What the mock upstream answers with.
#[derive(Debug, Clone)]
pub struct MockReply {
    pub status: StatusCode,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: &'static str,
}

impl MockReply {
    pub fn json(status: StatusCode, body: &'static str) -> Self {
        Self {
            status,
            headers: vec![("content-type", "application/json; charset=utf-8")],
            body,
        }
    }
}

/// Start an upstream that records every request and replies with `reply`.
pub async fn start_recording_upstream(
    reply: MockReply,
) -> (SocketAddr, mpsc::UnboundedReceiver<CapturedRequest>) {
    let (tx, rx) = mpsc::unbounded_channel();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let app = Router::new().fallback(move |request: Request<Body>| {
        let tx = tx.clone();
        let reply = reply.clone();
        async move {
            let (parts, body) = request.into_parts();
            let body = to_bytes(body, usize::MAX).await.unwrap_or_default();
            let _ = tx.send(CapturedRequest {
                method: parts.method,
                path: parts.uri.path().to_string(),
                query: parts.uri.query().map(str::to_string),
                headers: parts.headers,
                body,
            });

            let mut builder = Response::builder().status(reply.status);
            for (name, value) in &reply.headers {
                builder = builder.header(*name, *value);
            }
            builder.body(Body::from(reply.body)).unwrap()
        }
    });

    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    (addr, rx)
}

/// Start an upstream that accepts connections and never answers.
pub async fn start_silent_upstream() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    tokio::spawn(async move {
                        tokio::time::sleep(Duration::from_secs(10)).await;
                        let _ = socket.shutdown().await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// An address nothing is listening on.
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Proxy configuration pointed at a local upstream.
pub fn proxy_config(upstream: SocketAddr) -> ProxyConfig {
    let mut config = ProxyConfig::default();
    config.upstream.base_url = format!("http://{}", upstream);
    config.upstream.username = USERNAME.into();
    config.upstream.token = TOKEN.into();
    config.upstream.use_system_proxy = false;
    config
}

/// Spawn the proxy on an ephemeral port.
pub async fn spawn_proxy(config: ProxyConfig) -> (SocketAddr, Shutdown) {
    let server = HttpServer::new(config).unwrap();
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}
