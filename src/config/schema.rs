//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! All types derive Serde traits for deserialization from config files.
//! Upstream credentials are deliberately excluded from (de)serialization;
//! they only ever arrive through the environment.

use serde::{Deserialize, Serialize};

/// Default upstream API.
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Root configuration for the proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind host and port).
    pub listener: ListenerConfig,

    /// Upstream API settings and credentials.
    pub upstream: UpstreamConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Interface to bind (e.g., "0.0.0.0").
    pub host: String,

    /// Port to listen on. Overridden by `PORT`.
    pub port: u16,
}

impl ListenerConfig {
    /// Address string suitable for `TcpListener::bind`.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Upstream client configuration.
///
/// Built once at startup and shared read-only by every request handler.
#[derive(Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL every proxied path is appended to.
    pub base_url: String,

    /// Basic-auth username (`GH_USERNAME`).
    #[serde(skip)]
    pub username: String,

    /// Basic-auth password or token (`GH_TOKEN`).
    #[serde(skip)]
    pub token: String,

    /// Total time allowed for one upstream call, in seconds.
    pub timeout_secs: u64,

    /// User-Agent sent on every upstream request.
    pub user_agent: String,

    /// Honour `HTTPS_PROXY`/`HTTP_PROXY`/`NO_PROXY` for upstream calls.
    pub use_system_proxy: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            username: String::new(),
            token: String::new(),
            timeout_secs: 30,
            user_agent: concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")).to_string(),
            use_system_proxy: true,
        }
    }
}

impl std::fmt::Debug for UpstreamConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UpstreamConfig")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("token", &"<redacted>")
            .field("timeout_secs", &self.timeout_secs)
            .field("user_agent", &self.user_agent)
            .field("use_system_proxy", &self.use_system_proxy)
            .finish()
    }
}
