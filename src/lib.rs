//! Transparent reverse proxy for the GitHub REST API.
//!
//! Requests under `/github/` are forwarded to a single upstream with
//! basic-auth credentials attached; responses come back verbatim.

pub mod config;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod proxy;
pub mod upstream;

pub use config::ProxyConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
