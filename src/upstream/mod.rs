//! Upstream API client subsystem.
//!
//! # Data Flow
//! ```text
//! UpstreamConfig (once, at startup)
//!     → client.rs (reqwest client with base URL, basic auth, timeout)
//!     → shared read-only by every handler via AppState
//!
//! Per request:
//!     OutboundRequest → client.rs → UpstreamResponse | UpstreamError
//! ```
//!
//! # Design Decisions
//! - Credentials are attached as client-level default headers, never per call
//! - Response bodies are fully buffered; the relay writes them verbatim
//! - No retries: every inbound request triggers exactly one outbound call

pub mod client;
pub mod types;

pub use client::UpstreamClient;
pub use types::{OutboundRequest, UpstreamError, UpstreamResponse, UpstreamResult};
