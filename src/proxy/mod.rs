//! Proxy core: request translation and response relay.
//!
//! # Data Flow
//! ```text
//! ANY /github          → 308 to /github/ (query kept)
//! ANY /github/*path
//!     → handler.rs (buffer body leniently)
//!     → translate.rs (wildcard path, query filtering, method/body passthrough;
//!                     dot segments refused with 400)
//!     → UpstreamClient::execute (auth + timeout at client level)
//!     → relay.rs (status, headers, body copied back verbatim)
//!        or relay::failure_response (502 / 504)
//! ```

pub mod handler;
pub mod relay;
pub mod translate;

pub use handler::{prefix_redirect, proxy_handler};
pub use relay::{failure_response, relay};
pub use translate::{filter_query, translate, wildcard_path, InboundRequest, TranslateError};

/// Route prefix stripped from inbound paths before forwarding.
pub const GITHUB_PREFIX: &str = "/github";
