//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware, routes)
//!     → request.rs (add request ID)
//!     → GET /              → health.rs
//!     → ANY /github/*path  → proxy::proxy_handler
//!     → Send to client
//! ```

pub mod health;
pub mod request;
pub mod server;

pub use request::{MakeRequestUuid, X_REQUEST_ID};
pub use server::{AppState, HttpServer};
