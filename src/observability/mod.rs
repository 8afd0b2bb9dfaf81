//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Handlers and middleware produce:
//!     → tracing events with structured fields
//!     → request spans carrying method, URI and request ID
//!
//! logging.rs installs the subscriber that writes them to stdout.
//! ```
//!
//! # Design Decisions
//! - Structured logging; JSON output for machine parsing on request
//! - Request ID flows through every span
//! - Filter controlled by `RUST_LOG`

pub mod logging;

pub use logging::{init_logging, LogFormat};
