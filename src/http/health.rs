//! Liveness endpoint.

use axum::Json;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Pong {
    pub message: &'static str,
}

/// `GET /`: constant acknowledgement, independent of upstream state.
pub async fn ping() -> Json<Pong> {
    Json(Pong { message: "pong" })
}
