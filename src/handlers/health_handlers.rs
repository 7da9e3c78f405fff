//! Health handler for load-balancer probing.
//!
//! - GET /health -> liveness ("OK")

use axum::http::StatusCode;

/// `GET /health`
///
/// Always returns 200 with a plain-text `OK`. It performs no I/O and checks no
/// dependencies, so a missing asset never fails the probe.
pub async fn health() -> (StatusCode, &'static str) {
    (StatusCode::OK, "OK")
}
