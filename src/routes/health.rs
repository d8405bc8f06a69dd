//! Health and root informational endpoints

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use serde_json::json;

use super::json_response;

/// Handle liveness probe (GET /health)
///
/// Returns 200 if the backend is running. There is no readiness distinction;
/// the service is ready as soon as it accepts connections.
pub fn health_check() -> Response<Full<Bytes>> {
    json_response(StatusCode::OK, json!({ "status": "ok" }).to_string())
}

/// Handle root informational endpoint (GET /)
pub fn root_info() -> Response<Full<Bytes>> {
    json_response(
        StatusCode::OK,
        json!({ "message": "Backend is running" }).to_string(),
    )
}
