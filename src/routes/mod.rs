//! HTTP routes for the onboarding backend

pub mod health;
pub mod preferences;
pub mod telemetry;

pub use health::{health_check, root_info};
pub use preferences::{get_preferences, submit_onboarding, update_preferences};
pub use telemetry::submit_telemetry;

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};

/// Build a JSON response with CORS headers
///
/// The onboarding UI runs in a webview on a different origin, so every
/// response carries a permissive CORS header.
pub(crate) fn json_response(status: StatusCode, body: String) -> Response<Full<Bytes>> {
    Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(body)))
        .unwrap()
}

/// Build an error response with a `{"detail": ...}` body
pub(crate) fn detail_response(status: StatusCode, detail: &str) -> Response<Full<Bytes>> {
    json_response(status, serde_json::json!({ "detail": detail }).to_string())
}
