//! Telemetry endpoint
//!
//! Telemetry is a best-effort side channel. A validation failure is a 422
//! like any other endpoint, but a write failure still returns 200 with a
//! distinct `logged_with_error` status so the client-visible operation is
//! never blocked by the log.

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tracing::warn;

use crate::server::AppState;
use crate::telemetry::validate_telemetry;

use super::{detail_response, json_response};

/// Handle POST /telemetry
pub async fn submit_telemetry(state: Arc<AppState>, body: Bytes) -> Response<Full<Bytes>> {
    let event = match validate_telemetry(&body) {
        Ok(event) => event,
        Err(msg) => {
            warn!("Rejected telemetry payload: {}", msg);
            return detail_response(StatusCode::UNPROCESSABLE_ENTITY, &msg);
        }
    };

    let outcome = state.telemetry.append(&event).await;

    json_response(
        StatusCode::OK,
        json!({ "status": outcome.as_str() }).to_string(),
    )
}
