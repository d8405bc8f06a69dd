//! Preferences endpoints
//!
//! GET /preferences never fails: any read problem falls back to defaults.
//! POST /preferences and POST /onboarding validate the payload at the
//! boundary (422) and surface write failures as HTTP 500; both have the
//! same persistence side effect and differ only in their status label.

use bytes::Bytes;
use http_body_util::Full;
use hyper::{Response, StatusCode};
use serde_json::json;
use std::sync::Arc;
use tracing::{error, warn};

use crate::preferences::validate_preferences;
use crate::server::AppState;

use super::{detail_response, json_response};

/// Handle GET /preferences
pub async fn get_preferences(state: Arc<AppState>) -> Response<Full<Bytes>> {
    let prefs = state.preferences.load().await;

    let body = serde_json::to_string(&prefs)
        .unwrap_or_else(|_| r#"{"telemetry":false,"theme":"light"}"#.to_string());

    json_response(StatusCode::OK, body)
}

/// Handle POST /preferences
pub async fn update_preferences(state: Arc<AppState>, body: Bytes) -> Response<Full<Bytes>> {
    save_preferences(state, body, "updated").await
}

/// Handle POST /onboarding
pub async fn submit_onboarding(state: Arc<AppState>, body: Bytes) -> Response<Full<Bytes>> {
    save_preferences(state, body, "saved").await
}

/// Validate and persist a preferences payload
async fn save_preferences(
    state: Arc<AppState>,
    body: Bytes,
    status_label: &'static str,
) -> Response<Full<Bytes>> {
    let prefs = match validate_preferences(&body) {
        Ok(prefs) => prefs,
        Err(msg) => {
            warn!("Rejected preferences payload: {}", msg);
            return detail_response(StatusCode::UNPROCESSABLE_ENTITY, &msg);
        }
    };

    match state.preferences.save(&prefs).await {
        Ok(()) => json_response(StatusCode::OK, json!({ "status": status_label }).to_string()),
        Err(e) => {
            error!("Failed to persist preferences: {}", e);
            detail_response(e.status_code(), &e.to_string())
        }
    }
}
