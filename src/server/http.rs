//! HTTP server implementation
//!
//! Uses hyper http1 with TokioIo: a TcpListener accept loop spawning one
//! task per connection, and a single hand-rolled router matching on
//! (method, path).

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Method, Request, Response, StatusCode};
use hyper_util::rt::TokioIo;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::config::Args;
use crate::preferences::PreferencesStore;
use crate::routes;
use crate::telemetry::TelemetrySink;
use crate::types::Result;

/// Shared application state
pub struct AppState {
    pub args: Args,
    /// Preferences store, the single writer/reader of the preferences file
    pub preferences: PreferencesStore,
    /// Telemetry sink for the append-only event log
    pub telemetry: TelemetrySink,
}

impl AppState {
    /// Create application state from resolved configuration
    pub fn new(args: Args) -> Self {
        let preferences = PreferencesStore::new(args.preferences_path());
        let telemetry = TelemetrySink::new(args.telemetry_log_path());
        Self {
            args,
            preferences,
            telemetry,
        }
    }
}

/// Start the HTTP server on the configured listen address
pub async fn run(state: Arc<AppState>) -> Result<()> {
    let listener = TcpListener::bind(state.args.listen).await?;

    info!("Backend listening on {}", state.args.listen);
    info!("Preferences file: {}", state.preferences.path().display());
    info!("Telemetry log: {}", state.telemetry.path().display());

    serve(listener, state).await
}

/// Serve connections on an already-bound listener
///
/// Split out from `run` so callers (and tests) can bind an ephemeral port
/// first and learn the actual address.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> Result<()> {
    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                let state = Arc::clone(&state);
                tokio::spawn(async move {
                    let io = TokioIo::new(stream);

                    let service = service_fn(move |req| {
                        let state = Arc::clone(&state);
                        async move { handle_request(state, addr, req).await }
                    });

                    if let Err(err) = http1::Builder::new().serve_connection(io, service).await {
                        error!("Error serving connection from {}: {:?}", addr, err);
                    }
                });
            }
            Err(e) => {
                error!("Error accepting connection: {:?}", e);
            }
        }
    }
}

/// Route incoming HTTP requests
async fn handle_request(
    state: Arc<AppState>,
    addr: SocketAddr,
    req: Request<Incoming>,
) -> std::result::Result<Response<Full<Bytes>>, hyper::Error> {
    let method = req.method().clone();
    let path = req.uri().path().to_string();

    debug!("[{}] {} {}", addr, method, path);

    let response = match (method, path.as_str()) {
        // Liveness probe
        (Method::GET, "/health") => routes::health_check(),

        // Root informational endpoint
        (Method::GET, "/") => routes::root_info(),

        // Current preferences (never fails; defaults on read error)
        (Method::GET, "/preferences") => routes::get_preferences(state).await,

        // Full replacement of the preferences record
        (Method::POST, "/preferences") => {
            let body = read_body(req).await?;
            routes::update_preferences(state, body).await
        }

        // Onboarding submit; same side effect as POST /preferences
        (Method::POST, "/onboarding") => {
            let body = read_body(req).await?;
            routes::submit_onboarding(state, body).await
        }

        // Telemetry event submission
        (Method::POST, "/telemetry") => {
            let body = read_body(req).await?;
            routes::submit_telemetry(state, body).await
        }

        // CORS preflight
        (Method::OPTIONS, _) => preflight_response(),

        // Not found
        _ => not_found_response(&path),
    };

    Ok(response)
}

/// Collect the full request body
async fn read_body(req: Request<Incoming>) -> std::result::Result<Bytes, hyper::Error> {
    Ok(req.collect().await?.to_bytes())
}

/// CORS preflight response
fn preflight_response() -> Response<Full<Bytes>> {
    Response::builder()
        .status(StatusCode::OK)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Headers", "*")
        .header("Access-Control-Allow-Methods", "GET, POST, OPTIONS")
        .body(Full::new(Bytes::new()))
        .unwrap()
}

/// Not found response
fn not_found_response(path: &str) -> Response<Full<Bytes>> {
    let body = serde_json::json!({
        "detail": "Not Found",
        "path": path,
    });

    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Full::new(Bytes::from(body.to_string())))
        .unwrap()
}
