//! onboardd - local onboarding backend
//!
//! A small local HTTP service backing the onboarding wizard. It stores the
//! user's preferences in a single JSON file and appends locally-logged
//! telemetry events to an append-only log.
//!
//! ## Services
//!
//! - **Preferences store**: validated read-modify-write of the settings
//!   file under an exclusive process-local lock
//! - **Telemetry sink**: best-effort append-only event log; write failures
//!   soft-fail instead of blocking the caller

pub mod config;
pub mod preferences;
pub mod routes;
pub mod server;
pub mod telemetry;
pub mod types;

pub use config::Args;
pub use server::{run, AppState};
pub use types::{BackendError, Result};
