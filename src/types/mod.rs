//! Shared types for the onboarding backend

mod error;

pub use error::{BackendError, Result};
