//! Preferences storage
//!
//! A single JSON-serialized settings record on disk with read-modify-write
//! under an exclusive process-local lock. Reads never fail (defaults on any
//! read or parse failure); writes surface I/O errors to the caller.

pub mod store;
pub mod types;

pub use store::PreferencesStore;
pub use types::{validate_preferences, Preferences, Theme};
