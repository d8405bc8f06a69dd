//! Configuration for the onboarding backend
//!
//! CLI arguments and environment variable handling using clap. Paths are
//! resolved once at startup and handed to the stores; nothing reads the
//! environment after that.

use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Directory name under the platform data dir for default file locations
const APP_DIR_NAME: &str = "onboardd";

/// Default preferences file name within the app data dir
const PREFERENCES_FILE_NAME: &str = "preferences.json";

/// Default telemetry log file name within the app data dir
const TELEMETRY_LOG_NAME: &str = "telemetry.log";

/// onboardd - local onboarding backend
#[derive(Parser, Debug, Clone)]
#[command(name = "onboardd")]
#[command(about = "Local backend for onboarding preferences and telemetry")]
pub struct Args {
    /// Address to listen on
    #[arg(long, env = "LISTEN", default_value = "127.0.0.1:5002")]
    pub listen: SocketAddr,

    /// Preferences file path (defaults to the platform data dir)
    #[arg(long, env = "PREFERENCES_FILE")]
    pub preferences_file: Option<PathBuf>,

    /// Telemetry log path (defaults to the platform data dir)
    #[arg(long, env = "TELEMETRY_LOG")]
    pub telemetry_log: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: String,
}

impl Args {
    /// Effective preferences file path (override or platform default)
    pub fn preferences_path(&self) -> PathBuf {
        self.preferences_file
            .clone()
            .unwrap_or_else(|| default_data_dir().join(PREFERENCES_FILE_NAME))
    }

    /// Effective telemetry log path (override or platform default)
    pub fn telemetry_log_path(&self) -> PathBuf {
        self.telemetry_log
            .clone()
            .unwrap_or_else(|| default_data_dir().join(TELEMETRY_LOG_NAME))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.preferences_path() == self.telemetry_log_path() {
            return Err(
                "PREFERENCES_FILE and TELEMETRY_LOG must not point at the same file".to_string(),
            );
        }
        Ok(())
    }
}

/// Default data directory for backend files
fn default_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from(".local/share"))
        .join(APP_DIR_NAME)
}
