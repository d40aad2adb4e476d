//! Configuration management for the API Link Checker CLI.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Every value has a default matching the stock
//! checker deployment, so the client runs against a local backend without any
//! configuration at all.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults

use std::{env, path::PathBuf, time::Duration};

use tracing_subscriber::EnvFilter;

use crate::utils;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8080/v1/api/link/checker";
pub const DEFAULT_SWAGGER_BASE: &str = "/swagger-ui/index.html#/";
pub const DEFAULT_NOTICE_SECS: u64 = 3;
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Runtime settings handed to the checklist controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Prefix for every documentation link.
    pub swagger_base: String,
    /// Whether toggles carry the local nickname and badges are shown.
    pub track_nickname: bool,
    /// How long a notice stays visible.
    pub notice_lifetime: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            swagger_base: DEFAULT_SWAGGER_BASE.to_string(),
            track_nickname: true,
            notice_lifetime: Duration::from_secs(DEFAULT_NOTICE_SECS),
        }
    }
}

/// Returns the directory holding the `.env` file and the stored identity.
///
/// - Linux: `~/.local/share/apichecklist`
/// - macOS: `~/Library/Application Support/apichecklist`
/// - Windows: `%LOCALAPPDATA%/apichecklist`
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("apichecklist");
    path
}

/// Loads environment variables from a `.env` file in the local data directory.
///
/// A missing file is not an error; the defaults apply. A file that exists but
/// cannot be parsed is reported.
///
/// # Example
///
/// ```
/// use apichecklist::config;
///
/// #[tokio::main]
/// async fn main() {
///     if let Err(e) = config::load_env().await {
///         eprintln!("Configuration error: {}", e);
///     }
/// }
/// ```
pub async fn load_env() -> Result<(), String> {
    let dir = data_dir();
    async_fs::create_dir_all(&dir)
        .await
        .map_err(|e| e.to_string())?;

    let path = dir.join(".env");
    if !path.is_file() {
        return Ok(());
    }

    dotenv::from_path(&path).map_err(|e| format!("{}: {}", path.display(), e))
}

/// Installs the diagnostics subscriber writing to stderr.
///
/// The filter comes from `APICHECK_LOG` (e.g. `debug`, `apichecklist=trace`),
/// defaulting to `warn` so normal runs only show the colored notices.
pub fn init_logging() {
    let filter = EnvFilter::try_new(log_filter())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Returns the checker backend base URL (`APICHECK_BASE_URL`).
pub fn checker_base_url() -> String {
    env::var("APICHECK_BASE_URL")
        .map(|v| v.trim_end_matches('/').to_string())
        .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

/// Returns the documentation base prefixed to every link (`APICHECK_SWAGGER_BASE`).
pub fn swagger_base() -> String {
    env::var("APICHECK_SWAGGER_BASE").unwrap_or_else(|_| DEFAULT_SWAGGER_BASE.to_string())
}

/// Whether the nickname variant is active (`APICHECK_TRACK_NICKNAME`).
pub fn track_nickname() -> bool {
    env::var("APICHECK_TRACK_NICKNAME")
        .ok()
        .and_then(|v| utils::parse_bool(&v))
        .unwrap_or(true)
}

/// Notice lifetime in seconds (`APICHECK_NOTICE_SECS`).
pub fn notice_lifetime() -> Duration {
    let secs = env::var("APICHECK_NOTICE_SECS")
        .ok()
        .and_then(|v| v.trim().parse::<u64>().ok())
        .unwrap_or(DEFAULT_NOTICE_SECS);
    Duration::from_secs(secs)
}

pub fn log_filter() -> String {
    env::var("APICHECK_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string())
}

/// Collects the controller settings from the environment.
pub fn settings() -> Settings {
    Settings {
        swagger_base: swagger_base(),
        track_nickname: track_nickname(),
        notice_lifetime: notice_lifetime(),
    }
}
