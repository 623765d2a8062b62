//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

const DEFAULT_API_URL: &str = "http://localhost:5000";
const DEFAULT_STATE_DIR: &str = "~/.scribe";

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Base address of the posts backend.
    pub api_url: String,
    /// Directory holding the persisted credential pair.
    pub state_dir: PathBuf,
    /// When set, the session lives in memory only.
    pub ephemeral: bool,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let api_url = env::var("SCRIBE_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        let state_dir = env::var("SCRIBE_STATE_DIR").unwrap_or_else(|_| DEFAULT_STATE_DIR.to_string());
        let ephemeral = env::var("SCRIBE_EPHEMERAL")
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        Self {
            api_url,
            state_dir: resolve_dir(&state_dir),
            ephemeral,
        }
    }
}

fn resolve_dir(raw: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(raw).into_owned())
}
