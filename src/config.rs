use serde::Deserialize;

/// Application configuration loaded from environment variables
///
/// All variables are read with a `FLICKPICK_` prefix, e.g.
/// `FLICKPICK_API_BASE_URL=http://127.0.0.1:5020`.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the recommendation backend
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    /// Log file path; the terminal itself is owned by the UI
    #[serde(default = "default_log_file")]
    pub log_file: String,
}

fn default_api_base_url() -> String {
    "http://127.0.0.1:5020".to_string()
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_log_file() -> String {
    "flickpick.log".to_string()
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::prefixed("FLICKPICK_")
            .from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }
}
