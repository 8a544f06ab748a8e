use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub generation: GenerationConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Settings for the text-generation endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationConfig {
    /// Base URL of the API (e.g., "https://generativelanguage.googleapis.com").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Model used for `generateContent` requests.
    #[serde(default = "default_model")]
    pub model: String,
    /// Direct API key. Takes precedence over `api_key_env`.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Environment variable consulted when `api_key` is unset.
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
    /// Total request timeout in seconds.
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u32,
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Event loop tick in milliseconds (drives the pending spinner).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
}

fn default_base_url() -> String {
    "https://generativelanguage.googleapis.com".to_string()
}

fn default_model() -> String {
    "gemini-2.5-flash".to_string()
}

fn default_api_key_env() -> String {
    "API_KEY".to_string()
}

fn default_timeout_seconds() -> u32 {
    60
}

fn default_tick_rate_ms() -> u64 {
    250
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key: None,
            api_key_env: default_api_key_env(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
        }
    }
}
