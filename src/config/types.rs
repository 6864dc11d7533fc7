use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Settings for the remote product index.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Full URL of the product query endpoint.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Total request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
    /// Quiet period between the last filter change and the query it
    /// triggers, in milliseconds (default: 400).
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

/// Settings for the terminal UI.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    /// Tick cadence for redraws and the pending spinner (default: 250).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,
    /// Placeholder cards shown while a query is pending (default: 12).
    #[serde(default = "default_skeleton_cards")]
    pub skeleton_cards: usize,
}

fn default_endpoint() -> String {
    "http://localhost:3000/api/products".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_debounce_ms() -> u64 {
    400
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_skeleton_cards() -> usize {
    12
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
            debounce_ms: default_debounce_ms(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_rate_ms: default_tick_rate_ms(),
            skeleton_cards: default_skeleton_cards(),
        }
    }
}
