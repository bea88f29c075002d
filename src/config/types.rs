use serde::{Deserialize, Serialize};

/// Page sizes the list view offers.
pub const ITEMS_PER_PAGE_OPTIONS: [usize; 4] = [6, 12, 24, 48];

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub list: ListConfig,
}

/// Upstream kanji API settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL for the API. A path prefix is kept in front of `/api/...`.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Value of the `x-rapidapi-host` header.
    #[serde(default = "default_host")]
    pub host: String,
    /// RapidAPI key. `KANJIVIEW_API_KEY` takes precedence when set.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// List view defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListConfig {
    /// Initial page size; must be one of [`ITEMS_PER_PAGE_OPTIONS`].
    #[serde(default = "default_items_per_page")]
    pub items_per_page: usize,
}

fn default_base_url() -> String {
    "https://kanjialive-api.p.rapidapi.com".to_string()
}

fn default_host() -> String {
    "kanjialive-api.p.rapidapi.com".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_items_per_page() -> usize {
    12
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            host: default_host(),
            api_key: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            items_per_page: default_items_per_page(),
        }
    }
}
