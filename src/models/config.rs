//! Configuration model loaded from external sources.

use serde::Deserialize;

use crate::debounce::DEFAULT_DEBOUNCE_MS;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;

/// Default timeout applied to every Listings API request.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u64 = 10_000;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub address: String,
    pub port: u16,
    pub templates_dir: String,
    /// Base URL of the Listings API, without a trailing slash.
    pub api_base_url: String,
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,
    #[serde(default = "default_per_page")]
    pub per_page: usize,
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_request_timeout_ms() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_MS
}

fn default_per_page() -> usize {
    DEFAULT_ITEMS_PER_PAGE
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}
