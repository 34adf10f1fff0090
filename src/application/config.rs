use crate::constants::{
    DEFAULT_FEED_REFRESH_SECONDS, DEFAULT_PAGE_SIZE, DEFAULT_REFRESH_MARGIN_SECONDS,
};
use crate::utils::config::{get_env_flag, get_env_or_default};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Account credentials used by the session keeper to log in
pub struct Credentials {
    /// Username for the Placemark account
    pub username: String,
    /// Password for the Placemark account
    pub password: String,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the Placemark client
pub struct Config {
    /// Account credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Background synchronization configuration
    pub sync: SyncConfig,
    /// Rate limiter configuration for API requests
    pub rate_limiter: RateLimiterConfig,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL prepended to every relative API path
    pub base_url: String,
    /// Timeout in seconds for REST API requests
    pub timeout: u64,
    /// Whether cookies (including the JWT auth cookies) are stored and
    /// forwarded on every request
    pub with_credentials: bool,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the background effect handlers
pub struct SyncConfig {
    /// Seconds between place feed refreshes
    pub feed_refresh_seconds: u64,
    /// Safety margin in seconds before token expiry at which the
    /// session keeper refreshes proactively
    pub refresh_margin_seconds: i64,
    /// Number of items to retrieve per page in API requests
    pub page_size: u32,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period
    pub max_requests: u32,
    /// Time period in seconds for the rate limit
    pub period_seconds: u64,
    /// Burst size - maximum number of requests that can be made at once
    pub burst_size: u32,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration instance from environment variables
    ///
    /// Loads `.env` first, then reads each setting with a fallback
    /// default. Missing credentials are reported at error level but do
    /// not fail construction; login will reject them later.
    ///
    /// # Returns
    ///
    /// A new `Config` instance
    pub fn new() -> Self {
        // Explicitly load the .env file
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let username = get_env_or_default("PLACEMARK_USERNAME", String::from("default_username"));
        let password = get_env_or_default("PLACEMARK_PASSWORD", String::from("default_password"));

        // Check if we are using default values
        if username == "default_username" {
            error!("PLACEMARK_USERNAME not found in environment variables or .env file");
        }
        if password == "default_password" {
            error!("PLACEMARK_PASSWORD not found in environment variables or .env file");
        }

        Config {
            credentials: Credentials { username, password },
            rest_api: RestApiConfig {
                base_url: get_env_or_default(
                    "PLACEMARK_API_BASE_URL",
                    String::from("https://api.placemark.app/api/v1"),
                ),
                timeout: get_env_or_default("PLACEMARK_REST_TIMEOUT", 30),
                with_credentials: get_env_flag("PLACEMARK_WITH_CREDENTIALS", true),
            },
            sync: SyncConfig {
                feed_refresh_seconds: get_env_or_default(
                    "PLACEMARK_FEED_REFRESH_SECONDS",
                    DEFAULT_FEED_REFRESH_SECONDS,
                ),
                refresh_margin_seconds: get_env_or_default(
                    "PLACEMARK_REFRESH_MARGIN_SECONDS",
                    DEFAULT_REFRESH_MARGIN_SECONDS,
                ),
                page_size: get_env_or_default("PLACEMARK_PAGE_SIZE", DEFAULT_PAGE_SIZE),
            },
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default("PLACEMARK_RATE_LIMIT_MAX_REQUESTS", 60),
                period_seconds: get_env_or_default("PLACEMARK_RATE_LIMIT_PERIOD_SECONDS", 60),
                burst_size: get_env_or_default("PLACEMARK_RATE_LIMIT_BURST_SIZE", 20),
            },
        }
    }
}
