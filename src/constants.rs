/// Maximum number of consecutive handler errors before forcing a cooldown
pub const MAX_CONSECUTIVE_ERRORS: u32 = 3;
/// Cooldown time in seconds when hitting max errors (5 minutes)
pub const ERROR_COOLDOWN_SECONDS: u64 = 300;
/// Default interval in seconds between place feed refreshes (10 minutes)
pub const DEFAULT_FEED_REFRESH_SECONDS: u64 = 600;
/// Default safety margin in seconds before access-token expiry at which
/// the session keeper refreshes proactively (1 hour)
pub const DEFAULT_REFRESH_MARGIN_SECONDS: i64 = 3600;
/// Maximum random jitter in seconds added to handler sleep intervals
/// so a fleet of clients does not wake in lockstep
pub const MAX_SLEEP_JITTER_SECONDS: u64 = 30;
/// Default page size for paginated API requests
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Access-token lifetime in seconds granted by the API (14 days)
pub const ACCESS_TOKEN_LIFETIME_SECONDS: i64 = 14 * 24 * 3600;
/// Refresh-token lifetime in seconds granted by the API (31 days)
pub const REFRESH_TOKEN_LIFETIME_SECONDS: i64 = 31 * 24 * 3600;
/// User agent string used in HTTP requests to identify this client to the Placemark API
pub const USER_AGENT: &str = "placemark-client/0.3.1";
